//! CSS named colors (a common subset) and `transparent`.

use crate::color::Color;
use crate::serialize::byte;
use crate::spaces::SRGB;

/// Named colors as 8-bit sRGB. The first name wins when two share a value.
static NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("aqua", [0, 255, 255]),
    ("cyan", [0, 255, 255]),
    ("fuchsia", [255, 0, 255]),
    ("magenta", [255, 0, 255]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("green", [0, 128, 0]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("navy", [0, 0, 128]),
    ("orange", [255, 165, 0]),
    ("rebeccapurple", [102, 51, 153]),
    ("gold", [255, 215, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("coral", [255, 127, 80]),
    ("crimson", [220, 20, 60]),
    ("indigo", [75, 0, 130]),
    ("violet", [238, 130, 238]),
    ("tomato", [255, 99, 71]),
    ("salmon", [250, 128, 114]),
    ("khaki", [240, 230, 140]),
    ("orchid", [218, 112, 214]),
    ("turquoise", [64, 224, 208]),
    ("skyblue", [135, 206, 235]),
    ("steelblue", [70, 130, 180]),
    ("slategray", [112, 128, 144]),
    ("darkgray", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("whitesmoke", [245, 245, 245]),
];

/// Look up a keyword (case-insensitive).
#[must_use]
pub fn lookup(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Color::in_space(&SRGB, [0.0; 3], 0.0));
    }
    NAMED.iter().find(|(n, _)| *n == name).map(|(_, rgb)| {
        Color::in_space(&SRGB, rgb.map(|v| f64::from(v) / 255.0), 1.0)
    })
}

/// Keyword for an sRGB color, if one matches at 8-bit resolution.
#[must_use]
pub fn name_of(color: &Color) -> Option<&'static str> {
    if color.space() != &SRGB {
        return None;
    }
    let rgb = color.coords.map(byte);
    if color.alpha == 0.0 && rgb == [0, 0, 0] {
        return Some("transparent");
    }
    if color.alpha < 1.0 {
        return None;
    }
    NAMED.iter().find(|(_, v)| *v == rgb).map(|(n, _)| *n)
}
