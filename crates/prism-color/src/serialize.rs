//! String serialization of colors.
//!
//! | Format kind | Output |
//! |-------------|--------|
//! | function    | `rgb(255 0 0 / 0.5)`, `hsla(0, 100%, 50%, 1)` |
//! | color       | `color(display-p3 1 0 0)` |
//! | hex         | `#ff0000`, `#ff000080` |
//! | keyword     | `red`, falling back to the default format |
//!
//! Numbers are rounded to a number of significant digits; non-finite values
//! are written as `0` so output never contains `NaN`.

use std::fmt::Write as _;

use crate::color::Color;
use crate::named;
use crate::space::{CoordSyntax, Format, FormatKind};

/// Default number of significant digits.
pub const DEFAULT_PRECISION: usize = 5;

/// Options for [`Color::serialize`](crate::Color::serialize).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializeOptions {
    /// Format name; `None` or an unknown name selects the space default.
    pub format: Option<String>,
    /// Significant digits; `0` writes numbers unrounded.
    pub precision: usize,
    /// Map the color into its space's gamut before writing.
    pub in_gamut: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            format: None,
            precision: DEFAULT_PRECISION,
            in_gamut: false,
        }
    }
}

impl SerializeOptions {
    /// Options selecting a named format.
    #[must_use]
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..Self::default()
        }
    }
}

/// Most significant digits an `f64` carries; larger precisions are capped.
pub const MAX_PRECISION: usize = 17;

/// Round `n` to `precision` significant digits (integer digits count first).
///
/// `precision == 0` returns `n` unchanged. Precisions above
/// [`MAX_PRECISION`] round like [`MAX_PRECISION`].
#[must_use]
pub fn to_precision(n: f64, precision: usize) -> f64 {
    if n == 0.0 || precision == 0 || !n.is_finite() {
        return n;
    }
    let precision = precision.min(MAX_PRECISION);
    let integer = n.trunc();
    let digits = if integer == 0.0 {
        0
    } else {
        integer.abs().log10().trunc() as i32 + 1
    };
    let exp = precision as i32 - digits;
    if exp >= 0 {
        let mult = 10f64.powi(exp);
        let rounded = (n * mult + 0.5).floor() / mult;
        if rounded.is_finite() { rounded } else { n }
    } else {
        let div = 10f64.powi(-exp);
        (n / div + 0.5).floor() * div
    }
}

/// Format a number for output: rounded, `NaN`/infinite as `0`, no `-0`.
#[must_use]
pub fn format_number(n: f64, precision: usize) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let rounded = to_precision(n, precision);
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub(crate) fn serialize(color: &Color, options: &SerializeOptions) -> String {
    let color = if options.in_gamut {
        color.to_gamut(None)
    } else {
        *color
    };
    let space = color.space();
    let format = options
        .format
        .as_deref()
        .and_then(|name| space.format(name))
        .unwrap_or_else(|| space.default_format());
    write_format(&color, format, options.precision)
}

fn write_format(color: &Color, format: &Format, precision: usize) -> String {
    let space = color.space();
    match format.kind {
        FormatKind::Function {
            name,
            coords,
            commas,
        } => function(name, color, coords, commas, precision),
        FormatKind::Color => {
            let mut out = format!("color({}", space.css_id);
            for c in color.coords {
                let _ = write!(out, " {}", format_number(c, precision));
            }
            push_alpha(&mut out, color.alpha, precision);
            out.push(')');
            out
        }
        FormatKind::Hex => hex(color),
        FormatKind::Keyword => match named::name_of(color) {
            Some(name) => name.to_string(),
            None => write_format(color, space.default_format(), precision),
        },
    }
}

fn function(
    name: &str,
    color: &Color,
    syntax: [CoordSyntax; 3],
    commas: bool,
    precision: usize,
) -> String {
    let tokens: Vec<String> = color
        .coords
        .iter()
        .zip(syntax)
        .map(|(&c, syntax)| match syntax {
            CoordSyntax::Number => format_number(c, precision),
            CoordSyntax::Percent => format!("{}%", format_number(c, precision)),
            CoordSyntax::Byte => format_number(c * 255.0, precision),
        })
        .collect();
    if commas {
        let alpha = format_number(color.alpha, precision);
        format!("{name}({}, {alpha})", tokens.join(", "))
    } else {
        let mut out = format!("{name}({}", tokens.join(" "));
        push_alpha(&mut out, color.alpha, precision);
        out.push(')');
        out
    }
}

fn push_alpha(out: &mut String, alpha: f64, precision: usize) {
    if alpha < 1.0 {
        let _ = write!(out, " / {}", format_number(alpha, precision));
    }
}

/// 8-bit channel value, clamped.
pub(crate) fn byte(v: f64) -> u8 {
    if v.is_finite() {
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

fn hex(color: &Color) -> String {
    let [r, g, b] = color.coords.map(byte);
    let mut out = format!("#{r:02x}{g:02x}{b:02x}");
    if color.alpha < 1.0 {
        let _ = write!(out, "{:02x}", byte(color.alpha));
    }
    out
}
