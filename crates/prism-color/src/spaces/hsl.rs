//! Cylindrical sRGB models: HSL, HSV and HWB.
//!
//! Saturation, lightness, value, whiteness and blackness are stored in
//! percent units (`0..=100`); hue in degrees. The models themselves are
//! `palette`'s, which works in `0..=1`.

use palette::encoding;
use palette::convert::FromColorUnclamped;
use palette::{Hsl, Hsv, Hwb, Srgb};

use crate::math::constrain_angle;
use crate::space::{ColorSpace, CoordDescriptor, CoordSyntax, Format, Gamut, WhitePoint};

use super::rgb::SRGB;

type SrgbHsl = Hsl<encoding::Srgb, f64>;
type SrgbHsv = Hsv<encoding::Srgb, f64>;
type SrgbHwb = Hwb<encoding::Srgb, f64>;

fn rgb([r, g, b]: [f64; 3]) -> Srgb<f64> {
    Srgb::<f64>::new(r, g, b)
}

fn components(rgb: Srgb<f64>) -> [f64; 3] {
    [rgb.red, rgb.green, rgb.blue]
}

fn srgb_to_hsl(value: [f64; 3]) -> [f64; 3] {
    let hsl = SrgbHsl::from_color_unclamped(rgb(value));
    let mut h = hsl.hue.into_degrees();
    // Extended-range inputs at lightness 0 or 1 divide by zero.
    let mut s = if hsl.saturation.is_finite() { hsl.saturation } else { 0.0 };

    // Out-of-gamut inputs can produce negative saturation; flip the hue instead.
    if s < 0.0 {
        h += 180.0;
        s = s.abs();
    }
    [constrain_angle(h), s * 100.0, hsl.lightness * 100.0]
}

fn hsl_to_srgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let hsl = SrgbHsl::new(constrain_angle(h), s / 100.0, l / 100.0);
    components(Srgb::<f64>::from_color_unclamped(hsl))
}

fn srgb_to_hsv(value: [f64; 3]) -> [f64; 3] {
    let hsv = SrgbHsv::from_color_unclamped(rgb(value));
    [
        constrain_angle(hsv.hue.into_degrees()),
        hsv.saturation * 100.0,
        hsv.value * 100.0,
    ]
}

fn hsv_to_srgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    let hsv = SrgbHsv::new(constrain_angle(h), s / 100.0, v / 100.0);
    components(Srgb::<f64>::from_color_unclamped(hsv))
}

fn srgb_to_hwb(value: [f64; 3]) -> [f64; 3] {
    let hwb = SrgbHwb::from_color_unclamped(rgb(value));
    [
        constrain_angle(hwb.hue.into_degrees()),
        hwb.whiteness * 100.0,
        hwb.blackness * 100.0,
    ]
}

fn hwb_to_srgb([h, w, b]: [f64; 3]) -> [f64; 3] {
    let w = w / 100.0;
    let b = b / 100.0;
    // Whiteness and blackness summing past 1 normalize to a gray.
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray; 3];
    }
    components(Srgb::<f64>::from_color_unclamped(SrgbHwb::new(constrain_angle(h), w, b)))
}

static HSL_FORMATS: &[Format] = &[
    Format::function(
        "hsl",
        [CoordSyntax::Number, CoordSyntax::Percent, CoordSyntax::Percent],
        false,
    ),
    Format::function(
        "hsla",
        [CoordSyntax::Number, CoordSyntax::Percent, CoordSyntax::Percent],
        true,
    ),
    Format::COLOR,
];

static HWB_FORMATS: &[Format] = &[
    Format::function(
        "hwb",
        [CoordSyntax::Number, CoordSyntax::Percent, CoordSyntax::Percent],
        false,
    ),
    Format::COLOR,
];

static HSV_FORMATS: &[Format] = &[Format::COLOR];

/// HSL over sRGB.
pub static HSL: ColorSpace = ColorSpace {
    id: "hsl",
    name: "HSL",
    coords: [
        CoordDescriptor::hue(),
        CoordDescriptor::bounded("s", "Saturation", [0.0, 100.0]),
        CoordDescriptor::bounded("l", "Lightness", [0.0, 100.0]),
    ],
    base: Some(&SRGB),
    to_base: hsl_to_srgb,
    from_base: srgb_to_hsl,
    white: WhitePoint::D65,
    gamut: Gamut::Delegate(&SRGB),
    formats: HSL_FORMATS,
    css_id: "--hsl",
    css_native: true,
};

/// HSV over sRGB.
pub static HSV: ColorSpace = ColorSpace {
    id: "hsv",
    name: "HSV",
    coords: [
        CoordDescriptor::hue(),
        CoordDescriptor::bounded("s", "Saturation", [0.0, 100.0]),
        CoordDescriptor::bounded("v", "Value", [0.0, 100.0]),
    ],
    base: Some(&SRGB),
    to_base: hsv_to_srgb,
    from_base: srgb_to_hsv,
    white: WhitePoint::D65,
    gamut: Gamut::Delegate(&SRGB),
    formats: HSV_FORMATS,
    css_id: "--hsv",
    css_native: false,
};

/// HWB over sRGB.
pub static HWB: ColorSpace = ColorSpace {
    id: "hwb",
    name: "HWB",
    coords: [
        CoordDescriptor::hue(),
        CoordDescriptor::bounded("w", "Whiteness", [0.0, 100.0]),
        CoordDescriptor::bounded("b", "Blackness", [0.0, 100.0]),
    ],
    base: Some(&SRGB),
    to_base: hwb_to_srgb,
    from_base: srgb_to_hwb,
    white: WhitePoint::D65,
    gamut: Gamut::Delegate(&SRGB),
    formats: HWB_FORMATS,
    css_id: "--hwb",
    css_native: true,
};
