//! CIE Lab, LCh and Luv families.

use palette::white_point::{D50, D65};
use palette::convert::FromColorUnclamped;
use palette::{Lab, Lch, Lchuv, Luv, Xyz};

use crate::math::polar_hue;
use crate::space::{ColorSpace, CoordDescriptor, CoordSyntax, Format, Gamut, WhitePoint};

use super::xyz::{XYZ_D50, XYZ_D65};

/// Chroma below which LCh hue is reported as 0.
const ACHROMATIC: f64 = 0.02;

fn xyz_to_lab<Wp>([x, y, z]: [f64; 3]) -> [f64; 3]
where
    Lab<Wp, f64>: FromColorUnclamped<Xyz<Wp, f64>>,
{
    let lab = Lab::<Wp, f64>::from_color_unclamped(Xyz::<Wp, f64>::new(x, y, z));
    [lab.l, lab.a, lab.b]
}

fn lab_to_xyz<Wp>([l, a, b]: [f64; 3]) -> [f64; 3]
where
    Xyz<Wp, f64>: FromColorUnclamped<Lab<Wp, f64>>,
{
    let xyz = Xyz::<Wp, f64>::from_color_unclamped(Lab::<Wp, f64>::new(l, a, b));
    [xyz.x, xyz.y, xyz.z]
}

fn lab_to_lch([l, a, b]: [f64; 3]) -> [f64; 3] {
    let lch = Lch::<D50, f64>::from_color_unclamped(Lab::<D50, f64>::new(l, a, b));
    [lch.l, lch.chroma, polar_hue(lch.chroma, lch.hue.into_degrees(), ACHROMATIC)]
}

fn lch_to_lab([l, c, h]: [f64; 3]) -> [f64; 3] {
    let lab = Lab::<D50, f64>::from_color_unclamped(Lch::<D50, f64>::new(l, c.max(0.0), h));
    [lab.l, lab.a, lab.b]
}

fn xyz_to_luv([x, y, z]: [f64; 3]) -> [f64; 3] {
    // Black has no chromaticity.
    if y <= 0.0 || x + 15.0 * y + 3.0 * z == 0.0 {
        return [0.0; 3];
    }
    let luv = Luv::<D65, f64>::from_color_unclamped(Xyz::<D65, f64>::new(x, y, z));
    [luv.l, luv.u, luv.v]
}

fn luv_to_xyz([l, u, v]: [f64; 3]) -> [f64; 3] {
    if l <= 0.0 {
        return [0.0; 3];
    }
    let xyz = Xyz::<D65, f64>::from_color_unclamped(Luv::<D65, f64>::new(l, u, v));
    [xyz.x, xyz.y, xyz.z]
}

fn luv_to_lchuv([l, u, v]: [f64; 3]) -> [f64; 3] {
    let lch = Lchuv::<D65, f64>::from_color_unclamped(Luv::<D65, f64>::new(l, u, v));
    [lch.l, lch.chroma, polar_hue(lch.chroma, lch.hue.into_degrees(), ACHROMATIC)]
}

fn lchuv_to_luv([l, c, h]: [f64; 3]) -> [f64; 3] {
    let luv = Luv::<D65, f64>::from_color_unclamped(Lchuv::<D65, f64>::new(l, c.max(0.0), h));
    [luv.l, luv.u, luv.v]
}

const LAB_COORDS: [CoordDescriptor; 3] = [
    CoordDescriptor::reference("l", Some("Lightness"), [0.0, 100.0]),
    CoordDescriptor::reference("a", None, [-125.0, 125.0]),
    CoordDescriptor::reference("b", None, [-125.0, 125.0]),
];

const LCH_COORDS: [CoordDescriptor; 3] = [
    CoordDescriptor::reference("l", Some("Lightness"), [0.0, 100.0]),
    CoordDescriptor::reference("c", Some("Chroma"), [0.0, 150.0]),
    CoordDescriptor::hue(),
];

static LAB_FORMATS: &[Format] = &[
    Format::function("lab", [CoordSyntax::Number; 3], false),
    Format::COLOR,
];

static LCH_FORMATS: &[Format] = &[
    Format::function("lch", [CoordSyntax::Number; 3], false),
    Format::COLOR,
];

static COLOR_ONLY: &[Format] = &[Format::COLOR];

/// CIE Lab relative to D50 (the CSS `lab()` space).
pub static LAB: ColorSpace = ColorSpace {
    id: "lab",
    name: "Lab",
    coords: LAB_COORDS,
    base: Some(&XYZ_D50),
    to_base: lab_to_xyz::<D50>,
    from_base: xyz_to_lab::<D50>,
    white: WhitePoint::D50,
    gamut: Gamut::Unbounded,
    formats: LAB_FORMATS,
    css_id: "--lab",
    css_native: true,
};

/// Polar form of [`LAB`].
pub static LCH: ColorSpace = ColorSpace {
    id: "lch",
    name: "LCH",
    coords: LCH_COORDS,
    base: Some(&LAB),
    to_base: lch_to_lab,
    from_base: lab_to_lch,
    white: WhitePoint::D50,
    gamut: Gamut::Unbounded,
    formats: LCH_FORMATS,
    css_id: "--lch",
    css_native: true,
};

/// CIE Lab relative to D65.
pub static LAB_D65: ColorSpace = ColorSpace {
    id: "lab-d65",
    name: "Lab D65",
    coords: LAB_COORDS,
    base: Some(&XYZ_D65),
    to_base: lab_to_xyz::<D65>,
    from_base: xyz_to_lab::<D65>,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: COLOR_ONLY,
    css_id: "--lab-d65",
    css_native: false,
};

/// CIE Luv relative to D65.
pub static LUV: ColorSpace = ColorSpace {
    id: "luv",
    name: "Luv",
    coords: [
        CoordDescriptor::reference("l", Some("Lightness"), [0.0, 100.0]),
        CoordDescriptor::reference("u", None, [-215.0, 215.0]),
        CoordDescriptor::reference("v", None, [-215.0, 215.0]),
    ],
    base: Some(&XYZ_D65),
    to_base: luv_to_xyz,
    from_base: xyz_to_luv,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: COLOR_ONLY,
    css_id: "--luv",
    css_native: false,
};

/// Polar form of [`LUV`].
pub static LCHUV: ColorSpace = ColorSpace {
    id: "lchuv",
    name: "LChuv",
    coords: [
        CoordDescriptor::reference("l", Some("Lightness"), [0.0, 100.0]),
        CoordDescriptor::reference("c", Some("Chroma"), [0.0, 220.0]),
        CoordDescriptor::hue(),
    ],
    base: Some(&LUV),
    to_base: lchuv_to_luv,
    from_base: luv_to_lchuv,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: COLOR_ONLY,
    css_id: "--lchuv",
    css_native: false,
};
