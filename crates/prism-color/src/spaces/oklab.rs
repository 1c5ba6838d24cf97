//! OKLab and its polar form OKLCh.

use palette::convert::FromColorUnclamped;
use palette::{Oklab, Oklch};

use crate::math::polar_hue;
use crate::space::{ColorSpace, CoordDescriptor, CoordSyntax, Format, Gamut, WhitePoint};

use super::xyz::{XYZ_D65, XyzD65};

/// Chroma below which OKLCh hue is reported as 0.
const ACHROMATIC: f64 = 0.000_2;

fn xyz_to_oklab([x, y, z]: [f64; 3]) -> [f64; 3] {
    let lab = Oklab::<f64>::from_color_unclamped(XyzD65::new(x, y, z));
    [lab.l, lab.a, lab.b]
}

fn oklab_to_xyz([l, a, b]: [f64; 3]) -> [f64; 3] {
    let xyz = XyzD65::from_color_unclamped(Oklab::<f64>::new(l, a, b));
    [xyz.x, xyz.y, xyz.z]
}

fn oklab_to_oklch([l, a, b]: [f64; 3]) -> [f64; 3] {
    let lch = Oklch::<f64>::from_color_unclamped(Oklab::<f64>::new(l, a, b));
    [lch.l, lch.chroma, polar_hue(lch.chroma, lch.hue.into_degrees(), ACHROMATIC)]
}

fn oklch_to_oklab([l, c, h]: [f64; 3]) -> [f64; 3] {
    let lab = Oklab::<f64>::from_color_unclamped(Oklch::<f64>::new(l, c.max(0.0), h));
    [lab.l, lab.a, lab.b]
}

static OKLAB_FORMATS: &[Format] = &[
    Format::function("oklab", [CoordSyntax::Number; 3], false),
    Format::COLOR,
];

static OKLCH_FORMATS: &[Format] = &[
    Format::function("oklch", [CoordSyntax::Number; 3], false),
    Format::COLOR,
];

/// OKLab (Björn Ottosson, 2020).
pub static OKLAB: ColorSpace = ColorSpace {
    id: "oklab",
    name: "Oklab",
    coords: [
        CoordDescriptor::reference("l", Some("Lightness"), [0.0, 1.0]),
        CoordDescriptor::reference("a", None, [-0.4, 0.4]),
        CoordDescriptor::reference("b", None, [-0.4, 0.4]),
    ],
    base: Some(&XYZ_D65),
    to_base: oklab_to_xyz,
    from_base: xyz_to_oklab,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: OKLAB_FORMATS,
    css_id: "--oklab",
    css_native: true,
};

/// Polar form of [`OKLAB`].
pub static OKLCH: ColorSpace = ColorSpace {
    id: "oklch",
    name: "Oklch",
    coords: [
        CoordDescriptor::reference("l", Some("Lightness"), [0.0, 1.0]),
        CoordDescriptor::reference("c", Some("Chroma"), [0.0, 0.4]),
        CoordDescriptor::hue(),
    ],
    base: Some(&OKLAB),
    to_base: oklch_to_oklab,
    from_base: oklab_to_oklch,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: OKLCH_FORMATS,
    css_id: "--oklch",
    css_native: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d65_white_is_l1_neutral() {
        let lab = xyz_to_oklab(WhitePoint::D65.xyz());
        assert!((lab[0] - 1.0).abs() < 1e-4, "{lab:?}");
        assert!(lab[1].abs() < 1e-4);
        assert!(lab[2].abs() < 1e-4);
    }

    #[test]
    fn oklab_round_trip() {
        let xyz = [0.25, 0.4, 0.6];
        let back = oklab_to_xyz(xyz_to_oklab(xyz));
        for i in 0..3 {
            assert!((back[i] - xyz[i]).abs() < 1e-6, "{back:?}");
        }
    }

    #[test]
    fn white_has_no_hue() {
        let lch = oklab_to_oklch(xyz_to_oklab(WhitePoint::D65.xyz()));
        assert_eq!(lch[2], 0.0);
    }
}
