use palette::Xyz;
use palette::chromatic_adaptation::AdaptFrom;
use palette::white_point::{D50, D65};

use crate::space::{ColorSpace, CoordDescriptor, Format, Gamut, WhitePoint};

use super::identity;

pub(crate) type XyzD65 = Xyz<D65, f64>;
pub(crate) type XyzD50 = Xyz<D50, f64>;

/// Bradford adaptation from D50 to D65.
pub(crate) fn d50_to_d65([x, y, z]: [f64; 3]) -> [f64; 3] {
    let xyz = <XyzD65 as AdaptFrom<XyzD50, D50, D65, f64>>::adapt_from(XyzD50::new(x, y, z));
    [xyz.x, xyz.y, xyz.z]
}

/// Bradford adaptation from D65 to D50.
pub(crate) fn d65_to_d50([x, y, z]: [f64; 3]) -> [f64; 3] {
    let xyz = <XyzD50 as AdaptFrom<XyzD65, D65, D50, f64>>::adapt_from(XyzD65::new(x, y, z));
    [xyz.x, xyz.y, xyz.z]
}

/// Luminance of media white for absolute XYZ, in cd/m².
const ABSOLUTE_WHITE: f64 = 203.0;

static XYZ_FORMATS: &[Format] = &[Format::COLOR];

/// CIE XYZ relative to D65. The connection space.
pub static XYZ_D65: ColorSpace = ColorSpace {
    id: "xyz-d65",
    name: "XYZ D65",
    coords: [
        CoordDescriptor::reference("x", Some("X"), [0.0, 1.0]),
        CoordDescriptor::reference("y", Some("Y"), [0.0, 1.0]),
        CoordDescriptor::reference("z", Some("Z"), [0.0, 1.0]),
    ],
    base: None,
    to_base: identity,
    from_base: identity,
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: XYZ_FORMATS,
    css_id: "xyz-d65",
    css_native: true,
};

/// CIE XYZ relative to D50.
pub static XYZ_D50: ColorSpace = ColorSpace {
    id: "xyz-d50",
    name: "XYZ D50",
    coords: [
        CoordDescriptor::reference("x", Some("X"), [0.0, 1.0]),
        CoordDescriptor::reference("y", Some("Y"), [0.0, 1.0]),
        CoordDescriptor::reference("z", Some("Z"), [0.0, 1.0]),
    ],
    base: Some(&XYZ_D65),
    to_base: d50_to_d65,
    from_base: d65_to_d50,
    white: WhitePoint::D50,
    gamut: Gamut::Unbounded,
    formats: XYZ_FORMATS,
    css_id: "xyz-d50",
    css_native: true,
};

/// Absolute XYZ (D65) in cd/m².
pub static XYZ_ABS_D65: ColorSpace = ColorSpace {
    id: "xyz-abs-d65",
    name: "Absolute XYZ D65",
    coords: [
        CoordDescriptor::reference("x", Some("Xa"), [0.0, 9504.7]),
        CoordDescriptor::reference("y", Some("Ya"), [0.0, 10000.0]),
        CoordDescriptor::reference("z", Some("Za"), [0.0, 10888.3]),
    ],
    base: Some(&XYZ_D65),
    to_base: |[x, y, z]| {
        [
            (x / ABSOLUTE_WHITE).max(0.0),
            (y / ABSOLUTE_WHITE).max(0.0),
            (z / ABSOLUTE_WHITE).max(0.0),
        ]
    },
    from_base: |[x, y, z]| {
        [
            (x * ABSOLUTE_WHITE).max(0.0),
            (y * ABSOLUTE_WHITE).max(0.0),
            (z * ABSOLUTE_WHITE).max(0.0),
        ]
    },
    white: WhitePoint::D65,
    gamut: Gamut::Unbounded,
    formats: XYZ_FORMATS,
    css_id: "--xyz-abs-d65",
    css_native: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptation_round_trips() {
        let v = [0.3, 0.6, 0.9];
        let back = d50_to_d65(d65_to_d50(v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-9, "{back:?}");
        }
    }

    #[test]
    fn d65_white_adapts_to_d50_white() {
        let d50 = d65_to_d50(WhitePoint::D65.xyz());
        let expected = WhitePoint::D50.xyz();
        for i in 0..3 {
            assert!((d50[i] - expected[i]).abs() < 1e-6, "{d50:?}");
        }
    }

    #[test]
    fn absolute_scales_by_media_white() {
        let abs = (XYZ_ABS_D65.from_base)([1.0, 1.0, 1.0]);
        assert_eq!(abs, [203.0, 203.0, 203.0]);
        assert_eq!((XYZ_ABS_D65.to_base)(abs), [1.0, 1.0, 1.0]);
    }
}
