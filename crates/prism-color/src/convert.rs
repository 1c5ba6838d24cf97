//! Conversion between spaces.
//!
//! Each space only knows its base. A conversion walks up from the source
//! until it reaches a space on the target's chain, then walks down that
//! chain. Converting between siblings (HSL to HWB) therefore stops at sRGB
//! instead of detouring through XYZ. The individual steps are `palette`
//! conversions wherever `palette` has the space.

use crate::space::ColorSpace;

/// Convert raw coordinates from `from` into `to`.
#[must_use]
pub fn convert(from: &'static ColorSpace, to: &'static ColorSpace, coords: [f64; 3]) -> [f64; 3] {
    if from == to {
        return coords;
    }

    let target_path = to.path();
    let mut current = from;
    let mut coords = coords;

    let meeting = loop {
        if let Some(index) = target_path.iter().position(|s| *s == current) {
            break index;
        }
        coords = (current.to_base)(coords);
        match current.base {
            Some(base) => current = base,
            // Every chain ends at the connection space, which is on every target path.
            None => break target_path.len() - 1,
        }
    };

    for space in target_path[..meeting].iter().rev() {
        coords = (space.from_base)(coords);
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::{HSL, HWB, LAB, OKLCH, P3, SRGB, XYZ_D50, XYZ_D65};

    fn assert_close(actual: [f64; 3], expected: [f64; 3], tol: f64) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < tol,
                "{actual:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn same_space_is_identity() {
        assert_eq!(convert(&SRGB, &SRGB, [0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn sibling_conversion_stays_on_srgb() {
        let hwb = convert(&HSL, &HWB, [120.0, 100.0, 50.0]);
        assert_close(hwb, [120.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn srgb_white_to_xyz() {
        let xyz = convert(&SRGB, &XYZ_D65, [1.0, 1.0, 1.0]);
        assert_close(xyz, [0.950_47, 1.0, 1.088_83], 1e-4);
    }

    #[test]
    fn srgb_red_to_lab_d50() {
        let lab = convert(&SRGB, &LAB, [1.0, 0.0, 0.0]);
        assert_close(lab, [54.29, 80.81, 69.89], 0.1);
    }

    #[test]
    fn srgb_red_to_oklch() {
        let [l, c, h] = convert(&SRGB, &OKLCH, [1.0, 0.0, 0.0]);
        assert_close([l, c, 0.0], [0.628, 0.258, 0.0], 2e-3);
        assert!((h - 29.23).abs() < 0.1, "{h}");
    }

    #[test]
    fn srgb_green_is_inside_p3() {
        let p3 = convert(&SRGB, &P3, [0.0, 1.0, 0.0]);
        assert_close(p3, [0.458_4, 0.985_3, 0.298_3], 1e-3);
    }

    #[test]
    fn d50_round_trip() {
        let xyz = [0.3, 0.5, 0.2];
        let back = convert(&XYZ_D50, &XYZ_D65, convert(&XYZ_D65, &XYZ_D50, xyz));
        assert_close(back, xyz, 1e-9);
    }

    #[test]
    fn every_space_keeps_white_neutral() {
        for space in ColorSpace::all() {
            let there = convert(&SRGB, space, [1.0, 1.0, 1.0]);
            let back = convert(space, &SRGB, there);
            assert_close(back, [1.0, 1.0, 1.0], 1e-6);
        }
        assert_close(convert(&SRGB, &P3, [1.0, 1.0, 1.0]), [1.0, 1.0, 1.0], 1e-6);
    }

    #[test]
    fn long_round_trip_through_every_space() {
        let rgb = [0.25, 0.5, 0.75];
        for space in ColorSpace::all() {
            let there = convert(&SRGB, space, rgb);
            let back = convert(space, &SRGB, there);
            assert_close(back, rgb, 1e-6);
        }
    }
}
