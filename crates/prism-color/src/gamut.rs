//! Gamut test and CSS Color 4 gamut mapping.

use palette::Oklab;
use palette::color_difference::EuclideanDistance;

use crate::color::Color;
use crate::space::ColorSpace;
use crate::spaces::{OKLAB, OKLCH, SRGB};

/// Slack allowed on bounded coordinates before a color counts as out of gamut.
pub const GAMUT_EPSILON: f64 = 0.000_075;

/// Just-noticeable difference in deltaE OK used by [`to_gamut`].
const JND: f64 = 0.02;

/// Chroma search resolution.
const CHROMA_EPSILON: f64 = 0.0001;

/// Whether `color` fits the gamut of `space`.
///
/// Unbounded spaces contain every color; polar RGB models defer to the RGB
/// space they are built on.
#[must_use]
pub fn in_gamut(color: &Color, space: &'static ColorSpace) -> bool {
    let Some(gamut) = space.gamut_space() else {
        return true;
    };
    let coords = color.to_space(gamut).coords;
    coords.iter().zip(&gamut.coords).all(|(&c, desc)| match desc.range {
        Some([min, max]) => c >= min - GAMUT_EPSILON && c <= max + GAMUT_EPSILON,
        None => true,
    })
}

/// Clamp each bounded coordinate of `color`, converted into `gamut`.
fn clip(color: &Color, gamut: &'static ColorSpace) -> Color {
    let mut out = color.to_space(gamut);
    for (c, desc) in out.coords.iter_mut().zip(&gamut.coords) {
        if let Some([min, max]) = desc.range {
            *c = if c.is_nan() { min } else { c.clamp(min, max) };
        }
    }
    out
}

fn oklab(color: &Color) -> Oklab<f64> {
    let [l, a, b] = color.to_space(&OKLAB).coords;
    Oklab::new(l, a, b)
}

/// Euclidean distance in OKLab (deltaE OK).
#[must_use]
pub fn delta_e_ok(a: &Color, b: &Color) -> f64 {
    oklab(a).distance(oklab(b))
}

/// Map `color` into the gamut of `space` by reducing OKLCh chroma until the
/// clipped result is within a just-noticeable difference.
///
/// The result is expressed in `color`'s own space.
#[must_use]
pub fn to_gamut(color: &Color, space: &'static ColorSpace) -> Color {
    let Some(gamut) = space.gamut_space() else {
        return *color;
    };
    if in_gamut(color, gamut) {
        return *color;
    }
    let home = color.space();

    let origin = color.to_space(&OKLCH);
    let lightness = origin.coords[0];
    if lightness >= 1.0 {
        let white = Color::in_space(&SRGB, [1.0; 3], color.alpha);
        return white.to_space(home);
    }
    if lightness <= 0.0 {
        let black = Color::in_space(&SRGB, [0.0; 3], color.alpha);
        return black.to_space(home);
    }

    let mut current = origin;
    let mut clipped = clip(&current, gamut);
    if delta_e_ok(&clipped, &current) < JND {
        return clipped.to_space(home);
    }

    let mut min = 0.0;
    let mut max = origin.coords[1];
    let mut min_in_gamut = true;
    while max - min > CHROMA_EPSILON {
        let chroma = (min + max) / 2.0;
        current.coords[1] = chroma;
        if min_in_gamut && in_gamut(&current, gamut) {
            min = chroma;
            continue;
        }
        clipped = clip(&current, gamut);
        let e = delta_e_ok(&clipped, &current);
        if e < JND {
            if JND - e < CHROMA_EPSILON {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }
    tracing::trace!(space = gamut.id, chroma = current.coords[1], "gamut mapped");
    clipped.to_space(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::{HSL, LAB, P3};

    #[test]
    fn unbounded_spaces_contain_everything() {
        let c = Color::in_space(&LAB, [50.0, 500.0, -500.0], 1.0);
        assert!(in_gamut(&c, &LAB));
    }

    #[test]
    fn srgb_bounds_with_epsilon() {
        assert!(in_gamut(&Color::in_space(&SRGB, [1.00005, 0.0, 0.0], 1.0), &SRGB));
        assert!(!in_gamut(&Color::in_space(&SRGB, [1.001, 0.0, 0.0], 1.0), &SRGB));
    }

    #[test]
    fn p3_red_is_outside_srgb() {
        let red = Color::in_space(&P3, [1.0, 0.0, 0.0], 1.0);
        assert!(in_gamut(&red, &P3));
        assert!(!in_gamut(&red, &SRGB));
    }

    #[test]
    fn hsl_delegates_to_srgb() {
        let inside = Color::in_space(&HSL, [0.0, 100.0, 50.0], 1.0);
        assert!(in_gamut(&inside, &HSL));
        let outside = Color::in_space(&HSL, [0.0, 200.0, 50.0], 1.0);
        assert!(!in_gamut(&outside, &HSL));
    }

    #[test]
    fn mapping_lands_in_gamut_and_keeps_space() {
        let red = Color::in_space(&P3, [1.0, 0.0, 0.0], 0.5);
        let mapped = to_gamut(&red, &SRGB);
        assert_eq!(mapped.space_id(), "p3");
        assert_eq!(mapped.alpha, 0.5);
        assert!(in_gamut(&mapped, &SRGB));
    }

    #[test]
    fn in_gamut_colors_are_untouched() {
        let c = Color::in_space(&SRGB, [0.2, 0.4, 0.6], 1.0);
        assert_eq!(to_gamut(&c, &SRGB), c);
    }

    #[test]
    fn extreme_lightness_maps_to_black_or_white() {
        let bright = Color::in_space(&LAB, [120.0, 0.0, 0.0], 1.0);
        let mapped = to_gamut(&bright, &SRGB).to_space(&SRGB);
        assert!(mapped.coords.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let dark = Color::in_space(&LAB, [-10.0, 0.0, 0.0], 1.0);
        let mapped = to_gamut(&dark, &SRGB).to_space(&SRGB);
        assert!(mapped.coords.iter().all(|c| c.abs() < 1e-6));
    }

    #[test]
    fn delta_e_of_identical_colors_is_zero() {
        let c = Color::in_space(&SRGB, [0.3, 0.6, 0.9], 1.0);
        assert!(delta_e_ok(&c, &c) < 1e-12);
    }

    #[test]
    fn delta_e_between_black_and_white_is_one() {
        let d = delta_e_ok(&Color::black(), &Color::white());
        assert!((d - 1.0).abs() < 1e-3, "{d}");
    }
}
