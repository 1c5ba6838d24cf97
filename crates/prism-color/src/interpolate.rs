//! Interpolation between two colors.
//!
//! Colors are converted into the interpolation space, alpha is
//! premultiplied into the non-hue coordinates, and hue coordinates are
//! adjusted according to a [`HueMode`] before interpolating linearly.

use crate::color::Color;
use crate::math::{constrain_angle, lerp};
use crate::space::ColorSpace;
use crate::spaces::OKLAB;

/// How hue angles are interpolated in polar spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueMode {
    /// Take the shorter arc (at most 180 degrees).
    #[default]
    Shorter,
    /// Take the longer arc.
    Longer,
    /// Always increase the angle.
    Increasing,
    /// Always decrease the angle.
    Decreasing,
    /// Interpolate the stored numbers without any wrapping.
    Raw,
}

impl HueMode {
    /// Adjust a pair of hue angles for interpolation.
    #[must_use]
    pub fn adjust(self, h1: f64, h2: f64) -> (f64, f64) {
        if self == Self::Raw {
            return (h1, h2);
        }
        let (mut a1, mut a2) = (constrain_angle(h1), constrain_angle(h2));
        let diff = a2 - a1;
        match self {
            Self::Increasing => {
                if diff < 0.0 {
                    a2 += 360.0;
                }
            }
            Self::Decreasing => {
                if diff > 0.0 {
                    a1 += 360.0;
                }
            }
            Self::Longer => {
                if -180.0 < diff && diff < 180.0 {
                    if diff > 0.0 {
                        a1 += 360.0;
                    } else {
                        a2 += 360.0;
                    }
                }
            }
            Self::Shorter => {
                if diff > 180.0 {
                    a1 += 360.0;
                } else if diff < -180.0 {
                    a2 += 360.0;
                }
            }
            Self::Raw => {}
        }
        (a1, a2)
    }
}

/// Options for [`steps`] and [`mix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepsOptions {
    /// Interpolation space.
    pub space: &'static ColorSpace,
    /// Number of colors produced by [`steps`]; values below 1 count as 1.
    pub steps: usize,
    /// Hue interpolation mode for polar spaces.
    pub hue: HueMode,
    /// Premultiply alpha into non-hue coordinates.
    pub premultiplied: bool,
}

impl Default for StepsOptions {
    fn default() -> Self {
        Self {
            space: &OKLAB,
            steps: 2,
            hue: HueMode::default(),
            premultiplied: true,
        }
    }
}

impl StepsOptions {
    /// Options interpolating in `space`.
    #[must_use]
    pub fn in_space(space: &'static ColorSpace) -> Self {
        Self {
            space,
            ..Self::default()
        }
    }

    /// Set the number of steps.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the hue mode.
    #[must_use]
    pub fn hue(mut self, hue: HueMode) -> Self {
        self.hue = hue;
        self
    }
}

/// Interpolate between `a` and `b` at progress `p`.
///
/// The result is expressed in `a`'s space.
#[must_use]
pub fn mix(a: &Color, b: &Color, p: f64, options: &StepsOptions) -> Color {
    let space = options.space;
    let from = a.to_space(space);
    let to = b.to_space(space);
    let hue = space.hue_index();

    let mut c1 = from.coords;
    let mut c2 = to.coords;
    if let Some(h) = hue {
        let (h1, h2) = options.hue.adjust(c1[h], c2[h]);
        c1[h] = h1;
        c2[h] = h2;
    }

    let alpha = lerp(from.alpha, to.alpha, p);
    let premultiply = options.premultiplied && alpha != 0.0;
    if premultiply {
        for i in (0..3).filter(|&i| Some(i) != hue) {
            c1[i] *= from.alpha;
            c2[i] *= to.alpha;
        }
    }

    let mut coords = [0.0; 3];
    for i in 0..3 {
        coords[i] = lerp(c1[i], c2[i], p);
        if premultiply && Some(i) != hue {
            coords[i] /= alpha;
        }
    }
    if let Some(h) = hue {
        coords[h] = if options.hue == HueMode::Raw {
            coords[h]
        } else {
            constrain_angle(coords[h])
        };
    }

    Color::in_space(space, coords, alpha).to_space(a.space())
}

/// `options.steps` evenly spaced colors from `a` to `b`, both ends included.
///
/// A single step yields the midpoint.
#[must_use]
pub fn steps(a: &Color, b: &Color, options: &StepsOptions) -> Vec<Color> {
    let count = options.steps.max(1);
    if count == 1 {
        return vec![mix(a, b, 0.5, options)];
    }
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| mix(a, b, i as f64 / last, options))
        .collect()
}
