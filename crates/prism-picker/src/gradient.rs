//! Slider gradient stops.
//!
//! Each coordinate gets a list of colors sweeping that coordinate from its
//! slider minimum to maximum while the other coordinates and alpha stay
//! fixed, serialized with [`Color::display`] and joined with `", "` so the
//! result drops straight into a CSS `linear-gradient()`.

use prism_color::{Color, ColorSpace, HueMode, StepsOptions};

use crate::coords::CoordMeta;

/// Samples per gradient unless configured otherwise.
pub const DEFAULT_GRADIENT_STEPS: usize = 10;

/// Gradient sampling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientOptions {
    /// Samples per gradient; clamped to at least 1.
    pub steps: usize,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_GRADIENT_STEPS,
        }
    }
}

/// One gradient per coordinate followed by the alpha gradient.
#[must_use]
pub fn gradient_stops(
    space: &'static ColorSpace,
    coords: [f64; 3],
    alpha: f64,
    metas: &[CoordMeta],
    options: &GradientOptions,
) -> Vec<String> {
    let mut stops: Vec<String> = metas
        .iter()
        .enumerate()
        .map(|(index, meta)| coord_gradient(space, coords, alpha, index, meta, options))
        .collect();
    stops.push(alpha_gradient(space, coords, options));
    stops
}

/// Sweep coordinate `index` across `meta.min..=meta.max`.
#[must_use]
pub fn coord_gradient(
    space: &'static ColorSpace,
    coords: [f64; 3],
    alpha: f64,
    index: usize,
    meta: &CoordMeta,
    options: &GradientOptions,
) -> String {
    let mut start = coords;
    let mut end = coords;
    if let (Some(s), Some(e)) = (start.get_mut(index), end.get_mut(index)) {
        *s = meta.min;
        *e = meta.max;
    }
    let hue = if meta.is_hue {
        HueMode::Raw
    } else {
        HueMode::default()
    };
    let steps = StepsOptions::in_space(space)
        .steps(options.steps.max(1))
        .hue(hue);
    join(
        &Color::in_space(space, start, alpha),
        &Color::in_space(space, end, alpha),
        &steps,
    )
}

/// Sweep alpha from 0 to 1 with the coordinates fixed.
#[must_use]
pub fn alpha_gradient(space: &'static ColorSpace, coords: [f64; 3], options: &GradientOptions) -> String {
    let steps = StepsOptions::in_space(space).steps(options.steps.max(1));
    join(
        &Color::in_space(space, coords, 0.0),
        &Color::in_space(space, coords, 1.0),
        &steps,
    )
}

fn join(start: &Color, end: &Color, options: &StepsOptions) -> String {
    start
        .steps(end, options)
        .iter()
        .map(Color::display)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::coords_meta;
    use prism_color::spaces::{HSL, OKLCH, SRGB};

    fn tokens(stop: &str) -> Vec<&str> {
        stop.split(", ").collect()
    }

    #[test]
    fn one_entry_per_coordinate_plus_alpha() {
        let metas = coords_meta(&SRGB);
        let stops = gradient_stops(&SRGB, [0.2, 0.4, 0.6], 1.0, &metas, &GradientOptions::default());
        assert_eq!(stops.len(), 4);
        for stop in &stops {
            assert_eq!(tokens(stop).len(), DEFAULT_GRADIENT_STEPS);
        }
    }

    #[test]
    fn red_channel_sweep() {
        let metas = coords_meta(&SRGB);
        let options = GradientOptions { steps: 2 };
        let stop = coord_gradient(&SRGB, [0.5, 0.0, 0.0], 1.0, 0, &metas[0], &options);
        assert_eq!(stop, "rgb(0 0 0), rgb(255 0 0)");
    }

    #[test]
    fn hue_sweeps_the_full_circle() {
        let metas = coords_meta(&HSL);
        let options = GradientOptions { steps: 3 };
        let stop = coord_gradient(&HSL, [120.0, 100.0, 50.0], 1.0, 0, &metas[0], &options);
        assert_eq!(stop, "hsl(0 100% 50%), hsl(180 100% 50%), hsl(360 100% 50%)");
    }

    #[test]
    fn alpha_sweep_keeps_color() {
        let options = GradientOptions { steps: 3 };
        let stop = alpha_gradient(&SRGB, [1.0, 0.0, 0.0], &options);
        assert_eq!(
            stop,
            "rgb(255 0 0 / 0), rgb(255 0 0 / 0.5), rgb(255 0 0)"
        );
    }

    #[test]
    fn zero_steps_clamps_to_one() {
        let metas = coords_meta(&OKLCH);
        let stops = gradient_stops(&OKLCH, [0.5, 0.1, 30.0], 1.0, &metas, &GradientOptions { steps: 0 });
        assert!(stops.iter().all(|s| tokens(s).len() == 1));
    }

    #[test]
    fn degenerate_range_repeats_token() {
        let mut metas = coords_meta(&SRGB);
        metas[1].min = 0.5;
        metas[1].max = 0.5;
        let stop = coord_gradient(&SRGB, [0.0, 0.0, 0.0], 1.0, 1, &metas[1], &GradientOptions::default());
        let t = tokens(&stop);
        assert!(t.iter().all(|token| *token == t[0]));
    }

    #[test]
    fn nan_never_leaks() {
        let metas = coords_meta(&OKLCH);
        let stops = gradient_stops(&OKLCH, [f64::NAN, 0.0, f64::NAN], f64::NAN, &metas, &GradientOptions::default());
        assert!(stops.iter().all(|s| !s.contains("NaN")));
    }
}
