//! Text color selection by APCA contrast.
//!
//! The base color is always the background. Candidates are compared by
//! their signed APCA Lc, so dark text (positive Lc) outranks light text
//! (negative Lc) on every base.

use prism_color::Color;

fn lc(base: &Color, candidate: &Color) -> f64 {
    base.contrast_apca(candidate)
}

/// Black when its signed Lc on `base` is greater than white's, else white.
#[must_use]
pub fn optimal_grayscale_contrast(base: &Color) -> Color {
    let black = Color::black();
    let white = Color::white();
    if lc(base, &black) > lc(base, &white) {
        black
    } else {
        white
    }
}

/// The candidate with the greatest signed Lc on `base`, starting from black.
///
/// A candidate only replaces the current best when strictly greater, so
/// an empty list (or one no better than black) yields black.
#[must_use]
pub fn maximum_contrast_combination(base: &Color, candidates: &[Color]) -> Color {
    let mut best = Color::black();
    let mut best_lc = lc(base, &best);
    for candidate in candidates {
        let value = lc(base, candidate);
        if value > best_lc {
            best = *candidate;
            best_lc = value;
        }
    }
    best
}

/// Text color for `base`; same as [`optimal_grayscale_contrast`].
#[must_use]
pub fn contrast_color(base: &Color) -> Color {
    optimal_grayscale_contrast(base)
}
