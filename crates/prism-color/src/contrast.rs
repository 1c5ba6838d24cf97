//! Contrast metrics: APCA (0.0.98G-4g constants) and the WCAG 2.1 ratio.

use crate::color::Color;
use crate::spaces::SRGB;

// APCA constants.
const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;
const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const LO_CLIP: f64 = 0.1;
const DELTA_Y_MIN: f64 = 0.0005;
const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_OFFSET: f64 = 0.027;

fn linearize(v: f64) -> f64 {
    let v = if v.is_nan() { 0.0 } else { v };
    v.signum() * v.abs().powf(2.4)
}

/// APCA screen luminance of a color (simple 2.4 gamma on sRGB).
fn screen_luminance(color: &Color) -> f64 {
    let [r, g, b] = color.to_space(&SRGB).coords.map(linearize);
    r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175_0
}

/// Soft clamp for near-black luminance.
fn soft_clamp(y: f64) -> f64 {
    if y >= BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// APCA Lc of `foreground` text on `background`, scaled to roughly ±108.
///
/// Positive values mean dark text on a light background.
#[must_use]
pub fn apca(background: &Color, foreground: &Color) -> f64 {
    let y_txt = soft_clamp(screen_luminance(foreground));
    let y_bg = soft_clamp(screen_luminance(background));

    let c = if (y_bg - y_txt).abs() < DELTA_Y_MIN {
        0.0
    } else if y_bg > y_txt {
        (y_bg.powf(NORM_BG) - y_txt.powf(NORM_TXT)) * SCALE_BOW
    } else {
        (y_bg.powf(REV_BG) - y_txt.powf(REV_TXT)) * SCALE_WOB
    };

    let lc = if c.abs() < LO_CLIP {
        0.0
    } else if c > 0.0 {
        c - LO_OFFSET
    } else {
        c + LO_OFFSET
    };
    lc * 100.0
}

/// WCAG 2.1 contrast ratio between two colors, in `1..=21`.
#[must_use]
pub fn wcag21(a: &Color, b: &Color) -> f64 {
    let y1 = a.luminance().max(0.0);
    let y2 = b.luminance().max(0.0);
    let (hi, lo) = if y1 >= y2 { (y1, y2) } else { (y2, y1) };
    (hi + 0.05) / (lo + 0.05)
}
