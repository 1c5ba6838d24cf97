//! Built-in space definitions.
//!
//! The table covers the spaces a picker offers day to day: the CIE
//! connection spaces, the CSS predefined RGB spaces, the sRGB cylinder
//! models, CIE Lab/LCh/Luv and OKLab/OKLCh.

mod hsl;
mod lab;
mod oklab;
mod rgb;
mod xyz;

use crate::space::ColorSpace;

pub use hsl::{HSL, HSV, HWB};
pub use lab::{LAB, LAB_D65, LCH, LCHUV, LUV};
pub use oklab::{OKLAB, OKLCH};
pub use rgb::{
    A98RGB, A98RGB_LINEAR, P3, P3_LINEAR, PROPHOTO, PROPHOTO_LINEAR, REC2020, REC2020_LINEAR,
    SRGB, SRGB_LINEAR,
};
pub use xyz::{XYZ_ABS_D65, XYZ_D50, XYZ_D65};

/// Every built-in space, in the order they are enumerated.
pub static ALL: &[&ColorSpace] = &[
    &XYZ_D65,
    &XYZ_D50,
    &XYZ_ABS_D65,
    &SRGB_LINEAR,
    &SRGB,
    &HSL,
    &HSV,
    &HWB,
    &LAB,
    &LCH,
    &LAB_D65,
    &LUV,
    &LCHUV,
    &OKLAB,
    &OKLCH,
    &P3_LINEAR,
    &P3,
    &REC2020_LINEAR,
    &REC2020,
    &A98RGB_LINEAR,
    &A98RGB,
    &PROPHOTO_LINEAR,
    &PROPHOTO,
];

fn identity(v: [f64; 3]) -> [f64; 3] {
    v
}
