#![forbid(unsafe_code)]

//! Color engine for Prism.
//!
//! This crate provides the color-science primitives the picker model is
//! built on. Space conversions run on [`palette`]; this crate adds the
//! CSS layer (space table, parsing, serialization, hue-mode interpolation,
//! gamut mapping and APCA):
//! - [`ColorSpace`] - static space table with coordinate descriptors and formats
//! - [`Color`] - a color value in a specific space
//! - [`convert()`] - conversion along the space graph (root: `xyz-d65`)
//! - [`steps`] - interpolation with hue fix-up modes
//! - [`SerializeOptions`] - string output in CSS formats
//! - [`gamut`] - gamut test and CSS Color 4 gamut mapping
//! - [`contrast`] - APCA and WCAG 2.1 contrast
//!
//! # Example
//! ```
//! use prism_color::{Color, SerializeOptions};
//!
//! let red: Color = "#ff0000".parse().unwrap();
//! assert_eq!(red.serialize(&SerializeOptions::default()), "rgb(255 0 0)");
//!
//! let hsl = red.to("hsl").unwrap();
//! assert_eq!(hsl.display(), "hsl(0 100% 50%)");
//!
//! // Dark text on white is positive, light text on black negative.
//! assert!(Color::white().contrast_apca(&Color::black()) > 100.0);
//! ```

mod math;

pub mod color;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod gamut;
pub mod interpolate;
pub mod named;
pub mod parse;
pub mod serialize;
pub mod space;
pub mod spaces;

pub use color::Color;
pub use convert::convert;
pub use error::ColorError;
pub use interpolate::{HueMode, StepsOptions, mix, steps};
pub use serialize::{
    DEFAULT_PRECISION, MAX_PRECISION, SerializeOptions, format_number, to_precision,
};
pub use space::{
    ColorSpace, CoordDescriptor, CoordKind, CoordSyntax, Format, FormatKind, Gamut, WhitePoint,
};
