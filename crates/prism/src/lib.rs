#![forbid(unsafe_code)]

//! Prism public facade crate.
//!
//! Re-exports the color engine and the picker model, and offers a prelude
//! for day-to-day usage.

use std::fmt;

// --- Color re-exports ------------------------------------------------------

pub use prism_color::{
    Color, ColorError, ColorSpace, CoordDescriptor, CoordKind, HueMode, SerializeOptions,
    StepsOptions, convert, format_number, mix, steps,
};

// --- Picker re-exports -----------------------------------------------------

pub use prism_picker::{
    BoundaryLine, ColorPicker, ColorSpaceItem, ConfigStore, ContrastLines, CoordInput, CoordMeta,
    DisplayState, GradientOptions, Layout, Observable, PickerConfig, PickerError, RangeInput,
    SpaceRegistry, Subscription, clamp_to_range, contrast_color, coords_meta, create_coord_meta,
    formats, gradient_stops, list_color_spaces, maximum_contrast_combination,
    optimal_grayscale_contrast,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Prism.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Engine failure (unknown space, unparsable color).
    Color(ColorError),
    /// Picker failure.
    Picker(PickerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Picker(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Picker(err) => Some(err),
        }
    }
}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<PickerError> for Error {
    fn from(err: PickerError) -> Self {
        Self::Picker(err)
    }
}

/// Standard result type for Prism APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, ColorPicker, ColorSpace, ContrastLines, DisplayState, Error, GradientOptions,
        PickerConfig, Result, SerializeOptions,
    };

    pub use crate::{color, picker};
}

pub use prism_color as color;
pub use prism_picker as picker;
