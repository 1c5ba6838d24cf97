#![forbid(unsafe_code)]

//! Color picker model for Prism.
//!
//! Everything a picker UI binds to, without the UI:
//! - [`ColorPicker`] - the edited color, slider writes, space switching
//! - [`SpaceRegistry`] - the spaces a user may pick from
//! - [`CoordMeta`] - slider ranges and step sizes per coordinate
//! - [`gradient_stops`] - CSS gradient stops for every slider
//! - [`ContrastLines`] - gamut boundary lines over a hue/chroma grid
//! - [`contrast_color`] - black or white text for a background
//! - [`DisplayState`] - output format selection and serialization
//! - [`PickerConfig`] / [`ConfigStore`] - per-picker settings
//! - [`RangeInput`] - numeric input clamping
//!
//! # Example
//! ```
//! use prism_color::Color;
//! use prism_picker::{ColorPicker, DisplayState, GradientOptions};
//!
//! let picker = ColorPicker::new(Color::new("hsl", [0.0, 100.0, 50.0], 1.0).unwrap());
//! let display = DisplayState::new(picker.observable());
//! assert_eq!(display.serialized(), "hsl(0 100% 50%)");
//!
//! picker.set_space_id("srgb").unwrap();
//! assert_eq!(display.format().as_deref(), Some("rgb"));
//! assert_eq!(display.serialized(), "rgb(255 0 0)");
//!
//! // One gradient per coordinate plus alpha.
//! assert_eq!(picker.gradient_stops(&GradientOptions::default()).len(), 4);
//! ```

pub mod clamp;
pub mod config;
pub mod contrast;
pub mod contrast_lines;
pub mod coords;
pub mod display;
pub mod error;
pub mod gradient;
pub mod picker;
pub mod reactive;
pub mod registry;

pub use clamp::{RangeInput, clamp_to_range};
pub use config::{ConfigStore, Layout, PickerConfig};
pub use contrast::{contrast_color, maximum_contrast_combination, optimal_grayscale_contrast};
pub use contrast_lines::{BoundaryLine, ContrastLines};
pub use coords::{CoordMeta, STEP_RESOLUTION, coords_meta, create_coord_meta};
pub use display::{DisplayState, formats};
pub use error::{CatalogError, PickerError};
pub use gradient::{DEFAULT_GRADIENT_STEPS, GradientOptions, gradient_stops};
pub use picker::{ColorPicker, CoordInput};
pub use reactive::{Memo, Observable, Subscription};
pub use registry::{
    BuiltinCatalog, COLOR_SPACES, ColorSpaceItem, SpaceCatalog, SpaceRegistry, list_color_spaces,
};
