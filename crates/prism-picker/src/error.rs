//! Error types for the picker model.

use std::fmt;

use prism_color::ColorError;

/// Failure to enumerate the spaces a catalog knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    /// What went wrong.
    pub message: String,
}

impl CatalogError {
    /// Create a catalog error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color space catalog unavailable: {}", self.message)
    }
}

impl std::error::Error for CatalogError {}

/// Errors surfaced by picker operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The color engine rejected an id or input.
    Color(ColorError),
    /// Space enumeration failed.
    Catalog(CatalogError),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<ColorError> for PickerError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<CatalogError> for PickerError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
