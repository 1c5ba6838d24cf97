//! Error type for the color engine.

use std::fmt;

/// Errors produced by space lookup and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// No built-in space has this id.
    UnknownSpace {
        /// The id that was requested.
        id: String,
    },
    /// A color string could not be parsed.
    Parse {
        /// The offending input.
        input: String,
        /// What went wrong.
        reason: &'static str,
    },
}

impl ColorError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSpace { id } => write!(f, "unknown color space {id:?}"),
            Self::Parse { input, reason } => {
                write!(f, "cannot parse color {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ColorError {}
