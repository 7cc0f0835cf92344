//! Error types shared by the conversion, contrast and search modules.

use crate::variant::Direction;

/// Errors produced by color parsing and accessible variant search.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input is not a `#RRGGBB` hex color
    InvalidColorFormat(String),
    /// Neither the lightness search nor the black/white fallback passed
    NoAccessibleVariant { base: String, direction: Direction },
    /// Search step outside [0.01, 1)
    InvalidSearchStep(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColorFormat(s) => write!(f, "Invalid hex color provided: \"{}\"", s),
            Self::NoAccessibleVariant { base, direction } => {
                write!(f, "No accessible {} variant found for {}", direction, base)
            }
            Self::InvalidSearchStep(step) => {
                write!(f, "Search step must be in [0.01, 1), got {}", step)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
