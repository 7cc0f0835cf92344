//! WCAG contrast checking and accessible color variant search.
//!
//! Converts between hex, sRGB and HSL, evaluates WCAG 2.x contrast, and
//! searches the HSL lightness axis for the nearest lighter or darker variant
//! of a color that is accessible against the color itself.

pub mod cli;
pub mod cli_args;
pub mod config;
pub mod convert;
pub mod error;
pub mod generate;
pub mod logging;
pub mod variant;
pub mod wcag;

pub use error::{Error, Result};
