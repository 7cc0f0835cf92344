//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Formulas follow the WCAG 2.0 definitions, including the 0.03928
//! linearisation threshold, so results match published contrast checkers.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::convert::hex_to_rgb;
use crate::error::Result;

/// Luminance weights for linear sRGB
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// sRGB linearisation breakpoint (WCAG 2.0 value)
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Flare term added to both luminances
const FLARE: f64 = 0.05;

/// WCAG contrast thresholds.
pub mod thresholds {
    /// Large text at any level (AA large)
    pub const LARGE_TEXT: f64 = 3.0;
    /// Normal text at level AA
    pub const AA_NORMAL: f64 = 4.5;
    /// Normal text at level AAA
    pub const AAA_NORMAL: f64 = 7.0;
    /// Large text at level AAA (success criterion 1.4.6)
    pub const AAA_LARGE: f64 = 4.5;
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Minimum contrast
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    Aa,
    /// Enhanced contrast
    #[serde(rename = "AAA", alias = "aaa")]
    Aaa,
}

impl Level {
    /// Minimum contrast ratio required for this level and text size.
    ///
    /// Large text needs 3.0 regardless of level; otherwise AAA needs 7.0 and
    /// AA needs 4.5.
    pub fn threshold(self, is_large_text: bool) -> f64 {
        if is_large_text {
            thresholds::LARGE_TEXT
        } else if self == Level::Aaa {
            thresholds::AAA_NORMAL
        } else {
            thresholds::AA_NORMAL
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// Level and text size a color pair is judged against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastRequirements {
    /// Conformance level (default AA)
    pub level: Level,
    /// Text is at least 18pt, or 14pt bold (default false)
    pub is_large_text: bool,
}

impl ContrastRequirements {
    pub fn new(level: Level, is_large_text: bool) -> Self {
        Self {
            level,
            is_large_text,
        }
    }

    /// Contrast ratio a pair must reach.
    pub fn threshold(&self) -> f64 {
        self.level.threshold(self.is_large_text)
    }
}

/// A single foreground/background contrast question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceCheck {
    pub foreground: String,
    pub background: String,
    pub level: Level,
    pub is_large_text: bool,
}

impl ConformanceCheck {
    /// Check at level AA for normal-size text.
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self::with_requirements(foreground, background, ContrastRequirements::default())
    }

    pub fn with_requirements(
        foreground: impl Into<String>,
        background: impl Into<String>,
        requirements: ContrastRequirements,
    ) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            level: requirements.level,
            is_large_text: requirements.is_large_text,
        }
    }

    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    pub fn large_text(self, is_large_text: bool) -> Self {
        Self {
            is_large_text,
            ..self
        }
    }

    pub fn requirements(&self) -> ContrastRequirements {
        ContrastRequirements::new(self.level, self.is_large_text)
    }
}

/// Linearise a single 8-bit sRGB channel.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance (0.0 for black, 1.0 for white).
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    COEF_R * linearize(color.red) + COEF_G * linearize(color.green) + COEF_B * linearize(color.blue)
}

/// Compute the contrast ratio from two pre-computed luminances.
///
/// Order does not matter: the lighter luminance is always the numerator.
pub fn contrast_from_luminances(a: f64, b: f64) -> f64 {
    let lighter = a.max(b);
    let darker = a.min(b);
    (lighter + FLARE) / (darker + FLARE)
}

/// Contrast ratio between two sRGB colors, in 1.0-21.0.
pub fn contrast_ratio_rgb(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    contrast_from_luminances(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two hex colors.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use accessible_shades::wcag::contrast_ratio;
///
/// let ratio = contrast_ratio("#FFFFFF", "#000000").unwrap();
/// assert_relative_eq!(ratio, 21.0, epsilon = 1e-9);
/// ```
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

/// Whether a pair meets the check's level and text size.
pub fn passes_wcag(check: &ConformanceCheck) -> Result<bool> {
    let ratio = contrast_ratio(&check.foreground, &check.background)?;
    Ok(ratio >= check.requirements().threshold())
}

/// Contrast ratio with a verdict for every level/text-size combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn new(foreground: &str, background: &str) -> Result<Self> {
        let ratio = contrast_ratio(foreground, background)?;
        Ok(Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio,
            aa: ratio >= thresholds::AA_NORMAL,
            aa_large: ratio >= thresholds::LARGE_TEXT,
            aaa: ratio >= thresholds::AAA_NORMAL,
            aaa_large: ratio >= thresholds::AAA_LARGE,
        })
    }

    /// Verdict for one level/text-size combination.
    pub fn passes(&self, requirements: ContrastRequirements) -> bool {
        self.ratio >= requirements.threshold()
    }
}
