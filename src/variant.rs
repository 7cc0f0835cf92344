//! Accessible variant search along the HSL lightness axis.
//!
//! Candidates are produced by lightening (or darkening) the base color in
//! fixed steps and tested against the *base color itself*. The first passing
//! candidate wins, so the result is the smallest lightness change that meets
//! the requirements. If no step passes, pure white (lighten) or pure black
//! (darken) is tried before giving up.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::convert::{Hsl, hex_to_hsl, hsl_to_hex};
use crate::error::{Error, Result};
use crate::wcag::{ConformanceCheck, ContrastRequirements, passes_wcag};

/// Default lightness step between candidates.
pub const DEFAULT_STEP: f64 = 0.05;

/// Smallest accepted step; bounds a search to `MAX_CANDIDATES` steps.
pub const MIN_STEP: f64 = 0.01;

/// Upper bound on lightness candidates per search, excluding the fallback.
pub const MAX_CANDIDATES: usize = 100;

/// Candidates stop once the factor reaches 1.0 (within this tolerance).
const FACTOR_EPSILON: f64 = 1e-9;

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Which way to move along the lightness axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    /// Extreme color tried when every lightness step fails.
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Lighten => WHITE,
            Self::Darken => BLACK,
        }
    }

    /// Move `hsl` by `factor` in this direction, clamping at 0.0/1.0.
    pub fn apply(self, hsl: Hsl, factor: f64) -> Hsl {
        match self {
            Self::Lighten => hsl.with_lightness((hsl.lightness + factor).min(1.0)),
            Self::Darken => hsl.with_lightness((hsl.lightness - factor).max(0.0)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lighten => write!(f, "lighten"),
            Self::Darken => write!(f, "darken"),
        }
    }
}

/// One accessible variant search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRequest {
    pub base_color: String,
    pub requirements: ContrastRequirements,
    pub direction: Direction,
}

impl VariantRequest {
    pub fn new(
        base_color: impl Into<String>,
        requirements: ContrastRequirements,
        direction: Direction,
    ) -> Self {
        Self {
            base_color: base_color.into(),
            requirements,
            direction,
        }
    }

    /// Conformance check of `candidate` (foreground) against the base color.
    pub fn check_for(&self, candidate: &str) -> ConformanceCheck {
        ConformanceCheck::with_requirements(candidate, self.base_color.clone(), self.requirements)
    }
}

/// Tuning for the lightness search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Lightness increment between candidates (0.0-1.0 exclusive)
    pub step: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl SearchOptions {
    pub fn new(step: f64) -> Result<Self> {
        let options = Self { step };
        options.validate()?;
        Ok(options)
    }

    /// Reject steps outside `[MIN_STEP, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.step.is_finite() && self.step >= MIN_STEP && self.step < 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidSearchStep(self.step))
        }
    }

    /// Lightness factors to try, smallest first.
    ///
    /// Factors are `i * step` rather than a running sum, so the default step
    /// yields exactly 0.05, 0.10, ... 0.95.
    pub fn factors(&self) -> impl Iterator<Item = f64> {
        let step = self.step;
        (1..=MAX_CANDIDATES)
            .map(move |i| i as f64 * step)
            .take_while(|factor| *factor < 1.0 - FACTOR_EPSILON)
    }
}

/// Decides whether a candidate is acceptable for a request.
pub trait AcceptanceTest {
    fn accepts(&self, candidate: &str, request: &VariantRequest) -> Result<bool>;
}

/// Accepts candidates that meet the request's WCAG level against the base color.
#[derive(Debug, Clone, Copy, Default)]
pub struct WcagAcceptance;

impl AcceptanceTest for WcagAcceptance {
    fn accepts(&self, candidate: &str, request: &VariantRequest) -> Result<bool> {
        passes_wcag(&request.check_for(candidate))
    }
}

impl<F> AcceptanceTest for F
where
    F: Fn(&str, &VariantRequest) -> Result<bool>,
{
    fn accepts(&self, candidate: &str, request: &VariantRequest) -> Result<bool> {
        self(candidate, request)
    }
}

/// Find the nearest accessible variant using the default step and WCAG test.
///
/// # Example
///
/// ```
/// use accessible_shades::variant::{Direction, VariantRequest, find_accessible_variant};
/// use accessible_shades::wcag::ContrastRequirements;
///
/// let requirements = ContrastRequirements::default();
/// let request = VariantRequest::new("#944B89", requirements, Direction::Lighten);
/// assert_eq!(find_accessible_variant(&request).unwrap(), "#f4eaf3");
/// ```
pub fn find_accessible_variant(request: &VariantRequest) -> Result<String> {
    find_accessible_variant_with(request, &SearchOptions::default(), &WcagAcceptance)
}

/// Find the nearest accessible variant with explicit options and acceptance test.
///
/// Fails with `InvalidColorFormat` for a malformed base, `InvalidSearchStep`
/// for bad options, and `NoAccessibleVariant` once the fallback also fails.
pub fn find_accessible_variant_with(
    request: &VariantRequest,
    options: &SearchOptions,
    test: &impl AcceptanceTest,
) -> Result<String> {
    find_accessible_variant_from(request, options, test, 0.0)
}

/// Like [`find_accessible_variant_with`], skipping factors below `min_factor`.
///
/// Used to look for a second, further variant in the same direction.
#[cfg_attr(
    debug_assertions,
    instrument(
        skip(request, options, test),
        fields(base = %request.base_color, direction = %request.direction)
    )
)]
pub fn find_accessible_variant_from(
    request: &VariantRequest,
    options: &SearchOptions,
    test: &impl AcceptanceTest,
    min_factor: f64,
) -> Result<String> {
    options.validate()?;
    let base = hex_to_hsl(&request.base_color)?;

    let factors = options
        .factors()
        .filter(|factor| *factor >= min_factor - FACTOR_EPSILON);
    for factor in factors {
        let candidate = hsl_to_hex(request.direction.apply(base, factor));
        let accepted = test.accepts(&candidate, request)?;
        debug!(factor, %candidate, accepted, "evaluated candidate");
        if accepted {
            return Ok(candidate);
        }
    }

    let fallback = request.direction.fallback();
    if test.accepts(fallback, request)? {
        debug!(%fallback, "lightness steps exhausted, using extreme fallback");
        return Ok(fallback.to_string());
    }

    Err(Error::NoAccessibleVariant {
        base: request.base_color.clone(),
        direction: request.direction,
    })
}
