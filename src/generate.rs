//! Palette assembly: a base color plus its nearest accessible neighbours.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::convert::{darken_color, hex_to_rgb, lighten_color};
use crate::error::{Error, Result};
use crate::variant::{
    Direction, SearchOptions, VariantRequest, WcagAcceptance, find_accessible_variant_from,
    find_accessible_variant_with,
};
use crate::wcag::ContrastRequirements;

/// Placeholder stored in `Palette::lighter` when no lighter variant passes.
pub const NO_LIGHTER_VARIANT: &str = "No accessible lighter variant found";
/// Placeholder stored in `Palette::darker` when no darker variant passes.
pub const NO_DARKER_VARIANT: &str = "No accessible darker variant found";

/// Factor the second search in a one-sided palette starts from.
pub const SECOND_SEARCH_START: f64 = 0.5;

/// Lightness added to (or removed from) the first variant when the second
/// search finds nothing new.
pub const SECOND_VARIANT_SHIFT: f64 = 0.1;

/// Request for a three-color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub base_color: String,
    pub requirements: ContrastRequirements,
}

impl PaletteRequest {
    pub fn new(base_color: impl Into<String>, requirements: ContrastRequirements) -> Self {
        Self {
            base_color: base_color.into(),
            requirements,
        }
    }

    fn variant(&self, direction: Direction) -> VariantRequest {
        VariantRequest::new(self.base_color.clone(), self.requirements, direction)
    }
}

/// Base color with its accessible lighter and darker variants.
///
/// `lighter`/`darker` hold either a `#rrggbb` color or the matching
/// placeholder constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// The requested base color, exactly as given
    pub base: String,
    pub lighter: String,
    pub darker: String,
}

impl Palette {
    pub fn has_lighter(&self) -> bool {
        self.lighter != NO_LIGHTER_VARIANT
    }

    pub fn has_darker(&self) -> bool {
        self.darker != NO_DARKER_VARIANT
    }
}

/// Palette that spends both variant slots on one side when the other fails.
///
/// Serializes flat: `{base, lighter, darker}`, `{base, lighter1, lighter2}`
/// or `{base, darker1, darker2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtendedPalette {
    /// Both directions found a variant, or neither did
    Standard(Palette),
    Lighter {
        base: String,
        lighter1: String,
        lighter2: String,
    },
    Darker {
        base: String,
        darker1: String,
        darker2: String,
    },
}

impl ExtendedPalette {
    pub fn base(&self) -> &str {
        match self {
            Self::Standard(palette) => &palette.base,
            Self::Lighter { base, .. } | Self::Darker { base, .. } => base,
        }
    }
}

fn placeholder(direction: Direction) -> &'static str {
    match direction {
        Direction::Lighten => NO_LIGHTER_VARIANT,
        Direction::Darken => NO_DARKER_VARIANT,
    }
}

/// Run one direction, degrading `NoAccessibleVariant` to its placeholder.
fn variant_or_placeholder(
    request: &PaletteRequest,
    direction: Direction,
    options: &SearchOptions,
) -> Result<String> {
    match find_accessible_variant_with(&request.variant(direction), options, &WcagAcceptance) {
        Ok(color) => Ok(color),
        Err(e @ Error::NoAccessibleVariant { .. }) => {
            warn!(base = %request.base_color, %direction, "{e}");
            Ok(placeholder(direction).to_string())
        }
        Err(e) => Err(e),
    }
}

/// Generate a palette with the default search options.
///
/// # Example
///
/// ```
/// use accessible_shades::generate::{NO_DARKER_VARIANT, PaletteRequest, generate_palette};
/// use accessible_shades::wcag::ContrastRequirements;
///
/// let request = PaletteRequest::new("#944B89", ContrastRequirements::default());
/// let palette = generate_palette(&request).unwrap();
/// assert_eq!(palette.base, "#944B89");
/// assert_eq!(palette.lighter, "#f4eaf3");
/// assert_eq!(palette.darker, NO_DARKER_VARIANT);
/// ```
pub fn generate_palette(request: &PaletteRequest) -> Result<Palette> {
    generate_palette_with(request, &SearchOptions::default())
}

/// Generate a palette, searching both directions independently.
///
/// Only a malformed base color or invalid options produce an error; a failed
/// direction never prevents the other from being reported.
pub fn generate_palette_with(request: &PaletteRequest, options: &SearchOptions) -> Result<Palette> {
    hex_to_rgb(&request.base_color)?;
    options.validate()?;

    let lighter = variant_or_placeholder(request, Direction::Lighten, options)?;
    let darker = variant_or_placeholder(request, Direction::Darken, options)?;

    Ok(Palette {
        base: request.base_color.clone(),
        lighter,
        darker,
    })
}

/// Search one direction, treating `NoAccessibleVariant` as `None`.
fn try_variant(
    request: &PaletteRequest,
    direction: Direction,
    options: &SearchOptions,
    min_factor: f64,
) -> Result<Option<String>> {
    let variant = request.variant(direction);
    match find_accessible_variant_from(&variant, options, &WcagAcceptance, min_factor) {
        Ok(color) => Ok(Some(color)),
        Err(Error::NoAccessibleVariant { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Second variant further along `direction` than `first`.
///
/// Searches again from `SECOND_SEARCH_START`; if that fails or lands on
/// `first`, shifts `first` by `SECOND_VARIANT_SHIFT` instead.
fn second_variant(
    request: &PaletteRequest,
    direction: Direction,
    first: &str,
    options: &SearchOptions,
) -> Result<String> {
    if let Some(candidate) = try_variant(request, direction, options, SECOND_SEARCH_START)? {
        if !candidate.eq_ignore_ascii_case(first) {
            return Ok(candidate);
        }
    }

    debug!(%first, %direction, "second search found nothing new, shifting first variant");
    match direction {
        Direction::Lighten => lighten_color(first, SECOND_VARIANT_SHIFT),
        Direction::Darken => darken_color(first, SECOND_VARIANT_SHIFT),
    }
}

/// Generate a palette that fills both slots from one side when only that
/// side has an accessible variant.
///
/// When both or neither direction succeed the result is the same as
/// [`generate_palette_with`].
///
/// # Example
///
/// ```
/// use accessible_shades::generate::{ExtendedPalette, PaletteRequest, generate_extended_palette};
/// use accessible_shades::variant::SearchOptions;
/// use accessible_shades::wcag::ContrastRequirements;
///
/// let request = PaletteRequest::new("#BADA55", ContrastRequirements::default());
/// let palette = generate_extended_palette(&request, &SearchOptions::default()).unwrap();
/// assert_eq!(
///     palette,
///     ExtendedPalette::Darker {
///         base: "#BADA55".to_string(),
///         darker1: "#425112".to_string(),
///         darker2: "#202709".to_string(),
///     }
/// );
/// ```
pub fn generate_extended_palette(
    request: &PaletteRequest,
    options: &SearchOptions,
) -> Result<ExtendedPalette> {
    hex_to_rgb(&request.base_color)?;
    options.validate()?;

    let lighter = try_variant(request, Direction::Lighten, options, 0.0)?;
    let darker = try_variant(request, Direction::Darken, options, 0.0)?;

    match (lighter, darker) {
        (Some(lighter1), None) => {
            warn!(base = %request.base_color, "no darker variant, using two lighter variants");
            let lighter2 = second_variant(request, Direction::Lighten, &lighter1, options)?;
            Ok(ExtendedPalette::Lighter {
                base: request.base_color.clone(),
                lighter1,
                lighter2,
            })
        }
        (None, Some(darker1)) => {
            warn!(base = %request.base_color, "no lighter variant, using two darker variants");
            let darker2 = second_variant(request, Direction::Darken, &darker1, options)?;
            Ok(ExtendedPalette::Darker {
                base: request.base_color.clone(),
                darker1,
                darker2,
            })
        }
        (lighter, darker) => Ok(ExtendedPalette::Standard(Palette {
            base: request.base_color.clone(),
            lighter: lighter.unwrap_or_else(|| NO_LIGHTER_VARIANT.to_string()),
            darker: darker.unwrap_or_else(|| NO_DARKER_VARIANT.to_string()),
        })),
    }
}

/// Generate palettes for many base colors in parallel.
///
/// Results are returned in request order; each request fails or succeeds on
/// its own.
pub fn generate_palettes(
    requests: &[PaletteRequest],
    options: &SearchOptions,
) -> Vec<Result<Palette>> {
    requests
        .par_iter()
        .map(|request| generate_palette_with(request, options))
        .collect()
}
