//! Conversions between `#rrggbb` hex strings, sRGB and HSL.
//!
//! HSL here follows the CSS convention with hue expressed as a fraction of a
//! full turn (0.0-1.0) rather than degrees. Lightening and darkening happen on
//! the HSL lightness axis.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// HSL color with every component in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue as a fraction of 360 degrees, in [0, 1)
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees (0-360).
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }

    /// Copy of this color with lightness replaced, clamped to 0.0-1.0.
    pub fn with_lightness(self, lightness: f64) -> Self {
        Self {
            lightness: lightness.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Parse a `#RRGGBB` hex string (either case) into sRGB.
///
/// Shorthand (`#fff`), missing `#`, whitespace and non-hex digits are all
/// rejected rather than coerced.
///
/// # Example
///
/// ```
/// use accessible_shades::convert::hex_to_rgb;
///
/// let rgb = hex_to_rgb("#944B89").unwrap();
/// assert_eq!((rgb.red, rgb.green, rgb.blue), (0x94, 0x4b, 0x89));
/// assert!(hex_to_rgb("944B89").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::InvalidColorFormat(hex.to_string()))?;

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidColorFormat(hex.to_string()))?;

    Ok(Srgb::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Format sRGB as lowercase `#rrggbb`.
pub fn rgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Validate a hex color and return it lowercased.
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Convert sRGB to HSL using the min/max channel method.
pub fn rgb_to_hsl(color: Srgb<u8>) -> Hsl {
    let r = color.red as f64 / 255.0;
    let g = color.green as f64 / 255.0;
    let b = color.blue as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Sector offsets: red 0 (wrapping past 6), green 2, blue 4
    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(hue / 6.0, saturation, lightness)
}

/// Parse a hex color and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Interpolate one channel between the lower (`p`) and upper (`q`) bounds.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale a 0.0-1.0 channel to 0-255, rounding half away from zero.
#[inline]
fn channel_to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert HSL back to sRGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Srgb<u8> {
    if hsl.saturation == 0.0 {
        let gray = channel_to_u8(hsl.lightness);
        return Srgb::new(gray, gray, gray);
    }

    let l = hsl.lightness;
    let s = hsl.saturation;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Srgb::new(
        channel_to_u8(hue_to_channel(p, q, hsl.hue + 1.0 / 3.0)),
        channel_to_u8(hue_to_channel(p, q, hsl.hue)),
        channel_to_u8(hue_to_channel(p, q, hsl.hue - 1.0 / 3.0)),
    )
}

/// Convert HSL to lowercase `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Raise HSL lightness by `factor` (clamped to 0.0-1.0), saturating at white.
pub fn lighten_color(hex: &str, factor: f64) -> Result<String> {
    let hsl = hex_to_hsl(hex)?;
    let factor = factor.clamp(0.0, 1.0);
    Ok(hsl_to_hex(hsl.with_lightness((hsl.lightness + factor).min(1.0))))
}

/// Lower HSL lightness by `factor` (clamped to 0.0-1.0), saturating at black.
pub fn darken_color(hex: &str, factor: f64) -> Result<String> {
    let hsl = hex_to_hsl(hex)?;
    let factor = factor.clamp(0.0, 1.0);
    Ok(hsl_to_hex(hsl.with_lightness((hsl.lightness - factor).max(0.0))))
}
