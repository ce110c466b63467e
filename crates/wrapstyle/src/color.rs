//! Background color resolution.
//!
//! Colors arrive as a hex value plus an opacity, from one of three sources
//! tried in priority order:
//!
//! 1. The value stored on the record being rendered
//! 2. The default configured for the field
//! 3. The hardcoded fallback, opaque white
//!
//! The selected color is converted to a CSS `rgba()` value and emitted as a
//! single `background-color` declaration.
//!
//! # Example
//!
//! ```rust
//! use wrapstyle::{build_style_declaration, hex_to_rgba, resolve_color, ColorSpec};
//!
//! assert_eq!(hex_to_rgba("#ffffff", 1.0).unwrap(), "rgba(255, 255, 255, 1)");
//! assert_eq!(hex_to_rgba("000", 0.5).unwrap(), "rgba(0, 0, 0, 0.5)");
//!
//! let record = ColorSpec::new("#123456", 0.8);
//! let color = resolve_color(Some(&record), None);
//! assert_eq!(
//!     build_style_declaration(&color).unwrap(),
//!     "background-color: rgba(18, 52, 86, 0.8);"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ColorError, Result};

/// Hex value of the hardcoded fallback color.
pub const FALLBACK_HEX: &str = "#ffffff";

/// Opacity of the hardcoded fallback color.
pub const FALLBACK_OPACITY: f64 = 1.0;

/// A hex color with an opacity.
///
/// In configuration the hex value is read from `color` (or `hex`), and the
/// opacity may be a number or a numeric string. A missing opacity means
/// fully opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    /// Three or six hex digits, optionally prefixed with `#`.
    #[serde(rename = "color", alias = "hex")]
    pub hex: String,
    /// Opacity in `[0, 1]`. Out of range values are clamped on conversion.
    #[serde(default = "default_opacity", deserialize_with = "deserialize_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    FALLBACK_OPACITY
}

impl ColorSpec {
    pub fn new(hex: impl Into<String>, opacity: f64) -> Self {
        Self {
            hex: hex.into(),
            opacity,
        }
    }

    /// The hardcoded fallback: `#ffffff` at full opacity.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_HEX, FALLBACK_OPACITY)
    }

    /// Returns true if the hex value carries any digits at all.
    ///
    /// Only colors with a non-empty hex take part in resolution; validity is
    /// checked later, during conversion.
    pub fn is_set(&self) -> bool {
        let hex = self.hex.trim();
        !hex.strip_prefix('#').unwrap_or(hex).is_empty()
    }

    /// Converts this color to an [`Rgba`] value.
    pub fn to_rgba(&self) -> Result<Rgba> {
        Rgba::from_hex(&self.hex, self.opacity)
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::fallback()
    }
}

// The CMS stores opacity as text, so accept both `0.5` and `"0.5"`.
fn deserialize_opacity<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) if s.trim().is_empty() => Ok(FALLBACK_OPACITY),
        Repr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid opacity '{}'", s))),
    }
}

/// Which source a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// The value stored on the record.
    Record,
    /// The field-level configured default.
    ConfiguredDefault,
    /// The hardcoded fallback.
    Fallback,
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSource::Record => write!(f, "record"),
            ColorSource::ConfiguredDefault => write!(f, "configured default"),
            ColorSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// An RGB color with an alpha channel, ready for CSS output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Parses a 3 or 6 digit hex value (with or without `#`) and pairs it
    /// with a clamped opacity.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length or for
    /// non-hex characters.
    pub fn from_hex(hex: &str, opacity: f64) -> Result<Self> {
        let (r, g, b) = parse_hex(hex)?;
        Ok(Self {
            r,
            g,
            b,
            a: clamp_opacity(opacity),
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display is the shortest representation that parses back to
        // the same value, so `1.0` prints as `1` and `0.5` as `0.5`.
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn parse_hex(value: &str) -> Result<(u8, u8, u8)> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    // Checked up front so the byte slicing below stays on char boundaries.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(value, "contains non-hex characters"));
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16)
            .map_err(|_| ColorError::invalid(value, "contains non-hex characters"))
    };

    match hex.len() {
        // #rgb -> #rrggbb
        3 => Ok((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Ok((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(ColorError::invalid(value, "must be 3 or 6 hex digits")),
    }
}

/// Clamps an opacity to `[0, 1]`. NaN is treated as fully opaque.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        return FALLBACK_OPACITY;
    }
    let clamped = opacity.clamp(0.0, 1.0);
    // Avoid printing "-0".
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}

/// Converts a hex color and opacity to a CSS `rgba(R, G, B, A)` value.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is not 3 or 6 hex
/// digits after stripping an optional leading `#`.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> Result<String> {
    Ok(Rgba::from_hex(hex, opacity)?.to_string())
}

/// Picks the color to use: the record value if set, else the configured
/// default if set, else the hardcoded fallback. Never fails.
pub fn resolve_color(record: Option<&ColorSpec>, configured: Option<&ColorSpec>) -> ColorSpec {
    select_color(record, configured).0
}

/// Like [`resolve_color`], also reporting which source won.
pub fn select_color(
    record: Option<&ColorSpec>,
    configured: Option<&ColorSpec>,
) -> (ColorSpec, ColorSource) {
    if let Some(color) = record.filter(|c| c.is_set()) {
        return (color.clone(), ColorSource::Record);
    }
    if let Some(color) = configured.filter(|c| c.is_set()) {
        return (color.clone(), ColorSource::ConfiguredDefault);
    }
    (ColorSpec::fallback(), ColorSource::Fallback)
}

/// Builds the `background-color` declaration for a color.
///
/// This is the only declaration the resolver produces. It replaces any
/// existing `style` attribute rather than being appended to it.
pub fn build_style_declaration(color: &ColorSpec) -> Result<String> {
    Ok(format!("background-color: {};", color.to_rgba()?))
}

/// The declaration for [`ColorSpec::fallback`].
pub fn fallback_declaration() -> String {
    let white = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: FALLBACK_OPACITY,
    };
    format!("background-color: {};", white)
}

/// Outcome of the background color pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    /// The color actually rendered.
    pub color: ColorSpec,
    /// Where the selected color came from. When `error` is set this is the
    /// source of the color that failed to convert.
    pub source: ColorSource,
    /// The `background-color: ...;` declaration.
    pub declaration: String,
    /// Conversion failure that forced the fallback, for the caller to log.
    pub error: Option<ColorError>,
}

/// Resolves and converts a background color, substituting the fallback if
/// the selected color cannot be converted.
///
/// The conversion error is not swallowed: it is returned in
/// [`BackgroundStyle::error`] so the caller can decide how to report it.
pub fn resolve_background(
    record: Option<&ColorSpec>,
    configured: Option<&ColorSpec>,
) -> BackgroundStyle {
    let (color, source) = select_color(record, configured);
    match build_style_declaration(&color) {
        Ok(declaration) => BackgroundStyle {
            color,
            source,
            declaration,
            error: None,
        },
        Err(err) => BackgroundStyle {
            color: ColorSpec::fallback(),
            source,
            declaration: fallback_declaration(),
            error: Some(err),
        },
    }
}
