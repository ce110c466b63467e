//! Paragraph records and field-level configuration.
//!
//! A paragraph is the content record being wrapped. Its background color is
//! optional; when absent, the formatter looks up the default configured for
//! the color field through a [`FieldConfigStore`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wrapstyle::ColorSpec;

use crate::error::ConfigError;
use crate::settings::{load_file, parse_yaml};

/// Config path of the background color field.
pub const DEFAULT_COLOR_FIELD: &str = "paragraph.card.field_text_background_color";

/// The content record supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphRecord {
    /// Text position, applied as a class (e.g. `text-left`).
    pub text_position: Option<String>,
    /// Background color stored on the record.
    pub background_color: Option<ColorSpec>,
}

impl ParagraphRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_position(mut self, position: impl Into<String>) -> Self {
        self.text_position = Some(position.into());
        self
    }

    pub fn with_background_color(mut self, color: ColorSpec) -> Self {
        self.background_color = Some(color);
        self
    }

    /// The text position, if set and not blank.
    pub fn text_position(&self) -> Option<&str> {
        self.text_position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// The stored background color, if it carries a hex value.
    pub fn background_color(&self) -> Option<&ColorSpec> {
        self.background_color.as_ref().filter(|c| c.is_set())
    }
}

/// Configuration of a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Default values; only the first is used.
    pub default_value: Vec<ColorSpec>,
}

impl FieldConfig {
    pub fn with_default(color: ColorSpec) -> Self {
        Self {
            default_value: vec![color],
        }
    }

    /// The first default value, if any.
    pub fn default_color(&self) -> Option<&ColorSpec> {
        self.default_value.first()
    }
}

/// Lookup of field configuration by config path.
pub trait FieldConfigStore: Send + Sync {
    /// Returns the configuration stored at `path`, or `None` if it is missing.
    fn field_config(&self, path: &str) -> Option<FieldConfig>;
}

/// An in-memory [`FieldConfigStore`].
///
/// ```rust
/// use wrapstyle_element::{FieldConfigStore, StaticFieldConfig};
///
/// let store = StaticFieldConfig::from_yaml(r#"
/// paragraph.card.field_text_background_color:
///   default_value:
///     - color: '#f0f0f0'
///       opacity: '0.8'
/// "#).unwrap();
///
/// let config = store.field_config("paragraph.card.field_text_background_color").unwrap();
/// assert_eq!(config.default_color().unwrap().opacity, 0.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticFieldConfig {
    fields: HashMap<String, FieldConfig>,
}

impl StaticFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field's configuration.
    pub fn insert(mut self, path: impl Into<String>, config: FieldConfig) -> Self {
        self.fields.insert(path.into(), config);
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        parse_yaml(yaml)
    }

    /// Loads field configuration from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_file(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldConfigStore for StaticFieldConfig {
    fn field_config(&self, path: &str) -> Option<FieldConfig> {
        self.fields.get(path).cloned()
    }
}
