//! Formatter settings.
//!
//! Settings are plain serde data and can be built in code or loaded from
//! YAML or JSON:
//!
//! ```rust
//! use wrapstyle_element::HtmlElementSettings;
//!
//! let settings = HtmlElementSettings::from_yaml(r#"
//! element: section
//! id: Hero Banner
//! classes: hero hero--wide
//! attributes: 'role="banner"'
//! show_label: true
//! label: Featured
//! "#).unwrap();
//!
//! assert_eq!(settings.element, "section");
//! assert_eq!(settings.classes, vec!["hero", "hero--wide"]);
//! assert_eq!(settings.label_element, "h3");
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use wrapstyle::split_classes;

use crate::error::ConfigError;

/// Class added when the group contains required fields.
pub const REQUIRED_FIELDS_CLASS: &str = "required-fields";
/// Class identifying the formatter's markup.
pub const FORMATTER_CLASS: &str = "field-group-html-element";

/// Settings for an HTML wrapper element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlElementSettings {
    /// Wrapper tag name.
    pub element: String,
    /// Whether to render the label as a title.
    pub show_label: bool,
    /// Tag name for the title.
    pub label_element: String,
    /// Label text, escaped on output.
    pub label: String,
    /// Free-form `key="value"` attributes.
    pub attributes: String,
    /// Free-text id.
    pub id: Option<String>,
    /// Extra classes; a space-separated string or a list.
    #[serde(deserialize_with = "deserialize_classes")]
    pub classes: Vec<String>,
    /// Reveal effect, `"none"` to disable.
    pub effect: String,
    /// Effect speed.
    pub speed: String,
    /// Whether the group contains required fields.
    pub required_fields: bool,
}

impl Default for HtmlElementSettings {
    fn default() -> Self {
        Self {
            element: "div".to_string(),
            show_label: false,
            label_element: "h3".to_string(),
            label: String::new(),
            attributes: String::new(),
            id: None,
            classes: Vec::new(),
            effect: "none".to_string(),
            speed: "fast".to_string(),
            required_fields: false,
        }
    }
}

fn deserialize_classes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(s) => split_classes(&s),
        Repr::List(list) => list.iter().flat_map(|s| split_classes(s)).collect(),
    })
}

impl HtmlElementSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        parse_yaml(yaml)
    }

    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        parse_json(json)
    }

    /// Loads settings from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_file(path.as_ref())
    }

    /// Classes applied before any record-derived class.
    ///
    /// Groups with required fields get the `required-fields` marker first,
    /// followed by the configured classes. [`FORMATTER_CLASS`] is appended
    /// last by the formatter.
    pub fn base_classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if self.required_fields {
            classes.push(REQUIRED_FIELDS_CLASS.to_string());
        }
        classes.extend(self.classes.iter().cloned());
        classes
    }

    /// True when an effect other than `none` is configured.
    pub fn has_effect(&self) -> bool {
        let effect = self.effect.trim();
        !effect.is_empty() && effect != "none"
    }
}

pub(crate) fn parse_yaml<T: serde::de::DeserializeOwned>(yaml: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
        format: "yaml",
        path: None,
        message: e.to_string(),
    })
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse {
        format: "json",
        path: None,
        message: e.to_string(),
    })
}

pub(crate) fn load_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let parse: fn(&str) -> Result<T, ConfigError> = match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml,
        Some("json") => parse_json,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&content).map_err(|e| e.with_path(path))
}
