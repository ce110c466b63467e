//! Attribute string parsing and the [`AttributeBag`] collection.
//!
//! Wrapper elements accept free-form attributes typed by an editor as
//! `key="value" key2="value2"`. The text is untrusted: anything that does not
//! look like a quoted pair is skipped, and parsing never fails.
//!
//! ```rust
//! use wrapstyle::{parse_attribute_string, AttributeBag};
//!
//! let pairs = parse_attribute_string(Some(r#"id="x" class="a b""#));
//! assert_eq!(
//!     pairs,
//!     vec![("id".to_string(), "x".to_string()), ("class".to_string(), "a b".to_string())]
//! );
//!
//! let mut attrs = AttributeBag::new();
//! attrs.extend_pairs(pairs);
//! attrs.add_classes(["c"]);
//! assert_eq!(attrs.to_string(), r#" id="x" class="a b c""#);
//! ```

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::classes::merge_classes;

/// Name of the class attribute.
pub const CLASS: &str = "class";
/// Name of the id attribute.
pub const ID: &str = "id";
/// Name of the style attribute.
pub const STYLE: &str = "style";

static ATTRIBUTE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^\s=]+)="([^"]+)""#).expect("attribute pattern is valid"));

/// Parses `key="value"` pairs out of free text.
///
/// Pairs are returned in order of first occurrence. Fragments that do not
/// match (no quotes, unterminated quotes, empty values, stray words) are
/// skipped. Duplicate keys are all returned; when applied to an
/// [`AttributeBag`] the last one wins.
pub fn parse_attribute_string(raw: Option<&str>) -> Vec<(String, String)> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    ATTRIBUTE_PAIR
        .captures_iter(raw)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns true if `name` can be written as an HTML attribute name.
///
/// Names must be non-empty and free of whitespace, control characters,
/// quotes, `<`, `>`, `/` and `=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A plain string value, used for `id`, `style` and everything else.
    Text(String),
    /// An ordered, de-duplicated class list.
    Classes(Vec<String>),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(value) => f.write_str(value),
            AttributeValue::Classes(classes) => f.write_str(&classes.join(" ")),
        }
    }
}

/// An ordered set of HTML attributes.
///
/// Keys are unique and keep the position of their first insertion. The
/// `class` attribute is stored as a list: setting it from a string splits on
/// whitespace, and [`add_classes`](AttributeBag::add_classes) merges into it
/// without duplicates.
///
/// `Display` renders each attribute as ` key="value"` (with a leading space,
/// ready to follow a tag name), escaping values for use inside double
/// quotes. An empty class list is not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    ///
    /// Names rejected by [`is_valid_attribute_name`] are dropped, like any
    /// other malformed fragment.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            return;
        }
        let value = value.into();
        if name == CLASS {
            let classes = merge_classes(value.split_whitespace(), std::iter::empty::<&str>());
            self.entries.insert(name, AttributeValue::Classes(classes));
        } else {
            self.entries.insert(name, AttributeValue::Text(value));
        }
    }

    /// Builder-style [`set`](AttributeBag::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Applies `(key, value)` pairs in order; later keys overwrite earlier ones.
    pub fn extend_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Returns an attribute's value.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Returns a text attribute's value. Class lists return `None`.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(AttributeValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Removes an attribute, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.get_text(ID)
    }

    /// The `style` attribute, if set.
    pub fn style(&self) -> Option<&str> {
        self.get_text(STYLE)
    }

    /// Replaces the `style` attribute.
    pub fn set_style(&mut self, declaration: impl Into<String>) {
        self.entries
            .insert(STYLE.to_string(), AttributeValue::Text(declaration.into()));
    }

    /// The class list. Empty if no class has been set.
    pub fn classes(&self) -> &[String] {
        match self.entries.get(CLASS) {
            Some(AttributeValue::Classes(classes)) => classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Appends classes after the existing ones, skipping duplicates and
    /// empty names.
    pub fn add_classes<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let merged = merge_classes(self.classes().iter(), extra);
        self.entries
            .insert(CLASS.to_string(), AttributeValue::Classes(merged));
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, class: &str) {
        if let Some(AttributeValue::Classes(classes)) = self.entries.get_mut(CLASS) {
            classes.retain(|c| c != class);
        }
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for AttributeBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            if matches!(value, AttributeValue::Classes(classes) if classes.is_empty()) {
                continue;
            }
            let value = value.to_string();
            write!(f, " {}=\"{}\"", name, htmlize::escape_attribute(value.as_str()))?;
        }
        Ok(())
    }
}
