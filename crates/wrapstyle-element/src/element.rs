//! The finished wrapper element.

use std::fmt::Write as _;

use wrapstyle::AttributeBag;

/// Element type reported to the host.
pub const ELEMENT_TYPE: &str = "field_group_html_element";

/// Library attached when the group contains required fields.
pub const FORMATTER_LIBRARY: &str = "field_group/formatter.html_element";
/// Core library attached alongside [`FORMATTER_LIBRARY`].
pub const CORE_LIBRARY: &str = "field_group/core";

/// A rendered title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// HTML-escaped label text.
    pub text: String,
    /// Tag name of the title element.
    pub element: String,
}

/// Everything the host needs to emit a wrapper around paragraph content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperElement {
    pub element_type: &'static str,
    /// Wrapper tag name.
    pub tag: String,
    pub attributes: AttributeBag,
    pub effect: String,
    pub speed: String,
    pub title: Option<Title>,
    /// Libraries to attach, in order, without duplicates.
    pub libraries: Vec<String>,
}

impl WrapperElement {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            element_type: ELEMENT_TYPE,
            tag: tag_name(tag, "div"),
            attributes: AttributeBag::new(),
            effect: String::new(),
            speed: String::new(),
            title: None,
            libraries: Vec::new(),
        }
    }

    pub(crate) fn attach_library(&mut self, library: &str) {
        if !self.libraries.iter().any(|l| l == library) {
            self.libraries.push(library.to_string());
        }
    }

    /// `<tag attrs>` followed by the title, if any.
    pub fn open_tag(&self) -> String {
        let mut out = format!("<{}{}>", self.tag, self.attributes);
        if let Some(title) = &self.title {
            let _ = write!(out, "<{0}>{1}</{0}>", title.element, title.text);
        }
        out
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// Wraps already-rendered content. `inner` is inserted as is.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.open_tag(), inner, self.close_tag())
    }
}

/// Lowercases a tag name, or returns `fallback` if it is not a plain
/// alphanumeric name starting with a letter.
pub(crate) fn tag_name(raw: &str, fallback: &str) -> String {
    let raw = raw.trim();
    let valid = raw.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && raw.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        raw.to_ascii_lowercase()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_validation() {
        assert_eq!(tag_name("SECTION", "div"), "section");
        assert_eq!(tag_name("h2", "h3"), "h2");
        assert_eq!(tag_name("", "div"), "div");
        assert_eq!(tag_name("div onclick", "div"), "div");
        assert_eq!(tag_name("2col", "div"), "div");
        assert_eq!(tag_name("script>", "div"), "div");
    }

    #[test]
    fn test_wrap_without_title() {
        let mut element = WrapperElement::new("aside");
        element.attributes.set("id", "x");
        assert_eq!(element.wrap("<p>hi</p>"), r#"<aside id="x"><p>hi</p></aside>"#);
    }

    #[test]
    fn test_wrap_with_title() {
        let mut element = WrapperElement::new("div");
        element.title = Some(Title {
            text: "Tom &amp; Jerry".into(),
            element: "h2".into(),
        });
        assert_eq!(element.open_tag(), "<div><h2>Tom &amp; Jerry</h2>");
        assert_eq!(element.close_tag(), "</div>");
    }

    #[test]
    fn test_attach_library_dedups() {
        let mut element = WrapperElement::new("div");
        element.attach_library(CORE_LIBRARY);
        element.attach_library(CORE_LIBRARY);
        assert_eq!(element.libraries, [CORE_LIBRARY]);
    }
}
