//! The attribute and style resolution routine.
//!
//! [`AttributeStyleResolver`] combines the individual operations into the
//! order a wrapper element needs them:
//!
//! 1. Raw `key="value"` pairs from the attribute setting
//! 2. The normalized id, overriding any raw `id`
//! 3. Setting classes, then extra classes (such as a text position)
//! 4. The background declaration, overwriting any raw `style`
//!
//! The resolver holds no state between calls. Color conversion failures are
//! recovered with the fallback color and reported back in
//! [`Resolution::color_error`]; logging them is the caller's business.
//!
//! # Example
//!
//! ```rust
//! use wrapstyle::{AttributeStyleResolver, ColorSpec, ResolveRequest};
//!
//! let resolver = AttributeStyleResolver::new();
//! let request = ResolveRequest::new()
//!     .attributes(r#"data-kind="hero" role="banner""#)
//!     .id("Hero Banner")
//!     .classes(["hero", "hero--wide"])
//!     .extra_class("text-left")
//!     .record_color(ColorSpec::new("#000", 0.5));
//!
//! let resolution = resolver.resolve(&request);
//! assert_eq!(
//!     resolution.attributes.to_string(),
//!     r#" data-kind="hero" role="banner" id="hero-banner" class="hero hero--wide text-left" style="background-color: rgba(0, 0, 0, 0.5);""#
//! );
//! assert!(resolution.color_error.is_none());
//! ```

use std::fmt;

use crate::attributes::{parse_attribute_string, AttributeBag, ID};
use crate::color::{resolve_background, BackgroundStyle, ColorSource, ColorSpec};
use crate::error::ColorError;
use crate::id::{build_id_with, HtmlIdNormalizer, IdNormalizer};

/// Inputs for one resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveRequest {
    /// Free-form `key="value"` attribute text.
    pub attributes: Option<String>,
    /// Free-text id, normalized before use.
    pub id: Option<String>,
    /// Classes from the settings, applied first.
    pub classes: Vec<String>,
    /// Additional classes derived from the record, applied after `classes`.
    pub extra_classes: Vec<String>,
    /// Color stored on the record.
    pub record_color: Option<ColorSpec>,
    /// Field-level configured default color.
    pub default_color: Option<ColorSpec>,
}

impl ResolveRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(mut self, raw: impl Into<String>) -> Self {
        self.attributes = Some(raw.into());
        self
    }

    pub fn id(mut self, raw: impl Into<String>) -> Self {
        self.id = Some(raw.into());
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn extra_class(mut self, class: impl Into<String>) -> Self {
        self.extra_classes.push(class.into());
        self
    }

    pub fn record_color(mut self, color: ColorSpec) -> Self {
        self.record_color = Some(color);
        self
    }

    pub fn default_color(mut self, color: ColorSpec) -> Self {
        self.default_color = Some(color);
        self
    }
}

/// Result of [`AttributeStyleResolver::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Finished attributes: raw pairs, id, classes and style.
    pub attributes: AttributeBag,
    /// The color that was rendered.
    pub color: ColorSpec,
    /// Which source the selected color came from.
    pub color_source: ColorSource,
    /// Set when the selected color failed to convert and the fallback was used.
    pub color_error: Option<ColorError>,
}

/// Produces the attribute map for a wrapper element.
pub struct AttributeStyleResolver {
    normalizer: Box<dyn IdNormalizer>,
}

impl AttributeStyleResolver {
    /// A resolver using [`HtmlIdNormalizer`].
    pub fn new() -> Self {
        Self::with_normalizer(HtmlIdNormalizer)
    }

    /// A resolver using a custom id rule.
    pub fn with_normalizer(normalizer: impl IdNormalizer + 'static) -> Self {
        Self {
            normalizer: Box::new(normalizer),
        }
    }

    /// Normalizes an id with this resolver's rule.
    pub fn build_id(&self, raw: Option<&str>) -> Option<String> {
        build_id_with(raw, self.normalizer.as_ref())
    }

    /// Runs the full routine for one request.
    pub fn resolve(&self, request: &ResolveRequest) -> Resolution {
        let mut attributes = AttributeBag::new();
        attributes.extend_pairs(parse_attribute_string(request.attributes.as_deref()));

        if let Some(id) = self.build_id(request.id.as_deref()) {
            attributes.set(ID, id);
        }

        attributes.add_classes(&request.classes);
        attributes.add_classes(&request.extra_classes);

        let BackgroundStyle {
            color,
            source,
            declaration,
            error,
        } = resolve_background(request.record_color.as_ref(), request.default_color.as_ref());
        attributes.set_style(declaration);

        Resolution {
            attributes,
            color,
            color_source: source,
            color_error: error,
        }
    }
}

impl Default for AttributeStyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AttributeStyleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeStyleResolver").finish_non_exhaustive()
    }
}
