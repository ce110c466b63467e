//! # Wrapstyle - Attribute and Style Resolution for Wrapper Elements
//!
//! `wrapstyle` computes the attributes of an HTML wrapper element from
//! editor-supplied settings and a content record:
//!
//! - Free-form `key="value"` attribute text, parsed leniently
//! - A free-text id, normalized into a valid id token
//! - Setting classes merged with record-derived classes
//! - A `background-color` declaration from a hex color and opacity, with a
//!   record -> configured default -> hardcoded fallback chain
//!
//! Everything here is a pure function of its inputs: no I/O, no logging, no
//! shared state. The one recoverable failure, [`ColorError`], is reported
//! back to the caller alongside a usable fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use wrapstyle::{AttributeStyleResolver, ColorSpec, ResolveRequest};
//!
//! let resolution = AttributeStyleResolver::new().resolve(
//!     &ResolveRequest::new()
//!         .classes(["card"])
//!         .default_color(ColorSpec::new("#fff", 0.9)),
//! );
//!
//! assert_eq!(
//!     resolution.attributes.to_string(),
//!     r#" class="card" style="background-color: rgba(255, 255, 255, 0.9);""#
//! );
//! ```
//!
//! ## Individual Operations
//!
//! ```rust
//! use wrapstyle::{hex_to_rgba, merge_classes, parse_attribute_string, resolve_color};
//!
//! assert_eq!(parse_attribute_string(Some(r#"broken=x ok="1""#)).len(), 1);
//! assert_eq!(merge_classes(["a", "b"], ["b", "c"]), vec!["a", "b", "c"]);
//! assert_eq!(hex_to_rgba("000", 0.5).unwrap(), "rgba(0, 0, 0, 0.5)");
//! assert_eq!(resolve_color(None, None).hex, "#ffffff");
//! ```

mod attributes;
mod classes;
mod color;
mod error;
mod id;
mod resolver;

pub use attributes::{
    is_valid_attribute_name, parse_attribute_string, AttributeBag, AttributeValue, CLASS, ID,
    STYLE,
};
pub use classes::{merge_classes, split_classes};
pub use color::{
    build_style_declaration, clamp_opacity, fallback_declaration, hex_to_rgba,
    resolve_background, resolve_color, select_color, BackgroundStyle, ColorSource, ColorSpec,
    Rgba, FALLBACK_HEX, FALLBACK_OPACITY,
};
pub use error::{ColorError, Result};
pub use id::{build_id, build_id_with, HtmlIdNormalizer, IdNormalizer};
pub use resolver::{AttributeStyleResolver, ResolveRequest, Resolution};
