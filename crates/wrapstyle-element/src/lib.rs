//! # Wrapstyle Element - HTML Wrapper Formatter
//!
//! `wrapstyle-element` wraps paragraph content in a styled HTML element. It
//! sits on top of [`wrapstyle`]'s pure resolver and adds what a host needs
//! around it:
//!
//! - [`HtmlElementSettings`]: formatter settings, loadable from YAML or JSON
//! - [`ParagraphRecord`]: the content being wrapped (text position, color)
//! - [`FieldConfigStore`]: lookup of the field-level default color
//! - [`RenderLogger`]: explicit logging capability, `tracing` by default
//! - [`HtmlElementFormatter`]: builds a [`WrapperElement`], never failing
//!
//! ## Quick Start
//!
//! ```rust
//! use wrapstyle::ColorSpec;
//! use wrapstyle_element::{HtmlElementFormatter, HtmlElementSettings, ParagraphRecord};
//!
//! let settings = HtmlElementSettings::from_yaml(r#"
//! id: Promo
//! classes: promo
//! show_label: true
//! label: Spring & Summer
//! "#).unwrap();
//!
//! let paragraph = ParagraphRecord::new()
//!     .with_text_position("text-center")
//!     .with_background_color(ColorSpec::new("#336699", 0.75));
//!
//! let element = HtmlElementFormatter::new(settings).pre_render(&paragraph);
//! assert_eq!(
//!     element.wrap("<p>Sale</p>"),
//!     concat!(
//!         r#"<div id="promo" class="promo text-center" style="background-color: rgba(51, 102, 153, 0.75);">"#,
//!         "<h3>Spring &amp; Summer</h3><p>Sale</p></div>",
//!     )
//! );
//! ```

mod element;
mod error;
mod formatter;
mod logger;
mod paragraph;
mod settings;

pub use element::{Title, WrapperElement, CORE_LIBRARY, ELEMENT_TYPE, FORMATTER_LIBRARY};
pub use error::ConfigError;
pub use formatter::{HtmlElementFormatter, MISSING_CONFIG_WARNING};
pub use logger::{LogRecord, RecordingLogger, RenderLogger, TracingLogger};
pub use paragraph::{
    FieldConfig, FieldConfigStore, ParagraphRecord, StaticFieldConfig, DEFAULT_COLOR_FIELD,
};
pub use settings::{HtmlElementSettings, FORMATTER_CLASS, REQUIRED_FIELDS_CLASS};
