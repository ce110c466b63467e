//! The HTML element formatter.
//!
//! [`HtmlElementFormatter`] turns settings plus a paragraph record into a
//! [`WrapperElement`]. It owns the policy around the pure resolver: looking
//! up the field-level default color, logging what went wrong, and copying
//! the pass-through settings onto the element.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wrapstyle::ColorSpec;
//! use wrapstyle_element::{
//!     FieldConfig, HtmlElementFormatter, HtmlElementSettings, ParagraphRecord,
//!     StaticFieldConfig, DEFAULT_COLOR_FIELD,
//! };
//!
//! let settings = HtmlElementSettings {
//!     element: "section".into(),
//!     classes: vec!["hero".into()],
//!     ..Default::default()
//! };
//! let store = StaticFieldConfig::new().insert(
//!     DEFAULT_COLOR_FIELD,
//!     FieldConfig::with_default(ColorSpec::new("#000", 0.5)),
//! );
//! let formatter = HtmlElementFormatter::new(settings).with_field_config(Arc::new(store));
//!
//! let element = formatter.pre_render(&ParagraphRecord::new().with_text_position("text-left"));
//! assert_eq!(
//!     element.wrap("..."),
//!     r#"<section class="hero text-left" style="background-color: rgba(0, 0, 0, 0.5);">...</section>"#
//! );
//! ```

use std::sync::Arc;

use wrapstyle::{AttributeStyleResolver, ColorSpec, IdNormalizer, ResolveRequest};

use crate::element::{tag_name, Title, WrapperElement, CORE_LIBRARY, FORMATTER_LIBRARY};
use crate::logger::{RenderLogger, TracingLogger};
use crate::paragraph::{FieldConfigStore, ParagraphRecord, DEFAULT_COLOR_FIELD};
use crate::settings::{HtmlElementSettings, FORMATTER_CLASS};

/// Warning logged when the color field configuration cannot be found.
pub const MISSING_CONFIG_WARNING: &str = "Background color field configuration is missing.";

/// Builds wrapper elements for paragraphs.
pub struct HtmlElementFormatter {
    settings: HtmlElementSettings,
    resolver: AttributeStyleResolver,
    field_config: Option<Arc<dyn FieldConfigStore>>,
    default_color_field: String,
    logger: Arc<dyn RenderLogger>,
}

impl HtmlElementFormatter {
    /// A formatter with no field configuration that logs through `tracing`.
    pub fn new(settings: HtmlElementSettings) -> Self {
        Self {
            settings,
            resolver: AttributeStyleResolver::new(),
            field_config: None,
            default_color_field: DEFAULT_COLOR_FIELD.to_string(),
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_field_config(mut self, store: Arc<dyn FieldConfigStore>) -> Self {
        self.field_config = Some(store);
        self
    }

    /// Changes the config path used to find the default color.
    pub fn with_default_color_field(mut self, path: impl Into<String>) -> Self {
        self.default_color_field = path.into();
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn RenderLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the id normalization rule.
    pub fn with_id_normalizer(mut self, normalizer: impl IdNormalizer + 'static) -> Self {
        self.resolver = AttributeStyleResolver::with_normalizer(normalizer);
        self
    }

    pub fn settings(&self) -> &HtmlElementSettings {
        &self.settings
    }

    /// Builds the wrapper element for one paragraph. Never fails.
    pub fn pre_render(&self, paragraph: &ParagraphRecord) -> WrapperElement {
        let settings = &self.settings;

        let record_color = paragraph.background_color().cloned();
        let default_color = match record_color {
            Some(_) => None,
            None => self.configured_default(),
        };

        let mut request = ResolveRequest::new().classes(settings.base_classes());
        request.attributes = Some(settings.attributes.clone()).filter(|a| !a.trim().is_empty());
        request.id = settings.id.clone();
        request.record_color = record_color;
        request.default_color = default_color;
        if let Some(position) = paragraph.text_position() {
            request = request.extra_class(position);
        }

        let resolution = self.resolver.resolve(&request);
        if let Some(err) = &resolution.color_error {
            self.logger
                .error(&format!("Invalid background color, using fallback: {}", err));
        } else {
            self.logger.debug(&format!(
                "Background color from {}: {}",
                resolution.color_source, resolution.color.hex
            ));
        }

        let mut element = WrapperElement::new(&settings.element);
        element.attributes = resolution.attributes;
        element.effect = settings.effect.clone();
        element.speed = settings.speed.clone();

        if settings.has_effect() {
            element.attributes.add_classes([
                format!("speed-{}", settings.speed.trim()),
                format!("effect-{}", settings.effect.trim()),
            ]);
        }

        if settings.show_label {
            element.title = Some(Title {
                text: htmlize::escape_all_quotes(settings.label.as_str()).into_owned(),
                element: tag_name(&settings.label_element, "h3"),
            });
        }

        if settings.required_fields {
            element.attributes.add_classes([FORMATTER_CLASS]);
            element.attach_library(FORMATTER_LIBRARY);
            element.attach_library(CORE_LIBRARY);
        }

        element
    }

    /// The field-level default color, logging when the configuration is
    /// missing altogether.
    fn configured_default(&self) -> Option<ColorSpec> {
        let config = self
            .field_config
            .as_ref()
            .and_then(|store| store.field_config(&self.default_color_field));
        match config {
            Some(config) => {
                let color = config.default_color().cloned();
                if color.is_none() {
                    self.logger.debug(&format!(
                        "Field {} has no default value",
                        self.default_color_field
                    ));
                }
                color
            }
            None => {
                self.logger.warning(MISSING_CONFIG_WARNING);
                None
            }
        }
    }
}

impl std::fmt::Debug for HtmlElementFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlElementFormatter")
            .field("settings", &self.settings)
            .field("default_color_field", &self.default_color_field)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::RecordingLogger;
    use crate::paragraph::{FieldConfig, StaticFieldConfig};
    use tracing::Level;

    fn formatter(settings: HtmlElementSettings) -> (HtmlElementFormatter, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::new());
        let formatter = HtmlElementFormatter::new(settings).with_logger(logger.clone());
        (formatter, logger)
    }

    fn store(color: ColorSpec) -> Arc<StaticFieldConfig> {
        Arc::new(StaticFieldConfig::new().insert(DEFAULT_COLOR_FIELD, FieldConfig::with_default(color)))
    }

    #[test]
    fn test_missing_config_warns_and_falls_back() {
        let (formatter, logger) = formatter(HtmlElementSettings::default());
        let element = formatter.pre_render(&ParagraphRecord::new());
        assert_eq!(
            element.attributes.style(),
            Some("background-color: rgba(255, 255, 255, 1);")
        );
        let warnings = logger.at(Level::WARN);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, MISSING_CONFIG_WARNING);
    }

    #[test]
    fn test_record_color_skips_config_lookup() {
        let (formatter, logger) = formatter(HtmlElementSettings::default());
        let paragraph = ParagraphRecord::new().with_background_color(ColorSpec::new("#123456", 0.8));
        let element = formatter.pre_render(&paragraph);
        assert_eq!(
            element.attributes.style(),
            Some("background-color: rgba(18, 52, 86, 0.8);")
        );
        assert!(logger.at(Level::WARN).is_empty());
    }

    #[test]
    fn test_record_color_wins_over_configured_default() {
        let (formatter, _) = formatter(HtmlElementSettings::default());
        let formatter = formatter.with_field_config(store(ColorSpec::new("#ffffff", 1.0)));
        let paragraph = ParagraphRecord::new().with_background_color(ColorSpec::new("#000000", 0.1));
        let element = formatter.pre_render(&paragraph);
        assert_eq!(
            element.attributes.style(),
            Some("background-color: rgba(0, 0, 0, 0.1);")
        );
    }

    #[test]
    fn test_invalid_color_logs_one_error() {
        let (formatter, logger) = formatter(HtmlElementSettings::default());
        let paragraph = ParagraphRecord::new().with_background_color(ColorSpec::new("#ggg", 1.0));
        let element = formatter.pre_render(&paragraph);
        assert_eq!(
            element.attributes.style(),
            Some("background-color: rgba(255, 255, 255, 1);")
        );
        let errors = logger.at(Level::ERROR);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("#ggg"));
    }

    #[test]
    fn test_config_without_default_is_not_a_warning() {
        let (formatter, logger) = formatter(HtmlElementSettings::default());
        let formatter = formatter.with_field_config(Arc::new(
            StaticFieldConfig::new().insert(DEFAULT_COLOR_FIELD, FieldConfig::default()),
        ));
        formatter.pre_render(&ParagraphRecord::new());
        assert!(logger.at(Level::WARN).is_empty());
    }

    #[test]
    fn test_custom_default_color_field() {
        let (formatter, _) = formatter(HtmlElementSettings::default());
        let formatter = formatter
            .with_field_config(Arc::new(StaticFieldConfig::new().insert(
                "paragraph.hero.field_bg",
                FieldConfig::with_default(ColorSpec::new("#00f", 1.0)),
            )))
            .with_default_color_field("paragraph.hero.field_bg");
        let element = formatter.pre_render(&ParagraphRecord::new());
        assert_eq!(
            element.attributes.style(),
            Some("background-color: rgba(0, 0, 255, 1);")
        );
    }

    #[test]
    fn test_label_is_escaped() {
        let settings = HtmlElementSettings {
            show_label: true,
            label: "<b>Tom</b> & 'Jerry'".into(),
            label_element: "H2".into(),
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        let title = formatter.pre_render(&ParagraphRecord::new()).title.unwrap();
        assert_eq!(title.element, "h2");
        assert!(!title.text.contains('<'));
        assert!(!title.text.contains('\''));
        assert!(title.text.contains("&amp;"));
    }

    #[test]
    fn test_label_hidden_by_default() {
        let settings = HtmlElementSettings {
            label: "Hidden".into(),
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        assert!(formatter.pre_render(&ParagraphRecord::new()).title.is_none());
    }

    #[test]
    fn test_effect_adds_classes() {
        let settings = HtmlElementSettings {
            effect: "blind".into(),
            speed: "slow".into(),
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        let element = formatter.pre_render(&ParagraphRecord::new());
        assert_eq!(element.attributes.classes(), ["speed-slow", "effect-blind"]);
        assert_eq!(element.effect, "blind");
        assert_eq!(element.speed, "slow");
    }

    #[test]
    fn test_required_fields_adds_marker_and_libraries() {
        let settings = HtmlElementSettings {
            required_fields: true,
            classes: vec!["card".into()],
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        let element = formatter.pre_render(&ParagraphRecord::new().with_text_position("text-left"));
        assert_eq!(
            element.attributes.classes(),
            ["required-fields", "card", "text-left", "field-group-html-element"]
        );
        assert_eq!(
            element.libraries,
            ["field_group/formatter.html_element", "field_group/core"]
        );
    }

    #[test]
    fn test_marker_class_follows_effect_classes() {
        let settings = HtmlElementSettings {
            required_fields: true,
            effect: "blind".into(),
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        let element = formatter.pre_render(&ParagraphRecord::new());
        assert_eq!(
            element.attributes.classes(),
            ["required-fields", "speed-fast", "effect-blind", "field-group-html-element"]
        );
    }

    #[test]
    fn test_invalid_tag_falls_back_to_div() {
        let settings = HtmlElementSettings {
            element: "div><script".into(),
            ..Default::default()
        };
        let (formatter, _) = formatter(settings);
        assert_eq!(formatter.pre_render(&ParagraphRecord::new()).tag, "div");
    }
}
