//! Property-based tests for wrapstyle using proptest.

use proptest::prelude::*;
use wrapstyle::{
    build_id, build_style_declaration, hex_to_rgba, merge_classes, parse_attribute_string,
    resolve_color, AttributeBag, ColorSpec,
};

// ============================================================================
// Test helpers
// ============================================================================

fn opacity_of(rgba: &str) -> f64 {
    let inner = rgba
        .strip_prefix("rgba(")
        .and_then(|s| s.strip_suffix(')'))
        .expect("rgba() wrapper");
    inner
        .rsplit(", ")
        .next()
        .expect("alpha component")
        .parse()
        .expect("alpha parses")
}

fn hex_strategy() -> impl Strategy<Value = String> {
    ("#?", prop_oneof!["[0-9a-fA-F]{3}", "[0-9a-fA-F]{6}"]).prop_map(|(p, h)| format!("{}{}", p, h))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Parsing never panics and is deterministic.
    #[test]
    fn parse_is_total_and_deterministic(raw in ".{0,200}") {
        let first = parse_attribute_string(Some(&raw));
        let second = parse_attribute_string(Some(&raw));
        prop_assert_eq!(first, second);
    }

    /// Well-formed pairs come back in order.
    #[test]
    fn parse_recovers_generated_pairs(
        pairs in prop::collection::vec(("[a-z][a-z0-9-]{0,8}", "[^\"]{1,12}"), 0..8),
    ) {
        let raw = pairs
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(parse_attribute_string(Some(&raw)), pairs);
    }

    /// Applying parsed pairs keeps the last value per key.
    #[test]
    fn bag_keeps_last_write(values in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let raw = values
            .iter()
            .map(|v| format!("title=\"{}\"", v))
            .collect::<Vec<_>>()
            .join(" ");
        let mut bag = AttributeBag::new();
        bag.extend_pairs(parse_attribute_string(Some(&raw)));
        prop_assert_eq!(bag.get_text("title"), values.last().map(String::as_str));
        prop_assert_eq!(bag.len(), 1);
    }

    /// Merged classes never contain empties or duplicates, and keep every input.
    #[test]
    fn merge_has_no_duplicates_or_empties(
        base in prop::collection::vec("[a-c ]{0,3}", 0..10),
        extra in prop::collection::vec("[a-c ]{0,3}", 0..10),
    ) {
        let merged = merge_classes(&base, &extra);
        for (i, class) in merged.iter().enumerate() {
            prop_assert!(!class.is_empty());
            prop_assert!(!merged[i + 1..].contains(class));
        }
        for class in base.iter().chain(extra.iter()) {
            let class = class.trim();
            prop_assert!(class.is_empty() || merged.iter().any(|m| m == class));
        }
    }

    /// Base classes keep their relative order at the front.
    #[test]
    fn merge_preserves_first_occurrence_order(
        base in prop::collection::vec("[a-f]", 0..10),
        extra in prop::collection::vec("[a-f]", 0..10),
    ) {
        let merged = merge_classes(&base, &extra);
        let mut expected: Vec<String> = Vec::new();
        for class in base.iter().chain(extra.iter()) {
            if !expected.contains(class) {
                expected.push(class.clone());
            }
        }
        prop_assert_eq!(merged, expected);
    }

    /// Valid hex always converts and the alpha round-trips the clamped input.
    #[test]
    fn rgba_opacity_round_trips(hex in hex_strategy(), opacity in -2.0f64..3.0) {
        let rgba = hex_to_rgba(&hex, opacity).unwrap();
        let expected = opacity.clamp(0.0, 1.0);
        prop_assert!((opacity_of(&rgba) - expected).abs() < 1e-9);
    }

    /// Anything with a non-hex character is rejected.
    #[test]
    fn rgba_rejects_non_hex(prefix in "[0-9a-f]{0,2}", bad in "[g-zG-Z!@ ]", suffix in "[0-9a-f]{0,3}") {
        let hex = format!("{}{}{}", prefix, bad, suffix);
        // Surrounding whitespace is trimmed, so keep the bad char interior.
        prop_assume!(!hex.trim().is_empty() && hex.trim().len() == hex.len());
        prop_assert!(hex_to_rgba(&hex, 1.0).is_err());
    }

    /// Style output is byte-identical across repeated calls.
    #[test]
    fn style_declaration_is_idempotent(hex in hex_strategy(), opacity in 0.0f64..=1.0) {
        let record = ColorSpec::new(hex, opacity);
        let first = build_style_declaration(&resolve_color(Some(&record), None)).unwrap();
        let second = build_style_declaration(&resolve_color(Some(&record), None)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Normalized ids are never empty and always start with a letter.
    #[test]
    fn ids_are_valid_tokens(raw in ".{0,40}") {
        if let Some(id) = build_id(Some(&raw)) {
            prop_assert!(id.chars().next().unwrap().is_ascii_alphabetic());
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
            prop_assert!(!id.contains("--"));
        }
    }
}
