//! HTML id normalization.
//!
//! Editors type ids as free text ("Hero Banner", "promo_2024"). Before use
//! they are normalized into a valid id token. The rule is pluggable through
//! [`IdNormalizer`]; [`HtmlIdNormalizer`] is the default.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static INVALID_ID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\-_]").expect("id pattern is valid"));
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("dash pattern is valid"));

/// Turns free text into an HTML id token.
///
/// Implementations may return an empty string, which means "no id".
pub trait IdNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

/// The default id rule.
///
/// 1. Transliterate to ASCII and lowercase
/// 2. Map space, `_` and `[` to `-`, drop `]`
/// 3. Drop anything outside `[a-z0-9-_]`
/// 4. Collapse runs of `-`
/// 5. Prefix `id-` if the result does not start with a letter
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlIdNormalizer;

impl IdNormalizer for HtmlIdNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let lowered = deunicode(raw).to_lowercase();
        let mapped: String = lowered
            .chars()
            .filter(|c| *c != ']')
            .map(|c| match c {
                ' ' | '_' | '[' => '-',
                other => other,
            })
            .collect();
        let stripped = INVALID_ID_CHARS.replace_all(&mapped, "");
        let collapsed = DASH_RUNS.replace_all(&stripped, "-");

        if collapsed.is_empty() || collapsed == "-" {
            return String::new();
        }
        match collapsed.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => collapsed.into_owned(),
            _ => format!("id-{}", collapsed.trim_start_matches('-')),
        }
    }
}

/// Normalizes an id with the default rule.
///
/// Returns `None` for missing or blank input, and for input that normalizes
/// to nothing; the `id` attribute should then be omitted rather than set to
/// an empty string.
///
/// ```rust
/// use wrapstyle::build_id;
///
/// assert_eq!(build_id(Some("Hero Banner")), Some("hero-banner".to_string()));
/// assert_eq!(build_id(Some("")), None);
/// ```
pub fn build_id(raw: Option<&str>) -> Option<String> {
    build_id_with(raw, &HtmlIdNormalizer)
}

/// Normalizes an id with a custom rule.
pub fn build_id_with(raw: Option<&str>, normalizer: &dyn IdNormalizer) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    let id = normalizer.normalize(raw);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
