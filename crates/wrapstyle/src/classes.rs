//! CSS class list merging.

/// Concatenates `base` and `extra`, dropping empty names and exact
/// duplicates (the first occurrence is kept).
///
/// Order is preserved, never sorted: base classes come first so that
/// stylesheet override order stays predictable. Names are trimmed of
/// surrounding whitespace before comparison.
///
/// ```rust
/// use wrapstyle::merge_classes;
///
/// assert_eq!(merge_classes(["a", "b"], ["b", "c"]), vec!["a", "b", "c"]);
/// ```
pub fn merge_classes<A, B, SA, SB>(base: A, extra: B) -> Vec<String>
where
    A: IntoIterator<Item = SA>,
    B: IntoIterator<Item = SB>,
    SA: AsRef<str>,
    SB: AsRef<str>,
{
    let mut merged: Vec<String> = Vec::new();
    let base = base.into_iter().map(|c| c.as_ref().trim().to_string());
    let extra = extra.into_iter().map(|c| c.as_ref().trim().to_string());
    for class in base.chain(extra) {
        if !class.is_empty() && !merged.contains(&class) {
            merged.push(class);
        }
    }
    merged
}

/// Splits a space-separated class setting into individual names.
pub fn split_classes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
