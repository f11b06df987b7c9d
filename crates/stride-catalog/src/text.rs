//! Label helpers.

/// Build a counted label, adding an `s` unless the count is exactly one.
///
/// ```
/// use stride_catalog::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 4), "4 Colors");
/// ```
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
