//! Value normalization and render-time truncation.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Marker appended to truncated values.
pub const ELLIPSIS: &str = "...";

/// Markup tags and comments, including an unterminated trailing tag.
/// A `<` followed by whitespace is text, not the start of a tag.
static RE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^\s>][^>]*(?:>|$)").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a tag value before it is stored.
///
/// Steps, in order:
/// 1. strip markup tags
/// 2. drop every char outside printable ASCII (`0x20..=0x7E`)
/// 3. collapse whitespace runs to a single space
/// 4. trim
///
/// Control characters are dropped in step 2, so `"a\nb"` becomes `"ab"`.
pub fn sanitize(value: &str) -> String {
    let stripped = RE_MARKUP.replace_all(value, "");
    let printable: String = stripped
        .chars()
        .filter(|c| (' '..='~').contains(c))
        .collect();
    RE_WHITESPACE.replace_all(&printable, " ").trim().to_owned()
}

// ============================================================================
// Truncation
// ============================================================================

/// Shorten `value` to `limit` chars, marking the cut with [`ELLIPSIS`].
///
/// Strings of at most `limit` chars are returned as-is. Longer ones keep
/// their first `limit - 3` chars followed by the marker, so the result is
/// exactly `limit` chars long.
pub fn truncate(value: &str, limit: usize) -> Cow<'_, str> {
    if value.char_indices().nth(limit).is_none() {
        return Cow::Borrowed(value);
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let cut = value
        .char_indices()
        .nth(keep)
        .map_or(value.len(), |(index, _)| index);
    Cow::Owned(format!("{}{ELLIPSIS}", &value[..cut]))
}
