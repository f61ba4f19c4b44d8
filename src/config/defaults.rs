//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use indexmap::IndexMap;

pub fn r#true() -> bool {
    true
}

// ============================================================================
// Truncation Limits
// ============================================================================

/// Character limits keyed by logical tag name.
pub fn truncate() -> IndexMap<String, usize> {
    [
        ("description", 160),
        ("twitter:title", 70),
        ("og:description", 200),
        ("twitter:description", 200),
    ]
    .into_iter()
    .map(|(name, limit)| (name.to_owned(), limit))
    .collect()
}

// ============================================================================
// Basic Tags
// ============================================================================

/// Tags rendered with a `name` attribute straight from the general partition.
///
/// `description` is left out: it already has its own truncated element.
pub fn basic() -> Vec<String> {
    [
        "keywords",
        "subject",
        "copyright",
        "language",
        "robots",
        "revised",
        "topic",
        "summary",
        "classification",
        "author",
        "designer",
        "reply-to",
        "owner",
        "url",
        "identifier-URL",
        "directory",
        "category",
        "coverage",
        "distribution",
        "rating",
        "revisit-after",
        "viewport",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
