//! Renderer configuration.
//!
//! # Keys
//!
//! | Key        | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `truncate` | Character limit per logical tag name                 |
//! | `basic`    | Ordered names rendered as `<meta name=...>`          |
//! | `twitter`  | Whether Twitter Card tags are rendered               |
//! | `validate` | Accepted for compatibility, has no effect            |
//! | *other*    | Kept as-is and reachable through [`MetaConfig::lookup`] |
//!
//! # Example
//!
//! ```toml
//! basic = ["keywords", "robots", "viewport"]
//! twitter = true
//!
//! [truncate]
//! description = 150
//! "og:description" = 200
//! ```
//!
//! A key present in an overlay replaces the default wholesale: the
//! `[truncate]` table above drops the default `twitter:*` limits.

pub mod defaults;
mod error;

pub use error::ConfigError;

use educe::Educe;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use toml::Value;

// ============================================================================
// Root Configuration
// ============================================================================

/// Options read by the renderer.
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct MetaConfig {
    /// Character limits keyed by logical tag name, e.g. `og:description`.
    #[serde(default = "defaults::truncate")]
    #[educe(Default = defaults::truncate())]
    pub truncate: IndexMap<String, usize>,

    /// Tag names rendered with a `name` attribute, in this order.
    #[serde(default = "defaults::basic")]
    #[educe(Default = defaults::basic())]
    pub basic: Vec<String>,

    /// Render Twitter Card tags.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub twitter: bool,

    /// Open Graph value validation switch. Validation is not implemented.
    #[serde(default)]
    pub validate: bool,

    /// Keys the renderer does not know about.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl MetaConfig {
    /// Parse an overlay from TOML text, filling absent keys with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MetaConfig = toml::from_str(content)?;
        tracing::debug!(
            truncate = config.truncate.len(),
            basic = config.basic.len(),
            "parsed meta config overlay"
        );
        Ok(config)
    }

    /// Load an overlay from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_toml_str(&content)
    }

    /// Replace the truncation table.
    pub fn with_truncate<I, K>(mut self, limits: I) -> Self
    where
        I: IntoIterator<Item = (K, usize)>,
        K: Into<String>,
    {
        self.truncate = limits.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    /// Replace the basic tag allow-list.
    pub fn with_basic<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basic = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_twitter(mut self, enabled: bool) -> Self {
        self.twitter = enabled;
        self
    }

    /// Limit for a logical tag name. A zero limit counts as unset.
    pub fn truncate_limit(&self, name: &str) -> Option<usize> {
        self.truncate.get(name).copied().filter(|&limit| limit > 0)
    }

    /// Look up a value by dotted path, e.g. `truncate.description`.
    ///
    /// A key that exists verbatim at the top level wins over path splitting.
    /// Missing segments yield `None`; array segments are numeric indices.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        if let Some(value) = self.top_level(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let root = self.top_level(segments.next()?)?;
        segments.try_fold(root, |value, segment| match value {
            Value::Table(mut table) => table.remove(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.into_iter().nth(index)),
            _ => None,
        })
    }

    fn top_level(&self, key: &str) -> Option<Value> {
        match key {
            "truncate" => Some(Value::Table(
                self.truncate
                    .iter()
                    .map(|(name, limit)| (name.clone(), Value::Integer(*limit as i64)))
                    .collect(),
            )),
            "basic" => Some(Value::Array(
                self.basic.iter().cloned().map(Value::String).collect(),
            )),
            "twitter" => Some(Value::Boolean(self.twitter)),
            "validate" => Some(Value::Boolean(self.validate)),
            other => self.extra.get(other).cloned(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
