//! The metadata accumulator.
//!
//! # Architecture
//!
//! ```text
//! title() / add_image() / robots...() ──► set()         ──► TagStore (general | twitter | other)
//!                                    └──► open_graph()  ──► Vec<OpenGraphEntry> (+ set)
//!                                    └──► links, googlebot, http-equiv, custom lists
//!
//! build()  ──► Vec<Element>   (fixed section order, render-time truncation)
//! render() ──► String         (prefix + element + suffix, per element)
//! ```
//!
//! Setters mutate in place and return `&mut Self` for chaining. Building and
//! rendering only read, so rendering twice without a mutation in between
//! yields the same string.

pub mod kinds;
mod objects;
mod render;
mod setters;

use crate::{
    config::MetaConfig,
    store::{
        Attributes, CustomTag, HttpEquiv, Link, OpenGraphEntry, Partition, TagEntry, TagStore,
    },
    value::{self, IntoScalar, sanitize::sanitize},
};
use indexmap::IndexMap;
use kinds::{PageLink, og_type};

/// Name prefix that routes a tag into the Twitter partition.
const TWITTER_PREFIX: &str = "twitter_";

/// Page metadata accumulator. One instance per rendered page.
#[derive(Debug, Clone)]
pub struct MetaTags {
    config: MetaConfig,
    tags: TagStore,
    /// Repeatable Open Graph properties, in render order.
    og_tags: Vec<OpenGraphEntry>,
    include_og: bool,
    og_type: String,
    char_set: Option<String>,
    canonical: Option<String>,
    manifest: Option<String>,
    pagination: IndexMap<PageLink, String>,
    links: Vec<Link>,
    /// Googlebot directive tokens in call order.
    google_bot: Vec<String>,
    http_equiv: Vec<HttpEquiv>,
    custom: Vec<CustomTag>,
    tag_prefix: String,
    tag_suffix: String,
    include_schema_org: bool,
}

impl Default for MetaTags {
    fn default() -> Self {
        Self::with_config(MetaConfig::default())
    }
}

impl MetaTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MetaConfig) -> Self {
        Self {
            config,
            tags: TagStore::new(),
            og_tags: Vec::new(),
            include_og: true,
            og_type: og_type::WEBSITE.to_owned(),
            char_set: Some("utf-8".to_owned()),
            canonical: None,
            manifest: None,
            pagination: IndexMap::new(),
            links: Vec::new(),
            google_bot: Vec::new(),
            http_equiv: Vec::new(),
            custom: Vec::new(),
            tag_prefix: String::new(),
            tag_suffix: "\n".to_owned(),
            include_schema_org: false,
        }
    }

    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    /// Dotted-path config lookup, see [`MetaConfig::lookup`].
    ///
    /// Reflects the live configuration, so `twitter` reads `true` once a
    /// `twitter_` tag has been stored.
    pub fn config_value(&self, path: &str) -> Option<toml::Value> {
        self.config.lookup(path)
    }

    /// Whether the Twitter block will be rendered.
    pub fn twitter_enabled(&self) -> bool {
        self.config.twitter
    }

    // ========================================================================
    // Tag Store Primitives
    // ========================================================================

    /// Store a general tag. See [`set_tag`](Self::set_tag).
    pub fn set(&mut self, name: &str, value: impl IntoScalar) -> &mut Self {
        self.set_tag(name, value, Attributes::new(), Partition::General)
    }

    /// Store a named tag, replacing any entry with the same name.
    ///
    /// - An absent value with no attributes is ignored.
    /// - Timestamps are formatted `YYYY-MM-DDTHH:MM:SS±HHMM`.
    /// - The value is [sanitized](crate::value::sanitize::sanitize).
    /// - A `twitter_` name prefix overrides `partition`: the tag goes to the
    ///   Twitter partition as `twitter_card_size` → `card:size`, and the
    ///   `twitter` config switch is turned on for good.
    pub fn set_tag(
        &mut self,
        name: &str,
        value: impl IntoScalar,
        attributes: Attributes,
        partition: Partition,
    ) -> &mut Self {
        let value = value::display(value);
        if value.is_none() && attributes.is_empty() {
            return self;
        }
        let value = sanitize(value.as_deref().unwrap_or_default());

        let (name, partition) = match name.strip_prefix(TWITTER_PREFIX) {
            Some(rest) => {
                self.config.twitter = true;
                tracing::trace!(name, "routing tag to twitter partition");
                (rest.replace('_', ":"), Partition::Twitter)
            }
            None => (name.to_owned(), partition),
        };

        self.tags.insert(partition, name, TagEntry { value, attributes });
        self
    }

    pub fn get(&self, name: &str, partition: Partition) -> Option<&TagEntry> {
        self.tags.get(partition, name)
    }

    /// Remove a named tag. Open Graph entries are not affected.
    pub fn forget(&mut self, name: &str, partition: Partition) -> &mut Self {
        if self.tags.remove(partition, name).is_some() {
            tracing::debug!(name, %partition, "forgot tag");
        }
        self
    }

    /// Read-only view of the tag partitions.
    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    // ========================================================================
    // Open Graph Primitives
    // ========================================================================

    /// Append an Open Graph property and mirror it into the general partition.
    ///
    /// Unlike [`set`](Self::set), an absent value is still appended and
    /// renders as an `og:` element with empty content. The general mirror
    /// skips it as usual. Repeated names are all kept, in call order.
    pub fn open_graph(&mut self, name: &str, value: impl IntoScalar) -> &mut Self {
        let value = value::display(value);
        self.set(name, value.clone());
        self.og_tags.push(OpenGraphEntry {
            name: name.to_owned(),
            value,
        });
        self
    }

    /// [`open_graph`](Self::open_graph) for each pair, in iteration order.
    pub fn open_graph_many<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoScalar,
    {
        for (name, value) in pairs {
            self.open_graph(name.as_ref(), value);
        }
        self
    }

    /// Open Graph entries in render order.
    pub fn open_graph_entries(&self) -> &[OpenGraphEntry] {
        &self.og_tags
    }

    /// Set `og:type`.
    pub fn r#type(&mut self, og_type: &str) -> &mut Self {
        self.og_type = og_type.to_owned();
        self
    }

    /// Set `og:type` and add each attribute as `og:<type>:<key>`.
    ///
    /// `("book", [("isbn", "ISBN-123")])` renders `og:type = book` and
    /// `og:book:isbn = ISBN-123`. The composite names also land in the
    /// general partition, as every Open Graph property does.
    pub fn type_with_attributes<I, K, V>(&mut self, og_type: &str, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoScalar,
    {
        self.r#type(og_type);
        for (key, value) in attributes {
            self.open_graph(&format!("{og_type}:{}", key.as_ref()), value);
        }
        self
    }

    pub fn og_type(&self) -> &str {
        &self.og_type
    }
}
