//! Tag storage.
//!
//! Named tags live in three independent partitions. A name is unique within
//! its partition; writing it again replaces the entry but keeps its original
//! position, so partition iteration order is first-insertion order.
//!
//! Open Graph entries are kept apart in [`OpenGraphEntry`] lists because
//! the same property may legitimately repeat.

use indexmap::IndexMap;
use std::fmt;

/// Extra attributes attached to a tag or link, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// One of the name-keyed tag groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Partition {
    #[default]
    General,
    Twitter,
    Other,
}

impl Partition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Twitter => "twitter",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored content of a named tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagEntry {
    pub value: String,
    pub attributes: Attributes,
}

/// An Open Graph property, rendered as `og:<name>`.
///
/// `value` is `None` when the caller passed nothing; it still renders, with
/// empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraphEntry {
    pub name: String,
    pub value: Option<String>,
}

/// A `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub rel: String,
    pub attributes: Attributes,
}

/// An `http-equiv` directive. Properties may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEquiv {
    pub property: String,
    pub value: String,
}

/// A free-form meta tag keyed by `name` or `property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTag {
    pub name: String,
    pub value: String,
    pub attribute: MetaAttribute,
}

/// Attribute that carries the key of a custom meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetaAttribute {
    #[default]
    Name,
    Property,
}

impl MetaAttribute {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

// ============================================================================
// Tag Store
// ============================================================================

/// The three tag partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStore {
    general: IndexMap<String, TagEntry>,
    twitter: IndexMap<String, TagEntry>,
    other: IndexMap<String, TagEntry>,
}

impl Default for TagStore {
    /// `general` starts with `type = "website"`.
    fn default() -> Self {
        let mut general = IndexMap::new();
        general.insert(
            "type".to_owned(),
            TagEntry {
                value: crate::og_type::WEBSITE.to_owned(),
                attributes: Attributes::new(),
            },
        );
        Self {
            general,
            twitter: IndexMap::new(),
            other: IndexMap::new(),
        }
    }
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, partition: Partition) -> &IndexMap<String, TagEntry> {
        match partition {
            Partition::General => &self.general,
            Partition::Twitter => &self.twitter,
            Partition::Other => &self.other,
        }
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut IndexMap<String, TagEntry> {
        match partition {
            Partition::General => &mut self.general,
            Partition::Twitter => &mut self.twitter,
            Partition::Other => &mut self.other,
        }
    }

    /// Insert or replace, keeping the position of a replaced entry.
    pub fn insert(&mut self, partition: Partition, name: impl Into<String>, entry: TagEntry) {
        self.partition_mut(partition).insert(name.into(), entry);
    }

    pub fn get(&self, partition: Partition, name: &str) -> Option<&TagEntry> {
        self.partition(partition).get(name)
    }

    pub fn contains(&self, partition: Partition, name: &str) -> bool {
        self.partition(partition).contains_key(name)
    }

    /// Remove an entry; later entries keep their relative order.
    pub fn remove(&mut self, partition: Partition, name: &str) -> Option<TagEntry> {
        self.partition_mut(partition).shift_remove(name)
    }

    /// Entries of a partition in insertion order.
    pub fn iter(&self, partition: Partition) -> impl Iterator<Item = (&str, &TagEntry)> {
        self.partition(partition)
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self, partition: Partition) -> usize {
        self.partition(partition).len()
    }

    pub fn is_empty(&self, partition: Partition) -> bool {
        self.partition(partition).is_empty()
    }
}
