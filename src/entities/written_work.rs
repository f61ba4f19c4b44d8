//! Articles and books.
//!
//! Both carry a [`WrittenWork`] with their authors and tags.

use chrono::{DateTime, FixedOffset, TimeZone};

/// Fields shared by articles and books.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrittenWork {
    pub author: Vec<String>,
    pub tag: Vec<String>,
}

impl WrittenWork {
    pub fn add_author(&mut self, author: impl Into<String>) {
        self.author.push(author.into());
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tag.push(tag.into());
    }
}

// ============================================================================
// Article
// ============================================================================

/// An `og:article` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Article {
    pub work: WrittenWork,
    pub published_time: Option<DateTime<FixedOffset>>,
    pub modified_time: Option<DateTime<FixedOffset>>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
    pub section: Option<String>,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.work.add_author(author);
        self
    }

    /// Replace the author list.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work.author = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Append one tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.work.add_tag(tag);
        self
    }

    /// Replace the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work.tag = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_published_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.published_time = Some(time.fixed_offset());
        self
    }

    pub fn with_modified_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.modified_time = Some(time.fixed_offset());
        self
    }

    pub fn with_expiration_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.expiration_time = Some(time.fixed_offset());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

// ============================================================================
// Book
// ============================================================================

/// An `og:book` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Book {
    pub work: WrittenWork,
    pub isbn: Option<String>,
    pub release_date: Option<DateTime<FixedOffset>>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.work.add_author(author);
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work.author = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.work.add_tag(tag);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work.tag = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_release_date<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.release_date = Some(date.fixed_offset());
        self
    }
}
