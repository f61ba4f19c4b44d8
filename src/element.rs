//! Markup element descriptors and their serialization.
//!
//! [`MetaTags::build`](crate::MetaTags::build) decides *which* elements to
//! emit; this module turns each one into markup. Attribute values and text
//! are escaped with quick-xml.

use anyhow::Result;
use quick_xml::{
    Writer,
    escape::escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write as _};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Tag names the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Meta,
    Title,
    Link,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Title => "title",
            Self::Link => "link",
        }
    }
}

/// One element of rendered output: a tag, ordered attributes, optional text.
///
/// Elements with text are written as `<tag>text</tag>`, the rest as empty
/// elements `<tag a="b" />`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attributes: Vec<(String, String)>,
    text: Option<String>,
}

impl Element {
    /// `<meta ... />` with the given attributes in order.
    pub fn meta<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: Tag::Meta,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            text: None,
        }
    }

    /// `<title>text</title>`.
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            tag: Tag::Title,
            attributes: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// `<link rel=... href=... />` followed by extra attributes.
    pub fn link<'a>(
        rel: &str,
        href: &str,
        extra: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        let mut attributes = vec![
            ("rel".to_owned(), rel.to_owned()),
            ("href".to_owned(), href.to_owned()),
        ];
        attributes.extend(extra.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            tag: Tag::Link,
            attributes,
            text: None,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// First value of the named attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Write this element.
    pub fn write(&self, writer: &mut XmlWriter) -> Result<()> {
        match &self.text {
            Some(text) => self.write_text_element(writer, text),
            None => self.write_empty_element(writer),
        }
    }

    fn write_text_element(&self, writer: &mut XmlWriter, text: &str) -> Result<()> {
        let name = self.tag.as_str();
        let mut start = BytesStart::new(name);
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// `<tag key="value" ... />`. quick-xml's `Event::Empty` has no space
    /// before the slash, so the bytes are written directly.
    fn write_empty_element(&self, writer: &mut XmlWriter) -> Result<()> {
        let out = writer.get_mut();
        write!(out, "<{}", self.tag.as_str())?;
        for (key, value) in &self.attributes {
            write!(out, " {key}=\"{}\"", escape(value.as_str()))?;
        }
        out.write_all(b" />")?;
        Ok(())
    }

    /// Serialize to a markup string.
    ///
    /// Writing goes to memory; should the writer still fail, the element is
    /// dropped from output with a warning.
    pub fn to_html(&self) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        match self.write(&mut writer) {
            Ok(()) => String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned(),
            Err(err) => {
                tracing::warn!(tag = self.tag.as_str(), "failed to serialize element: {err:#}");
                String::new()
            }
        }
    }
}
