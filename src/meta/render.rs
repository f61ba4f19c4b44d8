//! Head element assembly.
//!
//! [`MetaTags::build`] walks the accumulated state in a fixed section order
//! and never mutates it. Truncation limits are applied here, on the way out,
//! so stored values stay whole.

use super::{MetaTags, kinds::PageLink};
use crate::{element::Element, store::Partition, value::sanitize::truncate};
use std::{borrow::Cow, fmt};

/// Tags mirrored as schema.org `itemprop` metas, with their itemprop name.
const SCHEMA_ORG_MIRRORS: [(&str, &str); 3] =
    [("title", "name"), ("description", "description"), ("image", "image")];

/// General tags that feed the Twitter block unless overridden there.
const TWITTER_DERIVED: [&str; 2] = ["title", "description"];

impl MetaTags {
    /// Produce the head elements in render order.
    pub fn build(&self) -> Vec<Element> {
        let mut output = Vec::new();

        if let Some(char_set) = &self.char_set {
            output.push(Element::meta([("charset", char_set.as_str())]));
        }

        if self.include_og && !self.og_type.is_empty() {
            output.push(Element::meta([
                ("name", "og:type"),
                ("property", "og:type"),
                ("content", self.og_type.as_str()),
            ]));
        }

        if let Some(title) = self.get("title", Partition::General) {
            output.push(Element::title(title.value.as_str()));
        }

        if let Some(description) = self.get("description", Partition::General) {
            let content = self.truncated("description", &description.value);
            output.push(Element::meta([("name", "description"), ("content", &*content)]));
        }

        if self.include_schema_org {
            for (name, itemprop) in SCHEMA_ORG_MIRRORS {
                if let Some(tag) = self.get(name, Partition::General) {
                    output.push(Element::meta([
                        ("itemprop", itemprop),
                        ("content", tag.value.as_str()),
                    ]));
                }
            }
        }

        for name in &self.config.basic {
            if let Some(tag) = self.get(name, Partition::General) {
                output.push(Element::meta([
                    ("name", name.as_str()),
                    ("content", tag.value.as_str()),
                ]));
            }
        }

        self.build_links(&mut output);
        self.build_open_graph(&mut output);
        self.build_twitter(&mut output);
        self.build_directives(&mut output);

        for link in &self.links {
            output.push(Element::link(&link.rel, &link.url, &link.attributes));
        }

        tracing::debug!(elements = output.len(), "built head elements");
        output
    }

    /// Serialize [`build`](Self::build), wrapping each element in the
    /// configured prefix and suffix.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for element in self.build() {
            html.push_str(&self.tag_prefix);
            html.push_str(&element.to_html());
            html.push_str(&self.tag_suffix);
        }
        html
    }

    // ========================================================================
    // Sections
    // ========================================================================

    /// Canonical, pagination and manifest links.
    fn build_links(&self, output: &mut Vec<Element>) {
        let no_extra = std::iter::empty();

        if let Some(canonical) = self.canonical.as_deref().filter(|url| !url.is_empty()) {
            output.push(Element::link("canonical", canonical, no_extra.clone()));
        }

        // `first` always leads; the rest keep the order they were set in
        let first = self.pagination.get_key_value(&PageLink::First);
        let rest = self
            .pagination
            .iter()
            .filter(|(page, _)| **page != PageLink::First);
        for (page, url) in first.into_iter().chain(rest) {
            output.push(Element::link(page.rel(), url, no_extra.clone()));
        }

        if let Some(manifest) = self.manifest.as_deref().filter(|url| !url.is_empty()) {
            output.push(Element::link("manifest", manifest, no_extra));
        }
    }

    fn build_open_graph(&self, output: &mut Vec<Element>) {
        if !self.include_og {
            return;
        }
        for entry in &self.og_tags {
            let property = format!("og:{}", entry.name);
            let content = self.truncated(&property, entry.value.as_deref().unwrap_or_default());
            output.push(Element::meta([
                ("name", property.as_str()),
                ("property", property.as_str()),
                ("content", &*content),
            ]));
        }
    }

    fn build_twitter(&self, output: &mut Vec<Element>) {
        if !self.twitter_enabled() {
            return;
        }

        for name in TWITTER_DERIVED {
            if self.tags.contains(Partition::Twitter, name) {
                continue;
            }
            if let Some(tag) = self.get(name, Partition::General) {
                let key = format!("twitter:{name}");
                let content = self.truncated(&key, &tag.value);
                output.push(Element::meta([("name", key.as_str()), ("content", &*content)]));
            }
        }

        for (name, tag) in self.tags.iter(Partition::Twitter) {
            output.push(Element::meta([
                ("name", format!("twitter:{name}")),
                ("content", tag.value.clone()),
            ]));
        }
    }

    /// Googlebot, http-equiv and custom metas.
    fn build_directives(&self, output: &mut Vec<Element>) {
        if !self.google_bot.is_empty() {
            output.push(Element::meta([
                ("name", "googlebot".to_owned()),
                ("content", self.google_bot.join(", ")),
            ]));
        }

        for equiv in &self.http_equiv {
            output.push(Element::meta([
                ("http-equiv", equiv.property.as_str()),
                ("content", equiv.value.as_str()),
            ]));
        }

        for tag in &self.custom {
            output.push(Element::meta([
                (tag.attribute.as_str(), tag.name.as_str()),
                ("content", tag.value.as_str()),
            ]));
        }
    }

    /// Apply the configured limit for a logical tag name, if any.
    fn truncated<'a>(&self, name: &str, value: &'a str) -> Cow<'a, str> {
        match self.config.truncate_limit(name) {
            Some(limit) => truncate(value, limit),
            None => Cow::Borrowed(value),
        }
    }
}

impl fmt::Display for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::MetaConfig,
        element::{Element, Tag},
        entities::{Article, Image},
        meta::{MetaTags, kinds::og_type},
        store::{Attributes, Partition},
    };

    /// Content of the single meta whose `attribute` equals `name`.
    fn content_of(elements: &[Element], attribute: &str, name: &str) -> Option<String> {
        let mut matches = elements
            .iter()
            .filter(|e| e.tag() == Tag::Meta && e.attr(attribute) == Some(name));
        let found = matches.next()?;
        assert!(matches.next().is_none(), "`{name}` rendered more than once");
        found.attr("content").map(str::to_owned)
    }

    fn all_contents(elements: &[Element], attribute: &str, name: &str) -> Vec<String> {
        elements
            .iter()
            .filter(|e| e.attr(attribute) == Some(name))
            .filter_map(|e| e.attr("content").map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_default_state() {
        let meta = MetaTags::new();
        assert_eq!(
            meta.render(),
            "<meta charset=\"utf-8\" />\n\
             <meta name=\"og:type\" property=\"og:type\" content=\"website\" />\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut meta = MetaTags::new();
        meta.title("Page Title")
            .description("A page")
            .canonical("http://example.com/page")
            .robots_should_follow_but_not_index()
            .add_image(&Image::new("http://example.com/a.jpg"));

        let first = meta.render();
        assert_eq!(first, meta.render());
        assert_eq!(first, meta.to_string());
    }

    #[test]
    fn test_set_empty_does_not_change_output() {
        let mut meta = MetaTags::new();
        meta.title("Page Title");
        let before = meta.render();

        meta.set("keywords", None::<&str>)
            .set("title", None::<String>)
            .set("twitter_site", None::<&str>);
        assert_eq!(before, meta.render());
    }

    #[test]
    fn test_title() {
        let mut meta = MetaTags::new();
        meta.title("Page Title");
        let elements = meta.build();

        let title = elements.iter().find(|e| e.tag() == Tag::Title).unwrap();
        assert_eq!(title.text(), Some("Page Title"));
        assert_eq!(content_of(&elements, "property", "og:title").as_deref(), Some("Page Title"));
        assert!(meta.render().contains("<title>Page Title</title>\n"));
    }

    #[test]
    fn test_title_keeps_less_than_text() {
        let mut meta = MetaTags::new();
        meta.title("Rust < C++ and why");
        let elements = meta.build();

        let title = elements.iter().find(|e| e.tag() == Tag::Title).unwrap();
        assert_eq!(title.text(), Some("Rust < C++ and why"));
        assert_eq!(
            content_of(&elements, "name", "twitter:title").as_deref(),
            Some("Rust < C++ and why")
        );
        assert!(meta.render().contains("<title>Rust &lt; C++ and why</title>"));
    }

    #[test]
    fn test_description_truncated_to_limit() {
        let long = "a".repeat(230);
        let mut meta = MetaTags::new();
        meta.description(&long);
        let elements = meta.build();

        let description = content_of(&elements, "name", "description").unwrap();
        assert_eq!(description.chars().count(), 160);
        assert!(description.ends_with("..."));

        let og = content_of(&elements, "property", "og:description").unwrap();
        assert_eq!(og.chars().count(), 200);

        // stored value is untouched
        assert_eq!(meta.get("description", Partition::General).unwrap().value, long);
    }

    #[test]
    fn test_short_description_unchanged() {
        let mut meta = MetaTags::new();
        meta.description("Short");
        assert_eq!(content_of(&meta.build(), "name", "description").as_deref(), Some("Short"));
    }

    #[test]
    fn test_truncation_follows_config() {
        let config = MetaConfig::default().with_truncate([("description", 10)]);
        let mut meta = MetaTags::with_config(config);
        meta.description("This is far too long");
        let elements = meta.build();

        assert_eq!(content_of(&elements, "name", "description").as_deref(), Some("This is..."));
        // the overlay replaced the whole table
        assert_eq!(
            content_of(&elements, "property", "og:description").as_deref(),
            Some("This is far too long")
        );
    }

    #[test]
    fn test_schema_org_mirrors() {
        let mut meta = MetaTags::new();
        meta.title("Page Title").description("Words").include_schema_org(true);
        let elements = meta.build();

        assert_eq!(content_of(&elements, "itemprop", "name").as_deref(), Some("Page Title"));
        assert_eq!(content_of(&elements, "itemprop", "description").as_deref(), Some("Words"));
        assert_eq!(content_of(&elements, "itemprop", "image"), None);
    }

    #[test]
    fn test_schema_org_off_by_default() {
        let mut meta = MetaTags::new();
        meta.title("Page Title");
        assert_eq!(content_of(&meta.build(), "itemprop", "name"), None);
    }

    #[test]
    fn test_basic_tags_follow_allow_list_order() {
        let mut meta = MetaTags::new();
        meta.viewport("width=device-width")
            .keywords(["one", "two"])
            .set("not-listed", "x");
        let elements = meta.build();

        let names: Vec<_> = elements
            .iter()
            .filter(|e| e.attr("name").is_some() && e.attr("property").is_none())
            .filter_map(|e| e.attr("name"))
            .collect();
        assert_eq!(names, vec!["keywords", "viewport"]);
        assert_eq!(content_of(&elements, "name", "keywords").as_deref(), Some("one,two"));
    }

    #[test]
    fn test_custom_basic_list() {
        let config = MetaConfig::default().with_basic(["subject"]);
        let mut meta = MetaTags::with_config(config);
        meta.set("subject", "Rust").viewport("width=device-width");
        let elements = meta.build();

        assert_eq!(content_of(&elements, "name", "subject").as_deref(), Some("Rust"));
        assert_eq!(content_of(&elements, "name", "viewport"), None);
    }

    #[test]
    fn test_link_section_order() {
        let mut meta = MetaTags::new();
        meta.add_link("/style.css", "stylesheet", Attributes::new())
            .manifest("/manifest.json")
            .last_page("/page/9")
            .next_page("/page/3")
            .previous_page("/page/1")
            .first_page("/page/0")
            .canonical("/page/2");

        let links: Vec<_> = meta
            .build()
            .iter()
            .filter(|e| e.tag() == Tag::Link)
            .map(|e| (e.attr("rel").unwrap().to_owned(), e.attr("href").unwrap().to_owned()))
            .collect();
        let rels: Vec<_> = links.iter().map(|(rel, _)| rel.as_str()).collect();
        assert_eq!(
            rels,
            vec!["canonical", "first", "last", "next", "prev", "manifest", "stylesheet"]
        );
        assert_eq!(links[1].1, "/page/0");
    }

    #[test]
    fn test_link_renders_rel_then_href() {
        let mut meta = MetaTags::new();
        meta.canonical("http://example.com");
        assert!(
            meta.render()
                .contains("<link rel=\"canonical\" href=\"http://example.com\" />")
        );
    }

    #[test]
    fn test_open_graph_disabled() {
        let mut meta = MetaTags::new();
        meta.title("Page Title").include_open_graph(false);
        let elements = meta.build();

        assert!(elements.iter().all(|e| e.attr("property").is_none()));
        assert_eq!(content_of(&elements, "name", "twitter:title").as_deref(), Some("Page Title"));
    }

    #[test]
    fn test_empty_type_skips_og_type() {
        let mut meta = MetaTags::new();
        meta.r#type("");
        assert_eq!(content_of(&meta.build(), "property", "og:type"), None);
    }

    #[test]
    fn test_open_graph_repeats_render_in_order() {
        let mut meta = MetaTags::new();
        meta.add_image(&Image::new("http://example.com/1.jpg"))
            .add_image(&Image::new("http://example.com/2.jpg"));

        assert_eq!(
            all_contents(&meta.build(), "property", "og:image"),
            vec!["http://example.com/1.jpg", "http://example.com/2.jpg"]
        );
    }

    #[test]
    fn test_open_graph_empty_value_renders_empty_content() {
        let mut meta = MetaTags::new();
        meta.open_graph("locale", None::<&str>);
        assert!(
            meta.render()
                .contains("<meta name=\"og:locale\" property=\"og:locale\" content=\"\" />")
        );
    }

    #[test]
    fn test_article_authors_fan_out() {
        let mut meta = MetaTags::new();
        meta.add_article(&Article::default().with_authors(["Joe Bloggs", "Harry Black"]));

        assert_eq!(
            all_contents(&meta.build(), "property", "og:article:author"),
            vec!["Joe Bloggs", "Harry Black"]
        );
    }

    #[test]
    fn test_twitter_title_derived_and_truncated() {
        let mut meta = MetaTags::new();
        meta.title(
            "Page Title that is too long and should be truncated to 70 characters, because this is too long",
        );
        assert_eq!(
            content_of(&meta.build(), "name", "twitter:title").as_deref(),
            Some("Page Title that is too long and should be truncated to 70 character...")
        );
    }

    #[test]
    fn test_twitter_title_override() {
        let mut meta = MetaTags::new();
        meta.title("Page Title").twitter_title("Twitter Page Title");
        assert_eq!(
            content_of(&meta.build(), "name", "twitter:title").as_deref(),
            Some("Twitter Page Title")
        );
    }

    #[test]
    fn test_twitter_description_derived() {
        let mut meta = MetaTags::new();
        meta.description("About this page");
        assert_eq!(
            content_of(&meta.build(), "name", "twitter:description").as_deref(),
            Some("About this page")
        );
    }

    #[test]
    fn test_twitter_disabled_by_config() {
        let mut meta = MetaTags::with_config(MetaConfig::default().with_twitter(false));
        meta.title("Page Title");
        assert_eq!(content_of(&meta.build(), "name", "twitter:title"), None);

        // any twitter_ tag turns the block back on
        meta.twitter_site("@nytimesbits");
        let elements = meta.build();
        assert_eq!(content_of(&elements, "name", "twitter:title").as_deref(), Some("Page Title"));
        assert_eq!(content_of(&elements, "name", "twitter:site").as_deref(), Some("@nytimesbits"));
    }

    #[test]
    fn test_type_with_attributes_renders() {
        let mut meta = MetaTags::new();
        meta.type_with_attributes(og_type::BOOK, [("isbn", "ISBN-123-1234")]);
        let elements = meta.build();

        assert_eq!(content_of(&elements, "property", "og:type").as_deref(), Some("book"));
        assert_eq!(
            content_of(&elements, "property", "og:book:isbn").as_deref(),
            Some("ISBN-123-1234")
        );
    }

    #[test]
    fn test_googlebot_accumulates() {
        let mut meta = MetaTags::new();
        meta.robots_should_follow_but_not_index()
            .google_should_not_include_snippets()
            .google_should_not_show_cached_links();
        let elements = meta.build();

        assert_eq!(
            content_of(&elements, "name", "googlebot").as_deref(),
            Some("noindex, follow, nosnippet, noarchive")
        );
        assert_eq!(content_of(&elements, "name", "robots").as_deref(), Some("noindex, follow"));
    }

    #[test]
    fn test_http_equiv_repeats() {
        let mut meta = MetaTags::new();
        meta.tell_browsers_not_to_cache();
        let elements = meta.build();

        assert_eq!(content_of(&elements, "http-equiv", "pragma").as_deref(), Some("no-cache"));
        assert_eq!(
            all_contents(&elements, "http-equiv", "cache-control"),
            vec!["max-age=0", "no-cache", "no-store"]
        );
    }

    #[test]
    fn test_custom_attribute_per_entry() {
        let mut meta = MetaTags::new();
        meta.custom("csrf-token", "abc", Default::default())
            .facebook_app_id("1234");
        let elements = meta.build();

        assert_eq!(content_of(&elements, "name", "csrf-token").as_deref(), Some("abc"));
        assert_eq!(content_of(&elements, "property", "fb:app_id").as_deref(), Some("1234"));
    }

    #[test]
    fn test_section_order() {
        let mut meta = MetaTags::new();
        meta.add_link("/style.css", "stylesheet", Attributes::new())
            .custom("csrf-token", "abc", Default::default())
            .content_type("text/html")
            .google_should_not_show_cached_links()
            .twitter_card(Default::default())
            .locale("en_GB")
            .manifest("/manifest.json")
            .canonical("/")
            .viewport("width=device-width")
            .description("Words")
            .title("Title");

        let keys: Vec<String> = meta
            .build()
            .iter()
            .map(|e| match e.tag() {
                Tag::Title => "title".to_owned(),
                Tag::Link => format!("link:{}", e.attr("rel").unwrap_or_default()),
                Tag::Meta => e.attributes()[0].1.clone(),
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                "utf-8",
                "og:type",
                "title",
                "description",
                "viewport",
                "link:canonical",
                "link:manifest",
                "og:locale",
                "og:description",
                "og:title",
                "twitter:title",
                "twitter:description",
                "twitter:card",
                "googlebot",
                "content-type",
                "csrf-token",
                "link:stylesheet",
            ]
        );
    }

    #[test]
    fn test_prefix_suffix_and_verbose() {
        let mut meta = MetaTags::new();
        meta.tag_prefix("  ").tag_suffix("\r\n");
        assert_eq!(
            meta.render(),
            "  <meta charset=\"utf-8\" />\r\n  \
             <meta name=\"og:type\" property=\"og:type\" content=\"website\" />\r\n"
        );

        meta.verbose();
        assert_eq!(
            meta.render(),
            "<meta charset=\"utf-8\" /><meta name=\"og:type\" property=\"og:type\" content=\"website\" />"
        );
    }

    #[test]
    fn test_clear_char_set() {
        let mut meta = MetaTags::new();
        meta.char_set("iso-8859-1");
        assert!(meta.render().starts_with("<meta charset=\"iso-8859-1\" />"));

        meta.clear_char_set();
        assert!(!meta.render().contains("charset"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut meta = MetaTags::new();
        meta.custom("note", "a & b", Default::default());
        assert!(meta.render().contains("content=\"a &amp; b\""));
    }
}
