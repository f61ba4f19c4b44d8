//! Convenience setters. Each one is a thin layer over [`MetaTags::set`],
//! [`MetaTags::open_graph`] or one of the auxiliary lists.

use super::{
    MetaTags,
    kinds::{FEED_ATOM, FEED_RSS, PageLink, TwitterCard, og_type},
};
use crate::{
    store::{Attributes, CustomTag, HttpEquiv, Link, MetaAttribute},
    value::{IntoScalar, date},
};
use chrono::{DateTime, TimeZone};

impl MetaTags {
    // ========================================================================
    // Content
    // ========================================================================

    /// Page title, also rendered as `og:title` and `twitter:title`.
    pub fn title(&mut self, value: impl IntoScalar) -> &mut Self {
        self.open_graph("title", value)
    }

    /// Page description, also rendered as `og:description` and
    /// `twitter:description`.
    pub fn description(&mut self, value: impl IntoScalar) -> &mut Self {
        self.open_graph("description", value)
    }

    /// Comma-joined keywords. An empty list sets nothing.
    pub fn keywords<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = join(values, ",");
        self.set("keywords", (!joined.is_empty()).then_some(joined))
    }

    pub fn char_set(&mut self, char_set: impl Into<String>) -> &mut Self {
        self.char_set = Some(char_set.into());
        self
    }

    /// Drop the `<meta charset>` element.
    pub fn clear_char_set(&mut self) -> &mut Self {
        self.char_set = None;
        self
    }

    /// Page URL, rendered as the `url` meta and as `og:url`.
    pub fn url(&mut self, url: impl IntoScalar) -> &mut Self {
        self.open_graph("url", url)
    }

    pub fn viewport(&mut self, value: impl IntoScalar) -> &mut Self {
        self.set("viewport", value)
    }

    pub fn locale(&mut self, locale: impl IntoScalar) -> &mut Self {
        self.open_graph("locale", locale)
    }

    pub fn site_name(&mut self, name: impl IntoScalar) -> &mut Self {
        self.open_graph("site_name", name)
    }

    // ========================================================================
    // Links
    // ========================================================================

    pub fn canonical(&mut self, url: impl Into<String>) -> &mut Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn first_page(&mut self, url: impl Into<String>) -> &mut Self {
        self.page(PageLink::First, url)
    }

    pub fn next_page(&mut self, url: impl Into<String>) -> &mut Self {
        self.page(PageLink::Next, url)
    }

    pub fn previous_page(&mut self, url: impl Into<String>) -> &mut Self {
        self.page(PageLink::Prev, url)
    }

    pub fn last_page(&mut self, url: impl Into<String>) -> &mut Self {
        self.page(PageLink::Last, url)
    }

    fn page(&mut self, page: PageLink, url: impl Into<String>) -> &mut Self {
        self.pagination.insert(page, url.into());
        self
    }

    /// Web app manifest link.
    pub fn manifest(&mut self, url: impl Into<String>) -> &mut Self {
        self.manifest = Some(url.into());
        self
    }

    /// Append a `<link>`. Duplicate relations are kept.
    pub fn add_link(
        &mut self,
        url: impl Into<String>,
        rel: impl Into<String>,
        attributes: Attributes,
    ) -> &mut Self {
        self.links.push(Link {
            url: url.into(),
            rel: rel.into(),
            attributes,
        });
        self
    }

    /// `rel="alternate"` feed link of the given MIME type.
    pub fn add_feed(
        &mut self,
        mime_type: &str,
        url: impl Into<String>,
        title: Option<&str>,
    ) -> &mut Self {
        let mut attributes = Attributes::new();
        attributes.insert("type".to_owned(), mime_type.to_owned());
        if let Some(title) = title.filter(|title| !title.is_empty()) {
            attributes.insert("title".to_owned(), title.to_owned());
        }
        self.add_link(url, "alternate", attributes)
    }

    pub fn add_rss_feed(&mut self, url: impl Into<String>, title: Option<&str>) -> &mut Self {
        self.add_feed(FEED_RSS, url, title)
    }

    pub fn add_atom_feed(&mut self, url: impl Into<String>, title: Option<&str>) -> &mut Self {
        self.add_feed(FEED_ATOM, url, title)
    }

    // ========================================================================
    // Robots
    // ========================================================================

    pub fn robots_should_index_but_not_follow(&mut self) -> &mut Self {
        self.robots("index", "nofollow")
    }

    pub fn robots_should_follow_but_not_index(&mut self) -> &mut Self {
        self.robots("noindex", "follow")
    }

    pub fn robots_should_not_index_nor_follow(&mut self) -> &mut Self {
        self.robots("noindex", "nofollow")
    }

    /// Sets `robots` and feeds the same tokens to googlebot.
    fn robots(&mut self, index: &str, follow: &str) -> &mut Self {
        self.google_bot.push(index.to_owned());
        self.google_bot.push(follow.to_owned());
        self.set("robots", format!("{index}, {follow}"))
    }

    pub fn google_should_not_include_snippets(&mut self) -> &mut Self {
        self.google_directive("nosnippet")
    }

    pub fn google_should_not_show_cached_links(&mut self) -> &mut Self {
        self.google_directive("noarchive")
    }

    pub fn google_should_not_show_page_as_referring_page_for_image_search_results(
        &mut self,
    ) -> &mut Self {
        self.google_directive("nopageindex")
    }

    /// `unavailable_after:<date>`.
    pub fn google_should_stop_crawling_after<Tz: TimeZone>(
        &mut self,
        date: &DateTime<Tz>,
    ) -> &mut Self {
        let directive = format!("unavailable_after:{}", date::to_iso8601(&date.fixed_offset()));
        self.google_directive(&directive)
    }

    fn google_directive(&mut self, directive: &str) -> &mut Self {
        self.google_bot.push(directive.to_owned());
        self
    }

    // ========================================================================
    // HTTP-Equiv
    // ========================================================================

    /// Append an `http-equiv` meta. The same property may be added repeatedly.
    pub fn http_equiv(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.http_equiv.push(HttpEquiv {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn content_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.http_equiv("content-type", value)
    }

    pub fn tell_browsers_not_to_cache(&mut self) -> &mut Self {
        self.http_equiv("pragma", "no-cache")
            .http_equiv("cache-control", "max-age=0")
            .http_equiv("cache-control", "no-cache")
            .http_equiv("cache-control", "no-store")
    }

    // ========================================================================
    // Custom & Facebook
    // ========================================================================

    /// Append a free-form meta keyed by `name` or `property`.
    ///
    /// The value is stored as given, without sanitizing.
    pub fn custom(
        &mut self,
        name: impl Into<String>,
        value: impl IntoScalar,
        attribute: MetaAttribute,
    ) -> &mut Self {
        self.custom.push(CustomTag {
            name: name.into(),
            value: crate::value::display(value).unwrap_or_default(),
            attribute,
        });
        self
    }

    pub fn facebook_app_id(&mut self, app_id: impl IntoScalar) -> &mut Self {
        self.custom("fb:app_id", app_id, MetaAttribute::Property)
    }

    pub fn facebook_profile_id(&mut self, profile_id: impl IntoScalar) -> &mut Self {
        self.custom("fb:profile_id", profile_id, MetaAttribute::Property)
    }

    pub fn facebook_pages<I, S>(&mut self, pages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom("fb:pages", join(pages, ", "), MetaAttribute::Property)
    }

    pub fn facebook_admins<I, S>(&mut self, admins: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom("fb:admins", join(admins, ", "), MetaAttribute::Property)
    }

    // ========================================================================
    // Twitter
    // ========================================================================

    pub fn twitter_card(&mut self, card: TwitterCard) -> &mut Self {
        self.set("twitter_card", card.as_str())
    }

    pub fn twitter_title(&mut self, value: impl IntoScalar) -> &mut Self {
        self.set("twitter_title", value)
    }

    pub fn twitter_site(&mut self, value: impl IntoScalar) -> &mut Self {
        self.set("twitter_site", value)
    }

    pub fn twitter_creator(&mut self, value: impl IntoScalar) -> &mut Self {
        self.set("twitter_creator", value)
    }

    pub fn twitter_description(&mut self, value: impl IntoScalar) -> &mut Self {
        self.set("twitter_description", value)
    }

    // ========================================================================
    // Type Shortcuts
    // ========================================================================

    pub fn is_article(&mut self) -> &mut Self {
        self.r#type(og_type::ARTICLE)
    }

    pub fn is_book(&mut self) -> &mut Self {
        self.r#type(og_type::BOOK)
    }

    pub fn is_profile(&mut self) -> &mut Self {
        self.r#type(og_type::PROFILE)
    }

    pub fn is_business(&mut self) -> &mut Self {
        self.r#type(og_type::BUSINESS)
    }

    // ========================================================================
    // Address & Contact
    // ========================================================================

    pub fn street_address(&mut self, address: impl IntoScalar) -> &mut Self {
        self.open_graph("street-address", address)
    }

    pub fn locality(&mut self, locality: impl IntoScalar) -> &mut Self {
        self.open_graph("locality", locality)
    }

    pub fn region(&mut self, region: impl IntoScalar) -> &mut Self {
        self.open_graph("region", region)
    }

    pub fn postal_code(&mut self, postal_code: impl IntoScalar) -> &mut Self {
        self.open_graph("postal-code", postal_code)
    }

    pub fn country(&mut self, country: impl IntoScalar) -> &mut Self {
        self.open_graph("country-name", country)
    }

    pub fn email(&mut self, email: impl IntoScalar) -> &mut Self {
        self.open_graph("email", email)
    }

    pub fn phone(&mut self, phone: impl IntoScalar) -> &mut Self {
        self.open_graph("phone_number", phone)
    }

    pub fn fax(&mut self, fax: impl IntoScalar) -> &mut Self {
        self.open_graph("fax_number", fax)
    }

    pub fn website(&mut self, website: impl IntoScalar) -> &mut Self {
        self.open_graph("website", website)
    }

    // ========================================================================
    // Output Options
    // ========================================================================

    pub fn include_open_graph(&mut self, include: bool) -> &mut Self {
        self.include_og = include;
        self
    }

    /// Mirror title, description and image as schema.org `itemprop` metas.
    ///
    /// The page's `<html>` element then needs an `itemscope itemtype=...`.
    pub fn include_schema_org(&mut self, include: bool) -> &mut Self {
        self.include_schema_org = include;
        self
    }

    /// Text written before every element.
    pub fn tag_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.tag_prefix = prefix.into();
        self
    }

    /// Text written after every element. Defaults to a newline.
    pub fn tag_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.tag_suffix = suffix.into();
        self
    }

    /// Render elements back to back, with no prefix or suffix.
    pub fn verbose(&mut self) -> &mut Self {
        self.tag_prefix.clear();
        self.tag_suffix.clear();
        self
    }
}

fn join<I, S>(values: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(separator)
}
