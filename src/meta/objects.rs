//! Open Graph object setters.
//!
//! Each record is fanned out into `og:` properties in a fixed order. Most
//! absent fields still produce a property with empty content; dates, the
//! altitude and list fields are only written when present.

use super::{MetaTags, kinds::og_type};
use crate::{
    entities::{Article, Audio, Book, BusinessDay, ContactData, Geopoint, Image, Profile, Video},
    value::date,
};

impl MetaTags {
    pub fn add_image(&mut self, image: &Image) -> &mut Self {
        self.open_graph("image", image.url.as_deref())
            .open_graph("image:secure_url", image.secure_url.as_deref())
            .open_graph("image:type", image.mime_type.as_deref())
            .open_graph("image:width", image.width)
            .open_graph("image:height", image.height)
            .open_graph("image:alt", image.alt.as_deref())
    }

    pub fn add_video(&mut self, video: &Video) -> &mut Self {
        self.open_graph("video", video.url.as_deref())
            .open_graph("video:secure_url", video.secure_url.as_deref())
            .open_graph("video:type", video.mime_type.as_deref())
            .open_graph("video:width", video.width)
            .open_graph("video:height", video.height)
            .open_graph("video:image", video.image.as_deref())
    }

    pub fn add_audio(&mut self, audio: &Audio) -> &mut Self {
        self.open_graph("audio", audio.url.as_deref())
            .open_graph("audio:secure_url", audio.secure_url.as_deref())
            .open_graph("audio:type", audio.mime_type.as_deref())
    }

    /// Article properties. Does not change `og:type`; pair with
    /// [`is_article`](Self::is_article).
    pub fn add_article(&mut self, article: &Article) -> &mut Self {
        let times = [
            ("article:published_time", &article.published_time),
            ("article:modified_time", &article.modified_time),
            ("article:expiration_time", &article.expiration_time),
        ];
        for (name, time) in times {
            if let Some(time) = time {
                self.open_graph(name, date::to_atom(time));
            }
        }

        for author in &article.work.author {
            self.open_graph("article:author", author);
        }
        self.open_graph("article:section", article.section.as_deref());
        for tag in &article.work.tag {
            self.open_graph("article:tag", tag);
        }
        self
    }

    /// Profile properties; sets `og:type` to `profile`.
    pub fn profile(&mut self, profile: &Profile) -> &mut Self {
        self.is_profile()
            .open_graph("profile:first_name", profile.first_name.as_deref())
            .open_graph("profile:last_name", profile.last_name.as_deref())
            .open_graph("profile:username", profile.username.as_deref())
            .open_graph("profile:gender", profile.gender.map(|gender| gender.as_str()))
    }

    /// Book properties; sets `og:type` to `book`.
    pub fn book(&mut self, book: &Book) -> &mut Self {
        self.r#type(og_type::BOOK);

        for author in &book.work.author {
            self.open_graph("book:author", author);
        }
        self.open_graph("book:isbn", book.isbn.as_deref());
        if let Some(release_date) = &book.release_date {
            self.open_graph("book:release_date", date::to_atom(release_date));
        }
        for tag in &book.work.tag {
            self.open_graph("book:tag", tag);
        }
        self
    }

    /// Latitude and longitude, plus altitude when it is set and non-zero.
    pub fn add_geopoint(&mut self, point: &Geopoint) -> &mut Self {
        self.open_graph("latitude", point.latitude)
            .open_graph("longitude", point.longitude);
        if let Some(altitude) = point.altitude.filter(|altitude| *altitude != 0.0) {
            self.open_graph("altitude", altitude);
        }
        self
    }

    pub fn contact_data(&mut self, data: &ContactData) -> &mut Self {
        self.street_address(data.street_address.as_deref())
            .locality(data.locality.as_deref())
            .region(data.region.as_deref())
            .postal_code(data.postal_code.as_deref())
            .country(data.country_name.as_deref())
            .email(data.email.as_deref())
            .phone(data.phone.as_deref())
            .fax(data.fax_number.as_deref())
            .website(data.website.as_deref())
    }

    pub fn business_hours<'a>(
        &mut self,
        days: impl IntoIterator<Item = &'a BusinessDay>,
    ) -> &mut Self {
        for day in days {
            self.add_business_hours_for_day(day);
        }
        self
    }

    pub fn add_business_hours_for_day(&mut self, day: &BusinessDay) -> &mut Self {
        self.open_graph("business:hours:day", day.day.as_str())
            .open_graph("business:hours:start", day.start.as_str())
            .open_graph("business:hours:end", day.end.as_str())
    }
}
