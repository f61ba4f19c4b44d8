//! Plain records consumed by the Open Graph object setters
//! ([`MetaTags::add_image`](crate::MetaTags::add_image),
//! [`MetaTags::add_article`](crate::MetaTags::add_article), ...).
//!
//! Absent fields are `None`. Note that the object setters still emit an
//! Open Graph element for most absent fields, with empty content.

mod business;
mod media;
mod place;
mod profile;
mod written_work;

pub use business::{BusinessDay, UnknownWeekday, Weekday};
pub use media::{Audio, Image, Video};
pub use place::{ContactData, Geopoint};
pub use profile::{Gender, Profile};
pub use written_work::{Article, Book, WrittenWork};
