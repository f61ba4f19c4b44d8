//! headmeta - HTML head metadata builder.
//!
//! Collects page metadata (title, description, robots directives, Open Graph
//! objects, Twitter Card tags, links) into one [`MetaTags`] accumulator and
//! renders it as a block of `<meta>`, `<title>` and `<link>` elements.
//!
//! ```
//! use headmeta::{MetaTags, entities::Image};
//!
//! let mut meta = MetaTags::new();
//! meta.title("Page Title")
//!     .description("What this page is about")
//!     .canonical("https://example.com/page")
//!     .add_image(&Image::new("https://example.com/cover.jpg"));
//!
//! let head = meta.render();
//! assert!(head.contains("<title>Page Title</title>"));
//! assert!(head.contains("property=\"og:image\""));
//! ```

pub mod config;
pub mod element;
pub mod entities;
mod meta;
pub mod store;
pub mod value;

pub use config::{ConfigError, MetaConfig};
pub use element::{Element, Tag};
pub use meta::{
    MetaTags,
    kinds::{FEED_ATOM, FEED_RSS, PageLink, TwitterCard, og_type},
};
pub use store::{Attributes, MetaAttribute, Partition};
pub use value::{IntoScalar, Scalar};
