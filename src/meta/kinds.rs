//! Enumerated values used by the setters.

/// Values for `og:type`.
pub mod og_type {
    /// The default.
    pub const WEBSITE: &str = "website";
    pub const ARTICLE: &str = "article";
    pub const BOOK: &str = "book";
    pub const PROFILE: &str = "profile";
    pub const BUSINESS: &str = "business.business";
    pub const MUSIC_SONG: &str = "music.song";
    pub const MUSIC_ALBUM: &str = "music.album";
    pub const MUSIC_PLAYLIST: &str = "music.playlist";
    pub const MUSIC_RADIO_STATION: &str = "music.radio_station";
    pub const VIDEO_MOVIE: &str = "video.movie";
    pub const VIDEO_EPISODE: &str = "video.episode";
    pub const VIDEO_TV_SHOW: &str = "video.tv_show";
    pub const VIDEO_OTHER: &str = "video.other";
}

/// MIME type of an RSS feed link.
pub const FEED_RSS: &str = "application/rss+xml";
/// MIME type of an Atom feed link.
pub const FEED_ATOM: &str = "application/atom+xml";

/// Twitter card layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TwitterCard {
    #[default]
    Summary,
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

/// Pagination link relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLink {
    First,
    Next,
    Prev,
    Last,
}

impl PageLink {
    /// Value of the `rel` attribute.
    pub const fn rel(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Last => "last",
        }
    }
}
