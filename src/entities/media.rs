//! Audio, image and video records.

/// An `og:audio` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Audio {
    pub url: Option<String>,
    pub secure_url: Option<String>,
    /// MIME type, e.g. `audio/mpeg`.
    pub mime_type: Option<String>,
}

impl Audio {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = Some(url.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }
}

/// An `og:image` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub url: Option<String>,
    pub secure_url: Option<String>,
    pub mime_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = Some(url.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// An `og:video` object. `image` is the preview frame URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Video {
    pub url: Option<String>,
    pub secure_url: Option<String>,
    pub mime_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub image: Option<String>,
}

impl Video {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = Some(url.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
