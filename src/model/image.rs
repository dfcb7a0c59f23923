//! Image identifiers and the fetched image record.
//!
//! Identifiers validate at construction time. Raw constructors are never
//! exported - use smart constructors only.

use std::fmt;

/// Provider-assigned image identifier.
///
/// Not guaranteed unique across pages; the provider may return the same
/// image twice when its ranking shifts between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    /// Wrap a provider id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute URL of an image rendition. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Smart constructor: validates the URL is non-empty after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidImageUrl> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidImageUrl::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an [`ImageUrl`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidImageUrl {
    /// The URL was empty or whitespace.
    #[error("Image URL cannot be empty")]
    Empty,
}

// ===== ImageItem =====

/// One search result. Immutable once fetched.
///
/// `full_url` is the identity used when locating an image in the
/// accumulated result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    id: ImageId,
    thumbnail_url: ImageUrl,
    full_url: ImageUrl,
    tags: String,
    user: String,
}

impl ImageItem {
    /// Image without tags or author.
    pub fn new(id: ImageId, thumbnail_url: ImageUrl, full_url: ImageUrl) -> Self {
        Self {
            id,
            thumbnail_url,
            full_url,
            tags: String::new(),
            user: String::new(),
        }
    }

    /// Attach display metadata (comma separated tags and author name).
    pub fn with_metadata(mut self, tags: impl Into<String>, user: impl Into<String>) -> Self {
        self.tags = tags.into();
        self.user = user.into();
        self
    }

    /// Provider id. Not guaranteed unique across pages.
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Small rendition shown in the grid.
    pub fn thumbnail_url(&self) -> &ImageUrl {
        &self.thumbnail_url
    }

    /// Full-size rendition; also the image's identity.
    pub fn full_url(&self) -> &ImageUrl {
        &self.full_url
    }

    /// Comma-separated tags, possibly empty.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Uploader name, possibly empty.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Whether two items denote the same image for navigation purposes.
    pub fn same_image(&self, other: &ImageItem) -> bool {
        self.full_url == other.full_url
    }

    /// Short human-readable label: tags if present, otherwise the id.
    pub fn label(&self) -> String {
        if self.tags.trim().is_empty() {
            format!("#{}", self.id)
        } else {
            self.tags.clone()
        }
    }
}
