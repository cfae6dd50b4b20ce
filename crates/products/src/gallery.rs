//! Product images.

use std::collections::BTreeSet;

use catalog_core::{DomainError, DomainResult, ValueObject};

/// URL schemes an image may be served from.
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> DomainResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::missing("URL cannot be empty"));
        }
        if !ACCEPTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Err(DomainError::validation(format!("Invalid URL format: {url}")));
        }
        Ok(Self(url))
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ImageUrl {}

/// Set of image URLs; duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Gallery {
    images: BTreeSet<ImageUrl>,
}

impl Gallery {
    pub fn new(images: impl IntoIterator<Item = ImageUrl>) -> Self {
        Self {
            images: images.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of this gallery with `image` merged in.
    pub fn with_image(&self, image: ImageUrl) -> Self {
        let mut images = self.images.clone();
        images.insert(image);
        Self { images }
    }

    pub fn images(&self) -> &BTreeSet<ImageUrl> {
        &self.images
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(ImageUrl::url)
    }

    pub fn contains(&self, image: &ImageUrl) -> bool {
        self.images.contains(image)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ValueObject for Gallery {}
