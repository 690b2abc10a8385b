use std::fmt;

use crate::core::gallery::GalleryError;

/// Opaque handle to an artwork image: an asset name plus the bytes
/// embedded in the binary. Only the asset layer looks inside.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    name: &'static str,
    bytes: &'static [u8],
}

impl ImageRef {
    pub const fn embedded(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRef")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One displayable artwork. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    image_ref: ImageRef,
    title: String,
    author: String,
    year: String,
}

impl ArtworkRecord {
    pub fn new(
        image_ref: ImageRef,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Self, GalleryError> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(GalleryError::EmptyField { field: "title" });
        }
        if author.trim().is_empty() {
            return Err(GalleryError::EmptyField { field: "author" });
        }
        Ok(Self {
            image_ref,
            title,
            author,
            year: year.into(),
        })
    }

    pub fn image_ref(&self) -> ImageRef {
        self.image_ref
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }
}
