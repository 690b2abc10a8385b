use thiserror::Error;

use crate::core::artwork::{ArtworkRecord, ImageRef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("gallery has no artworks; at least one record is required")]
    EmptyGallery,
    #[error("artwork {field} must not be empty")]
    EmptyField { field: &'static str },
}

const JOJO_1: ImageRef = ImageRef::embedded("jojo1.png", include_bytes!("../../assets/images/jojo1.png"));
const JOJO_2: ImageRef = ImageRef::embedded("jojo2.png", include_bytes!("../../assets/images/jojo2.png"));
const JOJO_3: ImageRef = ImageRef::embedded("jojo3.png", include_bytes!("../../assets/images/jojo3.png"));
const JOJO_4: ImageRef = ImageRef::embedded("jojo4.png", include_bytes!("../../assets/images/jojo4.png"));

/// Fixed, ordered catalog of artworks. Never empty.
#[derive(Debug, Clone)]
pub struct GalleryModel {
    records: Vec<ArtworkRecord>,
}

impl GalleryModel {
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self, GalleryError> {
        if records.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        Ok(Self { records })
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, GalleryError> {
        Self::new(vec![
            ArtworkRecord::new(JOJO_1, "Jojo's playing", "Lonlon", "2022")?,
            ArtworkRecord::new(JOJO_2, "Jojo's chilling", "Lonlon", "2022")?,
            ArtworkRecord::new(JOJO_3, "Jojo's sleeping", "Lonlon", "2022")?,
            ArtworkRecord::new(JOJO_4, "Jojo's rolling", "Lonlon", "2022")?,
        ])
    }

    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &ArtworkRecord {
        match self.records.get(index) {
            Some(record) => record,
            None => panic!(
                "artwork index {} out of range for gallery of {}",
                index,
                self.records.len()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }
}
