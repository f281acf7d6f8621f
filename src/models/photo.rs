use std::collections::HashSet;

use crate::error::{GalleryError, Result};

/// Identifies one item of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoIdentity {
    pub id: i64,
    pub title: String,
}

impl PhotoIdentity {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Ordered photo list handed to the grid.
///
/// Grid keys and viewer lookups are by id, so ids must be unique.
#[derive(Debug, Clone, Default)]
pub struct PhotoLibrary {
    photos: Vec<PhotoIdentity>,
}

impl PhotoLibrary {
    pub fn new(photos: Vec<PhotoIdentity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(photos.len());
        for photo in &photos {
            if !seen.insert(photo.id) {
                return Err(GalleryError::DuplicatePhotoId(photo.id));
            }
        }
        Ok(Self { photos })
    }

    pub fn get(&self, id: i64) -> Option<&PhotoIdentity> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoIdentity> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
