use std::collections::BTreeMap;

use crate::options::config::ImageMeta;

/// Looks up a page's background image by its attachment reference.
///
/// A missing or unreadable image is `None`; callers then render without an image.
pub trait MediaLibrary {
    fn lookup(&self, attachment_ref: &str) -> Option<ImageMeta>;
}

/// Fixed set of images keyed by reference.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMediaLibrary {
    images: BTreeMap<String, ImageMeta>,
}

impl InMemoryMediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: ImageMeta) -> Option<ImageMeta> {
        self.images.insert(image.attachment_ref.clone(), image)
    }

    pub fn with_image(mut self, image: ImageMeta) -> Self {
        self.insert(image);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl MediaLibrary for InMemoryMediaLibrary {
    fn lookup(&self, attachment_ref: &str) -> Option<ImageMeta> {
        self.images.get(attachment_ref.trim()).cloned()
    }
}

impl FromIterator<ImageMeta> for InMemoryMediaLibrary {
    fn from_iter<I: IntoIterator<Item = ImageMeta>>(iter: I) -> Self {
        let mut out = Self::new();
        for image in iter {
            out.insert(image);
        }
        out
    }
}
