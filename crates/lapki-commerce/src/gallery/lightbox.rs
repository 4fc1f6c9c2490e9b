//! Navigator paired with the image list it walks.

use crate::gallery::{GalleryImage, GalleryNavigator, GallerySelection};

/// Full-size photo viewer over a fixed image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    navigator: GalleryNavigator,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        let navigator = GalleryNavigator::new(images.len());
        Self { images, navigator }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut GalleryNavigator {
        &mut self.navigator
    }

    pub fn selection(&self) -> GallerySelection {
        self.navigator.selection()
    }

    /// The image being shown, if the lightbox is open.
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.navigator.current().and_then(|i| self.images.get(i))
    }

    /// "k / N" label for the open image.
    pub fn position_label(&self) -> Option<String> {
        self.navigator
            .current()
            .map(|i| format!("{} / {}", i + 1, self.images.len()))
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(crate::gallery::builtin_images())
    }
}
