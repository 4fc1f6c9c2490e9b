//! Photo gallery and lightbox.

mod image;
mod lightbox;
mod navigator;

pub use image::{builtin_images, GalleryImage};
pub use lightbox::Lightbox;
pub use navigator::{GalleryNavigator, GallerySelection};
