//! Gallery image records.

use serde::{Deserialize, Serialize};

/// A photo in the "happy customers" gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt: String,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

const PHOTO_BASE: &str = "https://images.unsplash.com";

/// The shop's customer photos, in display order.
pub fn builtin_images() -> Vec<GalleryImage> {
    [
        ("photo-1585664811087-47f65abbad64", "Рыжий шпиц"),
        ("photo-1534361960057-19889db9621e", "Счастливый шпиц"),
        ("photo-1623387641168-d9803ddd3f35", "Шпиц ждет лакомство"),
        ("photo-1583337130417-3346a1be7dee", "Милый шпиц"),
        ("photo-1596492784531-6e6eb5ea9993", "Радостный шпиц"),
        ("photo-1605568427561-40dd23c2acea", "Пушистый шпиц"),
        ("photo-1598133894008-61f7fdb8cc3a", "Игривый шпиц"),
        ("photo-1548199973-03cce0bbc87b", "Очаровательный шпиц"),
    ]
    .into_iter()
    .map(|(photo, alt)| {
        GalleryImage::new(
            format!("{}/{}?w=400&h=400&fit=crop", PHOTO_BASE, photo),
            alt,
        )
    })
    .collect()
}
