//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are built once from the static table and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description shown on the card.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Glyph rendered in place of a photo.
    pub glyph: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
            glyph: glyph.into(),
        }
    }

    /// Check if the product belongs to a category (exact label match).
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
