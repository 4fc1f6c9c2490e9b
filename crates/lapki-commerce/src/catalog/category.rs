//! Category listing derived from the catalog.

use serde::{Deserialize, Serialize};

/// A product category with the number of products filed under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category label (as shown on product badges).
    pub name: String,
    /// Number of products in this category.
    pub product_count: usize,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product_count: 0,
        }
    }

    /// Check if the category has no products.
    pub fn is_empty(&self) -> bool {
        self.product_count == 0
    }
}
