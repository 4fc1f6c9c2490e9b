//! Cart and line item types.

use crate::cart::CartSnapshot;
use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::notify::{Notification, Notifier};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per product, in the order products were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Bumps the quantity of an existing line, or appends a new line with
    /// quantity 1. Notifies the user either way and returns the new quantity.
    pub fn add_to_cart(&mut self, product: &Product, notifier: &dyn Notifier) -> u32 {
        let quantity = match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));
                1
            }
        };

        tracing::debug!(product_id = %product.id, quantity, "added to cart");
        notifier.notify(Notification::success(format!(
            "{} добавлено в корзину!",
            product.name
        )));
        quantity
    }

    /// Remove the line for a product.
    ///
    /// Unknown ids are ignored. Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "removed from cart");
        }
        removed
    }

    /// Shift a line's quantity by `delta`, never going below 1.
    ///
    /// Removal is the only way to drop a line. Unknown ids are ignored.
    /// Returns whether a line was found.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) else {
            return false;
        };

        let shifted = i64::from(line.quantity).saturating_add(delta).max(1);
        line.quantity = u32::try_from(shifted).unwrap_or(u32::MAX);
        tracing::debug!(%product_id, delta, quantity = line.quantity, "quantity updated");
        true
    }

    /// Sum of price times quantity over all lines, recomputed on every call.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Like [`Cart::total_price`] but reports overflow instead of wrapping.
    pub fn checked_total(&self) -> Result<Money, StoreError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::checked_subtotal)
            .collect::<Option<Vec<_>>>()
            .ok_or(StoreError::Overflow)?;
        Money::try_sum(subtotals).ok_or(StoreError::Overflow)
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct products (the header badge count).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Immutable copy of the cart for rendering.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total_price(),
            line_count: self.line_count(),
            item_count: self.item_count(),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }

    fn checked_subtotal(&self) -> Option<Money> {
        self.product.price.checked_mul(self.quantity)
    }
}
