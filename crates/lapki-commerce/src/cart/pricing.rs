//! Cart pricing summaries.

use crate::cart::{Cart, CartLine};
use crate::delivery::{DeliveryMethod, DeliveryQuote};
use crate::money::Money;
use serde::Serialize;

/// Courier orders in Moscow at or above this subtotal ship free.
pub const DEFAULT_FREE_DELIVERY_THRESHOLD: Money = Money::new(2000);

/// Immutable read of the cart for rendering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Lines in first-added order.
    pub lines: Vec<CartLine>,
    /// Sum of line subtotals.
    pub total: Money,
    /// Distinct products.
    pub line_count: usize,
    /// Total units.
    pub item_count: u64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart subtotal combined with the last delivery quote.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Cart total before delivery.
    pub subtotal: Money,
    /// Delivery charge, if a quote has been computed.
    pub delivery: Option<Money>,
    /// Whether the quoted delivery was waived by the threshold.
    pub free_delivery: bool,
    /// Whether the waiver can apply at all: no city quoted yet, or a
    /// courier-zone city.
    pub free_delivery_available: bool,
    /// Courier threshold this summary was computed with.
    pub free_threshold: Money,
    /// Subtotal plus delivery.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Combine a cart with an optional quote.
    ///
    /// Delivery is waived only for courier-zone quotes once the subtotal
    /// reaches `free_threshold`.
    pub fn compute(cart: &Cart, quote: Option<&DeliveryQuote>, free_threshold: Money) -> Self {
        let subtotal = cart.total_price();
        let free_delivery_available = quote.map_or(true, |q| q.courier_zone);
        let free_delivery = quote.is_some()
            && free_delivery_available
            && DeliveryMethod::Courier.is_free_for(subtotal, free_threshold);
        let delivery = quote.map(|q| if free_delivery { Money::zero() } else { q.price });

        Self {
            subtotal,
            delivery,
            free_delivery,
            free_delivery_available,
            free_threshold,
            grand_total: subtotal + delivery.unwrap_or_default(),
        }
    }

    /// How much more the customer needs to spend to reach the threshold.
    pub fn remaining_for_free_delivery(&self) -> Money {
        if self.subtotal >= self.free_threshold {
            Money::zero()
        } else {
            Money::new(self.free_threshold.amount() - self.subtotal.amount())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use crate::notify::NullNotifier;

    fn cart_with(ids: &[u32]) -> Cart {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for id in ids {
            cart.add_to_cart(catalog.get(ProductId::new(*id)).unwrap(), &NullNotifier);
        }
        cart
    }

    fn quote(price: i64) -> DeliveryQuote {
        DeliveryQuote {
            city: "Москва".to_string(),
            price: Money::new(price),
            courier_zone: true,
        }
    }

    fn regional_quote(city: &str, price: i64) -> DeliveryQuote {
        DeliveryQuote {
            city: city.to_string(),
            price: Money::new(price),
            courier_zone: false,
        }
    }

    #[test]
    fn test_summary_without_quote() {
        let cart = cart_with(&[1, 2]);
        let summary = OrderSummary::compute(&cart, None, DEFAULT_FREE_DELIVERY_THRESHOLD);

        assert_eq!(summary.subtotal, Money::new(770));
        assert_eq!(summary.delivery, None);
        assert!(!summary.free_delivery);
        assert_eq!(summary.grand_total, Money::new(770));
    }

    #[test]
    fn test_summary_adds_delivery() {
        let cart = cart_with(&[1, 2]);
        let q = quote(300);
        let summary = OrderSummary::compute(&cart, Some(&q), DEFAULT_FREE_DELIVERY_THRESHOLD);

        assert_eq!(summary.delivery, Some(Money::new(300)));
        assert_eq!(summary.grand_total, Money::new(1070));
        assert_eq!(summary.remaining_for_free_delivery(), Money::new(1230));
    }

    #[test]
    fn test_summary_waives_delivery_over_threshold() {
        // 450 + 320 + 280 + 520 + 380 + 490 = 2440
        let cart = cart_with(&[1, 2, 3, 4, 5, 6]);
        let q = quote(350);
        let summary = OrderSummary::compute(&cart, Some(&q), DEFAULT_FREE_DELIVERY_THRESHOLD);

        assert!(summary.free_delivery);
        assert_eq!(summary.delivery, Some(Money::zero()));
        assert_eq!(summary.grand_total, Money::new(2440));
        assert_eq!(summary.remaining_for_free_delivery(), Money::zero());
    }

    #[test]
    fn test_regional_delivery_is_never_waived() {
        let cart = cart_with(&[1, 2, 3, 4, 5, 6]);
        let q = regional_quote("Новосибирск", 600);
        let summary = OrderSummary::compute(&cart, Some(&q), DEFAULT_FREE_DELIVERY_THRESHOLD);

        assert!(!summary.free_delivery);
        assert_eq!(summary.delivery, Some(Money::new(600)));
        assert_eq!(summary.grand_total, Money::new(3040));
        assert!(!summary.free_delivery_available);
    }

    #[test]
    fn test_waiver_agrees_with_courier_method() {
        // 450 + 320 + 280 + 520 = 1570
        let cart = cart_with(&[1, 2, 3, 4]);
        let threshold = Money::new(1500);

        let moscow = OrderSummary::compute(&cart, Some(&quote(300)), threshold);
        assert_eq!(
            moscow.free_delivery,
            DeliveryMethod::Courier.is_free_for(moscow.subtotal, threshold)
        );
        assert!(moscow.free_delivery);

        let regional =
            OrderSummary::compute(&cart, Some(&regional_quote("Новосибирск", 600)), threshold);
        assert!(!regional.free_delivery);
        assert_eq!(regional.grand_total, Money::new(2170));
    }

    #[test]
    fn test_summary_keeps_its_threshold() {
        let cart = cart_with(&[1]);
        let summary = OrderSummary::compute(&cart, None, Money::new(1000));

        assert_eq!(summary.free_threshold, Money::new(1000));
        assert_eq!(summary.remaining_for_free_delivery(), Money::new(550));
        assert!(summary.free_delivery_available);
    }
}
