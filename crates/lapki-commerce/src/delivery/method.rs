//! Delivery options offered by the shop.

use std::str::FromStr;

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A way to get the order to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Courier within Moscow.
    Courier,
    /// Russian Post, anywhere in the country.
    RussianPost,
    /// Pickup from the shop.
    Pickup,
}

impl DeliveryMethod {
    /// All methods in display order.
    pub const ALL: [DeliveryMethod; 3] = [
        DeliveryMethod::Courier,
        DeliveryMethod::RussianPost,
        DeliveryMethod::Pickup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => "courier",
            DeliveryMethod::RussianPost => "russian_post",
            DeliveryMethod::Pickup => "pickup",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => "Курьером",
            DeliveryMethod::RussianPost => "Почта России",
            DeliveryMethod::Pickup => "Самовывоз",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => {
                "Доставка по Москве в течение 1-2 дней. При заказе от 2000 ₽ — бесплатно!"
            }
            DeliveryMethod::RussianPost => {
                "Отправка в любую точку России. Срок доставки 5-14 дней в зависимости от региона."
            }
            DeliveryMethod::Pickup => {
                "Забирайте заказ из нашего магазина (Москва, ул. Примерная, 15) на следующий день после оформления."
            }
        }
    }

    /// Delivery window in days.
    pub fn delivery_days(&self) -> (u32, u32) {
        match self {
            DeliveryMethod::Courier => (1, 2),
            DeliveryMethod::RussianPost => (5, 14),
            DeliveryMethod::Pickup => (1, 1),
        }
    }

    /// Starting price, before any free-delivery waiver.
    pub fn base_price(&self) -> Money {
        match self {
            DeliveryMethod::Courier => Money::new(250),
            DeliveryMethod::RussianPost => Money::new(350),
            DeliveryMethod::Pickup => Money::zero(),
        }
    }

    /// Price label as shown on the delivery cards.
    pub fn price_label(&self) -> String {
        if self.base_price().is_zero() {
            "Бесплатно".to_string()
        } else {
            format!("от {}", self.base_price())
        }
    }

    /// Subtotal from which this method is free, if it ever is.
    ///
    /// Courier delivery is waived from the shop's configured threshold.
    pub fn free_from(&self, courier_threshold: Money) -> Option<Money> {
        match self {
            DeliveryMethod::Courier => Some(courier_threshold),
            DeliveryMethod::RussianPost => None,
            DeliveryMethod::Pickup => Some(Money::zero()),
        }
    }

    /// Check if the method is free for an order of this size.
    pub fn is_free_for(&self, subtotal: Money, courier_threshold: Money) -> bool {
        self.free_from(courier_threshold)
            .is_some_and(|threshold| subtotal >= threshold)
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> String {
        match self.delivery_days() {
            (min, max) if min == max => format!("{} дн.", min),
            (min, max) => format!("{}-{} дн.", min, max),
        }
    }

}

impl FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "courier" => Ok(DeliveryMethod::Courier),
            "russian_post" | "post" => Ok(DeliveryMethod::RussianPost),
            "pickup" => Ok(DeliveryMethod::Pickup),
            other => Err(format!("unknown delivery method '{}'", other)),
        }
    }
}
