//! City to delivery-price lookup.

use crate::error::StoreError;
use crate::money::Money;
use crate::notify::{Notification, Notifier};
use serde::{Deserialize, Serialize};

/// Price charged for any city missing from [`CITY_PRICES`].
pub const FALLBACK_PRICE: Money = Money::new(350);

/// Known city spellings, already normalized, and their delivery price.
///
/// Several aliases may map to the same city.
pub const CITY_PRICES: &[(&str, Money)] = &[
    ("москва", Money::new(300)),
    ("мск", Money::new(300)),
    ("moscow", Money::new(300)),
    ("санкт-петербург", Money::new(400)),
    ("спб", Money::new(400)),
    ("питер", Money::new(400)),
    ("казань", Money::new(450)),
    ("нижний новгород", Money::new(450)),
    ("екатеринбург", Money::new(500)),
    ("екб", Money::new(500)),
    ("новосибирск", Money::new(600)),
];

/// Normalized spellings served by the courier, where free delivery applies.
pub const COURIER_ZONE: &[&str] = &["москва", "мск", "moscow"];

/// Trim and lower-case a city name. Returns None when nothing is left.
pub fn normalize_city(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Exact lookup of a normalized city name, falling back to [`FALLBACK_PRICE`].
pub fn price_for(normalized: &str) -> Money {
    CITY_PRICES
        .iter()
        .find(|(city, _)| *city == normalized)
        .map(|(_, price)| *price)
        .unwrap_or(FALLBACK_PRICE)
}

/// Whether a normalized city is served by the courier.
pub fn in_courier_zone(normalized: &str) -> bool {
    COURIER_ZONE.contains(&normalized)
}

/// The last computed delivery estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryQuote {
    /// City as the customer typed it.
    pub city: String,
    /// Delivery price.
    pub price: Money,
    /// Courier delivery inside Moscow; only these quotes can be waived.
    #[serde(default)]
    pub courier_zone: bool,
}

/// Holds the most recent quote and produces new ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryEstimator {
    last_quote: Option<DeliveryQuote>,
}

impl DeliveryEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate delivery for raw user input.
    ///
    /// Blank input is reported to the user and leaves the previous quote in
    /// place. Otherwise the new quote replaces the previous one.
    pub fn estimate(
        &mut self,
        city_input: &str,
        notifier: &dyn Notifier,
    ) -> Result<DeliveryQuote, StoreError> {
        let Some(normalized) = normalize_city(city_input) else {
            tracing::warn!("delivery estimate requested for blank city");
            notifier.notify(Notification::error("Введите название города"));
            return Err(StoreError::EmptyCity);
        };

        let price = price_for(&normalized);
        let quote = DeliveryQuote {
            city: city_input.to_string(),
            price,
            courier_zone: in_courier_zone(&normalized),
        };
        tracing::debug!(city = %normalized, price = price.amount(), "delivery estimated");
        notifier.notify(Notification::success(format!(
            "Доставка в {}: {}",
            city_input, price
        )));

        self.last_quote = Some(quote.clone());
        Ok(quote)
    }

    /// The most recent successful quote.
    pub fn last_quote(&self) -> Option<&DeliveryQuote> {
        self.last_quote.as_ref()
    }
}
