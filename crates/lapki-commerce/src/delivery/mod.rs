//! Delivery module.
//!
//! City-based cost estimation and the shop's delivery options.

mod estimator;
mod method;

pub use estimator::{
    in_courier_zone, normalize_city, price_for, DeliveryEstimator, DeliveryQuote, CITY_PRICES,
    COURIER_ZONE, FALLBACK_PRICE,
};
pub use method::DeliveryMethod;
