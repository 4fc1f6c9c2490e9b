//! Shopping cart module.
//!
//! Contains the cart, its line items, and the pricing summaries rendered from it.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSnapshot, OrderSummary, DEFAULT_FREE_DELIVERY_THRESHOLD};
