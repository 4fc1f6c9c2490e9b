//! Product catalog module.
//!
//! The catalog is a fixed, ordered table of products loaded at startup.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::Product;
pub use store::Catalog;
