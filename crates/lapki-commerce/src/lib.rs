//! Storefront state for the ЛапкиЛакомки pet-treat shop.
//!
//! This crate holds everything the single-page shop keeps in memory:
//!
//! - **Catalog**: the fixed product table
//! - **Cart**: line items merged by product, quantity floor of 1
//! - **Delivery**: city to price lookup with a fallback, delivery methods
//! - **Gallery**: circular lightbox navigation over the customer photos
//! - **Navigation**: the active page section
//! - **Contacts**: the shop's phone, email, address and socials
//!
//! Managers never call each other. A view dispatches actions into them (or
//! into [`Storefront`], which owns one of each) and redraws from snapshots.
//!
//! # Example
//!
//! ```rust
//! use lapki_commerce::prelude::*;
//!
//! let mut store = Storefront::new(StoreFeatures::default(), NullNotifier);
//! store.add_to_cart(ProductId::new(1));
//! store.add_to_cart(ProductId::new(1));
//! store.add_to_cart(ProductId::new(2));
//! assert_eq!(store.total_price(), Money::new(1220));
//!
//! let quote = store.estimate_delivery(" МОСКВА ").unwrap();
//! assert_eq!(quote.price, Money::new(300));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod contacts;
pub mod delivery;
pub mod gallery;
pub mod navigation;
pub mod storefront;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;
pub use storefront::{StoreFeatures, Storefront, StorefrontSnapshot};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::notify::{
        Notification, NotificationLevel, NotificationLog, Notifier, NullNotifier, TracingNotifier,
    };

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSnapshot, OrderSummary};

    // Delivery
    pub use crate::delivery::{DeliveryEstimator, DeliveryMethod, DeliveryQuote};

    // Gallery
    pub use crate::gallery::{GalleryImage, GalleryNavigator, GallerySelection, Lightbox};

    // Contacts
    pub use crate::contacts::{ContactChannel, ContactKind, Contacts};

    // Page
    pub use crate::navigation::{PageSection, SectionNavigator};
    pub use crate::storefront::{StoreFeatures, Storefront, StorefrontSnapshot};
}
