//! The page state, assembled from its managers.
//!
//! `Storefront` owns one of each manager and routes view actions to the one
//! that owns the affected state. The delivery estimator and the lightbox are
//! optional features; actions aimed at a disabled feature fail with
//! [`StoreError::FeatureDisabled`].

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartSnapshot, OrderSummary, DEFAULT_FREE_DELIVERY_THRESHOLD};
use crate::catalog::Catalog;
use crate::contacts::Contacts;
use crate::delivery::{DeliveryEstimator, DeliveryQuote};
use crate::error::StoreError;
use crate::gallery::{GalleryImage, GallerySelection, Lightbox};
use crate::ids::ProductId;
use crate::money::Money;
use crate::navigation::{PageSection, SectionNavigator};
use crate::notify::Notifier;

/// Optional parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreFeatures {
    /// City-based delivery estimate form.
    pub delivery_estimator: bool,
    /// Full-size photo viewer.
    pub lightbox: bool,
    /// Subtotal from which quoted delivery is waived.
    pub free_delivery_threshold: Money,
}

impl StoreFeatures {
    /// The plain catalog page: no estimator, no lightbox.
    pub fn basic() -> Self {
        Self {
            delivery_estimator: false,
            lightbox: false,
            ..Self::default()
        }
    }
}

impl Default for StoreFeatures {
    fn default() -> Self {
        Self {
            delivery_estimator: true,
            lightbox: true,
            free_delivery_threshold: DEFAULT_FREE_DELIVERY_THRESHOLD,
        }
    }
}

/// Everything the view needs to redraw the page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StorefrontSnapshot {
    pub cart: CartSnapshot,
    /// None when the estimator is disabled or nothing was estimated yet.
    pub delivery_quote: Option<DeliveryQuote>,
    /// None when the lightbox is disabled.
    pub gallery: Option<GallerySelection>,
    pub active_section: PageSection,
    pub summary: OrderSummary,
}

/// Single-page storefront state.
pub struct Storefront {
    features: StoreFeatures,
    catalog: Catalog,
    contacts: Contacts,
    cart: Cart,
    delivery: Option<DeliveryEstimator>,
    lightbox: Option<Lightbox>,
    sections: SectionNavigator,
    notifier: Box<dyn Notifier>,
}

impl Storefront {
    /// Create a storefront over the built-in catalog and gallery.
    pub fn new(features: StoreFeatures, notifier: impl Notifier + 'static) -> Self {
        Self::with_catalog(features, Catalog::builtin(), notifier)
    }

    /// Create a storefront over a custom catalog.
    pub fn with_catalog(
        features: StoreFeatures,
        catalog: Catalog,
        notifier: impl Notifier + 'static,
    ) -> Self {
        tracing::debug!(
            delivery_estimator = features.delivery_estimator,
            lightbox = features.lightbox,
            products = catalog.len(),
            "storefront created"
        );
        Self {
            features,
            catalog,
            contacts: Contacts::builtin(),
            cart: Cart::new(),
            delivery: features.delivery_estimator.then(DeliveryEstimator::new),
            lightbox: features.lightbox.then(Lightbox::default),
            sections: SectionNavigator::new(),
            notifier: Box::new(notifier),
        }
    }

    pub fn features(&self) -> StoreFeatures {
        self.features
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                self.cart.add_to_cart(product, self.notifier.as_ref());
                true
            }
            None => {
                tracing::warn!(%product_id, "ignoring add for unknown product");
                false
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove_from_cart(product_id)
    }

    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> bool {
        self.cart.update_quantity(product_id, delta)
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Estimate delivery for raw city input.
    pub fn estimate_delivery(&mut self, city_input: &str) -> Result<DeliveryQuote, StoreError> {
        let estimator = self
            .delivery
            .as_mut()
            .ok_or(StoreError::FeatureDisabled("delivery_estimator"))?;
        estimator.estimate(city_input, self.notifier.as_ref())
    }

    pub fn delivery_quote(&self) -> Option<&DeliveryQuote> {
        self.delivery.as_ref().and_then(DeliveryEstimator::last_quote)
    }

    fn lightbox_mut(&mut self) -> Result<&mut Lightbox, StoreError> {
        self.lightbox
            .as_mut()
            .ok_or(StoreError::FeatureDisabled("lightbox"))
    }

    pub fn gallery_images(&self) -> &[GalleryImage] {
        self.lightbox.as_ref().map(Lightbox::images).unwrap_or(&[])
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn open_image(&mut self, index: usize) -> Result<GallerySelection, StoreError> {
        let lightbox = self.lightbox_mut()?;
        lightbox.navigator_mut().open(index);
        Ok(lightbox.selection())
    }

    pub fn close_image(&mut self) -> Result<GallerySelection, StoreError> {
        let lightbox = self.lightbox_mut()?;
        lightbox.navigator_mut().close();
        Ok(lightbox.selection())
    }

    pub fn next_image(&mut self) -> Result<GallerySelection, StoreError> {
        let lightbox = self.lightbox_mut()?;
        lightbox.navigator_mut().next();
        Ok(lightbox.selection())
    }

    pub fn previous_image(&mut self) -> Result<GallerySelection, StoreError> {
        let lightbox = self.lightbox_mut()?;
        lightbox.navigator_mut().previous();
        Ok(lightbox.selection())
    }

    /// Jump to a page section; returns the anchor to scroll to.
    pub fn scroll_to(&mut self, section: PageSection) -> &'static str {
        self.sections.scroll_to(section)
    }

    pub fn active_section(&self) -> PageSection {
        self.sections.active()
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::compute(
            &self.cart,
            self.delivery_quote(),
            self.features.free_delivery_threshold,
        )
    }

    pub fn snapshot(&self) -> StorefrontSnapshot {
        StorefrontSnapshot {
            cart: self.cart.snapshot(),
            delivery_quote: self.delivery_quote().cloned(),
            gallery: self.lightbox.as_ref().map(Lightbox::selection),
            active_section: self.sections.active(),
            summary: self.order_summary(),
        }
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("features", &self.features)
            .field("cart", &self.cart)
            .field("delivery", &self.delivery)
            .field("lightbox", &self.lightbox)
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationLog, NullNotifier};
    use std::rc::Rc;

    #[test]
    fn test_full_featured_storefront() {
        let mut store = Storefront::new(StoreFeatures::default(), NullNotifier);
        assert!(store.add_to_cart(ProductId::new(1)));
        assert!(store.estimate_delivery("Москва").is_ok());
        assert_eq!(store.open_image(2), Ok(GallerySelection::Open(2)));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.cart.total, Money::new(450));
        assert_eq!(snapshot.delivery_quote.unwrap().price, Money::new(300));
        assert_eq!(snapshot.gallery, Some(GallerySelection::Open(2)));
        assert_eq!(snapshot.summary.grand_total, Money::new(750));
    }

    #[test]
    fn test_basic_storefront_rejects_optional_features() {
        let mut store = Storefront::new(StoreFeatures::basic(), NullNotifier);

        assert_eq!(
            store.estimate_delivery("Москва"),
            Err(StoreError::FeatureDisabled("delivery_estimator"))
        );
        assert_eq!(
            store.open_image(0),
            Err(StoreError::FeatureDisabled("lightbox"))
        );
        assert_eq!(store.next_image(), Err(StoreError::FeatureDisabled("lightbox")));
        assert!(store.gallery_images().is_empty());

        let snapshot = store.snapshot();
        assert!(snapshot.delivery_quote.is_none());
        assert!(snapshot.gallery.is_none());
    }

    #[test]
    fn test_cart_works_without_optional_features() {
        let mut store = Storefront::new(StoreFeatures::basic(), NullNotifier);
        store.add_to_cart(ProductId::new(2));
        store.update_quantity(ProductId::new(2), 2);
        assert_eq!(store.total_price(), Money::new(960));
    }

    #[test]
    fn test_unknown_product_add_is_ignored() {
        let log = Rc::new(NotificationLog::new());
        let mut store = Storefront::new(StoreFeatures::default(), Rc::clone(&log));

        assert!(!store.add_to_cart(ProductId::new(99)));
        assert!(store.cart().is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_notifications_reach_shared_log() {
        let log = Rc::new(NotificationLog::new());
        let mut store = Storefront::new(StoreFeatures::default(), Rc::clone(&log));

        store.add_to_cart(ProductId::new(6));
        let _ = store.estimate_delivery(" ");
        store.estimate_delivery("Атлантида").unwrap();

        let messages: Vec<_> = log.entries().into_iter().map(|n| n.message).collect();
        assert_eq!(
            messages,
            vec![
                "Лакомство с лососем добавлено в корзину!".to_string(),
                "Введите название города".to_string(),
                "Доставка в Атлантида: 350 \u{20bd}".to_string(),
            ]
        );
    }

    #[test]
    fn test_scroll_to() {
        let mut store = Storefront::new(StoreFeatures::default(), NullNotifier);
        assert_eq!(store.active_section(), PageSection::Home);
        assert_eq!(store.scroll_to(PageSection::Catalog), "catalog");
        assert_eq!(store.snapshot().active_section, PageSection::Catalog);
    }

    #[test]
    fn test_contacts_section_has_details() {
        let mut store = Storefront::new(StoreFeatures::basic(), NullNotifier);
        assert_eq!(store.scroll_to(PageSection::Contacts), "contacts");
        let phone = store.contacts().get(crate::contacts::ContactKind::Phone).unwrap();
        assert_eq!(phone.value, "+7 (495) 123-45-67");
    }

    #[test]
    fn test_features_deserialize_with_defaults() {
        let features: StoreFeatures = serde_json::from_str(r#"{"lightbox": false}"#).unwrap();
        assert!(features.delivery_estimator);
        assert!(!features.lightbox);
        assert_eq!(features.free_delivery_threshold, Money::new(2000));
    }
}
