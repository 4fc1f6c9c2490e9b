//! End-to-end behaviour of the storefront managers.

use std::collections::HashMap;
use std::rc::Rc;

use lapki_commerce::delivery::FALLBACK_PRICE;
use lapki_commerce::prelude::*;

fn store() -> Storefront {
    Storefront::new(StoreFeatures::default(), NullNotifier)
}

fn quantity(store: &Storefront, id: u32) -> Option<u32> {
    store.cart().line(ProductId::new(id)).map(|l| l.quantity)
}

fn recomputed_total(store: &Storefront) -> Money {
    Money::new(
        store
            .cart()
            .lines()
            .iter()
            .map(|l| l.product.price.amount() * i64::from(l.quantity))
            .sum(),
    )
}

#[test]
fn test_checkout_scenario() {
    let mut store = store();

    store.add_to_cart(ProductId::new(1));
    store.add_to_cart(ProductId::new(1));
    store.add_to_cart(ProductId::new(2));
    assert_eq!(quantity(&store, 1), Some(2));
    assert_eq!(quantity(&store, 2), Some(1));
    assert_eq!(store.total_price(), Money::new(1220));

    store.update_quantity(ProductId::new(1), -5);
    assert_eq!(quantity(&store, 1), Some(1));
    assert_eq!(store.total_price(), Money::new(770)); // 450 + 320

    store.remove_from_cart(ProductId::new(2));
    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(quantity(&store, 1), Some(1));
    assert_eq!(store.total_price(), Money::new(450));
}

#[test]
fn test_lines_match_distinct_adds() {
    let sequence = [3, 1, 4, 1, 5, 2, 6, 5, 3, 5];
    let mut store = store();
    let mut counts: HashMap<u32, u32> = HashMap::new();

    for id in sequence {
        store.add_to_cart(ProductId::new(id));
        *counts.entry(id).or_default() += 1;
    }

    assert_eq!(store.cart().line_count(), counts.len());
    for (id, count) in counts {
        assert_eq!(quantity(&store, id), Some(count));
    }
}

#[test]
fn test_quantity_never_below_one() {
    let mut store = store();
    store.add_to_cart(ProductId::new(4));

    for delta in [-1, 0, -2, 3, -100, i64::MIN, -1] {
        store.update_quantity(ProductId::new(4), delta);
        assert!(quantity(&store, 4).unwrap() >= 1);
    }
}

#[test]
fn test_total_tracks_interleaved_operations() {
    let mut store = store();
    let ops: [(&str, u32, i64); 12] = [
        ("add", 1, 0),
        ("add", 2, 0),
        ("update", 1, 3),
        ("add", 6, 0),
        ("remove", 2, 0),
        ("update", 6, -4),
        ("add", 2, 0),
        ("remove", 99, 0),
        ("update", 99, 5),
        ("add", 1, 0),
        ("update", 2, 10),
        ("remove", 6, 0),
    ];

    for (op, id, delta) in ops {
        let id = ProductId::new(id);
        match op {
            "add" => {
                store.add_to_cart(id);
            }
            "remove" => {
                store.remove_from_cart(id);
            }
            _ => {
                store.update_quantity(id, delta);
            }
        }
        assert_eq!(store.total_price(), recomputed_total(&store));
        assert_eq!(store.snapshot().cart.total, store.total_price());
    }
}

#[test]
fn test_delivery_normalization() {
    let mut store = store();
    let prices: Vec<_> = ["Москва", " москва ", "МОСКВА"]
        .into_iter()
        .map(|city| store.estimate_delivery(city).unwrap().price)
        .collect();

    assert_eq!(prices[0], prices[1]);
    assert_eq!(prices[1], prices[2]);
}

#[test]
fn test_unknown_city_uses_fallback() {
    let mut store = store();
    let quote = store.estimate_delivery("Атлантида").unwrap();
    assert_eq!(quote.price, Money::new(350));
    assert_eq!(quote.price, FALLBACK_PRICE);
}

#[test]
fn test_blank_city_reports_error_without_quote() {
    let log = Rc::new(NotificationLog::new());
    let mut store = Storefront::new(StoreFeatures::default(), Rc::clone(&log));

    assert_eq!(store.estimate_delivery("   "), Err(StoreError::EmptyCity));
    assert!(store.delivery_quote().is_none());
    assert!(store.snapshot().delivery_quote.is_none());
    assert!(log.last().unwrap().is_error());
}

#[test]
fn test_gallery_full_cycle() {
    let mut store = store();
    let n = store.gallery_images().len();
    assert_eq!(n, 8);

    for start in 0..n {
        store.open_image(start).unwrap();
        for _ in 0..n {
            store.next_image().unwrap();
        }
        assert_eq!(store.snapshot().gallery, Some(GallerySelection::Open(start)));
    }
}

#[test]
fn test_gallery_next_previous_inverse() {
    let mut store = store();
    let n = store.gallery_images().len();

    for start in 0..n {
        store.open_image(start).unwrap();
        store.next_image().unwrap();
        assert_eq!(
            store.previous_image().unwrap(),
            GallerySelection::Open(start)
        );
        store.previous_image().unwrap();
        assert_eq!(store.next_image().unwrap(), GallerySelection::Open(start));
    }

    assert_eq!(store.close_image().unwrap(), GallerySelection::Closed);
    assert_eq!(store.next_image().unwrap(), GallerySelection::Closed);
}

#[test]
fn test_free_delivery_only_for_moscow_courier() {
    let mut store = store();
    store.add_to_cart(ProductId::new(4));
    store.update_quantity(ProductId::new(4), 3); // 4 * 520 = 2080

    store.estimate_delivery("Новосибирск").unwrap();
    let summary = store.order_summary();
    assert!(!summary.free_delivery);
    assert!(!summary.free_delivery_available);
    assert_eq!(summary.delivery, Some(Money::new(600)));
    assert_eq!(summary.grand_total, Money::new(2680));

    store.estimate_delivery("Москва").unwrap();
    let summary = store.order_summary();
    assert!(summary.free_delivery);
    assert_eq!(summary.delivery, Some(Money::zero()));
    assert_eq!(summary.grand_total, Money::new(2080));
}

#[test]
fn test_configured_threshold_drives_waiver_and_courier() {
    let features = StoreFeatures {
        free_delivery_threshold: Money::new(1500),
        ..StoreFeatures::default()
    };
    let mut store = Storefront::new(features, NullNotifier);
    for id in [1, 2, 3, 4] {
        store.add_to_cart(ProductId::new(id)); // 1570
    }

    store.estimate_delivery("Новосибирск").unwrap();
    let regional = store.order_summary();
    assert!(!regional.free_delivery);
    assert_eq!(regional.free_threshold, Money::new(1500));

    store.estimate_delivery("мск").unwrap();
    let moscow = store.order_summary();
    assert!(moscow.free_delivery);
    assert_eq!(
        moscow.free_delivery,
        DeliveryMethod::Courier.is_free_for(moscow.subtotal, moscow.free_threshold)
    );
    assert_eq!(moscow.remaining_for_free_delivery(), Money::zero());
}

#[test]
fn test_snapshot_serializes() {
    let mut store = store();
    store.add_to_cart(ProductId::new(3));
    store.scroll_to(PageSection::Delivery);

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["cart"]["total"], 280);
    assert_eq!(json["cart"]["lines"][0]["product"]["id"], 3);
    assert_eq!(json["active_section"], "delivery");
    assert_eq!(json["gallery"]["state"], "closed");
}
