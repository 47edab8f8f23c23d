use std::sync::Arc;

use super::common::*;
use crate::ordering::cart::Cart;
use crate::ordering::checkout::domain::{CheckoutForm, OrderId};
use crate::ordering::checkout::repository::{OrderRepository, RepositoryError};
use crate::ordering::checkout::service::{CheckoutError, CheckoutService};
use crate::ordering::tracking::{OrderStatus, Rating, TrackingStage};

#[test]
fn place_order_stores_record_publishes_confirmation_and_clears_cart() {
    let (service, repository, confirmations) = build_service();
    let mut cart = cart_with_items();
    let expected_totals = cart.totals();

    let record = service
        .place_order(&mut cart, &filled_form())
        .expect("order placed");

    assert!(cart.is_empty(), "cart clears on successful checkout");
    assert_eq!(record.status, OrderStatus::Pending);
    assert_eq!(record.progress, 0);
    assert_eq!(record.totals().items, expected_totals.items);
    assert_eq!(record.totals().price, expected_totals.price);

    let stored = repository
        .fetch(&record.order_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.line_items.len(), 2);

    let events = confirmations.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].order_id, record.order_id);
    assert_eq!(events[0].total_items, expected_totals.items);
    assert_eq!(events[0].contact_name, "Dana K");
}

#[test]
fn empty_cart_is_rejected_before_validation() {
    let (service, _, confirmations) = build_service();
    let mut cart = Cart::new();

    match service.place_order(&mut cart, &CheckoutForm::default()) {
        Err(CheckoutError::EmptyCart) => {}
        other => panic!("expected empty cart rejection, got {other:?}"),
    }
    assert!(confirmations.events().is_empty());
}

#[test]
fn incomplete_form_keeps_the_cart_intact() {
    let (service, _, confirmations) = build_service();
    let mut cart = cart_with_items();
    let form = CheckoutForm {
        phone: String::new(),
        name: "  ".to_string(),
        ..filled_form()
    };

    match service.place_order(&mut cart, &form) {
        Err(CheckoutError::IncompleteForm(report)) => {
            assert_eq!(report.field_keys(), vec!["phone", "name"]);
        }
        other => panic!("expected incomplete form, got {other:?}"),
    }

    assert_eq!(cart.len(), 2, "cart survives a failed checkout");
    assert!(confirmations.events().is_empty());
}

#[test]
fn advancing_walks_pending_to_active_to_completed() {
    let (service, _, _) = build_service();
    let mut cart = cart_with_items();
    let record = service
        .place_order(&mut cart, &filled_form())
        .expect("order placed");
    let order_id = record.order_id.clone();

    let first = service.advance(&order_id).expect("first advance");
    assert_eq!(first.status, OrderStatus::Active);
    assert_eq!(first.progress, 1);

    for _ in 1..TrackingStage::ordered().len() {
        service.advance(&order_id).expect("advance");
    }

    let done = service.track(&order_id).expect("track");
    assert_eq!(done.status, OrderStatus::Completed);
    assert_eq!(done.progress, TrackingStage::ordered().len());

    match service.advance(&order_id) {
        Err(CheckoutError::AlreadyDelivered(id)) => assert_eq!(id, order_id),
        other => panic!("expected already delivered, got {other:?}"),
    }
}

#[test]
fn rating_requires_a_completed_order() {
    let (service, _, _) = build_service();
    let mut cart = cart_with_items();
    let record = service
        .place_order(&mut cart, &filled_form())
        .expect("order placed");
    let order_id = record.order_id.clone();
    let rating = Rating::new(5, "spotless work").expect("valid rating");

    match service.rate(&order_id, rating.clone()) {
        Err(CheckoutError::NotRateable { status }) => assert_eq!(status, OrderStatus::Pending),
        other => panic!("expected not rateable, got {other:?}"),
    }

    for _ in 0..TrackingStage::ordered().len() {
        service.advance(&order_id).expect("advance");
    }

    let rated = service.rate(&order_id, rating).expect("rating accepted");
    assert_eq!(rated.rating.as_ref().map(Rating::stars), Some(5));

    let replaced = Rating::new(3, "late arrival").expect("valid rating");
    let rated = service.rate(&order_id, replaced).expect("re-rating accepted");
    assert_eq!(rated.rating.as_ref().map(Rating::stars), Some(3));
}

#[test]
fn track_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.track(&OrderId("missing".to_string())) {
        Err(CheckoutError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn repository_outage_surfaces_as_repository_error() {
    let repository = Arc::new(UnavailableOrders);
    let confirmations = Arc::new(MemoryConfirmations::default());
    let service = CheckoutService::new(repository, confirmations.clone());
    let mut cart = cart_with_items();

    match service.place_order(&mut cart, &filled_form()) {
        Err(CheckoutError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
    assert!(confirmations.events().is_empty());
    assert!(!cart.is_empty(), "cart is preserved when the store is down");
}
