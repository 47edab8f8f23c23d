use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::ordering::cart::{Cart, ServiceId, ServiceSnapshot};
use crate::ordering::checkout::domain::{CheckoutForm, OrderId};
use crate::ordering::checkout::repository::{
    ConfirmationPublisher, NotifyError, OrderConfirmation, OrderRecord, OrderRepository,
    RepositoryError,
};
use crate::ordering::checkout::router::order_router;
use crate::ordering::checkout::service::CheckoutService;

pub(super) fn snapshot(id: &str, name: &str, price: f64) -> ServiceSnapshot {
    ServiceSnapshot {
        id: ServiceId(id.to_string()),
        name: name.to_string(),
        price,
    }
}

pub(super) fn filled_form() -> CheckoutForm {
    CheckoutForm {
        building_name: "Marina Heights".to_string(),
        house_number: "1204".to_string(),
        floor: "12".to_string(),
        street: "Al Marsa Street".to_string(),
        phone: "+971501234567".to_string(),
        name: "Dana K".to_string(),
        ..CheckoutForm::default()
    }
}

pub(super) fn cart_with_items() -> Cart {
    let mut cart = Cart::new();
    cart.add_item(snapshot("sparkleclean_deep_home_cleaning", "Deep Home Cleaning", 150.0));
    cart.add_item(snapshot("superfix_pipe_leak_repair", "Pipe Leak Repair", 85.0));
    cart.add_item(snapshot("superfix_pipe_leak_repair", "Pipe Leak Repair", 85.0));
    cart
}

pub(super) fn build_service() -> (
    CheckoutService<MemoryOrders, MemoryConfirmations>,
    Arc<MemoryOrders>,
    Arc<MemoryConfirmations>,
) {
    let repository = Arc::new(MemoryOrders::default());
    let confirmations = Arc::new(MemoryConfirmations::default());
    let service = CheckoutService::new(repository.clone(), confirmations.clone());
    (service, repository, confirmations)
}

#[derive(Default, Clone)]
pub(super) struct MemoryOrders {
    records: Arc<Mutex<HashMap<OrderId, OrderRecord>>>,
}

impl OrderRepository for MemoryOrders {
    fn insert(&self, record: OrderRecord) -> Result<OrderRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("order mutex poisoned");
        if guard.contains_key(&record.order_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.order_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: OrderRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("order mutex poisoned");
        guard.insert(record.order_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError> {
        let guard = self.records.lock().expect("order mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<OrderRecord>, RepositoryError> {
        let guard = self.records.lock().expect("order mutex poisoned");
        let mut records: Vec<OrderRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryConfirmations {
    events: Arc<Mutex<Vec<OrderConfirmation>>>,
}

impl MemoryConfirmations {
    pub(super) fn events(&self) -> Vec<OrderConfirmation> {
        self.events.lock().expect("confirmation mutex poisoned").clone()
    }
}

impl ConfirmationPublisher for MemoryConfirmations {
    fn publish(&self, confirmation: OrderConfirmation) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("confirmation mutex poisoned")
            .push(confirmation);
        Ok(())
    }
}

pub(super) struct UnavailableOrders;

impl OrderRepository for UnavailableOrders {
    fn insert(&self, _record: OrderRecord) -> Result<OrderRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("order store offline".to_string()))
    }

    fn update(&self, _record: OrderRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("order store offline".to_string()))
    }

    fn fetch(&self, _id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("order store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("order store offline".to_string()))
    }
}

pub(super) fn order_router_with_service(
    service: CheckoutService<MemoryOrders, MemoryConfirmations>,
) -> axum::Router {
    order_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
