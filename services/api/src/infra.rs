use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use doorstep::ordering::checkout::{
    ConfirmationPublisher, NotifyError, OrderConfirmation, OrderId, OrderRecord, OrderRepository,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryOrderRepository {
    records: Arc<Mutex<HashMap<OrderId, OrderRecord>>>,
}

impl OrderRepository for InMemoryOrderRepository {
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
        if guard.contains_key(&record.order_id) {
            guard.insert(record.order_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
pub(crate) struct InMemoryConfirmationPublisher {
    events: Arc<Mutex<Vec<OrderConfirmation>>>,
}

impl ConfirmationPublisher for InMemoryConfirmationPublisher {
    fn publish(&self, confirmation: OrderConfirmation) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("confirmation mutex poisoned");
        guard.push(confirmation);
        Ok(())
    }
}

impl InMemoryConfirmationPublisher {
    pub(crate) fn events(&self) -> Vec<OrderConfirmation> {
        self.events.lock().expect("confirmation mutex poisoned").clone()
    }
}
