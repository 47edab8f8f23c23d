use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CheckoutForm, OrderId};
use crate::ordering::cart::{CartLineItem, CartTotals};
use crate::ordering::tracking::{timeline, OrderStatus, Rating, TimelineStep};

/// Repository record for a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub line_items: Vec<CartLineItem>,
    pub address: CheckoutForm,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// Completed tracking stages, 0 through 4.
    pub progress: usize,
    pub rating: Option<Rating>,
}

impl OrderRecord {
    /// Totals recomputed from the stored line items.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            items: self.line_items.iter().map(|item| item.quantity).sum(),
            price: self.line_items.iter().map(CartLineItem::line_total).sum(),
        }
    }

    pub fn timeline(&self) -> Vec<TimelineStep> {
        timeline(self.progress)
    }

    pub fn status_view(&self) -> OrderStatusView {
        let totals = self.totals();
        OrderStatusView {
            order_id: self.order_id.clone(),
            status: self.status.label(),
            total_items: totals.items,
            total_price: totals.price,
            placed_at: self.placed_at,
            timeline: self.timeline(),
            rating: self.rating.as_ref().map(Rating::stars),
        }
    }
}

/// Storage abstraction so the checkout service can be exercised in isolation.
pub trait OrderRepository: Send + Sync {
    fn insert(&self, record: OrderRecord) -> Result<OrderRecord, RepositoryError>;
    fn update(&self, record: OrderRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &OrderId) -> Result<Option<OrderRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<OrderRecord>, RepositoryError>;
}

/// Error enumeration for order store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("order already exists")]
    Conflict,
    #[error("order not found")]
    NotFound,
    #[error("order store unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing the outbound confirmation hook (push or e-mail adapters).
pub trait ConfirmationPublisher: Send + Sync {
    fn publish(&self, confirmation: OrderConfirmation) -> Result<(), NotifyError>;
}

/// Confirmation payload so routes/tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total_items: u32,
    pub total_price: f64,
    pub contact_name: String,
}

/// Confirmation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("confirmation transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an order's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusView {
    pub order_id: OrderId,
    pub status: &'static str,
    pub total_items: u32,
    pub total_price: f64,
    pub placed_at: DateTime<Utc>,
    pub timeline: Vec<TimelineStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
