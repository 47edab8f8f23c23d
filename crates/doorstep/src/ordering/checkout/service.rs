use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{CheckoutForm, OrderId};
use super::repository::{
    ConfirmationPublisher, NotifyError, OrderConfirmation, OrderRecord, OrderRepository,
    RepositoryError,
};
use super::validation::{FormReport, FormValidator};
use crate::ordering::cart::Cart;
use crate::ordering::tracking::{OrderStatus, Rating, TrackingStage};

/// Service composing the form validator, order store, and confirmation hook.
pub struct CheckoutService<R, N> {
    validator: FormValidator,
    repository: Arc<R>,
    confirmations: Arc<N>,
}

static ORDER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_order_id() -> OrderId {
    let id = ORDER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    OrderId(format!("ord-{id:06}"))
}

impl<R, N> CheckoutService<R, N>
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, confirmations: Arc<N>) -> Self {
        Self {
            validator: FormValidator,
            repository,
            confirmations,
        }
    }

    /// Places an order from the current cart contents. The cart is cleared
    /// only after the record is stored and the confirmation published.
    pub fn place_order(
        &self,
        cart: &mut Cart,
        form: &CheckoutForm,
    ) -> Result<OrderRecord, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let report = self.validator.validate(form);
        if !report.is_valid() {
            return Err(CheckoutError::IncompleteForm(report));
        }

        let totals = cart.totals();
        let record = OrderRecord {
            order_id: next_order_id(),
            line_items: cart.line_items().to_vec(),
            address: form.clone(),
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
            progress: 0,
            rating: None,
        };

        let stored = self.repository.insert(record)?;
        self.confirmations.publish(OrderConfirmation {
            order_id: stored.order_id.clone(),
            total_items: totals.items,
            total_price: totals.price,
            contact_name: form.name.trim().to_string(),
        })?;
        cart.clear();

        Ok(stored)
    }

    /// Fetch an order and current tracking state for display.
    pub fn track(&self, order_id: &OrderId) -> Result<OrderRecord, CheckoutError> {
        let record = self
            .repository
            .fetch(order_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Marks the next tracking stage complete. The first advance moves the
    /// order from pending to active; finishing the last stage completes it.
    pub fn advance(&self, order_id: &OrderId) -> Result<OrderRecord, CheckoutError> {
        let mut record = self
            .repository
            .fetch(order_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status == OrderStatus::Completed {
            return Err(CheckoutError::AlreadyDelivered(record.order_id));
        }

        record.progress += 1;
        record.status = if record.progress >= TrackingStage::ordered().len() {
            record.progress = TrackingStage::ordered().len();
            OrderStatus::Completed
        } else {
            OrderStatus::Active
        };

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Attaches a rating. Only delivered orders can be rated; re-rating
    /// replaces the previous entry.
    pub fn rate(&self, order_id: &OrderId, rating: Rating) -> Result<OrderRecord, CheckoutError> {
        let mut record = self
            .repository
            .fetch(order_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status != OrderStatus::Completed {
            return Err(CheckoutError::NotRateable {
                status: record.status,
            });
        }

        record.rating = Some(rating);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Most recent orders for the history screen.
    pub fn recent(&self, limit: usize) -> Result<Vec<OrderRecord>, CheckoutError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the checkout service.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("cart is empty; add items before checkout")]
    EmptyCart,
    #[error("required checkout fields missing: {}", .0.field_keys().join(", "))]
    IncompleteForm(FormReport),
    #[error("order {0} is already delivered")]
    AlreadyDelivered(OrderId),
    #[error("order is {} and cannot be rated yet", .status.label())]
    NotRateable { status: OrderStatus },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Confirmation(#[from] NotifyError),
}
