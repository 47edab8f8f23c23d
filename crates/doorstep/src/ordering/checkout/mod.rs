//! Checkout: address form validation, order placement behind repository and
//! confirmation ports, and the HTTP surface for both.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{BuildingType, CheckoutField, CheckoutForm, GeoPoint, OrderId};
pub use repository::{
    ConfirmationPublisher, NotifyError, OrderConfirmation, OrderRecord, OrderRepository,
    OrderStatusView, RepositoryError,
};
pub use router::order_router;
pub use service::{CheckoutError, CheckoutService};
pub use validation::{FormReport, FormValidator};
