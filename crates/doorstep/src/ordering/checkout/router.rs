use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CheckoutForm, OrderId};
use super::repository::{ConfirmationPublisher, OrderRepository, RepositoryError};
use super::service::{CheckoutError, CheckoutService};
use crate::ordering::cart::{Cart, ServiceSnapshot};
use crate::ordering::tracking::Rating;

/// Router builder exposing HTTP endpoints for order placement and tracking.
pub fn order_router<R, N>(service: Arc<CheckoutService<R, N>>) -> Router
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/orders", post(place_order_handler::<R, N>))
        .route("/api/v1/orders/:order_id", get(track_handler::<R, N>))
        .route(
            "/api/v1/orders/:order_id/rating",
            post(rate_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceOrderRequest {
    items: Vec<OrderItemPayload>,
    form: CheckoutForm,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderItemPayload {
    service: ServiceSnapshot,
    #[serde(default = "default_quantity")]
    quantity: i64,
    #[serde(default)]
    special_requests: String,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatingRequest {
    stars: u8,
    #[serde(default)]
    comment: String,
}

pub(crate) async fn place_order_handler<R, N>(
    State(service): State<Arc<CheckoutService<R, N>>>,
    axum::Json(request): axum::Json<PlaceOrderRequest>,
) -> Response
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    let mut cart = Cart::new();
    for payload in request.items {
        let service_id = payload.service.id.clone();
        cart.add_item(payload.service);
        cart.update_quantity(&service_id, payload.quantity);
        if !payload.special_requests.is_empty() {
            cart.update_special_requests(&service_id, payload.special_requests);
        }
    }

    match service.place_order(&mut cart, &request.form) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(CheckoutError::IncompleteForm(report)) => {
            let payload = json!({
                "error": "required checkout fields missing",
                "missing_fields": report.field_keys(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ CheckoutError::EmptyCart) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn track_handler<R, N>(
    State(service): State<Arc<CheckoutService<R, N>>>,
    Path(order_id): Path<String>,
) -> Response
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    let id = OrderId(order_id);
    match service.track(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(CheckoutError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "order not found",
                "order_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn rate_handler<R, N>(
    State(service): State<Arc<CheckoutService<R, N>>>,
    Path(order_id): Path<String>,
    axum::Json(request): axum::Json<RatingRequest>,
) -> Response
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    let id = OrderId(order_id);
    let rating = match Rating::new(request.stars, request.comment) {
        Ok(rating) => rating,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.rate(&id, rating) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(CheckoutError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "order not found",
                "order_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error @ CheckoutError::NotRateable { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
