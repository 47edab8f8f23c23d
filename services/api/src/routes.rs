use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use doorstep::catalog::{CompanyId, ServiceCatalog, ServiceCategory};
use doorstep::ordering::checkout::{
    order_router, CheckoutService, ConfirmationPublisher, OrderRepository,
};

#[derive(Debug, Deserialize)]
pub(crate) struct CompanySearchQuery {
    #[serde(default)]
    pub(crate) q: String,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default = "default_page")]
    pub(crate) page: usize,
    #[serde(default = "default_page_size")]
    pub(crate) page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    50
}

pub(crate) fn with_marketplace_routes<R, N>(
    service: Arc<CheckoutService<R, N>>,
    catalog: Arc<ServiceCatalog>,
) -> axum::Router
where
    R: OrderRepository + 'static,
    N: ConfirmationPublisher + 'static,
{
    order_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/catalog/categories",
            axum::routing::get(categories_endpoint),
        )
        .route(
            "/api/v1/catalog/companies",
            axum::routing::get(companies_endpoint),
        )
        .route(
            "/api/v1/catalog/companies/:company_id/services",
            axum::routing::get(company_services_endpoint),
        )
        .layer(Extension(catalog))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn categories_endpoint() -> Json<serde_json::Value> {
    let categories: Vec<serde_json::Value> = ServiceCategory::ordered()
        .into_iter()
        .map(|category| {
            json!({
                "key": category.key(),
                "label": category.label(),
            })
        })
        .collect();

    Json(json!({ "categories": categories }))
}

pub(crate) async fn companies_endpoint(
    Extension(catalog): Extension<Arc<ServiceCatalog>>,
    Query(params): Query<CompanySearchQuery>,
) -> (StatusCode, Json<serde_json::Value>) {
    let category = match params.category.as_deref() {
        None => None,
        Some(raw) => match ServiceCategory::parse(raw) {
            Some(category) => Some(category),
            None => {
                let payload = json!({
                    "error": format!("unknown category '{raw}'"),
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload));
            }
        },
    };

    let companies: Vec<_> = catalog
        .search_companies(&params.q, category, params.page, params.page_size)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(json!({ "companies": companies })))
}

pub(crate) async fn company_services_endpoint(
    Extension(catalog): Extension<Arc<ServiceCatalog>>,
    Path(company_id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let id = CompanyId(company_id);
    match catalog.company(&id) {
        Some(company) => {
            let services: Vec<_> = catalog.offerings_for(&id).into_iter().cloned().collect();
            (
                StatusCode::OK,
                Json(json!({ "company": company, "services": services })),
            )
        }
        None => {
            let payload = json!({
                "error": "company not found",
                "company_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload))
        }
    }
}
