use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryConfirmationPublisher, InMemoryOrderRepository};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use doorstep::catalog::ServiceCatalog;
use doorstep::config::AppConfig;
use doorstep::error::AppError;
use doorstep::ordering::checkout::CheckoutService;
use doorstep::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryOrderRepository::default());
    let confirmations = Arc::new(InMemoryConfirmationPublisher::default());
    let checkout_service = Arc::new(CheckoutService::new(repository, confirmations));
    let catalog = Arc::new(ServiceCatalog::standard());

    let app = with_marketplace_routes(checkout_service, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "doorstep marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
