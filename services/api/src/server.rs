use crate::cli::ServeArgs;
use crate::infra::{
    default_trust_config, AppState, InMemoryCatalogRepository, InMemoryPointsLedger,
};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use studworks::catalog::MarketplaceService;
use studworks::config::AppConfig;
use studworks::error::AppError;
use studworks::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        sql_schema: Arc::new(config.import.sql_schema.clone()),
    };

    let repository = Arc::new(InMemoryCatalogRepository::default());
    let ledger = Arc::new(InMemoryPointsLedger::default());
    let marketplace = Arc::new(MarketplaceService::new(
        repository,
        ledger,
        default_trust_config(),
    ));

    let app = with_catalog_routes(marketplace)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "student works marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
