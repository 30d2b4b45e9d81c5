use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use studworks::catalog::{
    catalog_router, CatalogRepository, MarketplaceService, PointsLedger,
};
use studworks::error::AppError;
use studworks::import::{sql_script, ImportedWork, ListingImporter};

#[derive(Debug, Deserialize)]
pub(crate) struct ImportPreviewRequest {
    pub(crate) listing_csv: String,
    #[serde(default)]
    pub(crate) include_sql: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportPreviewResponse {
    pub(crate) count: usize,
    pub(crate) schema: String,
    pub(crate) works: Vec<ImportedWork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sql: Option<String>,
}

pub(crate) fn with_catalog_routes<R, L>(service: Arc<MarketplaceService<R, L>>) -> axum::Router
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    catalog_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/import/preview",
            axum::routing::post(import_preview_endpoint),
        )
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

/// Dry-run of the listing import: classify the posted CSV and, on request,
/// render the SQL script the offline importer would emit.
pub(crate) async fn import_preview_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ImportPreviewRequest>,
) -> Result<Json<ImportPreviewResponse>, AppError> {
    let ImportPreviewRequest {
        listing_csv,
        include_sql,
    } = payload;

    let reader = Cursor::new(listing_csv.into_bytes());
    let works: Vec<ImportedWork> = ListingImporter::from_reader(reader)?;

    let sql = if include_sql {
        Some(sql_script(&state.sql_schema, &works))
    } else {
        None
    };

    Ok(Json(ImportPreviewResponse {
        count: works.len(),
        schema: state.sql_schema.as_ref().clone(),
        works,
        sql,
    }))
}
