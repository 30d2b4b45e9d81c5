use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{BuyerId, WorkId, WorkSubmission};
use super::repository::{CatalogRepository, LedgerError, PointsLedger, RepositoryError};
use super::service::{MarketplaceError, MarketplaceService};

/// Router builder exposing the catalog and points endpoints.
pub fn catalog_router<R, L>(service: Arc<MarketplaceService<R, L>>) -> Router
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    Router::new()
        .route(
            "/api/v1/catalog",
            get(list_handler::<R, L>).post(publish_handler::<R, L>),
        )
        .route("/api/v1/catalog/:work_id", get(work_handler::<R, L>))
        .route(
            "/api/v1/catalog/:work_id/purchase",
            post(purchase_handler::<R, L>),
        )
        .route("/api/v1/points/packages", get(packages_handler::<R, L>))
        .route("/api/v1/points/top-up", post(top_up_handler::<R, L>))
        .route(
            "/api/v1/points/:buyer_id/balance",
            get(balance_handler::<R, L>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PurchaseRequest {
    pub(crate) buyer_id: String,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopUpRequest {
    pub(crate) buyer_id: String,
    pub(crate) package_id: String,
}

pub(crate) async fn list_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    match service.list() {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn publish_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
    axum::Json(submission): axum::Json<WorkSubmission>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    match service.publish(submission) {
        Ok(work) => (StatusCode::CREATED, axum::Json(work)).into_response(),
        Err(MarketplaceError::Domain(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(MarketplaceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "work already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn work_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
    Path(work_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    let id = WorkId(work_id);
    match service.get(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(MarketplaceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn purchase_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
    Path(work_id): Path<String>,
    axum::Json(request): axum::Json<PurchaseRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    let id = WorkId(work_id);
    let buyer = BuyerId(request.buyer_id);
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    match service.purchase(&buyer, &id, today) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(MarketplaceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(MarketplaceError::Ledger(LedgerError::InsufficientPoints {
            required,
            available,
        })) => {
            let payload = json!({
                "error": "insufficient points",
                "required": required,
                "available": available,
            });
            (StatusCode::PAYMENT_REQUIRED, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn packages_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    (StatusCode::OK, axum::Json(service.packages())).into_response()
}

pub(crate) async fn top_up_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
    axum::Json(request): axum::Json<TopUpRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    let buyer = BuyerId(request.buyer_id);
    match service.top_up(&buyer, &request.package_id) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(MarketplaceError::UnknownPackage(package_id)) => {
            let payload = json!({ "error": format!("unknown points package '{package_id}'") });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn balance_handler<R, L>(
    State(service): State<Arc<MarketplaceService<R, L>>>,
    Path(buyer_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    let buyer = BuyerId(buyer_id);
    match service.balance(&buyer) {
        Ok(balance) => {
            let payload = json!({ "buyer_id": buyer.0, "balance": balance });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

fn not_found(id: &WorkId) -> Response {
    let payload = json!({
        "error": "work not found",
        "work_id": id.0,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: MarketplaceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
