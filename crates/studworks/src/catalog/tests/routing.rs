use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::catalog::domain::BuyerId;
use crate::catalog::router::{PurchaseRequest, TopUpRequest};
use crate::catalog::service::MarketplaceService;
use crate::catalog::trust::TrustConfig;

#[tokio::test]
async fn purchase_handler_maps_insufficient_points_to_payment_required() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let work = service.publish(submission()).expect("publish succeeds");
    service
        .top_up(&BuyerId("buyer-1".to_string()), "100")
        .expect("top up succeeds");

    let response = crate::catalog::router::purchase_handler::<MemoryCatalog, MemoryLedger>(
        State(service),
        Path(work.id.0.clone()),
        axum::Json(PurchaseRequest {
            buyer_id: "buyer-1".to_string(),
            today: Some(published_on()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("required").and_then(Value::as_u64), Some(1800));
    assert_eq!(payload.get("available").and_then(Value::as_u64), Some(100));
}

#[tokio::test]
async fn work_handler_returns_not_found_for_missing_work() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = crate::catalog::router::work_handler::<MemoryCatalog, MemoryLedger>(
        State(service),
        Path("work-missing".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn top_up_handler_rejects_unknown_packages() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = crate::catalog::router::top_up_handler::<MemoryCatalog, MemoryLedger>(
        State(service),
        axum::Json(TopUpRequest {
            buyer_id: "buyer-2".to_string(),
            package_id: "9000".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_handler_surfaces_repository_outages() {
    let service = Arc::new(MarketplaceService::new(
        Arc::new(UnavailableCatalog),
        Arc::new(MemoryLedger::default()),
        TrustConfig::default(),
    ));

    let response = crate::catalog::router::list_handler::<UnavailableCatalog, MemoryLedger>(
        State(service),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn publish_route_accepts_payloads() {
    let (service, _, _) = build_service();
    let router = catalog_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/catalog")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(
        payload.get("subject").and_then(Value::as_str),
        Some("механика")
    );
}

#[tokio::test]
async fn packages_route_lists_the_fixed_table() {
    let (service, _, _) = build_service();
    let router = catalog_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/points/packages")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let packages = payload.as_array().expect("array payload");
    assert_eq!(packages.len(), 4);
    assert_eq!(
        packages[0].get("id").and_then(Value::as_str),
        Some("100")
    );
}

#[tokio::test]
async fn catalog_route_attaches_trust_badges() {
    let (service, _, _) = build_service();
    service.publish(hit_submission()).expect("publish succeeds");
    let router = catalog_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/catalog")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let works = payload.as_array().expect("array payload");
    assert_eq!(works.len(), 1);
    let badge = works[0].get("badge").expect("badge present");
    assert_eq!(
        badge.get("label").and_then(Value::as_str),
        Some("Элитная работа")
    );
}
