use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::receipts::router::{points_handler, process_handler};
use crate::receipts::store::InMemoryReceiptStore;

fn process_request(body: impl Into<Body>) -> Request<Body> {
    Request::post("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

fn points_request(id: &str) -> Request<Body> {
    Request::get(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn process_handler_returns_id_for_valid_receipt() {
    let (service, store) = build_service();

    let response = process_handler::<InMemoryReceiptStore, SequenceIds>(
        State(Arc::new(service)),
        Ok(Json(target_receipt())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "id": "receipt-000001" }));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn process_handler_returns_validation_message() {
    let (service, _) = build_service();
    let mut receipt = target_receipt();
    receipt.purchase_time = "1:01 PM".to_string();

    let response = process_handler::<InMemoryReceiptStore, SequenceIds>(
        State(Arc::new(service)),
        Ok(Json(receipt)),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, "invalid purchase time").await;
}

#[tokio::test]
async fn points_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = points_handler::<InMemoryReceiptStore, SequenceIds>(
        State(Arc::new(service)),
        Path("non-existent".to_string()),
    )
    .await;

    assert_error(response, StatusCode::NOT_FOUND, "receipt not found").await;
}

#[tokio::test]
async fn process_then_points_round_trip() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let body = serde_json::to_vec(&target_receipt()).expect("serialize receipt");
    let response = router
        .clone()
        .oneshot(process_request(body))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .expect("id returned")
        .to_string();
    assert!(!id.is_empty());

    let response = router
        .oneshot(points_request(&id))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "points": 12 }));
}

#[tokio::test]
async fn process_route_uses_camel_case_fields() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let body = json!({
        "retailer": "M&M Corner-Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    });

    let response = router
        .clone()
        .oneshot(process_request(body.to_string()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(points_request("receipt-000001"))
        .await
        .expect("route executes");
    // 14 retailer + 50 round + 25 quarter + 10 pairs + 10 afternoon
    assert_eq!(read_json_body(response).await, json!({ "points": 109 }));
}

#[tokio::test]
async fn process_route_rejects_malformed_json() {
    let (service, store) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(process_request("{invalid json}"))
        .await
        .expect("route executes");

    assert_error(response, StatusCode::BAD_REQUEST, "invalid request body").await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn process_route_rejects_wrongly_typed_fields() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(process_request(json!({ "retailer": 42 }).to_string()))
        .await
        .expect("route executes");

    assert_error(response, StatusCode::BAD_REQUEST, "invalid request body").await;
}

#[tokio::test]
async fn process_route_routes_missing_fields_through_validation() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(process_request(json!({ "retailer": "Target" }).to_string()))
        .await
        .expect("route executes");

    assert_error(response, StatusCode::BAD_REQUEST, "invalid purchase date").await;
}

#[tokio::test]
async fn process_route_reports_empty_items() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let mut receipt = target_receipt();
    receipt.items.clear();
    receipt.total = "0.00".to_string();
    let body = serde_json::to_vec(&receipt).expect("serialize receipt");

    let response = router
        .oneshot(process_request(body))
        .await
        .expect("route executes");

    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "at least one item is required",
    )
    .await;
}

#[tokio::test]
async fn points_route_returns_not_found_for_unknown_receipt() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(points_request("nonexistent"))
        .await
        .expect("route executes");

    assert_error(response, StatusCode::NOT_FOUND, "receipt not found").await;
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/invalid")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
