use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{PointsView, Receipt, ReceiptId, ReceiptIdView};
use super::ids::IdGenerator;
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::ReceiptRepository;

/// Router builder exposing receipt submission and points lookup.
pub fn receipt_router<R, G>(service: Arc<ReceiptService<R, G>>) -> Router
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R, G>))
        .route("/receipts/:id/points", get(points_handler::<R, G>))
        .with_state(service)
}

pub(crate) async fn process_handler<R, G>(
    State(service): State<Arc<ReceiptService<R, G>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    let Json(receipt) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "undecodable receipt payload");
            return error_response(StatusCode::BAD_REQUEST, "invalid request body");
        }
    };

    match service.submit(receipt) {
        Ok(id) => (StatusCode::OK, Json(ReceiptIdView { id })).into_response(),
        Err(ReceiptServiceError::Validation(violation)) => {
            error_response(StatusCode::BAD_REQUEST, violation.message())
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}

pub(crate) async fn points_handler<R, G>(
    State(service): State<Arc<ReceiptService<R, G>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    match service.points(&ReceiptId(id)) {
        Ok(points) => (StatusCode::OK, Json(PointsView { points })).into_response(),
        Err(ReceiptServiceError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "receipt not found")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
