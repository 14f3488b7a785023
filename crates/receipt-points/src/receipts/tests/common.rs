use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ReceiptRecord};
use crate::receipts::ids::IdGenerator;
use crate::receipts::store::{InMemoryReceiptStore, ReceiptRepository};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![Item::new("Mountain Dew 12PK", "6.49")],
        total: "6.49".to_string(),
    }
}

pub(super) fn afternoon_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "14:30".to_string(),
        items: vec![
            Item::new("123", "1.00"),
            Item::new("456", "2.00"),
            Item::new("789", "3.00"),
        ],
        total: "6.00".to_string(),
    }
}

/// Deterministic ids: `receipt-000001`, `receipt-000002`, ...
#[derive(Default)]
pub(super) struct SequenceIds {
    next: AtomicU64,
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> ReceiptId {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ReceiptId(format!("receipt-{id:06}"))
    }
}

/// Repository double recording every insert in call order.
#[derive(Default)]
pub(super) struct RecordingRepository {
    inserts: Mutex<Vec<ReceiptRecord>>,
}

impl RecordingRepository {
    pub(super) fn inserts(&self) -> Vec<ReceiptRecord> {
        self.inserts.lock().expect("repository mutex poisoned").clone()
    }
}

impl ReceiptRepository for RecordingRepository {
    fn insert(&self, record: ReceiptRecord) {
        self.inserts
            .lock()
            .expect("repository mutex poisoned")
            .push(record);
    }

    fn points(&self, id: &ReceiptId) -> Option<u64> {
        self.inserts
            .lock()
            .expect("repository mutex poisoned")
            .iter()
            .rev()
            .find(|record| &record.id == id)
            .map(|record| record.points)
    }
}

pub(super) type MemoryService = ReceiptService<InMemoryReceiptStore, SequenceIds>;

pub(super) fn build_service() -> (MemoryService, Arc<InMemoryReceiptStore>) {
    let store = Arc::new(InMemoryReceiptStore::new());
    let service = ReceiptService::new(store.clone(), Arc::new(SequenceIds::default()));
    (service, store)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn assert_error(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some(message),
        "unexpected payload {payload}"
    );
}
