use uuid::Uuid;

use super::domain::ReceiptId;

/// Source of fresh receipt identifiers. Every call must return an id never handed out before.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}
