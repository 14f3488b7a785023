use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::domain::{Receipt, ReceiptId, ReceiptRecord};

/// Identifier-keyed result store so the service can be exercised in isolation.
///
/// Implementations are total: inserts always succeed and a miss is reported as `None`.
pub trait ReceiptRepository: Send + Sync {
    /// Store `record`, replacing anything previously held under the same id.
    fn insert(&self, record: ReceiptRecord);
    fn points(&self, id: &ReceiptId) -> Option<u64>;
}

#[derive(Debug, Default)]
struct StoreInner {
    receipts: HashMap<ReceiptId, Receipt>,
    points: HashMap<ReceiptId, u64>,
}

/// Process-lifetime store. One lock guards both maps so a record is never half-visible.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored receipt snapshot for `id`, if any.
    pub fn receipt(&self, id: &ReceiptId) -> Option<Receipt> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.receipts.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptRepository for InMemoryReceiptStore {
    fn insert(&self, record: ReceiptRecord) {
        let ReceiptRecord {
            id,
            receipt,
            points,
        } = record;

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.receipts.insert(id.clone(), receipt);
        guard.points.insert(id, points);
    }

    fn points(&self, id: &ReceiptId) -> Option<u64> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.points.get(id).copied()
    }
}
