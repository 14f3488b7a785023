use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Receipt, ReceiptId, ReceiptRecord};
use super::ids::IdGenerator;
use super::points::PointsEngine;
use super::store::ReceiptRepository;
use super::validation::{validate_receipt, ValidationError};

/// Service composing validation, scoring, identifier minting, and the result store.
pub struct ReceiptService<R, G> {
    repository: Arc<R>,
    ids: Arc<G>,
    engine: PointsEngine,
}

impl<R, G> Clone for ReceiptService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ids: Arc::clone(&self.ids),
            engine: self.engine,
        }
    }
}

impl<R, G> ReceiptService<R, G>
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    pub fn new(repository: Arc<R>, ids: Arc<G>) -> Self {
        Self {
            repository,
            ids,
            engine: PointsEngine::new(),
        }
    }

    /// Validate and score a receipt, returning the id it can be looked up under.
    ///
    /// The record is stored before the id is returned.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        if let Err(violation) = validate_receipt(&receipt) {
            debug!(retailer = %receipt.retailer, %violation, "receipt rejected");
            return Err(violation.into());
        }

        let points = self.engine.score(&receipt).total;
        let id = self.ids.next_id();

        self.repository.insert(ReceiptRecord {
            id: id.clone(),
            receipt,
            points,
        });

        info!(receipt_id = %id, points, "receipt processed");
        Ok(id)
    }

    /// Points awarded to a previously submitted receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        match self.repository.points(id) {
            Some(points) => Ok(points),
            None => {
                debug!(receipt_id = %id, "receipt not found");
                Err(ReceiptServiceError::NotFound(id.clone()))
            }
        }
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("receipt {0} not found")]
    NotFound(ReceiptId),
}
