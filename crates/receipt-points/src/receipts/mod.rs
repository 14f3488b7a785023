//! Receipt submission, validation, scoring, and lookup.
//!
//! Submissions flow through [`validation::validate_receipt`], are scored by the stateless
//! [`points::PointsEngine`], and land in a [`store::ReceiptRepository`] under an identifier
//! minted by an injected [`ids::IdGenerator`]. [`service::ReceiptService`] composes the pieces
//! and [`router::receipt_router`] exposes them over HTTP.

pub mod amount;
pub mod domain;
pub mod ids;
pub mod points;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use amount::Amount;
pub use domain::{Item, PointsView, Receipt, ReceiptId, ReceiptIdView, ReceiptRecord};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use points::{calculate_points, PointsBreakdown, PointsComponent, PointsEngine, PointsRule};
pub use router::receipt_router;
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{InMemoryReceiptStore, ReceiptRepository};
pub use validation::{validate_receipt, ValidationError};
