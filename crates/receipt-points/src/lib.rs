//! Receipt intake and loyalty-point scoring.
//!
//! The [`receipts`] module holds the validation rules, the points engine, and the
//! identifier-keyed result store. [`config`], [`telemetry`], and [`error`] carry the
//! process-level plumbing shared by the API service.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
