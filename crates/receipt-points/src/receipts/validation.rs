use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use super::domain::{Item, Receipt};

static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 &\-]+$").expect("valid retailer pattern"));
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 \-]+$").expect("valid description pattern"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time pattern"));
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("valid amount pattern"));

/// First rule a receipt broke. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid retailer name")]
    InvalidRetailer,
    #[error("invalid purchase date")]
    InvalidPurchaseDate,
    #[error("invalid purchase time")]
    InvalidPurchaseTime,
    #[error("invalid total")]
    InvalidTotal,
    #[error("at least one item is required")]
    MissingItems,
    #[error("invalid item description")]
    InvalidItemDescription,
    #[error("invalid item price")]
    InvalidItemPrice,
}

impl ValidationError {
    /// Canonical client-facing message for the violated rule.
    pub const fn message(&self) -> &'static str {
        match self {
            ValidationError::InvalidRetailer => "invalid retailer name",
            ValidationError::InvalidPurchaseDate => "invalid purchase date",
            ValidationError::InvalidPurchaseTime => "invalid purchase time",
            ValidationError::InvalidTotal => "invalid total",
            ValidationError::MissingItems => "at least one item is required",
            ValidationError::InvalidItemDescription => "invalid item description",
            ValidationError::InvalidItemPrice => "invalid item price",
        }
    }
}

/// Check a receipt against the intake rules, stopping at the first violation.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    if !RETAILER_PATTERN.is_match(&receipt.retailer) {
        return Err(ValidationError::InvalidRetailer);
    }

    if !is_calendar_date(&receipt.purchase_date) {
        return Err(ValidationError::InvalidPurchaseDate);
    }

    if !is_clock_time(&receipt.purchase_time) {
        return Err(ValidationError::InvalidPurchaseTime);
    }

    if !AMOUNT_PATTERN.is_match(&receipt.total) {
        return Err(ValidationError::InvalidTotal);
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::MissingItems);
    }

    receipt.items.iter().try_for_each(validate_item)
}

fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if !DESCRIPTION_PATTERN.is_match(&item.short_description) {
        return Err(ValidationError::InvalidItemDescription);
    }

    if !AMOUNT_PATTERN.is_match(&item.price) {
        return Err(ValidationError::InvalidItemPrice);
    }

    Ok(())
}

// chrono accepts unpadded fields, so the shape is pinned by the pattern first.
fn is_calendar_date(raw: &str) -> bool {
    DATE_PATTERN.is_match(raw) && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

fn is_clock_time(raw: &str) -> bool {
    TIME_PATTERN.is_match(raw) && NaiveTime::parse_from_str(raw, "%H:%M").is_ok()
}
