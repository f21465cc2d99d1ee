// 🛡️ Receipt Validation - gate before scoring
// One predicate per field format, composed by `validate`. Fails closed.

use crate::receipt::{Item, Receipt};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a receipt was rejected.
///
/// Callers outside the crate only need to know that the receipt is invalid;
/// the variant is there for logs and for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("retailer is empty or contains characters other than letters, digits, spaces, '-' and '&': {0:?}")]
    Retailer(String),

    #[error("purchase date is not a YYYY-MM-DD calendar date: {0:?}")]
    PurchaseDate(String),

    #[error("purchase time is not a 24-hour HH:MM time: {0:?}")]
    PurchaseTime(String),

    #[error("receipt has no items")]
    NoItems,

    #[error("item {index}: short description is empty or contains characters other than letters, digits, spaces and '-': {value:?}")]
    ItemDescription { index: usize, value: String },

    #[error("item {index}: price is not a two-decimal amount: {value:?}")]
    ItemPrice { index: usize, value: String },

    #[error("total is not a two-decimal amount: {0:?}")]
    Total(String),
}

// ============================================================================
// FIELD PREDICATES
// ============================================================================

/// Letters, digits, whitespace, '-' and '&'; at least one character
pub fn is_valid_retailer(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '-' || c == '&')
}

/// Letters, digits, whitespace and '-'; at least one character
pub fn is_valid_description(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '-')
}

/// One or more digits, a '.', then exactly two digits (e.g., "12.34")
pub fn is_valid_amount(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, cents)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// A real calendar date written as `YYYY-MM-DD`
pub fn is_valid_date(value: &str) -> bool {
    // chrono accepts unpadded fields, so pin the width first
    matches_shape(value, "dddd-dd-dd") && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// A 24-hour time written as `HH:MM`
pub fn is_valid_time(value: &str) -> bool {
    matches_shape(value, "dd:dd") && NaiveTime::parse_from_str(value, TIME_FORMAT).is_ok()
}

/// 'd' in the shape stands for one ASCII digit, anything else must match literally
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

// ============================================================================
// RECEIPT VALIDATOR
// ============================================================================

/// Check every field of a receipt; the first failing rule is reported.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if !is_valid_retailer(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    if !is_valid_date(&receipt.purchase_date) {
        return Err(ValidationError::PurchaseDate(receipt.purchase_date.clone()));
    }

    if !is_valid_time(&receipt.purchase_time) {
        return Err(ValidationError::PurchaseTime(receipt.purchase_time.clone()));
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        validate_item(index, item)?;
    }

    if !is_valid_amount(&receipt.total) {
        return Err(ValidationError::Total(receipt.total.clone()));
    }

    Ok(())
}

fn validate_item(index: usize, item: &Item) -> Result<(), ValidationError> {
    if !is_valid_description(&item.short_description) {
        return Err(ValidationError::ItemDescription {
            index,
            value: item.short_description.clone(),
        });
    }

    if !is_valid_amount(&item.price) {
        return Err(ValidationError::ItemPrice {
            index,
            value: item.price.clone(),
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
