// 🧾 Receipt Model - what a customer submits for scoring
// Field names follow the JSON wire shape (camelCase)

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// RECEIPT
// ============================================================================

/// A purchase receipt as submitted by a client.
///
/// Every scalar is kept as the raw string the client sent. Dates, times and
/// amounts are only interpreted by the validator and the scoring rules, so a
/// receipt that fails validation never gets partially converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name (e.g., "M&M Corner Market")
    pub retailer: String,

    /// Calendar date, `YYYY-MM-DD`
    pub purchase_date: String,

    /// 24-hour time of day, `HH:MM`
    pub purchase_time: String,

    /// Line items, at least one once validated
    pub items: Vec<Item>,

    /// Grand total, two fraction digits (e.g., "35.35")
    pub total: String,
}

impl Receipt {
    /// Parse a receipt from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse receipt JSON")
    }
}

// ============================================================================
// ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
