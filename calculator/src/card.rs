//! Shareable summary cards
//!
//! A card is a result plus display metadata, serialized to JSON. Renderers
//! that turn a card into an image consume this and nothing else.

use chrono::{DateTime, Utc};
use common::error::Result;
use serde::{Deserialize, Serialize};

/// Result of any calculator with a label and timestamp attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCard<T> {
    /// Title shown on the card
    pub label: String,
    /// Pair symbol used for fiat values, e.g. "SOL/USD"
    pub pair: String,
    /// When the card was generated
    pub generated_at: DateTime<Utc>,
    /// The calculator output
    pub result: T,
}

impl<T: Serialize> SummaryCard<T> {
    /// Wrap a result, stamping it with the current time
    pub fn new(label: impl Into<String>, pair: impl Into<String>, result: T) -> Self {
        Self {
            label: label.into(),
            pair: pair.into(),
            generated_at: Utc::now(),
            result,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
