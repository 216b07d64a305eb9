//! Error types for the calculators
//!
//! Every failure a calculation can produce is one of these variants. Input
//! problems and infeasible setups are terminal for a single call; only
//! `PriceUnavailable` is transient and callers are expected to degrade
//! instead of aborting.

use std::fmt::Display;
use thiserror::Error;

/// Calculator error type
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is absent, non-numeric or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Slippage or fees leave no exit valuation that recovers the entry
    #[error("Break-even unreachable: {0}")]
    UnreachableBreakEven(String),

    /// The conversion rate could not be obtained
    #[error("Price unavailable: {0}")]
    PriceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion or overflow error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

impl Error {
    /// Whether retrying the operation later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::PriceUnavailable(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidInput(msg) => Error::InvalidInput(format!("{}: {}", context, msg)),
                Error::UnreachableBreakEven(msg) => Error::UnreachableBreakEven(format!("{}: {}", context, msg)),
                Error::PriceUnavailable(msg) => Error::PriceUnavailable(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}
