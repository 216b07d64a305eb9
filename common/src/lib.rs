//! Common types and utilities for the calculators
//!
//! This library contains the shared error type, decimal helpers and domain
//! models used by the PnL engine, the price oracle and the command line
//! front end.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;
