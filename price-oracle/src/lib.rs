//! Conversion rate sources and the last-known-rate cache

mod cache;
pub mod oracle;

pub use cache::{CachedRate, RateCache, DEFAULT_FETCH_TIMEOUT};
pub use oracle::{FixedRateOracle, PriceOracle};
