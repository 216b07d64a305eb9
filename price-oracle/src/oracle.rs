//! Conversion rate sources

use async_trait::async_trait;
use common::decimal::{Decimal, Rate};
use common::error::{Error, Result};
use common::model::market::CurrencyPair;
use dashmap::DashMap;

/// A source of base asset to fiat conversion rates.
///
/// Failures are expected to be transient (`Error::PriceUnavailable`); callers
/// degrade fiat output instead of aborting.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Rate>;
}

/// Oracle serving rates set in-process, typically from configuration
#[derive(Debug, Default)]
pub struct FixedRateOracle {
    rates: DashMap<CurrencyPair, Rate>,
}

impl FixedRateOracle {
    /// Create an oracle that knows no rates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle that knows a single rate
    pub fn with_rate(pair: CurrencyPair, rate: Rate) -> Self {
        let oracle = Self::new();
        oracle.set_rate(pair, rate);
        oracle
    }

    /// Set or replace the rate for a pair
    pub fn set_rate(&self, pair: CurrencyPair, rate: Rate) {
        self.rates.insert(pair, rate);
    }

    /// Forget the rate for a pair
    pub fn clear_rate(&self, pair: &CurrencyPair) {
        self.rates.remove(pair);
    }
}

#[async_trait]
impl PriceOracle for FixedRateOracle {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Rate> {
        match self.rates.get(pair).map(|r| *r) {
            Some(rate) if rate > Decimal::ZERO => Ok(rate),
            Some(_) => Err(Error::PriceUnavailable(format!("No positive rate configured for {}", pair))),
            None => Err(Error::PriceUnavailable(format!("No rate configured for {}", pair))),
        }
    }
}
