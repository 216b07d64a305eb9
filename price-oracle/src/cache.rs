//! Last-known conversion rate cache

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use common::decimal::{Decimal, Rate};
use common::error::Error;
use common::model::market::CurrencyPair;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::oracle::PriceOracle;

/// Default upper bound on a single oracle fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// A rate together with the time it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRate {
    pub rate: Rate,
    pub fetched_at: DateTime<Utc>,
}

/// Caches the most recent successful rate per pair.
///
/// A read never fails: it yields the last successful rate or zero, and zero
/// means "unavailable" to the engine.
pub struct RateCache {
    /// Upstream rate source
    oracle: Arc<dyn PriceOracle>,
    /// Last successful rate by pair
    rates: DashMap<CurrencyPair, CachedRate>,
    /// Upper bound on a single fetch
    fetch_timeout: Duration,
}

impl RateCache {
    /// Create an empty cache in front of `oracle`
    pub fn new(oracle: Arc<dyn PriceOracle>) -> Self {
        Self {
            oracle,
            rates: DashMap::new(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Override the fetch timeout
    pub fn with_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Fetch a fresh rate and return the best rate known afterwards.
    ///
    /// On failure the previous rate (or zero) is returned and the failure is
    /// only logged.
    pub async fn refresh(&self, pair: &CurrencyPair) -> Rate {
        let fetched = match tokio::time::timeout(self.fetch_timeout, self.oracle.fetch_rate(pair)).await {
            Ok(result) => result,
            Err(_) => Err(Error::PriceUnavailable(format!(
                "Fetching {} timed out after {:?}",
                pair, self.fetch_timeout
            ))),
        };

        match fetched {
            Ok(rate) if rate > Decimal::ZERO => {
                debug!("Updated {} rate to {}", pair, rate);
                self.rates.insert(
                    pair.clone(),
                    CachedRate {
                        rate,
                        fetched_at: Utc::now(),
                    },
                );
                rate
            }
            Ok(rate) => {
                warn!("Ignoring non-positive {} rate {}", pair, rate);
                self.cached(pair)
            }
            Err(e) => {
                warn!("Using cached {} rate: {}", pair, e);
                self.cached(pair)
            }
        }
    }

    /// Last successful rate for a pair, or zero
    pub fn cached(&self, pair: &CurrencyPair) -> Rate {
        self.rates
            .get(pair)
            .map(|cached| cached.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Last successful rate with its fetch time
    pub fn last_update(&self, pair: &CurrencyPair) -> Option<CachedRate> {
        self.rates.get(pair).map(|cached| cached.clone())
    }
}
