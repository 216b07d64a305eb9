//! Calculator service: validates requests and wires the rate cache to the engine

use std::sync::Arc;

use common::decimal::{Decimal, Rate, Valuation};
use common::error::{Error, ErrorExt, Result};
use common::model::breakeven::{FeeBreakEvenInput, FeeBreakEvenResult};
use common::model::market::CurrencyPair;
use common::model::position::{PositionSize, PositionSizeInput, SimpleProfit};
use common::model::trade::{TradeInput, TradeResult};
use pnl_engine::{calculate_position_size, calculate_simple_profit, compute_fee_break_even, compute_trade};
use price_oracle::{FixedRateOracle, PriceOracle, RateCache};
use tracing::{debug, info};

use crate::config::CalculatorConfig;

/// Entry point for every calculator
pub struct Calculator {
    /// Conversion rates for fiat output
    rates: RateCache,
    /// Pair whose rate converts profits into fiat
    pair: CurrencyPair,
}

impl Calculator {
    /// Create a calculator backed by an arbitrary oracle
    pub fn new(oracle: Arc<dyn PriceOracle>, pair: CurrencyPair) -> Self {
        Self {
            rates: RateCache::new(oracle),
            pair,
        }
    }

    /// Create a calculator whose oracle serves the configured rate
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let oracle = FixedRateOracle::new();
        if let Some(rate) = config.conversion_rate {
            oracle.set_rate(config.pair.clone(), rate);
        }
        info!(
            "Calculator configured for {} (rate: {})",
            config.pair,
            config
                .conversion_rate
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unavailable".to_string())
        );

        Self {
            rates: RateCache::new(Arc::new(oracle)).with_timeout(config.fetch_timeout),
            pair: config.pair.clone(),
        }
    }

    /// Pair used for fiat conversion
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// Most recent conversion rate, or zero if none was ever fetched
    pub fn cached_rate(&self) -> Rate {
        self.rates.cached(&self.pair)
    }

    /// Validate a trade, refresh the conversion rate and project the outcome.
    ///
    /// An unavailable rate only zeroes the fiat profit.
    pub async fn profit(&self, input: &TradeInput) -> Result<TradeResult> {
        input.validate()?;
        let rate = self.rates.refresh(&self.pair).await;
        debug!("Projecting trade with {} rate {}", self.pair, rate);
        compute_trade(input, rate).with_context(|| "Profit calculation")
    }

    /// Validate and compute the fee based break-even multiple
    pub fn fee_break_even(&self, input: &FeeBreakEvenInput) -> Result<FeeBreakEvenResult> {
        input.validate()?;
        compute_fee_break_even(input).with_context(|| "Break-even calculation")
    }

    /// Validate and compute a risk based position size
    pub fn position_size(&self, input: &PositionSizeInput) -> Result<PositionSize> {
        input.validate()?;
        calculate_position_size(input).with_context(|| "Position size calculation")
    }

    /// Validate and compute frictionless profit between two prices
    pub fn simple_profit(&self, entry_price: Valuation, exit_price: Valuation, position_size: Decimal) -> Result<SimpleProfit> {
        if entry_price <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a valid entry price greater than 0".to_string(),
            ));
        }
        if exit_price <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a valid exit price greater than 0".to_string(),
            ));
        }
        if position_size <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a position size greater than 0".to_string(),
            ));
        }
        calculate_simple_profit(entry_price, exit_price, position_size)
            .with_context(|| "Profit calculation")
    }
}
