//! Configuration for the calculator

use std::env;
use std::str::FromStr;
use std::time::Duration;

use common::decimal::{Decimal, Rate};
use common::error::{Error, Result};
use common::model::market::CurrencyPair;
use price_oracle::DEFAULT_FETCH_TIMEOUT;

/// Configuration for the calculator
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Base asset and fiat currency used for conversions
    pub pair: CurrencyPair,
    /// Conversion rate served by the fixed rate oracle, if known
    pub conversion_rate: Option<Rate>,
    /// Text of a `QUANTCALC_CONVERSION_RATE` that failed to parse
    pub invalid_rate: Option<String>,
    /// Upper bound on a single rate fetch
    pub fetch_timeout: Duration,
    /// Label printed on summary cards
    pub card_label: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let (conversion_rate, invalid_rate) = match env::var("QUANTCALC_CONVERSION_RATE") {
            Ok(text) => match Decimal::from_str(text.trim()) {
                Ok(rate) => (Some(rate), None),
                Err(_) => (None, Some(text)),
            },
            Err(_) => (None, None),
        };

        Self {
            pair: CurrencyPair::new(
                &env::var("QUANTCALC_BASE_ASSET").unwrap_or_else(|_| "SOL".to_string()),
                &env::var("QUANTCALC_FIAT").unwrap_or_else(|_| "USD".to_string()),
            ),
            conversion_rate,
            invalid_rate,
            fetch_timeout: env::var("QUANTCALC_FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_FETCH_TIMEOUT),
            card_label: env::var("QUANTCALC_CARD_LABEL")
                .unwrap_or_else(|_| "QuantCalc".to_string()),
            debug: env::var("DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with custom values
    pub fn new(pair: CurrencyPair, conversion_rate: Option<Rate>, card_label: String) -> Self {
        Self {
            pair,
            conversion_rate,
            invalid_rate: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            card_label,
            debug: false,
        }
    }

    /// Use `rate` for fiat conversion, replacing any value read from the environment
    pub fn set_conversion_rate(&mut self, rate: Rate) {
        self.conversion_rate = Some(rate);
        self.invalid_rate = None;
    }

    /// Reject settings that cannot be used
    pub fn validate(&self) -> Result<()> {
        if let Some(text) = &self.invalid_rate {
            return Err(Error::ConfigurationError(format!(
                "QUANTCALC_CONVERSION_RATE is not a number: {:?}",
                text
            )));
        }
        if let Some(rate) = self.conversion_rate {
            if rate < Decimal::ZERO {
                return Err(Error::ConfigurationError(format!(
                    "Conversion rate for {} cannot be negative: {}",
                    self.pair, rate
                )));
            }
        }
        if self.fetch_timeout.is_zero() {
            return Err(Error::ConfigurationError(
                "Fetch timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
