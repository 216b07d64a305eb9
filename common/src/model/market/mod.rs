//! Market models and related types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Base asset and the fiat currency it is converted into (e.g. "SOL/USD")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base asset (e.g., "SOL")
    pub base_asset: String,
    /// Fiat currency (e.g., "USD")
    pub fiat: String,
}

impl CurrencyPair {
    /// Create a new pair, upper-casing both symbols
    pub fn new(base_asset: &str, fiat: &str) -> Self {
        Self {
            base_asset: base_asset.trim().to_uppercase(),
            fiat: fiat.trim().to_uppercase(),
        }
    }

    /// Pair symbol, e.g. "SOL/USD"
    pub fn symbol(&self) -> String {
        self.to_string()
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new("SOL", "USD")
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_asset, self.fiat)
    }
}

impl FromStr for CurrencyPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, fiat)) if !base.trim().is_empty() && !fiat.trim().is_empty() => {
                Ok(Self::new(base, fiat))
            }
            _ => Err(Error::ConfigurationError(format!(
                "Invalid currency pair '{}', expected BASE/FIAT",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let pair: CurrencyPair = "sol/usd".parse().unwrap();
        assert_eq!(pair, CurrencyPair::default());
        assert_eq!(pair.symbol(), "SOL/USD");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!("SOLUSD".parse::<CurrencyPair>().is_err());
        assert!("SOL/".parse::<CurrencyPair>().is_err());
    }
}
