//! Position sizing models

use serde::{Deserialize, Serialize};

use crate::decimal::{Decimal, Percent, Valuation, HUNDRED};
use crate::error::{Error, Result};

/// Risk budget and the planned entry and stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizeInput {
    /// Account balance in quote currency
    pub account_balance: Decimal,
    /// Share of the balance put at risk, in percent
    pub risk_pct: Percent,
    pub entry_price: Valuation,
    pub stop_loss: Valuation,
}

impl PositionSizeInput {
    pub fn new(account_balance: Decimal, risk_pct: Percent, entry_price: Valuation, stop_loss: Valuation) -> Self {
        Self {
            account_balance,
            risk_pct,
            entry_price,
            stop_loss,
        }
    }

    /// Range-check every field. The messages are meant for the end user.
    pub fn validate(&self) -> Result<()> {
        if self.account_balance <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter an account balance greater than 0".to_string(),
            ));
        }

        if self.risk_pct <= Decimal::ZERO || self.risk_pct > HUNDRED {
            return Err(Error::InvalidInput(
                "Please enter a risk percentage above 0 and at most 100".to_string(),
            ));
        }

        if self.entry_price <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a valid entry price greater than 0".to_string(),
            ));
        }

        if self.stop_loss <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a valid stop loss greater than 0".to_string(),
            ));
        }

        if self.stop_loss == self.entry_price {
            return Err(Error::InvalidInput(
                "Stop loss must differ from the entry price".to_string(),
            ));
        }

        Ok(())
    }
}

/// Size of a position that loses exactly the risk budget at the stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSize {
    /// Quote currency lost if the stop is hit
    pub risk_amount: Decimal,
    /// Units to hold, fractional
    pub position_size: Decimal,
    /// Whole units to buy
    pub units_to_buy: Decimal,
}

/// Frictionless profit on a position between two prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleProfit {
    pub profit: Decimal,
    pub profit_percent: Percent,
}
