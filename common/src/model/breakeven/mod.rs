//! Fee based break-even models

use serde::{Deserialize, Serialize};

use crate::decimal::{Amount, Decimal, Percent};
use crate::error::{Error, Result};
use crate::model::trade::is_percent;

/// Entry size and expected round-trip costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakEvenInput {
    /// Amount of base asset spent on entry
    pub entry_amount: Amount,
    /// Estimated fees as a percentage of the entry amount
    pub estimated_fee_pct: Percent,
    /// Additional fixed fees in base asset
    pub extra_fees: Amount,
}

impl FeeBreakEvenInput {
    pub fn new(entry_amount: Amount, estimated_fee_pct: Percent, extra_fees: Amount) -> Self {
        Self {
            entry_amount,
            estimated_fee_pct,
            extra_fees,
        }
    }

    /// Range-check every field. The messages are meant for the end user.
    pub fn validate(&self) -> Result<()> {
        if self.entry_amount <= Decimal::ZERO {
            return Err(Error::InvalidInput("Please enter a valid entry amount.".to_string()));
        }

        if !is_percent(self.estimated_fee_pct) {
            return Err(Error::InvalidInput(
                "Estimated fees must be between 0 and 100%.".to_string(),
            ));
        }

        if self.extra_fees < Decimal::ZERO {
            return Err(Error::InvalidInput("Extra fees cannot be negative.".to_string()));
        }

        Ok(())
    }
}

/// Cost breakdown and the multiple needed to recover it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakEvenResult {
    pub entry_amount: Amount,
    /// Percentage fees converted into base asset
    pub estimated_fees_base: Amount,
    pub extra_fees_base: Amount,
    /// Entry plus every fee
    pub total_cost: Amount,
    /// Total cost over entry amount
    pub multiplier: Decimal,
    /// Position growth needed to break even, in percent
    pub required_increase_percent: Percent,
    /// Position value in base asset at which the trade breaks even
    pub break_even_target: Amount,
}
