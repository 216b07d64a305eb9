//! Trade models and related types

use serde::{Deserialize, Serialize};

use crate::decimal::{Amount, Decimal, Percent, Valuation, HUNDRED, PROPORTIONAL_FEE_RATE};
use crate::error::{Error, Result};

/// How entry and exit valuations are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationMode {
    /// Entry and exit are per-unit token prices
    #[default]
    UnitPrice,
    /// Entry and exit are aggregate valuations such as market cap
    MarketCap,
}

/// Parameters of a single profit projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    /// Amount of base asset spent on entry
    pub entry_amount: Amount,
    /// Price or market cap at entry
    pub entry_valuation: Valuation,
    /// Price or market cap at exit
    pub exit_valuation: Valuation,
    /// Buy-side slippage in percent
    pub buy_slippage_pct: Percent,
    /// Sell-side slippage in percent
    pub sell_slippage_pct: Percent,
    /// Fixed fees in base asset (priority fees, tips)
    pub flat_fees: Amount,
    /// Whether the proportional (bot) fee is deducted from exit proceeds
    pub apply_proportional_fee: bool,
    /// Fraction withheld by the proportional fee
    pub proportional_fee_rate: Decimal,
    /// Interpretation of the valuation fields
    pub mode: ValuationMode,
}

impl TradeInput {
    /// Create a unit price trade without slippage or fees
    pub fn new(entry_amount: Amount, entry_valuation: Valuation, exit_valuation: Valuation) -> Self {
        Self {
            entry_amount,
            entry_valuation,
            exit_valuation,
            buy_slippage_pct: Decimal::ZERO,
            sell_slippage_pct: Decimal::ZERO,
            flat_fees: Decimal::ZERO,
            apply_proportional_fee: false,
            proportional_fee_rate: PROPORTIONAL_FEE_RATE,
            mode: ValuationMode::UnitPrice,
        }
    }

    /// Set buy and sell slippage
    pub fn with_slippage(mut self, buy_pct: Percent, sell_pct: Percent) -> Self {
        self.buy_slippage_pct = buy_pct;
        self.sell_slippage_pct = sell_pct;
        self
    }

    /// Set flat fees
    pub fn with_flat_fees(mut self, fees: Amount) -> Self {
        self.flat_fees = fees;
        self
    }

    /// Enable or disable the proportional fee
    pub fn with_proportional_fee(mut self, apply: bool) -> Self {
        self.apply_proportional_fee = apply;
        self
    }

    /// Set the valuation mode
    pub fn with_mode(mut self, mode: ValuationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Range-check every field. The messages are meant for the end user.
    pub fn validate(&self) -> Result<()> {
        if self.entry_amount <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter a valid entry amount greater than 0".to_string(),
            ));
        }

        let (entry_label, exit_label) = match self.mode {
            ValuationMode::UnitPrice => ("entry price", "exit price"),
            ValuationMode::MarketCap => ("entry market cap", "exit market cap"),
        };

        if self.entry_valuation <= Decimal::ZERO {
            return Err(Error::InvalidInput(format!(
                "Please enter a valid {} greater than 0",
                entry_label
            )));
        }

        if self.exit_valuation <= Decimal::ZERO {
            return Err(Error::InvalidInput(format!(
                "Please enter a valid {} greater than 0",
                exit_label
            )));
        }

        if !is_percent(self.buy_slippage_pct) {
            return Err(Error::InvalidInput(
                "Please enter a buy slippage between 0 and 100".to_string(),
            ));
        }

        if !is_percent(self.sell_slippage_pct) {
            return Err(Error::InvalidInput(
                "Please enter a sell slippage between 0 and 100".to_string(),
            ));
        }

        if self.flat_fees < Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Please enter valid priority fees (0 or greater)".to_string(),
            ));
        }

        if self.proportional_fee_rate < Decimal::ZERO || self.proportional_fee_rate > Decimal::ONE {
            return Err(Error::InvalidInput(
                "Proportional fee rate must be a fraction between 0 and 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Outcome of a profit projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    /// Profit in base asset units
    pub net_profit_base: Amount,
    /// Profit in fiat, zero when no conversion rate is available
    pub net_profit_fiat: Decimal,
    /// Return on the entry amount in percent
    pub roi_percent: Percent,
    /// Exit valuation over entry valuation, frictions excluded
    pub multiplier: Decimal,
    /// Change in exit valuation needed for zero profit, in percent
    pub break_even_move_percent: Percent,
    /// Exit valuation at which net profit is zero
    pub break_even_valuation: Valuation,
    /// Break-even valuation over entry valuation
    pub break_even_multiplier: Decimal,
    /// Exit proceeds in base units after slippage and all fees
    pub net_exit_base: Amount,
}

impl TradeResult {
    /// Whether the projected trade makes money
    pub fn is_profitable(&self) -> bool {
        self.net_profit_base > Decimal::ZERO
    }
}

pub(crate) fn is_percent(value: Percent) -> bool {
    value >= Decimal::ZERO && value <= HUNDRED
}
