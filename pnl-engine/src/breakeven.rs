//! Break-even multiple from entry size and expected fees

use common::decimal::{checked_add, checked_div, checked_mul, checked_sub, Decimal, HUNDRED};
use common::error::{Error, Result};
use common::model::breakeven::{FeeBreakEvenInput, FeeBreakEvenResult};
use tracing::debug;

/// Work out how much a position has to grow to pay back the entry plus all
/// percentage and fixed fees.
pub fn compute_fee_break_even(input: &FeeBreakEvenInput) -> Result<FeeBreakEvenResult> {
    if input.entry_amount.is_zero() {
        return Err(Error::InvalidInput("entry amount must be non-zero".to_string()));
    }

    let estimated_fees = checked_mul(input.entry_amount, input.estimated_fee_pct / HUNDRED)?;
    let total_cost = checked_add(checked_add(input.entry_amount, estimated_fees)?, input.extra_fees)?;
    let multiplier = checked_div(total_cost, input.entry_amount)?;
    let required_increase = checked_mul(checked_sub(multiplier, Decimal::ONE)?, HUNDRED)?;

    debug!(
        "Fee break-even: total cost {} over entry {} needs {}x",
        total_cost, input.entry_amount, multiplier
    );

    Ok(FeeBreakEvenResult {
        entry_amount: input.entry_amount,
        estimated_fees_base: estimated_fees,
        extra_fees_base: input.extra_fees,
        total_cost,
        multiplier,
        required_increase_percent: required_increase,
        break_even_target: total_cost,
    })
}
