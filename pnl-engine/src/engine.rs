//! Trade profit projection with slippage and fees

use common::decimal::{
    checked_add, checked_div, checked_mul, checked_sub, percent_of, retained_fraction, Amount, Decimal, Rate,
    HUNDRED,
};
use common::error::{Error, Result};
use common::model::trade::{TradeInput, TradeResult, ValuationMode};
use tracing::debug;

/// Project the outcome of buying with `entry_amount` at the entry valuation
/// and selling everything at the exit valuation.
///
/// Frictions are applied in a fixed order: buy slippage, sell slippage, the
/// proportional fee, then flat fees. Changing the order changes the result.
///
/// `conversion_rate` converts base asset profit into fiat; any value at or
/// below zero means the rate is unavailable and the fiat profit reads 0.
///
/// The input is assumed to be range-checked already. Zero divisors still
/// produce an error rather than a non-finite value, and results outside the
/// decimal range produce `DecimalError`.
pub fn compute_trade(input: &TradeInput, conversion_rate: Rate) -> Result<TradeResult> {
    if input.entry_amount.is_zero() {
        return Err(Error::InvalidInput("entry amount must be non-zero".to_string()));
    }
    if input.entry_valuation.is_zero() {
        return Err(Error::InvalidInput("entry valuation must be non-zero".to_string()));
    }

    let buy_factor = retained_fraction(input.buy_slippage_pct);
    let sell_factor = retained_fraction(input.sell_slippage_pct);
    let fee_factor = proportional_fee_factor(input);
    let multiplier = checked_div(input.exit_valuation, input.entry_valuation)?;

    // Unit price: tokens acquired, scaled by the exit price.
    // Market cap: the spent amount, scaled by the valuation multiple.
    let (exposure, exit_scale) = match input.mode {
        ValuationMode::UnitPrice => (
            checked_div(checked_mul(input.entry_amount, buy_factor)?, input.entry_valuation)?,
            input.exit_valuation,
        ),
        ValuationMode::MarketCap => (checked_mul(input.entry_amount, buy_factor)?, multiplier),
    };

    let gross_exit = checked_mul(checked_mul(exposure, exit_scale)?, sell_factor)?;
    let net_exit = checked_sub(checked_mul(gross_exit, fee_factor)?, input.flat_fees)?;
    let net_profit = checked_sub(net_exit, input.entry_amount)?;
    let roi_percent = percent_of(net_profit, input.entry_amount)?;
    if roi_percent.is_zero() && !net_profit.is_zero() {
        return Err(Error::DecimalError(format!(
            "ROI of {} on {} is below decimal precision",
            net_profit, input.entry_amount
        )));
    }

    let break_even_scale = invert_exit(
        checked_add(input.entry_amount, input.flat_fees)?,
        fee_factor,
        sell_factor,
        exposure,
    )?;

    let (break_even_valuation, break_even_multiplier, break_even_move_percent) = match input.mode {
        ValuationMode::UnitPrice => {
            let move_pct = percent_of(
                checked_sub(break_even_scale, input.entry_valuation)?,
                input.entry_valuation,
            )?;
            (
                break_even_scale,
                checked_div(break_even_scale, input.entry_valuation)?,
                move_pct,
            )
        }
        ValuationMode::MarketCap => (
            checked_mul(break_even_scale, input.entry_valuation)?,
            break_even_scale,
            checked_mul(checked_sub(break_even_scale, Decimal::ONE)?, HUNDRED)?,
        ),
    };

    let net_profit_fiat = to_fiat(net_profit, conversion_rate)?;

    debug!(
        "Computed trade ({:?}): net profit {} base, roi {}%, break-even move {}%",
        input.mode, net_profit, roi_percent, break_even_move_percent
    );

    Ok(TradeResult {
        net_profit_base: net_profit,
        net_profit_fiat,
        roi_percent,
        multiplier,
        break_even_move_percent,
        break_even_valuation,
        break_even_multiplier,
        net_exit_base: net_exit,
    })
}

fn proportional_fee_factor(input: &TradeInput) -> Decimal {
    if input.apply_proportional_fee {
        Decimal::ONE - input.proportional_fee_rate
    } else {
        Decimal::ONE
    }
}

/// Undo the exit side of the forward formula: starting from the net exit
/// that returns `target`, remove the proportional fee, then sell slippage,
/// then the exposure. Yields the exit price (unit price mode) or the exit
/// multiple (market cap mode).
fn invert_exit(target: Amount, fee_factor: Decimal, sell_factor: Decimal, exposure: Decimal) -> Result<Decimal> {
    if fee_factor.is_zero() {
        return Err(Error::UnreachableBreakEven(
            "the proportional fee withholds all exit proceeds".to_string(),
        ));
    }
    if sell_factor.is_zero() {
        return Err(Error::UnreachableBreakEven(
            "a sell slippage of 100% leaves no exit proceeds".to_string(),
        ));
    }
    if exposure.is_zero() {
        return Err(Error::UnreachableBreakEven(
            "a buy slippage of 100% leaves nothing to sell".to_string(),
        ));
    }

    let before_fee = checked_div(target, fee_factor)?;
    let before_slippage = checked_div(before_fee, sell_factor)?;
    checked_div(before_slippage, exposure)
}

fn to_fiat(amount: Amount, conversion_rate: Rate) -> Result<Decimal> {
    if conversion_rate <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    checked_mul(amount, conversion_rate)
}
