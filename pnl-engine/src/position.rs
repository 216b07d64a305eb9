//! Risk based position sizing and frictionless profit

use common::decimal::{checked_div, checked_mul, checked_sub, percent_of, Decimal, Valuation, HUNDRED};
use common::error::{Error, Result};
use common::model::position::{PositionSize, PositionSizeInput, SimpleProfit};

/// Size a position so that hitting the stop loses exactly the risk budget
pub fn calculate_position_size(input: &PositionSizeInput) -> Result<PositionSize> {
    let stop_distance = checked_sub(input.entry_price, input.stop_loss)?.abs();
    if stop_distance.is_zero() {
        return Err(Error::InvalidInput(
            "Stop loss must differ from the entry price".to_string(),
        ));
    }

    let risk_amount = checked_mul(input.account_balance, input.risk_pct / HUNDRED)?;
    let position_size = checked_div(risk_amount, stop_distance)?;

    Ok(PositionSize {
        risk_amount,
        position_size,
        units_to_buy: position_size.floor(),
    })
}

/// Profit of `position_size` units bought at `entry_price` and sold at
/// `exit_price`, ignoring slippage and fees
pub fn calculate_simple_profit(entry_price: Valuation, exit_price: Valuation, position_size: Decimal) -> Result<SimpleProfit> {
    if entry_price.is_zero() {
        return Err(Error::InvalidInput("entry price must be non-zero".to_string()));
    }

    let price_change = checked_sub(exit_price, entry_price)?;
    Ok(SimpleProfit {
        profit: checked_mul(price_change, position_size)?,
        profit_percent: percent_of(price_change, entry_price)?,
    })
}
