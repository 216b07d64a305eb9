//! Plain text reports
//!
//! Rounding here is for display only. Results are never parsed back from
//! these strings.

use common::decimal::{precision, Amount, Decimal, Percent, Rate};
use common::model::breakeven::FeeBreakEvenResult;
use common::model::market::CurrencyPair;
use common::model::position::{PositionSize, SimpleProfit};
use common::model::trade::{TradeResult, ValuationMode};
use pnl_engine::format_number;

/// "3.7920 SOL"
pub fn format_base(amount: Amount, asset: &str) -> String {
    format!("{:.4} {}", precision::round_base(amount), asset)
}

/// "379.20%"
pub fn format_percent(pct: Percent) -> String {
    format!("{:.2}%", precision::round_percent(pct))
}

/// "568.80 USD"
pub fn format_fiat(amount: Decimal, fiat: &str) -> String {
    format!("{:.2} {}", precision::round_fiat(amount), fiat)
}

/// "5.00x"
pub fn format_multiplier(multiplier: Decimal) -> String {
    format!("{:.2}x", precision::round_multiplier(multiplier))
}

/// Render a profit projection. `rate` is the conversion rate the result was
/// computed with; a zero rate prints the fiat line as unavailable.
pub fn render_trade_report(result: &TradeResult, pair: &CurrencyPair, mode: ValuationMode, rate: Rate) -> String {
    let fiat = if rate > Decimal::ZERO {
        format_fiat(result.net_profit_fiat, &pair.fiat)
    } else {
        "unavailable".to_string()
    };
    let break_even = match mode {
        ValuationMode::UnitPrice => format!("{}", result.break_even_valuation.round_dp(10).normalize()),
        ValuationMode::MarketCap => format_number(result.break_even_valuation),
    };

    [
        format!("Net profit:        {}", format_base(result.net_profit_base, &pair.base_asset)),
        format!("Net profit (fiat): {}", fiat),
        format!("ROI:               {}", format_percent(result.roi_percent)),
        format!("Multiplier:        {}", format_multiplier(result.multiplier)),
        format!("Break-even move:   {}", format_percent(result.break_even_move_percent)),
        format!("Break-even exit:   {} ({})", break_even, format_multiplier(result.break_even_multiplier)),
        format!("Exit proceeds:     {}", format_base(result.net_exit_base, &pair.base_asset)),
    ]
    .join("\n")
}

/// Render the fee based break-even breakdown
pub fn render_fee_break_even_report(result: &FeeBreakEvenResult, asset: &str) -> String {
    [
        format!("Break-even multiplier: {}", format_multiplier(result.multiplier)),
        format!("Required increase:     {}", format_percent(result.required_increase_percent)),
        format!("Break-even target:     {}", format_base(result.break_even_target, asset)),
        format!("  Entry:               {}", format_base(result.entry_amount, asset)),
        format!("  Estimated fees:      {}", format_base(result.estimated_fees_base, asset)),
        format!("  Extra fees:          {}", format_base(result.extra_fees_base, asset)),
        format!("  Total cost:          {}", format_base(result.total_cost, asset)),
    ]
    .join("\n")
}

/// Render a position size
pub fn render_position_size_report(result: &PositionSize) -> String {
    [
        format!("Risk amount:   {:.2}", result.risk_amount.round_dp(2)),
        format!("Position size: {:.4}", result.position_size.round_dp(4)),
        format!("Units to buy:  {}", result.units_to_buy),
    ]
    .join("\n")
}

/// Render a frictionless profit
pub fn render_simple_profit_report(result: &SimpleProfit) -> String {
    [
        format!("Profit: {:.2}", result.profit.round_dp(2)),
        format!("Change: {}", format_percent(result.profit_percent)),
    ]
    .join("\n")
}
