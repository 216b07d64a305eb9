use common::decimal::{precision, Decimal};
use common::error::Error;
use common::model::trade::{TradeInput, ValuationMode};
use pnl_engine::engine::compute_trade;
use rust_decimal_macros::dec;

fn reference_trade() -> TradeInput {
    TradeInput::new(dec!(1), dec!(100000), dec!(500000))
        .with_slippage(dec!(2), dec!(2))
        .with_flat_fees(dec!(0.01))
}

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} to be within {} of {}, diff {}",
        actual, tolerance, expected, diff
    );
}

#[test]
fn test_reference_scenario() {
    let result = compute_trade(&reference_trade(), Decimal::ZERO).unwrap();

    // 1 * 0.98 / 100_000 units, sold at 500_000 with 2% slippage, minus 0.01
    assert_eq!(result.multiplier, dec!(5));
    assert_eq!(result.net_exit_base, dec!(4.792));
    assert_eq!(result.net_profit_base, dec!(3.792));
    assert_eq!(result.roi_percent, dec!(379.2));
    assert_eq!(precision::round_multiplier(result.multiplier), dec!(5.00));

    // 1.01 / 0.98 / 0.0000098
    assert_close(result.break_even_valuation, dec!(105164.5147855060391503540191), dec!(0.000001));
    assert_eq!(precision::round_percent(result.break_even_move_percent), dec!(5.16));
    assert_eq!(precision::round_base(result.net_profit_base), dec!(3.7920));
}

#[test]
fn test_proportional_fee_applies_after_slippage() {
    let input = reference_trade().with_proportional_fee(true);
    let result = compute_trade(&input, Decimal::ZERO).unwrap();

    // 4.802 * 0.99 - 0.01
    assert_eq!(result.net_exit_base, dec!(4.74398));
    assert_eq!(result.net_profit_base, dec!(3.74398));
    assert!(result.break_even_move_percent > dec!(5.16));
}

#[test]
fn test_fiat_profit_uses_conversion_rate() {
    let result = compute_trade(&reference_trade(), dec!(150)).unwrap();
    assert_eq!(result.net_profit_fiat, dec!(568.8));

    let unavailable = compute_trade(&reference_trade(), Decimal::ZERO).unwrap();
    assert_eq!(unavailable.net_profit_fiat, Decimal::ZERO);
    assert_eq!(unavailable.net_profit_base, result.net_profit_base);
}

#[test]
fn test_loss_is_reported_not_rejected() {
    let mut input = reference_trade();
    input.exit_valuation = dec!(50000);
    let result = compute_trade(&input, Decimal::ZERO).unwrap();

    assert!(result.net_profit_base < Decimal::ZERO);
    assert!(result.roi_percent < Decimal::ZERO);
    assert!(!result.is_profitable());
    assert_eq!(result.multiplier, dec!(0.5));
}

#[test]
fn test_zero_profit_at_break_even_valuation() {
    for mode in [ValuationMode::UnitPrice, ValuationMode::MarketCap] {
        let input = reference_trade().with_proportional_fee(true).with_mode(mode);
        let result = compute_trade(&input, Decimal::ZERO).unwrap();

        let mut at_break_even = input.clone();
        at_break_even.exit_valuation = result.break_even_valuation;
        let replay = compute_trade(&at_break_even, Decimal::ZERO).unwrap();

        assert_close(replay.net_profit_base, Decimal::ZERO, dec!(0.000000001) * input.entry_amount);
        assert_close(replay.roi_percent, Decimal::ZERO, dec!(0.0000001));
        assert_close(replay.break_even_move_percent, result.break_even_move_percent, dec!(0.0000001));
    }
}

#[test]
fn test_break_even_inversion_matches_forward_formula_on_grid() {
    let entries = [dec!(0.05), dec!(1), dec!(250)];
    let valuations = [dec!(0.0000042), dec!(1.5), dec!(85000)];
    let slippages = [dec!(0), dec!(1), dec!(12.5), dec!(49)];
    let fees = [dec!(0), dec!(0.005), dec!(0.3)];

    for mode in [ValuationMode::UnitPrice, ValuationMode::MarketCap] {
        for &entry in &entries {
            for &valuation in &valuations {
                for &buy in &slippages {
                    for &sell in &slippages {
                        for &fee in &fees {
                            for bot_fee in [false, true] {
                                let input = TradeInput::new(entry, valuation, valuation * dec!(3))
                                    .with_slippage(buy, sell)
                                    .with_flat_fees(fee)
                                    .with_proportional_fee(bot_fee)
                                    .with_mode(mode);
                                let result = compute_trade(&input, Decimal::ZERO).unwrap();

                                let mut replay = input.clone();
                                replay.exit_valuation = result.break_even_valuation;
                                let replayed = compute_trade(&replay, Decimal::ZERO).unwrap();

                                assert_close(
                                    replayed.net_profit_base,
                                    Decimal::ZERO,
                                    dec!(0.000000001) * entry,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_profit_increases_with_exit_valuation() {
    let mut previous = None;
    for exit in [dec!(10000), dec!(99999), dec!(100000), dec!(100001), dec!(250000), dec!(5000000)] {
        let mut input = reference_trade();
        input.exit_valuation = exit;
        let profit = compute_trade(&input, Decimal::ZERO).unwrap().net_profit_base;

        if let Some(prev) = previous {
            assert!(profit > prev, "profit at {} should exceed {}", exit, prev);
        }
        previous = Some(profit);
    }
}

#[test]
fn test_flat_fees_reduce_profit_linearly() {
    let base = compute_trade(&reference_trade(), Decimal::ZERO).unwrap();

    let higher_fees = reference_trade().with_flat_fees(dec!(0.05));
    let result = compute_trade(&higher_fees, Decimal::ZERO).unwrap();

    assert_eq!(base.net_profit_base - result.net_profit_base, dec!(0.04));
}

#[test]
fn test_roi_invariant_when_entry_and_fees_scale_together() {
    let base = compute_trade(&reference_trade(), Decimal::ZERO).unwrap();

    let mut scaled = reference_trade().with_flat_fees(dec!(0.03));
    scaled.entry_amount = dec!(3);
    let scaled_result = compute_trade(&scaled, Decimal::ZERO).unwrap();
    assert_close(scaled_result.roi_percent, base.roi_percent, dec!(0.000000001));
    assert_close(scaled_result.break_even_move_percent, base.break_even_move_percent, dec!(0.000000001));

    // Fixed fees weigh less on a bigger position
    let mut entry_only = reference_trade();
    entry_only.entry_amount = dec!(3);
    let entry_only_result = compute_trade(&entry_only, Decimal::ZERO).unwrap();
    assert!(entry_only_result.roi_percent > base.roi_percent);
}

#[test]
fn test_market_cap_mode_matches_unit_price_mode() {
    let price = compute_trade(&reference_trade(), dec!(100)).unwrap();
    let cap = compute_trade(&reference_trade().with_mode(ValuationMode::MarketCap), dec!(100)).unwrap();

    assert_close(cap.net_profit_base, price.net_profit_base, dec!(0.000000001));
    assert_close(cap.roi_percent, price.roi_percent, dec!(0.000000001));
    assert_close(cap.break_even_move_percent, price.break_even_move_percent, dec!(0.000000001));
    assert_close(cap.break_even_multiplier, price.break_even_multiplier, dec!(0.000000001));
    assert_eq!(cap.multiplier, price.multiplier);
}

#[test]
fn test_multiplier_ignores_frictions() {
    let clean = TradeInput::new(dec!(1), dec!(100000), dec!(500000));
    let heavy = reference_trade().with_proportional_fee(true).with_flat_fees(dec!(0.4));

    let clean_result = compute_trade(&clean, Decimal::ZERO).unwrap();
    let heavy_result = compute_trade(&heavy, Decimal::ZERO).unwrap();
    assert_eq!(clean_result.multiplier, heavy_result.multiplier);
}

#[test]
fn test_roi_zero_exactly_when_profit_zero() {
    // No frictions and an unchanged valuation gives back the entry exactly
    let input = TradeInput::new(dec!(2), dec!(0.5), dec!(0.5));
    let result = compute_trade(&input, Decimal::ZERO).unwrap();

    assert_eq!(result.net_profit_base, Decimal::ZERO);
    assert_eq!(result.roi_percent, Decimal::ZERO);
    assert_eq!(result.break_even_move_percent, Decimal::ZERO);
}

#[test]
fn test_full_sell_slippage_is_unreachable_break_even() {
    let input = reference_trade().with_slippage(dec!(2), dec!(100));
    let result = compute_trade(&input, Decimal::ZERO);
    assert!(matches!(result, Err(Error::UnreachableBreakEven(_))));
}

#[test]
fn test_full_buy_slippage_is_unreachable_break_even() {
    let input = reference_trade()
        .with_slippage(dec!(100), dec!(2))
        .with_mode(ValuationMode::MarketCap);
    let result = compute_trade(&input, Decimal::ZERO);
    assert!(matches!(result, Err(Error::UnreachableBreakEven(_))));
}

#[test]
fn test_zero_entry_amount_is_invalid_input() {
    let mut input = reference_trade();
    input.entry_amount = Decimal::ZERO;
    assert!(matches!(compute_trade(&input, Decimal::ZERO), Err(Error::InvalidInput(_))));

    let mut input = reference_trade();
    input.entry_valuation = Decimal::ZERO;
    assert!(matches!(compute_trade(&input, Decimal::ZERO), Err(Error::InvalidInput(_))));
}

#[test]
fn test_input_is_not_mutated() {
    let input = reference_trade().with_proportional_fee(true);
    let before = input.clone();
    let _ = compute_trade(&input, dec!(120)).unwrap();
    assert_eq!(input, before);
}

#[test]
fn test_roi_keeps_sign_for_huge_entry() {
    let input = TradeInput::new(dec!(50000000000000000000000000000), dec!(1), dec!(1))
        .with_flat_fees(dec!(1));
    assert!(input.validate().is_ok());

    let result = compute_trade(&input, Decimal::ZERO).unwrap();
    assert_eq!(result.net_profit_base, dec!(-1));
    assert!(result.roi_percent < Decimal::ZERO);
    assert_eq!(result.roi_percent, dec!(-0.000000000000000000000000002));
}

#[test]
fn test_roi_beyond_decimal_range_is_decimal_error() {
    let input = TradeInput::new(dec!(1), dec!(0.0000000001), dec!(100000000000000000));
    assert!(input.validate().is_ok());
    assert!(matches!(compute_trade(&input, Decimal::ZERO), Err(Error::DecimalError(_))));
}

#[test]
fn test_huge_flat_fees_are_decimal_error() {
    let input = TradeInput::new(dec!(1), dec!(1), dec!(1)).with_flat_fees(Decimal::MAX);
    assert!(input.validate().is_ok());
    assert!(matches!(compute_trade(&input, Decimal::ZERO), Err(Error::DecimalError(_))));
}
