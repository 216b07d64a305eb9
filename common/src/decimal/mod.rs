//! Decimal type utilities for precise financial calculations

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Amount denominated in the base asset (e.g. SOL)
pub type Amount = Decimal;

/// Unit price or aggregate valuation (market cap)
pub type Valuation = Decimal;

/// Percentage in the 0..=100 convention
pub type Percent = Decimal;

/// Base asset to fiat conversion rate
pub type Rate = Decimal;

/// Fraction of exit proceeds withheld when the proportional fee applies
pub const PROPORTIONAL_FEE_RATE: Decimal = dec!(0.01);

/// One hundred, for percent conversions
pub const HUNDRED: Decimal = dec!(100);

/// Convert a percentage into the multiplicative factor that remains after it
/// is deducted, e.g. 2% -> 0.98
pub fn retained_fraction(pct: Percent) -> Decimal {
    Decimal::ONE - pct / HUNDRED
}

/// Add, reporting overflow as an error instead of panicking
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| Error::DecimalError(format!("{} + {} overflows", lhs, rhs)))
}

/// Subtract, reporting overflow as an error instead of panicking
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| Error::DecimalError(format!("{} - {} overflows", lhs, rhs)))
}

/// Multiply, reporting overflow as an error instead of panicking
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| Error::DecimalError(format!("{} * {} overflows", lhs, rhs)))
}

/// Divide, reporting overflow or a zero divisor as an error. Callers that can
/// name the zero divisor should check for it first and return a domain error.
pub fn checked_div(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_div(rhs)
        .ok_or_else(|| Error::DecimalError(format!("{} / {} is not representable", lhs, rhs)))
}

/// `part` as a percentage of `whole`.
///
/// Scales before dividing so small ratios keep their digits; falls back to
/// dividing first only when scaling `part` would overflow.
pub fn percent_of(part: Decimal, whole: Decimal) -> Result<Percent> {
    match part.checked_mul(HUNDRED) {
        Some(scaled) => checked_div(scaled, whole),
        None => checked_mul(checked_div(part, whole)?, HUNDRED),
    }
}

/// Display precision helpers. None of these results should be fed back into
/// a computation.
pub mod precision {
    use super::*;

    /// Base asset amounts are shown with 4 decimal places
    pub const BASE_PRECISION: u32 = 4;

    /// Percentages are shown with 2 decimal places
    pub const PERCENT_PRECISION: u32 = 2;

    /// Fiat amounts are shown with 2 decimal places
    pub const FIAT_PRECISION: u32 = 2;

    /// Multipliers are shown with 2 decimal places
    pub const MULTIPLIER_PRECISION: u32 = 2;

    /// Round a base asset amount for display
    pub fn round_base(amount: Amount) -> Amount {
        amount.round_dp(BASE_PRECISION)
    }

    /// Round a percentage for display
    pub fn round_percent(pct: Percent) -> Percent {
        pct.round_dp(PERCENT_PRECISION)
    }

    /// Round a fiat amount for display
    pub fn round_fiat(amount: Decimal) -> Decimal {
        amount.round_dp(FIAT_PRECISION)
    }

    /// Round a multiplier for display
    pub fn round_multiplier(multiplier: Decimal) -> Decimal {
        multiplier.round_dp(MULTIPLIER_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retained_fraction_of_slippage() {
        assert_eq!(retained_fraction(dec!(2)), dec!(0.98));
        assert_eq!(retained_fraction(dec!(0)), Decimal::ONE);
        assert_eq!(retained_fraction(dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn checked_div_rejects_zero_divisor() {
        assert!(checked_div(Decimal::ONE, Decimal::ZERO).is_err());
        assert_eq!(checked_div(dec!(1), dec!(4)).unwrap(), dec!(0.25));
    }

    #[test]
    fn checked_mul_reports_overflow() {
        assert!(matches!(checked_mul(Decimal::MAX, dec!(2)), Err(Error::DecimalError(_))));
    }

    #[test]
    fn checked_add_and_sub_report_overflow() {
        assert!(matches!(checked_add(Decimal::MAX, Decimal::ONE), Err(Error::DecimalError(_))));
        assert!(matches!(checked_sub(Decimal::MIN, Decimal::ONE), Err(Error::DecimalError(_))));
        assert_eq!(checked_sub(dec!(1), dec!(0.25)).unwrap(), dec!(0.75));
    }

    #[test]
    fn percent_of_keeps_small_ratios() {
        assert_eq!(percent_of(dec!(-1), dec!(50000000000000000000000000000)).unwrap(), dec!(-0.000000000000000000000000002));
        assert_eq!(percent_of(dec!(3), dec!(4)).unwrap(), dec!(75));
        assert_eq!(percent_of(Decimal::MAX, Decimal::MAX).unwrap(), dec!(100));
        assert!(matches!(percent_of(Decimal::MAX, Decimal::ONE), Err(Error::DecimalError(_))));
    }

    #[test]
    fn display_rounding() {
        assert_eq!(precision::round_base(dec!(3.79216)), dec!(3.7922));
        assert_eq!(precision::round_percent(dec!(5.16451)), dec!(5.16));
    }
}
