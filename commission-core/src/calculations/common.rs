//! Shared arithmetic helpers for the commission calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, the usual convention
/// for displayed money.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use commission_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies `value` by each bound of a fractional range.
///
/// An open upper bound stays open.
pub fn scale_range(
    value: Decimal,
    lower: Decimal,
    upper: Option<Decimal>,
) -> (Decimal, Option<Decimal>) {
    (lower * value, upper.map(|u| u * value))
}
