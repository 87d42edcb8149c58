//! Fixed-locale display formatting for currency and percentages.
//!
//! Currency uses `R$`, `,` as the thousands separator and `.` as the decimal
//! point with exactly two decimals, e.g. `R$ 40,000.00`.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

const CURRENCY_PREFIX: &str = "R$";
const RANGE_SEPARATOR: &str = " – ";
const OPEN_ENDED_PREFIX: &str = "≥";

/// Formats a value as currency, e.g. `R$ 1,234.50` or `R$ -1,234.50`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commission_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(40000)), "R$ 40,000.00");
/// assert_eq!(format_currency(dec!(0.125)), "R$ 0.13");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{CURRENCY_PREFIX} {}", format_grouped(value))
}

/// Formats a fractional rate as a percentage with two decimals, e.g. `1.80 %`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{} %", fixed_two_places(rate * Decimal::ONE_HUNDRED))
}

/// Formats a closed range `R$ a – R$ b`, or `≥ R$ a` when there is no upper bound.
pub fn format_range(
    min: Decimal,
    max: Option<Decimal>,
) -> String {
    match max {
        Some(max) => format!(
            "{}{RANGE_SEPARATOR}{}",
            format_currency(min),
            format_currency(max)
        ),
        None => format!("{OPEN_ENDED_PREFIX} {}", format_currency(min)),
    }
}

/// Rounds to two places and renders with thousands grouping.
fn format_grouped(value: Decimal) -> String {
    let fixed = fixed_two_places(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Renders `value` rounded half-up with exactly two decimals and no grouping.
///
/// Works on the string form so values near `Decimal::MAX` never overflow.
/// A value that rounds to zero is rendered without a sign.
fn fixed_two_places(value: Decimal) -> String {
    let rounded = round_half_up(value);
    if rounded.is_zero() {
        return "0.00".to_string();
    }

    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{int_part}.{frac_part:0<2}"),
        None => format!("{text}.00"),
    }
}
