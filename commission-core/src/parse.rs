//! Parsing of the user-entered monthly target.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::models::Target;

/// Error returned when the target text is not a number.
///
/// The message is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Enter the target in numeric format (e.g., 40000 or 40.000,00).")]
pub struct InvalidInputError {
    input: String,
}

impl InvalidInputError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Smallest magnitude a [`Decimal`] can hold (28 decimal places).
const DECIMAL_RESOLUTION: f64 = 1e-28;

/// Normalizes decimal-comma input.
///
/// With a comma present, `.` before it is a thousands separator and the comma
/// is the decimal point (`40.000,00`). Returns `None` when a second comma or a
/// dot follows the decimal comma (`1,234.56`). Without a comma the text is left
/// as typed.
fn normalize_target_input(s: &str) -> Option<String> {
    let trimmed = s.trim();
    match trimmed.split_once(',') {
        Some((whole, fraction)) => {
            if fraction.contains([',', '.']) {
                return None;
            }
            Some(format!("{}.{fraction}", whole.replace('.', "")))
        }
        None => Some(trimmed.to_string()),
    }
}

/// Converts normalized text, rounding magnitudes below the decimal
/// resolution (`1e-30`) to zero.
fn decimal_from_normalized(normalized: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(normalized)
        .or_else(|_| Decimal::from_scientific(normalized))
        .or_else(|e| {
            match normalized.parse::<f64>() {
                Ok(v) if v.is_finite() && v.abs() < DECIMAL_RESOLUTION => Ok(Decimal::ZERO),
                _ => Err(e),
            }
        })
}

/// Parses the target text into a [`Target`].
///
/// Accepts plain (`40000`, `40000.50`), decimal-comma (`40.000,00`) and
/// scientific (`4e4`) notation. Negative and zero values are accepted.
/// Values too large for a [`Decimal`] (about 7.9e28) are rejected.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commission_core::parse_target;
///
/// assert_eq!(parse_target("40.000,00").unwrap().value(), dec!(40000));
/// assert!(parse_target("1,234.56").is_err());
/// assert!(parse_target("abc").is_err());
/// ```
pub fn parse_target(s: &str) -> Result<Target, InvalidInputError> {
    let reject = |reason: &dyn std::fmt::Display| {
        warn!(input = %s, "invalid target: {}", reason);
        InvalidInputError {
            input: s.to_string(),
        }
    };

    let normalized =
        normalize_target_input(s).ok_or_else(|| reject(&"misplaced decimal comma"))?;

    decimal_from_normalized(&normalized)
        .map(Target::new)
        .map_err(|e| reject(&e))
}
