use rust_decimal::Decimal;
use serde::Serialize;

/// Extra commission keyed to the average number of units per sale.
///
/// The label is display text only; the rate is applied to the target directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageUnitsTier {
    pub label: &'static str,
    pub rate: Decimal,
}
