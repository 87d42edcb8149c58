use rust_decimal::Decimal;
use serde::Serialize;

/// A band of sales expressed as fractions of the monthly target.
///
/// `upper_fraction` is `None` for the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesTier {
    pub label: &'static str,
    pub lower_fraction: Decimal,
    pub upper_fraction: Option<Decimal>,
    pub rate: Decimal,
}

impl SalesTier {
    /// Returns `true` when the tier has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        self.upper_fraction.is_none()
    }
}
