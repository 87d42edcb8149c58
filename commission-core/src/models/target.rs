use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_currency;

/// The monthly sales target every tier is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Target(Decimal);

impl Target {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Target {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Target {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}
