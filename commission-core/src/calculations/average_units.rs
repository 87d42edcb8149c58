//! Extra commission by average units per sale.
//!
//! The rate of each tier is applied to the target as a flat percentage, so
//! the earnings column shows what the extra is worth when exactly the target
//! is sold.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{format_currency, format_percent};
use crate::models::{AverageUnitsTier, Target};
use crate::tables::AVERAGE_UNITS_TIERS;

/// One displayed row of the average units table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AverageUnitsRow {
    /// "Average Units" column.
    pub tier_label: &'static str,
    pub rate: Decimal,
    pub extra_at_target: Decimal,
    /// "Formula" column, e.g. `Venda × 0.05 %`.
    pub formula_label: String,
    /// "Earnings at Target" column.
    pub earnings_at_target_label: String,
}

#[derive(Debug, Clone, Copy)]
pub struct AverageUnitsTable<'a> {
    tiers: &'a [AverageUnitsTier],
}

impl Default for AverageUnitsTable<'static> {
    fn default() -> Self {
        Self::new(&AVERAGE_UNITS_TIERS)
    }
}

impl<'a> AverageUnitsTable<'a> {
    pub fn new(tiers: &'a [AverageUnitsTier]) -> Self {
        Self { tiers }
    }

    pub fn rows(
        &self,
        target: Target,
    ) -> Vec<AverageUnitsRow> {
        self.tiers
            .iter()
            .map(|tier| {
                let extra_at_target = target.value() * tier.rate;
                AverageUnitsRow {
                    tier_label: tier.label,
                    rate: tier.rate,
                    extra_at_target,
                    formula_label: format!("Venda × {}", format_percent(tier.rate)),
                    earnings_at_target_label: format_currency(extra_at_target),
                }
            })
            .collect()
    }
}

/// Computes the average units rows for `target` using the fixed tiers.
pub fn compute_average_units_rows(target: Target) -> Vec<AverageUnitsRow> {
    AverageUnitsTable::default().rows(target)
}
