//! Commission on sales, one row per sales tier.
//!
//! Each tier is a band of the target (for example 50 % to 80 % of it). The
//! band's bounds are scaled by the target and multiplied by the tier rate to
//! show how much a seller earns at either end of the band.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use commission_core::{Target, compute_sales_commission_rows};
//!
//! let rows = compute_sales_commission_rows(Target::new(dec!(40000)));
//!
//! assert_eq!(rows.len(), 5);
//! assert_eq!(rows[1].range_label, "R$ 20,000.00 – R$ 32,000.00");
//! assert_eq!(rows[1].rate_percent_label, "0.80 %");
//! assert_eq!(rows[1].earnings_label, "R$ 160.00 – R$ 256.00");
//! assert_eq!(rows[4].range_label, "≥ R$ 40,000.00");
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::calculations::common::scale_range;
use crate::format::{format_percent, format_range};
use crate::models::{SalesTier, Target};
use crate::tables::SALES_TIERS;

/// One displayed row of the sales commission table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesCommissionRow {
    /// Label of the tier this row was computed from.
    pub tier_label: &'static str,

    /// Sales at the bottom of the band.
    pub min_value: Decimal,

    /// Sales at the top of the band, `None` for the open-ended band.
    pub max_value: Option<Decimal>,

    pub rate: Decimal,

    /// Commission earned at `min_value`.
    pub commission_min: Decimal,

    /// Commission earned at `max_value`.
    pub commission_max: Option<Decimal>,

    /// "Sales Range" column.
    pub range_label: String,

    /// "% Commission" column.
    pub rate_percent_label: String,

    /// "Earnings Range" column.
    pub earnings_label: String,
}

/// Calculator over an ordered set of sales tiers.
#[derive(Debug, Clone, Copy)]
pub struct SalesCommissionTable<'a> {
    tiers: &'a [SalesTier],
}

impl Default for SalesCommissionTable<'static> {
    fn default() -> Self {
        Self::new(&SALES_TIERS)
    }
}

impl<'a> SalesCommissionTable<'a> {
    pub fn new(tiers: &'a [SalesTier]) -> Self {
        Self { tiers }
    }

    /// Computes one row per tier, preserving tier order.
    pub fn rows(
        &self,
        target: Target,
    ) -> Vec<SalesCommissionRow> {
        self.tiers
            .iter()
            .map(|tier| Self::row(tier, target.value()))
            .collect()
    }

    fn row(
        tier: &SalesTier,
        target: Decimal,
    ) -> SalesCommissionRow {
        let (min_value, max_value) = scale_range(target, tier.lower_fraction, tier.upper_fraction);
        let commission_min = min_value * tier.rate;
        let commission_max = max_value.map(|max| max * tier.rate);

        trace!(
            tier = tier.label,
            open_ended = tier.is_open_ended(),
            %min_value,
            ?max_value,
            "sales tier scaled"
        );

        SalesCommissionRow {
            tier_label: tier.label,
            min_value,
            max_value,
            rate: tier.rate,
            commission_min,
            commission_max,
            range_label: format_range(min_value, max_value),
            rate_percent_label: format_percent(tier.rate),
            earnings_label: format_range(commission_min, commission_max),
        }
    }
}

/// Computes the sales commission rows for `target` using the fixed tiers.
pub fn compute_sales_commission_rows(target: Target) -> Vec<SalesCommissionRow> {
    SalesCommissionTable::default().rows(target)
}
