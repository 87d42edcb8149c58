use std::fmt;

use serde::Serialize;

use crate::calculations::{
    AverageUnitsRow, SalesCommissionRow, compute_average_units_rows,
    compute_sales_commission_rows,
};
use crate::models::Target;

pub const SALES_HEADERS: [&str; 3] = ["Sales Range", "% Commission", "Earnings Range"];
pub const AVERAGE_UNITS_HEADERS: [&str; 3] = ["Average Units", "Formula", "Earnings at Target"];

/// Both commission tables computed for a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionReport {
    pub target: Target,
    pub sales_rows: Vec<SalesCommissionRow>,
    pub average_units_rows: Vec<AverageUnitsRow>,
}

impl CommissionReport {
    pub fn for_target(target: Target) -> Self {
        Self {
            target,
            sales_rows: compute_sales_commission_rows(target),
            average_units_rows: compute_average_units_rows(target),
        }
    }
}

impl fmt::Display for CommissionReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Monthly target: {}", self.target)?;
        writeln!(f)?;
        writeln!(f, "1) Sales Commission")?;
        writeln!(
            f,
            "{:<32} {:<14} {}",
            SALES_HEADERS[0], SALES_HEADERS[1], SALES_HEADERS[2]
        )?;
        for row in &self.sales_rows {
            writeln!(
                f,
                "{:<32} {:<14} {}",
                row.range_label, row.rate_percent_label, row.earnings_label
            )?;
        }
        writeln!(f)?;
        writeln!(f, "2) Extra Commission by Average Units")?;
        writeln!(
            f,
            "{:<16} {:<16} {}",
            AVERAGE_UNITS_HEADERS[0], AVERAGE_UNITS_HEADERS[1], AVERAGE_UNITS_HEADERS[2]
        )?;
        let mut rows = self.average_units_rows.iter().peekable();
        while let Some(row) = rows.next() {
            write!(
                f,
                "{:<16} {:<16} {}",
                row.tier_label, row.formula_label, row.earnings_at_target_label
            )?;
            if rows.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn report_holds_both_tables() {
        let report = CommissionReport::for_target(Target::new(dec!(40000)));

        assert_eq!(report.sales_rows.len(), 5);
        assert_eq!(report.average_units_rows.len(), 5);
    }

    #[test]
    fn display_lists_headers_and_rows() {
        let text = CommissionReport::for_target(Target::new(dec!(40000))).to_string();

        assert!(text.starts_with("Monthly target: R$ 40,000.00"));
        assert!(text.contains("Sales Range"));
        assert!(text.contains("Earnings at Target"));
        assert!(text.contains("≥ R$ 720.00"));
        assert!(text.ends_with("R$ 200.00"));
    }
}
