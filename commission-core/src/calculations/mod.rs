//! Commission calculations.
//!
//! Both calculators are pure: the same target always produces the same rows,
//! and each call returns a complete replacement for any previous output.

pub mod average_units;
pub mod common;
pub mod report;
pub mod sales_commission;

pub use average_units::{AverageUnitsRow, AverageUnitsTable, compute_average_units_rows};
pub use report::CommissionReport;
pub use sales_commission::{
    SalesCommissionRow, SalesCommissionTable, compute_sales_commission_rows,
};
