pub mod calculations;
pub mod format;
pub mod models;
pub mod parse;
pub mod tables;

pub use calculations::{
    AverageUnitsRow, CommissionReport, SalesCommissionRow, compute_average_units_rows,
    compute_sales_commission_rows,
};
pub use models::*;
pub use parse::{InvalidInputError, parse_target};
