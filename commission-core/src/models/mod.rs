mod average_units_tier;
mod sales_tier;
mod target;

pub use average_units_tier::AverageUnitsTier;
pub use sales_tier::SalesTier;
pub use target::Target;
