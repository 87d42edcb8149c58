//! Headless entry points shared by the CLI and the window.

use commission_core::{CommissionReport, InvalidInputError, parse_target};
use tracing::debug;

/// Parses `target_text` and computes both commission tables.
pub fn build_report(target_text: &str) -> Result<CommissionReport, InvalidInputError> {
    let target = parse_target(target_text)?;
    debug!(value = %target, "building commission report");
    Ok(CommissionReport::for_target(target))
}
