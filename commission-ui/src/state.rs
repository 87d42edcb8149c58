//! Application state for the commission calculator UI.
//!
//! The view owns a [`ViewModel`] and replaces it through [`reduce`]; nothing
//! else mutates what is on screen.

use commission_core::{
    AverageUnitsRow, InvalidInputError, SalesCommissionRow, compute_average_units_rows,
    compute_sales_commission_rows, parse_target,
};
use tracing::debug;

/// Initial text of the target input.
pub const DEFAULT_TARGET_TEXT: &str = "40000";

/// Everything the window displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Current text of the target input.
    pub target_text: String,
    pub sales_rows: Vec<SalesCommissionRow>,
    pub average_units_rows: Vec<AverageUnitsRow>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_TEXT)
    }
}

impl ViewModel {
    /// A view model with the given input text and empty tables.
    pub fn new(target_text: impl Into<String>) -> Self {
        Self {
            target_text: target_text.into(),
            sales_rows: Vec::new(),
            average_units_rows: Vec::new(),
        }
    }

    /// Check if either table has been populated.
    pub fn has_results(&self) -> bool {
        !self.sales_rows.is_empty() || !self.average_units_rows.is_empty()
    }

    /// Submits `target_text` and replaces `self` with the result.
    ///
    /// On error `self` is left exactly as it was, text included.
    pub fn submit_in_place(
        &mut self,
        target_text: impl Into<String>,
    ) -> Result<(), InvalidInputError> {
        *self = submit(self, target_text)?;
        Ok(())
    }
}

/// User intents the view model reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The target input changed.
    EditTarget(String),
    /// Recompute both tables from the current target text.
    Calculate,
}

/// Produces the next view model for `action`.
///
/// `Calculate` parses the target before touching any rows, so on error the
/// caller still holds the previous view model unchanged.
pub fn reduce(
    state: &ViewModel,
    action: Action,
) -> Result<ViewModel, InvalidInputError> {
    match action {
        Action::EditTarget(text) => Ok(ViewModel {
            target_text: text,
            ..state.clone()
        }),
        Action::Calculate => {
            let target = parse_target(&state.target_text)?;
            debug!(value = %target, "recomputing commission tables");

            Ok(ViewModel {
                target_text: state.target_text.clone(),
                sales_rows: compute_sales_commission_rows(target),
                average_units_rows: compute_average_units_rows(target),
            })
        }
    }
}

/// Applies the input text and recalculates in one step.
///
/// This is what the Calculate button does.
pub fn submit(
    state: &ViewModel,
    target_text: impl Into<String>,
) -> Result<ViewModel, InvalidInputError> {
    let edited = reduce(state, Action::EditTarget(target_text.into()))?;
    reduce(&edited, Action::Calculate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_view_model_has_default_text_and_no_rows() {
        let state = ViewModel::default();

        assert_eq!(state.target_text, "40000");
        assert!(!state.has_results());
    }

    #[test]
    fn edit_target_only_changes_text() {
        let state = submit(&ViewModel::default(), "40000").unwrap();
        let edited = reduce(&state, Action::EditTarget("abc".to_string())).unwrap();

        assert_eq!(edited.target_text, "abc");
        assert_eq!(edited.sales_rows, state.sales_rows);
        assert_eq!(edited.average_units_rows, state.average_units_rows);
    }

    #[test]
    fn calculate_fills_both_tables() {
        let state = reduce(&ViewModel::default(), Action::Calculate).unwrap();

        assert_eq!(state.sales_rows.len(), 5);
        assert_eq!(state.average_units_rows.len(), 5);
        assert_eq!(state.sales_rows[4].range_label, "≥ R$ 40,000.00");
    }

    #[test]
    fn calculate_replaces_previous_rows() {
        let first = submit(&ViewModel::default(), "40000").unwrap();
        let second = submit(&first, "10000").unwrap();

        assert_eq!(second.sales_rows.len(), 5);
        assert_eq!(second.sales_rows[4].range_label, "≥ R$ 10,000.00");
        assert_eq!(second.average_units_rows[4].earnings_at_target_label, "R$ 50.00");
    }

    #[test]
    fn calculate_with_invalid_text_returns_error() {
        let state = ViewModel::new("abc");

        assert!(reduce(&state, Action::Calculate).is_err());
    }

    #[test]
    fn calculate_twice_is_idempotent() {
        let once = reduce(&ViewModel::default(), Action::Calculate).unwrap();
        let twice = reduce(&once, Action::Calculate).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn submit_in_place_keeps_state_on_error() {
        let mut state = ViewModel::default();
        state.submit_in_place("40000").unwrap();
        let before = state.clone();

        let result = state.submit_in_place("abc");

        assert!(result.is_err());
        assert_eq!(state, before);
        assert_eq!(state.target_text, "40000");
    }

    #[test]
    fn submit_in_place_replaces_state_on_success() {
        let mut state = ViewModel::default();

        state.submit_in_place("40.000,00").unwrap();

        assert!(state.has_results());
        assert_eq!(state.target_text, "40.000,00");
    }
}
