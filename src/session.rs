//! Calculator session state
//!
//! Replaces the UI's reactive state with an explicit struct holding the
//! current inputs and the most recent results. Each calculation validates,
//! projects, and swaps in a wholly new result record; reset restores the
//! defaults and discards results.

use crate::inputs::{validate, InputError, ProjectionInput};
use crate::projection::{project, ProjectionResult};

/// Current inputs and results for one calculator session
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    inputs: ProjectionInput,
    results: Option<ProjectionResult>,
}

impl CalculatorSession {
    /// Start a session with the default inputs and no results
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and run a calculation, storing the inputs and fresh results
    ///
    /// On validation failure the session keeps its previous state.
    pub fn calculate(&mut self, inputs: ProjectionInput) -> Result<&ProjectionResult, InputError> {
        validate(&inputs)?;
        let results = project(&inputs);
        self.inputs = inputs;
        Ok(self.results.insert(results))
    }

    /// Restore default inputs and discard any results
    pub fn reset(&mut self) {
        self.inputs = ProjectionInput::default();
        self.results = None;
    }

    /// Current inputs
    pub fn inputs(&self) -> &ProjectionInput {
        &self.inputs
    }

    /// Most recent results, if a calculation has run
    pub fn results(&self) -> Option<&ProjectionResult> {
        self.results.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_stores_results() {
        let mut session = CalculatorSession::new();
        assert!(session.results().is_none());

        let inputs = ProjectionInput {
            term_months: 6,
            ..Default::default()
        };
        let result = session.calculate(inputs.clone()).unwrap();
        assert_eq!(result.term_months(), 6);

        assert_eq!(session.inputs(), &inputs);
        assert!(session.results().is_some());
    }

    #[test]
    fn test_invalid_inputs_keep_previous_state() {
        let mut session = CalculatorSession::new();
        session.calculate(ProjectionInput::default()).unwrap();

        let bad = ProjectionInput {
            term_months: 0,
            ..Default::default()
        };
        assert!(session.calculate(bad).is_err());

        // Previous inputs and results survive the failed calculation
        assert_eq!(session.inputs().term_months, 12);
        assert!(session.results().is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = CalculatorSession::new();
        session
            .calculate(ProjectionInput {
                cd_rate: 9.9,
                ..Default::default()
            })
            .unwrap();

        session.reset();

        assert_eq!(session.inputs(), &ProjectionInput::default());
        assert!(session.results().is_none());
    }
}
