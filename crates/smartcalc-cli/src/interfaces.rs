//! Presentation interfaces.

use smartcalc_core::{EvalError, Evaluation, Operation, OperandPair, Tally};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a single successful evaluation.
    fn present_evaluation(&self, evaluation: &Evaluation);

    /// Present every operation applied to the same operands.
    fn present_comparison(&self, operands: OperandPair, rows: &[ComparisonRow]);

    /// Present a simulation tally.
    fn present_tally(&self, tally: &Tally);

    /// Present an error message.
    fn present_error(&self, error: &str);
}

/// Outcome of one operation in a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub operation: Operation,
    pub outcome: Result<Evaluation, EvalError>,
}

impl ComparisonRow {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
