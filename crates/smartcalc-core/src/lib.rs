//! # smartcalc-core
//!
//! Core library for the SmartCalc arithmetic calculator.
//! Evaluates one of seven operations on a pair of `f64` operands with
//! domain validation, and runs simple probability simulations.

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod labels;
pub mod operation;
pub mod request;
pub mod simulation;

// Re-exports
pub use constants::{exit_codes, DEFAULT_TRIALS, MAX_TRIALS};
pub use error::CalcError;
pub use evaluator::{EvalError, Evaluation, Evaluator, StandardEvaluator, TracingEvaluator};
pub use labels::OperandLabels;
pub use operation::{select_operations, Operation};
pub use request::{EvaluationRequest, OperandPair};
pub use simulation::{simulate, simulate_with_seed, Experiment, SimulationError, Tally};

/// Evaluate `operation` on `a` and `b`, returning the value and its display
/// symbol.
///
/// This is a convenience function for simple use cases. For logging or a
/// custom evaluator, use the `Evaluator` trait directly.
///
/// # Example
/// ```
/// use smartcalc_core::{evaluate, EvalError, Operation};
///
/// assert_eq!(evaluate(Operation::Power, 2.0, 10.0), Ok((1024.0, "^")));
/// assert_eq!(evaluate(Operation::Divide, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(operation: Operation, a: f64, b: f64) -> Result<(f64, &'static str), EvalError> {
    let value = evaluator::compute(operation, a, b)?;
    Ok((value, operation.symbol()))
}
