//! Evaluation request types.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// The two operands of an operation.
///
/// Their meaning depends on the operation: value and base for
/// `Logarithm`, base and exponent for `Power`, dividend and divisor for
/// `Divide` and `Modulo`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OperandPair {
    pub a: f64,
    pub b: f64,
}

impl OperandPair {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// A single evaluation request: which operation, on which operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub operation: Operation,
    #[serde(flatten)]
    pub operands: OperandPair,
}

impl EvaluationRequest {
    /// Create a request for `operation` applied to `a` and `b`.
    #[must_use]
    pub fn new(operation: Operation, a: f64, b: f64) -> Self {
        Self {
            operation,
            operands: OperandPair::new(a, b),
        }
    }
}
