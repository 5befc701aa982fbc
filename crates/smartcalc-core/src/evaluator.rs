//! Evaluator trait and the `TracingEvaluator` decorator.
//!
//! `Evaluator` is the seam consumed by the application.
//! `StandardEvaluator` implements the arithmetic with domain checks.
//! `TracingEvaluator` wraps any evaluator and logs each outcome.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;
use crate::request::{EvaluationRequest, OperandPair};

/// A mathematically undefined input combination.
///
/// The display strings are user-facing and shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum EvalError {
    /// Divide or Modulo with a zero divisor.
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Logarithm of a value that is zero or negative.
    #[error("Value must be positive for Logarithm.")]
    NonPositiveValue,

    /// Logarithm base that is zero, negative, or one.
    #[error("Base must be positive and not 1.")]
    InvalidBase,
}

/// A successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: OperandPair,
    pub value: f64,
    pub symbol: &'static str,
}

/// Evaluates requests.
pub trait Evaluator: Send + Sync {
    /// Evaluate one request.
    fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation, EvalError>;

    /// Name of this evaluator.
    fn name(&self) -> &str;
}

/// Native `f64` arithmetic with domain validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl StandardEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for StandardEvaluator {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation, EvalError> {
        let OperandPair { a, b } = request.operands;
        let value = compute(request.operation, a, b)?;
        Ok(Evaluation {
            operation: request.operation,
            operands: request.operands,
            value,
            symbol: request.operation.symbol(),
        })
    }

    fn name(&self) -> &str {
        "Standard"
    }
}

/// Decorator that emits a `tracing` event for every evaluation.
pub struct TracingEvaluator<E> {
    inner: E,
}

impl<E: Evaluator> TracingEvaluator<E> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: Evaluator> Evaluator for TracingEvaluator<E> {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation, EvalError> {
        let result = self.inner.evaluate(request);
        match &result {
            Ok(eval) => tracing::debug!(
                evaluator = self.inner.name(),
                operation = %request.operation,
                a = request.operands.a,
                b = request.operands.b,
                value = eval.value,
                "evaluated"
            ),
            Err(err) => tracing::info!(
                evaluator = self.inner.name(),
                operation = %request.operation,
                a = request.operands.a,
                b = request.operands.b,
                error = %err,
                "domain error"
            ),
        }
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Apply `op` to `a` and `b`.
pub(crate) fn compute(op: Operation, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        Operation::Modulo => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(floored_rem(a, b))
        }
        Operation::Power => Ok(a.powf(b)),
        Operation::Logarithm => {
            if a <= 0.0 {
                return Err(EvalError::NonPositiveValue);
            }
            if b <= 0.0 || b == 1.0 {
                return Err(EvalError::InvalidBase);
            }
            Ok(a.ln() / b.ln())
        }
    }
}

/// Remainder whose sign follows the divisor.
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r == 0.0 {
        0.0_f64.copysign(b)
    } else if (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: Operation, a: f64, b: f64) -> Result<f64, EvalError> {
        StandardEvaluator::new()
            .evaluate(&EvaluationRequest::new(op, a, b))
            .map(|e| e.value)
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(eval(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(eval(Operation::Subtract, 5.0, 3.0), Ok(2.0));
        assert_eq!(eval(Operation::Multiply, 4.0, 5.0), Ok(20.0));
        assert_eq!(eval(Operation::Divide, 7.0, 2.0), Ok(3.5));
        assert_eq!(eval(Operation::Power, 2.0, 10.0), Ok(1024.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval(Operation::Divide, 1.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval(Operation::Modulo, 1.0, 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn negative_zero_divisor_is_zero() {
        assert_eq!(eval(Operation::Divide, 1.0, -0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval(Operation::Modulo, 1.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn modulo_sign_follows_divisor() {
        assert_eq!(eval(Operation::Modulo, 7.0, 3.0), Ok(1.0));
        assert_eq!(eval(Operation::Modulo, -7.0, 3.0), Ok(2.0));
        assert_eq!(eval(Operation::Modulo, 7.0, -3.0), Ok(-2.0));
        assert_eq!(eval(Operation::Modulo, 5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn modulo_exact_multiple_takes_divisor_sign() {
        let r = eval(Operation::Modulo, 6.0, -3.0).unwrap();
        assert_eq!(r, 0.0);
        assert!(r.is_sign_negative());
    }

    #[test]
    fn logarithm_values() {
        assert_eq!(eval(Operation::Logarithm, 8.0, 2.0), Ok(3.0));
        assert_eq!(eval(Operation::Logarithm, 1.0, 10.0), Ok(0.0));
        let r = eval(Operation::Logarithm, 1000.0, 10.0).unwrap();
        assert!((r - 3.0).abs() < 1e-12);
    }

    #[test]
    fn logarithm_value_checked_before_base() {
        assert_eq!(eval(Operation::Logarithm, 0.0, 2.0), Err(EvalError::NonPositiveValue));
        assert_eq!(eval(Operation::Logarithm, -1.0, 1.0), Err(EvalError::NonPositiveValue));
    }

    #[test]
    fn logarithm_invalid_base() {
        assert_eq!(eval(Operation::Logarithm, 8.0, 1.0), Err(EvalError::InvalidBase));
        assert_eq!(eval(Operation::Logarithm, 8.0, 0.0), Err(EvalError::InvalidBase));
        assert_eq!(eval(Operation::Logarithm, 8.0, -2.0), Err(EvalError::InvalidBase));
    }

    #[test]
    fn logarithm_fractional_base() {
        let r = eval(Operation::Logarithm, 0.25, 0.5).unwrap();
        assert!((r - 2.0).abs() < 1e-12);
    }

    #[test]
    fn power_overflow_is_not_an_error() {
        let r = eval(Operation::Power, 10.0, 400.0).unwrap();
        assert!(r.is_infinite());
    }

    #[test]
    fn power_negative_base_fractional_exponent_is_nan() {
        assert!(eval(Operation::Power, -8.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn nan_operands_propagate() {
        assert!(eval(Operation::Add, f64::NAN, 1.0).unwrap().is_nan());
        assert!(eval(Operation::Logarithm, f64::NAN, 2.0).unwrap().is_nan());
    }

    #[test]
    fn evaluation_carries_symbol() {
        let eval = StandardEvaluator::new()
            .evaluate(&EvaluationRequest::new(Operation::Divide, 9.0, 3.0))
            .unwrap();
        assert_eq!(eval.symbol, "÷");
        assert_eq!(eval.operation, Operation::Divide);
        assert_eq!(eval.operands, OperandPair::new(9.0, 3.0));
    }

    #[test]
    fn error_messages_verbatim() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "Cannot divide by zero.");
        assert_eq!(
            EvalError::NonPositiveValue.to_string(),
            "Value must be positive for Logarithm."
        );
        assert_eq!(EvalError::InvalidBase.to_string(), "Base must be positive and not 1.");
    }

    #[test]
    fn tracing_evaluator_delegates() {
        let evaluator = TracingEvaluator::new(StandardEvaluator::new());
        assert_eq!(evaluator.name(), "Standard");
        let req = EvaluationRequest::new(Operation::Add, 1.0, 2.0);
        assert_eq!(evaluator.evaluate(&req).unwrap().value, 3.0);
        let req = EvaluationRequest::new(Operation::Divide, 1.0, 0.0);
        assert_eq!(evaluator.evaluate(&req), Err(EvalError::DivisionByZero));
    }
}
