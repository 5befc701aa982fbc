//! Error types.

use crate::evaluator::EvalError;
use crate::simulation::SimulationError;

/// Top-level error for the calculator library.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// An evaluation was mathematically undefined.
    #[error(transparent)]
    Domain(#[from] EvalError),

    /// A simulation request was rejected.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_message_is_verbatim() {
        let err = CalcError::from(EvalError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }

    #[test]
    fn config_display() {
        let err = CalcError::Config("unknown operation: foo".into());
        assert_eq!(err.to_string(), "configuration error: unknown operation: foo");
    }
}
