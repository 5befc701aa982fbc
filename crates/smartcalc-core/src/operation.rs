//! Operation catalogue and selection.
//!
//! `Operation` is the closed set of arithmetic operations the evaluator
//! understands. Every consumer matches on it exhaustively, so adding a
//! variant is a compile error everywhere it is not yet handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::labels::OperandLabels;

/// An arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Logarithm,
}

impl Operation {
    /// All operations in display order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
        Operation::Logarithm,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Power => "power",
            Operation::Logarithm => "logarithm",
        }
    }

    /// Human-readable title, e.g. "Division".
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Modulo => "Modulo",
            Operation::Power => "Power",
            Operation::Logarithm => "Logarithm",
        }
    }

    /// Symbol shown next to a result.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Modulo => "%",
            Operation::Power => "^",
            Operation::Logarithm => "log",
        }
    }

    /// Labels and help text for the two operands.
    #[must_use]
    pub fn labels(self) -> OperandLabels {
        OperandLabels::for_operation(self)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "plus" | "+" => Operation::Add,
            "sub" | "subtract" | "subtraction" | "minus" | "-" => Operation::Subtract,
            "mul" | "multiply" | "multiplication" | "times" | "*" | "x" => Operation::Multiply,
            "div" | "divide" | "division" | "/" => Operation::Divide,
            "mod" | "modulo" | "rem" | "%" => Operation::Modulo,
            "pow" | "power" | "^" | "**" => Operation::Power,
            "log" | "logarithm" => Operation::Logarithm,
            _ => return Err(CalcError::Config(format!("unknown operation: {s}"))),
        };
        Ok(op)
    }
}

/// Resolve an operation selector into the operations to evaluate.
///
/// `"all"` selects every operation; anything else must name exactly one.
pub fn select_operations(selector: &str) -> Result<Vec<Operation>, CalcError> {
    if selector.trim().eq_ignore_ascii_case("all") {
        return Ok(Operation::ALL.to_vec());
    }
    Ok(vec![selector.parse()?])
}
