//! Operand labels and help text per operation.

use serde::Serialize;

use crate::operation::Operation;

/// How the two operands of an operation are presented to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandLabels {
    /// Label for the first operand.
    pub first: &'static str,
    /// Label for the second operand.
    pub second: &'static str,
    /// One-line description of what the operation computes.
    pub help: &'static str,
}

impl OperandLabels {
    /// Labels for `op`.
    #[must_use]
    pub fn for_operation(op: Operation) -> Self {
        match op {
            Operation::Power => Self {
                first: "Base (Bottom number)",
                second: "Exponent (Power)",
                help: "Calculates Base to the power of Exponent.",
            },
            Operation::Logarithm => Self {
                first: "Value (Antilogarithm)",
                second: "Base",
                help: "Calculates the logarithm of the Value with the given Base.",
            },
            Operation::Divide | Operation::Modulo => Self {
                first: "Dividend (Number to be divided)",
                second: "Divisor (Number to divide by)",
                help: "Performs division or remainder calculation.",
            },
            Operation::Add | Operation::Subtract | Operation::Multiply => Self {
                first: "First Number",
                second: "Second Number",
                help: "Performs basic arithmetic.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_labels() {
        let labels = Operation::Power.labels();
        assert_eq!(labels.first, "Base (Bottom number)");
        assert_eq!(labels.second, "Exponent (Power)");
    }

    #[test]
    fn logarithm_second_operand_is_base() {
        assert_eq!(Operation::Logarithm.labels().second, "Base");
    }

    #[test]
    fn divide_and_modulo_share_labels() {
        assert_eq!(Operation::Divide.labels(), Operation::Modulo.labels());
    }

    #[test]
    fn basic_arithmetic_shares_labels() {
        let add = Operation::Add.labels();
        assert_eq!(add, Operation::Subtract.labels());
        assert_eq!(add, Operation::Multiply.labels());
        assert_eq!(add.help, "Performs basic arithmetic.");
    }
}
