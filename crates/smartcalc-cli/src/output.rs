//! CLI output formatting.

use std::io::{self, Write};

use smartcalc_core::{Operation, OperandPair, Tally};

/// Magnitude at or above which values switch to exponent notation.
const EXP_UPPER: f64 = 1e16;
/// Magnitude below which non-zero values switch to exponent notation.
const EXP_LOWER: f64 = 1e-4;

/// Format an `f64` for display.
///
/// Integral values print without a fractional part, very large or very
/// small magnitudes use exponent notation, and non-finite values print as
/// `inf`, `-inf` or `NaN`.
#[must_use]
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Render the plain-text equation for a successful evaluation.
#[must_use]
pub fn format_equation(op: Operation, operands: OperandPair, value: f64) -> String {
    let a = format_value(operands.a);
    let b = format_value(operands.b);
    let r = format_value(value);
    match op {
        Operation::Power => format!("{a}^{b} = {r}"),
        Operation::Logarithm => format!("log_{b}({a}) = {r}"),
        Operation::Add
        | Operation::Subtract
        | Operation::Multiply
        | Operation::Divide
        | Operation::Modulo => format!("{a} {} {b} = {r}", op.symbol()),
    }
}

/// Render the equation as LaTeX math.
#[must_use]
pub fn format_latex(op: Operation, operands: OperandPair, value: f64) -> String {
    let a = format_value(operands.a);
    let b = format_value(operands.b);
    let r = format_value(value);
    match op {
        Operation::Add => format!("{a} + {b} = {r}"),
        Operation::Subtract => format!("{a} - {b} = {r}"),
        Operation::Multiply => format!("{a} \\times {b} = {r}"),
        Operation::Divide => format!("{a} \\div {b} = {r}"),
        Operation::Modulo => format!("{a} \\bmod {b} = {r}"),
        Operation::Power => format!("{a}^{{{b}}} = {r}"),
        Operation::Logarithm => format!("\\log_{{{b}}} ({a}) = {r}"),
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Render a tally as an aligned table, one outcome per line.
#[must_use]
pub fn format_tally(tally: &Tally) -> String {
    let mut out = String::new();
    for row in tally.frequencies() {
        out.push_str(&format!(
            "  {:<6} {:>12} {:>9.4}\n",
            row.outcome,
            format_number(row.count),
            row.relative
        ));
    }
    out
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
