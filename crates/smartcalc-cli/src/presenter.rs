//! CLI and JSON result presenters.

use serde_json::{json, Value};
use smartcalc_core::{Evaluation, OperandPair, Tally};

use crate::interfaces::{ComparisonRow, ResultPresenter};
use crate::output::{format_equation, format_latex, format_number, format_tally, format_value};
use crate::ui;

/// Human-readable presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    latex: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, latex: bool) -> Self {
        Self {
            verbose,
            quiet,
            latex,
        }
    }

    /// The equation line for `evaluation`, plain or LaTeX.
    #[must_use]
    pub fn equation(&self, evaluation: &Evaluation) -> String {
        if self.latex {
            format_latex(evaluation.operation, evaluation.operands, evaluation.value)
        } else {
            format_equation(evaluation.operation, evaluation.operands, evaluation.value)
        }
    }

    fn comparison_line(&self, row: &ComparisonRow) -> String {
        let (detail, status) = match &row.outcome {
            Ok(evaluation) => (self.equation(evaluation), "OK"),
            Err(err) => (err.to_string(), "ERROR"),
        };
        format!("  {:<16} {:<40} [{status}]", row.operation.title(), detail)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_evaluation(&self, evaluation: &Evaluation) {
        if self.quiet {
            println!("{}", format_value(evaluation.value));
            return;
        }

        if self.verbose {
            let labels = evaluation.operation.labels();
            println!("Operation: {}", evaluation.operation.title());
            println!("{}: {}", labels.first, format_value(evaluation.operands.a));
            println!("{}: {}", labels.second, format_value(evaluation.operands.b));
            ui::print_info(&format!("Current Mode: {}", labels.help));
        }

        ui::print_success(&format!("Result: {}", format_value(evaluation.value)));
        println!("Equation: {}", self.equation(evaluation));
    }

    fn present_comparison(&self, operands: OperandPair, rows: &[ComparisonRow]) {
        if self.quiet {
            for row in rows {
                match &row.outcome {
                    Ok(evaluation) => println!("{}", format_value(evaluation.value)),
                    Err(err) => println!("{err}"),
                }
            }
            return;
        }

        ui::print_header(&format!(
            "All operations on a = {}, b = {}",
            format_value(operands.a),
            format_value(operands.b)
        ));
        println!("{:-<66}", "");
        for row in rows {
            println!("{}", self.comparison_line(row));
        }
    }

    fn present_tally(&self, tally: &Tally) {
        if self.quiet {
            let counts: Vec<String> = tally.counts.iter().map(u64::to_string).collect();
            println!("{}", counts.join(" "));
            return;
        }

        ui::print_header(&format!(
            "{} trials of {}",
            format_number(tally.trials),
            tally.experiment
        ));
        println!("  {:<6} {:>12} {:>9}", "Outcome", "Count", "Frequency");
        print!("{}", format_tally(tally));
        println!(
            "Expected probability: {:.4}",
            tally.experiment.outcome_probability()
        );
        if self.verbose {
            println!("Max deviation: {:.4}", tally.max_deviation());
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(&format!("Error: {error}"));
    }
}

/// Machine-readable presenter that prints one JSON document per call.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn evaluation_json(evaluation: &Evaluation) -> Value {
        json!({
            "operation": evaluation.operation,
            "a": evaluation.operands.a,
            "b": evaluation.operands.b,
            "value": evaluation.value,
            "symbol": evaluation.symbol,
            "equation": format_equation(evaluation.operation, evaluation.operands, evaluation.value),
        })
    }

    #[must_use]
    pub fn comparison_json(operands: OperandPair, rows: &[ComparisonRow]) -> Value {
        let results: Vec<Value> = rows
            .iter()
            .map(|row| match &row.outcome {
                Ok(evaluation) => Self::evaluation_json(evaluation),
                Err(err) => json!({
                    "operation": row.operation,
                    "error": err.to_string(),
                }),
            })
            .collect();
        json!({
            "a": operands.a,
            "b": operands.b,
            "results": results,
        })
    }

    #[must_use]
    pub fn tally_json(tally: &Tally) -> Value {
        json!({
            "experiment": tally.experiment,
            "trials": tally.trials,
            "expected_probability": tally.experiment.outcome_probability(),
            "frequencies": tally.frequencies(),
        })
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_evaluation(&self, evaluation: &Evaluation) {
        println!("{}", Self::evaluation_json(evaluation));
    }

    fn present_comparison(&self, operands: OperandPair, rows: &[ComparisonRow]) {
        println!("{}", Self::comparison_json(operands, rows));
    }

    fn present_tally(&self, tally: &Tally) {
        println!("{}", Self::tally_json(tally));
    }

    fn present_error(&self, error: &str) {
        println!("{}", json!({ "error": error }));
    }
}
