//! Application entry point and dispatch.

use anyhow::Result;
use serde_json::json;

use smartcalc_cli::output::{format_value, write_to_file};
use smartcalc_cli::{CLIResultPresenter, ComparisonRow, JsonResultPresenter, ResultPresenter};
use smartcalc_core::constants::exit_codes;
use smartcalc_core::{
    select_operations, simulate_with_seed, CalcError, EvaluationRequest, Evaluator,
    StandardEvaluator, TracingEvaluator,
};

use crate::config::AppConfig;
use crate::errors::exit_code;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        smartcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(
            config.verbose,
            config.quiet,
            config.latex,
        ))
    };

    let outcome = if config.describe {
        run_describe(config)
    } else if config.simulate.is_some() {
        run_simulation(config, presenter.as_ref())
    } else {
        run_evaluation(config, presenter.as_ref())
    };

    match outcome {
        Ok(rendered) => {
            if let Some(ref path) = config.output {
                write_to_file(path, &rendered)?;
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(err) => {
            presenter.present_error(&err.to_string());
            Ok(exit_code(&err))
        }
    }
}

/// Evaluate one operation, or all of them for `--op all`.
///
/// Returns the text written by `--output`.
fn run_evaluation(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<String, CalcError> {
    let operations = select_operations(&config.op)?;
    let operands = config.operands();
    let evaluator = TracingEvaluator::new(StandardEvaluator::new());

    if let [operation] = operations.as_slice() {
        let request = EvaluationRequest {
            operation: *operation,
            operands,
        };
        let evaluation = evaluator.evaluate(&request)?;
        presenter.present_evaluation(&evaluation);
        return Ok(format_value(evaluation.value));
    }

    let rows: Vec<ComparisonRow> = operations
        .into_iter()
        .map(|operation| ComparisonRow {
            operation,
            outcome: evaluator.evaluate(&EvaluationRequest {
                operation,
                operands,
            }),
        })
        .collect();
    tracing::debug!(
        failed = rows.iter().filter(|r| !r.is_ok()).count(),
        "comparison complete"
    );
    presenter.present_comparison(operands, &rows);
    Ok(JsonResultPresenter::comparison_json(operands, &rows).to_string())
}

fn run_simulation(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<String, CalcError> {
    let Some(experiment) = config.experiment().transpose()? else {
        return Err(CalcError::Config("no experiment selected".into()));
    };
    let tally = simulate_with_seed(experiment, config.trials, config.seed)?;
    presenter.present_tally(&tally);
    Ok(JsonResultPresenter::tally_json(&tally).to_string())
}

fn run_describe(config: &AppConfig) -> Result<String, CalcError> {
    let operations = select_operations(&config.op)?;
    let descriptions: Vec<_> = operations
        .iter()
        .map(|op| {
            json!({
                "operation": op,
                "symbol": op.symbol(),
                "labels": op.labels(),
            })
        })
        .collect();

    if config.json {
        println!("{}", serde_json::Value::Array(descriptions.clone()));
    } else {
        for op in &operations {
            let labels = op.labels();
            println!("{} ({})", op.title(), op.symbol());
            println!("  a: {}", labels.first);
            println!("  b: {}", labels.second);
            println!("  {}", labels.help);
        }
    }
    Ok(serde_json::Value::Array(descriptions).to_string())
}
