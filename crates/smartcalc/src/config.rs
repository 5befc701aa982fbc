//! Application configuration from CLI flags and environment.

use clap::Parser;
use smartcalc_core::{Experiment, OperandPair, DEFAULT_TRIALS};

/// SmartCalc — arithmetic calculator with domain checks and a probability simulator.
#[derive(Parser, Debug)]
#[command(name = "smartcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Operation: add, subtract, multiply, divide, modulo, power, logarithm, or all.
    #[arg(long, default_value = "add", env = "SMARTCALC_OP")]
    pub op: String,

    /// First operand (value for logarithm, base for power, dividend for division).
    #[arg(
        short = 'a',
        long = "first",
        default_value_t = 0.0,
        env = "SMARTCALC_A",
        allow_negative_numbers = true
    )]
    pub a: f64,

    /// Second operand (base for logarithm, exponent for power, divisor for division).
    #[arg(
        short = 'b',
        long = "second",
        default_value_t = 0.0,
        env = "SMARTCALC_B",
        allow_negative_numbers = true
    )]
    pub b: f64,

    /// Run a probability simulation instead: coin or die.
    #[arg(long)]
    pub simulate: Option<String>,

    /// Number of simulation trials.
    #[arg(long, default_value_t = DEFAULT_TRIALS, env = "SMARTCALC_TRIALS")]
    pub trials: u64,

    /// Seed for a reproducible simulation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the operand labels and help text for the operation, then exit.
    #[arg(long)]
    pub describe: bool,

    /// Render equations as LaTeX.
    #[arg(long)]
    pub latex: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The operand pair given on the command line.
    #[must_use]
    pub fn operands(&self) -> OperandPair {
        OperandPair::new(self.a, self.b)
    }

    /// The requested experiment, if any.
    pub fn experiment(&self) -> Option<Result<Experiment, smartcalc_core::CalcError>> {
        self.simulate.as_deref().map(str::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("smartcalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.op, "add");
        assert_eq!(config.operands(), OperandPair::new(0.0, 0.0));
        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert!(config.simulate.is_none());
    }

    #[test]
    fn negative_operands() {
        let config = parse(&["--op", "mod", "-a", "-7", "-b", "-3.5"]);
        assert_eq!(config.operands(), OperandPair::new(-7.0, -3.5));
    }

    #[test]
    fn long_operand_flags() {
        let config = parse(&["--first", "8", "--second", "2", "--op", "log"]);
        assert_eq!(config.operands(), OperandPair::new(8.0, 2.0));
        assert_eq!(config.op, "log");
    }

    #[test]
    fn experiment_parses() {
        let config = parse(&["--simulate", "die", "--trials", "50", "--seed", "3"]);
        assert_eq!(config.experiment().unwrap().unwrap(), Experiment::Die);
        assert_eq!(config.trials, 50);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn unknown_experiment_is_error() {
        let config = parse(&["--simulate", "card"]);
        assert!(config.experiment().unwrap().is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = AppConfig::try_parse_from(["smartcalc", "-q", "-v"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn non_numeric_operand_rejected() {
        let result = AppConfig::try_parse_from(["smartcalc", "-a", "abc"]);
        assert!(result.is_err());
    }
}
