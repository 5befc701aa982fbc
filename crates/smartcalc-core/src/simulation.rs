//! Probability simulator: repeated fair trials with a frequency tally.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::constants::MAX_TRIALS;
use crate::error::CalcError;

const COIN_OUTCOMES: [&str; 2] = ["Heads", "Tails"];
const DIE_OUTCOMES: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

/// Error type for simulation requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("number of trials must be at least 1")]
    NoTrials,

    #[error("number of trials {requested} exceeds the limit of {limit}")]
    TooManyTrials { requested: u64, limit: u64 },
}

/// A random experiment with equally likely outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Experiment {
    /// Fair coin flip.
    Coin,
    /// Fair six-sided die.
    Die,
}

impl Experiment {
    /// Outcome labels, in tally order.
    #[must_use]
    pub fn outcomes(self) -> &'static [&'static str] {
        match self {
            Experiment::Coin => &COIN_OUTCOMES,
            Experiment::Die => &DIE_OUTCOMES,
        }
    }

    /// Probability of any single outcome.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn outcome_probability(self) -> f64 {
        1.0 / self.outcomes().len() as f64
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experiment::Coin => f.write_str("coin"),
            Experiment::Die => f.write_str("die"),
        }
    }
}

impl FromStr for Experiment {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coin" | "flip" => Ok(Experiment::Coin),
            "die" | "dice" | "roll" => Ok(Experiment::Die),
            _ => Err(CalcError::Config(format!("unknown experiment: {s}"))),
        }
    }
}

/// One row of a tally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeFrequency {
    pub outcome: &'static str,
    pub count: u64,
    pub relative: f64,
}

/// Frequency counts from a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub experiment: Experiment,
    pub trials: u64,
    /// Counts indexed like `experiment.outcomes()`.
    pub counts: Vec<u64>,
}

impl Tally {
    /// Per-outcome counts with relative frequencies.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frequencies(&self) -> Vec<OutcomeFrequency> {
        self.experiment
            .outcomes()
            .iter()
            .zip(&self.counts)
            .map(|(&outcome, &count)| OutcomeFrequency {
                outcome,
                count,
                relative: count as f64 / self.trials as f64,
            })
            .collect()
    }

    /// Largest distance between an observed relative frequency and the
    /// theoretical probability.
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        let expected = self.experiment.outcome_probability();
        self.frequencies()
            .iter()
            .map(|f| (f.relative - expected).abs())
            .fold(0.0, f64::max)
    }
}

fn check_trials(trials: u64) -> Result<(), SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    if trials > MAX_TRIALS {
        return Err(SimulationError::TooManyTrials {
            requested: trials,
            limit: MAX_TRIALS,
        });
    }
    Ok(())
}

/// Run `trials` draws of `experiment` using `rng`.
pub fn simulate<R: Rng>(
    experiment: Experiment,
    trials: u64,
    rng: &mut R,
) -> Result<Tally, SimulationError> {
    check_trials(trials)?;

    let sides = experiment.outcomes().len();
    let mut counts = vec![0u64; sides];
    for _ in 0..trials {
        counts[rng.random_range(0..sides)] += 1;
    }

    tracing::debug!(%experiment, trials, ?counts, "simulation complete");
    Ok(Tally {
        experiment,
        trials,
        counts,
    })
}

/// Run a simulation with a seeded RNG, or one seeded from the OS when
/// `seed` is `None`.
pub fn simulate_with_seed(
    experiment: Experiment,
    trials: u64,
    seed: Option<u64>,
) -> Result<Tally, SimulationError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    simulate(experiment, trials, &mut rng)
}
