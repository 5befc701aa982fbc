//! Constants for simulation limits and process exit codes.

/// Default number of trials for a simulation run.
pub const DEFAULT_TRIALS: u64 = 1000;

/// Upper bound on trials accepted by a single simulation run.
pub const MAX_TRIALS: u64 = 10_000_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A single evaluation hit a domain error.
    pub const ERROR_DOMAIN: i32 = 2;
    /// Invalid configuration (unknown operation, bad trial count).
    pub const ERROR_CONFIG: i32 = 4;
}
