//! Error handling and exit codes.

use smartcalc_core::constants::exit_codes;
use smartcalc_core::CalcError;

/// Map a calculator error to the process exit code.
pub fn exit_code(err: &CalcError) -> i32 {
    match err {
        CalcError::Domain(_) => exit_codes::ERROR_DOMAIN,
        CalcError::Simulation(_) | CalcError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}
