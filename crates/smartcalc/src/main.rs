//! SmartCalc — arithmetic calculator with domain validation.

use anyhow::Result;
use smartcalc_core::constants::exit_codes;
use smartcalc_lib::{app, config, version};

fn main() -> Result<()> {
    // Initialize tracing; stdout carries results, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = config::AppConfig::parse();
    tracing::debug!(version = %version::full_version(), op = %config.op, "starting");

    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
