//! # smartcalc-cli
//!
//! CLI output formatting, result presenters, and shell completion.

pub mod completion;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interfaces::{ComparisonRow, ResultPresenter};
pub use presenter::{CLIResultPresenter, JsonResultPresenter};
