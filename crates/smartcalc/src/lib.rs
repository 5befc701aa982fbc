//! SmartCalc library — application logic for the calculator binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
