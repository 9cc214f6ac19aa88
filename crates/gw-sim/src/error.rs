//! Simulation error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration value failed builder validation.
    #[error("invalid configuration: {what} = {value}")]
    Config { what: &'static str, value: f64 },

    /// The step log could not be created or written.
    #[error("step log error: {0}")]
    StepLog(#[from] csv::Error),
}

pub type SimResult<T> = Result<T, SimError>;
