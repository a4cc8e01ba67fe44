//! # Chart Error Types
//!
//! Only configuration loading can fail. Geometry never errors: degenerate
//! input propagates as non-finite floats.

use thiserror::Error;

/// Errors that can occur while setting up a chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Configuration file could not be read.
    #[error("cannot read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was opened.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// Configuration text is not valid chart TOML.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
