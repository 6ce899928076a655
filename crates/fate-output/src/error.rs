//! Error types for fate-output.

use fate_core::FateError;
use thiserror::Error;

/// Errors from kill-log sinks and snapshot files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A snapshot record named an invalid agent.
    #[error("snapshot record {record}: {source}")]
    Record {
        record: u64,
        #[source]
        source: FateError,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
