use std::io;

use thiserror::Error;

/// Error type for dataset layout, IO, and configuration failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("partition '{partition}' is unavailable: {reason}")]
    PartitionUnavailable { partition: String, reason: String },
    #[error("labels for partition '{partition}' are misaligned: {details}")]
    LabelMisalignment { partition: String, details: String },
    #[error("row {row} has {found} fields but the header defines {expected} columns")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
