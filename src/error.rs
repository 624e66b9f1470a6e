use std::io;

use thiserror::Error;

/// Error type for timestamp handling and record output.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid ISO-8601 timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: jiff::Error,
    },
    #[error("timestamp '{input}' carries a UTC offset or time zone; only civil date-times are accepted")]
    UnsupportedOffset { input: String },
    #[error("{field} must be a prefixed name such as 'suite:Complete', got '{value}'")]
    InvalidTerm { field: &'static str, value: String },
    #[error("shifting '{input}' by {offset} {unit} leaves the supported range: {source}")]
    OutOfRange {
        input: String,
        offset: i64,
        unit: &'static str,
        #[source]
        source: jiff::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
