use std::io;

use thiserror::Error;

/// Error type for ratings decoding, partition configuration, and IO failures.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("malformed ratings line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
