//! Storage-level errors

use thiserror::Error;

/// Errors raised while reading a heads checkpoint or chunk file.
///
/// The `Display` text is what the CLI prints after `FAILED:`.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid offset range: start {start} is beyond end {end}")]
    InvalidRange { start: i64, end: i64 },
}

impl StorageError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
