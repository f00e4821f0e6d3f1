//! CLI-level errors (wraps storage errors)

use thiserror::Error;

use crate::storage::StorageError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("command already registered: {0}")]
    DuplicateCommand(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Storage(_) => crate::exitcode::FAILURE,
            CliError::DuplicateCommand(_) => crate::exitcode::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_each_variant_when_mapping_exit_code_then_matches_error_class() {
        let storage = CliError::from(StorageError::InvalidRange { start: 2, end: 1 });
        assert_eq!(storage.exit_code(), exitcode::FAILURE);
        assert_eq!(CliError::Usage("x".into()).exit_code(), exitcode::USAGE);
        assert_eq!(
            CliError::DuplicateCommand("version".into()).exit_code(),
            exitcode::SOFTWARE
        );
    }
}
