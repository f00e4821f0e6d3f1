//! Error conversion helpers for file I/O
//!
//! Provides an extension trait for attaching the file path to I/O errors.

use std::io;
use std::path::Path;

use crate::storage::{StorageError, StorageResult};

/// Extension trait for converting `io::Result` to `StorageResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// File::open(path).with_path_context("open", path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> StorageResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> StorageResult<T> {
        self.map_err(|e| StorageError::io(format!("{} {}", action, path.display()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_failed_io_when_adding_context_then_message_names_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result
            .with_path_context("open", Path::new("/data/heads.db"))
            .unwrap_err();

        assert_eq!(err.to_string(), "open /data/heads.db: gone");
    }

    #[test]
    fn given_successful_io_when_adding_context_then_value_passes_through() {
        let result: io::Result<u8> = Ok(7);
        assert_eq!(result.with_path_context("read", Path::new("x")).unwrap(), 7);
    }
}
