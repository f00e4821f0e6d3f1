//! Storage layer: readers for heads checkpoint and chunk files
//!
//! The CLI only talks to [`StorageInspector`]; [`FileInspector`] is the
//! byte-level implementation wired up by `main`.

pub mod error;
pub mod error_ext;
pub mod hexdump;
pub mod inspector;

pub use error::{StorageError, StorageResult};
pub use error_ext::IoResultExt;
pub use inspector::{FileInspector, StorageInspector, UNBOUNDED};
