//! Diagnostic tool for heads checkpoint and chunk files of a local
//! time-series storage.

pub mod cli;
pub mod commands;
pub mod exitcode;
pub mod storage;
pub mod util;
pub mod version;
