//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// The delegated read or dump operation failed
pub const FAILURE: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 2;

/// Internal software error (broken command table at startup)
pub const SOFTWARE: i32 = 70;
