//! Process exit codes

/// Successful termination, including help and version output
pub const OK: i32 = 0;

/// Handler failure (I/O error while writing output)
pub const FAILURE: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 2;
