//! Exit code constants for the inigen CLI.
//!
//! - 0: Success (including the "file already exists" no-op)
//! - 1: User error (missing argument, bad JSON, missing field, unreadable input)
//! - 2: Write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing argument, malformed spec, or unreadable input.
pub const USER_ERROR: i32 = 1;

/// The INI file could not be written.
pub const WRITE_FAILURE: i32 = 2;
