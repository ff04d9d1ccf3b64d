//! Stable exit codes for regform CLI commands.

/// Command succeeded: form valid, submission completed, or options found.
pub const OK: i32 = 0;
/// Command failed due to unreadable config, snapshot or reference data.
pub const ERROR: i32 = 1;
/// Form has failing fields, or a cascade lookup produced no options.
pub const INVALID: i32 = 2;
