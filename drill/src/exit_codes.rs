//! Stable exit codes for drill commands.

/// Command succeeded and every check passed.
pub const OK: i32 = 0;
/// Invalid config, case file, exercise id or input.
pub const INVALID: i32 = 1;
/// `drill run` finished but at least one check failed or errored.
pub const FAILED: i32 = 2;
