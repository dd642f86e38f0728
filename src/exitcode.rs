//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Uniform failure code: missing prompt and delegate faults alike
pub const FAILURE: i32 = 1;
