//! Exit codes returned by [`run`](crate::run).

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, or a session that stopped
/// on a fatal engine error.
pub const ERROR: i32 = 2;
