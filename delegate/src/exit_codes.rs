//! Stable exit codes for the delegate binary.
//!
//! A successful delegation never exits from this program: the replaced
//! process reports its own status.

/// The runtime was not found on `PATH` or could not be executed.
pub const FAILURE: i32 = 1;
