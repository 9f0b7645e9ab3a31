//! I/O helpers for the delegator.

pub mod process;
