//! Deterministic, pure logic for the delegator.
//!
//! Core modules must be free of I/O side effects. Building a `Command` is
//! fine; running it belongs in [`crate::io`].

pub mod failure;
pub mod target;
