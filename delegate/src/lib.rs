//! Hand a service's start command over to the Node runtime.
//!
//! Some hosting platforms pick a start command from the files they detect
//! (for example a Python entrypoint when a requirements file is present).
//! This crate replaces the current process with `node server.js` so the
//! application starts the same way under either command.
//!
//! - **[`core`]**: Pure, deterministic logic (the target pair, argv, error
//!   classification). No I/O.
//! - **[`io`]**: The process replacement call and its portable fallback.
//!
//! [`handover`] wires the two together; [`delegate()`] is the only
//! operation the binary calls.

pub mod core;
pub mod exit_codes;
pub mod handover;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::failure::{DelegateError, FailureKind, RUNTIME_NOT_FOUND_MESSAGE};
pub use crate::core::target::{DelegateTarget, NODE_SERVER};
pub use crate::handover::{delegate, delegate_to, diagnostic};
