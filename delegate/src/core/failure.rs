//! Classification of failed process replacements.
//!
//! Only one failure is recognized: the runtime could not be found on
//! `PATH`. Everything else is reported as a plain exec error.

use std::io;

use thiserror::Error;

/// Line written to stderr when the runtime cannot be resolved.
pub const RUNTIME_NOT_FOUND_MESSAGE: &str =
    "Node.js runtime not found; ensure your service uses the Node environment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RuntimeNotFound,
    Other,
}

/// Map an exec error onto the recognized failure kinds.
pub fn classify(err: &io::Error) -> FailureKind {
    match err.kind() {
        io::ErrorKind::NotFound => FailureKind::RuntimeNotFound,
        _ => FailureKind::Other,
    }
}

/// Why control came back from a process replacement.
#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("runtime `{program}` not found")]
    RuntimeNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("exec `{program}`")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl DelegateError {
    pub fn from_io(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        match classify(&source) {
            FailureKind::RuntimeNotFound => Self::RuntimeNotFound { program, source },
            FailureKind::Other => Self::Exec { program, source },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::RuntimeNotFound { .. } => FailureKind::RuntimeNotFound,
            Self::Exec { .. } => FailureKind::Other,
        }
    }

    pub fn program(&self) -> &str {
        match self {
            Self::RuntimeNotFound { program, .. } | Self::Exec { program, .. } => program,
        }
    }
}
