//! The handover operation: build the target command and replace this process.

use tracing::debug;

use crate::core::failure::{DelegateError, FailureKind, RUNTIME_NOT_FOUND_MESSAGE};
use crate::core::target::{DelegateTarget, NODE_SERVER};
use crate::io::process::replace_process;

/// Replace this process with `node server.js`.
///
/// Never returns on success.
pub fn delegate() -> DelegateError {
    delegate_to(&NODE_SERVER)
}

/// Replace this process with `target`, returning only on failure.
pub fn delegate_to(target: &DelegateTarget<'_>) -> DelegateError {
    debug!(argv = ?target.argv(), "delegating");
    let mut cmd = target.command();
    let err = replace_process(&mut cmd);
    let err = DelegateError::from_io(target.program, err);
    debug!(kind = ?err.kind(), "delegation failed");
    err
}

/// Fixed stderr line for a recognized failure.
///
/// `None` means the error is not recognized and should be reported as its
/// full error chain.
pub fn diagnostic(err: &DelegateError) -> Option<&'static str> {
    match err.kind() {
        FailureKind::RuntimeNotFound => Some(RUNTIME_NOT_FOUND_MESSAGE),
        FailureKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runtime_yields_fixed_message() {
        let target = DelegateTarget::new("/nonexistent/delegate-test/node", "server.js");
        let err = delegate_to(&target);
        assert_eq!(err.kind(), FailureKind::RuntimeNotFound);
        assert_eq!(diagnostic(&err), Some(RUNTIME_NOT_FOUND_MESSAGE));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_runtime_is_reported_as_exec_error() {
        use crate::test_support::FakeRuntime;

        let fake = FakeRuntime::new().expect("fake runtime");
        let program = fake.install_non_executable("node").expect("install");
        let program = program.to_str().expect("utf-8 path");

        let err = delegate_to(&DelegateTarget::new(program, "server.js"));
        assert_eq!(err.kind(), FailureKind::Other);
        assert_eq!(diagnostic(&err), None);
        let chain = format!("{:#}", anyhow::Error::new(err));
        assert!(chain.starts_with(&format!("exec `{program}`: ")), "{chain}");
    }

    #[test]
    fn exec_error_chain_includes_source() {
        let err = DelegateError::from_io(
            "node",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(diagnostic(&err), None);
        assert_eq!(format!("{:#}", anyhow::Error::new(err)), "exec `node`: denied");
    }
}
