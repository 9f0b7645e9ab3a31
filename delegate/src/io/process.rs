//! Replace the running process with another program.
//!
//! On unix this is a plain `exec`: same pid, same file descriptors, same
//! working directory. Other hosts have no in-place replacement, so the
//! program runs in the foreground with inherited stdio and this process
//! exits with its exact code.

use std::io;
use std::process::Command;

use tracing::{debug, instrument};

/// Replace the current process image with `cmd`.
///
/// Returns only if the replacement could not start.
#[cfg(unix)]
#[instrument(skip_all, fields(program = ?cmd.get_program()))]
pub fn replace_process(cmd: &mut Command) -> io::Error {
    use std::os::unix::process::CommandExt;

    debug!("replacing process image");
    cmd.exec()
}

/// Run `cmd` to completion with inherited stdio and exit with its status.
///
/// Returns only if the program could not be started or waited on.
#[cfg(not(unix))]
#[instrument(skip_all, fields(program = ?cmd.get_program()))]
pub fn replace_process(cmd: &mut Command) -> io::Error {
    use std::process::Stdio;

    debug!("exec unavailable, running in the foreground");
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    let status = match cmd.status() {
        Ok(status) => status,
        Err(err) => return err,
    };
    debug!(exit_code = ?status.code(), "foreground program finished");
    std::process::exit(status.code().unwrap_or(crate::exit_codes::FAILURE));
}
