//! The fixed runtime/entry pair the delegator hands control to.

use std::process::Command;

/// A runtime executable and the entry file it should run.
///
/// `program` is resolved through `PATH` unless it contains a `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateTarget<'a> {
    pub program: &'a str,
    pub entry: &'a str,
}

/// `node server.js`, the only target the binary ever uses.
pub const NODE_SERVER: DelegateTarget<'static> = DelegateTarget::new("node", "server.js");

impl<'a> DelegateTarget<'a> {
    pub const fn new(program: &'a str, entry: &'a str) -> Self {
        Self { program, entry }
    }

    /// Argument vector passed to the replacement call: `[program, entry]`.
    pub fn argv(&self) -> [&'a str; 2] {
        [self.program, self.entry]
    }

    /// Build the command for this target.
    ///
    /// Environment, working directory and stdio are left untouched so the
    /// runtime inherits them from this process.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.arg(self.entry);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_server_argv_is_runtime_then_entry() {
        assert_eq!(NODE_SERVER.argv(), ["node", "server.js"]);
    }

    #[test]
    fn command_matches_argv() {
        let cmd = NODE_SERVER.command();
        assert_eq!(cmd.get_program(), "node");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["server.js"]);
    }

    #[test]
    fn command_inherits_environment_and_cwd() {
        let cmd = NODE_SERVER.command();
        assert_eq!(cmd.get_envs().count(), 0);
        assert!(cmd.get_current_dir().is_none());
    }
}
