//! Test-only helpers for staging fake runtimes on a private `PATH`.
//!
//! A fake runtime is a symlink to `/bin/sh` under a runtime name, so
//! `node server.js` runs `server.js` as a shell script. Nothing that gets
//! executed is ever opened for writing, which keeps parallel tests clear of
//! `ETXTBSY`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary `bin/` (for `PATH`) and `app/` (for the working directory).
pub struct FakeRuntime {
    root: TempDir,
}

impl FakeRuntime {
    pub fn new() -> Result<Self> {
        let root = tempfile::tempdir().context("create tempdir")?;
        fs::create_dir(root.path().join("bin")).context("create bin dir")?;
        fs::create_dir(root.path().join("app")).context("create app dir")?;
        Ok(Self { root })
    }

    /// Directory to use as the whole of `PATH`.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Directory to run the delegator from; entry files live here.
    pub fn app_dir(&self) -> PathBuf {
        self.root.path().join("app")
    }

    /// Install `/bin/sh` under `name` in [`Self::bin_dir`].
    #[cfg(unix)]
    pub fn install_shell_runtime(&self, name: &str) -> Result<PathBuf> {
        let link = self.bin_dir().join(name);
        std::os::unix::fs::symlink("/bin/sh", &link)
            .with_context(|| format!("symlink {}", link.display()))?;
        Ok(link)
    }

    /// Install a regular file without execute bits under `name`.
    #[cfg(unix)]
    pub fn install_non_executable(&self, name: &str) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n")
            .with_context(|| format!("write {}", path.display()))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
            .with_context(|| format!("chmod {}", path.display()))?;
        Ok(path)
    }

    /// Write the entry file the runtime will be asked to run.
    pub fn write_entry(&self, name: &str, script: &str) -> Result<PathBuf> {
        let path = self.app_dir().join(name);
        fs::write(&path, script).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
