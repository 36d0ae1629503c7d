//! `commit-msg` hook management.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{GitResult, Repository};

/// Name of the hook run by git on every commit message.
pub const COMMIT_MSG_HOOK: &str = "commit-msg";

/// Returns the hook script running `exe check --file <message file>`.
#[must_use]
pub fn hook_script(exe: &Path) -> String {
    format!(
        "#!/bin/sh\nexec {} check --file \"$1\"\n",
        shell_quote(&exe.to_string_lossy())
    )
}

/// Quotes `value` as one POSIX shell word.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

impl Repository {
    /// Returns the path of the `commit-msg` hook.
    #[must_use]
    pub fn commit_msg_hook_path(&self) -> PathBuf {
        self.git_dir().join("hooks").join(COMMIT_MSG_HOOK)
    }

    /// Installs the `commit-msg` hook, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the hook cannot be written.
    pub fn install_commit_msg_hook(&self, exe: &Path) -> GitResult<PathBuf> {
        let path = self.commit_msg_hook_path();
        if let Some(hooks_dir) = path.parent() {
            fs::create_dir_all(hooks_dir)?;
        }
        if path.exists() {
            debug!(path = %path.display(), "replacing existing hook");
            fs::remove_file(&path)?;
        }

        fs::write(&path, hook_script(exe))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        info!(path = %path.display(), "installed commit-msg hook");
        Ok(path)
    }

    /// Removes the `commit-msg` hook.
    ///
    /// Returns the removed path, or `None` when no hook was installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the hook exists but cannot be removed.
    pub fn uninstall_commit_msg_hook(&self) -> GitResult<Option<PathBuf>> {
        let path = self.commit_msg_hook_path();
        if !path.exists() {
            debug!(path = %path.display(), "no commit-msg hook to remove");
            return Ok(None);
        }

        fs::remove_file(&path)?;
        info!(path = %path.display(), "removed commit-msg hook");
        Ok(Some(path))
    }
}
