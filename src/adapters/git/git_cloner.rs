use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::core::errors::{GdkmError, Result};
use crate::core::traits::repo_cloner::RepositoryCloner;

/// How often a running clone checks the cancellation flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Clones through the system `git` binary over SSH.
///
/// Git is told to run `ssh -i <key> -o IdentitiesOnly=yes`, so the SSH
/// client offers the given key and nothing else, not even keys held by a
/// running agent.
pub struct GitCloner {
    git_path: PathBuf,
    ssh_program: String,
    cancel: Arc<AtomicBool>,
}

impl GitCloner {
    /// Create a cloner running `git_path`, with git invoking `ssh_program`.
    pub fn with_programs(git_path: PathBuf, ssh_program: String, cancel: Arc<AtomicBool>) -> Self {
        Self {
            git_path,
            ssh_program,
            cancel,
        }
    }

    /// The `core.sshCommand` value pinning SSH to `key_path`.
    fn ssh_command(&self, key_path: &Path) -> String {
        format!(
            "{} -i {} -o IdentitiesOnly=yes",
            self.ssh_program,
            shell_quote(&key_path.to_string_lossy())
        )
    }

    fn clone_failed(reason: impl Into<String>) -> GdkmError {
        GdkmError::CloneFailed {
            reason: reason.into(),
        }
    }

    /// Run `cmd` to completion, killing it if cancellation is requested.
    ///
    /// Returns captured stderr on failure.
    fn run_cancellable(&self, mut cmd: Command) -> Result<()> {
        cmd.stdout(Stdio::null()).stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| {
            Self::clone_failed(format!(
                "Failed to run {}: {e}",
                self.git_path.display()
            ))
        })?;

        // Drained on a separate thread so a chatty child never blocks on a full pipe.
        let stderr = child.stderr.take();
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut buf);
            }
            buf
        });

        let status = loop {
            if let Some(status) = child
                .try_wait()
                .map_err(|e| Self::clone_failed(format!("git process failed: {e}")))?
            {
                break status;
            }

            if self.cancel.load(Ordering::SeqCst) {
                debug!(pid = child.id(), "clone interrupted, killing git");
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return Err(Self::clone_failed("interrupted"));
            }

            thread::sleep(POLL_INTERVAL);
        };

        let stderr = reader.join().unwrap_or_default();
        if !status.success() {
            let detail = stderr.trim();
            return Err(Self::clone_failed(if detail.is_empty() {
                format!("git exited with {status}")
            } else {
                format!("git exited with {status}: {detail}")
            }));
        }

        Ok(())
    }
}

impl RepositoryCloner for GitCloner {
    fn clone_repository(
        &self,
        repository_url: &str,
        key_path: &Path,
        destination: &Path,
    ) -> Result<()> {
        let ssh_command = self.ssh_command(key_path);
        debug!(ssh_command = %ssh_command, "running git clone");

        let mut cmd = Command::new(&self.git_path);
        cmd.arg("clone")
            .arg("-c")
            .arg(format!("core.sshCommand={ssh_command}"))
            .arg("--")
            .arg(repository_url)
            .arg(destination);

        self.run_cancellable(cmd)
    }

    fn pin_identity(&self, repo_dir: &Path, key_path: &Path) -> Result<()> {
        let output = Command::new(&self.git_path)
            .arg("-C")
            .arg(repo_dir)
            .args(["config", "core.sshCommand"])
            .arg(self.ssh_command(key_path))
            .output()
            .map_err(|e| Self::clone_failed(format!("Failed to run git config: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::clone_failed(format!(
                "git config exited with error: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Quote `value` for the POSIX shell git uses to run `core.sshCommand`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
