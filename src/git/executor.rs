//! Git operations for the commit pipeline: repository probe, staged diff, commit.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, hooks, and identity.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GitError;

/// Trait for the git operations the pipeline needs.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitExecutor: Send + Sync {
    /// Whether the working directory is inside a git work tree.
    fn is_inside_work_tree(&self) -> Result<bool, GitError>;

    /// Raw text of the staged changes (may be empty).
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a signed-off commit of the staged changes.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// Executor that runs the real `git` binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Find `git` on the PATH.
    ///
    /// Uses the `which` crate for cross-platform executable detection.
    pub fn locate() -> Result<Self, GitError> {
        let program = which::which("git").map_err(|_| GitError::NotInstalled)?;
        debug!("Using git at {}", program.display());
        Ok(Self {
            program,
            work_dir: None,
        })
    }

    /// Run every command in `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    fn output(&self, args: &[&str], operation: &'static str) -> Result<Output, GitError> {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(ref dir) = self.work_dir {
            command.current_dir(dir);
        }

        command
            .output()
            .map_err(|source| GitError::SpawnFailed { operation, source })
    }

    /// Run a git command and return its stdout, or a descriptive error.
    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<String, GitError> {
        let output = self.output(args, operation)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                operation,
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitExecutor for SystemGit {
    fn is_inside_work_tree(&self) -> Result<bool, GitError> {
        let output = self.output(&["rev-parse", "--is-inside-work-tree"], "repository check")?;

        // Non-zero means no repository; "false" means inside `.git` or a bare repo.
        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    fn staged_diff(&self) -> Result<String, GitError> {
        let diff = self.run_git(&["diff", "--cached", "--histogram"], "diff")?;
        Ok(diff.trim().to_string())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-s", "-m", message], "commit")?;
        Ok(())
    }
}
