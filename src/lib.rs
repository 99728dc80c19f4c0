//! llm-commit - Generate git commit messages from staged changes using an LLM.
//!
//! # Overview
//!
//! The `commit-gen` command reads the staged diff, asks a language model for
//! a commit message in the requested style, formats it to git conventions,
//! asks for confirmation and creates a signed-off commit.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types
pub use commit::{CommitStyle, ConsoleTerminal, Terminal};
pub use config::{CommitGenArgs, CommitGenConfig, EnvSnapshot};
pub use error::{CommitGenError, ConfigError, GitError, ProviderError};
pub use git::{GitExecutor, SystemGit};
pub use llm::{CompletionClient, HttpCompletionClient};
pub use pipeline::{Outcome, run_commit_gen};
