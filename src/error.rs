//! Error types for llm-commit modules using thiserror.

use thiserror::Error;

use crate::llm::Provider;

/// Errors from resolving the command-line options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot use both --semantic and --conventional simultaneously.")]
    ConflictingStyles,
}

/// Errors from running the system `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        operation: &'static str,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the text-completion providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No key found for model '{model}'. Set the {env_var} environment variable")]
    MissingKey {
        model: String,
        env_var: &'static str,
    },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {provider} failed")]
    Network {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request timed out after {secs} seconds")]
    Timeout { provider: Provider, secs: u64 },

    #[error("{provider} API returned HTTP {status}: {body}")]
    Api {
        provider: Provider,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unexpected response: {detail}")]
    InvalidResponse { provider: Provider, detail: String },
}

/// Errors that end a `commit-gen` run.
///
/// Every variant maps to exit status 1; a declined commit is not an error.
#[derive(Error, Debug)]
pub enum CommitGenError {
    #[error(transparent)]
    Usage(#[from] ConfigError),

    #[error("Not a Git repository.")]
    NotARepository,

    #[error("No staged changes. Use 'git add'.")]
    NothingStaged,

    #[error("Failed to read the staged diff")]
    Diff(#[source] GitError),

    #[error("Commit failed")]
    Commit(#[source] GitError),

    #[error("Model call failed")]
    Provider(#[from] ProviderError),

    #[error("The model returned an empty commit message")]
    EmptyMessage,

    #[error("Failed to read confirmation")]
    Confirmation(#[source] std::io::Error),
}
