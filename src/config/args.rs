//! Command-line flags for the `commit-gen` subcommand.

use clap::Args;

/// Generate a commit message for the staged changes and commit it.
///
/// Value options carry no defaults here: environment fallbacks and built-in
/// defaults are applied by [`CommitGenConfig::resolve`](super::CommitGenConfig::resolve).
#[derive(Args, Debug, Clone, Default)]
pub struct CommitGenArgs {
    /// Commit without prompting
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// LLM model to use (default: LLM_COMMIT_MODEL if set, otherwise gpt-4o-mini)
    #[arg(long)]
    pub model: Option<String>,

    /// Max tokens (default: LLM_COMMIT_MAX_TOKENS if set, otherwise 100)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Temperature (default: LLM_COMMIT_TEMPERATURE if set, otherwise 0.3)
    #[arg(long, value_parser = finite_temperature)]
    pub temperature: Option<f32>,

    /// Character limit for diff truncation (default: LLM_COMMIT_TRUNCATION_LIMIT if set, otherwise 4000)
    #[arg(long)]
    pub truncation_limit: Option<usize>,

    /// Disable diff truncation. Can cause issues with large diffs (default: LLM_COMMIT_NO_TRUNCATION)
    #[arg(long)]
    pub no_truncation: bool,

    /// Enforce Semantic Commit Messages format
    #[arg(long)]
    pub semantic: bool,

    /// Enforce Conventional Commits format
    #[arg(long)]
    pub conventional: bool,

    /// Hint message to guide the commit message generation (default: LLM_COMMIT_HINT if set)
    #[arg(long)]
    pub hint: Option<String>,
}

/// Reject `nan` and `inf`; they cannot be sent as JSON numbers.
fn finite_temperature(value: &str) -> Result<f32, String> {
    let temperature: f32 = value
        .parse()
        .map_err(|e| format!("invalid temperature '{value}': {e}"))?;
    if temperature.is_finite() {
        Ok(temperature)
    } else {
        Err(format!("temperature must be a finite number, got '{value}'"))
    }
}
