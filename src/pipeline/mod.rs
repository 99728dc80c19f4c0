//! Commit-gen pipeline: staged diff to confirmed, signed-off commit.
//!
//! Stages run strictly in order and the first failure stops the run. No
//! commit is created unless every earlier stage succeeded and the user (or
//! `--yes`) approved the message.

use tracing::{debug, info};

use crate::commit::{Terminal, confirm_commit, format_commit_message, generate_commit_message};
use crate::config::{CommitGenConfig, EnvSnapshot};
use crate::error::CommitGenError;
use crate::git::{GitExecutor, collect_staged_diff};
use crate::llm::CompletionClient;

/// How a pipeline run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A commit was created with this message.
    Committed { message: String },
    /// The user declined the message; nothing was committed.
    Declined,
}

/// Run the commit-gen pipeline against the given collaborators.
pub async fn run_commit_gen(
    config: &CommitGenConfig,
    env: &EnvSnapshot,
    git: &dyn GitExecutor,
    llm: &dyn CompletionClient,
    terminal: &mut dyn Terminal,
) -> Result<Outcome, CommitGenError> {
    // ── Stage 1: Repository check ──
    // A failure to even run the probe is treated the same as "not a repo".
    let inside = git.is_inside_work_tree().unwrap_or_else(|e| {
        debug!("Repository check failed: {e}");
        false
    });
    if !inside {
        return Err(CommitGenError::NotARepository);
    }

    // ── Stage 2: Staged diff ──
    let diff = collect_staged_diff(git, config.truncation())?;

    // ── Stage 3: Generate ──
    let raw = generate_commit_message(&diff, config, env, llm).await?;
    if raw.is_empty() {
        return Err(CommitGenError::EmptyMessage);
    }

    // ── Stage 4: Format ──
    let formatted = format_commit_message(&raw);
    debug!("Formatted message ({} chars)", formatted.text.len());

    // ── Stage 5: Confirm ──
    let approved = confirm_commit(&formatted.text, config.auto_confirm, terminal)
        .map_err(CommitGenError::Confirmation)?;
    if !approved {
        info!("Commit aborted.");
        return Ok(Outcome::Declined);
    }

    // ── Stage 6: Commit ──
    git.commit(&formatted.text).map_err(CommitGenError::Commit)?;
    info!("Committed:\n{}", formatted.text);

    Ok(Outcome::Committed {
        message: formatted.text,
    })
}
