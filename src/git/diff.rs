//! Staged diff collection and size limiting.

use tracing::{debug, warn};

use crate::error::CommitGenError;
use crate::git::executor::GitExecutor;

/// Appended to a diff that was cut at the truncation limit.
pub const TRUNCATION_MARKER: &str = "\n[Truncated]";

/// Cut `diff` to its first `limit` characters and append [`TRUNCATION_MARKER`].
///
/// Counts characters, not bytes or lines. Returns `None` when the diff
/// already fits.
pub fn truncate_diff(diff: &str, limit: usize) -> Option<String> {
    let (cut, _) = diff.char_indices().nth(limit)?;
    Some(format!("{}{}", &diff[..cut], TRUNCATION_MARKER))
}

/// Fetch the staged diff, failing when nothing is staged.
///
/// `truncation` is the character limit, or `None` to keep the diff whole.
pub fn collect_staged_diff(
    git: &dyn GitExecutor,
    truncation: Option<usize>,
) -> Result<String, CommitGenError> {
    let diff = git.staged_diff().map_err(CommitGenError::Diff)?;

    if diff.is_empty() {
        return Err(CommitGenError::NothingStaged);
    }

    debug!("Staged diff: {} characters", diff.chars().count());

    let Some(limit) = truncation else {
        return Ok(diff);
    };

    match truncate_diff(&diff, limit) {
        Some(truncated) => {
            warn!("Diff is large; truncating to {} characters.", limit);
            Ok(truncated)
        }
        None => Ok(diff),
    }
}
