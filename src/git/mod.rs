//! Git operations via the system `git` binary.

pub mod diff;
pub mod executor;

pub use diff::{TRUNCATION_MARKER, collect_staged_diff, truncate_diff};
pub use executor::{GitExecutor, SystemGit};
