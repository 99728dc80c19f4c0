//! AI-generated commit messages: prompt, generation, formatting, confirmation.

pub mod clean;
pub mod confirm;
pub mod format;
pub mod message;
pub mod prompt;
pub mod style;

pub use clean::clean_response;
pub use confirm::{ConsoleTerminal, Terminal, confirm_commit};
pub use format::{FormattedMessage, format_commit_message, wrap_body};
pub use message::{build_request, generate_commit_message};
pub use prompt::{SYSTEM_PROMPT, build_commit_prompt};
pub use style::CommitStyle;
