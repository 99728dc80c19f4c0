//! Prompt construction for AI-generated commit messages.

use crate::commit::style::CommitStyle;

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a senior software developer with more than 20 years of \
experience, and an expert at writing Git commit messages from code diffs. \
Focus on the value the change adds and the risk it addresses (what could have \
gone wrong without it?), then list the key changes as plain bullet points \
without restating the diff line by line. Follow the requested commit style \
and use no other markup or tags (no markdown, no HTML). Your readers are \
experienced developers, so keep the tone direct and technical.";

/// Command shown above the diff so the model knows how it was produced.
const DIFF_COMMAND: &str = "$ git diff --staged --histogram";

const CONSTRAINTS: [&str; 5] = [
    "* Carefully follow the <commit-style/> Commit Messages format.",
    "* Ensure the commit message is concise and follows professional standards.",
    "* Ensure the subject is in present tense and concise.",
    "* Include the relevant details from the diff in items of the commit message.",
    "* Avoid using markdown, HTML, or other syntax markers.",
];

/// Build the LLM prompt for generating a commit message.
///
/// Sections, in order: `<commit-style>`, optional `<hint>`, `<diff>`,
/// `<request>`, `<constraints>`. The diff and hint are inserted verbatim;
/// tag-like text inside them is not escaped.
pub fn build_commit_prompt(style: CommitStyle, diff: &str, hint: Option<&str>) -> String {
    let mut lines: Vec<&str> = vec!["<commit-style>", style.description(), "</commit-style>"];

    if let Some(hint) = hint {
        lines.extend(["<hint>", hint, "</hint>"]);
    }

    let request = if hint.is_some() {
        "Generate a Git commit title and commit message based on the above <diff/>, \
         and using information from the provided <hint/>."
    } else {
        "Generate a Git commit title and commit message based on the above <diff/>."
    };

    lines.extend(["<diff>", DIFF_COMMAND, diff, "</diff>"]);
    lines.extend(["<request>", request, "</request>"]);
    lines.push("<constraints>");
    lines.extend(CONSTRAINTS);
    lines.push("</constraints>");

    lines.join("\n")
}
