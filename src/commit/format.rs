//! Commit message layout: subject length advisory and body reflow.

use std::sync::LazyLock;

use regex_lite::Regex;
use textwrap::Options;
use tracing::warn;

/// Advisory limit for the subject line, in characters.
pub const SUBJECT_MAX_CHARS: usize = 50;

/// Hard limit for every body line after reflow.
pub const BODY_WRAP_WIDTH: usize = 72;

/// `- item`, `* item`, `+ item`, `1. item`, `2) item`, optionally indented.
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([-*+]|\d{1,9}[.)])\s+(.*)$").expect("Invalid list item regex")
});

/// A commit message ready for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    pub text: String,
    /// The subject exceeded [`SUBJECT_MAX_CHARS`]; the message is kept as-is.
    pub long_subject: bool,
}

/// Split the message into subject and body, warn on a long subject and
/// wrap the body at [`BODY_WRAP_WIDTH`].
pub fn format_commit_message(message: &str) -> FormattedMessage {
    let (first, rest) = message.split_once('\n').unwrap_or((message, ""));
    let subject = first.trim();
    let body = rest.trim();

    let long_subject = subject.chars().count() > SUBJECT_MAX_CHARS;
    if long_subject {
        warn!("Subject line exceeds {} characters.", SUBJECT_MAX_CHARS);
    }

    let text = if body.is_empty() {
        subject.to_string()
    } else {
        format!("{}\n\n{}", subject, wrap_body(body, BODY_WRAP_WIDTH))
    };

    FormattedMessage { text, long_subject }
}

/// Reflow a body so no line is wider than `width`.
///
/// Paragraphs (separated by blank lines) stay separate. Inside a paragraph
/// each list item becomes its own block with a hanging indent, and plain
/// lines are joined and refilled.
pub fn wrap_body(body: &str, width: usize) -> String {
    paragraphs(body)
        .iter()
        .map(|lines| wrap_paragraph(lines, width))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn paragraphs(body: &str) -> Vec<Vec<&str>> {
    let mut result: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// A run of text to refill: plain text, or one list item with its marker.
struct Block {
    indent: String,
    marker: Option<String>,
    words: Vec<String>,
}

impl Block {
    fn plain() -> Self {
        Self {
            indent: String::new(),
            marker: None,
            words: Vec::new(),
        }
    }

    fn push_words(&mut self, text: &str) {
        self.words.extend(text.split_whitespace().map(str::to_string));
    }

    /// Prefix for the first line. The indent is dropped when it leaves no
    /// room for text; the marker never is.
    fn first_prefix(&self, width: usize) -> String {
        let Some(ref marker) = self.marker else {
            return String::new();
        };
        let indented = format!("{}{marker} ", self.indent);
        if indented.chars().count() < width {
            indented
        } else {
            format!("{marker} ")
        }
    }
}

fn wrap_paragraph(lines: &[&str], width: usize) -> String {
    let mut blocks: Vec<Block> = Vec::new();

    for line in lines {
        if let Some(caps) = LIST_ITEM_RE.captures(line) {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let marker = caps.get(2).map_or("", |m| m.as_str());
            let mut block = Block {
                indent: indent.to_string(),
                marker: Some(marker.to_string()),
                words: Vec::new(),
            };
            block.push_words(caps.get(3).map_or("", |m| m.as_str()));
            blocks.push(block);
        } else {
            // Continuation of the previous item or plain paragraph text.
            if blocks.is_empty() {
                blocks.push(Block::plain());
            }
            if let Some(block) = blocks.last_mut() {
                block.push_words(line);
            }
        }
    }

    blocks
        .iter()
        .map(|block| fill_block(block, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill_block(block: &Block, width: usize) -> String {
    let first = block.first_prefix(width);
    let text = block.words.join(" ");
    if text.is_empty() {
        return first.trim_end().to_string();
    }

    // Hanging indent lines up with the text after the marker.
    let hanging = " ".repeat(first.chars().count());
    let rest = if hanging.len() < width { hanging.as_str() } else { "" };

    let options = Options::new(width)
        .initial_indent(&first)
        .subsequent_indent(rest)
        .break_words(true);

    textwrap::fill(&text, options)
}
