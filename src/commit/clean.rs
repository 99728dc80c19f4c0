//! Post-processing of raw model output.

const FENCE: &str = "```";

/// Trim the response and drop one enclosing triple-backtick fence.
///
/// The fence is removed only when the trimmed text both starts and ends
/// with it; fences inside the text, and any language tag after the opening
/// fence, are left alone.
pub fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();

    if !(trimmed.starts_with(FENCE) && trimmed.ends_with(FENCE)) {
        return trimmed.to_string();
    }

    // Opening and closing fences overlap, nothing sits between them.
    if trimmed.len() < FENCE.len() * 2 {
        return String::new();
    }

    trimmed[FENCE.len()..trimmed.len() - FENCE.len()]
        .trim()
        .to_string()
}
