//! Commit message styles and the guidance text each one feeds the prompt.

use std::fmt;

use tracing::warn;

use crate::error::ConfigError;

/// Shape of the commit message the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitStyle {
    #[default]
    Default,
    Semantic,
    Conventional,
}

impl CommitStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStyle::Default => "default",
            CommitStyle::Semantic => "semantic",
            CommitStyle::Conventional => "conventional",
        }
    }

    /// Parse a style name as found in `LLM_COMMIT_STYLE`.
    ///
    /// Only `semantic` and `conventional` are recognised; anything else is
    /// `None` and the caller falls back to [`CommitStyle::Default`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "semantic" => Some(CommitStyle::Semantic),
            "conventional" => Some(CommitStyle::Conventional),
            _ => None,
        }
    }

    /// Pick the effective style: explicit flag > environment value > default.
    pub fn resolve(
        semantic: bool,
        conventional: bool,
        env_value: Option<&str>,
    ) -> Result<Self, ConfigError> {
        match (semantic, conventional) {
            (true, true) => Err(ConfigError::ConflictingStyles),
            (true, false) => Ok(CommitStyle::Semantic),
            (false, true) => Ok(CommitStyle::Conventional),
            (false, false) => Ok(env_value
                .filter(|v| !v.trim().is_empty())
                .map_or(CommitStyle::Default, |v| {
                    Self::from_name(v).unwrap_or_else(|| {
                        warn!("Unknown commit style '{}', using default", v);
                        CommitStyle::Default
                    })
                })),
        }
    }

    /// Guidance block inserted into the `<commit-style>` prompt section.
    pub fn description(&self) -> &'static str {
        match self {
            CommitStyle::Default => DEFAULT_DESCRIPTION,
            CommitStyle::Semantic => SEMANTIC_DESCRIPTION,
            CommitStyle::Conventional => CONVENTIONAL_DESCRIPTION,
        }
    }
}

impl fmt::Display for CommitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEFAULT_DESCRIPTION: &str = "\
<description>The commit message should include a one-line summary at the top \
then an optional description of why the change was made, followed by \
points for the key changes.
</description>
<message-format style=\"default\">[short description of why this change was made]

* [key change 1 and how it was made]
* [key change 2 and how it was made]
* [...]

</message-format>
";

const SEMANTIC_DESCRIPTION: &str = "\
<description>The commit message should include a one-line summary at the top \
(with change type and optional scope), then an optional description of \
why the change was made, followed by points for the key changes.
</description>
<message-format style=\"semantic\">
[type][optional scope]: [one-line summary]

[short description of why this change was made]

* [key change 1 and how it was made]
* [key change 2 and how it was made]
* [...]

</message-format>
<examples>
</examples>
";

const CONVENTIONAL_DESCRIPTION: &str = "\
<description>The commit message should include a one-line summary at the top \
(with change type, optional scope, and optional mark), then an optional \
description of why the change was made, followed by points for the key changes.
</description>
<message-format style=\"conventional\">[type][optional scope][optional mark]: [one-line summary]

[short description of why this change was made]

* [key change 1 and how it was made]
* [key change 2 and how it was made]
* [...]

[optional BREAKING CHANGE if applicable]
</message-format>
<examples>
</examples>
";
