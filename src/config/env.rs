//! Environment snapshot and typed lookups for configuration fallbacks.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

pub const MODEL_VAR: &str = "LLM_COMMIT_MODEL";
pub const MAX_TOKENS_VAR: &str = "LLM_COMMIT_MAX_TOKENS";
pub const TEMPERATURE_VAR: &str = "LLM_COMMIT_TEMPERATURE";
pub const TRUNCATION_LIMIT_VAR: &str = "LLM_COMMIT_TRUNCATION_LIMIT";
pub const NO_TRUNCATION_VAR: &str = "LLM_COMMIT_NO_TRUNCATION";
pub const HINT_VAR: &str = "LLM_COMMIT_HINT";
pub const STYLE_VAR: &str = "LLM_COMMIT_STYLE";
pub const TIMEOUT_VAR: &str = "LLM_COMMIT_TIMEOUT";

pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ANTHROPIC_BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";
pub const OLLAMA_HOST_VAR: &str = "OLLAMA_HOST";

/// Environment variables captured once per invocation.
///
/// Resolution and key lookup read from the snapshot rather than the live
/// process environment, so tests can build one from plain pairs.
#[derive(Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Raw value of a variable, including empty values.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of a variable, treating an empty string as unset.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Parse a variable into `T`.
    ///
    /// Returns `None` when the variable is unset, empty, or unparseable; the
    /// last case logs a warning so the caller can fall back to its default.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.non_empty(name)?;
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Invalid {} value '{}', using default", name, raw);
                None
            }
        }
    }

    /// Parse a boolean toggle (`1/true/yes/on` or `0/false/no/off`).
    pub fn flag(&self, name: &str) -> Option<bool> {
        let raw = self.non_empty(name)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
            "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
            _ => {
                warn!("Invalid {} value '{}', using default", name, raw);
                None
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Values may hold API keys, so only names are printed.
impl fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("EnvSnapshot").field("vars", &names).finish()
    }
}
