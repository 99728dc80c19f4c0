//! Model identifiers and the provider that serves each one.

use std::fmt;

/// Model used when neither `--model` nor `LLM_COMMIT_MODEL` is set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Ollama => "Ollama",
        }
    }

    /// Environment variable holding this provider's API key, if it needs one.
    pub fn key_env_var(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some("OPENAI_API_KEY"),
            Provider::Anthropic => Some("ANTHROPIC_API_KEY"),
            Provider::Ollama => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A model id split into its provider and the name sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub provider: Provider,
    pub name: String,
}

impl ModelSpec {
    /// Resolve the requested id, falling back to [`DEFAULT_MODEL`].
    pub fn resolve(requested: Option<&str>) -> Self {
        let id = requested
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_MODEL);
        Self::parse(id)
    }

    /// Map a model id to its provider.
    ///
    /// `ollama/`, `anthropic/` and `openai/` prefixes pick the provider
    /// explicitly and are stripped; bare `claude*` ids go to Anthropic and
    /// everything else to OpenAI.
    pub fn parse(id: &str) -> Self {
        let prefixed = [
            ("ollama/", Provider::Ollama),
            ("anthropic/", Provider::Anthropic),
            ("openai/", Provider::OpenAi),
        ];
        for (prefix, provider) in prefixed {
            if let Some(name) = id.strip_prefix(prefix) {
                return Self {
                    provider,
                    name: name.to_string(),
                };
            }
        }

        let provider = if id.starts_with("claude") {
            Provider::Anthropic
        } else {
            Provider::OpenAi
        };
        Self {
            provider,
            name: id.to_string(),
        }
    }

    /// Reasoning-series OpenAI models take `max_completion_tokens` and only
    /// their default temperature.
    pub fn is_reasoning_model(&self) -> bool {
        self.provider == Provider::OpenAi
            && ["o1", "o3", "o4", "gpt-5"]
                .iter()
                .any(|prefix| self.name.starts_with(prefix))
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
