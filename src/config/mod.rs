//! Option resolution: explicit flag > environment variable > built-in default.

pub mod args;
pub mod env;

use std::time::Duration;

use crate::commit::CommitStyle;
use crate::error::ConfigError;

pub use args::CommitGenArgs;
pub use env::EnvSnapshot;

pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TRUNCATION_LIMIT: usize = 4000;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Endpoints and transport limits for the model providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub ollama_base_url: String,
    /// `None` leaves the model call unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ProviderSettings {
    fn from_env(env: &EnvSnapshot) -> Self {
        let defaults = Self::default();
        Self {
            openai_base_url: env
                .non_empty(env::OPENAI_BASE_URL_VAR)
                .map_or(defaults.openai_base_url, str::to_string),
            anthropic_base_url: env
                .non_empty(env::ANTHROPIC_BASE_URL_VAR)
                .map_or(defaults.anthropic_base_url, str::to_string),
            ollama_base_url: env
                .non_empty(env::OLLAMA_HOST_VAR)
                .map_or(defaults.ollama_base_url, normalize_ollama_host),
            timeout: env
                .parse::<u64>(env::TIMEOUT_VAR)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// `OLLAMA_HOST` is often set without a scheme (`127.0.0.1:11434`).
fn normalize_ollama_host(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

/// Fully resolved options for one `commit-gen` run. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitGenConfig {
    pub auto_confirm: bool,
    /// Explicit or environment model id; `None` means the provider default.
    pub model: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub truncation_limit: usize,
    pub no_truncation: bool,
    pub style: CommitStyle,
    pub hint: Option<String>,
    pub provider: ProviderSettings,
}

impl Default for CommitGenConfig {
    fn default() -> Self {
        Self {
            auto_confirm: false,
            model: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            truncation_limit: DEFAULT_TRUNCATION_LIMIT,
            no_truncation: false,
            style: CommitStyle::Default,
            hint: None,
            provider: ProviderSettings::default(),
        }
    }
}

impl CommitGenConfig {
    /// Resolve every option from the parsed flags and an environment snapshot.
    ///
    /// Fails only on conflicting style flags, before any other work is done.
    pub fn resolve(args: &CommitGenArgs, env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let style = CommitStyle::resolve(args.semantic, args.conventional, env.get(env::STYLE_VAR))?;

        let model = args
            .model
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| env.non_empty(env::MODEL_VAR).map(str::to_string));

        let max_tokens = args
            .max_tokens
            .or_else(|| env.parse(env::MAX_TOKENS_VAR))
            .unwrap_or(DEFAULT_MAX_TOKENS);

        // Non-finite values would reach the provider as JSON `null`.
        let temperature = args
            .temperature
            .filter(|t| t.is_finite())
            .or_else(|| env.parse::<f32>(env::TEMPERATURE_VAR).filter(|t| t.is_finite()))
            .unwrap_or(DEFAULT_TEMPERATURE);

        let truncation_limit = args
            .truncation_limit
            .or_else(|| env.parse(env::TRUNCATION_LIMIT_VAR))
            .unwrap_or(DEFAULT_TRUNCATION_LIMIT);

        let no_truncation = args.no_truncation || env.flag(env::NO_TRUNCATION_VAR).unwrap_or(false);

        let hint = args
            .hint
            .clone()
            .or_else(|| env.get(env::HINT_VAR).map(str::to_string))
            .filter(|h| !h.is_empty());

        Ok(Self {
            auto_confirm: args.yes,
            model,
            max_tokens,
            temperature,
            truncation_limit,
            no_truncation,
            style,
            hint,
            provider: ProviderSettings::from_env(env),
        })
    }

    /// Character limit to apply to the staged diff, if truncation is on.
    pub fn truncation(&self) -> Option<usize> {
        (!self.no_truncation).then_some(self.truncation_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults_without_flags_or_environment() {
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &EnvSnapshot::default())
            .unwrap();
        assert_eq!(config, CommitGenConfig::default());
        assert_eq!(config.truncation(), Some(4000));
    }

    #[test]
    fn test_environment_fills_unset_flags() {
        let env = snapshot(&[
            (env::MODEL_VAR, "claude-3-5-haiku-latest"),
            (env::MAX_TOKENS_VAR, "400"),
            (env::TEMPERATURE_VAR, "0.8"),
            (env::TRUNCATION_LIMIT_VAR, "2000"),
            (env::NO_TRUNCATION_VAR, "true"),
            (env::HINT_VAR, "mention the ticket"),
            (env::STYLE_VAR, "conventional"),
        ]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();

        assert_eq!(config.model.as_deref(), Some("claude-3-5-haiku-latest"));
        assert_eq!(config.max_tokens, 400);
        assert!((config.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.truncation_limit, 2000);
        assert!(config.no_truncation);
        assert_eq!(config.truncation(), None);
        assert_eq!(config.hint.as_deref(), Some("mention the ticket"));
        assert_eq!(config.style, CommitStyle::Conventional);
    }

    #[test]
    fn test_flags_beat_environment() {
        let env = snapshot(&[
            (env::MODEL_VAR, "env-model"),
            (env::MAX_TOKENS_VAR, "400"),
            (env::TEMPERATURE_VAR, "0.8"),
            (env::TRUNCATION_LIMIT_VAR, "2000"),
            (env::HINT_VAR, "env hint"),
            (env::STYLE_VAR, "conventional"),
        ]);
        let args = CommitGenArgs {
            yes: true,
            model: Some("flag-model".to_string()),
            max_tokens: Some(50),
            temperature: Some(0.5),
            truncation_limit: Some(1000),
            semantic: true,
            hint: Some("flag hint".to_string()),
            ..Default::default()
        };
        let config = CommitGenConfig::resolve(&args, &env).unwrap();

        assert!(config.auto_confirm);
        assert_eq!(config.model.as_deref(), Some("flag-model"));
        assert_eq!(config.max_tokens, 50);
        assert!((config.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.truncation_limit, 1000);
        assert_eq!(config.hint.as_deref(), Some("flag hint"));
        assert_eq!(config.style, CommitStyle::Semantic);
    }

    #[test]
    fn test_invalid_environment_values_use_defaults() {
        let env = snapshot(&[
            (env::MAX_TOKENS_VAR, "many"),
            (env::TEMPERATURE_VAR, "warm"),
            (env::TRUNCATION_LIMIT_VAR, "-5"),
            (env::NO_TRUNCATION_VAR, "sometimes"),
        ]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();

        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert!((config.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
        assert_eq!(config.truncation_limit, DEFAULT_TRUNCATION_LIMIT);
        assert!(!config.no_truncation);
    }

    #[test]
    fn test_non_finite_temperature_never_resolves() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let args = CommitGenArgs {
                temperature: Some(bad),
                ..Default::default()
            };
            let config = CommitGenConfig::resolve(&args, &EnvSnapshot::default()).unwrap();
            assert!((config.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
        }

        let env = snapshot(&[(env::TEMPERATURE_VAR, "0.9")]);
        let args = CommitGenArgs {
            temperature: Some(f32::NAN),
            ..Default::default()
        };
        let config = CommitGenConfig::resolve(&args, &env).unwrap();
        assert!((config.temperature - 0.9).abs() < f32::EPSILON);

        let env = snapshot(&[(env::TEMPERATURE_VAR, "nan")]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();
        assert!(config.temperature.is_finite());
    }

    #[test]
    fn test_empty_hint_is_no_hint() {
        let env = snapshot(&[(env::HINT_VAR, "")]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();
        assert!(config.hint.is_none());
    }

    #[test]
    fn test_conflicting_style_flags_fail() {
        let args = CommitGenArgs {
            semantic: true,
            conventional: true,
            ..Default::default()
        };
        let result = CommitGenConfig::resolve(&args, &EnvSnapshot::default());
        assert!(matches!(result, Err(ConfigError::ConflictingStyles)));
    }

    #[test]
    fn test_provider_settings_from_environment() {
        let env = snapshot(&[
            (env::OPENAI_BASE_URL_VAR, "http://127.0.0.1:9000"),
            (env::ANTHROPIC_BASE_URL_VAR, "http://127.0.0.1:9001"),
            (env::OLLAMA_HOST_VAR, "10.0.0.2:11434"),
            (env::TIMEOUT_VAR, "45"),
        ]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();

        assert_eq!(config.provider.openai_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.provider.anthropic_base_url, "http://127.0.0.1:9001");
        assert_eq!(config.provider.ollama_base_url, "http://10.0.0.2:11434");
        assert_eq!(config.provider.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_timeout_unset_or_invalid_is_unbounded() {
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &EnvSnapshot::default())
            .unwrap();
        assert_eq!(config.provider.timeout, None);

        let env = snapshot(&[(env::TIMEOUT_VAR, "soon")]);
        let config = CommitGenConfig::resolve(&CommitGenArgs::default(), &env).unwrap();
        assert_eq!(config.provider.timeout, None);
    }
}
