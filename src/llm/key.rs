//! API key lookup for model providers.

use crate::config::EnvSnapshot;
use crate::error::ProviderError;
use crate::llm::model::ModelSpec;

/// Look up the API key the model's provider needs.
///
/// Returns `Ok(None)` for providers that need no key (Ollama). A missing or
/// empty key variable is an error naming the variable to set.
pub fn lookup_key(model: &ModelSpec, env: &EnvSnapshot) -> Result<Option<String>, ProviderError> {
    let Some(env_var) = model.provider.key_env_var() else {
        return Ok(None);
    };

    env.non_empty(env_var)
        .map(|key| Some(key.trim().to_string()))
        .ok_or_else(|| ProviderError::MissingKey {
            model: model.name.clone(),
            env_var,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_key_found() {
        let env: EnvSnapshot = [("OPENAI_API_KEY", "sk-test")].into_iter().collect();
        let key = lookup_key(&ModelSpec::parse("gpt-4o-mini"), &env).unwrap();
        assert_eq!(key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_missing_key_names_variable() {
        let env = EnvSnapshot::default();
        let err = lookup_key(&ModelSpec::parse("claude-3-5-haiku-latest"), &env).unwrap_err();
        match err {
            ProviderError::MissingKey { env_var, model } => {
                assert_eq!(env_var, "ANTHROPIC_API_KEY");
                assert_eq!(model, "claude-3-5-haiku-latest");
            }
            other => panic!("Expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_is_missing() {
        let env: EnvSnapshot = [("OPENAI_API_KEY", "")].into_iter().collect();
        assert!(lookup_key(&ModelSpec::parse("gpt-4o"), &env).is_err());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let key = lookup_key(&ModelSpec::parse("ollama/llama3"), &EnvSnapshot::default()).unwrap();
        assert!(key.is_none());
    }
}
