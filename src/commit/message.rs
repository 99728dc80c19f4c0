//! Commit message generation via the configured model.

use tracing::debug;

use crate::commit::clean::clean_response;
use crate::commit::prompt::{SYSTEM_PROMPT, build_commit_prompt};
use crate::config::{CommitGenConfig, EnvSnapshot};
use crate::error::CommitGenError;
use crate::llm::{CompletionClient, CompletionRequest, ModelSpec, lookup_key};

/// Build the completion request for a diff without sending it.
///
/// Fails before any network traffic when the provider's API key is missing.
pub fn build_request(
    diff: &str,
    config: &CommitGenConfig,
    env: &EnvSnapshot,
) -> Result<CompletionRequest, CommitGenError> {
    let model = ModelSpec::resolve(config.model.as_deref());
    let api_key = lookup_key(&model, env)?;
    let prompt = build_commit_prompt(config.style, diff, config.hint.as_deref());

    debug!(
        "Commit prompt: {} chars, style={}, model={}",
        prompt.len(),
        config.style,
        model
    );

    Ok(CompletionRequest {
        model,
        api_key,
        system: SYSTEM_PROMPT.to_string(),
        prompt,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    })
}

/// Ask the model for a commit message and return it cleaned.
///
/// The result may be empty; callers decide whether that is acceptable.
pub async fn generate_commit_message(
    diff: &str,
    config: &CommitGenConfig,
    env: &EnvSnapshot,
    client: &dyn CompletionClient,
) -> Result<String, CommitGenError> {
    let request = build_request(diff, config, env)?;
    let completion = client.complete(&request).await?;

    debug!("Raw response from {}: {:?}", completion.model, completion.text);

    Ok(clean_response(&completion.text))
}
