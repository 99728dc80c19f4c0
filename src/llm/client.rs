//! The text-completion capability and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::config::ProviderSettings;
use crate::error::ProviderError;
use crate::llm::model::{ModelSpec, Provider};
use crate::llm::{anthropic, openai};

/// A single, non-streaming completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: ModelSpec,
    pub api_key: Option<String>,
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Text returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Model that answered, as reported by the provider when available.
    pub model: String,
}

/// Trait for issuing completion requests.
///
/// This abstraction allows mocking the model provider in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one request and return the provider's text. Never retried.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError>;
}

/// Completion client that talks to provider HTTP APIs.
pub struct HttpCompletionClient {
    http: Client,
    settings: ProviderSettings,
}

impl HttpCompletionClient {
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ProviderError::ClientBuild)?;
        Ok(Self { http, settings })
    }

    fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.settings.openai_base_url,
            Provider::Anthropic => &self.settings.anthropic_base_url,
            Provider::Ollama => &self.settings.ollama_base_url,
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let provider = request.model.provider;
        let base_url = self.base_url(provider);

        debug!(
            provider = %provider,
            model = %request.model,
            base_url = %base_url,
            prompt_len = request.prompt.len(),
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            "Sending completion request"
        );

        let exchange = Exchange {
            http: &self.http,
            provider,
            timeout: self.settings.timeout,
        };

        let completion = match provider {
            Provider::OpenAi | Provider::Ollama => {
                openai::complete(&exchange, base_url, request).await?
            }
            Provider::Anthropic => anthropic::complete(&exchange, base_url, request).await?,
        };

        debug!(
            response_len = completion.text.len(),
            model = %completion.model,
            "Received completion"
        );

        Ok(completion)
    }
}

/// Shared transport for the provider modules.
pub(crate) struct Exchange<'a> {
    pub http: &'a Client,
    pub provider: Provider,
    pub timeout: Option<Duration>,
}

impl Exchange<'_> {
    /// Send a prepared request, mapping transport failures and non-2xx
    /// statuses to [`ProviderError`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ProviderError> {
        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error response body: {e}");
                String::new()
            });
            return Err(ProviderError::Api {
                provider: self.provider,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        Ok(response)
    }

    /// Decode a JSON response body.
    pub async fn json<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ProviderError> {
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                self.invalid(e.to_string())
            }
        })
    }

    pub fn invalid(&self, detail: impl Into<String>) -> ProviderError {
        ProviderError::InvalidResponse {
            provider: self.provider,
            detail: detail.into(),
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> ProviderError {
        match self.timeout {
            Some(timeout) if source.is_timeout() => ProviderError::Timeout {
                provider: self.provider,
                secs: timeout.as_secs(),
            },
            _ => ProviderError::Network {
                provider: self.provider,
                source,
            },
        }
    }
}

/// Join a base URL and an API path, tolerating a trailing `/` or `/v1`.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let base = base.strip_suffix("/v1").unwrap_or(base);
    format!("{base}/v1/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        assert_eq!(
            endpoint("https://api.openai.com", "chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_and_version() {
        assert_eq!(
            endpoint("https://api.openai.com/v1/", "chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint("http://localhost:11434/", "/chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_client_builds_with_and_without_timeout() {
        assert!(HttpCompletionClient::new(ProviderSettings::default()).is_ok());

        let settings = ProviderSettings {
            timeout: Some(Duration::from_secs(5)),
            ..ProviderSettings::default()
        };
        assert!(HttpCompletionClient::new(settings).is_ok());
    }
}
