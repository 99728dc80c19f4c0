//! Anthropic Messages API.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::llm::client::{Completion, CompletionRequest, Exchange, endpoint};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    model: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

fn messages_request(request: &CompletionRequest) -> MessagesRequest<'_> {
    MessagesRequest {
        model: &request.model.name,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        system: (!request.system.is_empty()).then_some(request.system.as_str()),
        messages: vec![Message {
            role: "user",
            content: &request.prompt,
        }],
    }
}

/// Concatenate every text block; other block types are skipped.
fn response_text(content: Vec<ContentBlock>) -> Option<String> {
    let texts: Vec<String> = content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();
    (!texts.is_empty()).then(|| texts.concat())
}

pub(crate) async fn complete(
    exchange: &Exchange<'_>,
    base_url: &str,
    request: &CompletionRequest,
) -> Result<Completion, ProviderError> {
    let mut builder = exchange
        .http
        .post(endpoint(base_url, "messages"))
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&messages_request(request));

    if let Some(ref api_key) = request.api_key {
        builder = builder.header("x-api-key", api_key);
    }

    let response = exchange.send(builder).await?;
    let body: MessagesResponse = exchange.json(response).await?;

    let text = response_text(body.content)
        .ok_or_else(|| exchange.invalid("No text content in response"))?;

    Ok(Completion {
        text,
        model: body.model.unwrap_or_else(|| request.model.name.clone()),
    })
}
