//! OpenAI-compatible chat completions (OpenAI, Ollama).

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::llm::client::{Completion, CompletionRequest, Exchange, endpoint};

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
    model: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

fn chat_request(request: &CompletionRequest) -> ChatRequest<'_> {
    let mut messages = Vec::with_capacity(2);
    if !request.system.is_empty() {
        messages.push(Message {
            role: "system",
            content: &request.system,
        });
    }
    messages.push(Message {
        role: "user",
        content: &request.prompt,
    });

    // Reasoning models reject `max_tokens` and non-default temperatures.
    let reasoning = request.model.is_reasoning_model();
    ChatRequest {
        model: &request.model.name,
        messages,
        max_tokens: (!reasoning).then_some(request.max_tokens),
        max_completion_tokens: reasoning.then_some(request.max_tokens),
        temperature: (!reasoning).then_some(request.temperature),
        stream: false,
    }
}

pub(crate) async fn complete(
    exchange: &Exchange<'_>,
    base_url: &str,
    request: &CompletionRequest,
) -> Result<Completion, ProviderError> {
    let mut builder = exchange
        .http
        .post(endpoint(base_url, "chat/completions"))
        .json(&chat_request(request));

    if let Some(ref api_key) = request.api_key {
        builder = builder.bearer_auth(api_key);
    }

    let response = exchange.send(builder).await?;
    let body: ChatResponse = exchange.json(response).await?;

    let text = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| exchange.invalid("No choices in response"))?
        .message
        .content
        .ok_or_else(|| exchange.invalid("Response contained no text"))?;

    Ok(Completion {
        text,
        model: body.model.unwrap_or_else(|| request.model.name.clone()),
    })
}
