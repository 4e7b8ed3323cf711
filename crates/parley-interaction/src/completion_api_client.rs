//! CompletionApiClient - Direct REST implementation of the completion seam.
//!
//! Calls an OpenAI-compatible chat-completions endpoint with the full
//! conversation history and returns the first choice's assistant text.
//! No retry and no explicit timeout: a failure surfaces once as
//! `ParleyError::Completion` and the conversation service decides what
//! the user sees.

use crate::config::ApiConfig;
use parley_core::conversation::{CompletionClient, ConversationMessage, MessageRole};
use parley_core::error::{ParleyError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sampling temperature sent with every request.
const TEMPERATURE: f64 = 0.7;

/// Client implementation that talks to an OpenAI-compatible HTTP API.
#[derive(Clone)]
pub struct CompletionApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionApiClient {
    /// Creates a new client from configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, messages: &[ConversationMessage]) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.iter().map(ChatMessage::from).collect(),
            temperature: TEMPERATURE,
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = body.model.as_str(), messages = body.messages.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| ParleyError::completion(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ParleyError::completion(format!("failed to parse response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl CompletionClient for CompletionApiClient {
    async fn complete(&self, messages: &[ConversationMessage]) -> Result<String> {
        let request = self.build_request(messages);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl From<&ConversationMessage> for ChatMessage {
    fn from(message: &ConversationMessage) -> Self {
        Self {
            role: match message.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            },
            content: message.content.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ParleyError::completion("API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> ParleyError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    ParleyError::completion(format!("HTTP {status}: {message}"))
}
