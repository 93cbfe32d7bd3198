//! Chat completion transport used by the remote generator.

use std::time::Duration;

use async_trait::async_trait;
use casegen_config::OpenAiConfig;
use serde::Deserialize;
use serde_json::json;

use crate::error::ProviderError;
use crate::http::check_completion_response;

/// Sends one prompt and returns the model's full text reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, a non-success status
    /// or a reply without message content.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// One request per call: no retry, no backoff, no streaming. The configured
/// timeout bounds the whole request.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: &OpenAiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("casegen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: completions_url(&config.base_url),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim().trim_end_matches('/'))
}

fn first_message(response: ChatCompletionResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ProviderError::EmptyCompletion)
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_completion_response(resp).await?;

        let data: ChatCompletionResponse = resp.json().await?;
        first_message(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "[]"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11}
    }"#;

    #[test]
    fn completions_url_handles_trailing_slash() {
        assert_eq!(
            completions_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:8080/v1"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn parses_first_message_content() {
        let data: ChatCompletionResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(first_message(data).unwrap(), "[]");
    }

    #[test]
    fn missing_choices_is_empty_completion() {
        let data: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(first_message(data), Err(ProviderError::EmptyCompletion)));
    }

    #[test]
    fn null_content_is_empty_completion() {
        let data: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(matches!(first_message(data), Err(ProviderError::EmptyCompletion)));
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = OpenAiClient::new(&OpenAiConfig::default()).unwrap();
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
