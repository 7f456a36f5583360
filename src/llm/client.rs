use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValoraError};
use crate::llm::credentials::ApiCredentials;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 700;

/// Operational knobs for a single chat call. Not part of the report
/// contract, but pluggable per advisor.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessage,
}

/// Thin client over an OpenAI-style `/chat/completions` endpoint.
///
/// Exactly one outbound request per [`chat`](OpenAiClient::chat) call: no
/// retry, no streaming, no caching. The credential is resolved eagerly at
/// construction, so a missing token surfaces before any network activity.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(credentials: &ApiCredentials) -> Result<Self> {
        let api_key = credentials.resolve()?;
        Ok(Self {
            http: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
        })
    }

    /// Point at a different endpoint (proxies, compatible providers, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one chat request and returns the first choice's text content.
    pub async fn chat(&self, options: &ChatOptions, messages: Vec<ChatMessage>) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let payload = ChatCompletionRequest {
            model: options.model.clone(),
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        debug!(
            "POST {} (model {}, temperature {}, max_tokens {})",
            url, payload.model, payload.temperature, payload.max_tokens
        );

        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ValoraError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ValoraError::MalformedResponse {
                reason: format!("chat completion envelope did not parse: {}", e),
                raw: body.clone(),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ValoraError::MalformedResponse {
                reason: "chat completion contained no choices".to_string(),
                raw: body,
            })?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = ChatCompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![
                ChatMessage::system("be terse"),
                ChatMessage::user("{\"address\":\"12 Test Ln\"}"),
            ],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 700);
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_response_envelope_parses() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "{}" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 10 }
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "{}");
    }

    #[test]
    fn test_missing_credential_fails_before_any_network_setup() {
        let creds = ApiCredentials::from_session_key("   ");
        // No environment fallback either once the key is blank and the var is
        // absent; clear it to make the test deterministic.
        std::env::remove_var(ApiCredentials::ENV_VAR);
        let err = OpenAiClient::new(&creds).unwrap_err();
        assert!(matches!(err, ValoraError::MissingCredential));
    }
}
