use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::types::{ChatMessage, ChatRequest, ChatResponse, ChatRole, ErrorEnvelope};
use crate::client::LlmClient;
use crate::error::LlmError;
use crate::models::openai::{DEFAULT_MODEL, PROVIDER};
use crate::types::{CompletionRequest, CompletionResponse, Role, Usage};

/// OpenAI chat-completions client
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            http_client,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Model used when a request does not name one
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn create_chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        tracing::debug!(model = %request.model, messages = request.messages.len(), "Sending OpenAI chat completion request");

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)));
        }

        // read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        Err(LlmError::from_status(status.as_u16(), message, retry_after))
    }

    fn to_chat_request(&self, request: &CompletionRequest) -> ChatRequest {
        let system = request.system.iter().map(|text| ChatMessage {
            role: ChatRole::System,
            content: Some(text.clone()),
        });

        let turns = request.messages.iter().map(|message| ChatMessage {
            role: match message.role {
                Role::System => ChatRole::System,
                Role::User => ChatRole::User,
                Role::Assistant => ChatRole::Assistant,
            },
            content: Some(message.text.clone()),
        });

        ChatRequest {
            model: request.model_or(&self.model).to_string(),
            messages: system.chain(turns).collect(),
            max_completion_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let response = self
            .create_chat_completion(&self.to_chat_request(&request))
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::internal("No completion choices returned"))?;

        Ok(CompletionResponse {
            text: choice.message.content.unwrap_or_default(),
            usage: Usage {
                input_tokens: response.usage.prompt_tokens,
                output_tokens: response.usage.completion_tokens,
            },
            stop_reason: choice.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;
    use mockito::Matcher;
    use serde_json::json;

    fn completion_request() -> CompletionRequest {
        CompletionRequest {
            messages: vec![Message::user("Which database?")],
            max_tokens: 128,
            model: String::new(),
            system: Some("You are a database architect.".to_string()),
            temperature: Some(0.25),
        }
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "max_completion_tokens": 128,
                "messages": [
                    {"role": "system", "content": "You are a database architect."},
                    {"role": "user", "content": "Which database?"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "chatcmpl-1",
                    "model": "gpt-4o-mini",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "PostgreSQL with Redis."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
                }"#,
            )
            .create_async()
            .await;

        let client = OpenAIClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());

        let response = client.complete(completion_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.text, "PostgreSQL with Redis.");
        assert_eq!(response.usage.output_tokens, 5);
    }

    #[tokio::test]
    async fn test_null_content_is_empty_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "content_filter"}]}"#)
            .create_async()
            .await;

        let client = OpenAIClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());

        let response = client.complete(completion_request()).await.unwrap();
        assert!(response.text.is_empty());
        assert_eq!(response.stop_reason.as_deref(), Some("content_filter"));
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_retry_after() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_header("retry-after", "12")
            .with_body(r#"{"error": {"message": "quota exceeded", "type": "insufficient_quota"}}"#)
            .create_async()
            .await;

        let client = OpenAIClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());

        let err = client.complete(completion_request()).await.unwrap_err();
        match err {
            LlmError::RateLimit {
                message,
                retry_after,
            } => {
                assert_eq!(message, "quota exceeded");
                assert_eq!(retry_after, Some(12));
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_without_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body("invalid key")
            .create_async()
            .await;

        let client = OpenAIClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());

        let err = client.complete(completion_request()).await.unwrap_err();
        assert!(err.is_authentication());
    }
}
