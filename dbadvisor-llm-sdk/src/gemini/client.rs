use super::types::*;
use crate::client::LlmClient;
use crate::error::LlmError;
use crate::models::gemini::{DEFAULT_MODEL, PROVIDER};
use crate::types::{CompletionRequest, CompletionResponse, Role, Usage};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
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
            base_url: "https://generativelanguage.googleapis.com".to_string(),
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

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        tracing::debug!(model, turns = request.contents.len(), "Sending Gemini generateContent request");

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| LlmError::authentication(format!("Invalid API key format: {}", e)))?,
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

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => LlmError::from_status(envelope.error.code, envelope.error.message, None),
                Err(_) => LlmError::from_status(status.as_u16(), body, None),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))
    }
}

/// Map a generic request onto Gemini's shape.
///
/// Gemini has no system turn: `system` and system-role messages are merged
/// into one `systemInstruction`.
fn to_gemini_request(request: &CompletionRequest) -> Result<GenerateContentRequest, LlmError> {
    let contents: Vec<GeminiContent> = request
        .messages
        .iter()
        .filter_map(|message| match message.role {
            Role::User => Some(GeminiContent::text_turn(Some(GeminiRole::User), &message.text)),
            Role::Assistant => Some(GeminiContent::text_turn(Some(GeminiRole::Model), &message.text)),
            Role::System => None,
        })
        .collect();

    if contents.is_empty() {
        return Err(LlmError::invalid_request("At least one user message is required"));
    }

    Ok(GenerateContentRequest {
        contents,
        system_instruction: request
            .system_instruction()
            .map(|text| GeminiContent::text_turn(None, text)),
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: Some(request.max_tokens),
        },
    })
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = to_gemini_request(&request)?;
        let response = self
            .generate_content(request.model_or(&self.model), &body)
            .await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::internal("No candidates returned"))?;

        Ok(CompletionResponse {
            text: candidate
                .content
                .as_ref()
                .map(GeminiContent::joined_text)
                .unwrap_or_default(),
            usage: Usage {
                input_tokens: response.usage_metadata.prompt_token_count,
                output_tokens: response.usage_metadata.candidates_token_count,
            },
            stop_reason: candidate.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
