use dbadvisor_llm_sdk::client::LlmClient;
use dbadvisor_llm_sdk::error::LlmError;
use dbadvisor_llm_sdk::gemini::GeminiClient;
use dbadvisor_llm_sdk::openai::OpenAIClient;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// External generative-language provider backing the real advisor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    OpenAI,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
        }
    }

    /// Environment variable holding this provider's credential
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            other => Err(format!("Unknown provider '{}': expected gemini or openai", other)),
        }
    }
}

/// Build the provider client for `kind`.
///
/// A missing or blank credential is not an error: it yields `Ok(None)` and the
/// advisor runs in simulated mode.
pub fn build_client(
    kind: ProviderKind,
    api_key: Option<&str>,
    model: Option<&str>,
) -> Result<Option<Arc<dyn LlmClient>>, LlmError> {
    let api_key = match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => key,
        _ => return Ok(None),
    };

    let client: Arc<dyn LlmClient> = match kind {
        ProviderKind::Gemini => {
            let client = GeminiClient::new(api_key)?;
            Arc::new(match model {
                Some(model) => client.with_model(model),
                None => client,
            })
        }
        ProviderKind::OpenAI => {
            let client = OpenAIClient::new(api_key)?;
            Arc::new(match model {
                Some(model) => client.with_model(model),
                None => client,
            })
        }
    };

    Ok(Some(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("Gemini".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert_eq!("openai".parse::<ProviderKind>(), Ok(ProviderKind::OpenAI));
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_missing_credential_yields_no_client() {
        assert!(build_client(ProviderKind::Gemini, None, None)
            .unwrap()
            .is_none());
        assert!(build_client(ProviderKind::OpenAI, Some("   "), None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_model_override() {
        let client = build_client(ProviderKind::OpenAI, Some("key"), Some("gpt-4o"))
            .unwrap()
            .unwrap();
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-4o");

        let client = build_client(ProviderKind::Gemini, Some("key"), None)
            .unwrap()
            .unwrap();
        assert_eq!(client.provider_name(), "google");
        assert_eq!(client.model_name(), "gemini-2.5-flash");
    }
}
