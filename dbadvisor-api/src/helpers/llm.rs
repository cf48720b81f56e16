use crate::config::ApiConfig;
use dbadvisor_agent::advisor::provider::build_client;
use dbadvisor_llm_sdk::client::LlmClient;
use std::env;
use std::sync::Arc;

/// Provider client for the configured provider, or `None` without a credential.
///
/// `GEMINI_API_KEY` / `OPENAI_API_KEY` take precedence over the config file.
pub fn create_llm_client(config: &ApiConfig) -> anyhow::Result<Option<Arc<dyn LlmClient>>> {
    let provider = config.llm.provider;
    let api_key = select_api_key(env::var(provider.api_key_env()).ok(), config.file_api_key());

    let client = build_client(provider, api_key.as_deref(), config.llm.model.as_deref())?;
    Ok(client)
}

fn select_api_key(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_file.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_key_wins() {
        assert_eq!(
            select_api_key(Some("env-key".to_string()), Some("file-key")),
            Some("env-key".to_string())
        );
    }

    #[test]
    fn test_blank_environment_key_falls_back_to_file() {
        assert_eq!(
            select_api_key(Some("  ".to_string()), Some("file-key")),
            Some("file-key".to_string())
        );
        assert_eq!(select_api_key(None, None), None);
    }
}
