pub mod narrative;
pub mod prompt;
pub mod provider;


use crate::requirements::Requirements;
use dbadvisor_llm_sdk::client::LlmClient;
use dbadvisor_llm_sdk::error::LlmError;
use dbadvisor_llm_sdk::types::{CompletionRequest, Message};
use shared_types::ProjectRequest;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const SIMULATION_BANNER: &str = "DATABASE ANALYSIS (SIMULATION MODE)";
pub const SIMULATION_HINT: &str =
    "Configure GEMINI_API_KEY or OPENAI_API_KEY to enable real AI analysis.";
pub const FALLBACK_HINT: &str =
    "The AI provider is unavailable right now; this analysis was produced by the built-in rules.";

/// Which source produces the narrative for the lifetime of a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorMode {
    Real,
    Simulated,
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Upper bound for a single provider call
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    /// Probe the provider once while connecting
    pub verify_on_startup: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_tokens: 2048,
            temperature: Some(0.3),
            verify_on_startup: true,
        }
    }
}

/// Produces the narrative analysis for a project.
///
/// The mode is settled once in [`AdvisorGateway::connect`] and never changes.
/// In real mode each call goes to the provider once; any failure is logged
/// and answered with the rule-based narrative for that call only.
pub struct AdvisorGateway {
    client: Option<Arc<dyn LlmClient>>,
    config: AdvisorConfig,
}

impl AdvisorGateway {
    /// Gateway that never calls a provider
    pub fn simulated(config: AdvisorConfig) -> Self {
        Self {
            client: None,
            config,
        }
    }

    /// Settle the gateway's mode from an optional provider client.
    ///
    /// With `verify_on_startup`, a failing probe call leaves the gateway
    /// simulated; the client is then dropped and never called again.
    pub async fn connect(client: Option<Arc<dyn LlmClient>>, config: AdvisorConfig) -> Self {
        let Some(client) = client else {
            info!("No AI provider credential configured; advisor runs in simulation mode");
            return Self::simulated(config);
        };

        if config.verify_on_startup {
            if let Err(e) = verify(client.as_ref(), &config).await {
                warn!(
                    provider = client.provider_name(),
                    model = client.model_name(),
                    error = %e,
                    kind = e.kind(),
                    "AI provider verification failed; advisor runs in simulation mode"
                );
                return Self::simulated(config);
            }
        }

        info!(
            provider = client.provider_name(),
            model = client.model_name(),
            "AI advisor configured"
        );

        Self {
            client: Some(client),
            config,
        }
    }

    pub fn mode(&self) -> AdvisorMode {
        if self.client.is_some() {
            AdvisorMode::Real
        } else {
            AdvisorMode::Simulated
        }
    }

    /// Narrative analysis for `project`. Always returns a non-empty report.
    pub async fn get_recommendation(&self, project: &ProjectRequest) -> String {
        let Some(client) = &self.client else {
            return simulated_report(project, SIMULATION_HINT);
        };

        match self.generate(client.as_ref(), project).await {
            Ok(text) => {
                info!(
                    project_name = %project.project_name,
                    provider = client.provider_name(),
                    "AI analysis generated"
                );
                format!(
                    "DATABASE ANALYSIS (AI: {} / {})\n\n{}",
                    client.provider_name(),
                    client.model_name(),
                    text.trim()
                )
            }
            Err(e) => {
                warn!(
                    project_name = %project.project_name,
                    provider = client.provider_name(),
                    error = %e,
                    kind = e.kind(),
                    "AI analysis failed; falling back to simulated analysis"
                );
                simulated_report(project, FALLBACK_HINT)
            }
        }
    }

    async fn generate(
        &self,
        client: &dyn LlmClient,
        project: &ProjectRequest,
    ) -> Result<String, LlmError> {
        let user_prompt =
            prompt::user_prompt(project).map_err(|e| LlmError::internal(e.to_string()))?;

        let request = CompletionRequest {
            messages: vec![Message::user(user_prompt)],
            max_tokens: self.config.max_tokens,
            model: client.model_name().to_string(),
            system: Some(prompt::system_prompt()),
            temperature: self.config.temperature,
        };

        debug!(project_name = %project.project_name, "Sending analysis request to AI provider");

        let text = complete_with_timeout(client, request, self.config.timeout)
            .await?
            .text;

        if text.trim().is_empty() {
            return Err(LlmError::internal("Provider returned an empty answer"));
        }

        Ok(text)
    }
}

async fn verify(client: &dyn LlmClient, config: &AdvisorConfig) -> Result<(), LlmError> {
    let request = CompletionRequest {
        messages: vec![Message::user("Reply with OK.")],
        max_tokens: 16,
        model: client.model_name().to_string(),
        system: None,
        temperature: None,
    };

    complete_with_timeout(client, request, config.timeout)
        .await
        .map(|_| ())
}

async fn complete_with_timeout(
    client: &dyn LlmClient,
    request: CompletionRequest,
    timeout: Duration,
) -> Result<dbadvisor_llm_sdk::types::CompletionResponse, LlmError> {
    tokio::time::timeout(timeout, client.complete(request))
        .await
        .map_err(|_| LlmError::timeout(timeout.as_secs()))?
}

/// Rule-based report wrapped in the simulation banner
pub fn simulated_report(project: &ProjectRequest, hint: &str) -> String {
    let requirements = Requirements::from_record(&project.requirements);
    let report = narrative::analyze(&requirements).render();

    format!(
        "{}\nProject: {}\n\n{}\n\n{}",
        SIMULATION_BANNER, project.project_name, report, hint
    )
}
