use actix_web::{test, web, App};
use dbadvisor_agent::{AdvisorConfig, AdvisorGateway};
use dbadvisor_api::configure_routes;
use dbadvisor_llm_sdk::client::LlmClient;
use dbadvisor_llm_sdk::error::LlmError;
use dbadvisor_llm_sdk::types::{CompletionRequest, CompletionResponse, Usage};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockLlmClient {
    pub answer: Option<String>,
    pub call_count: Arc<Mutex<usize>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlmClient {
    /// Client that answers every call with `answer`
    pub fn answering(answer: &str) -> Self {
        MockLlmClient {
            answer: Some(answer.to_string()),
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Client whose every call fails with a server error
    pub fn failing() -> Self {
        MockLlmClient {
            answer: None,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut call_count = self.call_count.lock().unwrap();
        *call_count += 1;
        drop(call_count);

        if let Some(message) = request.messages.last() {
            self.prompts.lock().unwrap().push(message.text.clone());
        }

        match &self.answer {
            Some(answer) => Ok(CompletionResponse {
                text: answer.clone(),
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
                stop_reason: Some("stop".to_string()),
            }),
            None => Err(LlmError::api_error(500, "backend unavailable".to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn test_advisor_config() -> AdvisorConfig {
    AdvisorConfig {
        timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

pub async fn setup_test_app(
    gateway: AdvisorGateway,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(gateway))
            .configure(configure_routes),
    )
    .await
}

pub async fn setup_simulated_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    setup_test_app(AdvisorGateway::simulated(test_advisor_config())).await
}

pub async fn connect_mock(client: Arc<MockLlmClient>, verify_on_startup: bool) -> AdvisorGateway {
    let config = AdvisorConfig {
        verify_on_startup,
        ..test_advisor_config()
    };
    AdvisorGateway::connect(Some(client as Arc<dyn LlmClient>), config).await
}

pub fn ecommerce_project() -> serde_json::Value {
    serde_json::json!({
        "project_name": "E-commerce Platform",
        "project_description": "Online store with catalog, cart and checkout",
        "requirements": {
            "data_type": "structured",
            "scalability": "high",
            "consistency": "strong",
            "high_read_throughput": true,
            "data_volume": "large",
            "compliance_requirements": true
        }
    })
}
