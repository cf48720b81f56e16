//! # dbadvisor LLM SDK
//!
//! Text-completion clients for the database advisor. Every provider client
//! implements [`client::LlmClient`], so callers hold an `Arc<dyn LlmClient>`
//! and never see provider wire formats.
//!
//! ```rust,no_run
//! use dbadvisor_llm_sdk::client::LlmClient;
//! use dbadvisor_llm_sdk::gemini::GeminiClient;
//! use dbadvisor_llm_sdk::types::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("your-gemini-api-key")?;
//!     let response = client
//!         .complete(CompletionRequest {
//!             messages: vec![Message::user("Which database fits an order-tracking system?")],
//!             max_tokens: 1024,
//!             model: String::new(),
//!             system: Some("You are a senior database architect.".to_string()),
//!             temperature: Some(0.3),
//!         })
//!         .await?;
//!
//!     println!("{}", response.text);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod openai;
pub mod types;
