//! Wire types of the database advisor HTTP API.

pub mod analysis;
pub mod typescript_gen;

pub use analysis::{
    AnalyzeDatabaseResponse, ArchitectureSuggestion, DatabaseType, PatternDescriptor, PatternType,
    ProjectRequest, Recommendation, RequirementsRecord,
};
pub use typescript_gen::generate_typescript_definitions;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Agent identifier reported by `/health` and `/analyze-database`
pub const AGENT_NAME: &str = "database_agent";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
    pub framework: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            agent: AGENT_NAME.to_string(),
            framework: "actix-web".to_string(),
        }
    }
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
