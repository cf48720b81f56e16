//! Database architecture advisor.
//!
//! [`rules`] holds the deterministic recommendation engine and [`advisor`]
//! the narrative analysis, sourced from an AI provider or simulated.

pub mod advisor;
pub mod error;
pub mod requirements;
pub mod rules;
pub mod validator;

pub use advisor::{AdvisorConfig, AdvisorGateway, AdvisorMode};
pub use error::AnalysisError;
pub use requirements::Requirements;

use shared_types::{AnalyzeDatabaseResponse, ProjectRequest, AGENT_NAME};
use tracing::info;

/// Full analysis of a validated project: rule-based results plus narrative.
pub async fn analyze_project(
    project: &ProjectRequest,
    gateway: &AdvisorGateway,
) -> AnalyzeDatabaseResponse {
    let requirements = Requirements::from_record(&project.requirements);

    let ai_analysis = gateway.get_recommendation(project).await;
    let analysis = rules::evaluate(&requirements);

    info!(
        project_name = %project.project_name,
        recommendations = analysis.recommendations.len(),
        primary_database = %analysis.architecture_suggestions.primary_database,
        "Database analysis completed"
    );

    AnalyzeDatabaseResponse {
        success: true,
        recommendations: analysis.recommendations,
        architecture_suggestions: analysis.architecture_suggestions,
        data_flow: analysis.data_flow,
        considerations: analysis.considerations,
        ai_analysis,
        agent_type: AGENT_NAME.to_string(),
    }
}
