use super::narrative::Section;
use crate::error::AnalysisError;
use shared_types::ProjectRequest;

pub fn system_prompt() -> String {
    r#"You are a senior database architect.
Given a project description and its requirements, recommend a database architecture.
Be concrete: name engines, explain trade-offs briefly, and keep each section short.
Do not invent requirements that were not given."#
        .to_string()
}

/// User message for a project, embedding the requirements as pretty JSON.
pub fn user_prompt(project: &ProjectRequest) -> Result<String, AnalysisError> {
    let requirements = serde_json::to_string_pretty(&project.requirements)
        .map_err(|e| AnalysisError::prompt(e.to_string()))?;

    let sections = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section.title()))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "PROJECT: {}\n\nDESCRIPTION:\n{}\n\nREQUIREMENTS:\n{}\n\n\
         Answer with exactly these sections, in this order:\n{}",
        project.project_name, project.project_description, requirements, sections
    ))
}
