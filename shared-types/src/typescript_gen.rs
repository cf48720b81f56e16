use ts_rs::TS;

/// Render TypeScript definitions for the named API types, in the given order.
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

/// Every exported type, dependencies first
pub const ALL_TYPES: &[&str] = &[
    "DatabaseType",
    "PatternType",
    "PatternDescriptor",
    "Recommendation",
    "ArchitectureSuggestion",
    "ProjectRequest",
    "AnalyzeDatabaseResponse",
    "HealthResponse",
    "ErrorResponse",
];

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "DatabaseType" => DatabaseType::export_to_string()?,
        "PatternType" => PatternType::export_to_string()?,
        "PatternDescriptor" => PatternDescriptor::export_to_string()?,
        "Recommendation" => Recommendation::export_to_string()?,
        "ArchitectureSuggestion" => ArchitectureSuggestion::export_to_string()?,
        "ProjectRequest" => ProjectRequest::export_to_string()?,
        "AnalyzeDatabaseResponse" => AnalyzeDatabaseResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types: {}",
                name,
                ALL_TYPES.join(", ")
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
