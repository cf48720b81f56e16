use crate::requirements::Requirements;
use shared_types::{ArchitectureSuggestion, DatabaseType, Recommendation};

/// Primary store used when no non-cache recommendation was produced.
pub const DEFAULT_PRIMARY_DATABASE: DatabaseType = DatabaseType::Relational;

pub fn compose(
    requirements: &Requirements,
    recommendations: &[Recommendation],
) -> ArchitectureSuggestion {
    let primary = recommendations
        .iter()
        .map(|r| r.database_type)
        .find(|t| *t != DatabaseType::KeyValue)
        .unwrap_or(DEFAULT_PRIMARY_DATABASE);

    let has_cache = recommendations
        .iter()
        .any(|r| r.database_type == DatabaseType::KeyValue);

    ArchitectureSuggestion {
        primary_database: primary.to_string(),
        caching_strategy: if has_cache { "Redis" } else { "None" }.to_string(),
        replication: if requirements.high_availability {
            "Enable"
        } else {
            "Optional"
        }
        .to_string(),
        backup_strategy: "Automatic daily".to_string(),
        migration_approach: "Schema versioning".to_string(),
    }
}
