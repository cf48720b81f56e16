use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Free-form requirements mapping submitted by the client.
///
/// Keys keep submission order (serde_json `preserve_order`), so the provider
/// prompt echoes them the way they were sent. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementsRecord(Map<String, Value>);

impl RequirementsRecord {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for RequirementsRecord {
    /// Anything other than a JSON object becomes an empty record
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectRequest {
    pub project_name: String,
    pub project_description: String,
    #[ts(type = "Record<string, unknown>")]
    pub requirements: RequirementsRecord,
}

/// Database family of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DatabaseType {
    Relational,
    Document,
    #[serde(rename = "Key-Value")]
    KeyValue,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relational => "Relational",
            Self::Document => "Document",
            Self::KeyValue => "Key-Value",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Relational,
    Document,
    KeyValue,
}

/// Reference description of a storage pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternDescriptor {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub description: String,
    pub examples: Vec<String>,
    pub use_cases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub database_type: DatabaseType,
    pub recommendation: String,
    pub justification: String,
    pub confidence_score: f32,
    pub technologies: Vec<String>,
    pub patterns: Vec<PatternDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchitectureSuggestion {
    pub primary_database: String,
    pub caching_strategy: String,
    pub replication: String,
    pub backup_strategy: String,
    pub migration_approach: String,
}

/// Successful `/analyze-database` body
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeDatabaseResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub architecture_suggestions: ArchitectureSuggestion,
    pub data_flow: Vec<String>,
    pub considerations: Vec<String>,
    pub ai_analysis: String,
    pub agent_type: String,
}
