//! Typed, read-only view over a [`RequirementsRecord`].
//!
//! Every recognized key has a default. Values that are not recognized
//! (an unknown string, or a JSON type the key does not expect) fall into an
//! `Other` variant that matches none of the rule gates.
//!
//! The throughput, availability and real-time keys are booleans and gate only
//! on JSON `true`: `1`, `"yes"` or `"true"` leave them off. The compliance and
//! analytics keys are free-form, so any non-empty, non-zero value turns them on.

use serde_json::Value;
use shared_types::RequirementsRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Structured,
    Transactional,
    Document,
    SemiStructured,
    Mixed,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalability {
    Medium,
    High,
    VeryHigh,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Eventual,
    Strong,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataVolume {
    Small,
    Large,
    Massive,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    pub data_type: DataType,
    pub scalability: Scalability,
    pub consistency: Consistency,
    pub data_volume: DataVolume,
    pub high_read_throughput: bool,
    pub high_write_throughput: bool,
    pub high_availability: bool,
    pub real_time: bool,
    pub compliance_requirements: bool,
    pub real_time_analytics: bool,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            data_type: DataType::Mixed,
            scalability: Scalability::Medium,
            consistency: Consistency::Eventual,
            data_volume: DataVolume::Small,
            high_read_throughput: false,
            high_write_throughput: false,
            high_availability: false,
            real_time: false,
            compliance_requirements: false,
            real_time_analytics: false,
        }
    }
}

impl Requirements {
    pub fn from_record(record: &RequirementsRecord) -> Self {
        let defaults = Self::default();

        Self {
            data_type: enum_value(record, "data_type", defaults.data_type, |s| match s {
                "structured" => DataType::Structured,
                "transactional" => DataType::Transactional,
                "document" => DataType::Document,
                "semi-structured" => DataType::SemiStructured,
                "mixed" => DataType::Mixed,
                _ => DataType::Other,
            }),
            scalability: enum_value(record, "scalability", defaults.scalability, |s| match s {
                "medium" => Scalability::Medium,
                "high" => Scalability::High,
                "very_high" => Scalability::VeryHigh,
                _ => Scalability::Other,
            }),
            consistency: enum_value(record, "consistency", defaults.consistency, |s| match s {
                "eventual" => Consistency::Eventual,
                "strong" => Consistency::Strong,
                _ => Consistency::Other,
            }),
            data_volume: enum_value(record, "data_volume", defaults.data_volume, |s| match s {
                "small" => DataVolume::Small,
                "large" => DataVolume::Large,
                "massive" => DataVolume::Massive,
                _ => DataVolume::Other,
            }),
            high_read_throughput: flag(record, "high_read_throughput"),
            high_write_throughput: flag(record, "high_write_throughput"),
            high_availability: flag(record, "high_availability"),
            real_time: flag(record, "real_time"),
            compliance_requirements: truthy(record, "compliance_requirements"),
            real_time_analytics: truthy(record, "real_time_analytics"),
        }
    }
}

impl From<&RequirementsRecord> for Requirements {
    fn from(record: &RequirementsRecord) -> Self {
        Self::from_record(record)
    }
}

fn enum_value<T: Copy>(
    record: &RequirementsRecord,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> T,
) -> T {
    match record.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::String(s)) => parse(s),
        // Non-string values never match a named variant
        Some(_) => parse(""),
    }
}

fn flag(record: &RequirementsRecord, key: &str) -> bool {
    matches!(record.get(key), Some(Value::Bool(true)))
}

fn truthy(record: &RequirementsRecord, key: &str) -> bool {
    match record.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RequirementsRecord {
        RequirementsRecord::from(value)
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        assert_eq!(Requirements::from_record(&record(json!({}))), Requirements::default());
    }

    #[test]
    fn test_recognized_values() {
        let reqs = Requirements::from_record(&record(json!({
            "data_type": "semi-structured",
            "scalability": "very_high",
            "consistency": "strong",
            "data_volume": "massive",
            "high_read_throughput": true,
            "real_time": true
        })));

        assert_eq!(reqs.data_type, DataType::SemiStructured);
        assert_eq!(reqs.scalability, Scalability::VeryHigh);
        assert_eq!(reqs.consistency, Consistency::Strong);
        assert_eq!(reqs.data_volume, DataVolume::Massive);
        assert!(reqs.high_read_throughput);
        assert!(reqs.real_time);
        assert!(!reqs.high_write_throughput);
    }

    #[test]
    fn test_unknown_and_mistyped_enum_values() {
        let reqs = Requirements::from_record(&record(json!({
            "data_type": "graph",
            "scalability": 3,
            "consistency": null
        })));

        assert_eq!(reqs.data_type, DataType::Other);
        assert_eq!(reqs.scalability, Scalability::Other);
        assert_eq!(reqs.consistency, Consistency::Eventual);
    }

    #[test]
    fn test_flags_require_literal_true() {
        let reqs = Requirements::from_record(&record(json!({
            "high_read_throughput": "yes",
            "high_availability": 1
        })));

        assert!(!reqs.high_read_throughput);
        assert!(!reqs.high_availability);
    }

    #[test]
    fn test_truthy_caveat_keys() {
        let reqs = Requirements::from_record(&record(json!({
            "compliance_requirements": "GDPR",
            "real_time_analytics": 0
        })));

        assert!(reqs.compliance_requirements);
        assert!(!reqs.real_time_analytics);

        let reqs = Requirements::from_record(&record(json!({
            "compliance_requirements": [],
            "real_time_analytics": true
        })));

        assert!(!reqs.compliance_requirements);
        assert!(reqs.real_time_analytics);
    }
}
