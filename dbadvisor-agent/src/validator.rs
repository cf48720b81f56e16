use crate::error::AnalysisError;
use serde_json::Value;
use shared_types::{ProjectRequest, RequirementsRecord};

/// Top-level fields every project payload must carry
pub const REQUIRED_FIELDS: [&str; 3] = ["project_name", "project_description", "requirements"];

/// True iff `payload` is an object containing every required field.
///
/// Only presence is checked; values are not inspected.
pub fn validate(payload: &Value) -> bool {
    match payload.as_object() {
        Some(map) => REQUIRED_FIELDS.iter().all(|field| map.contains_key(*field)),
        None => false,
    }
}

/// Validate and convert a raw payload into a typed request.
///
/// Once the required fields are present nothing else is rejected: name and
/// description of any JSON type are read as text, and a `requirements`
/// value that is not an object becomes an empty record.
pub fn parse_project(payload: Value) -> Result<ProjectRequest, AnalysisError> {
    if !validate(&payload) {
        return Err(AnalysisError::invalid_project(format!(
            "required fields: {}",
            REQUIRED_FIELDS.join(", ")
        )));
    }

    let Value::Object(mut map) = payload else {
        return Err(AnalysisError::invalid_project("payload is not an object"));
    };

    Ok(ProjectRequest {
        project_name: text_field(map.remove("project_name")),
        project_description: text_field(map.remove("project_description")),
        requirements: RequirementsRecord::from(map.remove("requirements").unwrap_or_default()),
    })
}

fn text_field(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_payload_is_valid() {
        let payload = json!({
            "project_name": "Shop",
            "project_description": "Online store",
            "requirements": {}
        });
        assert!(validate(&payload));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(!validate(&json!({"project_name": "X"})));
        assert!(!validate(&json!({
            "project_name": "X",
            "project_description": "Y"
        })));
    }

    #[test]
    fn test_presence_only_accepts_any_value() {
        let payload = json!({
            "project_name": null,
            "project_description": 42,
            "requirements": "whatever"
        });
        assert!(validate(&payload));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(!validate(&json!(["project_name"])));
        assert!(!validate(&Value::Null));
    }

    #[test]
    fn test_parse_project_reads_non_string_text_fields() {
        let project = parse_project(json!({
            "project_name": 123,
            "project_description": null,
            "requirements": {"data_type": "structured"}
        }))
        .unwrap();

        assert_eq!(project.project_name, "123");
        assert_eq!(project.project_description, "");
        assert_eq!(
            project.requirements.get("data_type"),
            Some(&json!("structured"))
        );
    }

    #[test]
    fn test_parse_project_coerces_non_object_requirements() {
        let project = parse_project(json!({
            "project_name": "X",
            "project_description": {"lines": ["a", "b"]},
            "requirements": ["not", "a", "map"]
        }))
        .unwrap();

        assert!(project.requirements.is_empty());
        assert_eq!(project.project_description, r#"{"lines":["a","b"]}"#);
    }

    #[test]
    fn test_parse_project_rejects_missing_fields() {
        let err = parse_project(json!({"project_name": "X"})).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidProject { .. }));
    }

    #[test]
    fn test_parse_project_keeps_requirements() {
        let project = parse_project(json!({
            "project_name": "X",
            "project_description": "Y",
            "requirements": {"data_type": "document"}
        }))
        .unwrap();
        assert_eq!(project.project_name, "X");
        assert_eq!(
            project.requirements.get("data_type"),
            Some(&json!("document"))
        );
    }
}
