//! Deterministic rule set: classifier, architecture, data flow and caveats.

pub mod architecture;
pub mod classifier;
pub mod considerations;
pub mod data_flow;
pub mod patterns;

use crate::requirements::Requirements;
use shared_types::{ArchitectureSuggestion, Recommendation};

/// Rule-based part of an analysis response
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBasedAnalysis {
    pub recommendations: Vec<Recommendation>,
    pub architecture_suggestions: ArchitectureSuggestion,
    pub data_flow: Vec<String>,
    pub considerations: Vec<String>,
}

pub fn evaluate(requirements: &Requirements) -> RuleBasedAnalysis {
    let recommendations = classifier::classify(requirements);
    let architecture_suggestions = architecture::compose(requirements, &recommendations);

    RuleBasedAnalysis {
        architecture_suggestions,
        data_flow: data_flow::plan(requirements),
        considerations: considerations::generate(requirements),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{Consistency, DataType, DataVolume};

    #[test]
    fn test_evaluate_structured_high_read() {
        let reqs = Requirements {
            data_type: DataType::Structured,
            consistency: Consistency::Strong,
            data_volume: DataVolume::Large,
            high_read_throughput: true,
            ..Default::default()
        };

        let analysis = evaluate(&reqs);

        assert_eq!(analysis.recommendations.len(), 2);
        assert_eq!(analysis.architecture_suggestions.primary_database, "Relational");
        assert_eq!(analysis.architecture_suggestions.caching_strategy, "Redis");
        assert_eq!(analysis.data_flow.len(), 4);
        assert_eq!(analysis.considerations.len(), 3);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let reqs = Requirements {
            data_type: DataType::Document,
            real_time_analytics: true,
            ..Default::default()
        };
        assert_eq!(evaluate(&reqs), evaluate(&reqs));
    }
}
