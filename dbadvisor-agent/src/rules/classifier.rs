use super::patterns::pattern;
use crate::requirements::{DataType, Requirements};
use shared_types::{DatabaseType, PatternType, Recommendation};

pub const RELATIONAL_CONFIDENCE: f32 = 0.9;
pub const DOCUMENT_CONFIDENCE: f32 = 0.8;
pub const KEY_VALUE_CONFIDENCE: f32 = 0.7;

/// Map requirements to database-type recommendations.
///
/// Gates are evaluated in a fixed order (relational, document, key-value)
/// and each fires independently, so the output may hold zero to two entries.
pub fn classify(requirements: &Requirements) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if matches!(
        requirements.data_type,
        DataType::Structured | DataType::Transactional
    ) {
        recommendations.push(build(
            DatabaseType::Relational,
            "Use a relational database for ACID consistency",
            "Structured data with complex relationships requires ACID transactions",
            RELATIONAL_CONFIDENCE,
            &["PostgreSQL", "MySQL", "SQL Server"],
            PatternType::Relational,
        ));
    }

    if matches!(
        requirements.data_type,
        DataType::Document | DataType::SemiStructured
    ) {
        recommendations.push(build(
            DatabaseType::Document,
            "Use a document database for schema flexibility",
            "Semi-structured data benefits from flexible schemas",
            DOCUMENT_CONFIDENCE,
            &["MongoDB", "Couchbase", "Firestore"],
            PatternType::Document,
        ));
    }

    if requirements.high_read_throughput {
        recommendations.push(build(
            DatabaseType::KeyValue,
            "Add a cache backed by a key-value store",
            "High read throughput benefits from in-memory caching",
            KEY_VALUE_CONFIDENCE,
            &["Redis", "Memcached", "DynamoDB"],
            PatternType::KeyValue,
        ));
    }

    recommendations
}

fn build(
    database_type: DatabaseType,
    recommendation: &str,
    justification: &str,
    confidence_score: f32,
    technologies: &[&str],
    pattern_type: PatternType,
) -> Recommendation {
    Recommendation {
        database_type,
        recommendation: recommendation.to_string(),
        justification: justification.to_string(),
        confidence_score,
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        patterns: vec![pattern(pattern_type)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{Consistency, DataType};

    fn types(recommendations: &[Recommendation]) -> Vec<DatabaseType> {
        recommendations.iter().map(|r| r.database_type).collect()
    }

    #[test]
    fn test_structured_strong_yields_single_relational() {
        let reqs = Requirements {
            data_type: DataType::Structured,
            consistency: Consistency::Strong,
            ..Default::default()
        };

        let recommendations = classify(&reqs);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].database_type, DatabaseType::Relational);
        assert_eq!(recommendations[0].confidence_score, 0.9);
        assert_eq!(
            recommendations[0].technologies,
            vec!["PostgreSQL", "MySQL", "SQL Server"]
        );
        assert_eq!(
            recommendations[0].patterns[0].pattern_type,
            PatternType::Relational
        );
    }

    #[test]
    fn test_document_with_reads_yields_document_then_key_value() {
        let reqs = Requirements {
            data_type: DataType::Document,
            high_read_throughput: true,
            ..Default::default()
        };

        let recommendations = classify(&reqs);

        assert_eq!(
            types(&recommendations),
            vec![DatabaseType::Document, DatabaseType::KeyValue]
        );
        assert_eq!(recommendations[0].confidence_score, 0.8);
        assert_eq!(recommendations[1].confidence_score, 0.7);
    }

    #[test]
    fn test_transactional_and_semi_structured_branches() {
        let transactional = Requirements {
            data_type: DataType::Transactional,
            ..Default::default()
        };
        assert_eq!(types(&classify(&transactional)), vec![DatabaseType::Relational]);

        let semi = Requirements {
            data_type: DataType::SemiStructured,
            ..Default::default()
        };
        assert_eq!(types(&classify(&semi)), vec![DatabaseType::Document]);
    }

    #[test]
    fn test_ungated_inputs_yield_nothing() {
        for data_type in [DataType::Mixed, DataType::Other] {
            let reqs = Requirements {
                data_type,
                high_write_throughput: true,
                high_availability: true,
                ..Default::default()
            };
            assert!(classify(&reqs).is_empty());
        }
    }

    #[test]
    fn test_mixed_with_reads_yields_only_cache() {
        let reqs = Requirements {
            high_read_throughput: true,
            ..Default::default()
        };
        assert_eq!(types(&classify(&reqs)), vec![DatabaseType::KeyValue]);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let reqs = Requirements {
            data_type: DataType::Structured,
            high_read_throughput: true,
            ..Default::default()
        };
        assert_eq!(classify(&reqs), classify(&reqs));
    }
}
