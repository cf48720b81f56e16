use crate::requirements::{DataVolume, Requirements};

/// Operational caveats, in a fixed order. Never empty.
pub fn generate(requirements: &Requirements) -> Vec<String> {
    let mut considerations = Vec::new();

    if requirements.data_volume == DataVolume::Large {
        considerations.push("Consider partitioning or sharding for large data volumes".to_string());
    }

    if requirements.compliance_requirements {
        considerations.push("Verify compliance requirements (GDPR, LGPD, etc.)".to_string());
    }

    if requirements.real_time_analytics {
        considerations.push("Consider a separate database for analytics (OLAP)".to_string());
    }

    considerations.push("Implement backup and recovery procedures".to_string());
    considerations.push("Monitor performance and configure alerts".to_string());

    considerations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_has_two_items() {
        let considerations = generate(&Requirements::default());
        assert_eq!(
            considerations,
            vec![
                "Implement backup and recovery procedures",
                "Monitor performance and configure alerts"
            ]
        );
    }

    #[test]
    fn test_all_caveats_in_order() {
        let reqs = Requirements {
            data_volume: DataVolume::Large,
            compliance_requirements: true,
            real_time_analytics: true,
            ..Default::default()
        };
        let considerations = generate(&reqs);

        assert_eq!(considerations.len(), 5);
        assert!(considerations[0].contains("sharding"));
        assert!(considerations[1].contains("GDPR"));
        assert!(considerations[2].contains("OLAP"));
    }

    #[test]
    fn test_massive_volume_does_not_trigger_partitioning_caveat() {
        let reqs = Requirements {
            data_volume: DataVolume::Massive,
            ..Default::default()
        };
        assert_eq!(generate(&reqs).len(), 2);
    }
}
