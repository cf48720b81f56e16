use shared_types::{PatternDescriptor, PatternType};

struct PatternEntry {
    description: &'static str,
    examples: &'static [&'static str],
    use_cases: &'static [&'static str],
}

const RELATIONAL: PatternEntry = PatternEntry {
    description: "For structured data with complex relationships",
    examples: &["PostgreSQL", "MySQL", "SQL Server"],
    use_cases: &[
        "Transactional systems",
        "Data requiring ACID guarantees",
        "Complex relationships",
    ],
};

const DOCUMENT: PatternEntry = PatternEntry {
    description: "For semi-structured data stored as documents",
    examples: &["MongoDB", "Couchbase", "Firestore"],
    use_cases: &[
        "Product catalogs",
        "User-generated content",
        "Hierarchical data",
    ],
};

const KEY_VALUE: PatternEntry = PatternEntry {
    description: "For fast access by key",
    examples: &["Redis", "DynamoDB", "Memcached"],
    use_cases: &["Caching", "User sessions", "Configuration"],
};

/// Reference descriptor for one of the three storage patterns.
pub fn pattern(pattern_type: PatternType) -> PatternDescriptor {
    let entry = match pattern_type {
        PatternType::Relational => &RELATIONAL,
        PatternType::Document => &DOCUMENT,
        PatternType::KeyValue => &KEY_VALUE,
    };

    PatternDescriptor {
        pattern_type,
        description: entry.description.to_string(),
        examples: entry.examples.iter().map(|s| s.to_string()).collect(),
        use_cases: entry.use_cases.iter().map(|s| s.to_string()).collect(),
    }
}
