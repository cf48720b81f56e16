//! Rule-driven narrative report.
//!
//! Produces the same six sections an AI provider is asked to write, so the
//! simulated report and a real one read alike.

use crate::requirements::{Consistency, DataType, DataVolume, Requirements, Scalability};

/// Report sections, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Primary,
    Architecture,
    Performance,
    Security,
    Scalability,
    NextSteps,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Primary,
        Section::Architecture,
        Section::Performance,
        Section::Security,
        Section::Scalability,
        Section::NextSteps,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Primary => "PRIMARY DATABASE",
            Section::Architecture => "ARCHITECTURE",
            Section::Performance => "PERFORMANCE",
            Section::Security => "SECURITY",
            Section::Scalability => "SCALABILITY",
            Section::NextSteps => "NEXT STEPS",
        }
    }
}

/// Outcome of the primary-database policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryChoice {
    pub engine: &'static str,
    pub category: &'static str,
    pub justification: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSections {
    pub primary: String,
    pub architecture: String,
    pub performance: String,
    pub security: String,
    pub scalability: String,
    pub next_steps: String,
}

impl NarrativeSections {
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Primary => &self.primary,
            Section::Architecture => &self.architecture,
            Section::Performance => &self.performance,
            Section::Security => &self.security,
            Section::Scalability => &self.scalability,
            Section::NextSteps => &self.next_steps,
        }
    }

    /// Labeled report with every section in [`Section::ALL`] order
    pub fn render(&self) -> String {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                format!("{}. {}\n{}", i + 1, section.title(), self.section(*section))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Primary database policy; first matching rule wins.
pub fn primary_choice(requirements: &Requirements) -> PrimaryChoice {
    if requirements.data_type == DataType::Structured
        && requirements.consistency == Consistency::Strong
    {
        PrimaryChoice {
            engine: "PostgreSQL",
            category: "relational",
            justification: "ACID transactions and strong consistency for structured data",
        }
    } else if requirements.data_type == DataType::Document {
        PrimaryChoice {
            engine: "MongoDB",
            category: "document",
            justification: "flexible schema for evolving document-shaped data",
        }
    } else if requirements.real_time && requirements.high_read_throughput {
        PrimaryChoice {
            engine: "PostgreSQL + Redis",
            category: "relational + in-memory cache",
            justification: "relational consistency combined with real-time read performance",
        }
    } else if requirements.data_volume == DataVolume::Massive && requirements.high_write_throughput
    {
        PrimaryChoice {
            engine: "Apache Cassandra",
            category: "wide-column",
            justification: "linear write scalability for massive write throughput",
        }
    } else {
        PrimaryChoice {
            engine: "PostgreSQL",
            category: "relational",
            justification: "versatile default that covers most workloads well",
        }
    }
}

fn cache_strategy(requirements: &Requirements) -> &'static str {
    if requirements.real_time {
        "Redis for hot data and pub/sub fan-out of real-time updates"
    } else if requirements.high_read_throughput {
        "Redis as a cache-aside layer with per-key TTLs"
    } else {
        "No dedicated cache; rely on the database buffer cache"
    }
}

fn backup_strategy(requirements: &Requirements) -> &'static str {
    match requirements.data_volume {
        DataVolume::Large | DataVolume::Massive => {
            "Incremental backups with periodic snapshots and point-in-time recovery"
        }
        _ => "Automatic daily full backups with 30-day retention",
    }
}

fn performance_lines(requirements: &Requirements) -> Vec<&'static str> {
    let mut lines = Vec::new();

    if requirements.high_write_throughput {
        lines.push(
            "- Write-optimized: batch inserts, tune the write-ahead log and prefer append-only models",
        );
    }
    if requirements.real_time {
        lines.push("- Low latency: serve hot reads from the in-memory cache and keep queries index-only");
    }
    if requirements.high_read_throughput {
        lines.push("- Read-heavy: add read replicas and covering indexes for frequent queries");
    }
    if lines.is_empty() {
        lines.push("- Standard indexing on primary and foreign keys; review slow query logs regularly");
    }

    lines
}

fn scalability_strategy(requirements: &Requirements) -> &'static str {
    match requirements.scalability {
        Scalability::VeryHigh => "Multi-region deployment with automatic sharding",
        Scalability::High => "Horizontal sharding with read replicas",
        _ if requirements.high_availability => {
            "Synchronous replication with automatic failover"
        }
        _ => "Asynchronous replication to a standby replica",
    }
}

const SECURITY: &str = "\
- Encrypt data at rest and in transit (TLS)
- Least-privilege database roles; no shared admin credentials
- Keep secrets in a secrets manager, never in source control
- Enable audit logging for schema and permission changes";

const NEXT_STEPS: &str = "\
1. Model the core entities and access patterns
2. Provision a staging environment with the recommended engine
3. Load-test with realistic data volumes
4. Automate backups and verify a restore
5. Set up monitoring dashboards and alerts";

/// Derive all six narrative sections from the requirements.
pub fn analyze(requirements: &Requirements) -> NarrativeSections {
    let choice = primary_choice(requirements);

    NarrativeSections {
        primary: format!(
            "{} ({}): {}",
            choice.engine, choice.category, choice.justification
        ),
        architecture: format!(
            "- Primary store: {}\n- Cache: {}\n- Backups: {}",
            choice.engine,
            cache_strategy(requirements),
            backup_strategy(requirements)
        ),
        performance: performance_lines(requirements).join("\n"),
        security: SECURITY.to_string(),
        scalability: scalability_strategy(requirements).to_string(),
        next_steps: NEXT_STEPS.to_string(),
    }
}
