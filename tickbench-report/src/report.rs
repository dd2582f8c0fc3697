//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collector::TestRecord;

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub meta: RunMeta,
    pub results: Vec<TestRecord>,
    pub summary: RunSummary,
}

impl RunReport {
    /// Assemble a report from execution-ordered records.
    pub fn new(meta: RunMeta, results: Vec<TestRecord>) -> Self {
        let summary = RunSummary::from_records(&results);
        Self {
            meta,
            results,
            summary,
        }
    }
}

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Wall-clock duration of the whole run, pacing delays included.
    pub total_duration_ms: f64,
}

impl RunMeta {
    /// Metadata stamped at run completion.
    pub fn new(total_duration_ms: f64) -> Self {
        Self {
            schema_version: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            total_duration_ms,
        }
    }
}

/// Pass/fail tallies over one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Tally outcomes from execution-ordered records.
    pub fn from_records(records: &[TestRecord]) -> Self {
        let passed = records.iter().filter(|r| r.outcome.success).count();
        Self {
            total_tests: records.len(),
            passed,
            failed: records.len() - passed,
        }
    }
}

/// One `{name, elapsed}` point for a group's aggregate chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Test name within the group.
    pub name: String,
    /// Elapsed milliseconds; NaN (serialized as `null`) when the test never
    /// produced valid timing.
    #[serde(with = "tickbench_core::nonfinite_as_null")]
    pub elapsed_ms: f64,
}

/// Payload of the group-summary hook, fired once per completed group.
/// Entries are in execution order. The harness does not interpret what the
/// external chart collaborator does with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group label.
    pub group: String,
    /// Long description registered for the group, if any.
    pub description: Option<String>,
    /// Ordered `{name, elapsed}` points for every executed test.
    pub entries: Vec<GroupEntry>,
}
