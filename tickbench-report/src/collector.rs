//! Result Collection
//!
//! The collector owns every [`Outcome`] produced by a run, in execution
//! order (which equals group-then-name schedule order). It is the read-only
//! surface the presentation layer aggregates from.

use serde::{Deserialize, Serialize};
use tickbench_core::Outcome;

use crate::report::{GroupEntry, RunMeta, RunReport};

/// One executed test's identity plus its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    /// Group label of the executed test.
    pub group: String,
    /// Test name within the group.
    pub name: String,
    /// The immutable execution result.
    pub outcome: Outcome,
}

/// Ordered accumulator of outcomes for one run.
#[derive(Debug, Default)]
pub struct ResultCollector {
    records: Vec<TestRecord>,
}

impl ResultCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome, preserving execution order.
    pub fn record(&mut self, group: impl Into<String>, name: impl Into<String>, outcome: Outcome) {
        self.records.push(TestRecord {
            group: group.into(),
            name: name.into(),
            outcome,
        });
    }

    /// All records so far, in execution order.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Ordered `{name, elapsed}` points for one group, as handed to the
    /// group-summary hook.
    pub fn group_entries(&self, group: &str) -> Vec<GroupEntry> {
        self.records
            .iter()
            .filter(|r| r.group == group)
            .map(|r| GroupEntry {
                name: r.name.clone(),
                elapsed_ms: r.outcome.elapsed_ms,
            })
            .collect()
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the collector into the final report.
    pub fn into_report(self, meta: RunMeta) -> RunReport {
        RunReport::new(meta, self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(elapsed_ms: f64, success: bool) -> Outcome {
        Outcome {
            elapsed_ms,
            success,
            operation_count: None,
            throughput: None,
            error: None,
        }
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut collector = ResultCollector::new();
        collector.record("b", "second", outcome(2.0, true));
        collector.record("a", "first", outcome(1.0, true));

        let names: Vec<&str> = collector.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_group_entries_filter_and_order() {
        let mut collector = ResultCollector::new();
        collector.record("g", "a", outcome(1.0, true));
        collector.record("h", "x", outcome(9.0, true));
        collector.record("g", "b", outcome(2.0, false));

        let entries = collector.group_entries("g");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert_eq!(entries[0].elapsed_ms, 1.0);
        assert_eq!(entries[1].name, "b");

        assert!(collector.group_entries("missing").is_empty());
    }

    #[test]
    fn test_into_report() {
        let mut collector = ResultCollector::new();
        collector.record("g", "a", outcome(1.0, true));
        collector.record("g", "b", outcome(1.0, false));

        let report = collector.into_report(RunMeta::new(5.0));
        assert_eq!(report.summary.total_tests, 2);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 1);
    }
}
