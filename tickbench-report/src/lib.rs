//! Tickbench Report - Result Collection and Output
//!
//! Accumulates one [`TestRecord`] per executed test in execution order,
//! derives per-group chart entries and run summaries, and serializes the
//! whole run to JSON.

mod collector;
mod json;
mod report;

pub use collector::{ResultCollector, TestRecord};
pub use json::generate_json_report;
pub use report::{GroupEntry, GroupSummary, RunMeta, RunReport, RunSummary};
