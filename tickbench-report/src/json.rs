//! JSON Output

use crate::report::RunReport;

/// Generate a prettified JSON report.
///
/// Serializes the run report into machine-readable JSON. Non-finite elapsed
/// values (failed timing) serialize as `null`.
pub fn generate_json_report(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
