//! Run Planner
//!
//! Builds the ordered work queue the scheduler consumes: for each group
//! (sorted), the group's tests (sorted), followed by a group-complete
//! sentinel. Queue items are a tagged union, never discriminated by
//! runtime type inspection.
//!
//! Filtering options:
//! - Regex pattern matching on test name
//! - Exact group filtering
//!
//! Groups left empty by filtering contribute no items and no sentinel.

use tickbench_core::{TestDef, TestRegistry};

/// A unit of scheduler work.
pub enum WorkItem<'a> {
    /// Execute a single test.
    RunTest(&'a TestDef),
    /// All tests of the named group have executed.
    GroupComplete(&'a str),
}

/// Filtering applied while planning.
#[derive(Debug, Default, Clone)]
pub struct PlanOptions {
    /// Keep only tests whose name matches.
    pub filter: Option<regex::Regex>,
    /// Keep only this group.
    pub group: Option<String>,
}

/// Build the ordered work queue from current registrations.
///
/// Ordering is deterministic: groups ascend lexicographically, tests within
/// a group ascend by name (registration order breaks ties).
pub fn build_plan<'a>(registry: &'a TestRegistry, options: &PlanOptions) -> Vec<WorkItem<'a>> {
    let mut items = Vec::new();

    for group in registry.groups() {
        if let Some(g) = &options.group {
            if group != g.as_str() {
                continue;
            }
        }

        let tests: Vec<&TestDef> = registry
            .tests_in(group)
            .into_iter()
            .filter(|t| {
                options
                    .filter
                    .as_ref()
                    .map_or(true, |re| re.is_match(&t.name))
            })
            .collect();

        if tests.is_empty() {
            continue;
        }

        items.extend(tests.into_iter().map(WorkItem::RunTest));
        items.push(WorkItem::GroupComplete(group));
    }

    items
}
