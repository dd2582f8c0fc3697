//! Run Observers
//!
//! The presentation-facing surface of the harness. Observers receive
//! per-test state transitions, per-group summaries, and a single
//! run-completion notification. All notifications are fire-and-forget:
//! nothing in the harness depends on what an observer does with them.

use tickbench_core::TestState;
use tickbench_report::GroupSummary;
use tracing::{debug, info, warn};

/// A state-transition notification for a single test unit.
#[derive(Debug, Clone)]
pub struct TestUpdate<'a> {
    /// Group label.
    pub group: &'a str,
    /// Test name.
    pub name: &'a str,
    /// New state of the test unit.
    pub state: TestState,
    /// Elapsed milliseconds; present on terminal states with valid timing.
    pub elapsed_ms: Option<f64>,
    /// Operations per millisecond, when an operation count was recorded.
    pub throughput: Option<f64>,
    /// Failure explanation, when the test supplied one.
    pub error: Option<&'a str>,
}

/// Hooks fired by the scheduler as a run progresses.
///
/// `test_update` fires on every state transition of every test,
/// `group_summary` once per completed group, and `run_complete` exactly
/// once after the last group summary.
pub trait RunObserver {
    /// A test unit changed state.
    fn test_update(&mut self, _update: &TestUpdate<'_>) {}

    /// A group finished; its aggregated entries are ready for charting.
    fn group_summary(&mut self, _summary: &GroupSummary) {}

    /// The whole run finished.
    fn run_complete(&mut self) {}
}

/// Observer that drops every notification.
#[derive(Debug, Default)]
pub struct NullObserver;

impl RunObserver for NullObserver {}

/// Observer that forwards notifications as `tracing` events, so a headless
/// embedding gets useful output with no presentation layer attached.
#[derive(Debug, Default)]
pub struct TraceObserver;

impl RunObserver for TraceObserver {
    fn test_update(&mut self, update: &TestUpdate<'_>) {
        match update.state {
            TestState::Passed => info!(
                group = update.group,
                name = update.name,
                elapsed_ms = update.elapsed_ms,
                throughput = update.throughput,
                "test passed"
            ),
            TestState::Failed => warn!(
                group = update.group,
                name = update.name,
                error = update.error,
                "test failed"
            ),
            state => debug!(
                group = update.group,
                name = update.name,
                state = ?state,
                "test state"
            ),
        }
    }

    fn group_summary(&mut self, summary: &GroupSummary) {
        info!(
            group = %summary.group,
            tests = summary.entries.len(),
            "group complete"
        );
    }

    fn run_complete(&mut self) {
        info!("run complete");
    }
}
