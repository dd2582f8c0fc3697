//! Sequential Scheduler
//!
//! Consumes the planned work queue one item per tick, driving exactly one
//! [`TestManager`] at a time. Control returns from a test only through its
//! completion signal, so the at-most-one-test-in-flight invariant holds by
//! construction. Pacing delays between ticks keep live observers
//! responsive; they are not correctness-critical and zero is a valid
//! setting.
//!
//! There is no per-test timeout and no cancellation: a body that holds its
//! manager forever stalls the run.

use crate::observer::{RunObserver, TestUpdate};
use crate::plan::{build_plan, PlanOptions, WorkItem};
use std::sync::Arc;
use std::time::Duration;
use tickbench_core::{Clock, MonotonicClock, Outcome, TestDef, TestManager, TestRegistry, TestState};
use tickbench_report::{GroupSummary, ResultCollector, RunMeta, RunReport};
use tokio::time::sleep;
use tracing::{debug, warn};

/// Inter-item pacing delays.
///
/// `start_delay` separates the visible Running transition from the body
/// invocation and is never part of the measured time (the body starts its
/// own timer). `test_pace` follows every completed test and `group_pace`
/// every group summary, giving external rendering time to catch up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay between the Running transition and the body invocation.
    pub start_delay: Duration,
    /// Delay after each completed test.
    pub test_pace: Duration,
    /// Delay after each group summary.
    pub group_pace: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(500),
            test_pace: Duration::from_millis(500),
            group_pace: Duration::from_millis(750),
        }
    }
}

impl Pacing {
    /// No delays at all; ordering guarantees are unaffected.
    pub fn none() -> Self {
        Self {
            start_delay: Duration::ZERO,
            test_pace: Duration::ZERO,
            group_pace: Duration::ZERO,
        }
    }
}

/// Drives registered tests to completion, one at a time, in group-then-name
/// order.
pub struct Scheduler {
    clock: Arc<dyn Clock>,
    pacing: Pacing,
    options: PlanOptions,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Scheduler with the high-resolution monotonic clock, default pacing,
    /// and no filtering.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(MonotonicClock::new()),
            pacing: Pacing::default(),
            options: PlanOptions::default(),
        }
    }

    /// Replace the pacing delays.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Replace the time source shared with every test's manager.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the planning options (name/group filters).
    pub fn with_options(mut self, options: PlanOptions) -> Self {
        self.options = options;
        self
    }

    /// Run every planned test to completion.
    ///
    /// Fires a Waiting update for each planned test up front, then processes
    /// the queue head-first. Per-test failures never abort the run. The
    /// `run_complete` hook fires exactly once, after the last group summary,
    /// and the returned report owns every outcome in execution order.
    pub async fn run(&self, registry: &TestRegistry, observer: &mut dyn RunObserver) -> RunReport {
        let run_start = self.clock.now_ms();
        let plan = build_plan(registry, &self.options);
        let mut collector = ResultCollector::new();

        for item in &plan {
            if let WorkItem::RunTest(test) = item {
                observer.test_update(&TestUpdate {
                    group: &test.group,
                    name: &test.name,
                    state: TestState::Waiting,
                    elapsed_ms: None,
                    throughput: None,
                    error: None,
                });
            }
        }

        for item in &plan {
            match item {
                WorkItem::RunTest(test) => {
                    self.run_test(test, observer, &mut collector).await;
                    sleep(self.pacing.test_pace).await;
                }
                WorkItem::GroupComplete(group) => {
                    let summary = GroupSummary {
                        group: (*group).to_string(),
                        description: registry.description(group).map(str::to_string),
                        entries: collector.group_entries(group),
                    };
                    debug!(group, tests = summary.entries.len(), "group complete");
                    observer.group_summary(&summary);
                    sleep(self.pacing.group_pace).await;
                }
            }
        }

        observer.run_complete();
        let total_duration_ms = self.clock.now_ms() - run_start;
        collector.into_report(RunMeta::new(total_duration_ms))
    }

    /// Run on a fresh single-threaded runtime, blocking until completion.
    ///
    /// Bodies may spawn local tasks; they run while the scheduler awaits the
    /// completion signal.
    pub fn run_blocking(
        &self,
        registry: &TestRegistry,
        observer: &mut dyn RunObserver,
    ) -> RunReport {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("failed to create tokio runtime");
        let local = tokio::task::LocalSet::new();
        local.block_on(&runtime, self.run(registry, observer))
    }

    async fn run_test(
        &self,
        test: &TestDef,
        observer: &mut dyn RunObserver,
        collector: &mut ResultCollector,
    ) {
        debug!(group = %test.group, name = %test.name, "running");
        observer.test_update(&TestUpdate {
            group: &test.group,
            name: &test.name,
            state: TestState::Running,
            elapsed_ms: None,
            throughput: None,
            error: None,
        });

        // Decouple the visible Running transition from the actual timing
        // start; the body calls start_timer itself once it begins work.
        sleep(self.pacing.start_delay).await;

        let (manager, done) = TestManager::new(Arc::clone(&self.clock));
        test.invoke(manager);

        let outcome = match done.await {
            Ok(completion) => {
                let reported_success = completion.reported_success;
                let outcome = Outcome::from_completion(completion);
                if reported_success && !outcome.success {
                    warn!(
                        group = %test.group,
                        name = %test.name,
                        "reported success downgraded: elapsed time is not finite"
                    );
                }
                outcome
            }
            // Channel closed: the body gave up its manager without ever
            // signalling. Surfacing a failure keeps the run live.
            Err(_) => {
                warn!(group = %test.group, name = %test.name, "test abandoned its manager");
                Outcome::abandoned()
            }
        };

        observer.test_update(&TestUpdate {
            group: &test.group,
            name: &test.name,
            state: outcome.state(),
            elapsed_ms: outcome.elapsed_ms.is_finite().then_some(outcome.elapsed_ms),
            throughput: outcome.throughput,
            error: outcome.error.as_deref(),
        });
        collector.record(test.group.clone(), test.name.clone(), outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer recording a compact trace of every notification.
    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<String>,
    }

    impl RunObserver for RecordingObserver {
        fn test_update(&mut self, update: &TestUpdate<'_>) {
            self.events
                .push(format!("{:?} {}/{}", update.state, update.group, update.name));
        }

        fn group_summary(&mut self, summary: &GroupSummary) {
            self.events.push(format!("summary {}", summary.group));
        }

        fn run_complete(&mut self) {
            self.events.push("complete".to_string());
        }
    }

    fn quick_scheduler() -> Scheduler {
        Scheduler::new().with_pacing(Pacing::none())
    }

    #[tokio::test]
    async fn test_group_then_name_ordering() {
        let mut registry = TestRegistry::new();
        for (group, name) in [("b", "b2"), ("a", "a2"), ("b", "b1"), ("a", "a1")] {
            registry.add_test(group, name, |mut m: TestManager| {
                m.start_timer();
                m.stop_timer();
                m.complete(true);
            });
        }

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        // All of a's transitions precede b's; a's summary strictly precedes
        // any Running transition of b.
        assert_eq!(
            observer.events,
            vec![
                "Waiting a/a1",
                "Waiting a/a2",
                "Waiting b/b1",
                "Waiting b/b2",
                "Running a/a1",
                "Passed a/a1",
                "Running a/a2",
                "Passed a/a2",
                "summary a",
                "Running b/b1",
                "Passed b/b1",
                "Running b/b2",
                "Passed b/b2",
                "summary b",
                "complete",
            ]
        );

        let executed: Vec<String> = report
            .results
            .iter()
            .map(|r| format!("{}/{}", r.group, r.name))
            .collect();
        assert_eq!(executed, vec!["a/a1", "a/a2", "b/b1", "b/b2"]);
        assert_eq!(report.summary.passed, 4);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_run() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "bad", |mut m: TestManager| {
            m.set_error("boom");
            m.complete(false);
        });
        registry.add_test("g", "good", |mut m: TestManager| {
            m.start_timer();
            m.stop_timer();
            m.complete(true);
        });

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        assert_eq!(report.summary.total_tests, 2);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.results[0].outcome.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_success_without_timing_is_downgraded() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "no_timer", |m: TestManager| {
            m.complete(true);
        });

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        let outcome = &report.results[0].outcome;
        assert!(!outcome.success);
        assert!(outcome.elapsed_ms.is_nan());
        assert!(observer.events.contains(&"Failed g/no_timer".to_string()));
    }

    #[tokio::test]
    async fn test_abandoned_manager_is_recorded_as_failure() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "forgetful", |m: TestManager| {
            drop(m);
        });

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        let outcome = &report.results[0].outcome;
        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("without completing"));
    }

    #[tokio::test]
    async fn test_duplicate_registrations_both_run() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "dup", |mut m: TestManager| {
            m.start_timer();
            m.stop_timer();
            m.complete(true);
        });
        registry.add_test("g", "dup", |mut m: TestManager| {
            m.start_timer();
            m.stop_timer();
            m.complete(true);
        });

        let mut observer = NullObserverForTest;
        let report = quick_scheduler().run(&registry, &mut observer).await;
        assert_eq!(report.summary.total_tests, 2);
    }

    struct NullObserverForTest;
    impl RunObserver for NullObserverForTest {}

    #[tokio::test]
    async fn test_body_may_complete_from_another_thread() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "threaded", |mut m: TestManager| {
            std::thread::spawn(move || {
                m.start_timer();
                std::thread::sleep(Duration::from_millis(5));
                m.stop_timer();
                m.complete(true);
            });
        });

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        let outcome = &report.results[0].outcome;
        assert!(outcome.success);
        assert!(outcome.elapsed_ms >= 1.0);
    }

    #[test]
    fn test_run_blocking_drives_local_tasks() {
        let mut registry = TestRegistry::new();
        registry.add_test("g", "local", |mut m: TestManager| {
            tokio::task::spawn_local(async move {
                m.start_timer();
                tokio::time::sleep(Duration::from_millis(2)).await;
                m.stop_timer();
                m.complete(true);
            });
        });

        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run_blocking(&registry, &mut observer);
        assert_eq!(report.summary.passed, 1);
    }

    #[tokio::test]
    async fn test_empty_registry_completes_immediately() {
        let registry = TestRegistry::new();
        let mut observer = RecordingObserver::default();
        let report = quick_scheduler().run(&registry, &mut observer).await;

        assert_eq!(observer.events, vec!["complete"]);
        assert_eq!(report.summary.total_tests, 0);
    }
}
