#![warn(missing_docs)]
//! # Tickbench
//!
//! A sequential micro-benchmark harness: register named tests grouped into
//! categories, run them strictly one at a time with millisecond wall-clock
//! timing, classify each as passed or failed, and aggregate per-group
//! results for an external presentation layer.
//!
//! - **Sequential by construction**: the scheduler never starts test N+1
//!   before test N signals completion
//! - **Deterministic order**: groups ascend lexicographically, tests ascend
//!   by name within each group
//! - **Timing-integrity guard**: a reported success with a non-finite
//!   elapsed time is downgraded to a failure
//! - **Observer hooks**: per-test state transitions, per-group summaries,
//!   and a single run-completion notification
//! - **Pacing delays**: configurable pauses between work items so a live
//!   UI can keep up; zero is valid and preserves all guarantees
//!
//! ## Quick Start
//!
//! ```
//! use tickbench::prelude::*;
//!
//! let mut registry = TestRegistry::new();
//! registry.add_test_with_description(
//!     "math",
//!     "add",
//!     |mut m: TestManager| {
//!         m.start_timer();
//!         let total: u64 = (0..10_000).sum();
//!         m.stop_timer();
//!         m.set_operation_count(10_000);
//!         m.complete(total > 0);
//!     },
//!     "Arithmetic micro-benchmarks",
//! );
//!
//! let scheduler = Scheduler::new().with_pacing(Pacing::none());
//! let report = scheduler.run_blocking(&registry, &mut NullObserver);
//! assert_eq!(report.summary.passed, 1);
//! ```
//!
//! ## Asynchronous test bodies
//!
//! A body may move its [`TestManager`] into a spawned task and complete
//! later; the scheduler suspends until the completion signal arrives. A body
//! that never completes stalls the run (there is no built-in timeout).

// Re-export core types
pub use tickbench_core::{
    Clock, Completion, ManualClock, MonotonicClock, Outcome, SystemClock, TestBody, TestDef,
    TestManager, TestRegistry, TestState,
};

// Re-export report types
pub use tickbench_report::{
    generate_json_report, GroupEntry, GroupSummary, ResultCollector, RunMeta, RunReport,
    RunSummary, TestRecord,
};

// Re-export runner types
pub use tickbench_runner::{
    build_plan, NullObserver, Pacing, PlanOptions, RunConfig, RunObserver, Scheduler, TestUpdate,
    TraceObserver, WorkItem,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        NullObserver, Outcome, Pacing, RunObserver, Scheduler, TestManager, TestRegistry,
        TestState, TestUpdate, TraceObserver,
    };
}
