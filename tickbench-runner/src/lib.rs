#![warn(missing_docs)]
//! Tickbench Runner
//!
//! Plans and executes runs: builds the ordered work queue from a
//! [`tickbench_core::TestRegistry`], drives one test at a time through the
//! sequential [`Scheduler`], and notifies [`RunObserver`] hooks as state
//! transitions, group summaries, and run completion happen.

mod config;
mod observer;
mod plan;
mod scheduler;

pub use config::RunConfig;
pub use observer::{NullObserver, RunObserver, TestUpdate, TraceObserver};
pub use plan::{build_plan, PlanOptions, WorkItem};
pub use scheduler::{Pacing, Scheduler};
