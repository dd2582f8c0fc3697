#![warn(missing_docs)]
//! Tickbench Core - Registry and Measurement
//!
//! This crate provides the building blocks of the harness:
//! - [`TestRegistry`] holding grouped test definitions
//! - [`TestManager`], the per-execution measurement context
//! - [`Clock`] abstraction with monotonic, wall-clock, and manual sources
//! - [`Outcome`], the immutable result of one execution, including the
//!   finite-elapsed validity guard

mod clock;
mod manager;
mod outcome;
mod registry;

pub use clock::{Clock, ManualClock, MonotonicClock, SystemClock};
pub use manager::{Completion, TestManager};
pub use outcome::{nonfinite_as_null, Outcome, TestState};
pub use registry::{TestBody, TestDef, TestRegistry};
