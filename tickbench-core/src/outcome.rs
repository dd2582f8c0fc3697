//! Test Outcomes
//!
//! An [`Outcome`] is the immutable record of one test's execution, built
//! from the [`Completion`] the test signalled. The success decision lives
//! here: a reported success is downgraded to failure when the elapsed time
//! is not a finite number.

use crate::manager::Completion;
use serde::{Deserialize, Serialize};

/// Serde representation for elapsed readings.
///
/// JSON has no encoding for NaN or infinity, so non-finite values serialize
/// as `null` and read back as NaN. Without this the report would reject its
/// own output whenever a run contains a test with failed timing.
pub mod nonfinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Write a finite value as a number, anything else as `null`.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    /// Read a number, mapping `null` back to NaN.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Execution state of a single test unit, as exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    /// Registered and scheduled, not yet started.
    Waiting,
    /// Currently executing. At most one test is in this state at a time.
    Running,
    /// Completed successfully with valid timing.
    Passed,
    /// Completed unsuccessfully, or with invalid timing.
    Failed,
}

/// Immutable record of one test's execution result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// `stop − start` in milliseconds. NaN when either timer reading is
    /// missing; serialized as `null` in that case.
    #[serde(with = "nonfinite_as_null")]
    pub elapsed_ms: f64,
    /// Reported success, downgraded to `false` when `elapsed_ms` is not
    /// finite.
    pub success: bool,
    /// Operation count recorded by the body, if any.
    pub operation_count: Option<u64>,
    /// Operations per millisecond; present only when an operation count was
    /// recorded, the test succeeded, and the division yields a finite value
    /// (a zero elapsed time leaves it unset).
    pub throughput: Option<f64>,
    /// Failure explanation recorded by the body, if any.
    pub error: Option<String>,
}

impl Outcome {
    /// Build the outcome from a completion signal.
    ///
    /// The validity guard is exactly `f64::is_finite`: NaN and infinite
    /// elapsed times downgrade a reported success, while a
    /// negative-but-finite elapsed from a clock anomaly does not (it is a
    /// separate concern, not folded into this check).
    pub fn from_completion(completion: Completion) -> Self {
        let elapsed_ms = match (completion.start_ms, completion.end_ms) {
            (Some(start), Some(end)) => end - start,
            _ => f64::NAN,
        };
        let success = completion.reported_success && elapsed_ms.is_finite();
        let throughput = match (success, completion.operation_count) {
            (true, Some(ops)) => {
                let per_ms = ops as f64 / elapsed_ms;
                per_ms.is_finite().then_some(per_ms)
            }
            _ => None,
        };
        Self {
            elapsed_ms,
            success,
            operation_count: completion.operation_count,
            throughput,
            error: completion.error,
        }
    }

    /// Failure outcome for a body that dropped its manager without ever
    /// signalling completion.
    pub fn abandoned() -> Self {
        Self {
            elapsed_ms: f64::NAN,
            success: false,
            operation_count: None,
            throughput: None,
            error: Some("test dropped its manager without completing".to_string()),
        }
    }

    /// Terminal state for this outcome.
    pub fn state(&self) -> TestState {
        if self.success {
            TestState::Passed
        } else {
            TestState::Failed
        }
    }
}
