//! Per-Run Measurement Context
//!
//! A [`TestManager`] is created fresh for every test execution and handed
//! to the test body. The body drives the timer, optionally records an
//! operation count or an error description, and finishes by calling
//! [`TestManager::complete`], which hands control back to the scheduler
//! through a oneshot channel.

use crate::clock::Clock;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Raw measurement data sent to the scheduler when a test signals
/// completion.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Timer start reading, if `start_timer` was ever called.
    pub start_ms: Option<f64>,
    /// Timer stop reading, if `stop_timer` was ever called.
    pub end_ms: Option<f64>,
    /// The success flag as reported by the test body.
    pub reported_success: bool,
    /// Throughput denominator, if recorded.
    pub operation_count: Option<u64>,
    /// Failure explanation, if recorded.
    pub error: Option<String>,
}

/// Measurement context for a single test execution.
///
/// `complete` consumes the manager, so signalling completion twice is a
/// compile error rather than undefined behavior. A body that returns
/// without completing drops the manager and closes the channel, which the
/// scheduler records as a failure; a body that holds the manager forever
/// without completing stalls the run (there is no built-in timeout).
pub struct TestManager {
    clock: Arc<dyn Clock>,
    start_ms: Option<f64>,
    end_ms: Option<f64>,
    operation_count: Option<u64>,
    error: Option<String>,
    done: oneshot::Sender<Completion>,
}

impl TestManager {
    /// Create a manager and the channel the scheduler awaits on.
    pub fn new(clock: Arc<dyn Clock>) -> (Self, oneshot::Receiver<Completion>) {
        let (done, rx) = oneshot::channel();
        (
            Self {
                clock,
                start_ms: None,
                end_ms: None,
                operation_count: None,
                error: None,
                done,
            },
            rx,
        )
    }

    /// Record the current clock reading as the timer start. Last call wins.
    pub fn start_timer(&mut self) {
        self.start_ms = Some(self.clock.now_ms());
    }

    /// Record the current clock reading as the timer stop. Last call wins.
    pub fn stop_timer(&mut self) {
        self.end_ms = Some(self.clock.now_ms());
    }

    /// Record how many operations the timed section performed, enabling
    /// throughput (operations per millisecond) in the outcome.
    pub fn set_operation_count(&mut self, ops: u64) {
        self.operation_count = Some(ops);
    }

    /// Record a human-readable failure explanation. Only surfaced when the
    /// test ultimately reports failure.
    pub fn set_error(&mut self, description: impl Into<String>) {
        self.error = Some(description.into());
    }

    /// Signal completion with the given success flag.
    ///
    /// This is the single terminal operation and the only way execution
    /// control returns to the scheduler for this test.
    pub fn complete(self, success: bool) {
        let completion = Completion {
            start_ms: self.start_ms,
            end_ms: self.end_ms,
            reported_success: success,
            operation_count: self.operation_count,
            error: self.error,
        };
        // The receiver is gone only when the run itself was abandoned;
        // there is nobody left to notify.
        let _ = self.done.send(completion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual_manager() -> (Arc<ManualClock>, TestManager, oneshot::Receiver<Completion>) {
        let clock = Arc::new(ManualClock::new());
        let (manager, rx) = TestManager::new(clock.clone() as Arc<dyn Clock>);
        (clock, manager, rx)
    }

    #[test]
    fn test_complete_sends_timings() {
        let (clock, mut manager, mut rx) = manual_manager();
        clock.set(10.0);
        manager.start_timer();
        clock.set(35.0);
        manager.stop_timer();
        manager.set_operation_count(100);
        manager.complete(true);

        let completion = rx.try_recv().unwrap();
        assert_eq!(completion.start_ms, Some(10.0));
        assert_eq!(completion.end_ms, Some(35.0));
        assert!(completion.reported_success);
        assert_eq!(completion.operation_count, Some(100));
        assert!(completion.error.is_none());
    }

    #[test]
    fn test_last_timer_call_wins() {
        let (clock, mut manager, mut rx) = manual_manager();
        clock.set(1.0);
        manager.start_timer();
        clock.set(2.0);
        manager.start_timer();
        clock.set(9.0);
        manager.stop_timer();
        clock.set(12.0);
        manager.stop_timer();
        manager.complete(true);

        let completion = rx.try_recv().unwrap();
        assert_eq!(completion.start_ms, Some(2.0));
        assert_eq!(completion.end_ms, Some(12.0));
    }

    #[test]
    fn test_timers_unset_when_never_called() {
        let (_clock, mut manager, mut rx) = manual_manager();
        manager.set_error("boom");
        manager.complete(false);

        let completion = rx.try_recv().unwrap();
        assert_eq!(completion.start_ms, None);
        assert_eq!(completion.end_ms, None);
        assert!(!completion.reported_success);
        assert_eq!(completion.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_drop_without_complete_closes_channel() {
        let (_clock, manager, mut rx) = manual_manager();
        drop(manager);
        assert!(rx.try_recv().is_err());
    }
}
