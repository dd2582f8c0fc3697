//! Time Sources
//!
//! Millisecond-resolution clocks for test timing. `MonotonicClock` wraps
//! `std::time::Instant` and is the default high-resolution source.
//! `SystemClock` is the coarse wall-clock fallback for embeddings that
//! cannot trust a monotonic source, and `ManualClock` is a settable clock
//! for deterministic tests.

use std::sync::Mutex;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// A source of millisecond timestamps.
///
/// Readings are relative to an arbitrary per-clock origin; only the
/// difference between two readings from the same clock is meaningful.
pub trait Clock: Send + Sync {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> f64;
}

/// High-resolution monotonic clock, anchored at construction time.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

/// Coarse wall-clock fallback, reporting milliseconds since the Unix epoch.
///
/// Not monotonic: readings move with system time adjustments. Use
/// [`MonotonicClock`] unless the embedding forbids it.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1_000.0)
            .unwrap_or(0.0)
    }
}

/// Manually advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Mutex<f64>,
}

impl ManualClock {
    /// Create a manual clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute reading.
    pub fn set(&self, ms: f64) {
        *self.now_ms.lock().unwrap() = ms;
    }

    /// Advance the reading by `ms` milliseconds.
    pub fn advance(&self, ms: f64) {
        *self.now_ms.lock().unwrap() += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        *self.now_ms.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        std::thread::sleep(Duration::from_millis(5));
        let b = clock.now_ms();
        assert!(b >= a + 1.0, "clock should advance: {a} -> {b}");
    }

    #[test]
    fn test_monotonic_clock_never_regresses() {
        let clock = MonotonicClock::new();
        let mut last = clock.now_ms();
        for _ in 0..100 {
            let now = clock.now_ms();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        let clock = SystemClock;
        // Any sane system reports well past the year 2000.
        assert!(clock.now_ms() > 946_684_800_000.0);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0.0);
        clock.set(100.0);
        assert_eq!(clock.now_ms(), 100.0);
        clock.advance(2.5);
        assert_eq!(clock.now_ms(), 102.5);
    }
}
