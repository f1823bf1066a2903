//! Time management for estimators
//!
//! Estimators never read a global clock. Each one owns a [`TimeSource`], so
//! the device layer can feed wall-clock time and tests can drive time by hand:
//! - System clock (with `std`)
//! - Mock clock (tests, replay of recorded traces)
//! - Anything implementing the trait (RTC, tick counter)

use core::cell::Cell;

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Share one clock between several estimators of the same device.
impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Hand-driven time source
///
/// Interior mutability lets a test keep advancing the clock while an
/// estimator holds a shared reference to it.
///
/// ```rust
/// use sensewise_core::time::{MockTimeSource, TimeSource};
///
/// let clock = MockTimeSource::new(1_000);
/// let shared = &clock;
/// clock.advance(500);
/// assert_eq!(shared.now(), 1_500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTimeSource {
    timestamp: Cell<Timestamp>,
}

impl MockTimeSource {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp: Cell::new(timestamp) }
    }

    /// Jump to an absolute time
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Elapsed milliseconds between two timestamps, 0 if the clock went back
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_advances() {
        let time = MockTimeSource::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10);
        assert_eq!(time.now(), 10);
    }

    #[test]
    fn reference_shares_clock() {
        let time = MockTimeSource::new(0);
        let borrowed = &time;

        time.advance(250);
        assert_eq!(borrowed.now(), 250);
    }

    #[test]
    fn elapsed_saturates() {
        assert_eq!(elapsed_ms(1000, 3000), 2000);
        // Clock adjustment backwards
        assert_eq!(elapsed_ms(3000, 1000), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_past_epoch() {
        let clock = SystemTime;
        assert!(clock.now() > 0);
    }
}
