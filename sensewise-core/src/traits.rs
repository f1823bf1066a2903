//! Core traits for estimators
//!
//! Every estimator owns an [`InferenceCore`] (history, confidence, clock,
//! logger) and exposes it through [`SensorInference`]. The trait's provided
//! methods implement the shared history contract once, so the estimators
//! only add their own state machine on top.

use crate::{
    history::SourceBuffer,
    inference::InferenceCore,
    logging::LogHook,
    time::{TimeSource, Timestamp},
};

/// Single reading with timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Raw value
    pub value: f32,
    /// Time of the reading (ms)
    pub timestamp: Timestamp,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Shared behavior of all estimators
///
/// ```rust
/// use sensewise_core::{SensorInference, BatteryInference};
/// use sensewise_core::time::MockTimeSource;
///
/// let clock = MockTimeSource::new(0);
/// let mut battery = BatteryInference::new(&clock);
///
/// battery.record_value("voltage", Some(3.0));
/// battery.record_value("voltage", None); // dropped silently
/// assert_eq!(battery.history_len("voltage"), 1);
/// assert_eq!(battery.confidence(), 50);
/// ```
pub trait SensorInference {
    /// Clock feeding the estimator
    type Clock: TimeSource;

    /// Shared state
    fn core(&self) -> &InferenceCore<Self::Clock>;

    /// Shared state, mutable
    fn core_mut(&mut self) -> &mut InferenceCore<Self::Clock>;

    /// Record a sample at the current time; `None` and non-finite values are ignored
    fn record_value(&mut self, source: &str, value: Option<f32>) {
        let now = self.core().now();
        self.core_mut().record(source, value, now);
    }

    /// Record a sample at an explicit time
    fn record_value_at(&mut self, source: &str, value: Option<f32>, timestamp: Timestamp) {
        self.core_mut().record(source, value, timestamp);
    }

    /// Signed rate of change of a source (units per second)
    fn rate_of_change(&self, source: &str) -> f32 {
        self.core().history().rate_of_change(source)
    }

    /// Check for variation inside the configured activity window
    fn has_recent_activity(&self, source: &str) -> bool {
        self.core().has_recent_activity(source)
    }

    /// Check for variation inside an explicit window
    fn has_recent_activity_within(&self, source: &str, window_ms: u64) -> bool {
        let core = self.core();
        core.history().has_recent_activity(source, core.now(), window_ms)
    }

    /// Confidence rounded to an integer in [floor, 100]
    fn confidence(&self) -> u8 {
        self.core().confidence().score()
    }

    /// Samples stored for a source
    fn history_len(&self, source: &str) -> usize {
        self.core().history().len(source)
    }

    /// Stored samples of a source, oldest first
    fn history(&self, source: &str) -> Option<&SourceBuffer> {
        self.core().history().get(source)
    }

    /// Most recent sample of a source
    fn last_sample(&self, source: &str) -> Option<Sample> {
        self.core().history().last(source).copied()
    }

    /// Forward diagnostic lines to `hook`
    fn set_log_hook(&mut self, hook: LogHook) {
        self.core_mut().logger_mut().set_hook(hook);
    }

    /// Stop forwarding diagnostic lines
    fn clear_log_hook(&mut self) {
        self.core_mut().logger_mut().clear_hook();
    }
}
