//! Sensor Inference Estimators
//!
//! ## Overview
//!
//! Battery-powered Zigbee sensors lie in predictable ways: readings arrive
//! late or not at all, get clamped to nonsense, jump further than physics
//! allows, or encode a firmware bug as a plausible number. Publishing the
//! latest raw attribute propagates every one of those faults into
//! automations. Each estimator here sits between one raw attribute stream
//! and the published value:
//!
//! | estimator | input | output |
//! |---|---|---|
//! | [`MotionLuxInference`] | illuminance | presence (bool) |
//! | [`ClimateInference`] | temperature, humidity | smoothed values, health |
//! | [`SoilMoistureInference`] | moisture (+ temperature) | smoothed value, trend, watering advice |
//! | [`AirQualityInference`] | CO2 (+ VOC, PM2.5) | validated CO2, AQI |
//! | [`BatteryInference`] | battery % | validated level, discharge rate, days left |
//!
//! ## Composition
//!
//! Estimators do not inherit from a base type. Each owns an
//! [`InferenceCore`] with the shared pieces (per-source history,
//! confidence, clock, logger) and implements
//! [`SensorInference`](crate::traits::SensorInference) to expose it. The
//! device layer holds one estimator per capability and calls it whenever a
//! new attribute report arrives.
//!
//! ## Failure Policy
//!
//! Nothing here returns an error for a bad reading:
//! - Out of range → rejected, previous valid value returned
//! - Implausible jump → smoothed toward the reading by a bounded step
//! - Contradicting channels → confidence lowered, values untouched
//!
//! ## Usage Example
//!
//! ```rust
//! use sensewise_core::{ClimateInference, SensorInference};
//! use sensewise_core::time::MockTimeSource;
//!
//! let clock = MockTimeSource::new(0);
//! let mut climate = ClimateInference::new(&clock);
//!
//! assert_eq!(climate.validate_temperature(21.0), Some(21.0));
//! clock.advance(10_000);
//! // 0xFFFF / 100 firmware glitch
//! assert_eq!(climate.validate_temperature(655.35), Some(21.0));
//! ```

mod air_quality;
mod battery;
mod climate;
mod motion;
mod soil;

pub use air_quality::AirQualityInference;
pub use battery::{BatteryInference, BatteryStatus};
pub use climate::{ClimateInference, SensorHealth};
pub use motion::{MotionLuxInference, MotionState};
pub use soil::{MoistureTrend, SoilMoistureInference, Urgency, WateringAdvice};

use core::fmt;

use crate::{
    config::HistoryConfig,
    confidence::Confidence,
    history::SourceHistory,
    logging::{Logger, Severity},
    time::{TimeSource, Timestamp},
    traits::{Sample, Validatable},
};

/// State shared by every estimator
#[derive(Debug)]
pub struct InferenceCore<T: TimeSource> {
    history: SourceHistory,
    confidence: Confidence,
    clock: T,
    logger: Logger,
    activity_window_ms: u64,
}

impl<T: TimeSource> InferenceCore<T> {
    /// Create an empty core
    pub fn new(config: &HistoryConfig, clock: T) -> Self {
        Self {
            history: SourceHistory::new(config.history_size),
            confidence: Confidence::new(config.initial_confidence, config.min_confidence),
            clock,
            logger: Logger::new(),
            activity_window_ms: config.activity_window_ms,
        }
    }

    /// Current time from the injected clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Store a sample; `None`, non-finite values and full tables are dropped
    ///
    /// Returns whether the sample was stored.
    pub fn record(&mut self, source: &str, value: Option<f32>, timestamp: Timestamp) -> bool {
        let Some(value) = value.filter(Validatable::is_valid) else {
            return false;
        };

        match self.history.record(source, Sample { value, timestamp }) {
            Ok(()) => true,
            Err(e) => {
                self.log(Severity::Warn, format_args!("[HISTORY] dropped {} sample: {}", source, e));
                false
            }
        }
    }

    /// Per-source history
    pub fn history(&self) -> &SourceHistory {
        &self.history
    }

    /// Check for variation of a source inside the configured window
    pub fn has_recent_activity(&self, source: &str) -> bool {
        self.history.has_recent_activity(source, self.now(), self.activity_window_ms)
    }

    /// Confidence score
    pub fn confidence(&self) -> &Confidence {
        &self.confidence
    }

    /// Confidence score, mutable
    pub fn confidence_mut(&mut self) -> &mut Confidence {
        &mut self.confidence
    }

    /// Diagnostic logger
    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    /// Emit a diagnostic line
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.logger.emit(severity, args);
    }
}

/// Check a reading is a finite number inside `[min, max]`
pub(crate) fn in_range(value: f32, min: f32, max: f32) -> bool {
    value.is_valid() && value >= min && value <= max
}

/// Move from `from` toward `to` by at most `max_step`
pub(crate) fn step_toward(from: f32, to: f32, max_step: f32) -> f32 {
    let jump = libm::fabsf(to - from);
    let step = jump.min(max_step);
    if to > from {
        from + step
    } else {
        from - step
    }
}
