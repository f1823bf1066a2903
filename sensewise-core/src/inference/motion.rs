//! Motion Inference from Illuminance
//!
//! Many cheap presence sensors report lux far more often than occupancy,
//! and some (the `_TZE284` radar family) report `presence = null` for
//! minutes at a time. A person moving near the sensor still shades or
//! reflects light, so short-term lux fluctuation is a usable presence signal.
//!
//! ## State Machine
//!
//! ```text
//!                 first reading
//!  BaselineUnset ───────────────▶ Stable ◀──────────────┐
//!                                   │                   │ hold time elapsed
//!                 deviation > 5% or │                   │ (baseline reset)
//!                 rate > 2 lux/s    ▼                   │
//!                               MotionActive ───────────┘
//! ```
//!
//! While stable, readings within 3% of the baseline pull it slowly
//! (10% weight) so dusk and dawn do not read as motion. A trigger always
//! wins over drift in the same update.

use crate::{
    config::MotionConfig,
    errors::ConfigResult,
    inference::InferenceCore,
    logging::Severity,
    time::{elapsed_ms, TimeSource, Timestamp},
    traits::{SensorInference, Validatable},
};

const LUX: &str = "lux";
const DIRECT_MOTION: &str = "direct_motion";

/// Phase of the lux motion state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionState {
    /// No reading yet, motion undetermined
    BaselineUnset,
    /// Baseline established, no motion
    Stable,
    /// Motion inferred within the hold time
    MotionActive,
}

/// Presence estimator driven by illuminance fluctuation
#[derive(Debug)]
pub struct MotionLuxInference<T: TimeSource> {
    core: InferenceCore<T>,
    config: MotionConfig,
    baseline: Option<f32>,
    active: bool,
    last_trigger: Timestamp,
}

impl<T: TimeSource> MotionLuxInference<T> {
    /// Estimator with default thresholds
    pub fn new(clock: T) -> Self {
        Self::build(MotionConfig::default(), clock)
    }

    /// Estimator with validated custom thresholds
    pub fn with_config(config: MotionConfig, clock: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: MotionConfig, clock: T) -> Self {
        Self {
            core: InferenceCore::new(&config.history, clock),
            config,
            baseline: None,
            active: false,
            last_trigger: 0,
        }
    }

    /// Feed an illuminance reading
    ///
    /// Returns `None` until a baseline exists, then the inferred motion state.
    pub fn update_lux(&mut self, lux: f32) -> Option<bool> {
        if !lux.is_valid() {
            self.core.log(Severity::Debug, format_args!("[LUX-MOTION] ignoring non-finite lux"));
            return self.baseline.map(|_| self.active);
        }

        let now = self.core.now();
        self.core.record(LUX, Some(lux), now);

        let Some(baseline) = self.baseline else {
            self.baseline = Some(lux);
            return None;
        };

        let change_pct = libm::fabsf(lux - baseline) / baseline.max(1.0) * 100.0;
        let rate = libm::fabsf(self.core.history().rate_of_change(LUX));

        if change_pct > self.config.change_threshold_pct || rate > self.config.rate_threshold {
            self.active = true;
            self.last_trigger = now;
            self.core.confidence_mut().raise(self.config.trigger_boost);
            self.core.log(
                Severity::Info,
                format_args!(
                    "[LUX-MOTION] motion inferred: lux {:.1} -> {:.1} ({:.1}% change, {:.1} lux/s)",
                    baseline, lux, change_pct, rate
                ),
            );
        } else if self.active && elapsed_ms(self.last_trigger, now) > self.config.hold_time_ms {
            self.active = false;
            self.baseline = Some(lux);
            self.core.confidence_mut().lower(self.config.clear_penalty);
            self.core.log(
                Severity::Info,
                format_args!("[LUX-MOTION] motion cleared after {}s", self.config.hold_time_ms / 1000),
            );
        } else if !self.active && change_pct < self.config.drift_threshold_pct {
            let alpha = self.config.baseline_alpha;
            self.baseline = Some(baseline * (1.0 - alpha) + lux * alpha);
        }

        Some(self.active)
    }

    /// Calibrate against a direct (PIR / radar) motion report
    pub fn update_direct_motion(&mut self, motion: bool) {
        let now = self.core.now();
        self.core.record(DIRECT_MOTION, Some(if motion { 1.0 } else { 0.0 }), now);

        if motion == self.active {
            self.core.confidence_mut().raise(self.config.calibration_agree_boost);
        } else {
            let penalty = self.config.calibration_disagree_penalty;
            let floor = self.config.calibration_floor;
            self.core.confidence_mut().lower_to(penalty, floor);
            self.core.log(
                Severity::Debug,
                format_args!("[LUX-MOTION] direct sensor says {}, inferred {}", motion, self.active),
            );
        }

        if motion {
            self.last_trigger = now;
        }
    }

    /// Inferred motion
    pub fn motion(&self) -> bool {
        self.active
    }

    /// Current phase of the state machine
    pub fn state(&self) -> MotionState {
        match (self.baseline, self.active) {
            (None, _) => MotionState::BaselineUnset,
            (Some(_), true) => MotionState::MotionActive,
            (Some(_), false) => MotionState::Stable,
        }
    }

    /// Current lux baseline
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Active configuration
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}

impl<T: TimeSource> SensorInference for MotionLuxInference<T> {
    type Clock = T;

    fn core(&self) -> &InferenceCore<T> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut InferenceCore<T> {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MockTimeSource;

    #[test]
    fn first_reading_sets_baseline() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        assert_eq!(motion.state(), MotionState::BaselineUnset);
        assert_eq!(motion.update_lux(100.0), None);
        assert_eq!(motion.baseline(), Some(100.0));
        assert_eq!(motion.state(), MotionState::Stable);
    }

    #[test]
    fn deviation_triggers_motion() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(100.0);
        clock.advance(10_000);
        assert_eq!(motion.update_lux(110.0), Some(true));
        assert_eq!(motion.state(), MotionState::MotionActive);
        assert_eq!(motion.confidence(), 60);
    }

    #[test]
    fn fast_rate_triggers_even_with_small_deviation() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(1000.0);
        clock.advance(1_000);
        // 1% change but 10 lux/s
        assert_eq!(motion.update_lux(1010.0), Some(true));
    }

    #[test]
    fn small_change_drifts_baseline() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(100.0);
        clock.advance(10_000);
        // 2% in 10s: no trigger, below drift threshold
        assert_eq!(motion.update_lux(102.0), Some(false));

        let baseline = motion.baseline().unwrap();
        assert!((baseline - 100.2).abs() < 1e-4);
    }

    #[test]
    fn hold_time_clears_motion() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(100.0);
        clock.advance(1_000);
        motion.update_lux(110.0);
        assert!(motion.motion());

        // Still inside the hold time
        clock.advance(20_000);
        assert_eq!(motion.update_lux(100.0), Some(true));

        clock.advance(11_000);
        assert_eq!(motion.update_lux(100.0), Some(false));
        assert_eq!(motion.confidence(), 55);
        assert_eq!(motion.baseline(), Some(100.0));
    }

    #[test]
    fn direct_motion_calibrates_confidence() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        // Inferred false, direct false: agree
        motion.update_direct_motion(false);
        assert_eq!(motion.confidence(), 55);

        // Disagreements fall to the calibration floor, below the regular one
        for _ in 0..5 {
            motion.update_direct_motion(true);
        }
        assert_eq!(motion.confidence(), 20);
        assert_eq!(motion.history_len("direct_motion"), 6);
    }

    #[test]
    fn direct_motion_extends_hold() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(100.0);
        clock.advance(1_000);
        motion.update_lux(120.0);

        clock.advance(25_000);
        motion.update_direct_motion(true);

        // 35s after the lux trigger but only 10s after the PIR report
        clock.advance(10_000);
        assert_eq!(motion.update_lux(100.0), Some(true));
    }

    #[test]
    fn non_finite_lux_is_ignored() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        assert_eq!(motion.update_lux(f32::NAN), None);
        motion.update_lux(50.0);
        assert_eq!(motion.update_lux(f32::INFINITY), Some(false));
        assert_eq!(motion.history_len("lux"), 1);
    }

    #[test]
    fn dark_room_uses_unit_baseline() {
        let clock = MockTimeSource::new(0);
        let mut motion = MotionLuxInference::new(&clock);

        motion.update_lux(0.0);
        clock.advance(60_000);
        // 0 -> 0.04 lux is 4% of the 1 lux floor, not infinite
        assert_eq!(motion.update_lux(0.04), Some(false));
    }

    #[test]
    fn custom_threshold() {
        let clock = MockTimeSource::new(0);
        let config = MotionConfig::default().with_change_threshold(20.0);
        let mut motion = MotionLuxInference::with_config(config, &clock).unwrap();

        motion.update_lux(100.0);
        clock.advance(60_000);
        assert_eq!(motion.update_lux(110.0), Some(false));
    }

    #[test]
    fn invalid_config_rejected() {
        let clock = MockTimeSource::new(0);
        let config = MotionConfig::default().with_change_threshold(-5.0);
        assert!(MotionLuxInference::with_config(config, &clock).is_err());
    }
}
