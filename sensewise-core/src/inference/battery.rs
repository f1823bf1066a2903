//! Battery Discharge Prediction
//!
//! Zigbee end devices report battery percentage infrequently and often with
//! firmware quirks: a freshly woken CR2032 reads higher than it is, and some
//! devices report 100% for a few frames after a reset. Levels are therefore
//! only allowed to rise slowly; a large rise within an hour is ignored.
//!
//! The discharge rate is learned from observed drops only and blended as an
//! exponential moving average (70% previous, 30% new) because report
//! intervals vary from minutes to days.

use crate::{
    config::BatteryConfig,
    constants::time::MS_PER_DAY,
    errors::ConfigResult,
    inference::{in_range, InferenceCore},
    logging::Severity,
    time::{elapsed_ms, TimeSource, Timestamp},
    traits::SensorInference,
};

const BATTERY: &str = "battery";

/// Battery status from the last accepted level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BatteryStatus {
    /// No reading yet
    Unknown,
    /// Above the low threshold
    Ok,
    /// At or below the low threshold
    Low,
    /// At or below the critical threshold
    Critical,
}

impl BatteryStatus {
    /// Lowercase name for device capabilities
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ok => "ok",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }
}

/// Battery level validator and lifetime predictor
#[derive(Debug)]
pub struct BatteryInference<T: TimeSource> {
    core: InferenceCore<T>,
    config: BatteryConfig,
    last_pct: Option<f32>,
    last_pct_at: Option<Timestamp>,
    discharge_rate: Option<f32>,
}

impl<T: TimeSource> BatteryInference<T> {
    /// Predictor with default thresholds
    pub fn new(clock: T) -> Self {
        Self::build(BatteryConfig::default(), clock)
    }

    /// Predictor with validated custom thresholds
    pub fn with_config(config: BatteryConfig, clock: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: BatteryConfig, clock: T) -> Self {
        Self {
            core: InferenceCore::new(&config.history, clock),
            config,
            last_pct: None,
            last_pct_at: None,
            discharge_rate: None,
        }
    }

    /// Validate a battery level (%)
    ///
    /// Returns the accepted level, or the previous one when the reading is
    /// out of range or an implausible rise.
    pub fn validate_battery(&mut self, raw: f32) -> Option<f32> {
        let now = self.core.now();

        if !in_range(raw, self.config.min_pct, self.config.max_pct) {
            self.core.log(
                Severity::Warn,
                format_args!("[BATTERY] level out of range: {}% - rejected", raw),
            );
            return self.last_pct;
        }

        let Some(last) = self.last_pct else {
            self.accept(raw, now);
            return Some(raw);
        };

        let since_last_ms = self.last_pct_at.map(|at| elapsed_ms(at, now));

        if raw > last + self.config.suspicious_rise_pct
            && since_last_ms.map_or(true, |ms| ms < self.config.rise_window_ms)
            && raw >= last + self.config.max_rise_pct
        {
            self.core.log(
                Severity::Warn,
                format_args!("[BATTERY] level rose {}% -> {}% too quickly - ignored", last, raw),
            );
            return Some(last);
        }

        if raw < last {
            if let Some(ms) = since_last_ms.filter(|&ms| ms > 0) {
                let days = ms as f32 / MS_PER_DAY as f32;
                let observed = (last - raw) / days;
                let smoothing = self.config.rate_smoothing;
                self.discharge_rate = Some(
                    self.discharge_rate
                        .map_or(observed, |rate| rate * smoothing + observed * (1.0 - smoothing)),
                );
            }
        }

        self.accept(raw, now);
        Some(raw)
    }

    fn accept(&mut self, pct: f32, now: Timestamp) {
        self.last_pct = Some(pct);
        self.last_pct_at = Some(now);
        self.core.record(BATTERY, Some(pct), now);
    }

    /// Days until empty at the learned discharge rate
    ///
    /// `None` until a positive rate has been observed.
    pub fn predict_days_remaining(&self) -> Option<u32> {
        let level = self.last_pct?;
        let rate = self.discharge_rate.filter(|&r| r > 0.0)?;
        Some(libm::roundf(level / rate) as u32)
    }

    /// Status from the last accepted level
    pub fn status(&self) -> BatteryStatus {
        match self.last_pct {
            None => BatteryStatus::Unknown,
            Some(pct) if pct <= self.config.critical_threshold => BatteryStatus::Critical,
            Some(pct) if pct <= self.config.low_threshold => BatteryStatus::Low,
            Some(_) => BatteryStatus::Ok,
        }
    }

    /// Smoothed discharge rate (% per day)
    pub fn discharge_rate_per_day(&self) -> Option<f32> {
        self.discharge_rate
    }

    /// Last accepted level (%)
    pub fn level(&self) -> Option<f32> {
        self.last_pct
    }
}

impl<T: TimeSource> SensorInference for BatteryInference<T> {
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
    use crate::constants::time::{MS_PER_DAY, MS_PER_MINUTE};
    use crate::time::MockTimeSource;

    #[test]
    fn quick_rise_is_rejected() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);

        assert_eq!(battery.validate_battery(80.0), Some(80.0));
        clock.advance(10 * MS_PER_MINUTE);
        assert_eq!(battery.validate_battery(90.0), Some(80.0));
        assert_eq!(battery.level(), Some(80.0));
    }

    #[test]
    fn small_or_slow_rise_is_accepted() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);

        battery.validate_battery(80.0);
        clock.advance(10 * MS_PER_MINUTE);
        assert_eq!(battery.validate_battery(88.0), Some(88.0));

        // Battery swapped overnight
        clock.advance(MS_PER_DAY);
        assert_eq!(battery.validate_battery(100.0), Some(100.0));
    }

    #[test]
    fn drop_sets_discharge_rate() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);

        battery.validate_battery(80.0);
        clock.advance(MS_PER_DAY);
        assert_eq!(battery.validate_battery(75.0), Some(75.0));

        let rate = battery.discharge_rate_per_day().unwrap();
        assert!((rate - 5.0).abs() < 1e-3);
        assert_eq!(battery.predict_days_remaining(), Some(15));
    }

    #[test]
    fn timing_survives_full_source_table() {
        use crate::constants::buffers::MAX_SOURCES;

        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);
        for i in 0..MAX_SOURCES {
            battery.record_value(&format!("ext_{}", i), Some(1.0));
        }

        battery.validate_battery(50.0);
        assert_eq!(battery.history_len("battery"), 0);

        // Charged over three days: a slow rise, not a glitch
        clock.advance(3 * MS_PER_DAY);
        assert_eq!(battery.validate_battery(65.0), Some(65.0));

        clock.advance(MS_PER_DAY);
        battery.validate_battery(60.0);
        let rate = battery.discharge_rate_per_day().unwrap();
        assert!((rate - 5.0).abs() < 1e-3);
    }

    #[test]
    fn rate_is_smoothed() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);

        battery.validate_battery(90.0);
        clock.advance(MS_PER_DAY);
        battery.validate_battery(80.0); // 10 %/day
        clock.advance(MS_PER_DAY);
        battery.validate_battery(78.0); // 2 %/day

        let rate = battery.discharge_rate_per_day().unwrap();
        assert!((rate - 7.6).abs() < 1e-3);
    }

    #[test]
    fn no_prediction_without_drop() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);
        assert_eq!(battery.predict_days_remaining(), None);

        battery.validate_battery(60.0);
        clock.advance(MS_PER_DAY);
        battery.validate_battery(60.0);
        assert_eq!(battery.predict_days_remaining(), None);
    }

    #[test]
    fn status_thresholds() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);
        assert_eq!(battery.status(), BatteryStatus::Unknown);

        battery.validate_battery(50.0);
        assert_eq!(battery.status(), BatteryStatus::Ok);
        battery.validate_battery(20.0);
        assert_eq!(battery.status(), BatteryStatus::Low);
        battery.validate_battery(10.0);
        assert_eq!(battery.status(), BatteryStatus::Critical);
        assert_eq!(battery.status().as_str(), "critical");
    }

    #[test]
    fn out_of_range_returns_previous() {
        let clock = MockTimeSource::new(0);
        let mut battery = BatteryInference::new(&clock);

        assert_eq!(battery.validate_battery(150.0), None);
        battery.validate_battery(40.0);
        assert_eq!(battery.validate_battery(-5.0), Some(40.0));
        assert_eq!(battery.validate_battery(f32::NAN), Some(40.0));
        assert_eq!(battery.history_len("battery"), 1);
    }

    #[test]
    fn custom_thresholds() {
        let clock = MockTimeSource::new(0);
        let config = BatteryConfig::default().with_thresholds(30.0, 15.0);
        let mut battery = BatteryInference::with_config(config, &clock).unwrap();

        battery.validate_battery(25.0);
        assert_eq!(battery.status(), BatteryStatus::Low);

        let inverted = BatteryConfig::default().with_thresholds(10.0, 20.0);
        assert!(BatteryInference::with_config(inverted, &clock).is_err());
    }
}
