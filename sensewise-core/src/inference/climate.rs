//! Climate Cross-Validation
//!
//! Validates temperature and humidity as two independent channels, each with
//! the same policy:
//!
//! 1. **Hard range**: outside it the reading is rejected and the previous
//!    valid value is returned
//! 2. **Jump limit**: the tolerated change grows with time since the last
//!    validated sample, `max(static_max, elapsed_s / divisor)`, i.e. 5°C
//!    at any cadence and 1°C per minute beyond that
//! 3. **Smoothing**: an oversize jump is not discarded; the published value
//!    steps toward it by a bounded cap, so a genuine change (heater on,
//!    window open) still gets through over a few reports
//!
//! The psychrometric check ([`ClimateInference::check_correlation`]) is
//! advisory: near-saturated air far from room temperature is suspicious, but
//! the stored values are left untouched.

use crate::{
    config::{ChannelLimits, ClimateConfig},
    constants::time::DEFAULT_ELAPSED_SECONDS,
    errors::ConfigResult,
    inference::{in_range, step_toward, InferenceCore},
    logging::Severity,
    time::{elapsed_ms, TimeSource, Timestamp},
    traits::SensorInference,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Temperature,
    Humidity,
}

impl Channel {
    fn raw_source(self) -> &'static str {
        match self {
            Self::Temperature => "temp_raw",
            Self::Humidity => "humidity_raw",
        }
    }

    fn validated_source(self) -> &'static str {
        match self {
            Self::Temperature => "temp_validated",
            Self::Humidity => "humidity_validated",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
        }
    }
}

/// Snapshot of sensor reliability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorHealth {
    /// Readings rejected or smoothed so far
    pub erratic_readings: u32,
    /// Current confidence
    pub confidence: u8,
    /// Few erratic readings and confidence above the healthy threshold
    pub is_healthy: bool,
}

/// Temperature / humidity validator
#[derive(Debug)]
pub struct ClimateInference<T: TimeSource> {
    core: InferenceCore<T>,
    config: ClimateConfig,
    last_valid_temp: Option<f32>,
    last_valid_humidity: Option<f32>,
    temp_validated_at: Option<Timestamp>,
    humidity_validated_at: Option<Timestamp>,
    erratic_count: u32,
}

impl<T: TimeSource> ClimateInference<T> {
    /// Validator with default limits
    pub fn new(clock: T) -> Self {
        Self::build(ClimateConfig::default(), clock)
    }

    /// Validator with validated custom limits
    pub fn with_config(config: ClimateConfig, clock: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: ClimateConfig, clock: T) -> Self {
        Self {
            core: InferenceCore::new(&config.history, clock),
            config,
            last_valid_temp: None,
            last_valid_humidity: None,
            temp_validated_at: None,
            humidity_validated_at: None,
            erratic_count: 0,
        }
    }

    /// Validate a temperature reading (°C)
    ///
    /// Returns the value to publish: the reading itself, a smoothed step
    /// toward it, or the previous valid value (`None` before the first one).
    pub fn validate_temperature(&mut self, raw: f32) -> Option<f32> {
        self.validate(Channel::Temperature, raw)
    }

    /// Validate a relative humidity reading (%)
    pub fn validate_humidity(&mut self, raw: f32) -> Option<f32> {
        self.validate(Channel::Humidity, raw)
    }

    fn limits(&self, channel: Channel) -> ChannelLimits {
        match channel {
            Channel::Temperature => self.config.temperature,
            Channel::Humidity => self.config.humidity,
        }
    }

    fn last_valid(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::Temperature => self.last_valid_temp,
            Channel::Humidity => self.last_valid_humidity,
        }
    }

    fn validated_at(&self, channel: Channel) -> Option<Timestamp> {
        match channel {
            Channel::Temperature => self.temp_validated_at,
            Channel::Humidity => self.humidity_validated_at,
        }
    }

    fn validate(&mut self, channel: Channel, raw: f32) -> Option<f32> {
        let now = self.core.now();
        let limits = self.limits(channel);
        let last = self.last_valid(channel);
        self.core.record(channel.raw_source(), Some(raw), now);

        if !in_range(raw, limits.min, limits.max) {
            self.erratic_count += 1;
            self.core.log(
                Severity::Warn,
                format_args!("[CLIMATE] {:?} out of range: {}{} - rejected", channel, raw, channel.unit()),
            );
            return last;
        }

        let accepted = match last {
            Some(last) => {
                let jump = libm::fabsf(raw - last);
                let elapsed_s = self
                    .validated_at(channel)
                    .map_or(DEFAULT_ELAPSED_SECONDS, |at| elapsed_ms(at, now) as f32 / 1000.0);

                if jump > limits.allowed_jump(elapsed_s) {
                    let smoothed = step_toward(last, raw, limits.smoothing_cap);
                    self.erratic_count += 1;
                    self.core.confidence_mut().lower(self.config.jump_penalty);
                    self.core.log(
                        Severity::Warn,
                        format_args!(
                            "[CLIMATE] {:?} jump {:.1} -> {:.1}{} in {:.0}s - smoothed to {:.1}",
                            channel, last, raw, channel.unit(), elapsed_s, smoothed
                        ),
                    );
                    smoothed
                } else {
                    self.core.confidence_mut().raise(self.config.accept_boost);
                    raw
                }
            }
            None => {
                self.core.confidence_mut().raise(self.config.accept_boost);
                raw
            }
        };

        match channel {
            Channel::Temperature => {
                self.last_valid_temp = Some(accepted);
                self.temp_validated_at = Some(now);
            }
            Channel::Humidity => {
                self.last_valid_humidity = Some(accepted);
                self.humidity_validated_at = Some(now);
            }
        }
        self.core.record(channel.validated_source(), Some(accepted), now);

        Some(accepted)
    }

    /// Psychrometric plausibility of the last valid pair
    ///
    /// False when humidity is near saturation while the temperature lies
    /// outside the moderate band. True when either value is missing.
    pub fn check_correlation(&self) -> bool {
        let (Some(temp), Some(humidity)) = (self.last_valid_temp, self.last_valid_humidity) else {
            return true;
        };

        let saturated = humidity > self.config.correlation_humidity_pct;
        let extreme = temp < self.config.correlation_temp_min_c || temp > self.config.correlation_temp_max_c;

        if saturated && extreme {
            self.core.log(
                Severity::Warn,
                format_args!("[CLIMATE] suspicious correlation: {:.1}°C @ {:.1}%", temp, humidity),
            );
            return false;
        }

        true
    }

    /// Reliability snapshot
    pub fn sensor_health(&self) -> SensorHealth {
        SensorHealth {
            erratic_readings: self.erratic_count,
            confidence: self.core.confidence().score(),
            is_healthy: self.is_healthy(),
        }
    }

    /// Few erratic readings and confidence above the healthy threshold
    pub fn is_healthy(&self) -> bool {
        self.erratic_count < self.config.max_erratic_readings
            && self.core.confidence().exceeds(self.config.healthy_confidence)
    }

    /// Last published temperature
    pub fn temperature(&self) -> Option<f32> {
        self.last_valid_temp
    }

    /// Last published humidity
    pub fn humidity(&self) -> Option<f32> {
        self.last_valid_humidity
    }

    /// Readings rejected or smoothed so far
    pub fn erratic_count(&self) -> u32 {
        self.erratic_count
    }
}

impl<T: TimeSource> SensorInference for ClimateInference<T> {
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
    fn accepts_normal_readings() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        assert_eq!(climate.validate_temperature(20.0), Some(20.0));
        clock.advance(10_000);
        assert_eq!(climate.validate_temperature(21.5), Some(21.5));
        assert_eq!(climate.confidence(), 54);
    }

    #[test]
    fn out_of_range_returns_previous() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        // Nothing valid yet
        assert_eq!(climate.validate_temperature(-50.0), None);

        climate.validate_temperature(20.0);
        assert_eq!(climate.validate_temperature(85.0), Some(20.0));
        assert_eq!(climate.validate_temperature(f32::NAN), Some(20.0));
        assert_eq!(climate.erratic_count(), 3);
        // Raw history keeps finite readings only
        assert_eq!(climate.history_len("temp_raw"), 3);
    }

    #[test]
    fn jump_allowance_survives_full_source_table() {
        use crate::constants::buffers::MAX_SOURCES;

        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);
        for i in 0..MAX_SOURCES {
            climate.record_value(&format!("ext_{}", i), Some(1.0));
        }

        climate.validate_temperature(20.0);
        assert_eq!(climate.history_len("temp_validated"), 0);

        // Ten minutes allow 10°C, not the cold-start 5°C
        clock.advance(600_000);
        assert_eq!(climate.validate_temperature(28.0), Some(28.0));
        assert_eq!(climate.erratic_count(), 0);
    }

    #[test]
    fn spike_is_smoothed_by_cap() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        climate.validate_temperature(21.0);
        clock.advance(10_000);
        assert_eq!(climate.validate_temperature(65.0), Some(23.0));
        assert_eq!(climate.erratic_count(), 1);
        assert_eq!(climate.confidence(), 42);
    }

    #[test]
    fn long_gap_allows_bigger_jump() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        climate.validate_temperature(15.0);
        // Ten minutes later 10°C is tolerated
        clock.advance(600_000);
        assert_eq!(climate.validate_temperature(24.0), Some(24.0));
    }

    #[test]
    fn humidity_uses_own_limits() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        climate.validate_humidity(40.0);
        clock.advance(10_000);
        // 14% is inside the static tolerance
        assert_eq!(climate.validate_humidity(54.0), Some(54.0));
        clock.advance(10_000);
        // 40% is not, step by 5
        assert_eq!(climate.validate_humidity(94.0), Some(59.0));
        assert_eq!(climate.validate_humidity(120.0), Some(59.0));
    }

    #[test]
    fn correlation_flags_saturated_extremes() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        assert!(climate.check_correlation());

        climate.validate_temperature(-5.0);
        climate.validate_humidity(97.0);
        assert!(!climate.check_correlation());

        // Advisory only
        assert_eq!(climate.temperature(), Some(-5.0));
        assert_eq!(climate.humidity(), Some(97.0));
    }

    #[test]
    fn correlation_accepts_moderate_fog() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        climate.validate_temperature(12.0);
        climate.validate_humidity(98.0);
        assert!(climate.check_correlation());
    }

    #[test]
    fn health_degrades_with_erratic_readings() {
        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);

        climate.validate_temperature(20.0);
        climate.validate_temperature(21.0);
        assert!(climate.is_healthy());

        for _ in 0..5 {
            climate.validate_temperature(200.0);
        }

        let health = climate.sensor_health();
        assert_eq!(health.erratic_readings, 5);
        assert!(!health.is_healthy);
    }

    #[test]
    fn log_hook_sees_smoothing() {
        use std::sync::{Arc, Mutex};

        let clock = MockTimeSource::new(0);
        let mut climate = ClimateInference::new(&clock);
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        climate.set_log_hook(Box::new(move |line: &str| sink.lock().unwrap().push(line.to_string())));

        climate.validate_temperature(20.0);
        climate.validate_temperature(40.0);

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[CLIMATE] Temperature jump"));
    }
}
