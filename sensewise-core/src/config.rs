//! Estimator Configuration
//!
//! Every threshold an estimator uses lives in one of these structs. They are
//! built once (from [`Default`], builder methods, or a deserialized profile),
//! validated, and handed to the estimator by value. Estimators never mutate
//! their configuration.
//!
//! With the `serde` feature every struct deserializes with field defaults, so
//! a profile only needs to name the values it overrides:
//!
//! ```json
//! { "motion": { "hold_time_ms": 60000 }, "battery": { "low_threshold": 25.0 } }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sensewise_core::config::{HistoryConfig, MotionConfig};
//!
//! let config = MotionConfig::default()
//!     .with_change_threshold(8.0)
//!     .with_hold_time_ms(60_000)
//!     .with_history(HistoryConfig::default().with_history_size(12));
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    constants::{
        buffers::{DEFAULT_HISTORY_SIZE, HISTORY_CAPACITY},
        confidence::{CALIBRATION_FLOOR, CONFIDENCE_CEILING, CONFIDENCE_FLOOR, CONFIDENCE_INITIAL},
        inference::*,
        physics::*,
        time::DEFAULT_ACTIVITY_WINDOW_MS,
    },
    errors::{ConfigError, ConfigResult},
};

fn check_non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

fn check_positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

fn check_ratio(name: &'static str, value: f32) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio { name, value })
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> ConfigResult<()> {
    if !min.is_finite() {
        return Err(ConfigError::InvalidThreshold { name, value: min });
    }
    if !max.is_finite() || max <= min {
        return Err(ConfigError::InvalidThreshold { name, value: max });
    }
    Ok(())
}

/// History and confidence settings shared by every estimator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoryConfig {
    /// Samples kept per source
    pub history_size: usize,

    /// Confidence of a fresh estimator
    pub initial_confidence: f32,

    /// Lowest confidence reachable through validation penalties
    pub min_confidence: f32,

    /// Trailing window for recent-activity detection (ms)
    pub activity_window_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            initial_confidence: CONFIDENCE_INITIAL,
            min_confidence: CONFIDENCE_FLOOR,
            activity_window_ms: DEFAULT_ACTIVITY_WINDOW_MS,
        }
    }
}

impl HistoryConfig {
    /// Set the number of samples kept per source
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Set the starting confidence
    pub fn with_initial_confidence(mut self, confidence: f32) -> Self {
        self.initial_confidence = confidence;
        self
    }

    /// Set the confidence floor
    pub fn with_min_confidence(mut self, floor: f32) -> Self {
        self.min_confidence = floor;
        self
    }

    /// Check sizes and confidence bounds
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_size == 0 || self.history_size > HISTORY_CAPACITY {
            return Err(ConfigError::HistorySizeOutOfRange {
                requested: self.history_size,
                max: HISTORY_CAPACITY,
            });
        }

        let ordered = self.min_confidence >= 0.0
            && self.min_confidence <= self.initial_confidence
            && self.initial_confidence <= CONFIDENCE_CEILING;
        if !ordered {
            return Err(ConfigError::InvalidConfidenceBounds {
                floor: self.min_confidence,
                initial: self.initial_confidence,
                ceiling: CONFIDENCE_CEILING,
            });
        }

        Ok(())
    }
}

/// Motion-from-illuminance settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// History and confidence settings
    pub history: HistoryConfig,
    /// Deviation from baseline that triggers motion (%)
    pub change_threshold_pct: f32,
    /// Lux rate of change that triggers motion (lux/s)
    pub rate_threshold: f32,
    /// Deviation under which the baseline drifts (%)
    pub drift_threshold_pct: f32,
    /// Weight of a new reading in baseline drift
    pub baseline_alpha: f32,
    /// Time motion stays active after the last trigger (ms)
    pub hold_time_ms: u64,
    /// Confidence gained on a trigger
    pub trigger_boost: f32,
    /// Confidence lost when motion clears
    pub clear_penalty: f32,
    /// Confidence gained when a direct sensor agrees
    pub calibration_agree_boost: f32,
    /// Confidence lost when a direct sensor disagrees
    pub calibration_disagree_penalty: f32,
    /// Floor applied by the disagreement penalty
    pub calibration_floor: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            change_threshold_pct: LUX_CHANGE_THRESHOLD_PCT,
            rate_threshold: LUX_RATE_THRESHOLD_PER_S,
            drift_threshold_pct: LUX_DRIFT_THRESHOLD_PCT,
            baseline_alpha: LUX_BASELINE_ALPHA,
            hold_time_ms: MOTION_HOLD_TIME_MS,
            trigger_boost: MOTION_TRIGGER_BOOST,
            clear_penalty: MOTION_CLEAR_PENALTY,
            calibration_agree_boost: CALIBRATION_AGREE_BOOST,
            calibration_disagree_penalty: CALIBRATION_DISAGREE_PENALTY,
            calibration_floor: CALIBRATION_FLOOR,
        }
    }
}

impl MotionConfig {
    /// Replace the history settings
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Set the baseline deviation that triggers motion (%)
    pub fn with_change_threshold(mut self, pct: f32) -> Self {
        self.change_threshold_pct = pct;
        self
    }

    /// Set the lux rate that triggers motion
    pub fn with_rate_threshold(mut self, lux_per_s: f32) -> Self {
        self.rate_threshold = lux_per_s;
        self
    }

    /// Set the motion hold time
    pub fn with_hold_time_ms(mut self, ms: u64) -> Self {
        self.hold_time_ms = ms;
        self
    }

    /// Check thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        self.history.validate()?;
        check_non_negative("change_threshold_pct", self.change_threshold_pct)?;
        check_non_negative("rate_threshold", self.rate_threshold)?;
        check_non_negative("drift_threshold_pct", self.drift_threshold_pct)?;
        check_ratio("baseline_alpha", self.baseline_alpha)?;
        check_non_negative("trigger_boost", self.trigger_boost)?;
        check_non_negative("clear_penalty", self.clear_penalty)?;
        check_non_negative("calibration_agree_boost", self.calibration_agree_boost)?;
        check_non_negative("calibration_disagree_penalty", self.calibration_disagree_penalty)?;
        check_non_negative("calibration_floor", self.calibration_floor)?;
        if self.calibration_floor > CONFIDENCE_CEILING {
            return Err(ConfigError::InvalidThreshold {
                name: "calibration_floor",
                value: self.calibration_floor,
            });
        }
        Ok(())
    }
}

/// Range and jump policy of one climate channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelLimits {
    /// Lowest accepted reading
    pub min: f32,
    /// Highest accepted reading
    pub max: f32,
    /// Jump always tolerated between readings
    pub max_jump: f32,
    /// Seconds per extra unit of tolerated jump
    pub jump_divisor_s: f32,
    /// Largest step toward an implausible reading
    pub smoothing_cap: f32,
}

impl ChannelLimits {
    /// Default temperature limits (°C)
    pub const fn temperature() -> Self {
        Self {
            min: TEMPERATURE_MIN_C,
            max: TEMPERATURE_MAX_C,
            max_jump: TEMP_MAX_JUMP_C,
            jump_divisor_s: TEMP_JUMP_DIVISOR_S,
            smoothing_cap: TEMP_SMOOTHING_CAP_C,
        }
    }

    /// Default humidity limits (%)
    pub const fn humidity() -> Self {
        Self {
            min: HUMIDITY_MIN_PCT,
            max: HUMIDITY_MAX_PCT,
            max_jump: HUMIDITY_MAX_JUMP_PCT,
            jump_divisor_s: HUMIDITY_JUMP_DIVISOR_S,
            smoothing_cap: HUMIDITY_SMOOTHING_CAP_PCT,
        }
    }

    /// Jump tolerated after `elapsed_s` seconds
    pub fn allowed_jump(&self, elapsed_s: f32) -> f32 {
        self.max_jump.max(elapsed_s / self.jump_divisor_s)
    }

    fn validate(&self, name: &'static str) -> ConfigResult<()> {
        check_range(name, self.min, self.max)?;
        check_non_negative("max_jump", self.max_jump)?;
        check_positive("jump_divisor_s", self.jump_divisor_s)?;
        check_non_negative("smoothing_cap", self.smoothing_cap)
    }
}

/// Temperature / humidity validation settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimateConfig {
    /// History and confidence settings
    pub history: HistoryConfig,
    /// Temperature channel (°C)
    pub temperature: ChannelLimits,
    /// Humidity channel (%)
    pub humidity: ChannelLimits,
    /// Confidence lost on a smoothed reading
    pub jump_penalty: f32,
    /// Confidence gained on an accepted reading
    pub accept_boost: f32,
    /// Humidity above which temperature must be moderate (%)
    pub correlation_humidity_pct: f32,
    /// Lowest temperature compatible with saturated air (°C)
    pub correlation_temp_min_c: f32,
    /// Highest temperature compatible with saturated air (°C)
    pub correlation_temp_max_c: f32,
    /// Erratic readings tolerated by the health check
    pub max_erratic_readings: u32,
    /// Confidence a healthy sensor must exceed
    pub healthy_confidence: f32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            temperature: ChannelLimits::temperature(),
            humidity: ChannelLimits::humidity(),
            jump_penalty: CLIMATE_JUMP_PENALTY,
            accept_boost: CLIMATE_ACCEPT_BOOST,
            correlation_humidity_pct: CORRELATION_HUMIDITY_PCT,
            correlation_temp_min_c: CORRELATION_TEMP_MIN_C,
            correlation_temp_max_c: CORRELATION_TEMP_MAX_C,
            max_erratic_readings: MAX_ERRATIC_READINGS,
            healthy_confidence: HEALTHY_CONFIDENCE,
        }
    }
}

impl ClimateConfig {
    /// Replace the history settings
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Replace the temperature channel limits
    pub fn with_temperature(mut self, limits: ChannelLimits) -> Self {
        self.temperature = limits;
        self
    }

    /// Replace the humidity channel limits
    pub fn with_humidity(mut self, limits: ChannelLimits) -> Self {
        self.humidity = limits;
        self
    }

    /// Check thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        self.history.validate()?;
        self.temperature.validate("temperature")?;
        self.humidity.validate("humidity")?;
        check_non_negative("jump_penalty", self.jump_penalty)?;
        check_non_negative("accept_boost", self.accept_boost)?;
        check_range("correlation_temp", self.correlation_temp_min_c, self.correlation_temp_max_c)?;
        check_non_negative("correlation_humidity_pct", self.correlation_humidity_pct)?;
        check_non_negative("healthy_confidence", self.healthy_confidence)
    }
}

/// Soil moisture validation and prediction settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SoilConfig {
    /// History and confidence settings
    pub history: HistoryConfig,
    /// Lowest accepted moisture (%)
    pub min_pct: f32,
    /// Highest accepted moisture (%)
    pub max_pct: f32,
    /// Jump that needs corroboration (%)
    pub max_jump_pct: f32,
    /// Uncorroborated jump that gets smoothed (%)
    pub smoothing_jump_pct: f32,
    /// Step toward a smoothed reading (%)
    pub smoothing_step_pct: f32,
    /// Confidence lost on a smoothed reading
    pub jump_penalty: f32,
    /// Trend hysteresis (%)
    pub trend_hysteresis_pct: f32,
    /// Below this the soil needs water now (%)
    pub dry_threshold_pct: f32,
    /// Below this a drying soil needs water soon (%)
    pub drying_threshold_pct: f32,
    /// Above this the soil is wet (%)
    pub wet_threshold_pct: f32,
}

impl Default for SoilConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            min_pct: MOISTURE_MIN_PCT,
            max_pct: MOISTURE_MAX_PCT,
            max_jump_pct: MOISTURE_MAX_JUMP_PCT,
            smoothing_jump_pct: MOISTURE_SMOOTHING_JUMP_PCT,
            smoothing_step_pct: MOISTURE_SMOOTHING_STEP_PCT,
            jump_penalty: MOISTURE_JUMP_PENALTY,
            trend_hysteresis_pct: MOISTURE_TREND_HYSTERESIS_PCT,
            dry_threshold_pct: MOISTURE_DRY_THRESHOLD_PCT,
            drying_threshold_pct: MOISTURE_DRYING_THRESHOLD_PCT,
            wet_threshold_pct: MOISTURE_WET_THRESHOLD_PCT,
        }
    }
}

impl SoilConfig {
    /// Replace the history settings
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Set the dry / wet watering thresholds (%)
    pub fn with_thresholds(mut self, dry_pct: f32, wet_pct: f32) -> Self {
        self.dry_threshold_pct = dry_pct;
        self.wet_threshold_pct = wet_pct;
        self
    }

    /// Check thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        self.history.validate()?;
        check_range("moisture", self.min_pct, self.max_pct)?;
        check_non_negative("max_jump_pct", self.max_jump_pct)?;
        check_non_negative("smoothing_jump_pct", self.smoothing_jump_pct)?;
        check_non_negative("smoothing_step_pct", self.smoothing_step_pct)?;
        check_non_negative("jump_penalty", self.jump_penalty)?;
        check_non_negative("trend_hysteresis_pct", self.trend_hysteresis_pct)?;
        check_range("watering_thresholds", self.dry_threshold_pct, self.wet_threshold_pct)?;
        check_non_negative("drying_threshold_pct", self.drying_threshold_pct)
    }
}

/// CO2 validation and AQI settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AirQualityConfig {
    /// History and confidence settings
    pub history: HistoryConfig,
    /// Lowest accepted CO2 (ppm)
    pub co2_min_ppm: f32,
    /// Highest accepted CO2 (ppm)
    pub co2_max_ppm: f32,
    /// Outdoor CO2 baseline of the AQI scale (ppm)
    pub co2_baseline_ppm: f32,
    /// CO2 considered elevated (ppm)
    pub co2_elevated_ppm: f32,
    /// VOC considered low (ppb)
    pub voc_low_ppb: f32,
    /// Confidence lost on a CO2/VOC mismatch
    pub mismatch_penalty: f32,
    /// CO2 ppm per AQI point
    pub aqi_co2_divisor: f32,
    /// AQI points per µg/m³ PM2.5
    pub aqi_pm25_factor: f32,
    /// VOC ppb per AQI point
    pub aqi_voc_divisor: f32,
    /// Upper bound of each AQI channel
    pub aqi_max: f32,
}

impl Default for AirQualityConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            co2_min_ppm: CO2_MIN_PPM,
            co2_max_ppm: CO2_MAX_PPM,
            co2_baseline_ppm: CO2_BASELINE_PPM,
            co2_elevated_ppm: CO2_ELEVATED_PPM,
            voc_low_ppb: VOC_LOW_PPB,
            mismatch_penalty: AIR_MISMATCH_PENALTY,
            aqi_co2_divisor: AQI_CO2_DIVISOR,
            aqi_pm25_factor: AQI_PM25_FACTOR,
            aqi_voc_divisor: AQI_VOC_DIVISOR,
            aqi_max: AQI_MAX,
        }
    }
}

impl AirQualityConfig {
    /// Replace the history settings
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Set the outdoor CO2 baseline (ppm)
    pub fn with_co2_baseline(mut self, ppm: f32) -> Self {
        self.co2_baseline_ppm = ppm;
        self
    }

    /// Check thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        self.history.validate()?;
        check_range("co2", self.co2_min_ppm, self.co2_max_ppm)?;
        check_non_negative("co2_baseline_ppm", self.co2_baseline_ppm)?;
        check_non_negative("co2_elevated_ppm", self.co2_elevated_ppm)?;
        check_non_negative("voc_low_ppb", self.voc_low_ppb)?;
        check_non_negative("mismatch_penalty", self.mismatch_penalty)?;
        check_positive("aqi_co2_divisor", self.aqi_co2_divisor)?;
        check_non_negative("aqi_pm25_factor", self.aqi_pm25_factor)?;
        check_positive("aqi_voc_divisor", self.aqi_voc_divisor)?;
        check_positive("aqi_max", self.aqi_max)
    }
}

/// Battery validation and prediction settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatteryConfig {
    /// History and confidence settings
    pub history: HistoryConfig,
    /// Lowest accepted level (%)
    pub min_pct: f32,
    /// Highest accepted level (%)
    pub max_pct: f32,
    /// Rise that makes a reading suspicious (%)
    pub suspicious_rise_pct: f32,
    /// Rise rejected inside the rise window (%)
    pub max_rise_pct: f32,
    /// Window in which a large rise is rejected (ms)
    pub rise_window_ms: u64,
    /// Weight of the previous discharge rate
    pub rate_smoothing: f32,
    /// Low status threshold (%)
    pub low_threshold: f32,
    /// Critical status threshold (%)
    pub critical_threshold: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            min_pct: BATTERY_MIN_PCT,
            max_pct: BATTERY_MAX_PCT,
            suspicious_rise_pct: BATTERY_SUSPICIOUS_RISE_PCT,
            max_rise_pct: BATTERY_MAX_RISE_PCT,
            rise_window_ms: BATTERY_RISE_WINDOW_MS,
            rate_smoothing: DISCHARGE_RATE_SMOOTHING,
            low_threshold: BATTERY_LOW_PCT,
            critical_threshold: BATTERY_CRITICAL_PCT,
        }
    }
}

impl BatteryConfig {
    /// Replace the history settings
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Set the low / critical status thresholds (%)
    pub fn with_thresholds(mut self, low: f32, critical: f32) -> Self {
        self.low_threshold = low;
        self.critical_threshold = critical;
        self
    }

    /// Check thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        self.history.validate()?;
        check_range("battery", self.min_pct, self.max_pct)?;
        check_non_negative("suspicious_rise_pct", self.suspicious_rise_pct)?;
        check_non_negative("max_rise_pct", self.max_rise_pct)?;
        check_ratio("rate_smoothing", self.rate_smoothing)?;
        check_range("status_thresholds", self.critical_threshold, self.low_threshold)
    }
}

/// Configuration of all five estimators for one device type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InferenceProfile {
    /// Motion-from-illuminance settings
    pub motion: MotionConfig,
    /// Climate settings
    pub climate: ClimateConfig,
    /// Soil settings
    pub soil: SoilConfig,
    /// Air quality settings
    pub air_quality: AirQualityConfig,
    /// Battery settings
    pub battery: BatteryConfig,
}

impl InferenceProfile {
    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.motion.validate()?;
        self.climate.validate()?;
        self.soil.validate()?;
        self.air_quality.validate()?;
        self.battery.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(InferenceProfile::default().validate().is_ok());
    }

    #[test]
    fn history_size_bounds() {
        let zero = HistoryConfig::default().with_history_size(0);
        assert!(matches!(zero.validate(), Err(ConfigError::HistorySizeOutOfRange { requested: 0, .. })));

        let max = HistoryConfig::default().with_history_size(HISTORY_CAPACITY);
        assert!(max.validate().is_ok());
    }

    #[test]
    fn confidence_bounds_must_be_ordered() {
        let inverted = HistoryConfig::default()
            .with_min_confidence(60.0)
            .with_initial_confidence(50.0);
        assert!(matches!(inverted.validate(), Err(ConfigError::InvalidConfidenceBounds { .. })));

        let too_high = HistoryConfig::default().with_initial_confidence(120.0);
        assert!(too_high.validate().is_err());
    }

    #[test]
    fn negative_threshold_rejected() {
        let config = MotionConfig::default().with_change_threshold(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "change_threshold_pct", value: -1.0 })
        );
    }

    #[test]
    fn nan_threshold_rejected() {
        let config = MotionConfig::default().with_rate_threshold(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn calibration_floor_within_ceiling() {
        let config = MotionConfig { calibration_floor: 150.0, ..MotionConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "calibration_floor", value: 150.0 })
        );

        let full = MotionConfig { calibration_floor: CONFIDENCE_CEILING, ..MotionConfig::default() };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn zero_divisor_rejected() {
        let mut limits = ChannelLimits::temperature();
        limits.jump_divisor_s = 0.0;
        let config = ClimateConfig::default().with_temperature(limits);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { name: "jump_divisor_s", .. })
        ));
    }

    #[test]
    fn battery_thresholds_ordered() {
        // Critical above low makes no sense
        let config = BatteryConfig::default().with_thresholds(10.0, 20.0);
        assert!(config.validate().is_err());

        let bad_ratio = BatteryConfig { rate_smoothing: 1.5, ..BatteryConfig::default() };
        assert!(matches!(bad_ratio.validate(), Err(ConfigError::InvalidRatio { .. })));
    }

    #[test]
    fn allowed_jump_grows_with_elapsed_time() {
        let limits = ChannelLimits::temperature();
        // Within a minute the static tolerance applies
        assert_eq!(limits.allowed_jump(10.0), 5.0);
        // After ten minutes, 1°C per minute
        assert_eq!(limits.allowed_jump(600.0), 10.0);
    }
}
