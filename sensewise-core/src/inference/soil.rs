//! Soil Moisture Validation and Watering Prediction
//!
//! Capacitive soil probes are noisy and occasionally report a reading far
//! from the last one. Unlike air temperature, soil moisture legitimately
//! jumps when a plant is watered or rain arrives, so a large step is only
//! smoothed when nothing else in the environment moved: if the temperature
//! channel shows recent activity the step is taken as a real event.
//!
//! ## Jump Policy
//!
//! | jump | temperature active | result |
//! |---|---|---|
//! | ≤ 20% | any | accepted |
//! | 20-40% | any | accepted, logged as environmental |
//! | > 40% | yes | accepted, logged as environmental |
//! | > 40% | no | stepped 10% toward the reading, confidence -15 |

use crate::{
    config::SoilConfig,
    errors::ConfigResult,
    inference::{in_range, step_toward, InferenceCore},
    logging::Severity,
    time::TimeSource,
    traits::SensorInference,
};

const MOISTURE_RAW: &str = "moisture_raw";
const MOISTURE_VALIDATED: &str = "moisture_validated";
const TEMPERATURE: &str = "temperature";

/// Direction of the moisture level between the last two valid readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoistureTrend {
    /// Falling by more than the hysteresis
    Drying,
    /// Within the hysteresis band
    #[default]
    Stable,
    /// Rising by more than the hysteresis
    Wetting,
}

impl MoistureTrend {
    /// Lowercase name for device capabilities
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drying => "drying",
            Self::Stable => "stable",
            Self::Wetting => "wetting",
        }
    }
}

/// How soon watering is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Urgency {
    /// Water now
    High,
    /// Water soon
    Medium,
    /// Soil is fine
    Low,
    /// Soil is wet, do not water
    None,
}

/// Watering recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WateringAdvice {
    /// Whether the plant should be watered
    pub needed: bool,
    /// How soon
    pub urgency: Urgency,
    /// Human-readable summary
    pub message: &'static str,
}

/// Soil moisture validator and watering predictor
#[derive(Debug)]
pub struct SoilMoistureInference<T: TimeSource> {
    core: InferenceCore<T>,
    config: SoilConfig,
    last_valid: Option<f32>,
    trend: MoistureTrend,
}

impl<T: TimeSource> SoilMoistureInference<T> {
    /// Validator with default thresholds
    pub fn new(clock: T) -> Self {
        Self::build(SoilConfig::default(), clock)
    }

    /// Validator with validated custom thresholds
    pub fn with_config(config: SoilConfig, clock: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: SoilConfig, clock: T) -> Self {
        Self {
            core: InferenceCore::new(&config.history, clock),
            config,
            last_valid: None,
            trend: MoistureTrend::Stable,
        }
    }

    /// Validate a moisture reading (%), optionally with the current soil temperature
    ///
    /// Returns the published moisture, or the previous valid value when the
    /// reading is rejected.
    pub fn validate_moisture(&mut self, raw: f32, temperature: Option<f32>) -> Option<f32> {
        let now = self.core.now();
        self.core.record(MOISTURE_RAW, Some(raw), now);

        if !in_range(raw, self.config.min_pct, self.config.max_pct) {
            self.core.log(
                Severity::Warn,
                format_args!("[SOIL] moisture out of range: {}% - rejected", raw),
            );
            return self.last_valid;
        }

        let accepted = match self.last_valid {
            Some(last) => {
                let jump = libm::fabsf(raw - last);
                let accepted = self.apply_jump_policy(last, raw, jump);
                self.trend = self.classify(last, accepted);
                accepted
            }
            None => raw,
        };

        self.last_valid = Some(accepted);
        self.core.record(MOISTURE_VALIDATED, Some(accepted), now);
        self.core.record(TEMPERATURE, temperature, now);

        Some(accepted)
    }

    fn apply_jump_policy(&mut self, last: f32, raw: f32, jump: f32) -> f32 {
        if jump <= self.config.max_jump_pct {
            return raw;
        }

        let environmental = self.core.has_recent_activity(TEMPERATURE);
        if !environmental && jump > self.config.smoothing_jump_pct {
            let smoothed = step_toward(last, raw, self.config.smoothing_step_pct);
            self.core.confidence_mut().lower(self.config.jump_penalty);
            self.core.log(
                Severity::Warn,
                format_args!("[SOIL] moisture jump {:.1} -> {:.1}% - smoothed to {:.1}", last, raw, smoothed),
            );
            return smoothed;
        }

        self.core.log(
            Severity::Info,
            format_args!("[SOIL] large moisture change {:.1} -> {:.1}% accepted as environmental", last, raw),
        );
        raw
    }

    fn classify(&self, last: f32, current: f32) -> MoistureTrend {
        let band = self.config.trend_hysteresis_pct;
        if current > last + band {
            MoistureTrend::Wetting
        } else if current < last - band {
            MoistureTrend::Drying
        } else {
            MoistureTrend::Stable
        }
    }

    /// Watering recommendation from the current level and trend
    ///
    /// `None` before the first valid reading.
    pub fn predict_watering_need(&self) -> Option<WateringAdvice> {
        let moisture = self.last_valid?;

        let advice = if moisture < self.config.dry_threshold_pct {
            WateringAdvice { needed: true, urgency: Urgency::High, message: "Soil is dry - water now" }
        } else if moisture < self.config.drying_threshold_pct && self.trend == MoistureTrend::Drying {
            WateringAdvice { needed: true, urgency: Urgency::Medium, message: "Soil drying - water soon" }
        } else if moisture > self.config.wet_threshold_pct {
            WateringAdvice { needed: false, urgency: Urgency::None, message: "Soil is wet - do not water" }
        } else {
            WateringAdvice { needed: false, urgency: Urgency::Low, message: "Moisture level OK" }
        };

        Some(advice)
    }

    /// Trend between the last two valid readings
    pub fn trend(&self) -> MoistureTrend {
        self.trend
    }

    /// Last published moisture
    pub fn moisture(&self) -> Option<f32> {
        self.last_valid
    }
}

impl<T: TimeSource> SensorInference for SoilMoistureInference<T> {
    type Clock = T;

    fn core(&self) -> &InferenceCore<T> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut InferenceCore<T> {
        &mut self.core
    }
}
