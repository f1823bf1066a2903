//! Air Quality Cross-Validation
//!
//! CO2 is validated against its physical range and cross-checked against a
//! VOC reading reported in the same frame. High CO2 with clean air on the
//! VOC channel usually means one of the two sensors is off, but neither is
//! reliable enough to correct the other, so a mismatch only costs
//! confidence.
//!
//! The AQI is the rounded mean of whichever channels have reported, each
//! scaled to 0-500:
//!
//! | channel | scale |
//! |---|---|
//! | CO2 | `(ppm - 400) / 4` |
//! | PM2.5 | `µg/m³ × 4` |
//! | VOC | `ppb / 4` |

use crate::{
    config::AirQualityConfig,
    errors::ConfigResult,
    inference::{in_range, InferenceCore},
    logging::Severity,
    time::TimeSource,
    traits::{SensorInference, Validatable},
};

const CO2_RAW: &str = "co2_raw";
const CO2_VALIDATED: &str = "co2_validated";
const VOC: &str = "voc";
const PM25: &str = "pm25";

/// CO2 / VOC / PM2.5 validator and AQI aggregator
#[derive(Debug)]
pub struct AirQualityInference<T: TimeSource> {
    core: InferenceCore<T>,
    config: AirQualityConfig,
    last_co2: Option<f32>,
    last_voc: Option<f32>,
    last_pm25: Option<f32>,
}

impl<T: TimeSource> AirQualityInference<T> {
    /// Validator with default thresholds
    pub fn new(clock: T) -> Self {
        Self::build(AirQualityConfig::default(), clock)
    }

    /// Validator with validated custom thresholds
    pub fn with_config(config: AirQualityConfig, clock: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: AirQualityConfig, clock: T) -> Self {
        Self {
            core: InferenceCore::new(&config.history, clock),
            config,
            last_co2: None,
            last_voc: None,
            last_pm25: None,
        }
    }

    /// Validate a CO2 reading (ppm), optionally against a VOC reading (ppb)
    ///
    /// Returns the accepted value, or the previous one when out of range.
    /// A CO2/VOC mismatch lowers confidence but never changes the value.
    pub fn validate_co2(&mut self, raw: f32, voc: Option<f32>) -> Option<f32> {
        let now = self.core.now();
        self.core.record(CO2_RAW, Some(raw), now);

        if !in_range(raw, self.config.co2_min_ppm, self.config.co2_max_ppm) {
            self.core.log(
                Severity::Warn,
                format_args!("[AIR-QUALITY] CO2 out of range: {}ppm - rejected", raw),
            );
            return self.last_co2;
        }

        if let Some(voc) = voc.filter(Validatable::is_valid) {
            if raw > self.config.co2_elevated_ppm && voc < self.config.voc_low_ppb {
                self.core.confidence_mut().lower(self.config.mismatch_penalty);
                self.core.log(
                    Severity::Warn,
                    format_args!("[AIR-QUALITY] CO2/VOC mismatch: CO2={}ppm, VOC={}ppb - check sensor", raw, voc),
                );
            }
        }

        self.last_co2 = Some(raw);
        self.core.record(CO2_VALIDATED, Some(raw), now);

        Some(raw)
    }

    /// Store a VOC reading (ppb)
    pub fn update_voc(&mut self, value: f32) {
        if let Some(value) = self.accept_channel("VOC", value) {
            self.last_voc = Some(value);
            let now = self.core.now();
            self.core.record(VOC, Some(value), now);
        }
    }

    /// Store a PM2.5 reading (µg/m³)
    pub fn update_pm25(&mut self, value: f32) {
        if let Some(value) = self.accept_channel("PM2.5", value) {
            self.last_pm25 = Some(value);
            let now = self.core.now();
            self.core.record(PM25, Some(value), now);
        }
    }

    fn accept_channel(&self, name: &str, value: f32) -> Option<f32> {
        if value.is_valid() && value >= 0.0 {
            Some(value)
        } else {
            self.core.log(Severity::Debug, format_args!("[AIR-QUALITY] ignoring {} reading {}", name, value));
            None
        }
    }

    /// Composite air quality index (0-500)
    ///
    /// `None` until at least one channel has reported.
    pub fn calculate_aqi(&self) -> Option<u16> {
        let max = self.config.aqi_max;
        let channels = [
            self.last_co2.map(|co2| (co2 - self.config.co2_baseline_ppm) / self.config.aqi_co2_divisor),
            self.last_pm25.map(|pm25| pm25 * self.config.aqi_pm25_factor),
            self.last_voc.map(|voc| voc / self.config.aqi_voc_divisor),
        ];

        let (sum, count) = channels
            .iter()
            .flatten()
            .fold((0.0f32, 0u8), |(sum, count), aqi| (sum + aqi.clamp(0.0, max), count + 1));

        if count == 0 {
            return None;
        }

        Some(libm::roundf(sum / f32::from(count)) as u16)
    }

    /// Last accepted CO2 (ppm)
    pub fn co2(&self) -> Option<f32> {
        self.last_co2
    }

    /// Last VOC (ppb)
    pub fn voc(&self) -> Option<f32> {
        self.last_voc
    }

    /// Last PM2.5 (µg/m³)
    pub fn pm25(&self) -> Option<f32> {
        self.last_pm25
    }
}

impl<T: TimeSource> SensorInference for AirQualityInference<T> {
    type Clock = T;

    fn core(&self) -> &InferenceCore<T> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut InferenceCore<T> {
        &mut self.core
    }
}
