//! Estimator construction from a profile

use sensewise_core::{
    time::TimeSource, AirQualityInference, BatteryInference, ClimateInference, ConfigResult,
    InferenceProfile, MotionLuxInference, SoilMoistureInference,
};

/// Build configured estimators from a profile section
///
/// Each device capability gets its own estimator; the clock is usually the
/// system clock or a shared reference to one.
pub trait EstimatorFactory {
    /// Motion-from-illuminance estimator
    fn motion_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<MotionLuxInference<T>>;

    /// Temperature / humidity validator
    fn climate_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<ClimateInference<T>>;

    /// Soil moisture validator
    fn soil_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<SoilMoistureInference<T>>;

    /// CO2 / VOC / PM2.5 validator
    fn air_quality_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<AirQualityInference<T>>;

    /// Battery predictor
    fn battery_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<BatteryInference<T>>;
}

impl EstimatorFactory for InferenceProfile {
    fn motion_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<MotionLuxInference<T>> {
        MotionLuxInference::with_config(self.motion, clock)
    }

    fn climate_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<ClimateInference<T>> {
        ClimateInference::with_config(self.climate, clock)
    }

    fn soil_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<SoilMoistureInference<T>> {
        SoilMoistureInference::with_config(self.soil, clock)
    }

    fn air_quality_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<AirQualityInference<T>> {
        AirQualityInference::with_config(self.air_quality, clock)
    }

    fn battery_inference<T: TimeSource>(&self, clock: T) -> ConfigResult<BatteryInference<T>> {
        BatteryInference::with_config(self.battery, clock)
    }
}
