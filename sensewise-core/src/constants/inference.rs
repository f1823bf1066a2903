//! Estimator Thresholds
//!
//! Defaults for the five estimators. Sourced from field reports on Tuya /
//! Zigbee battery sensors: lux noise under a moving person, typical climate
//! report cadence, capacitive soil probe behavior after watering, CR2032
//! discharge curves.

// ===== MOTION FROM ILLUMINANCE =====

/// Deviation from the lux baseline that counts as motion (%).
pub const LUX_CHANGE_THRESHOLD_PCT: f32 = 5.0;

/// Absolute lux rate of change that counts as motion (lux/s).
pub const LUX_RATE_THRESHOLD_PER_S: f32 = 2.0;

/// Below this deviation (%) the baseline follows the reading slowly.
pub const LUX_DRIFT_THRESHOLD_PCT: f32 = 3.0;

/// Weight of the new reading when the baseline drifts.
pub const LUX_BASELINE_ALPHA: f32 = 0.1;

/// Time motion stays active after the last trigger (ms).
pub const MOTION_HOLD_TIME_MS: u64 = 30_000;

/// Confidence gained on a motion trigger.
pub const MOTION_TRIGGER_BOOST: f32 = 10.0;

/// Confidence lost when motion times out.
pub const MOTION_CLEAR_PENALTY: f32 = 5.0;

/// Confidence gained when a direct motion sensor agrees with inference.
pub const CALIBRATION_AGREE_BOOST: f32 = 5.0;

/// Confidence lost when a direct motion sensor disagrees with inference.
pub const CALIBRATION_DISAGREE_PENALTY: f32 = 10.0;

// ===== CLIMATE =====

/// Temperature jump always tolerated between readings (°C).
pub const TEMP_MAX_JUMP_C: f32 = 5.0;

/// Seconds per tolerated degree when readings are far apart (1°C/min).
pub const TEMP_JUMP_DIVISOR_S: f32 = 60.0;

/// Largest step toward an implausible temperature (°C).
pub const TEMP_SMOOTHING_CAP_C: f32 = 2.0;

/// Humidity jump always tolerated between readings (%).
pub const HUMIDITY_MAX_JUMP_PCT: f32 = 15.0;

/// Seconds per tolerated percent when readings are far apart.
pub const HUMIDITY_JUMP_DIVISOR_S: f32 = 30.0;

/// Largest step toward an implausible humidity (%).
pub const HUMIDITY_SMOOTHING_CAP_PCT: f32 = 5.0;

/// Confidence lost on a smoothed climate reading.
pub const CLIMATE_JUMP_PENALTY: f32 = 10.0;

/// Confidence gained on an accepted climate reading.
pub const CLIMATE_ACCEPT_BOOST: f32 = 2.0;

/// Humidity above which the temperature must be moderate (%).
pub const CORRELATION_HUMIDITY_PCT: f32 = 95.0;

/// Lowest temperature compatible with near-saturated air (°C).
pub const CORRELATION_TEMP_MIN_C: f32 = 0.0;

/// Highest temperature compatible with near-saturated air (°C).
pub const CORRELATION_TEMP_MAX_C: f32 = 40.0;

/// Erratic readings tolerated before the sensor is reported unhealthy.
pub const MAX_ERRATIC_READINGS: u32 = 5;

/// Confidence a healthy sensor must exceed.
pub const HEALTHY_CONFIDENCE: f32 = 50.0;

// ===== SOIL =====

/// Moisture jump that needs corroboration (%).
pub const MOISTURE_MAX_JUMP_PCT: f32 = 20.0;

/// Uncorroborated moisture jump that gets smoothed (%).
pub const MOISTURE_SMOOTHING_JUMP_PCT: f32 = 40.0;

/// Step toward a smoothed moisture reading (%).
pub const MOISTURE_SMOOTHING_STEP_PCT: f32 = 10.0;

/// Confidence lost on a smoothed moisture reading.
pub const MOISTURE_JUMP_PENALTY: f32 = 15.0;

/// Hysteresis band of the moisture trend (%).
pub const MOISTURE_TREND_HYSTERESIS_PCT: f32 = 2.0;

/// Below this the soil is dry and needs water now (%).
pub const MOISTURE_DRY_THRESHOLD_PCT: f32 = 20.0;

/// Below this a drying soil needs water soon (%).
pub const MOISTURE_DRYING_THRESHOLD_PCT: f32 = 40.0;

/// Above this the soil is wet (%).
pub const MOISTURE_WET_THRESHOLD_PCT: f32 = 80.0;

// ===== AIR QUALITY =====

/// Outdoor CO2 baseline used by the AQI scale (ppm).
pub const CO2_BASELINE_PPM: f32 = 400.0;

/// CO2 above which the air is considered poorly ventilated (ppm).
pub const CO2_ELEVATED_PPM: f32 = 1000.0;

/// VOC below which a high CO2 reading is suspicious (ppb).
pub const VOC_LOW_PPB: f32 = 200.0;

/// Confidence lost on a CO2/VOC mismatch.
pub const AIR_MISMATCH_PENALTY: f32 = 10.0;

/// CO2 ppm per AQI point.
pub const AQI_CO2_DIVISOR: f32 = 4.0;

/// AQI points per µg/m³ of PM2.5.
pub const AQI_PM25_FACTOR: f32 = 4.0;

/// VOC ppb per AQI point.
pub const AQI_VOC_DIVISOR: f32 = 4.0;

/// Upper bound of each AQI channel.
pub const AQI_MAX: f32 = 500.0;

// ===== BATTERY =====

/// Rise that makes a battery reading suspicious (%).
pub const BATTERY_SUSPICIOUS_RISE_PCT: f32 = 5.0;

/// Rise within the suspicion window that is rejected outright (%).
pub const BATTERY_MAX_RISE_PCT: f32 = 10.0;

/// Window in which a large rise cannot be a real recharge (ms).
pub const BATTERY_RISE_WINDOW_MS: u64 = 3_600_000;

/// Weight of the previous discharge rate in the moving average.
pub const DISCHARGE_RATE_SMOOTHING: f32 = 0.7;

/// Battery level at or below which the status is low (%).
pub const BATTERY_LOW_PCT: f32 = 20.0;

/// Battery level at or below which the status is critical (%).
pub const BATTERY_CRITICAL_PCT: f32 = 10.0;
