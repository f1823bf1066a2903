//! Hard Physical Ranges
//!
//! Readings outside these ranges are never published. They are wider than
//! what a home ever sees, so a value outside them is a firmware or radio
//! fault, not weather.

// ===== CLIMATE =====

/// Lowest plausible air temperature reported by a home sensor (°C).
///
/// Cheap Zigbee thermometers bottom out around -40°C; anything lower is
/// almost always an unsigned/signed decoding error.
pub const TEMPERATURE_MIN_C: f32 = -40.0;

/// Highest plausible air temperature reported by a home sensor (°C).
///
/// Covers attic and sun-exposed installations. Values above are usually
/// raw register dumps (e.g. 655.35 from 0xFFFF / 100).
pub const TEMPERATURE_MAX_C: f32 = 80.0;

/// Minimum relative humidity (%). Completely dry air.
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum relative humidity (%). Saturated air.
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== SOIL =====

/// Minimum volumetric soil moisture (%).
pub const MOISTURE_MIN_PCT: f32 = 0.0;

/// Maximum volumetric soil moisture (%).
pub const MOISTURE_MAX_PCT: f32 = 100.0;

// ===== AIR QUALITY =====

/// Lowest plausible CO2 concentration (ppm).
///
/// Outdoor air sits around 400 ppm; NDIR sensors reading below 300 ppm
/// are uncalibrated or still warming up.
pub const CO2_MIN_PPM: f32 = 300.0;

/// Highest plausible CO2 concentration (ppm).
///
/// Upper end of consumer NDIR sensors. Beyond this the reading is clipped
/// by the sensor itself and carries no information.
pub const CO2_MAX_PPM: f32 = 10_000.0;

// ===== BATTERY =====

/// Minimum battery level (%).
pub const BATTERY_MIN_PCT: f32 = 0.0;

/// Maximum battery level (%).
pub const BATTERY_MAX_PCT: f32 = 100.0;
