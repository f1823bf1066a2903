//! Constants for SenseWise Core
//!
//! Centralized defaults for every threshold the estimators use. Each value is
//! only a default: the config structs in [`crate::config`] start from these and
//! can override any of them per device type.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Hard physical ranges of the exposed quantities
//! - **Time**: Unit conversions and windows
//! - **Confidence**: Confidence lifecycle bounds and steps
//! - **Inference**: Per-estimator thresholds (motion, climate, soil, air, battery)
//! - **Buffers**: History capacity and source table limits
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Group related constants together

/// Hard physical ranges for exposed values.
pub mod physics;

/// Time unit conversions and activity windows.
pub mod time;

/// Confidence score bounds and adjustment steps.
pub mod confidence;

/// Estimator thresholds and smoothing parameters.
pub mod inference;

/// History capacity and source table limits.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use physics::{
    TEMPERATURE_MIN_C, TEMPERATURE_MAX_C,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    MOISTURE_MIN_PCT, MOISTURE_MAX_PCT,
    BATTERY_MIN_PCT, BATTERY_MAX_PCT,
    CO2_MIN_PPM, CO2_MAX_PPM,
};

pub use time::{MS_PER_SECOND, MS_PER_HOUR, MS_PER_DAY, DEFAULT_ACTIVITY_WINDOW_MS};

pub use confidence::{CONFIDENCE_INITIAL, CONFIDENCE_FLOOR, CONFIDENCE_CEILING};

pub use buffers::{DEFAULT_HISTORY_SIZE, HISTORY_CAPACITY, MAX_SOURCES, MAX_SOURCE_NAME_LEN};
