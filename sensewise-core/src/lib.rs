//! Inference and validation engine for SenseWise
//!
//! Sits between the raw attribute reports of battery-powered wireless
//! sensors and the values a home automation hub publishes. Readings are
//! range-checked, jump-limited and cross-checked against correlated
//! channels; missing signals are inferred (presence from illuminance,
//! remaining battery days from discharge rate).
//!
//! Key constraints:
//! - No allocation per reading (fixed-capacity history)
//! - No I/O, timers or background tasks
//! - Every method is O(history size)
//!
//! ```no_run
//! use sensewise_core::{BatteryInference, SensorInference};
//! use sensewise_core::time::SystemTime;
//!
//! let mut battery = BatteryInference::new(SystemTime);
//!
//! // Publish whatever the estimator accepts
//! if let Some(level) = battery.validate_battery(87.0) {
//!     println!("battery {}% ({:?})", level, battery.status());
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod logging;

pub mod buffer;
pub mod confidence;
pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod inference;
pub mod time;
pub mod traits;

// Public API
pub use config::{
    AirQualityConfig, BatteryConfig, ChannelLimits, ClimateConfig, HistoryConfig, InferenceProfile,
    MotionConfig, SoilConfig,
};
pub use errors::{ConfigError, ConfigResult, HistoryError, HistoryResult};
pub use inference::{
    AirQualityInference, BatteryInference, BatteryStatus, ClimateInference, InferenceCore,
    MoistureTrend, MotionLuxInference, MotionState, SensorHealth, SoilMoistureInference, Urgency,
    WateringAdvice,
};
pub use traits::{Sample, SensorInference};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
