//! Tuning Profiles for SenseWise Estimators
//!
//! ## Overview
//!
//! The thresholds in `sensewise-core` are defaults for a typical indoor
//! Zigbee sensor. A soil probe in a greenhouse or a lux sensor under open
//! sky needs different numbers: daylight on a cloudy day fluctuates far
//! more than 5%, and greenhouse air sits near saturation at 40°C without
//! anything being wrong.
//!
//! A *profile* is a named [`InferenceProfile`] with one section per
//! estimator. Profiles are plain JSON documents and only name the values
//! they override; everything else keeps the core defaults:
//!
//! ```json
//! {
//!   "motion": { "change_threshold_pct": 15.0, "rate_threshold": 10.0 },
//!   "soil": { "dry_threshold_pct": 15.0 }
//! }
//! ```
//!
//! ## Built-in Profiles
//!
//! | name | intended for |
//! |---|---|
//! | `default` | core defaults, unchanged |
//! | `indoor` | living spaces: longer motion hold, narrower plausible climate band |
//! | `outdoor` | weather stations and garden sensors: tolerant motion and climate limits |
//! | `greenhouse` | high humidity and heat, earlier watering advice |
//!
//! ## Registry
//!
//! [`ProfileRegistry`] holds validated profiles behind a `RwLock`; the
//! global [`GLOBAL_REGISTRY`](registry::GLOBAL_REGISTRY) starts with the
//! built-ins and can be extended at runtime from strings or files. Profiles
//! are immutable once registered; replacing one only affects estimators
//! built afterwards.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensewise_profiles::{EstimatorFactory, ProfileRegistry};
//! use sensewise_core::time::MockTimeSource;
//!
//! let registry = ProfileRegistry::with_builtins()?;
//! let profile = registry.get("greenhouse")?;
//!
//! let clock = MockTimeSource::new(0);
//! let mut soil = profile.soil_inference(&clock)?;
//! soil.validate_moisture(22.0, None);
//! assert!(soil.predict_watering_need().unwrap().needed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builtin;
pub mod factory;
pub mod registry;
pub mod validation;

pub use factory::EstimatorFactory;
pub use registry::ProfileRegistry;
pub use sensewise_core::InferenceProfile;

use sensewise_core::ConfigError;

/// Profile-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ProfileError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Invalid profile name: {0:?}")]
    InvalidName(String),

    #[error("Invalid profile {name}: {source}")]
    Invalid { name: String, source: ConfigError },

    #[error("Profile registry lock poisoned")]
    LockPoisoned,
}

/// Result type for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;
