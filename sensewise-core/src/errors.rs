//! Error Types
//!
//! ## Design Philosophy
//!
//! Bad sensor readings are never errors in SenseWise. A reading that is out
//! of range, jumps too far or contradicts a correlated channel degrades
//! confidence and the previous valid value is kept. The caller only sees
//! advisory signals (confidence, health, correlation flags).
//!
//! Errors exist for the two places where the *caller* made a mistake:
//!
//! - [`HistoryError`]: the history table cannot accept a new source
//!   (too many sources, name too long). The estimators swallow these and
//!   log them, the low-level [`crate::history::SourceHistory`] returns them.
//! - [`ConfigError`]: a configuration is inconsistent (history larger than
//!   the buffer capacity, negative thresholds, inverted confidence bounds).
//!
//! Both are small `Copy` enums with only `&'static str` payloads, so they
//! can be returned on embedded targets without allocation.
//!
//! ```rust
//! use sensewise_core::config::HistoryConfig;
//! use sensewise_core::ConfigError;
//!
//! let config = HistoryConfig::default().with_history_size(64);
//! assert!(matches!(
//!     config.validate(),
//!     Err(ConfigError::HistorySizeOutOfRange { requested: 64, .. })
//! ));
//! ```

use thiserror_no_std::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a sample could not be stored
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// All source slots are taken by other sources
    #[error("Source table full ({capacity} sources)")]
    SourceTableFull {
        /// Number of sources the table holds
        capacity: usize,
    },

    /// Source name does not fit the inline name buffer
    #[error("Source name of {len} bytes exceeds {max} bytes")]
    SourceNameTooLong {
        /// Length of the rejected name
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// Inconsistent estimator configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// History size is zero or above the compile-time capacity
    #[error("History size {requested} outside [1, {max}]")]
    HistorySizeOutOfRange {
        /// Requested number of samples
        requested: usize,
        /// Buffer capacity
        max: usize,
    },

    /// A threshold is negative, zero where it divides, or not finite
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold {
        /// Name of the offending field
        name: &'static str,
        /// Its value
        value: f32,
    },

    /// Confidence bounds are not ordered floor <= initial <= ceiling <= 100
    #[error("Invalid confidence bounds: floor {floor}, initial {initial}, ceiling {ceiling}")]
    InvalidConfidenceBounds {
        /// Lower bound
        floor: f32,
        /// Starting value
        initial: f32,
        /// Upper bound
        ceiling: f32,
    },

    /// A blending weight lies outside [0, 1]
    #[error("Ratio {name} = {value} outside [0, 1]")]
    InvalidRatio {
        /// Name of the offending field
        name: &'static str,
        /// Its value
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for HistoryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SourceTableFull { capacity } =>
                defmt::write!(fmt, "Source table full ({})", capacity),
            Self::SourceNameTooLong { len, max } =>
                defmt::write!(fmt, "Source name {} > {} bytes", len, max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::HistorySizeOutOfRange { requested, max } =>
                defmt::write!(fmt, "History size {} outside [1, {}]", requested, max),
            Self::InvalidThreshold { name, value } =>
                defmt::write!(fmt, "Invalid threshold {}: {}", name, value),
            Self::InvalidConfidenceBounds { floor, initial, ceiling } =>
                defmt::write!(fmt, "Confidence bounds {} <= {} <= {}", floor, initial, ceiling),
            Self::InvalidRatio { name, value } =>
                defmt::write!(fmt, "Ratio {} = {}", name, value),
        }
    }
}
