//! History Buffer Limits
//!
//! Every estimator keeps its history inline (no heap in the hot path), so
//! capacities are compile-time constants.
//!
//! Memory per estimator ≈ MAX_SOURCES × (HISTORY_CAPACITY × 16 + 48) bytes,
//! about 4.8 KB with the defaults.

/// Default number of samples kept per source.
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Compile-time capacity of a per-source buffer.
///
/// The configured history size may not exceed this.
pub const HISTORY_CAPACITY: usize = 16;

/// Maximum number of distinct sources per estimator.
///
/// Must be a power of two (index map requirement). Built-in estimators use
/// at most five.
pub const MAX_SOURCES: usize = 16;

/// Maximum length of a source name in bytes.
pub const MAX_SOURCE_NAME_LEN: usize = 32;

/// Capacity of a formatted log line. Longer lines are truncated.
pub const LOG_LINE_CAPACITY: usize = 160;
