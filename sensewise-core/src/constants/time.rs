//! Time-Related Constants
//!
//! Conversion factors and windows. All timestamps in SenseWise are
//! milliseconds.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * 60;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * 60;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = MS_PER_HOUR * 24;

// ===== WINDOWS =====

/// Trailing window used by recent-activity detection (ms).
///
/// Sleepy end devices report every 10-60 s, so 30 s catches two
/// consecutive reports from an active sensor.
pub const DEFAULT_ACTIVITY_WINDOW_MS: u64 = 30_000;

/// Elapsed seconds assumed when a channel has no validated sample yet.
///
/// Gives the first jump check a one-minute tolerance.
pub const DEFAULT_ELAPSED_SECONDS: f32 = 60.0;
