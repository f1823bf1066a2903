//! Confidence Bounds and Steps
//!
//! Confidence is a heuristic 0-100 reliability score, not a probability.
//! It only ever moves by small steps.

/// Starting confidence of a fresh estimator (neutral).
pub const CONFIDENCE_INITIAL: f32 = 50.0;

/// Lowest confidence reachable through validation penalties.
pub const CONFIDENCE_FLOOR: f32 = 30.0;

/// Highest confidence.
pub const CONFIDENCE_CEILING: f32 = 100.0;

/// Floor used when a ground-truth motion report disagrees with inference.
///
/// Lower than [`CONFIDENCE_FLOOR`]: a contradicting PIR is stronger evidence
/// than a noisy reading.
pub const CALIBRATION_FLOOR: f32 = 20.0;
