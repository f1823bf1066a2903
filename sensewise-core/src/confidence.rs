//! Confidence Score Lifecycle
//!
//! ## Overview
//!
//! Each estimator carries one confidence score: a heuristic 0-100 signal of
//! how much its recent output can be trusted. It is *not* a calibrated
//! probability. The device layer uses it to decide whether to surface a
//! warning, and automations can gate on it.
//!
//! ## Rules
//!
//! - The score starts at the configured initial value (default 50, neutral)
//! - It only moves by bounded steps: [`Confidence::raise`] caps at the
//!   ceiling, [`Confidence::lower`] stops at the floor
//! - It is never assigned an absolute value after construction
//!
//! ```text
//! 100 ┤            ╭──╮ trigger +10
//!     │       ╭────╯  ╰─╮ clear -5
//!  50 ┼───────╯         ╰──────
//!  30 ┤ - - - - - - - - - - - - floor
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sensewise_core::confidence::Confidence;
//!
//! let mut confidence = Confidence::new(50.0, 30.0);
//! confidence.raise(10.0);
//! assert_eq!(confidence.score(), 60);
//!
//! confidence.lower(100.0);
//! assert_eq!(confidence.score(), 30); // floor
//! ```

use crate::constants::confidence::CONFIDENCE_CEILING;

/// Bounded heuristic reliability score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidence {
    value: f32,
    floor: f32,
}

impl Confidence {
    /// Create a score starting at `initial` with penalties stopping at `floor`
    pub fn new(initial: f32, floor: f32) -> Self {
        let floor = floor.clamp(0.0, CONFIDENCE_CEILING);
        Self {
            value: initial.clamp(floor, CONFIDENCE_CEILING),
            floor,
        }
    }

    /// Increase by `step`, capped at 100
    pub fn raise(&mut self, step: f32) {
        self.value = (self.value + step).min(CONFIDENCE_CEILING);
    }

    /// Decrease by `step`, stopping at the configured floor
    pub fn lower(&mut self, step: f32) {
        self.lower_to(step, self.floor);
    }

    /// Decrease by `step`, stopping at an explicit floor
    ///
    /// Ground-truth calibration uses a lower floor than validation penalties.
    /// The floor is capped at 100.
    pub fn lower_to(&mut self, step: f32, floor: f32) {
        self.value = (self.value - step).max(floor.min(CONFIDENCE_CEILING));
    }

    /// Raw score
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Configured floor
    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Score rounded to an integer percentage
    pub fn score(&self) -> u8 {
        libm::roundf(self.value) as u8
    }

    /// Check if the score is strictly above `threshold`
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.value > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial() {
        let confidence = Confidence::new(50.0, 30.0);
        assert_eq!(confidence.score(), 50);
        assert_eq!(confidence.floor(), 30.0);
    }

    #[test]
    fn raise_caps_at_ceiling() {
        let mut confidence = Confidence::new(95.0, 30.0);
        confidence.raise(10.0);
        assert_eq!(confidence.value(), 100.0);
    }

    #[test]
    fn lower_stops_at_floor() {
        let mut confidence = Confidence::new(35.0, 30.0);
        confidence.lower(10.0);
        assert_eq!(confidence.value(), 30.0);
    }

    #[test]
    fn explicit_floor_goes_below_default() {
        let mut confidence = Confidence::new(30.0, 30.0);
        confidence.lower_to(10.0, 20.0);
        assert_eq!(confidence.value(), 20.0);

        // The regular penalty clamps back up to its own floor
        confidence.lower(5.0);
        assert_eq!(confidence.value(), 30.0);
    }

    #[test]
    fn explicit_floor_capped_at_ceiling() {
        let mut confidence = Confidence::new(50.0, 30.0);
        confidence.lower_to(10.0, 150.0);
        assert_eq!(confidence.value(), 100.0);
        assert_eq!(confidence.score(), 100);
    }

    #[test]
    fn score_rounds() {
        let mut confidence = Confidence::new(50.0, 0.0);
        confidence.raise(2.4);
        assert_eq!(confidence.score(), 52);
        confidence.raise(0.2);
        assert_eq!(confidence.score(), 53);
    }

    #[test]
    fn initial_clamped_into_bounds() {
        assert_eq!(Confidence::new(10.0, 30.0).value(), 30.0);
        assert_eq!(Confidence::new(150.0, 30.0).value(), 100.0);
    }
}
