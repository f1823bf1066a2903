//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic reading generators for the five estimator inputs
//! - A driver that feeds a series into an estimator on a mock clock
//! - Assertion helpers for tolerances and physical ranges

#![allow(dead_code)]

use sensewise_core::time::{MockTimeSource, Timestamp};

/// One reading at a point in time
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub timestamp: Timestamp,
    pub value: f32,
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }
}

/// Series generator with noise and occasional firmware glitches
pub struct ReadingGenerator {
    rng: TestRng,
    start: Timestamp,
    interval_ms: u64,
}

impl ReadingGenerator {
    pub fn new(seed: u32, start: Timestamp, interval_ms: u64) -> Self {
        Self { rng: TestRng::new(seed), start, interval_ms }
    }

    /// Room temperature around `base` with sensor noise
    pub fn temperature(&mut self, base: f32, count: usize) -> Vec<Reading> {
        self.series(count, |rng, i| base + 0.5 * ((i as f32) * 0.05).sin() + rng.gen_range(-0.2, 0.2))
    }

    /// Temperature series with `0xFFFF / 100` glitches mixed in
    pub fn glitchy_temperature(&mut self, base: f32, count: usize, glitch_probability: f32) -> Vec<Reading> {
        self.series(count, |rng, i| {
            if rng.chance(glitch_probability) {
                655.35
            } else {
                base + 0.1 * (i as f32 % 5.0)
            }
        })
    }

    /// Soil slowly drying from `start_pct` by `loss_per_sample`
    pub fn drying_soil(&mut self, start_pct: f32, loss_per_sample: f32, count: usize) -> Vec<Reading> {
        self.series(count, |rng, i| (start_pct - loss_per_sample * i as f32 + rng.gen_range(-0.3, 0.3)).max(0.0))
    }

    /// Battery discharging linearly by `pct_per_sample`
    pub fn battery_discharge(&mut self, start_pct: f32, pct_per_sample: f32, count: usize) -> Vec<Reading> {
        self.series(count, |_, i| (start_pct - pct_per_sample * i as f32).max(0.0))
    }

    /// Arbitrary values, any of which may be out of range or non-finite
    pub fn hostile(&mut self, count: usize) -> Vec<Reading> {
        self.series(count, |rng, _| match rng.next_u32() % 6 {
            0 => f32::NAN,
            1 => f32::INFINITY,
            2 => -rng.gen_range(0.0, 1_000.0),
            3 => rng.gen_range(100.0, 100_000.0),
            _ => rng.gen_range(0.0, 100.0),
        })
    }

    fn series(&mut self, count: usize, mut value: impl FnMut(&mut TestRng, usize) -> f32) -> Vec<Reading> {
        (0..count)
            .map(|i| Reading {
                timestamp: self.start + i as u64 * self.interval_ms,
                value: value(&mut self.rng, i),
            })
            .collect()
    }
}

/// Feed every reading at its timestamp and collect the outputs
pub fn drive<R>(clock: &MockTimeSource, readings: &[Reading], mut step: impl FnMut(f32) -> R) -> Vec<R> {
    readings
        .iter()
        .map(|reading| {
            clock.set(reading.timestamp);
            step(reading.value)
        })
        .collect()
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        let value = $value;
        if !(value >= $min && value <= $max) {
            panic!("Value {} outside physical range [{}, {}]", value, $min, $max);
        }
    };
}
