//! Fixed-Capacity Circular Buffer for Per-Source History
//!
//! ## Overview
//!
//! Every estimator keeps a short rolling history per source (`"lux"`,
//! `"temp_raw"`, ...). The history must never grow, must keep insertion order
//! and must drop the oldest sample first. A ring buffer gives all three with
//! fixed memory.
//!
//! ## Capacity vs. Limit
//!
//! The storage size `N` is a compile-time constant so the buffer can live
//! inline without heap allocation. The *limit* is chosen at runtime from
//! configuration (default 10) and may be anything in `1..=N`. The ring wraps
//! at the limit, so a buffer with limit 10 behaves exactly like a 10-slot
//! FIFO even though it reserves `N` slots.
//!
//! ```text
//! CircularBuffer<16> with limit 4, after pushing A..F:
//! ┌───┬───┬───┬───┬───┬ ─ ─ ┐
//! │ E │ F │ C │ D │ - │ ... │   ← slots beyond the limit are never touched
//! └───┴───┴───┴───┴───┴ ─ ─ ┘
//!           ↑
//!           write_pos = 2 (oldest sample)
//!
//! Logical view (oldest → newest): C, D, E, F
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sensewise_core::buffer::CircularBuffer;
//! use sensewise_core::traits::Sample;
//!
//! let mut history: CircularBuffer<16> = CircularBuffer::with_limit(3);
//! for i in 0..5 {
//!     history.push(Sample { value: i as f32, timestamp: i * 1000 });
//! }
//!
//! let values: Vec<f32> = history.iter().map(|s| s.value).collect();
//! assert_eq!(values, vec![2.0, 3.0, 4.0]);
//! ```

use crate::traits::Sample;

/// Fixed-capacity circular buffer for time-series samples
///
/// ## Internal Invariants
///
/// - `1 <= limit <= N`
/// - `write_pos < limit`
/// - `len <= limit`
/// - Iteration yields samples in insertion order
///
/// Not thread-safe; each estimator owns its buffers exclusively.
#[derive(Debug, Clone)]
pub struct CircularBuffer<const N: usize> {
    /// Storage; `None` marks slots never written
    data: [Option<Sample>; N],

    /// Index where the next write will occur, wraps at `limit`
    write_pos: usize,

    /// Current number of valid samples
    len: usize,

    /// Runtime maximum number of samples
    limit: usize,
}

impl<const N: usize> CircularBuffer<N> {
    /// Creates an empty buffer using the full capacity
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
            limit: N,
        }
    }

    /// Creates an empty buffer holding at most `limit` samples
    ///
    /// `limit` is clamped into `1..=N`. Configuration validation rejects
    /// out-of-range values before they get here.
    pub fn with_limit(limit: usize) -> Self {
        let mut buffer = Self::new();
        buffer.limit = limit.clamp(1, N);
        buffer
    }

    /// Adds a sample, evicting the oldest one once the limit is reached
    pub fn push(&mut self, sample: Sample) {
        self.data[self.write_pos] = Some(sample);
        self.write_pos = (self.write_pos + 1) % self.limit;

        if self.len < self.limit {
            self.len += 1;
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of samples this buffer keeps
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == self.limit
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&Sample> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { self.limit - 1 } else { self.write_pos - 1 };
        self.data[idx].as_ref()
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Iterate over the newest `count` samples, oldest first
    pub fn tail(&self, count: usize) -> impl Iterator<Item = &Sample> + '_ {
        self.iter().skip(self.len.saturating_sub(count))
    }

    /// Clear all samples, keeping the limit
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Gets a sample by logical index (0 = oldest, len-1 = newest)
    ///
    /// Until the ring has wrapped, logical and physical indices match.
    /// Afterwards the oldest sample sits at `write_pos`.
    fn get(&self, index: usize) -> Option<&Sample> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < self.limit {
            index
        } else {
            (self.write_pos + index) % self.limit
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over circular buffer contents
pub struct CircularBufferIter<'a, const N: usize> {
    buffer: &'a CircularBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for CircularBufferIter<'a, N> {
    type Item = &'a Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> Default for CircularBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
