//! Per-Source History Engine
//!
//! ## Overview
//!
//! An estimator listens to several *sources*: named channels of raw samples
//! such as `"lux"`, `"temp_raw"` or `"battery"`. [`SourceHistory`] keeps one
//! bounded ring buffer per source and answers the two temporal questions
//! every estimator asks:
//!
//! - **How fast is it moving?** [`SourceHistory::rate_of_change`] over the
//!   newest (up to) three samples, in units per second
//! - **Has it moved lately?** [`SourceHistory::has_recent_activity`] inside a
//!   trailing window
//!
//! ## Memory
//!
//! Source names and buffers are stored inline in a fixed-capacity index map,
//! so recording never allocates. A source that does not fit (too many
//! sources, name too long) is refused with a [`HistoryError`]; the caller
//! decides whether that matters. Unknown sources read as empty history.
//!
//! ## Rate Calculation
//!
//! ```text
//! samples:  ... (v1, t1) (v2, t2) (v3, t3)
//!                  └──── first     last ───┘
//! rate = (v3 - v1) / ((t3 - t1) / 1000)
//! ```
//!
//! Three samples rather than two damp single-report jitter; zero elapsed
//! time (batched reports with one timestamp) yields a rate of 0.

use heapless::FnvIndexMap;

use crate::{
    buffer::CircularBuffer,
    constants::{
        buffers::{HISTORY_CAPACITY, MAX_SOURCES, MAX_SOURCE_NAME_LEN},
        time::MS_PER_SECOND,
    },
    errors::{HistoryError, HistoryResult},
    time::{elapsed_ms, Timestamp},
    traits::Sample,
};

/// Inline source name
pub type SourceName = heapless::String<MAX_SOURCE_NAME_LEN>;

/// Ring buffer holding one source's samples
pub type SourceBuffer = CircularBuffer<HISTORY_CAPACITY>;

/// Samples used by the rate-of-change estimate
const RATE_WINDOW_SAMPLES: usize = 3;

/// Bounded time-series storage keyed by source name
#[derive(Debug, Clone)]
pub struct SourceHistory {
    sources: FnvIndexMap<SourceName, SourceBuffer, MAX_SOURCES>,
    history_size: usize,
}

impl SourceHistory {
    /// Create an empty history keeping `history_size` samples per source
    pub fn new(history_size: usize) -> Self {
        Self {
            sources: FnvIndexMap::new(),
            history_size: history_size.clamp(1, HISTORY_CAPACITY),
        }
    }

    /// Samples kept per source
    pub fn history_size(&self) -> usize {
        self.history_size
    }

    /// Number of sources with at least one recorded sample
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn key(source: &str) -> HistoryResult<SourceName> {
        let mut name = SourceName::new();
        name.push_str(source).map_err(|_| HistoryError::SourceNameTooLong {
            len: source.len(),
            max: MAX_SOURCE_NAME_LEN,
        })?;
        Ok(name)
    }

    /// Append a sample, evicting the oldest once the source is full
    pub fn record(&mut self, source: &str, sample: Sample) -> HistoryResult<()> {
        let key = Self::key(source)?;

        if let Some(buffer) = self.sources.get_mut(&key) {
            buffer.push(sample);
            return Ok(());
        }

        let mut buffer = SourceBuffer::with_limit(self.history_size);
        buffer.push(sample);
        self.sources
            .insert(key, buffer)
            .map_err(|_| HistoryError::SourceTableFull { capacity: MAX_SOURCES })?;
        Ok(())
    }

    /// Buffer of a source, `None` if nothing was recorded for it
    pub fn get(&self, source: &str) -> Option<&SourceBuffer> {
        let key = Self::key(source).ok()?;
        self.sources.get(&key)
    }

    /// Number of samples stored for a source
    pub fn len(&self, source: &str) -> usize {
        self.get(source).map_or(0, SourceBuffer::len)
    }

    /// Most recent sample of a source
    pub fn last(&self, source: &str) -> Option<&Sample> {
        self.get(source)?.last()
    }

    /// Rate of change in units per second over the newest three samples
    ///
    /// Returns 0 with fewer than two samples or zero elapsed time.
    pub fn rate_of_change(&self, source: &str) -> f32 {
        let Some(buffer) = self.get(source) else {
            return 0.0;
        };
        if buffer.len() < 2 {
            return 0.0;
        }

        let mut recent = buffer.tail(RATE_WINDOW_SAMPLES);
        let (Some(first), Some(last)) = (recent.next(), recent.last()) else {
            return 0.0;
        };

        let elapsed = elapsed_ms(first.timestamp, last.timestamp);
        if elapsed == 0 {
            return 0.0;
        }

        (last.value - first.value) * MS_PER_SECOND as f32 / elapsed as f32
    }

    /// Check whether a source changed inside the trailing window
    ///
    /// True iff at least two samples are younger than `window_ms` and they
    /// are not all equal.
    pub fn has_recent_activity(&self, source: &str, now: Timestamp, window_ms: u64) -> bool {
        let Some(buffer) = self.get(source) else {
            return false;
        };

        let mut count = 0usize;
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for sample in buffer.iter().filter(|s| elapsed_ms(s.timestamp, now) < window_ms) {
            count += 1;
            min = min.min(sample.value);
            max = max.max(sample.value);
        }

        count >= 2 && max - min > 0.0
    }

    /// Forget every source
    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

impl Default for SourceHistory {
    fn default() -> Self {
        Self::new(crate::constants::buffers::DEFAULT_HISTORY_SIZE)
    }
}
