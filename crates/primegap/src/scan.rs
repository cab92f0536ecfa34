//! Resumable chunked walk over `2..=max`.
//!
//! A [`Scan`] owns all state of one computation: the next integer to test,
//! the last prime found, and the records accumulated so far. Each call to
//! [`Scan::step`] tests at most `chunk_size` integers and returns the
//! progress reached, so the caller decides where to suspend.
//!
//! ```text
//! next ──► [chunk 0][chunk 1] … [chunk k (short)] ──► max
//!             ▲ step()  ▲ step()        ▲ step() → 100, finished
//! ```
//!
//! # Progress
//!
//! After a chunk ending (exclusively) at `end`, progress is
//! `min(100, ⌊end · 100 / (max + 1)⌋)`. The last chunk always ends at
//! `max + 1` and therefore reports exactly 100. For `max < 2` the single
//! step scans nothing and reports 100.
//!
//! # Examples
//!
//! ```
//! use primegap::{compute_primes_sync, Scan};
//!
//! let mut scan = Scan::with_chunk_size(2_500, 1_000);
//! let mut progress = Vec::new();
//! while !scan.is_finished() {
//!     progress.push(scan.step().unwrap());
//! }
//! assert_eq!(progress, [40, 80, 100]);
//! assert_eq!(scan.into_sequence(), compute_primes_sync(2_500));
//! ```

use crate::error::{Error, Result};
use crate::sequence::{GapTracker, PrimeRecord, PrimeSequence};

/// Integers tested per chunk unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: u64 = 1_000;

/// One in-flight incremental computation.
#[derive(Debug, Clone)]
pub struct Scan {
    max: u64,
    chunk_size: u64,
    next: u64,
    progress: u8,
    finished: bool,
    tracker: GapTracker,
    records: Vec<PrimeRecord>,
}

impl Scan {
    /// Starts a scan of `2..=max` with [`DEFAULT_CHUNK_SIZE`].
    pub fn new(max: u64) -> Self {
        Self::with_chunk_size(max, DEFAULT_CHUNK_SIZE)
    }

    /// Starts a scan of `2..=max` testing `chunk_size` integers per step.
    ///
    /// A `chunk_size` of 0 is treated as 1.
    pub fn with_chunk_size(max: u64, chunk_size: u64) -> Self {
        Self {
            max,
            chunk_size: chunk_size.max(1),
            next: 2,
            progress: 0,
            finished: false,
            tracker: GapTracker::default(),
            records: Vec::new(),
        }
    }

    /// Inclusive upper bound of the scan.
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Integers tested per step.
    #[inline]
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Progress reported by the latest step (0 before the first).
    #[inline]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns `true` once the final chunk has been scanned.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Primes found so far.
    #[inline]
    pub fn found(&self) -> usize {
        self.records.len()
    }

    /// Scans the next chunk and returns the progress reached.
    ///
    /// Calling `step` after the scan finished is a no-op returning 100.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if the record buffer cannot grow.
    pub fn step(&mut self) -> Result<u8> {
        if self.finished {
            return Ok(self.progress);
        }

        // Inclusive last integer of this chunk; below `next` when max < 2
        let last = self
            .next
            .saturating_add(self.chunk_size - 1)
            .min(self.max);

        for n in self.next..=last {
            if let Some(record) = self.tracker.observe(n) {
                self.records
                    .try_reserve(1)
                    .map_err(|_| Error::ResourceExhausted {
                        primes_found: self.records.len(),
                    })?;
                self.records.push(record);
            }
        }

        let end = u128::from(last) + 1;
        let total = u128::from(self.max) + 1;
        let percent = (end * 100 / total).min(100) as u8;
        self.progress = self.progress.max(percent);

        if last >= self.max {
            self.finished = true;
        } else {
            self.next = last + 1;
        }
        Ok(self.progress)
    }

    /// Runs the remaining chunks without suspending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if the record buffer cannot grow.
    pub fn run_to_end(mut self) -> Result<PrimeSequence> {
        while !self.finished {
            self.step()?;
        }
        Ok(self.into_sequence())
    }

    /// Consumes the scan and returns the records accumulated so far.
    pub fn into_sequence(self) -> PrimeSequence {
        PrimeSequence::from_records(self.records)
    }
}
