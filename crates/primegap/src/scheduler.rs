//! Cooperative driver for [`Scan`].
//!
//! The scheduler runs one chunk, reports progress, and suspends with
//! [`tokio::task::yield_now`] before the next chunk, so a single-threaded
//! runtime stays responsive for the duration of a long scan. Dropping the
//! returned future abandons the run together with all of its state.

use tracing::{debug, info};

use crate::error::Result;
use crate::scan::{Scan, DEFAULT_CHUNK_SIZE};
use crate::sequence::PrimeSequence;

/// Chunked, yielding prime-gap computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    chunk_size: u64,
}

impl Scheduler {
    /// A scheduler using [`DEFAULT_CHUNK_SIZE`].
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Sets the number of integers tested between suspension points.
    pub const fn chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Creates the scan state for one run without driving it.
    pub fn start(&self, max: u64) -> Scan {
        Scan::with_chunk_size(max, self.chunk_size)
    }

    /// Scans `2..=max`, calling `on_progress` after every chunk.
    ///
    /// Progress values are non-decreasing and the last one is 100. The
    /// callback runs inline on the task driving this future.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ResourceExhausted`] if the sequence cannot
    /// grow; the partially scanned records are discarded.
    pub async fn run<F>(self, max: u64, mut on_progress: F) -> Result<PrimeSequence>
    where
        F: FnMut(u8),
    {
        let mut scan = self.start(max);
        info!(max, chunk_size = scan.chunk_size(), "prime scan started");

        loop {
            let progress = scan.step()?;
            debug!(progress, found = scan.found(), "chunk scanned");
            on_progress(progress);
            if scan.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }

        let sequence = scan.into_sequence();
        info!(max, primes = sequence.len(), "prime scan finished");
        Ok(sequence)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
