//! Prime records and the batch generator.
//!
//! A [`PrimeSequence`] lists every prime in `2..=max` in ascending order,
//! each paired with its distance from the preceding prime. The first record
//! of a sequence has distance 0.
//!
//! # Examples
//!
//! ```
//! use primegap::sequence::generate;
//!
//! let primes = generate(20);
//! let distances: Vec<u64> = primes.iter().map(|r| r.distance).collect();
//! assert_eq!(distances, [0, 1, 2, 2, 4, 2, 4, 2]);
//! ```

use std::ops::Index;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::primality::is_prime;

/// A prime and its distance from the previous prime in the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimeRecord {
    /// The prime itself (≥ 2).
    pub prime: u64,
    /// `prime − previous prime`, or 0 for the first record.
    pub distance: u64,
}

impl PrimeRecord {
    /// Creates a record.
    #[inline]
    pub const fn new(prime: u64, distance: u64) -> Self {
        Self { prime, distance }
    }
}

impl From<(u64, u64)> for PrimeRecord {
    fn from((prime, distance): (u64, u64)) -> Self {
        Self::new(prime, distance)
    }
}

/// Primes of one computation in ascending order.
///
/// # Invariant
///
/// `prime` is strictly increasing; the first `distance` is 0 and every later
/// `distance` equals the difference to the preceding record's `prime`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrimeSequence {
    records: Vec<PrimeRecord>,
}

impl PrimeSequence {
    /// The empty sequence.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn from_records(records: Vec<PrimeRecord>) -> Self {
        let seq = Self { records };
        debug_assert!(seq.verify(), "prime sequence invariant violated");
        seq
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no primes were found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PrimeRecord] {
        &self.records
    }

    /// Iterates over the records in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, PrimeRecord> {
        self.records.iter()
    }

    /// First record, if any.
    pub fn first(&self) -> Option<&PrimeRecord> {
        self.records.first()
    }

    /// Last (largest) record, if any.
    pub fn last(&self) -> Option<&PrimeRecord> {
        self.records.last()
    }

    /// Iterates over the primes only.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.prime)
    }

    /// Iterates over the distances only.
    pub fn distances(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.distance)
    }

    /// Consumes the sequence and returns the records.
    pub fn into_records(self) -> Vec<PrimeRecord> {
        self.records
    }

    /// Checks ordering and distance invariants.
    pub fn verify(&self) -> bool {
        let mut previous: Option<u64> = None;
        for record in &self.records {
            let expected = match previous {
                None => 0,
                Some(p) if record.prime > p => record.prime - p,
                Some(_) => return false,
            };
            if record.distance != expected {
                return false;
            }
            previous = Some(record.prime);
        }
        true
    }
}

impl Index<usize> for PrimeSequence {
    type Output = PrimeRecord;

    fn index(&self, index: usize) -> &PrimeRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = &'a PrimeRecord;
    type IntoIter = slice::Iter<'a, PrimeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-run walk state: the last prime seen (0 = none yet).
///
/// Shared by the batch generator and the incremental scan so both produce
/// identical records.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GapTracker {
    last_prime: u64,
}

impl GapTracker {
    /// Returns the record for `n` if it is prime, advancing the state.
    #[inline]
    pub(crate) fn observe(&mut self, n: u64) -> Option<PrimeRecord> {
        if !is_prime(n) {
            return None;
        }
        let distance = if self.last_prime == 0 {
            0
        } else {
            n - self.last_prime
        };
        self.last_prime = n;
        Some(PrimeRecord::new(n, distance))
    }
}

/// Scans `2..=max` in one pass.
///
/// `max < 2` yields an empty sequence.
pub fn generate(max: u64) -> PrimeSequence {
    if max < 2 {
        return PrimeSequence::new();
    }
    let mut tracker = GapTracker::default();
    let records = (2..=max).filter_map(|n| tracker.observe(n)).collect();
    PrimeSequence::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_two_is_empty() {
        assert!(generate(0).is_empty());
        assert!(generate(1).is_empty());
    }

    #[test]
    fn two_is_a_single_record() {
        let seq = generate(2);
        assert_eq!(seq.as_slice(), &[PrimeRecord::new(2, 0)]);
    }

    #[test]
    fn up_to_twenty() {
        let seq = generate(20);
        let primes: Vec<u64> = seq.primes().collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19]);
        let distances: Vec<u64> = seq.distances().collect();
        assert_eq!(distances, [0, 1, 2, 2, 4, 2, 4, 2]);
        assert!(seq.verify());
    }

    #[test]
    fn bound_is_inclusive() {
        assert_eq!(generate(97).last().map(|r| r.prime), Some(97));
        assert_eq!(generate(96).last().map(|r| r.prime), Some(89));
    }

    #[test]
    fn prime_counts() {
        // π(10^n)
        assert_eq!(generate(10).len(), 4);
        assert_eq!(generate(100).len(), 25);
        assert_eq!(generate(1_000).len(), 168);
        assert_eq!(generate(10_000).len(), 1_229);
    }

    #[test]
    fn verify_rejects_bad_distance() {
        let seq = PrimeSequence {
            records: vec![PrimeRecord::new(2, 0), PrimeRecord::new(3, 2)],
        };
        assert!(!seq.verify());
    }

    #[test]
    fn verify_rejects_unordered() {
        let seq = PrimeSequence {
            records: vec![PrimeRecord::new(3, 0), PrimeRecord::new(2, 0)],
        };
        assert!(!seq.verify());
    }

    #[test]
    fn tracker_first_distance_is_zero() {
        let mut tracker = GapTracker::default();
        assert_eq!(tracker.observe(4), None);
        assert_eq!(tracker.observe(5), Some(PrimeRecord::new(5, 0)));
        assert_eq!(tracker.observe(7), Some(PrimeRecord::new(7, 2)));
    }
}
