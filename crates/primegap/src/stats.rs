//! Gap statistics and the gap frequency distribution.
//!
//! Both aggregates are pure functions of a [`PrimeSequence`]: they never
//! mutate their input and are recomputed from scratch on every call.
//!
//! | Aggregate | First record's 0 distance |
//! |-----------|---------------------------|
//! | [`Stats`] max / mean | excluded |
//! | [`Stats`] count | included |
//! | [`DistanceDistribution`] | included |
//!
//! # Examples
//!
//! ```
//! use primegap::{compute_primes_sync, DistanceDistribution};
//!
//! let dist = DistanceDistribution::compute(&compute_primes_sync(20));
//! let pairs: Vec<(u64, usize)> = dist.iter().map(|e| (e.distance, e.count)).collect();
//! assert_eq!(pairs, [(2, 4), (4, 2), (0, 1), (1, 1)]);
//! ```

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequence::PrimeSequence;

/// Summary statistics of one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    /// Number of primes.
    pub count: usize,
    /// Largest gap, ignoring the first record.
    pub max_distance: u64,
    /// Mean gap, ignoring the first record; 0 with fewer than two primes.
    pub avg_distance: f64,
}

impl Stats {
    /// Computes the statistics of `sequence`.
    pub fn compute(sequence: &PrimeSequence) -> Self {
        if sequence.is_empty() {
            return Self::default();
        }

        let gaps = &sequence.as_slice()[1..];
        let max_distance = gaps.iter().map(|r| r.distance).max().unwrap_or(0);
        let avg_distance = if gaps.is_empty() {
            0.0
        } else {
            let sum: u128 = gaps.iter().map(|r| u128::from(r.distance)).sum();
            sum as f64 / gaps.len() as f64
        };

        Self {
            count: sequence.len(),
            max_distance,
            avg_distance,
        }
    }
}

/// Occurrences of one gap value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceCount {
    /// Gap value.
    pub distance: u64,
    /// Number of records with this gap (≥ 1).
    pub count: usize,
}

/// Gap frequencies ordered by descending count.
///
/// # Invariant
///
/// Distances are unique and counts sum to the length of the source sequence.
/// Entries with equal counts keep the order in which their distance first
/// occurs in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DistanceDistribution {
    entries: Vec<DistanceCount>,
}

impl DistanceDistribution {
    /// Tallies every record of `sequence`, including the first.
    pub fn compute(sequence: &PrimeSequence) -> Self {
        // Entries in first-occurrence order, indexed by distance
        let mut entries: Vec<DistanceCount> = Vec::new();
        let mut index: HashMap<u64, usize> = HashMap::new();

        for record in sequence {
            match index.get(&record.distance) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(record.distance, entries.len());
                    entries.push(DistanceCount {
                        distance: record.distance,
                        count: 1,
                    });
                }
            }
        }

        // Stable: ties stay in first-occurrence order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Number of distinct gap values.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for the distribution of an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in distribution order.
    #[inline]
    pub fn as_slice(&self) -> &[DistanceCount] {
        &self.entries
    }

    /// Iterates over the entries in distribution order.
    pub fn iter(&self) -> std::slice::Iter<'_, DistanceCount> {
        self.entries.iter()
    }

    /// The `limit` most frequent gaps.
    pub fn top(&self, limit: usize) -> &[DistanceCount] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Sum of all counts, equal to the source sequence length.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count of a specific gap value, 0 if it never occurs.
    pub fn count_of(&self, distance: u64) -> usize {
        self.entries
            .iter()
            .find(|e| e.distance == distance)
            .map_or(0, |e| e.count)
    }

    /// Share of `entry` in the total, as a percentage.
    pub fn percentage(&self, entry: &DistanceCount) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        entry.count as f64 / total as f64 * 100.0
    }
}

impl<'a> IntoIterator for &'a DistanceDistribution {
    type Item = &'a DistanceCount;
    type IntoIter = std::slice::Iter<'a, DistanceCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
