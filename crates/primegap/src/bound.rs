//! Validated upper bound of a computation.
//!
//! Input controls hand over text or raw integers; [`Bound`] is where
//! malformed values are rejected. Once inside the core every `u64` is a
//! legal `max`, with `max < 2` producing an empty sequence.
//!
//! # Examples
//!
//! ```
//! use primegap::Bound;
//!
//! let bound: Bound = "50,000".parse().unwrap();
//! assert_eq!(bound.get(), 50_000);
//!
//! assert!("-5".parse::<Bound>().is_err());
//! assert!("0".parse::<Bound>().is_err());
//! assert!("ten".parse::<Bound>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A positive inclusive upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct Bound(pub(crate) u64);

impl Bound {
    /// The smallest legal bound.
    pub const MIN: Self = Self(1);

    /// Wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBound`] for 0.
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidBound("bound must be positive".to_string()));
        }
        Ok(Self(value))
    }

    /// The wrapped value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Restricts the bound to `[min, max]`, as range-limited inputs do.
    ///
    /// A `min` of 0 is raised to 1 so the result stays positive.
    pub fn clamp(self, min: u64, max: u64) -> Self {
        let min = min.max(1);
        let max = max.max(min);
        Self(self.0.clamp(min, max))
    }

    /// Snaps the bound down to a multiple of `step`, never below `step`.
    pub fn snap(self, step: u64) -> Self {
        if step <= 1 {
            return self;
        }
        Self((self.0 / step).max(1) * step)
    }
}

impl FromStr for Bound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidBound("empty input".to_string()));
        }
        if trimmed.starts_with('-') {
            return Err(Error::InvalidBound(format!("'{trimmed}' is negative")));
        }

        // Digit group separators as typed into numeric fields
        let digits: String = trimmed.chars().filter(|c| !matches!(c, '_' | ',')).collect();
        let value = digits
            .parse::<u64>()
            .map_err(|e| Error::InvalidBound(format!("'{trimmed}': {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for Bound {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Bound> for u64 {
    fn from(bound: Bound) -> u64 {
        bound.0
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
