//! Deterministic primality by 6k±1 trial division.
//!
//! Every prime above 3 is of the form `6k ± 1`, so after ruling out factors
//! 2 and 3 only the pairs `(5, 7), (11, 13), (17, 19), …` need testing, up to
//! `√n`.
//!
//! # Examples
//!
//! ```
//! use primegap::is_prime;
//!
//! assert!(!is_prime(1));
//! assert!(is_prime(2));
//! assert!(is_prime(97));
//! assert!(!is_prime(91)); // 7 × 13
//! ```

/// Returns `true` if `n` is prime.
///
/// O(√n) time, O(1) space.
#[inline]
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without overflow near u64::MAX
    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
