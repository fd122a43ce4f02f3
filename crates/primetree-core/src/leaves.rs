//! Leaf set generation.
//!
//! The leaf universe is the first `N` primes in ascending order. Primality
//! is decided by deterministic trial division against `6k ± 1` candidates,
//! which is exact for every `u64` reached here.

use log::debug;

use crate::error::{Error, Result};

/// Largest leaf set `generate_leaves` will produce (2^20 primes).
pub const MAX_LEAF_COUNT: usize = 1 << 20;

/// Returns true if `n` is prime.
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

    let mut i: u64 = 5;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Iterator over the primes in ascending order, starting at 2.
#[derive(Debug, Clone)]
pub struct Primes {
    next_candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Self { next_candidate: 2 }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.next_candidate < u64::MAX {
            let candidate = self.next_candidate;
            self.next_candidate += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Generate the first `count` primes.
///
/// The result is strictly increasing and a pure function of `count`.
pub fn generate_leaves(count: usize) -> Result<Vec<u64>> {
    if count > MAX_LEAF_COUNT {
        return Err(Error::LeafCountTooLarge {
            count,
            max: MAX_LEAF_COUNT,
        });
    }

    let leaves: Vec<u64> = Primes::new().take(count).collect();
    debug!(
        "generated {} leaves (largest: {:?})",
        leaves.len(),
        leaves.last()
    );

    Ok(leaves)
}
