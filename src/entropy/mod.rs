//! Randomness sources.
//!
//! Two kinds of source exist and they are never mixed: [`SecureSource`] wraps
//! an operating-system backed CSPRNG and is the only source allowed for
//! secret material, while [`LaggedFibonacci`] is a reproducible stream keyed
//! by a caller-chosen seed and is used only where the caller asked for
//! repeatable output.

mod cooked;
pub mod lagged;
pub mod secure;
pub mod seed;

pub use lagged::LaggedFibonacci;
pub use secure::SecureSource;
pub use seed::seed_from_str;

use crate::error::Result;

/// Uniform integer draws over `[0, bound)`.
///
/// `bound` must be non-zero.
pub trait Draw {
    fn below(&mut self, bound: u64) -> Result<u64>;

    fn index(&mut self, len: usize) -> Result<usize> {
        self.below(len as u64).map(|value| value as usize)
    }
}

/// Uniform draw over the full `u64` range by rejection, so no residue class
/// of `bound` is favoured.
pub(crate) fn reject_below<F>(bound: u64, mut next: F) -> Result<u64>
where
    F: FnMut() -> Result<u64>,
{
    assert!(bound > 0, "bound must be non-zero");
    // 2^64 mod bound
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let value = next()?;
        if value >= threshold {
            return Ok(value % bound);
        }
    }
}
