//! Additive lagged Fibonacci generator, `x[n] = x[n-607] + x[n-273] mod 2^64`.
//!
//! The seeding procedure and the bounded-draw rejection rules are fixed:
//! seeded shuffles and integers are reproducible only as long as this stream
//! is bit-for-bit stable.

use super::cooked::COOKED;
use super::{reject_below, Draw};
use crate::error::Result;

const LEN: usize = 607;
const TAP: usize = 273;
const INT32_MAX: i64 = (1 << 31) - 1;
const MASK63: u64 = (1 << 63) - 1;
const ZERO_SEED_REPLACEMENT: i64 = 89_482_311;

#[derive(Clone)]
pub struct LaggedFibonacci {
    tap: usize,
    feed: usize,
    register: [u64; LEN],
}

impl LaggedFibonacci {
    pub fn new(seed: i64) -> Self {
        let mut seed = seed % INT32_MAX;
        if seed < 0 {
            seed += INT32_MAX;
        }
        if seed == 0 {
            seed = ZERO_SEED_REPLACEMENT;
        }

        let mut register = [0u64; LEN];
        let mut x = seed as i32;
        // The first 20 outputs of the Park-Miller stream are discarded.
        for _ in 0..20 {
            x = park_miller(x);
        }
        for (slot, cooked) in register.iter_mut().zip(COOKED.iter()) {
            x = park_miller(x);
            let mut word = (x as u64) << 40;
            x = park_miller(x);
            word ^= (x as u64) << 20;
            x = park_miller(x);
            word ^= x as u64;
            *slot = word ^ (*cooked as u64);
        }

        LaggedFibonacci {
            tap: 0,
            feed: LEN - TAP,
            register,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.tap = self.tap.checked_sub(1).unwrap_or(LEN - 1);
        self.feed = self.feed.checked_sub(1).unwrap_or(LEN - 1);
        let value = self.register[self.feed].wrapping_add(self.register[self.tap]);
        self.register[self.feed] = value;
        value
    }

    pub fn int63(&mut self) -> i64 {
        (self.next_u64() & MASK63) as i64
    }

    pub fn int31(&mut self) -> i32 {
        (self.int63() >> 32) as i32
    }

    /// Uniform over `[0, n)` for `0 < n <= i32::MAX`.
    pub fn int31n(&mut self, n: i32) -> i32 {
        assert!(n > 0, "bound must be positive");
        if n & (n - 1) == 0 {
            return self.int31() & (n - 1);
        }
        let max = ((1u32 << 31) - 1 - (1u32 << 31) % n as u32) as i32;
        let mut value = self.int31();
        while value > max {
            value = self.int31();
        }
        value % n
    }

    /// Uniform over `[0, n)` for `0 < n <= i64::MAX`.
    pub fn int63n(&mut self, n: i64) -> i64 {
        assert!(n > 0, "bound must be positive");
        if n & (n - 1) == 0 {
            return self.int63() & (n - 1);
        }
        let max = ((1u64 << 63) - 1 - (1u64 << 63) % n as u64) as i64;
        let mut value = self.int63();
        while value > max {
            value = self.int63();
        }
        value % n
    }
}

impl Draw for LaggedFibonacci {
    fn below(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 || bound > i64::MAX as u64 {
            return reject_below(bound, || Ok(self.next_u64()));
        }
        if bound <= i32::MAX as u64 {
            Ok(self.int31n(bound as i32) as u64)
        } else {
            Ok(self.int63n(bound as i64) as u64)
        }
    }
}

impl std::fmt::Debug for LaggedFibonacci {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaggedFibonacci")
            .field("tap", &self.tap)
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}

fn park_miller(x: i32) -> i32 {
    const A: i32 = 48_271;
    const Q: i32 = 44_488;
    const R: i32 = 3_399;

    let hi = x / Q;
    let lo = x % Q;
    let next = A * lo - R * hi;
    if next < 0 {
        next + INT32_MAX as i32
    } else {
        next
    }
}
