//! Park–Miller "minimal standard" pseudo-random generator.
//!
//! Every piece of generated content (river sources, settlement placement,
//! polygon outlines) derives its randomness from one of these generators, so
//! a world can be reproduced exactly from its seed and the coordinates of the
//! thing being generated.

/// Modulus of the recurrence, `2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the recurrence.
pub const MULTIPLIER: u64 = 16_807;

/// Seeded multiplicative congruential generator returning values in `[0, 1)`.
///
/// The state is always in `[1, MODULUS - 1]`, so the sequence never collapses
/// to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkMiller {
    state: u64,
}

impl ParkMiller {
    /// Create a generator from a real-valued seed.
    ///
    /// The seed is reduced modulo [`MODULUS`]; its fractional part is
    /// discarded. Zero and non-finite seeds map to `MODULUS - 1`.
    pub fn new(seed: f64) -> Self {
        Self {
            state: fold_seed(seed),
        }
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the recurrence and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn int_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as f64;
        lo + ((self.next_f64() * span).floor() as i64).min(hi - lo - 1)
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    pub fn index(&mut self, len: usize) -> usize {
        self.int_range(0, len as i64) as usize
    }

    /// Returns `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform angle in `[0, 2π)`.
    pub fn angle(&mut self) -> f64 {
        self.next_f64() * std::f64::consts::TAU
    }

    /// Pick a uniformly random element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index(items.len()))
    }
}

fn fold_seed(seed: f64) -> u64 {
    if !seed.is_finite() {
        return MODULUS - 1;
    }
    let folded = seed.rem_euclid(MODULUS as f64).floor() as u64;
    if folded == 0 { MODULUS - 1 } else { folded }
}
