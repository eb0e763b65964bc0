// Host-compatible random number stream matching OpenMC's PCG-LCG `prn()`
// See: openmc/src/random_lcg.cpp
//
// The host hands the plugin a bare `uint64_t*` seed, so the seed itself is the
// stream state. `prn` advances it exactly as the host would, which keeps a
// plugin-side draw indistinguishable from a host-side one.

use crate::random_stream::RandomStream;

/// LCG multiplier (same as OpenMC)
const PRN_MULT: u64 = 6364136223846793005;
/// LCG additive constant (same as OpenMC)
const PRN_ADD: u64 = 1442695040888963407;
/// RXS-M-XS output multiplier
const PRN_OUTPUT_MULT: u64 = 12605985483714917081;
/// 2^-64, equivalent to `ldexp(x, -64)`
const PRN_NORM: f64 = 5.421010862427522e-20;

/// Advance `seed` and return a uniform f64 in [0, 1) - matches OpenMC's `prn(seed)`.
#[inline(always)]
pub fn prn(seed: &mut u64) -> f64 {
    *seed = PRN_MULT.wrapping_mul(*seed).wrapping_add(PRN_ADD);

    // PCG output permutation (RXS-M-XS variant)
    let word = ((*seed >> ((*seed >> 59) + 5)) ^ *seed).wrapping_mul(PRN_OUTPUT_MULT);
    (((word >> 43) ^ word) as f64) * PRN_NORM
}

/// The host's seed is threaded through calls by mutable reference, so a bare
/// `u64` is already a complete stream.
impl RandomStream for u64 {
    #[inline(always)]
    fn next_uniform(&mut self) -> f64 {
        prn(self)
    }
}

/// Owned OpenMC-compatible generator.
///
/// Reference: Melissa E. O'Neill, "PCG: A Family of Simple Fast Space-Efficient
/// Statistically Good Algorithms for Random Number Generation"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastRng {
    seed: u64,
}

impl FastRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate a random f64 in [0, 1)
    #[inline(always)]
    pub fn random(&mut self) -> f64 {
        prn(&mut self.seed)
    }

    /// Restart the stream, e.g. at the start of a new particle history
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Current seed, i.e. the state a host would pass as `uint64_t*`
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomStream for FastRng {
    #[inline(always)]
    fn next_uniform(&mut self) -> f64 {
        self.random()
    }
}
