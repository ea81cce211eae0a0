//! Seeded pseudo-random stream.
//!
//! A [`Random`] is built from an ordered list of 32-bit seed words and
//! yields the same draws for the same list on every platform. Generation
//! derives a fresh stream per node from the node's coordinates and seeds,
//! so regenerating a branch reproduces it exactly.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use units::Fixed;

#[derive(Clone)]
pub struct Random {
    rng: ChaChaRng,
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl Random {
    /// A stream seeded from an ordered list of words. The list length is
    /// absorbed too, so `[1]` and `[1, 0]` give different streams.
    pub fn new(seeds: &[u32]) -> Self {
        let mut state = seeds.len() as u64;
        for &word in seeds {
            state = splitmix64(&mut state) ^ word as u64;
        }

        let mut seed = [0u8; 32];
        for chunk in seed.chunks_exact_mut(8) {
            chunk.copy_from_slice(&splitmix64(&mut state).to_le_bytes());
        }
        Self {
            rng: ChaChaRng::from_seed(seed),
        }
    }

    /// A full-range 32-bit draw.
    pub fn int32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Uniform in `[0, n)`; zero when `n` is zero.
    pub fn int32_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Uniform in `[min, max]`, both ends inclusive.
    pub fn int32_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform in `[0, 1)` with 32 random fraction bits.
    pub fn fixed(&mut self) -> Fixed {
        Fixed::from_raw(self.rng.next_u32() as i64)
    }

    /// Product of `n` fixed draws, biased toward zero as `n` grows.
    pub fn n_fixed(&mut self, n: u32) -> Fixed {
        let mut value = self.fixed();
        for _ in 1..n {
            value *= self.fixed();
        }
        value
    }

    /// Uniform in `[0, 1)`.
    pub fn double(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform in `[0, max)`.
    pub fn double_below(&mut self, max: f64) -> f64 {
        self.double() * max
    }

    /// Product of `n` double draws.
    pub fn n_double(&mut self, n: u32) -> f64 {
        let mut value = self.double();
        for _ in 1..n {
            value *= self.double();
        }
        value
    }
}

impl std::fmt::Debug for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Random").finish_non_exhaustive()
    }
}
