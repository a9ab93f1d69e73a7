//! String-seeded sine hash.
//!
//! Values must be bit-identical across workers, machines and the browser preview, so the formula
//! and constants are fixed and the sine is the portable fdlibm port from `libm`, never the
//! platform's.

use crate::foundation::math::frac;

const SINE_SCALE: f64 = 9999.0;
const SINE_GAIN: f64 = 10000.0;

/// 32-bit rolling hash of `seed` (`h = h * 31 + unit` over UTF-16 code units), made non-negative.
pub fn seed_numeric(seed: &str) -> f64 {
    let h = seed
        .encode_utf16()
        .fold(0i32, |h, unit| {
            h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
        });
    // i32::MIN has no i32 absolute value.
    (i64::from(h)).abs() as f64
}

/// Pseudo-random value in `[0, 1)` for a numeric position.
pub fn seeded_random(x: f64) -> f64 {
    frac(libm::sin(x * SINE_SCALE) * SINE_GAIN)
}

/// Pseudo-random value in `[0, 1)` for `(seed, index)`.
pub fn prng(seed: &str, index: u32) -> f64 {
    seeded_random(seed_numeric(seed) + f64::from(index))
}

/// A seed hashed once and sampled many times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedHash(f64);

impl SeedHash {
    /// Hash `seed`.
    pub fn new(seed: &str) -> Self {
        Self(seed_numeric(seed))
    }

    /// Raw numeric hash.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Same value as `prng(seed, index)`.
    pub fn at(self, index: u32) -> f64 {
        seeded_random(self.0 + f64::from(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/procedural/prng.rs"]
mod tests;
