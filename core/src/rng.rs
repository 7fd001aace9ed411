//! Random Number Generator

use crate::base::*;

/// 32-bit precision value for 1 - epsilon.
pub const FLOAT_ONE_MINUS_EPSILON: f32 = hexf32!("0x1.fffffep-1");

/// 1 - epsilon in the precision we've selected for `Float`.
pub const ONE_MINUS_EPSILON: Float = FLOAT_ONE_MINUS_EPSILON;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// Implements the PCG pseudo-random number generator.
#[derive(Clone)]
pub struct RNG {
    state: u64,
    inc: u64,
}

impl Default for RNG {
    /// Return a new instance of `RNG` with default state and stream.
    fn default() -> Self {
        Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
}

impl RNG {
    /// Create a new `RNG` by seeding it with the given starting sequence.
    ///
    /// * `sequence_index` - The starting sequence to seed with.
    pub fn new(sequence_index: u64) -> Self {
        let mut ret = Self { state: 0, inc: 0 };
        ret.set_sequence(sequence_index);
        ret
    }

    /// Initialize the random number generator sequence.
    ///
    /// * `init_seq` - The starting sequence to seed with.
    #[inline(always)]
    fn set_sequence(&mut self, init_seq: u64) {
        self.state = 0;
        self.inc = init_seq.wrapping_shl(1) | 1;
        let _ = self.uniform_u32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        let _ = self.uniform_u32();
    }

    /// Returns a uniformly distributed u32 value.
    #[inline(always)]
    pub fn uniform_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;

        (xor_shifted >> rot) | (xor_shifted << (rot.wrapping_neg() & 31))
    }

    /// Returns a uniformly distributed u32 value less than the given bound.
    ///
    /// * `b` - The upper bound.
    pub fn bounded_uniform_u32(&mut self, b: u32) -> u32 {
        let threshold = b.wrapping_neg() % b;
        loop {
            let r = self.uniform_u32();
            if r >= threshold {
                return r % b;
            }
        }
    }

    /// Returns a uniformly distributed float value in [0, 1).
    #[inline(always)]
    pub fn uniform_float(&mut self) -> Float {
        min(
            ONE_MINUS_EPSILON,
            self.uniform_u32() as Float * hexf32!("0x1.0p-32"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_seed() {
        let mut a = RNG::new(42);
        let mut b = RNG::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_u32(), b.uniform_u32());
        }
    }

    #[test]
    fn uniform_float_in_unit_interval() {
        let mut rng = RNG::new(7);
        for _ in 0..1000 {
            let v = rng.uniform_float();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn bounded_uniform_in_range() {
        let mut rng = RNG::new(3);
        for _ in 0..1000 {
            assert!(rng.bounded_uniform_u32(10) < 10);
        }
    }
}
