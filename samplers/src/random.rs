//! Random Sampler

use core::base::*;
use core::geometry::Point2f;
use core::rng::RNG;
use core::sampler::Sampler;

/// Implements a sampler that uses a PRNG to generate independent uniformly
/// random samples.
pub struct RandomSampler {
    /// The random number generator.
    rng: RNG,
}

impl RandomSampler {
    /// Create a new `RandomSampler`.
    ///
    /// * `seed` - Optional seed for the random number generator.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                Some(s) => RNG::new(s),
                None => RNG::default(),
            },
        }
    }
}

impl Sampler for RandomSampler {
    /// Returns the sample value for the next dimension of the current sample
    /// vector.
    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    /// Returns the sample value for the next two dimensions of the current
    /// sample vector.
    fn get_2d(&mut self) -> Point2f {
        Point2f::new(self.rng.uniform_float(), self.rng.uniform_float())
    }

    /// Generates a new instance of an initial `Sampler` for use by a
    /// rendering thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(Self::new(Some(seed)))
    }
}
