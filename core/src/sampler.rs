//! Sampler

use crate::base::*;
use crate::geometry::Point2f;

/// Sampler interface. Implementations supply independent uniform variates in
/// [0, 1); one instance is owned per rendering worker.
pub trait Sampler: Send + Sync {
    /// Returns the sample value for the next dimension of the current sample
    /// vector.
    fn get_1d(&mut self) -> Float;

    /// Returns the sample value for the next two dimensions of the current
    /// sample vector.
    fn get_2d(&mut self) -> Point2f;

    /// Generates a new instance of an initial `Sampler` for use by a rendering
    /// thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler>;
}
