//! Integrator

use crate::geometry::Ray;
use crate::sampler::Sampler;
use crate::scene::Scene;
use crate::spectrum::Spectrum;

/// Integrator interface.
pub trait Integrator: Send + Sync {
    /// Preprocess the scene before rendering begins. The only fatal category
    /// is a violated precondition (e.g. an algorithm that needs emissive
    /// surfaces finding none); degenerate samples during the pass are
    /// handled as zero contributions, not errors.
    ///
    /// * `scene` - The scene.
    fn preprocess(&mut self, _scene: &Scene) -> Result<(), String> {
        Ok(())
    }

    /// Returns the incident radiance at the origin of a given ray.
    ///
    /// * `scene`   - The scene.
    /// * `sampler` - The sampler.
    /// * `ray`     - The ray.
    fn li(&self, scene: &Scene, sampler: &mut dyn Sampler, ray: &Ray) -> Spectrum;
}
