//! Light

use crate::base::*;
use crate::geometry::*;
use crate::sampler::Sampler;
use crate::spectrum::Spectrum;
use std::sync::Arc;

/// Query record used for sampling and evaluating emitted radiance between a
/// reference point and a point on a light's surface. Constructed per
/// evaluation and never persisted.
#[derive(Clone)]
pub struct LightQueryRecord {
    /// The reference point (shading point or photon-emitting side).
    pub p_ref: Point3f,

    /// The sampled point on the light's surface.
    pub p: Point3f,

    /// Surface normal at the sampled point.
    pub n: Normal3f,

    /// Unit direction from the reference point toward the sampled point.
    pub wi: Vector3f,

    /// Probability density of sampling `p`, with respect to surface area.
    pub pdf: Float,
}

impl LightQueryRecord {
    /// Create a new query record for a reference point. The sampled point,
    /// normal, direction and pdf are filled in by `Light::sample_li()`.
    ///
    /// * `p_ref` - The reference point.
    pub fn new(p_ref: Point3f) -> Self {
        Self {
            p_ref,
            p: Point3f::zero(),
            n: Normal3f::ZERO,
            wi: Vector3f::ZERO,
            pdf: 0.0,
        }
    }
}

/// The result of sampling a photon emission event from a light source. The
/// returned power is already divided by the sampling density, so deposits
/// derived from it aggregate with a plain sum.
#[derive(Clone)]
pub struct PhotonEmission {
    /// Ray leaving the light source.
    pub ray: Ray,

    /// Surface normal at the sampled point on the light.
    pub n: Normal3f,

    /// The ray origin's probability density with respect to surface area on
    /// the light.
    pub pdf_pos: Float,

    /// Emitted radiant power carried by the photon.
    pub power: Spectrum,
}

/// Light trait provides common behaviour for emitters.
pub trait Light: Send + Sync {
    /// Samples a point on the light's surface uniformly by area and fills the
    /// query record's sampled point, normal, incident direction and
    /// area-measure pdf. Returns `eval(rec) / rec.pdf` when the sampled
    /// point's normal faces the reference point and the pdf is finite and
    /// positive; otherwise returns black.
    ///
    /// * `rec` - The query record with the reference point set.
    /// * `u`   - Sample value for Monte Carlo integration.
    fn sample_li(&self, rec: &mut LightQueryRecord, u: &Point2f) -> Spectrum;

    /// Returns the area-measure probability density for sampling the recorded
    /// point when its normal faces the query direction, else zero. Back-face
    /// samples are never given positive density.
    ///
    /// * `rec` - The query record.
    fn pdf_li(&self, rec: &LightQueryRecord) -> Float;

    /// Returns the emitted radiance leaving a surface point with the given
    /// normal in the given direction.
    ///
    /// * `n` - Surface normal at the point on the light.
    /// * `w` - Outgoing direction.
    fn l(&self, n: &Normal3f, w: &Vector3f) -> Spectrum;

    /// Returns the emitted radiance toward the query record's reference
    /// point.
    ///
    /// * `rec` - The query record.
    fn eval(&self, rec: &LightQueryRecord) -> Spectrum {
        self.l(&rec.n, &(-rec.wi))
    }

    /// Samples a photon emission event: a surface point uniform by area and a
    /// cosine-weighted direction in the tangent frame at that point.
    ///
    /// * `sampler`  - The sampler.
    /// * `n_lights` - Number of lights in the scene; reweights the single
    ///                sampled light into an estimate over all lights.
    fn sample_photon(&self, sampler: &mut dyn Sampler, n_lights: usize) -> PhotonEmission;

    /// Return the total emitted power.
    fn power(&self) -> Spectrum;
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light>;
