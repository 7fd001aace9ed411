//! Interactions

use crate::base::*;
use crate::geometry::*;
use crate::light::ArcLight;
use crate::material::{ArcMaterial, TransportMode};
use crate::reflection::BSDF;
use crate::spectrum::Spectrum;

/// Hit provides the geometric data shared by surface interactions.
#[derive(Clone)]
pub struct Hit {
    /// Point of interaction.
    pub p: Point3f,

    /// The negative ray direction (outgoing direction used when computing
    /// lighting at points).
    pub wo: Vector3f,

    /// Surface normal at the point `p`.
    pub n: Normal3f,
}

impl Hit {
    /// Create a new hit.
    ///
    /// * `p`  - Point of interaction.
    /// * `wo` - The negative ray direction.
    /// * `n`  - Surface normal at the point `p`.
    pub fn new(p: Point3f, wo: Vector3f, n: Normal3f) -> Self {
        Self { p, wo, n }
    }

    /// Spawn a new ray in the given direction. The origin is offset along the
    /// surface normal to avoid re-intersecting the surface it left.
    ///
    /// * `d` - The new ray direction.
    pub fn spawn_ray(&self, d: &Vector3f) -> Ray {
        let offset = if self.n.dot(d) >= 0.0 {
            Vector3f::from(self.n) * SHADOW_EPSILON
        } else {
            Vector3f::from(self.n) * -SHADOW_EPSILON
        };
        Ray::new(self.p + offset, *d, INFINITY)
    }
}

/// SurfaceInteraction represents the geometry of a particular point on a
/// surface along with the scattering and emission behaviour attached to it.
#[derive(Clone)]
pub struct SurfaceInteraction {
    /// The hit point data.
    pub hit: Hit,

    /// The material of the intersected primitive, if any.
    pub material: Option<ArcMaterial>,

    /// The area light attached to the intersected primitive, if any.
    pub area_light: Option<ArcLight>,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `hit`        - The hit point data.
    /// * `material`   - The material of the intersected primitive.
    /// * `area_light` - The area light attached to the intersected primitive.
    pub fn new(hit: Hit, material: Option<ArcMaterial>, area_light: Option<ArcLight>) -> Self {
        Self {
            hit,
            material,
            area_light,
        }
    }

    /// Returns the BSDF describing scattering at the interaction point.
    ///
    /// * `mode` - Indicates whether the path carries radiance or importance.
    pub fn bsdf(&self, mode: TransportMode) -> Option<BSDF> {
        self.material
            .as_ref()
            .map(|m| m.compute_scattering_functions(self, mode))
    }

    /// Returns the emitted radiance at the interaction point in the given
    /// direction, or black for non-emissive surfaces.
    ///
    /// * `w` - The outgoing direction.
    pub fn le(&self, w: &Vector3f) -> Spectrum {
        self.area_light
            .as_ref()
            .map_or(Spectrum::ZERO, |light| light.l(&self.hit.n, w))
    }

    /// Returns true if the interaction is on an emissive surface.
    pub fn is_emissive(&self) -> bool {
        self.area_light.is_some()
    }
}
