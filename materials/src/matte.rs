//! Matte Material

use core::interaction::SurfaceInteraction;
use core::material::*;
use core::reflection::*;
use core::spectrum::Spectrum;

/// Implements purely diffuse surfaces.
pub struct MatteMaterial {
    /// Spectral diffuse reflection.
    kd: Spectrum,
}

impl MatteMaterial {
    /// Create a new `MatteMaterial`.
    ///
    /// * `kd` - Spectral diffuse reflection.
    pub fn new(kd: Spectrum) -> Self {
        Self {
            kd: kd.clamp(0.0, 1.0),
        }
    }
}

impl Material for MatteMaterial {
    /// Returns the BSDF describing scattering at the intersection point on
    /// the surface.
    ///
    /// * `si`   - The surface interaction at the intersection.
    /// * `mode` - Transport mode (ignored; diffuse reflection is symmetric).
    fn compute_scattering_functions(&self, si: &SurfaceInteraction, _mode: TransportMode) -> BSDF {
        BSDF::new(
            &si.hit,
            BxDF::LambertianReflection(LambertianReflection::new(self.kd)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::geometry::*;
    use core::interaction::Hit;

    #[test]
    fn produces_diffuse_bsdf() {
        let matte = MatteMaterial::new(Spectrum::new(0.5));
        let hit = Hit::new(
            Point3f::zero(),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        );
        let si = SurfaceInteraction::new(hit, None, None);
        let bsdf = matte.compute_scattering_functions(&si, TransportMode::Radiance);
        assert!(bsdf.is_diffuse());
        assert!(!bsdf.is_specular());
    }

    #[test]
    fn reflectance_clamped_to_unit() {
        let matte = MatteMaterial::new(Spectrum::new(2.0));
        let hit = Hit::new(
            Point3f::zero(),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        );
        let si = SurfaceInteraction::new(hit, None, None);
        let bsdf = matte.compute_scattering_functions(&si, TransportMode::Radiance);
        let f = bsdf.f(
            &Vector3f::new(0.0, 0.0, 1.0),
            &Vector3f::new(0.0, 0.0, 1.0),
        );
        assert!(f.max_component_value() <= 1.0);
    }
}
