//! Mirror Material

use core::interaction::SurfaceInteraction;
use core::material::*;
use core::reflection::*;
use core::spectrum::Spectrum;

/// Implements a simple mirror, modeled with perfect specular reflection.
pub struct MirrorMaterial {
    /// Reflectivity of the mirror.
    kr: Spectrum,
}

impl MirrorMaterial {
    /// Create a new `MirrorMaterial`.
    ///
    /// * `kr` - Reflectivity of the mirror.
    pub fn new(kr: Spectrum) -> Self {
        Self {
            kr: kr.clamp(0.0, 1.0),
        }
    }
}

impl Material for MirrorMaterial {
    /// Returns the BSDF describing scattering at the intersection point on
    /// the surface.
    ///
    /// * `si`   - The surface interaction at the intersection.
    /// * `mode` - Transport mode (ignored; reflection is symmetric).
    fn compute_scattering_functions(&self, si: &SurfaceInteraction, _mode: TransportMode) -> BSDF {
        BSDF::new(
            &si.hit,
            BxDF::SpecularReflection(SpecularReflection::new(self.kr, Fresnel::NoOp)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::geometry::*;
    use core::interaction::Hit;
    use float_cmp::approx_eq;

    #[test]
    fn reflects_about_surface_normal() {
        let mirror = MirrorMaterial::new(Spectrum::new(0.9));
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let wo = Vector3f::new(1.0, 1.0, 0.0).normalize();
        let hit = Hit::new(Point3f::zero(), wo, n);
        let si = SurfaceInteraction::new(hit, None, None);

        let bsdf = mirror.compute_scattering_functions(&si, TransportMode::Radiance);
        assert!(bsdf.is_specular());

        let sample = bsdf.sample_f(&wo, &Point2f::new(0.5, 0.5));
        assert!(sample.pdf > 0.0);
        // Incident direction mirrors across the y-normal.
        assert!(approx_eq!(f32, sample.wi.x, -wo.x, epsilon = 1e-5));
        assert!(approx_eq!(f32, sample.wi.y, wo.y, epsilon = 1e-5));
    }
}
