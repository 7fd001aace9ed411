//! Glass Material

use core::base::*;
use core::interaction::SurfaceInteraction;
use core::material::*;
use core::reflection::*;
use core::spectrum::Spectrum;

/// Implements a dielectric (e.g. glass) surface with Fresnel-modulated
/// specular reflection and transmission.
pub struct GlassMaterial {
    /// Reflectivity of the surface.
    kr: Spectrum,

    /// Transmissivity of the surface.
    kt: Spectrum,

    /// Index of refraction of the interior medium.
    eta: Float,
}

impl GlassMaterial {
    /// Create a new `GlassMaterial`.
    ///
    /// * `kr`  - Reflectivity of the surface.
    /// * `kt`  - Transmissivity of the surface.
    /// * `eta` - Index of refraction of the interior medium.
    pub fn new(kr: Spectrum, kt: Spectrum, eta: Float) -> Self {
        Self {
            kr: kr.clamp(0.0, 1.0),
            kt: kt.clamp(0.0, 1.0),
            eta,
        }
    }
}

impl Material for GlassMaterial {
    /// Returns the BSDF describing scattering at the intersection point on
    /// the surface.
    ///
    /// * `si`   - The surface interaction at the intersection.
    /// * `mode` - Indicates whether the path carries radiance or importance;
    ///            refraction scales non-symmetrically between the two.
    fn compute_scattering_functions(&self, si: &SurfaceInteraction, mode: TransportMode) -> BSDF {
        BSDF::new(
            &si.hit,
            BxDF::FresnelSpecular(FresnelSpecular::new(self.kr, self.kt, 1.0, self.eta, mode)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::geometry::*;
    use core::interaction::Hit;

    #[test]
    fn produces_specular_transmissive_bsdf() {
        let glass = GlassMaterial::new(Spectrum::new(1.0), Spectrum::new(1.0), 1.5);
        let hit = Hit::new(
            Point3f::zero(),
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
        );
        let si = SurfaceInteraction::new(hit, None, None);
        let bsdf = glass.compute_scattering_functions(&si, TransportMode::Radiance);
        assert!(bsdf.is_specular());
        assert!(!bsdf.is_diffuse());
    }
}
