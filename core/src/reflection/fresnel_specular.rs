//! Fresnel-Modulated Specular Reflection and Transmission

use super::*;
use crate::material::TransportMode;

/// BxDF for physically plausible specular reflection and transmission at a
/// dielectric interface. The lobe is chosen stochastically with probability
/// given by the Fresnel reflectance.
#[derive(Clone)]
pub struct FresnelSpecular {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Spectrum used to scale the reflected colour.
    r: Spectrum,

    /// Spectrum used to scale the transmitted colour.
    t: Spectrum,

    /// Index of refraction above the surface (same side as surface normal).
    eta_a: Float,

    /// Index of refraction below the surface (opposite side as surface
    /// normal).
    eta_b: Float,

    /// Indicates whether the incident ray started from a light source or from
    /// the camera.
    mode: TransportMode,
}

impl FresnelSpecular {
    /// Create a new instance of `FresnelSpecular`.
    ///
    /// * `r`     - Spectrum used to scale the reflected colour.
    /// * `t`     - Spectrum used to scale the transmitted colour.
    /// * `eta_a` - Index of refraction above the surface (same side as surface
    ///             normal).
    /// * `eta_b` - Index of refraction below the surface (opposite side as
    ///             surface normal).
    /// * `mode`  - Indicates whether the incident ray started from a light
    ///             source or from the camera.
    pub fn new(r: Spectrum, t: Spectrum, eta_a: Float, eta_b: Float, mode: TransportMode) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION
                | BxDFType::BSDF_TRANSMISSION
                | BxDFType::BSDF_SPECULAR,
            r,
            t,
            eta_a,
            eta_b,
            mode,
        }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions. The delta distribution returns no scattering for
    /// arbitrary direction pairs.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Chooses between specular reflection and transmission with probability
    /// given by the Fresnel reflectance and samples the chosen lobe.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        let f = fr_dielectric(cos_theta(wo), self.eta_a, self.eta_b);

        if u[0] < f {
            // Compute specular reflection direction.
            let wi = Vector3f::new(-wo.x, -wo.y, wo.z);
            let sampled_type = BxDFType::BSDF_SPECULAR | BxDFType::BSDF_REFLECTION;
            let pdf = f;
            BxDFSample::new(self.r * (f / abs_cos_theta(&wi)), pdf, wi, sampled_type)
        } else {
            // Figure out which `eta` is incident and which is transmitted.
            let entering = cos_theta(wo) > 0.0;
            let eta_i = if entering { self.eta_a } else { self.eta_b };
            let eta_t = if entering { self.eta_b } else { self.eta_a };

            // Compute ray direction for specular transmission.
            let sampled_type = BxDFType::BSDF_SPECULAR | BxDFType::BSDF_TRANSMISSION;
            let n = Normal3f::new(0.0, 0.0, 1.0).face_forward(wo);
            if let Some(wi) = refract(wo, &n, eta_i / eta_t) {
                let mut ft = self.t * (1.0 - f);

                // Account for non-symmetry with transmission to a different
                // medium.
                if self.mode == TransportMode::Radiance {
                    ft *= (eta_i * eta_i) / (eta_t * eta_t);
                }

                let pdf = 1.0 - f;
                BxDFSample::new(ft / abs_cos_theta(&wi), pdf, wi, sampled_type)
            } else {
                BxDFSample::from(sampled_type)
            }
        }
    }

    /// Evaluates the PDF for the sampling method. The probability of sampling
    /// either delta direction by chance is zero.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, _wo: &Vector3f, _wi: &Vector3f) -> Float {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn reflects_when_sample_below_fresnel() {
        let glass = FresnelSpecular::new(
            Spectrum::new(1.0),
            Spectrum::new(1.0),
            1.0,
            1.5,
            TransportMode::Radiance,
        );
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        // Normal incidence Fresnel is 0.04; u[0]=0.01 selects reflection.
        let sample = glass.sample_f(&wo, &Point2f::new(0.01, 0.5));
        assert!(sample.sampled_type.contains(BxDFType::BSDF_REFLECTION));
        assert!(approx_eq!(f32, sample.wi.z, 1.0, epsilon = 1e-6));
    }

    #[test]
    fn transmits_when_sample_above_fresnel() {
        let glass = FresnelSpecular::new(
            Spectrum::new(1.0),
            Spectrum::new(1.0),
            1.0,
            1.5,
            TransportMode::Radiance,
        );
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let sample = glass.sample_f(&wo, &Point2f::new(0.5, 0.5));
        assert!(sample.sampled_type.contains(BxDFType::BSDF_TRANSMISSION));
        assert!(sample.wi.z < 0.0);
        assert!(sample.pdf > 0.0);
    }
}
