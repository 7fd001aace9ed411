//! Lambertian Reflection

use super::*;
use crate::sampling::{cosine_hemisphere_pdf, cosine_sample_hemisphere};

/// BRDF for the Lambertian model for perfect diffuse surfaces that scatters
/// incident illumination equally in all directions.
#[derive(Clone)]
pub struct LambertianReflection {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Reflectance spectrum which gives the fraction of incident light that
    /// is scattered.
    r: Spectrum,
}

impl LambertianReflection {
    /// Create a new instance of `LambertianReflection`.
    ///
    /// * `r` - Reflectance spectrum which gives the fraction of incident light
    ///         that is scattered.
    pub fn new(r: Spectrum) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE,
            r,
        }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if same_hemisphere(wo, wi) {
            self.r * INV_PI
        } else {
            Spectrum::ZERO
        }
    }

    /// Samples an incident direction with a cosine-weighted distribution about
    /// the surface normal.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        // Cosine-sample the hemisphere, flipping the direction if necessary so
        // it lies in the same hemisphere as `wo`.
        let mut wi = cosine_sample_hemisphere(u);
        if wo.z < 0.0 {
            wi.z = -wi.z;
        }
        let pdf = self.pdf(wo, &wi);
        BxDFSample::new(self.f(wo, &wi), pdf, wi, self.bxdf_type)
    }

    /// Evaluates the PDF for the cosine-weighted sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if same_hemisphere(wo, wi) {
            cosine_hemisphere_pdf(abs_cos_theta(wi))
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn constant_over_hemisphere() {
        let lambert = LambertianReflection::new(Spectrum::new(0.5));
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.5, 0.5, 0.70710678).normalize();
        let f = lambert.f(&wo, &wi);
        assert!(approx_eq!(f32, f[0], 0.5 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn zero_below_surface() {
        let lambert = LambertianReflection::new(Spectrum::new(0.5));
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 0.0, -1.0);
        assert!(lambert.f(&wo, &wi).is_black());
        assert_eq!(lambert.pdf(&wo, &wi), 0.0);
    }

    #[test]
    fn sample_weight_equals_reflectance() {
        // f * |cos θ| / pdf reduces to the reflectance for cosine sampling.
        let lambert = LambertianReflection::new(Spectrum::new(0.25));
        let wo = Vector3f::new(0.1, 0.2, 0.9).normalize();
        let sample = lambert.sample_f(&wo, &Point2f::new(0.3, 0.7));
        assert!(sample.pdf > 0.0);
        let weight = sample.f * abs_cos_theta(&sample.wi) / sample.pdf;
        assert!(approx_eq!(f32, weight[0], 0.25, epsilon = 1e-5));
    }
}
