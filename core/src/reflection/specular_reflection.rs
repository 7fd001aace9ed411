//! Specular Reflection

use super::*;

/// BRDF for physically plausible specular reflection using a Fresnel
/// interface.
#[derive(Clone)]
pub struct SpecularReflection {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Fresnel interface.
    fresnel: Fresnel,

    /// Spectrum used to scale the reflected colour.
    r: Spectrum,
}

impl SpecularReflection {
    /// Create a new instance of `SpecularReflection`.
    ///
    /// * `r`       - Spectrum used to scale the reflected colour.
    /// * `fresnel` - Fresnel interface.
    pub fn new(r: Spectrum, fresnel: Fresnel) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION | BxDFType::BSDF_SPECULAR,
            fresnel,
            r,
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

    /// Returns the perfect specular reflection direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values (unused for delta distributions).
    pub fn sample_f(&self, wo: &Vector3f, _u: &Point2f) -> BxDFSample {
        // Compute perfect specular reflection direction.
        let wi = Vector3f::new(-wo.x, -wo.y, wo.z);
        let cos_i = cos_theta(&wi);
        if cos_i == 0.0 {
            return BxDFSample::from(self.bxdf_type);
        }
        let pdf = 1.0;
        let s = self.fresnel.evaluate(cos_i) * self.r / abs_cos_theta(&wi);
        BxDFSample::new(s, pdf, wi, self.bxdf_type)
    }

    /// Evaluates the PDF for the sampling method. The probability of sampling
    /// the delta direction by chance is zero.
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
    fn mirrors_about_normal() {
        let mirror = SpecularReflection::new(Spectrum::new(0.9), Fresnel::NoOp);
        let wo = Vector3f::new(0.5, -0.3, 0.8).normalize();
        let sample = mirror.sample_f(&wo, &Point2f::new(0.0, 0.0));
        assert!(approx_eq!(f32, sample.wi.x, -wo.x, epsilon = 1e-6));
        assert!(approx_eq!(f32, sample.wi.y, -wo.y, epsilon = 1e-6));
        assert!(approx_eq!(f32, sample.wi.z, wo.z, epsilon = 1e-6));
        assert_eq!(sample.pdf, 1.0);

        // f * |cos θ| / pdf recovers the reflectance scale.
        let weight = sample.f * abs_cos_theta(&sample.wi) / sample.pdf;
        assert!(approx_eq!(f32, weight[0], 0.9, epsilon = 1e-5));
    }

    #[test]
    fn delta_lobe_evaluates_to_black() {
        let mirror = SpecularReflection::new(Spectrum::new(0.9), Fresnel::NoOp);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        assert!(mirror.f(&wo, &wo).is_black());
        assert_eq!(mirror.pdf(&wo, &wo), 0.0);
    }
}
