//! Reflection and surface scattering models

use crate::base::*;
use crate::geometry::*;
use crate::spectrum::*;

mod bsdf;
mod bxdf_sample;
mod bxdf_type;
mod common;
mod fresnel;
mod fresnel_specular;
mod lambertian_reflection;
mod specular_reflection;

// Re-export
pub use bsdf::*;
pub use bxdf_sample::*;
pub use bxdf_type::*;
pub use common::*;
pub use fresnel::*;
pub use fresnel_specular::*;
pub use lambertian_reflection::*;
pub use specular_reflection::*;

/// BxDF for BRDFs and BTDFs. Enumerating the reflection models directly
/// avoids trait objects at every scattering evaluation.
#[derive(Clone)]
pub enum BxDF {
    FresnelSpecular(FresnelSpecular),
    LambertianReflection(LambertianReflection),
    SpecularReflection(SpecularReflection),
}

impl BxDF {
    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        match self {
            BxDF::FresnelSpecular(bxdf) => bxdf.get_type(),
            BxDF::LambertianReflection(bxdf) => bxdf.get_type(),
            BxDF::SpecularReflection(bxdf) => bxdf.get_type(),
        }
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            BxDF::FresnelSpecular(bxdf) => bxdf.f(wo, wi),
            BxDF::LambertianReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::SpecularReflection(bxdf) => bxdf.f(wo, wi),
        }
    }

    /// Samples an incident direction for the given outgoing direction.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        match self {
            BxDF::FresnelSpecular(bxdf) => bxdf.sample_f(wo, u),
            BxDF::LambertianReflection(bxdf) => bxdf.sample_f(wo, u),
            BxDF::SpecularReflection(bxdf) => bxdf.sample_f(wo, u),
        }
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            BxDF::FresnelSpecular(bxdf) => bxdf.pdf(wo, wi),
            BxDF::LambertianReflection(bxdf) => bxdf.pdf(wo, wi),
            BxDF::SpecularReflection(bxdf) => bxdf.pdf(wo, wi),
        }
    }
}
