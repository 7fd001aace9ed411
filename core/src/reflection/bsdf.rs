//! BSDF

use super::*;
use crate::geometry::coordinate_system;
use crate::interaction::Hit;

/// BSDF binds a reflection model to the shading coordinate system at a point
/// on a surface.
#[derive(Clone)]
pub struct BSDF {
    /// The shading normal. It is the z-axis of the orthonormal shading
    /// coordinate system and defines the hemispheres for integrating incident
    /// illumination.
    pub ns: Normal3f,

    /// Second axis of the orthonormal coordinate system.
    pub ss: Vector3f,

    /// Third axis of the orthonormal coordinate system.
    pub ts: Vector3f,

    /// The reflection model.
    bxdf: BxDF,
}

impl BSDF {
    /// Creates a new `BSDF`.
    ///
    /// * `hit`  - The geometry at the point on a surface.
    /// * `bxdf` - The reflection model.
    pub fn new(hit: &Hit, bxdf: BxDF) -> Self {
        let ns = hit.n;
        let (ss, ts) = coordinate_system(&Vector3f::from(ns));
        Self { ns, ss, ts, bxdf }
    }

    /// Transforms a vector from world space to the local shading space.
    ///
    /// * `v` - The vector to transform.
    pub fn world_to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.ss), v.dot(&self.ts), self.ns.dot(v))
    }

    /// Transforms a vector from the local shading space to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn local_to_world(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(
            self.ss.x * v.x + self.ts.x * v.y + self.ns.x * v.z,
            self.ss.y * v.x + self.ts.y * v.y + self.ns.y * v.z,
            self.ss.z * v.x + self.ts.z * v.y + self.ns.z * v.z,
        )
    }

    /// Returns true if the reflection model has a diffuse component.
    pub fn is_diffuse(&self) -> bool {
        self.bxdf.get_type().is_diffuse()
    }

    /// Returns true if the reflection model is purely specular.
    pub fn is_specular(&self) -> bool {
        self.bxdf.get_type().is_specular()
    }

    /// Returns the BSDF evaluated for a pair of directions.
    ///
    /// * `wo_w` - Outgoing direction in world space.
    /// * `wi_w` - Incident direction in world space.
    pub fn f(&self, wo_w: &Vector3f, wi_w: &Vector3f) -> Spectrum {
        let wo = self.world_to_local(wo_w);
        let wi = self.world_to_local(wi_w);
        if wo.z == 0.0 {
            Spectrum::ZERO
        } else {
            self.bxdf.f(&wo, &wi)
        }
    }

    /// Samples an incident direction for the given outgoing direction. The
    /// returned sample's direction is in world space.
    ///
    /// * `wo_w` - Outgoing direction in world space.
    /// * `u`    - The 2D uniform random values.
    pub fn sample_f(&self, wo_w: &Vector3f, u: &Point2f) -> BxDFSample {
        let wo = self.world_to_local(wo_w);
        if wo.z == 0.0 {
            return BxDFSample::from(self.bxdf.get_type());
        }

        let mut sample = self.bxdf.sample_f(&wo, u);
        if sample.pdf > 0.0 && !sample.f.is_black() {
            sample.wi = self.local_to_world(&sample.wi);
        }
        sample
    }

    /// Evaluates the PDF for the sampling method for a pair of directions.
    ///
    /// * `wo_w` - Outgoing direction in world space.
    /// * `wi_w` - Incident direction in world space.
    pub fn pdf(&self, wo_w: &Vector3f, wi_w: &Vector3f) -> Float {
        let wo = self.world_to_local(wo_w);
        let wi = self.world_to_local(wi_w);
        if wo.z == 0.0 {
            0.0
        } else {
            self.bxdf.pdf(&wo, &wi)
        }
    }

    /// Returns the throughput weight `f · |cos θi| / pdf` for a sample, or
    /// black when the sample failed. Degenerate PDFs yield a black weight
    /// rather than propagating invalid values.
    ///
    /// * `sample` - The BxDF sample with `wi` in world space.
    pub fn sample_weight(&self, sample: &BxDFSample) -> Spectrum {
        if sample.pdf > 0.0 && sample.pdf.is_finite() && !sample.f.is_black() {
            sample.f * self.ns.abs_dot(&sample.wi) / sample.pdf
        } else {
            Spectrum::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3f;
    use float_cmp::approx_eq;

    fn test_hit(n: Normal3f) -> Hit {
        Hit::new(Point3f::zero(), Vector3f::from(n), n)
    }

    #[test]
    fn local_world_round_trip() {
        let hit = test_hit(Normal3f::new(0.0, 1.0, 0.0));
        let bsdf = BSDF::new(&hit, BxDF::LambertianReflection(LambertianReflection::new(Spectrum::new(0.5))));
        let v = Vector3f::new(0.3, 0.5, -0.2);
        let round_trip = bsdf.local_to_world(&bsdf.world_to_local(&v));
        assert!(approx_eq!(f32, round_trip.x, v.x, epsilon = 1e-5));
        assert!(approx_eq!(f32, round_trip.y, v.y, epsilon = 1e-5));
        assert!(approx_eq!(f32, round_trip.z, v.z, epsilon = 1e-5));
    }

    #[test]
    fn shading_normal_maps_to_z() {
        let n = Normal3f::new(1.0, 2.0, 3.0).normalize();
        let hit = test_hit(n);
        let bsdf = BSDF::new(&hit, BxDF::LambertianReflection(LambertianReflection::new(Spectrum::new(0.5))));
        let local = bsdf.world_to_local(&Vector3f::from(n));
        assert!(approx_eq!(f32, local.z, 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, local.x, 0.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, local.y, 0.0, epsilon = 1e-5));
    }

    #[test]
    fn diffuse_and_specular_flags() {
        let hit = test_hit(Normal3f::new(0.0, 0.0, 1.0));
        let matte = BSDF::new(&hit, BxDF::LambertianReflection(LambertianReflection::new(Spectrum::new(0.5))));
        assert!(matte.is_diffuse());
        assert!(!matte.is_specular());

        let mirror = BSDF::new(
            &hit,
            BxDF::SpecularReflection(SpecularReflection::new(Spectrum::new(0.9), Fresnel::NoOp)),
        );
        assert!(!mirror.is_diffuse());
        assert!(mirror.is_specular());
    }
}
