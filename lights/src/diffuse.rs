//! Diffuse Area Light Source

use core::base::*;
use core::geometry::*;
use core::light::*;
use core::sampler::Sampler;
use core::sampling::cosine_sample_hemisphere;
use core::shape::ArcShape;
use core::spectrum::Spectrum;
use std::sync::Arc;

/// Implements a one-sided area light source with uniform spatial and
/// directional radiance distribution. Emission leaves the side the surface
/// normal points toward; back-face queries evaluate to black and are never
/// given positive sampling density.
pub struct DiffuseAreaLight {
    /// Emitted radiance.
    l_emit: Spectrum,

    /// Shape describing the surface of the light source.
    shape: ArcShape,

    /// Surface area of the shape.
    area: Float,
}

impl DiffuseAreaLight {
    /// Returns a new `DiffuseAreaLight`.
    ///
    /// * `l_emit` - Emitted radiance.
    /// * `shape`  - Shape describing the surface of the light source.
    pub fn new(l_emit: Spectrum, shape: ArcShape) -> Self {
        let area = shape.area();
        Self {
            l_emit,
            shape: Arc::clone(&shape),
            area,
        }
    }
}

impl Light for DiffuseAreaLight {
    /// Samples a point on the light's surface uniformly by area. Returns
    /// `eval(rec) / rec.pdf` when the sampled point's normal faces the
    /// reference point and the pdf is finite and positive; otherwise black.
    ///
    /// * `rec` - The query record with the reference point set.
    /// * `u`   - Sample value for Monte Carlo integration.
    fn sample_li(&self, rec: &mut LightQueryRecord, u: &Point2f) -> Spectrum {
        let s = self.shape.sample_area(u);
        rec.p = s.p;
        rec.n = s.n;
        rec.wi = (rec.p - rec.p_ref).normalize();
        rec.pdf = self.pdf_li(rec);

        if rec.pdf > 0.0 && !rec.pdf.is_nan() && !rec.pdf.is_infinite() {
            self.eval(rec) / rec.pdf
        } else {
            Spectrum::ZERO
        }
    }

    /// Returns the area-measure sampling density when the sampled point's
    /// normal faces the query direction, else zero.
    ///
    /// * `rec` - The query record.
    fn pdf_li(&self, rec: &LightQueryRecord) -> Float {
        if rec.n.dot(&(-rec.wi)) > 0.0 {
            self.shape.pdf()
        } else {
            0.0
        }
    }

    /// Returns the constant emitted radiance on the front (normal-facing)
    /// side, else black.
    ///
    /// * `n` - Surface normal at the point on the light.
    /// * `w` - Outgoing direction.
    fn l(&self, n: &Normal3f, w: &Vector3f) -> Spectrum {
        if n.dot(w) > 0.0 {
            self.l_emit
        } else {
            Spectrum::ZERO
        }
    }

    /// Samples a photon emission event: a surface point uniform by area and a
    /// cosine-weighted direction in the tangent frame at that point. The
    /// emitted power is `π · L · n_lights / pdf_pos`; the π factor integrates
    /// the cosine-weighted hemisphere emission profile and the light count
    /// reweights the uniformly chosen light into an estimate over all lights.
    ///
    /// * `sampler`  - The sampler.
    /// * `n_lights` - Number of lights in the scene.
    fn sample_photon(&self, sampler: &mut dyn Sampler, n_lights: usize) -> PhotonEmission {
        // Sample the emitting surface uniformly by area.
        let s = self.shape.sample_area(&sampler.get_2d());

        // Sample a cosine-weighted direction and transform it from the local
        // tangent frame at the sampled point into world space.
        let w_local = cosine_sample_hemisphere(&sampler.get_2d());
        let n = Vector3f::from(s.n);
        let (v1, v2) = coordinate_system(&n);
        let w = v1 * w_local.x + v2 * w_local.y + n * w_local.z;

        let power = if s.pdf > 0.0 && s.pdf.is_finite() {
            self.l_emit * (PI * n_lights as Float / s.pdf)
        } else {
            Spectrum::ZERO
        };

        let ray = core::interaction::Hit::new(s.p, w, s.n).spawn_ray(&w);
        PhotonEmission {
            ray,
            n: s.n,
            pdf_pos: s.pdf,
            power,
        }
    }

    /// Return the total emitted power.
    fn power(&self) -> Spectrum {
        self.l_emit * self.area * PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::shape::{Shape, ShapeIntersection, ShapeSample};
    use float_cmp::approx_eq;

    /// A stub shape whose surface sample is fixed, for deterministic light
    /// sampling tests.
    struct StubShape {
        p: Point3f,
        n: Normal3f,
        pdf: Float,
    }

    impl Shape for StubShape {
        fn world_bound(&self) -> Bounds3f {
            Bounds3f::from(self.p)
        }

        fn intersect(&self, _r: &Ray) -> Option<ShapeIntersection> {
            None
        }

        fn area(&self) -> Float {
            1.0 / self.pdf
        }

        fn sample_area(&self, _u: &Point2f) -> ShapeSample {
            ShapeSample {
                p: self.p,
                n: self.n,
                pdf: self.pdf,
            }
        }
    }

    /// A sampler that replays a fixed sequence of values.
    struct StubSampler {
        values: Vec<Float>,
        next: usize,
    }

    impl StubSampler {
        fn new(values: Vec<Float>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl Sampler for StubSampler {
        fn get_1d(&mut self) -> Float {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }

        fn get_2d(&mut self) -> Point2f {
            Point2f::new(self.get_1d(), self.get_1d())
        }

        fn clone_sampler(&self, _seed: u64) -> Box<dyn Sampler> {
            Box::new(Self::new(self.values.clone()))
        }
    }

    fn test_light(pdf: Float) -> DiffuseAreaLight {
        let shape = Arc::new(StubShape {
            p: Point3f::zero(),
            n: Normal3f::new(0.0, 0.0, 1.0),
            pdf,
        });
        DiffuseAreaLight::new(Spectrum::new(2.0), shape)
    }

    #[test]
    fn eval_is_one_sided() {
        let light = test_light(1.0);
        let mut rec = LightQueryRecord::new(Point3f::new(0.0, 0.0, 1.0));
        rec.n = Normal3f::new(0.0, 0.0, 1.0);

        // Reference point above the light: wi points down onto the surface,
        // so the sampled normal faces the reference point.
        rec.wi = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(light.eval(&rec), Spectrum::new(2.0));

        // Back-facing query.
        rec.wi = Vector3f::new(0.0, 0.0, 1.0);
        assert!(light.eval(&rec).is_black());
    }

    #[test]
    fn pdf_and_eval_agree_on_back_faces() {
        let light = test_light(0.5);
        let mut rec = LightQueryRecord::new(Point3f::new(0.0, 0.0, -1.0));
        rec.n = Normal3f::new(0.0, 0.0, 1.0);
        rec.wi = Vector3f::new(0.0, 0.0, 1.0);

        assert_eq!(light.pdf_li(&rec), 0.0);
        assert!(light.eval(&rec).is_black());

        rec.wi = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(light.pdf_li(&rec), 0.5);
        assert!(!light.eval(&rec).is_black());
    }

    #[test]
    fn sample_li_returns_eval_over_pdf() {
        let light = test_light(0.25);
        let mut rec = LightQueryRecord::new(Point3f::new(0.0, 0.0, 5.0));
        let value = light.sample_li(&mut rec, &Point2f::new(0.5, 0.5));

        assert!(approx_eq!(f32, rec.pdf, 0.25, epsilon = 1e-6));
        // 2.0 / 0.25 = 8.0 per channel.
        assert!(approx_eq!(f32, value[0], 8.0, epsilon = 1e-5));
    }

    #[test]
    fn photon_power_formula() {
        let pdf = 0.25;
        let n_lights = 3;
        let light = test_light(pdf);
        let mut sampler = StubSampler::new(vec![0.5]);

        let emission = light.sample_photon(&mut sampler, n_lights);
        assert!(approx_eq!(f32, emission.pdf_pos, pdf, epsilon = 1e-6));

        // power = π · L · n_lights / pdf_pos, exactly.
        let expected = PI * 2.0 * n_lights as Float / pdf;
        assert!(approx_eq!(f32, emission.power[0], expected, epsilon = 1e-3));
        assert!(approx_eq!(f32, emission.power[1], expected, epsilon = 1e-3));

        // Emitted direction lies in the hemisphere about the surface normal.
        assert!(emission.ray.d.dot(&Vector3f::from(emission.n)) >= 0.0);
    }

    #[test]
    fn total_power_scales_with_area() {
        let light = test_light(0.125);
        let power = light.power();
        assert!(approx_eq!(f32, power[0], 2.0 * 8.0 * PI, epsilon = 1e-4));
    }
}
