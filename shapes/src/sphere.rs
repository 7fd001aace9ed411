//! Spheres

use core::base::*;
use core::geometry::*;
use core::sampling::uniform_sample_sphere;
use core::shape::*;

/// A sphere centered at an arbitrary world-space point.
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3f,

    /// Radius of the sphere.
    pub radius: Float,
}

impl Sphere {
    /// Create a new `Sphere`.
    ///
    /// * `center` - Center of the sphere.
    /// * `radius` - Radius of the sphere.
    pub fn new(center: Point3f, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        Bounds3f::new(self.center - r, self.center + r)
    }

    /// Returns geometric details if a ray intersects the sphere.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeIntersection> {
        let oc = r.o - self.center;
        let a = r.d.length_squared();
        let half_b = oc.dot(&r.d);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // Find the nearest root in the ray's valid interval.
        let mut t = (-half_b - sqrt_d) / a;
        if t <= 0.0 || t > r.t_max {
            t = (-half_b + sqrt_d) / a;
            if t <= 0.0 || t > r.t_max {
                return None;
            }
        }

        let p = r.at(t);
        let n = Normal3f::from((p - self.center) / self.radius);
        Some(ShapeIntersection { t, p, n })
    }

    /// Returns the surface area of the sphere.
    fn area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }

    /// Sample a point on the sphere uniformly by area.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> ShapeSample {
        let w = uniform_sample_sphere(u);
        ShapeSample {
            p: self.center + w * self.radius,
            n: Normal3f::from(w),
            pdf: 1.0 / self.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn intersect_head_on() {
        let sphere = Sphere::new(Point3f::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, -1.0), INFINITY);

        let isect = sphere.intersect(&ray).unwrap();
        assert!(approx_eq!(f32, isect.t, 4.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, isect.n.z, 1.0, epsilon = 1e-4));
    }

    #[test]
    fn miss_returns_none() {
        let sphere = Sphere::new(Point3f::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 1.0, 0.0), INFINITY);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn respects_t_max() {
        let sphere = Sphere::new(Point3f::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, -1.0), 2.0);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn inside_hit_uses_far_root() {
        let sphere = Sphere::new(Point3f::zero(), 1.0);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(1.0, 0.0, 0.0), INFINITY);
        let isect = sphere.intersect(&ray).unwrap();
        assert!(approx_eq!(f32, isect.t, 1.0, epsilon = 1e-5));
    }

    #[test]
    fn samples_lie_on_surface() {
        let sphere = Sphere::new(Point3f::new(1.0, 2.0, 3.0), 2.0);
        let s = sphere.sample_area(&Point2f::new(0.3, 0.8));
        assert!(approx_eq!(
            f32,
            s.p.distance(sphere.center),
            2.0,
            epsilon = 1e-4
        ));
        assert!(approx_eq!(f32, s.pdf, 1.0 / sphere.area(), epsilon = 1e-8));
    }
}
