//! Shapes

use crate::base::*;
use crate::geometry::*;
use std::sync::Arc;

/// Geometric details of a ray-shape intersection.
#[derive(Clone)]
pub struct ShapeIntersection {
    /// Parametric distance along the ray.
    pub t: Float,

    /// Point of intersection.
    pub p: Point3f,

    /// Surface normal at the intersection point.
    pub n: Normal3f,
}

/// A point sampled on a shape's surface with its area-measure density.
#[derive(Clone)]
pub struct ShapeSample {
    /// The sampled point.
    pub p: Point3f,

    /// Surface normal at the sampled point.
    pub n: Normal3f,

    /// Probability density of the sample with respect to surface area.
    pub pdf: Float,
}

/// Shape common functions. Shapes are defined directly in world space.
pub trait Shape: Send + Sync {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f;

    /// Returns geometric details if a ray intersects the shape. If there is
    /// no intersection in `(0, r.t_max)`, `None` is returned.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeIntersection>;

    /// Returns `true` if a ray-shape intersection succeeds; otherwise
    /// `false`.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.intersect(r).is_some()
    }

    /// Returns the surface area of the shape.
    fn area(&self) -> Float;

    /// Sample a point on the surface uniformly by area and return it with the
    /// PDF with respect to area on the surface.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> ShapeSample;

    /// Return the area-measure PDF for sampling points on the shape. By
    /// default it is 1/area.
    fn pdf(&self) -> Float {
        1.0 / self.area()
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape>;
