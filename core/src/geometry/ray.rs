//! Rays

use crate::base::*;
use crate::geometry::{Point3f, Vector3f};

/// A ray with an origin, direction and maximum extent.
#[derive(Clone, Debug)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Maximum extent of the ray.
    pub t_max: Float,
}

impl Ray {
    /// Returns a new ray.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_max` - Maximum extent of the ray.
    pub fn new(o: Point3f, d: Vector3f, t_max: Float) -> Self {
        Self { o, d, t_max }
    }

    /// Returns true if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max.is_nan()
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

impl Default for Ray {
    /// Returns a degenerate ray at the origin with unbounded extent.
    fn default() -> Self {
        Self::new(Point3f::zero(), Vector3f::ZERO, INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_along_ray() {
        let r = Ray::new(
            Point3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 2.0, 0.0),
            INFINITY,
        );
        assert_eq!(r.at(0.5), Point3f::new(1.0, 1.0, 0.0));
    }
}
