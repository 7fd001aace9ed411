//! 3-D Bounding Boxes

use crate::base::*;
use crate::geometry::{Point3f, Vector3f};

/// A 3-D axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3f {
    /// Minimum bounds.
    pub p_min: Point3f,

    /// Maximum bounds.
    pub p_max: Point3f,
}

impl Bounds3f {
    /// Creates a new bounding box from 2 points. The minimum and maximum bounds
    /// are computed componentwise.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point3f, p2: Point3f) -> Self {
        Self {
            p_min: p1.min(&p2),
            p_max: p1.max(&p2),
        }
    }

    /// Creates an empty bounding box that any union will override.
    pub fn empty() -> Self {
        Self {
            p_min: Point3f::new(INFINITY, INFINITY, INFINITY),
            p_max: Point3f::new(-INFINITY, -INFINITY, -INFINITY),
        }
    }

    /// Returns the vector along the box diagonal from the minimum to the
    /// maximum point.
    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    /// Returns the union with another bounding box.
    ///
    /// * `other` - The other bounding box.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            p_min: self.p_min.min(&other.p_min),
            p_max: self.p_max.max(&other.p_max),
        }
    }

    /// Returns the union with a point.
    ///
    /// * `p` - The point.
    pub fn union_point(&self, p: &Point3f) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns true if the point is inside the bounds.
    ///
    /// * `p` - The point.
    pub fn contains(&self, p: &Point3f) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }
}

impl From<Point3f> for Bounds3f {
    /// Use a 3-D point as minimum and maximum bounds.
    ///
    /// * `p` - 3-D point.
    fn from(p: Point3f) -> Self {
        Self { p_min: p, p_max: p }
    }
}
