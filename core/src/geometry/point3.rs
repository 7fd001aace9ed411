//! 3-D Points

use crate::base::*;
use crate::geometry::Vector3;
use num_traits::{Num, Zero};
use std::ops::{Add, AddAssign, Index, Mul, Sub};

/// A 3-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D point at the origin.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if any coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the square of the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(&self, other: Self) -> T
    where
        T: Mul<Output = T> + Add<Output = T> + Copy,
    {
        (*self - other).length_squared()
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(&self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        self.distance_squared(other).sqrt()
    }

    /// Returns a point containing the componentwise minimum with another point.
    ///
    /// * `other` - The other point.
    pub fn min(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::new(
            min(self.x, other.x),
            min(self.y, other.y),
            min(self.z, other.z),
        )
    }

    /// Returns a point containing the componentwise maximum with another point.
    ///
    /// * `other` - The other point.
    pub fn max(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::new(
            max(self.x, other.x),
            max(self.y, other.y),
            max(self.z, other.z),
        )
    }
}

impl<T: Num> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point by the given vector.
    ///
    /// * `v` - The offset vector.
    fn add(self, v: Vector3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Num + Copy> AddAssign<Vector3<T>> for Point3<T> {
    /// Performs the `+=` operation with an offset vector.
    ///
    /// * `v` - The offset vector.
    fn add_assign(&mut self, v: Vector3<T>) {
        *self = *self + v;
    }
}

impl<T: Num> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Returns the vector from the other point to this point.
    ///
    /// * `other` - The other point.
    fn sub(self, other: Self) -> Vector3<T> {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point by the negated vector.
    ///
    /// * `v` - The offset vector.
    fn sub(self, v: Vector3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> Index<usize> for Point3<T> {
    type Output = T;

    /// Indexes the coordinates as `[x, y, z]`.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index {} for Point3", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(p + v, Point3::new(2.0, 3.0, 4.0));
        assert_eq!(p - v, Point3::new(0.0, 1.0, 2.0));
        assert_eq!(Point3::new(2.0, 3.0, 4.0) - p, v);
    }

    #[test]
    fn distance() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let q = Point3::new(3.0, 4.0, 0.0);
        assert_eq!(p.distance_squared(q), 25.0);
        assert_eq!(p.distance(q), 5.0);
    }
}
