//! 2-D Points

use crate::base::*;
use num_traits::Num;
use std::ops::{Add, Index, Sub};

/// A 2-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

/// 2-D point containing `Int` values.
pub type Point2i = Point2<Int>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Num> Add for Point2<T> {
    type Output = Self;

    /// Adds the given point's coordinates.
    ///
    /// * `other` - The other point.
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num> Sub for Point2<T> {
    type Output = Self;

    /// Subtracts the given point's coordinates.
    ///
    /// * `other` - The other point.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Indexes the coordinates as `[x, y]`.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid index {} for Point2", i),
        }
    }
}
