//! Parametric lines.

use nalgebra::{Point3, RealField, Scalar, Vector3};

/// A parametric line `start + t * direction`.
///
/// The direction is not normalized. A line built with [`Line3::from_points`]
/// reaches its end point at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3<T: Scalar> {
    start: Point3<T>,
    direction: Vector3<T>,
}

impl<T: RealField + Copy> Line3<T> {
    /// Creates a line from a start point and a direction vector.
    pub fn new(start: Point3<T>, direction: Vector3<T>) -> Self {
        Self { start, direction }
    }

    /// Creates the line through `start` (at `t = 0`) and `end` (at `t = 1`).
    pub fn from_points(start: Point3<T>, end: Point3<T>) -> Self {
        Self {
            start,
            direction: end - start,
        }
    }

    #[inline]
    pub fn start(&self) -> Point3<T> {
        self.start
    }

    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        self.direction
    }

    /// The point at `t = 1`.
    #[inline]
    pub fn end(&self) -> Point3<T> {
        self.start + self.direction
    }

    /// Returns the point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.start + self.direction * t
    }
}
