//! Line/plane and plane/plane intersection.

use log::debug;
use nalgebra::{Point3, RealField, convert, one};

use crate::{Line3, PARALLEL_EPSILON, Plane};

impl<T: RealField + Copy> Plane<T> {
    /// Intersects a line with the plane.
    ///
    /// Returns the parameter `t` at which `line.point_at(t)` lies on the plane,
    /// or `None` if the line is parallel to the plane (within
    /// `PARALLEL_EPSILON`).
    #[inline]
    pub fn intersect_line(&self, line: &Line3<T>) -> Option<T> {
        self.intersect_line_with_epsilon(line, convert(PARALLEL_EPSILON))
    }

    /// Intersects a line with the plane, with a custom parallelism epsilon.
    ///
    /// The epsilon is compared against `|normal · direction|`, so it scales
    /// with the length of the line's direction vector.
    pub fn intersect_line_with_epsilon(&self, line: &Line3<T>, epsilon: T) -> Option<T> {
        let denom = self.normal.dot(&line.direction());
        if denom.abs() < epsilon {
            debug!("line is parallel to plane (normal · direction = {denom:?})");
            return None;
        }
        Some(self.distance(line.start()) / -denom)
    }

    /// Intersects two planes.
    ///
    /// Returns the line shared by both planes, or `None` if they are parallel
    /// (within `PARALLEL_EPSILON`). The line starts at the point of the
    /// intersection closest to the origin and runs along
    /// `self.normal × other.normal`.
    #[inline]
    pub fn intersect_plane(&self, other: &Plane<T>) -> Option<Line3<T>> {
        self.intersect_plane_with_epsilon(other, convert(PARALLEL_EPSILON))
    }

    /// Intersects two planes, with a custom parallelism epsilon.
    pub fn intersect_plane_with_epsilon(&self, other: &Plane<T>, epsilon: T) -> Option<Line3<T>> {
        let n1 = self.normal;
        let n2 = other.normal;
        let cos = n1.dot(&n2);

        // Gram determinant of the two normals
        let det = one::<T>() - cos * cos;
        if det.abs() < epsilon {
            debug!("planes are parallel (determinant = {det:?})");
            return None;
        }

        // Solve n1 · x = -d1, n2 · x = -d2 for x = c1 * n1 + c2 * n2
        let h1 = -self.d;
        let h2 = -other.d;
        let c1 = (h1 - h2 * cos) / det;
        let c2 = (h2 - h1 * cos) / det;

        let start = Point3::from(n1 * c1 + n2 * c2);
        Some(Line3::new(start, n1.cross(&n2)))
    }
}
