//! Tunable constants for slicing a box with a plane.

use nalgebra::{Point3, RealField, convert};

/// Normal components smaller than this (in absolute value) make the oversized
/// quad switch to another projection axis.
pub const AXIS_EPSILON: f64 = 1e-6;

/// Amount the box is inflated by on every side before the oversized quad is
/// built.
pub const QUAD_MARGIN: f64 = 5.0;

/// How far the box is inflated before building the oversized quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadMargin<T> {
    /// A fixed distance in world units.
    Fixed(T),
    /// A multiple of the length of the box diagonal.
    Relative(T),
}

impl<T: RealField + Copy> QuadMargin<T> {
    /// Resolves the margin for the box spanned by `llf` and `urb`.
    pub fn resolve(&self, llf: Point3<T>, urb: Point3<T>) -> T {
        match *self {
            QuadMargin::Fixed(margin) => margin,
            QuadMargin::Relative(factor) => factor * (urb - llf).norm(),
        }
    }
}

impl<T: RealField + Copy> Default for QuadMargin<T> {
    fn default() -> Self {
        QuadMargin::Fixed(convert(QUAD_MARGIN))
    }
}

/// Settings used by [`Plane::oversized_quad_with`](crate::Plane::oversized_quad_with)
/// and [`Plane::clip_to_aab_with`](crate::Plane::clip_to_aab_with).
///
/// The default reproduces the fixed constants `AXIS_EPSILON` and
/// `QUAD_MARGIN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSettings<T> {
    /// Threshold on `|normal.z|` (then `|normal.x|`) for the projection axis.
    pub axis_epsilon: T,
    /// Inflation of the box before the quad is built.
    pub margin: QuadMargin<T>,
}

impl<T: RealField + Copy> SliceSettings<T> {
    pub fn with_margin(mut self, margin: QuadMargin<T>) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_axis_epsilon(mut self, axis_epsilon: T) -> Self {
        self.axis_epsilon = axis_epsilon;
        self
    }
}

impl<T: RealField + Copy> Default for SliceSettings<T> {
    fn default() -> Self {
        Self {
            axis_epsilon: convert(AXIS_EPSILON),
            margin: QuadMargin::default(),
        }
    }
}
