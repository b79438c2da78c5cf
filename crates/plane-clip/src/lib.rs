//! Plane geometry and convex polygon clipping for slicing axis-aligned boxes.
//!
//! A [`Plane`] is kept in Hessian normal form. Polygons are clipped against
//! one plane at a time, keeping the side with negative signed distance, and
//! chains of such clips cut a polygon down to a box. The typical use is
//! [`Plane::clip_to_aab`], which returns the cross section of a cutting plane
//! with a volume's bounding box:
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use plane_clip::Plane;
//!
//! let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -5.0);
//! let slice = plane.clip_to_aab(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
//! assert_eq!(slice.len(), 4);
//! ```

mod aab;
mod clip;
mod error;
mod intersect;
mod line;
mod plane;
mod polygon;
mod settings;

pub use aab::{aab_planes, clip_aab, cube_planes, cube_vertices};
pub use clip::{
    Clippable, clip_by_planes, clip_by_planes_to_slice, clip_polygon, clip_polygon_into,
    clip_polygon_to_slice, clipped_capacity,
};
pub use error::ClipError;
pub use line::Line3;
pub use plane::{Classification, PARALLEL_EPSILON, PLANE_EPSILON, Plane, PlaneSide};
pub use polygon::Polygon;
pub use settings::{AXIS_EPSILON, QUAD_MARGIN, QuadMargin, SliceSettings};
