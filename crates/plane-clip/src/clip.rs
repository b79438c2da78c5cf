//! Polygon clipping against planes.
//!
//! Every routine keeps the part of a polygon with negative signed distance to
//! the clip plane. The walk is Sutherland-Hodgman over each edge
//! `(v[i], v[i + 1])`, wrapping around to the first vertex:
//!
//! - both endpoints inside: emit the second endpoint
//! - endpoints on opposite sides: emit the crossing point, followed by the
//!   second endpoint if the edge enters the inside
//! - otherwise: emit nothing
//!
//! The comparisons are strict. A vertex lying exactly on the plane is neither
//! inside nor outside and only survives as part of a crossing edge.

use log::trace;
use nalgebra::{Point3, RealField, Scalar, zero};

use crate::polygon::classify_vertices;
use crate::{Classification, ClipError, Plane, Polygon, aab_planes};

/// Trait for geometry that can be clipped by a plane.
pub trait Clippable<T: Scalar> {
    /// Clips the geometry by a plane, keeping the part behind it.
    ///
    /// Returns `None` if fewer than three vertices remain.
    fn clip(&self, plane: &Plane<T>) -> Option<Polygon<T>>;

    /// Clips the geometry by the six faces of the axis-aligned box spanned
    /// by `llf` and `urb`.
    ///
    /// Returns `None` if fewer than three vertices remain.
    fn clip_aab(&self, llf: Point3<T>, urb: Point3<T>) -> Option<Polygon<T>>;
}

impl<T: RealField + Copy> Clippable<T> for [Point3<T>] {
    fn clip(&self, plane: &Plane<T>) -> Option<Polygon<T>> {
        // Without a vertex strictly behind the plane the walk emits nothing
        match classify_vertices(plane, self, zero()) {
            Classification::Front | Classification::Coplanar => None,
            Classification::Back | Classification::Spanning => {
                Polygon::try_new(clip_polygon(plane, self))
            }
        }
    }

    fn clip_aab(&self, llf: Point3<T>, urb: Point3<T>) -> Option<Polygon<T>> {
        Polygon::try_new(clip_by_planes(&aab_planes(llf, urb), self))
    }
}

impl<T: RealField + Copy> Clippable<T> for Polygon<T> {
    fn clip(&self, plane: &Plane<T>) -> Option<Polygon<T>> {
        self.vertices().clip(plane)
    }

    fn clip_aab(&self, llf: Point3<T>, urb: Point3<T>) -> Option<Polygon<T>> {
        self.vertices().clip_aab(llf, urb)
    }
}

/// Upper bound on the vertex count of a polygon with `len` vertices after
/// clipping by one plane. Each edge emits at most two vertices.
#[inline]
pub const fn clipped_capacity(len: usize) -> usize {
    2 * len
}

/// Walks the edges of `polygon` and hands every output vertex to `emit`.
fn for_each_clipped<T, F>(plane: &Plane<T>, polygon: &[Point3<T>], mut emit: F)
where
    T: RealField + Copy,
    F: FnMut(Point3<T>),
{
    let Some(&first) = polygon.first() else {
        return;
    };
    let zero = zero::<T>();
    let first_distance = plane.distance(first);
    let mut current_distance = first_distance;

    for (i, &current) in polygon.iter().enumerate() {
        let next_idx = (i + 1) % polygon.len();
        let next = polygon[next_idx];
        let next_distance = if next_idx == 0 {
            first_distance
        } else {
            plane.distance(next)
        };

        if current_distance < zero && next_distance < zero {
            emit(next);
        } else if current_distance * next_distance < zero {
            let scale = current_distance / (current_distance - next_distance);
            emit(current + (next - current) * scale);
            if current_distance > zero && next_distance < zero {
                emit(next);
            }
        }

        current_distance = next_distance;
    }
}

/// Clips a polygon by a plane and returns the kept part.
///
/// The result may have fewer than three vertices, or none at all.
pub fn clip_polygon<T: RealField + Copy>(
    plane: &Plane<T>,
    polygon: &[Point3<T>],
) -> Vec<Point3<T>> {
    let mut result = Vec::with_capacity(polygon.len() + 1);
    clip_polygon_into(plane, polygon, &mut result);
    result
}

/// Clips a polygon by a plane into `result`, which is cleared first.
pub fn clip_polygon_into<T: RealField + Copy>(
    plane: &Plane<T>,
    polygon: &[Point3<T>],
    result: &mut Vec<Point3<T>>,
) {
    result.clear();
    for_each_clipped(plane, polygon, |vertex| result.push(vertex));
}

/// Clips a polygon by a plane into a caller-provided buffer.
///
/// Returns the number of vertices written to the front of `output`. The exact
/// count is determined before anything is written; if `output` is too short,
/// [`ClipError::BufferTooSmall`] is returned and `output` is left untouched.
/// A buffer of [`clipped_capacity`] vertices is always large enough.
pub fn clip_polygon_to_slice<T: RealField + Copy>(
    plane: &Plane<T>,
    polygon: &[Point3<T>],
    output: &mut [Point3<T>],
) -> Result<usize, ClipError> {
    let mut required = 0;
    for_each_clipped(plane, polygon, |_| required += 1);
    if required > output.len() {
        return Err(ClipError::BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    let mut count = 0;
    for_each_clipped(plane, polygon, |vertex| {
        output[count] = vertex;
        count += 1;
    });
    Ok(count)
}

/// Clips a polygon by a sequence of planes, in order.
///
/// The output of each plane is the input of the next. With the six planes of
/// [`aab_planes`] this cuts the polygon to an axis-aligned box.
pub fn clip_by_planes<T: RealField + Copy>(
    planes: &[Plane<T>],
    polygon: &[Point3<T>],
) -> Vec<Point3<T>> {
    let mut input = polygon.to_vec();
    let mut output = Vec::with_capacity(polygon.len() + planes.len());

    for (index, plane) in planes.iter().enumerate() {
        if input.is_empty() {
            break;
        }
        clip_polygon_into(plane, &input, &mut output);
        trace!(
            "clip plane {index}: {} -> {} vertices",
            input.len(),
            output.len()
        );
        std::mem::swap(&mut input, &mut output);
    }

    input
}

/// Clips a polygon by a sequence of planes using caller-provided buffers.
///
/// Intermediate polygons alternate between `scratch` and `output`; the final
/// polygon always ends up at the front of `output` and its vertex count is
/// returned. Fails with [`ClipError::BufferTooSmall`] as soon as an
/// intermediate polygon does not fit the buffer it is written to.
pub fn clip_by_planes_to_slice<T: RealField + Copy>(
    planes: &[Plane<T>],
    polygon: &[Point3<T>],
    scratch: &mut [Point3<T>],
    output: &mut [Point3<T>],
) -> Result<usize, ClipError> {
    let Some((first, rest)) = planes.split_first() else {
        return copy_to_slice(polygon, output);
    };

    // Each remaining plane swaps the buffers once; start in the buffer that
    // makes the last write land in `output`.
    let (mut current, mut next) = if rest.len() % 2 == 0 {
        (&mut *output, &mut *scratch)
    } else {
        (&mut *scratch, &mut *output)
    };

    let mut count = clip_polygon_to_slice(first, polygon, current)?;
    trace!("clip plane 0: {} -> {count} vertices", polygon.len());

    for (index, plane) in rest.iter().enumerate() {
        let clipped = clip_polygon_to_slice(plane, &current[..count], next)?;
        trace!("clip plane {}: {count} -> {clipped} vertices", index + 1);
        count = clipped;
        std::mem::swap(&mut current, &mut next);
    }

    Ok(count)
}

fn copy_to_slice<T: RealField + Copy>(
    polygon: &[Point3<T>],
    output: &mut [Point3<T>],
) -> Result<usize, ClipError> {
    if polygon.len() > output.len() {
        return Err(ClipError::BufferTooSmall {
            required: polygon.len(),
            available: output.len(),
        });
    }
    output[..polygon.len()].copy_from_slice(polygon);
    Ok(polygon.len())
}
