//! Axis-aligned box helpers and box slicing.
//!
//! A box is given by two corners: `llf` (lower-left-front, the minimum
//! corner) and `urb` (upper-right-back, the maximum corner). "Front" is the
//! `llf.z` side, "back" the `urb.z` side.

use log::debug;
use nalgebra::{Point3, RealField, Vector3};

use crate::{Line3, Plane, SliceSettings, clip_by_planes};

/// Returns the eight corners of the box, back face first.
///
/// Order: llb, lrb, urb, ulb (at `urb.z`), then llf, lrf, urf, ulf
/// (at `llf.z`). [`cube_planes`] depends on this order.
pub fn cube_vertices<T: RealField + Copy>(llf: Point3<T>, urb: Point3<T>) -> [Point3<T>; 8] {
    [
        Point3::new(llf.x, llf.y, urb.z), // 0: llb
        Point3::new(urb.x, llf.y, urb.z), // 1: lrb
        Point3::new(urb.x, urb.y, urb.z), // 2: urb
        Point3::new(llf.x, urb.y, urb.z), // 3: ulb
        Point3::new(llf.x, llf.y, llf.z), // 4: llf
        Point3::new(urb.x, llf.y, llf.z), // 5: lrf
        Point3::new(urb.x, urb.y, llf.z), // 6: urf
        Point3::new(llf.x, urb.y, llf.z), // 7: ulf
    ]
}

/// Corner triples of the six faces: front, left, back, right, bottom, top.
///
/// Wound so that [`Plane::from_points`] yields outward normals, which puts
/// the box interior on the negative side of every face.
const FACE_CORNERS: [[usize; 3]; 6] = [
    [6, 5, 4], // front (-z)
    [4, 0, 3], // left (-x)
    [0, 1, 2], // back (+z)
    [2, 1, 5], // right (+x)
    [4, 5, 1], // bottom (-y)
    [7, 3, 2], // top (+y)
];

/// Returns the six face planes of a box given its corners in
/// [`cube_vertices`] order.
///
/// Order: front, left, back, right, bottom, top. Points inside the box have
/// negative distance to every plane.
pub fn cube_planes<T: RealField + Copy>(corners: &[Point3<T>; 8]) -> [Plane<T>; 6] {
    FACE_CORNERS.map(|[a, b, c]| Plane::from_points(corners[a], corners[b], corners[c]))
}

/// Returns the six face planes of the box spanned by `llf` and `urb`.
pub fn aab_planes<T: RealField + Copy>(llf: Point3<T>, urb: Point3<T>) -> [Plane<T>; 6] {
    cube_planes(&cube_vertices(llf, urb))
}

/// Clips a polygon to the box whose face planes are `planes`, as returned by
/// [`aab_planes`].
pub fn clip_aab<T: RealField + Copy>(
    planes: &[Plane<T>; 6],
    polygon: &[Point3<T>],
) -> Vec<Point3<T>> {
    clip_by_planes(planes, polygon)
}

impl<T: RealField + Copy> Plane<T> {
    /// Builds a quad lying in this plane that covers the plane's whole cross
    /// section with the box spanned by `llf` and `urb`.
    ///
    /// Uses the default [`SliceSettings`].
    pub fn oversized_quad(&self, llf: Point3<T>, urb: Point3<T>) -> [Point3<T>; 4] {
        self.oversized_quad_with(llf, urb, &SliceSettings::default())
    }

    /// Builds the oversized quad with explicit settings.
    ///
    /// The box is inflated by the configured margin. Rays through the four
    /// corners of one inflated box face are then intersected with the plane.
    /// The rays run along z unless the plane is (nearly) parallel to the z
    /// axis, then along x, and along y if the plane is also (nearly) parallel
    /// to the x axis.
    pub fn oversized_quad_with(
        &self,
        llf: Point3<T>,
        urb: Point3<T>,
        settings: &SliceSettings<T>,
    ) -> [Point3<T>; 4] {
        let margin = Vector3::repeat(settings.margin.resolve(llf, urb));
        let lo = llf - margin;
        let hi = urb + margin;
        let n = self.normal;
        let zero = nalgebra::zero::<T>();

        // Corners are listed counter-clockwise around the ray direction.
        let (corners, direction) = if n.z.abs() >= settings.axis_epsilon {
            debug!("oversized quad: rays along z");
            (
                [
                    Point3::new(lo.x, lo.y, lo.z),
                    Point3::new(hi.x, lo.y, lo.z),
                    Point3::new(hi.x, hi.y, lo.z),
                    Point3::new(lo.x, hi.y, lo.z),
                ],
                Vector3::new(zero, zero, hi.z - lo.z),
            )
        } else if n.x.abs() >= settings.axis_epsilon {
            debug!("oversized quad: rays along x");
            (
                [
                    Point3::new(lo.x, lo.y, lo.z),
                    Point3::new(lo.x, hi.y, lo.z),
                    Point3::new(lo.x, hi.y, hi.z),
                    Point3::new(lo.x, lo.y, hi.z),
                ],
                Vector3::new(hi.x - lo.x, zero, zero),
            )
        } else {
            debug!("oversized quad: rays along y");
            (
                [
                    Point3::new(lo.x, lo.y, lo.z),
                    Point3::new(lo.x, lo.y, hi.z),
                    Point3::new(hi.x, lo.y, hi.z),
                    Point3::new(hi.x, lo.y, lo.z),
                ],
                Vector3::new(zero, hi.y - lo.y, zero),
            )
        };

        corners.map(|start| self.axis_ray_hit(&Line3::new(start, direction)))
    }

    /// Point where an axis ray crosses the plane. The axis was picked so that
    /// the ray is not parallel to the plane.
    fn axis_ray_hit(&self, ray: &Line3<T>) -> Point3<T> {
        let t = -self.distance(ray.start()) / self.normal.dot(&ray.direction());
        ray.point_at(t)
    }

    /// Computes the cross section of this plane with the box spanned by `llf`
    /// and `urb`.
    ///
    /// Builds the [`oversized_quad`](Self::oversized_quad) and clips it by the
    /// six [`aab_planes`]. The result is empty if the plane misses the box.
    pub fn clip_to_aab(&self, llf: Point3<T>, urb: Point3<T>) -> Vec<Point3<T>> {
        self.clip_to_aab_with(llf, urb, &SliceSettings::default())
    }

    /// Computes the cross section with the box, with explicit settings.
    pub fn clip_to_aab_with(
        &self,
        llf: Point3<T>,
        urb: Point3<T>,
        settings: &SliceSettings<T>,
    ) -> Vec<Point3<T>> {
        let planes = aab_planes(llf, urb);
        let quad = self.oversized_quad_with(llf, urb, settings);
        clip_aab(&planes, &quad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlaneSide, QuadMargin};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn assert_contains(polygon: &[Point3<f64>], expected: Point3<f64>) {
        assert!(
            polygon.iter().any(|v| (v - expected).norm() < 1e-9),
            "expected {expected} in {polygon:?}"
        );
    }

    #[test]
    fn cube_vertices_order() {
        let corners = cube_vertices(p(0.0, 1.0, 2.0), p(3.0, 4.0, 5.0));

        assert_eq!(corners[0], p(0.0, 1.0, 5.0));
        assert_eq!(corners[2], p(3.0, 4.0, 5.0));
        assert_eq!(corners[4], p(0.0, 1.0, 2.0));
        assert_eq!(corners[6], p(3.0, 4.0, 2.0));
        assert_eq!(corners[7], p(0.0, 4.0, 2.0));
    }

    #[test]
    fn cube_planes_face_outward() {
        let llf = p(0.0, 0.0, 0.0);
        let urb = p(10.0, 10.0, 10.0);
        let planes = aab_planes(llf, urb);

        let expected = [
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        for (plane, normal) in planes.iter().zip(expected) {
            assert_relative_eq!(plane.normal(), normal);
        }
    }

    #[test]
    fn box_center_is_inside_every_face() {
        // Boxes containing the origin, touching it, and far away from it
        let boxes = [
            (p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0)),
            (p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0)),
            (p(20.0, -30.0, 5.0), p(21.0, -10.0, 45.0)),
        ];

        for (llf, urb) in boxes {
            let center = Point3::from((llf.coords + urb.coords) / 2.0);
            for plane in aab_planes(llf, urb) {
                assert!(plane.distance(center) < 0.0);
            }
        }
    }

    #[test]
    fn corners_lie_on_their_faces() {
        let corners = cube_vertices(p(-2.0, 1.0, 3.0), p(4.0, 2.5, 9.0));
        let planes = cube_planes(&corners);

        // Every face contains four corners and has the other four behind it
        for plane in planes {
            let on = corners
                .iter()
                .filter(|c| plane.classify_point(**c) == PlaneSide::OnPlane)
                .count();
            let behind = corners
                .iter()
                .filter(|c| plane.classify_point(**c) == PlaneSide::Back)
                .count();
            assert_eq!((on, behind), (4, 4));
        }
    }

    #[test]
    fn oversized_quad_lies_in_plane() {
        let llf = p(0.0, 0.0, 0.0);
        let urb = p(10.0, 10.0, 10.0);
        let planes = [
            Plane::new(Vector3::new(0.0, 0.0, 1.0), -5.0),
            Plane::new(Vector3::new(1.0, 0.0, 0.0), -3.0),
            Plane::new(Vector3::new(0.0, 1.0, 0.0), -4.0),
            Plane::new(Vector3::new(1.0, 2.0, 3.0).normalize(), -8.0),
        ];

        for plane in planes {
            for corner in plane.oversized_quad(llf, urb) {
                assert_relative_eq!(plane.distance(corner), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn oversized_quad_extends_past_box() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -5.0);
        let quad = plane.oversized_quad(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0));

        assert_eq!(
            quad,
            [
                p(-5.0, -5.0, 5.0),
                p(15.0, -5.0, 5.0),
                p(15.0, 15.0, 5.0),
                p(-5.0, 15.0, 5.0),
            ]
        );
    }

    #[test]
    fn oversized_quad_axis_choice() {
        let llf = p(0.0, 0.0, 0.0);
        let urb = p(10.0, 10.0, 10.0);

        // Parallel to z: rays along x start on the x = -5 face
        let plane = Plane::new(Vector3::new(0.6, 0.8, 0.0), -6.0);
        let quad = plane.oversized_quad(llf, urb);
        assert_eq!(quad[0].y, -5.0);
        assert_eq!(quad[0].z, -5.0);
        assert_eq!(quad[2].y, 15.0);
        assert_eq!(quad[2].z, 15.0);

        // Parallel to z and x: rays along y
        let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), -4.0);
        let quad = plane.oversized_quad(llf, urb);
        assert_relative_eq!(quad[0], p(-5.0, 4.0, -5.0), epsilon = 1e-12);
        assert_relative_eq!(quad[2], p(15.0, 4.0, 15.0), epsilon = 1e-12);
    }

    #[test]
    fn relative_margin_scales_quad() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -0.5);
        let settings = SliceSettings::default().with_margin(QuadMargin::Relative(1.0));
        let quad = plane.oversized_quad_with(p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0), &settings);

        // Diagonal length 5
        assert_relative_eq!(quad[0], p(-5.0, -5.0, 0.5), epsilon = 1e-12);
        assert_relative_eq!(quad[2], p(8.0, 9.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn horizontal_slice_is_square() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -5.0);
        let slice = plane.clip_to_aab(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0));

        assert_eq!(slice.len(), 4);
        for v in &slice {
            assert!(v.x > -1e-9 && v.x < 10.0 + 1e-9);
            assert!(v.y > -1e-9 && v.y < 10.0 + 1e-9);
            assert_eq!(v.z, 5.0);
        }
        for corner in [
            p(0.0, 0.0, 5.0),
            p(10.0, 0.0, 5.0),
            p(10.0, 10.0, 5.0),
            p(0.0, 10.0, 5.0),
        ] {
            assert_contains(&slice, corner);
        }
    }

    #[test]
    fn vertical_slices() {
        let llf = p(0.0, 0.0, 0.0);
        let urb = p(10.0, 10.0, 10.0);

        let slice = Plane::new(Vector3::new(1.0, 0.0, 0.0), -3.0).clip_to_aab(llf, urb);
        assert_eq!(slice.len(), 4);
        assert!(slice.iter().all(|v| (v.x - 3.0).abs() < 1e-9));
        assert_contains(&slice, p(3.0, 10.0, 10.0));

        let slice = Plane::new(Vector3::new(0.0, 1.0, 0.0), -4.0).clip_to_aab(llf, urb);
        assert_eq!(slice.len(), 4);
        assert!(slice.iter().all(|v| (v.y - 4.0).abs() < 1e-9));
        assert_contains(&slice, p(0.0, 4.0, 10.0));
    }

    #[test]
    fn diagonal_slice_is_hexagon() {
        // x + y + z = 14.3 cuts all six faces
        let plane = Plane::new(Vector3::new(1.0, 1.0, 1.0).normalize(), -14.3 / 3f64.sqrt());
        let slice = plane.clip_to_aab(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0));

        assert_eq!(slice.len(), 6);
        for corner in [
            p(10.0, 4.3, 0.0),
            p(4.3, 10.0, 0.0),
            p(0.0, 10.0, 4.3),
            p(0.0, 4.3, 10.0),
            p(4.3, 0.0, 10.0),
            p(10.0, 0.0, 4.3),
        ] {
            assert_contains(&slice, corner);
        }
        for v in &slice {
            assert_relative_eq!(plane.distance(*v), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn vertex_on_box_face_is_dropped() {
        // The triangle touches the right face (x = 10) with one corner. Both
        // edges through that corner are lost, leaving a single vertex.
        let planes = aab_planes(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0));
        let triangle = [p(2.0, 2.0, 5.0), p(10.0, 5.0, 5.0), p(2.0, 8.0, 5.0)];

        assert_eq!(clip_aab(&planes, &triangle), vec![triangle[0]]);
    }

    #[test]
    fn plane_missing_box_yields_nothing() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -20.0);
        assert!(plane.clip_to_aab(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0)).is_empty());
    }

    #[test]
    fn slice_of_box_away_from_origin() {
        let llf = p(100.0, 200.0, 300.0);
        let urb = p(102.0, 203.0, 304.0);
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -302.0);

        let slice = plane.clip_to_aab(llf, urb);
        assert_eq!(slice.len(), 4);
        assert_contains(&slice, p(100.0, 200.0, 302.0));
        assert_contains(&slice, p(102.0, 203.0, 302.0));
    }
}
