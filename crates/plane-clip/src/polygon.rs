//! Convex polygon representation.

use nalgebra::{Point3, RealField, Scalar, Vector3, convert};

use crate::{Classification, PLANE_EPSILON, Plane, PlaneSide};

/// A convex polygon in 3D space, defined by an ordered loop of vertices.
///
/// The last vertex connects back to the first; the loop is not closed by a
/// duplicate vertex. Vertices should be coplanar. A polygon always has at
/// least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T: Scalar> {
    vertices: Vec<Point3<T>>,
}

impl<T: RealField + Copy> Polygon<T> {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Panics
    /// Panics if fewer than 3 vertices are provided. Use [`Polygon::try_new`]
    /// for clip results, which may come out degenerate.
    pub fn new(vertices: Vec<Point3<T>>) -> Self {
        assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices, got {}",
            vertices.len()
        );
        Self { vertices }
    }

    /// Creates a polygon, or returns `None` if fewer than 3 vertices are given.
    pub fn try_new(vertices: Vec<Point3<T>>) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices })
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertex loop.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point3<T>> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, kept alongside `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Computes the (unnormalized) normal vector of the polygon.
    ///
    /// Uses the first three vertices, with the same winding rule as
    /// [`Plane::from_points`].
    pub fn normal(&self) -> Vector3<T> {
        let a = &self.vertices[0];
        let b = &self.vertices[1];
        let c = &self.vertices[2];
        (a - b).cross(&(b - c))
    }

    /// Computes the unit normal vector of the polygon.
    ///
    /// Returns `None` if the first three vertices are collinear.
    pub fn unit_normal(&self) -> Option<Vector3<T>> {
        self.normal().try_normalize(convert(f64::from(f32::EPSILON)))
    }

    /// Returns the plane that this polygon lies on.
    pub fn plane(&self) -> Plane<T> {
        Plane::from_points(self.vertices[0], self.vertices[1], self.vertices[2])
    }

    /// Computes the centroid (vertex average) of the polygon.
    pub fn centroid(&self) -> Point3<T> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        let count: T = convert(self.vertices.len() as f64);
        Point3::from(sum / count)
    }

    /// Where the polygon lies relative to `plane`, with vertices closer than
    /// `PLANE_EPSILON` counted as on the plane.
    #[inline]
    pub fn classify(&self, plane: &Plane<T>) -> Classification {
        classify_vertices(plane, &self.vertices, convert(PLANE_EPSILON))
    }

    /// Like [`Polygon::classify`] with a custom epsilon. An epsilon of zero
    /// matches the strict sign tests of the clipper.
    #[inline]
    pub fn classify_with_epsilon(&self, plane: &Plane<T>, epsilon: T) -> Classification {
        classify_vertices(plane, &self.vertices, epsilon)
    }
}

/// Classifies a vertex loop against a plane.
///
/// Vertices on the plane do not decide the result unless all of them are on
/// it. An empty loop counts as coplanar.
pub(crate) fn classify_vertices<T: RealField + Copy>(
    plane: &Plane<T>,
    vertices: &[Point3<T>],
    epsilon: T,
) -> Classification {
    let (mut any_front, mut any_back) = (false, false);
    for vertex in vertices {
        match plane.classify_point_with_epsilon(*vertex, epsilon) {
            PlaneSide::Front => any_front = true,
            PlaneSide::Back => any_back = true,
            PlaneSide::OnPlane => {}
        }
    }

    match (any_front, any_back) {
        (true, true) => Classification::Spanning,
        (true, false) => Classification::Front,
        (false, true) => Classification::Back,
        (false, false) => Classification::Coplanar,
    }
}

impl<T: RealField + Copy> From<[Point3<T>; 4]> for Polygon<T> {
    fn from(quad: [Point3<T>; 4]) -> Self {
        Self {
            vertices: quad.to_vec(),
        }
    }
}

impl<T: RealField + Copy> From<Polygon<T>> for Plane<T> {
    fn from(polygon: Polygon<T>) -> Self {
        polygon.plane()
    }
}

impl<T: RealField + Copy> From<&Polygon<T>> for Plane<T> {
    fn from(polygon: &Polygon<T>) -> Self {
        polygon.plane()
    }
}
