//! Plane representation in Hessian normal form.

use nalgebra::{Matrix4, Point3, RealField, Vector3, Vector4, convert, one, zero};

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f64 = 1e-5;

/// Threshold below which a line direction or a second plane counts as
/// parallel to a plane.
pub const PARALLEL_EPSILON: f64 = 1e-5;

/// Side of a plane, judged by the sign of the signed distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Distance above the tolerance
    Front,
    /// Distance below minus the tolerance; the side the clipper keeps
    Back,
    OnPlane,
}

/// Position of a whole vertex loop relative to a plane.
///
/// Vertices counted as on the plane are ignored unless every vertex is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Nothing behind the plane: clipping leaves nothing
    Front,
    /// Nothing in front of the plane
    Back,
    Coplanar,
    /// Crossed by the plane
    Spanning,
}

/// An oriented plane in Hessian normal form, `normal · x + d = 0`.
///
/// The signed distance of a point is `normal · p + d`. The clipping routines
/// keep the half-space with negative distance, so "behind" the plane means
/// "inside".
///
/// The normal is expected to have unit length. Constructors that take the
/// normal from the caller only check this in debug builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T> {
    pub(crate) normal: Vector3<T>,
    pub(crate) d: T,
}

impl<T: RealField + Copy> Plane<T> {
    /// Creates a plane from a unit normal and the constant term `d`.
    ///
    /// The pair is brought into canonical form: if `d > 0`, both the normal and
    /// `d` are negated. Afterwards `d <= 0`, which places the origin on the
    /// negative side (or on the plane) and makes `-d` the distance from the
    /// origin to the plane.
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        debug_assert!(
            is_unit(&normal),
            "Plane normal must have unit length, got {normal:?}"
        );
        if d > zero() {
            Self {
                normal: -normal,
                d: -d,
            }
        } else {
            Self { normal, d }
        }
    }

    /// Creates a plane from the coefficients of `a·x + b·y + c·z + d = 0`.
    ///
    /// `(a, b, c)` must already be a unit vector. See [`Plane::new`] for the
    /// sign normalization.
    pub fn from_coefficients(a: T, b: T, c: T, d: T) -> Self {
        Self::new(Vector3::new(a, b, c), d)
    }

    /// Creates a plane through three non-collinear points.
    ///
    /// The normal is `normalize((v1 - v2) × (v2 - v3))`, so the orientation is
    /// given by the winding of the points alone. No sign normalization is
    /// applied: the box helpers rely on the winding to point every face
    /// outward.
    pub fn from_points(v1: Point3<T>, v2: Point3<T>, v3: Point3<T>) -> Self {
        let cross = (v1 - v2).cross(&(v2 - v3));
        debug_assert!(
            cross.norm() > convert(f64::from(f32::EPSILON)),
            "Plane points must not be collinear"
        );
        let normal = cross.normalize();
        Self {
            normal,
            d: -normal.dot(&v1.coords),
        }
    }

    /// Reinterprets a 4-vector `(n.x, n.y, n.z, d)` as a plane, verbatim.
    ///
    /// Neither the normal nor the sign are adjusted.
    pub fn from_vec4(v: Vector4<T>) -> Self {
        Self {
            normal: v.xyz(),
            d: v.w,
        }
    }

    /// Returns the plane as the 4-vector `(n.x, n.y, n.z, d)`.
    #[inline]
    pub fn to_vec4(&self) -> Vector4<T> {
        Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    /// Returns the constant term `d` of `normal · x + d = 0`.
    #[inline]
    pub fn d(&self) -> T {
        self.d
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is on the side the normal points to
    /// - Negative: point is on the other side (the kept side when clipping)
    /// - Zero: point is on the plane
    #[inline]
    pub fn distance(&self, point: Point3<T>) -> T {
        self.normal.dot(&point.coords) + self.d
    }

    /// Classifies which side of the plane a point lies on.
    /// Uses the default `PLANE_EPSILON` tolerance.
    #[inline]
    pub fn classify_point(&self, point: Point3<T>) -> PlaneSide {
        self.classify_point_with_epsilon(point, convert(PLANE_EPSILON))
    }

    /// Classifies which side of the plane a point lies on, with a custom epsilon.
    pub fn classify_point_with_epsilon(&self, point: Point3<T>, epsilon: T) -> PlaneSide {
        let dist = self.distance(point);
        if dist > epsilon {
            PlaneSide::Front
        } else if dist < -epsilon {
            PlaneSide::Back
        } else {
            PlaneSide::OnPlane
        }
    }

    /// Returns a new plane with the normal flipped (facing the opposite direction).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// Projects a point onto the plane (finds the closest point on the plane).
    #[inline]
    pub fn project_point(&self, point: Point3<T>) -> Point3<T> {
        point - self.normal * self.distance(point)
    }

    /// Transforms the plane by a matrix that maps points `p` to `m * p`.
    ///
    /// Plane equations transform with the inverse transpose of the point
    /// transform; the result is rescaled so the normal has unit length again.
    /// The orientation is kept as is, there is no sign normalization.
    ///
    /// Returns `None` if the matrix is not invertible.
    pub fn transformed(&self, m: &Matrix4<T>) -> Option<Self> {
        let inverse = (*m).try_inverse()?;
        let coefficients = inverse.transpose() * self.to_vec4();
        let normal = coefficients.xyz();
        let len = normal.norm();
        if len <= zero() {
            return None;
        }
        Some(Self {
            normal: normal / len,
            d: coefficients.w / len,
        })
    }
}

fn is_unit<T: RealField + Copy>(v: &Vector3<T>) -> bool {
    (v.norm() - one::<T>()).abs() < convert(1e-3_f64)
}
