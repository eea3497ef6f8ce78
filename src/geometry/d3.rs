use std::hash::{Hash, Hasher};

use crate::config::{COINCIDENCE_EPS, DEGENERACY_EPS, REFERENCE_NORMAL};
use crate::error::GeometryError;
use crate::geometry::{dot, round_key, Point3, Segment3, Vector3};

/// Cross product of two 3D vectors.
pub fn cross(u: &Vector3, v: &Vector3) -> Vector3 {
    let [ux, uy, uz] = u.components;
    let [vx, vy, vz] = v.components;
    Vector3::new([uy * vz - uz * vy, uz * vx - ux * vz, ux * vy - uy * vx])
}

impl Vector3 {
    pub fn cross(&self, other: &Self) -> Self {
        cross(self, other)
    }
}

/// Signed angle from `u` to `v`, measured around the fixed [`REFERENCE_NORMAL`].
pub fn angle_between(u: &Vector3, v: &Vector3) -> f64 {
    signed_angle(u, v, &Vector3::new(REFERENCE_NORMAL))
}

/// Signed angle from `u` to `v` in `(-π, π]`; the sign comes from the mixed product with `reference`.
pub fn signed_angle(u: &Vector3, v: &Vector3, reference: &Vector3) -> f64 {
    let mixed = dot(reference, &cross(u, v));
    mixed.atan2(dot(u, v))
}

// ======================== PLANE ========================

/// A plane through `point` with unit `normal`: `A·x + B·y + C·z + D = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
}

impl Plane {
    /// Builds a plane, normalizing `normal`. A zero normal is rejected.
    pub fn new(point: Point3, normal: Vector3) -> Result<Self, GeometryError> {
        Ok(Self { point, normal: normal.normalized()? })
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn a(&self) -> f64 {
        self.normal.components[0]
    }

    pub fn b(&self) -> f64 {
        self.normal.components[1]
    }

    pub fn c(&self) -> f64 {
        self.normal.components[2]
    }

    /// `D = -(A·x0 + B·y0 + C·z0)` for the anchor point `(x0, y0, z0)`.
    pub fn d(&self) -> f64 {
        -dot(&self.normal, &self.point.to_vector())
    }

    pub fn coefficients(&self) -> [f64; 4] {
        [self.a(), self.b(), self.c(), self.d()]
    }

    /// Signed distance of `p`; positive on the side the normal points to.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        dot(&self.normal, &(*p - self.point))
    }

    /// Whether `p` lies on the plane within [`COINCIDENCE_EPS`].
    pub fn passes_through(&self, p: &Point3) -> bool {
        self.signed_distance(p).abs() < COINCIDENCE_EPS
    }

    /// Rounded `(A, B, C, D)` used for equality and hashing.
    pub fn key(&self) -> [i64; 4] {
        self.coefficients().map(round_key)
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Plane {}

impl Hash for Plane {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// ======================== LINE ========================

/// A line through `point` along the unit vector `direction` (components `l, m, n`).
#[derive(Clone, Copy, Debug)]
pub struct Line3 {
    point: Point3,
    direction: Vector3,
}

impl Line3 {
    pub fn new(point: Point3, direction: Vector3) -> Result<Self, GeometryError> {
        Ok(Self { point, direction: direction.normalized()? })
    }

    pub fn through(first: &Point3, second: &Point3) -> Result<Self, GeometryError> {
        Self::new(*first, Vector3::by_points(first, second)?)
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.point + self.direction * t
    }
}

impl Segment3 {
    /// The line carrying the segment; fails for a zero-length segment.
    pub fn line(&self) -> Result<Line3, GeometryError> {
        Line3::through(&self.first, &self.second)
    }
}

// ======================== INTERSECTIONS ========================

/// Plane-line intersection, `None` when the line is parallel to the plane.
pub fn plane_line(plane: &Plane, line: &Line3) -> Option<Point3> {
    let denominator = dot(&plane.normal, &line.direction);
    if denominator.abs() < DEGENERACY_EPS {
        return None;
    }
    let numerator = dot(&plane.normal, &(plane.point - line.point));
    Some(line.at(numerator / denominator))
}

/// Plane-plane intersection, `None` for parallel planes.
///
/// The anchor point is found by setting one coordinate to zero and solving the
/// remaining 2x2 system by Cramer's rule. All three sub-systems are tried and the
/// best conditioned one is kept.
pub fn plane_plane(first: &Plane, second: &Plane) -> Option<Line3> {
    let [a1, b1, c1, d1] = first.coefficients();
    let [a2, b2, c2, d2] = second.coefficients();

    // (free coordinate pair, coefficient matrix) for x = 0, y = 0, z = 0
    let systems = [
        (0, [b1, c1, b2, c2]),
        (1, [a1, c1, a2, c2]),
        (2, [a1, b1, a2, b2]),
    ];

    let (fixed, [p, q, r, s]) = systems
        .into_iter()
        .max_by(|x, y| det2(x.1).abs().total_cmp(&det2(y.1).abs()))?;

    let (u, v) = cramer_solve([p, q, r, s], [-d1, -d2])?;
    let point = match fixed {
        0 => Point3::new([0.0, u, v]),
        1 => Point3::new([u, 0.0, v]),
        _ => Point3::new([u, v, 0.0]),
    };
    Line3::new(point, cross(&first.normal, &second.normal)).ok()
}

/// Plane-segment intersection: the plane-line point, kept only if it lies on the segment.
pub fn plane_segment(plane: &Plane, segment: &Segment3) -> Result<Option<Point3>, GeometryError> {
    let line = segment.line()?;
    Ok(plane_line(plane, &line).filter(|p| segment.contains(p)))
}

fn det2([a, b, c, d]: [f64; 4]) -> f64 {
    a * d - c * b
}

/// Solves `(a b | e), (c d | f)`; `None` when the determinant vanishes.
fn cramer_solve(mat: [f64; 4], rhs: [f64; 2]) -> Option<(f64, f64)> {
    let [a, b, c, d] = mat;
    let [e, f] = rhs;
    let det = det2(mat);
    if det.abs() < DEGENERACY_EPS {
        return None;
    }
    Some((det2([e, b, f, d]) / det, det2([a, e, c, f]) / det))
}

// ======================== DYNAMIC DISPATCH ========================

/// Any primitive the kernel knows about.
#[derive(Clone, Copy, Debug)]
pub enum Entity3 {
    Point(Point3),
    Line(Line3),
    Segment(Segment3),
    Plane(Plane),
}

impl Entity3 {
    pub fn kind(&self) -> &'static str {
        match self {
            Entity3::Point(_) => "point",
            Entity3::Line(_) => "line",
            Entity3::Segment(_) => "segment",
            Entity3::Plane(_) => "plane",
        }
    }
}

/// Result of [`intersect`].
#[derive(Clone, Copy, Debug)]
pub enum Intersection3 {
    Point(Point3),
    Line(Line3),
}

/// Intersects two entities in either order.
///
/// Plane-line and plane-segment give a point, plane-plane gives a line. Other
/// pairs are a usage error and fail with [`GeometryError::UnsupportedIntersection`].
pub fn intersect(first: &Entity3, second: &Entity3) -> Result<Option<Intersection3>, GeometryError> {
    match (first, second) {
        (Entity3::Plane(p), Entity3::Line(l)) | (Entity3::Line(l), Entity3::Plane(p)) => {
            Ok(plane_line(p, l).map(Intersection3::Point))
        }
        (Entity3::Plane(p), Entity3::Segment(s)) | (Entity3::Segment(s), Entity3::Plane(p)) => {
            Ok(plane_segment(p, s)?.map(Intersection3::Point))
        }
        (Entity3::Plane(p), Entity3::Plane(q)) => Ok(plane_plane(p, q).map(Intersection3::Line)),
        _ => Err(GeometryError::UnsupportedIntersection {
            first: first.kind(),
            second: second.kind(),
        }),
    }
}
