use crate::config::DEGENERACY_EPS;
use crate::error::GeometryError;
use crate::geometry::{dot, Point2, Segment2, Vector2};

/// 2D cross product (z component of the 3D one).
pub fn perp_dot(u: &Vector2, v: &Vector2) -> f64 {
    u.components[0] * v.components[1] - u.components[1] * v.components[0]
}

impl Vector2 {
    /// The vector rotated by -90°: `(x, y) -> (y, -x)`.
    pub fn rotated_cw(&self) -> Self {
        let [x, y] = self.components;
        Vector2::new([y, -x])
    }
}

/// A line through `point` along the unit vector `direction`.
///
/// The line's normal is the direction rotated clockwise; signed distances are
/// positive on that side.
#[derive(Clone, Copy, Debug)]
pub struct Line2 {
    point: Point2,
    direction: Vector2,
}

impl Line2 {
    pub fn new(point: Point2, direction: Vector2) -> Result<Self, GeometryError> {
        Ok(Self { point, direction: direction.normalized()? })
    }

    pub fn through(first: &Point2, second: &Point2) -> Result<Self, GeometryError> {
        Self::new(*first, Vector2::by_points(first, second)?)
    }

    /// The perpendicular bisector of `first`-`second`, oriented so its normal points at `second`.
    pub fn perpendicular_bisector(first: &Point2, second: &Point2) -> Result<Self, GeometryError> {
        let v = Vector2::by_points(first, second)?;
        Self::new(first.midpoint(second), Vector2::new([-v.components[1], v.components[0]]))
    }

    pub fn point(&self) -> Point2 {
        self.point
    }

    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    pub fn normal(&self) -> Vector2 {
        self.direction.rotated_cw()
    }

    pub fn at(&self, t: f64) -> Point2 {
        self.point + self.direction * t
    }

    pub fn signed_distance(&self, p: &Point2) -> f64 {
        dot(&self.normal(), &(*p - self.point))
    }

    /// A long segment along the line, `stretch` units to either side of the anchor.
    pub fn stretched(&self, stretch: f64) -> Segment2 {
        Segment2::new(self.at(-stretch), self.at(stretch))
    }
}

impl Segment2 {
    pub fn line(&self) -> Result<Line2, GeometryError> {
        Line2::through(&self.first, &self.second)
    }
}

/// Line-line intersection, `None` for parallel lines.
pub fn line_line(first: &Line2, second: &Line2) -> Option<Point2> {
    let denominator = perp_dot(&first.direction, &second.direction);
    if denominator.abs() < DEGENERACY_EPS {
        return None;
    }
    let t = perp_dot(&(second.point - first.point), &second.direction) / denominator;
    Some(first.at(t))
}
