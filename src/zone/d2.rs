//! Analytic 2D zone resolver.
//!
//! A bounding square is split by every Bragg line; each convex piece remembers
//! how many lines separate it from the origin. Zone `n` is the union of the
//! pieces with `n - 1` crossings. This is exact and resolution independent, and
//! serves as the reference for the raster explorer.

use crate::error::{Error, Result};
use crate::geometry::d2::{perp_dot, Line2};
use crate::geometry::Point2;

const SPLIT_EPS: f64 = 1e-9;

/// A convex polygon with vertices in counter-clockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2>,
}

impl Polygon2 {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned square `[-half_extent, half_extent]²`.
    pub fn square(half_extent: f64) -> Self {
        let h = half_extent;
        Self::new(vec![
            Point2::new([-h, -h]),
            Point2::new([h, -h]),
            Point2::new([h, h]),
            Point2::new([-h, h]),
        ])
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Shoelace area.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += perp_dot(&self.vertices[i].to_vector(), &self.vertices[j].to_vector());
        }
        (area * 0.5).abs()
    }

    pub fn centroid(&self) -> Point2 {
        let n = self.vertices.len();
        if n < 3 {
            return Point2::origin();
        }
        let (mut cx, mut cy, mut area) = (0.0, 0.0, 0.0);
        for i in 0..n {
            let j = (i + 1) % n;
            let (pi, pj) = (self.vertices[i], self.vertices[j]);
            let cross = perp_dot(&pi.to_vector(), &pj.to_vector());
            area += cross;
            cx += (pi.x() + pj.x()) * cross;
            cy += (pi.y() + pj.y()) * cross;
        }
        if area.abs() < SPLIT_EPS {
            return Point2::origin();
        }
        let factor = 1.0 / (3.0 * area);
        Point2::new([cx * factor, cy * factor])
    }

    /// Splits the polygon by `line` into the part on the origin side (non-positive
    /// signed distance) and the part beyond it. Vertices on the line go to both.
    pub fn split(&self, line: &Line2) -> (Option<Polygon2>, Option<Polygon2>) {
        let n = self.vertices.len();
        let dists: Vec<f64> = self.vertices.iter().map(|p| line.signed_distance(p)).collect();

        if dists.iter().all(|d| *d <= SPLIT_EPS) {
            return (Some(self.clone()), None);
        }
        if dists.iter().all(|d| *d >= -SPLIT_EPS) {
            return (None, Some(self.clone()));
        }

        let mut near = Vec::with_capacity(n + 1);
        let mut far = Vec::with_capacity(n + 1);
        for i in 0..n {
            let j = (i + 1) % n;
            let (di, dj) = (dists[i], dists[j]);
            let vi = self.vertices[i];

            if di <= SPLIT_EPS {
                near.push(vi);
            }
            if di >= -SPLIT_EPS {
                far.push(vi);
            }
            if (di < -SPLIT_EPS && dj > SPLIT_EPS) || (di > SPLIT_EPS && dj < -SPLIT_EPS) {
                let t = di / (di - dj);
                let hit = vi + (self.vertices[j] - vi) * t;
                near.push(hit);
                far.push(hit);
            }
        }

        (Self::non_degenerate(near), Self::non_degenerate(far))
    }

    fn non_degenerate(vertices: Vec<Point2>) -> Option<Polygon2> {
        let polygon = Polygon2::new(vertices);
        (polygon.vertices.len() >= 3 && polygon.area() > SPLIT_EPS).then_some(polygon)
    }

    pub fn contains(&self, p: &Point2) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            perp_dot(&(b - a), &(*p - a)) >= -SPLIT_EPS
        })
    }
}

/// All pieces of the arrangement with the same number of crossings.
#[derive(Clone, Debug)]
pub struct Zone2D {
    index: usize,
    pieces: Vec<Polygon2>,
}

impl Zone2D {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pieces(&self) -> &[Polygon2] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.pieces.iter().map(Polygon2::area).sum()
    }

    pub fn contains(&self, p: &Point2) -> bool {
        self.pieces.iter().any(|piece| piece.contains(p))
    }
}

/// Zone index of `point`: one more than the number of lines with the point on their far side.
pub fn classify(point: &Point2, lines: &[Line2]) -> usize {
    1 + lines.iter().filter(|l| l.signed_distance(point) > 0.0).count()
}

/// Zones `1..=zone_count` inside `[-half_extent, half_extent]²`.
///
/// Zones reaching past the square are truncated by it.
pub fn resolve_zones(lines: &[Line2], zone_count: usize, half_extent: f64) -> Result<Vec<Zone2D>> {
    if half_extent.is_nan() || half_extent <= 0.0 {
        return Err(Error::invalid_parameter(format!(
            "half extent must be positive, got {half_extent}"
        )));
    }

    let mut pieces = vec![(Polygon2::square(half_extent), 0usize)];
    for line in lines {
        let mut next = Vec::with_capacity(pieces.len() + 8);
        for (piece, crossings) in pieces {
            // pieces already past the last requested zone stay out of the way
            if crossings >= zone_count {
                continue;
            }
            let (near, far) = piece.split(line);
            if let Some(p) = near {
                next.push((p, crossings));
            }
            if let Some(p) = far {
                next.push((p, crossings + 1));
            }
        }
        pieces = next;
    }
    log::debug!("{} lines split the square into {} pieces", lines.len(), pieces.len());

    let mut zones: Vec<Zone2D> = (1..=zone_count)
        .map(|index| Zone2D { index, pieces: Vec::new() })
        .collect();
    for (piece, crossings) in pieces {
        if let Some(zone) = zones.get_mut(crossings) {
            zone.pieces.push(piece);
        }
    }
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_lines() -> Vec<Line2> {
        [[2.0, 0.0], [-2.0, 0.0], [0.0, 2.0], [0.0, -2.0]]
            .iter()
            .map(|c| Line2::perpendicular_bisector(&Point2::origin(), &Point2::new(*c)).unwrap())
            .collect()
    }

    #[test]
    fn test_polygon_area_centroid() {
        let sq = Polygon2::square(1.0);
        assert!((sq.area() - 4.0).abs() < 1e-12);
        assert!(sq.centroid().approx_eq(&Point2::origin()));
    }

    #[test]
    fn test_split() {
        let sq = Polygon2::square(2.0);
        let line = Line2::perpendicular_bisector(&Point2::origin(), &Point2::new([2.0, 0.0])).unwrap();
        let (near, far) = sq.split(&line);
        let (near, far) = (near.unwrap(), far.unwrap());
        assert!((near.area() - 12.0).abs() < 1e-12);
        assert!((far.area() - 4.0).abs() < 1e-12);
        assert!(near.contains(&Point2::origin()));
        assert!(!far.contains(&Point2::origin()));

        let outside = Line2::perpendicular_bisector(&Point2::origin(), &Point2::new([10.0, 0.0])).unwrap();
        assert!(sq.split(&outside).1.is_none());
    }

    #[test]
    fn test_first_zone_of_square() {
        let zones = resolve_zones(&axis_lines(), 2, 3.0).unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].pieces().len(), 1);
        assert!((zones[0].area() - 4.0).abs() < 1e-12);
        assert!(zones[0].contains(&Point2::origin()));
        assert_eq!(zones[1].pieces().len(), 4);
    }

    #[test]
    fn test_classify() {
        let lines = axis_lines();
        assert_eq!(classify(&Point2::origin(), &lines), 1);
        assert_eq!(classify(&Point2::new([1.5, 0.0]), &lines), 2);
        assert_eq!(classify(&Point2::new([1.5, -1.5]), &lines), 3);
    }

    #[test]
    fn test_invalid_extent() {
        assert!(resolve_zones(&axis_lines(), 1, 0.0).is_err());
        assert!(resolve_zones(&axis_lines(), 1, f64::NAN).is_err());
    }
}
