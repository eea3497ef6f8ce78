use std::str::FromStr;

use crate::error::Error;
use crate::geometry::d2::perp_dot;
use crate::geometry::{ApproxIndex, Point2, Vector2};

/// The 2D nets the raster pipeline knows how to place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeKind2 {
    Square,
    /// Square rows with every odd row shifted by half a period.
    Parallelogram,
    /// Triangular net with period `a` along every bond.
    Hexagonal,
}

impl LatticeKind2 {
    pub const ALL: [LatticeKind2; 3] = [
        LatticeKind2::Square,
        LatticeKind2::Parallelogram,
        LatticeKind2::Hexagonal,
    ];

    pub fn primitive_vectors(&self, a: f64) -> [Vector2; 2] {
        match self {
            LatticeKind2::Square => [Vector2::new([a, 0.0]), Vector2::new([0.0, a])],
            LatticeKind2::Parallelogram => [Vector2::new([a, 0.0]), Vector2::new([0.5 * a, a])],
            LatticeKind2::Hexagonal => [
                Vector2::new([a, 0.0]),
                Vector2::new([0.5 * a, 0.5 * a * 3.0f64.sqrt()]),
            ],
        }
    }

    /// Area of the primitive cell, which is also the area of every Brillouin zone.
    pub fn cell_area(&self, a: f64) -> f64 {
        let [u, v] = self.primitive_vectors(a);
        perp_dot(&u, &v).abs()
    }

    /// The sites placed for translation `(x, y)` of the enumeration grid.
    fn translate(&self, a: f64, x: i32, y: i32) -> Vec<Point2> {
        let (fx, fy) = (f64::from(x), f64::from(y));
        match self {
            LatticeKind2::Square => vec![Point2::new([fx * a, fy * a])],
            LatticeKind2::Parallelogram => {
                let shift = if y.rem_euclid(2) == 1 { 0.5 * a } else { 0.0 };
                vec![Point2::new([fx * a + shift, fy * a])]
            }
            LatticeKind2::Hexagonal => {
                let [a1, a2] = self.primitive_vectors(a);
                let cell = Point2::origin() + a1 * fx + a2 * fy;
                let diagonal = a1 - a2;
                vec![
                    cell + a1,
                    cell - a1,
                    cell + a2,
                    cell - a2,
                    cell + diagonal,
                    cell - diagonal,
                ]
            }
        }
    }

    /// Every site produced by translations `(x, y) ∈ [-range, range]²`, origin first.
    ///
    /// Duplicates (hexagonal cells share neighbours) are dropped within the
    /// coincidence tolerance; the remaining order follows the row-major translation walk.
    pub fn sites(&self, a: f64, range: i32) -> Vec<Point2> {
        let origin = Point2::origin();
        let mut seen = ApproxIndex::new();
        seen.insert(origin.coords);
        let mut sites = vec![origin];

        for y in -range..=range {
            for x in -range..=range {
                for p in self.translate(a, x, y) {
                    if seen.insert(p.coords).1 {
                        sites.push(p);
                    }
                }
            }
        }

        log::debug!("{:?} net: {} sites for range {}", self, sites.len(), range);
        sites
    }

    pub fn name(&self) -> &'static str {
        match self {
            LatticeKind2::Square => "square",
            LatticeKind2::Parallelogram => "parallelogram",
            LatticeKind2::Hexagonal => "hexagonal",
        }
    }
}

impl FromStr for LatticeKind2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "square" | "primitive" => Ok(LatticeKind2::Square),
            "parallelogram" | "oblique" => Ok(LatticeKind2::Parallelogram),
            "hexagonal" | "hex" => Ok(LatticeKind2::Hexagonal),
            other => Err(Error::invalid_parameter(format!("unknown 2D lattice '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_sites() {
        let sites = LatticeKind2::Square.sites(2.0, 1);
        assert_eq!(sites.len(), 9);
        assert_eq!(sites[0], Point2::origin());
        assert!(sites.contains(&Point2::new([-2.0, 2.0])));
    }

    #[test]
    fn test_parallelogram_contains_origin_and_shifted_rows() {
        let sites = LatticeKind2::Parallelogram.sites(1.0, 2);
        assert_eq!(sites.len(), 25);
        assert!(sites.contains(&Point2::new([0.5, 1.0])));
        assert!(sites.contains(&Point2::new([-0.5, -1.0])));
        assert!(!sites.contains(&Point2::new([0.0, 1.0])));
        assert!(sites.contains(&Point2::new([1.0, 2.0])));
    }

    #[test]
    fn test_hexagonal_nearest_neighbours() {
        let sites = LatticeKind2::Hexagonal.sites(1.0, 2);
        assert!(sites.contains(&Point2::origin()));
        let nearest = sites
            .iter()
            .filter(|p| (p.distance(&Point2::origin()) - 1.0).abs() < 1e-9)
            .count();
        assert_eq!(nearest, 6);
        // every pair of sites is at least one period apart
        for (i, p) in sites.iter().enumerate() {
            for q in &sites[i + 1..] {
                assert!(p.distance(q) > 1.0 - 1e-9);
            }
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("hex".parse::<LatticeKind2>().unwrap(), LatticeKind2::Hexagonal);
        for kind in LatticeKind2::ALL {
            assert_eq!(kind.name().parse::<LatticeKind2>().unwrap(), kind);
        }
        assert!("kagome".parse::<LatticeKind2>().is_err());
    }

    #[test]
    fn test_cell_area() {
        assert!((LatticeKind2::Square.cell_area(2.0) - 4.0).abs() < 1e-12);
        assert!((LatticeKind2::Parallelogram.cell_area(2.0) - 4.0).abs() < 1e-12);
        assert!((LatticeKind2::Hexagonal.cell_area(1.0) - 0.5 * 3.0f64.sqrt()).abs() < 1e-12);
    }
}
