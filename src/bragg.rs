//! Bragg planes (3D) and lines (2D): perpendicular bisectors between the origin and a lattice site.

use crate::error::{GeometryError, Result};
use crate::geometry::d2::Line2;
use crate::geometry::d3::Plane;
use crate::geometry::{Point, Point2, Point3};
use crate::shell::Shell;

/// A boundary that bisects the segment from the origin to a lattice site.
pub trait BraggBoundary: Sized {
    type Site;

    /// The bisector of origin-`site`; its normal points away from the origin.
    fn bisecting(site: &Self::Site) -> std::result::Result<Self, GeometryError>;
}

impl BraggBoundary for Plane {
    type Site = Point3;

    fn bisecting(site: &Point3) -> std::result::Result<Self, GeometryError> {
        Plane::new(*site * 0.5, site.to_vector())
    }
}

impl BraggBoundary for Line2 {
    type Site = Point2;

    fn bisecting(site: &Point2) -> std::result::Result<Self, GeometryError> {
        Line2::perpendicular_bisector(&Point2::origin(), site)
    }
}

pub fn bragg_plane(site: &Point3) -> Result<Plane> {
    Ok(Plane::bisecting(site)?)
}

pub fn bragg_line(site: &Point2) -> Result<Line2> {
    Ok(Line2::bisecting(site)?)
}

/// One bisector per site of every shell, in shell order.
///
/// The origin itself has no bisector and is skipped wherever it appears, so
/// the full shell sequence (center shell included) can be passed in.
pub fn build_bragg_boundaries<'a, B, const D: usize>(
    shells: impl IntoIterator<Item = &'a Shell<D>>,
) -> Result<Vec<B>>
where
    B: BraggBoundary<Site = Point<D>>,
{
    let origin = Point::<D>::origin();
    let mut boundaries = Vec::new();
    for shell in shells {
        for site in shell.points.iter().filter(|p| !p.approx_eq(&origin)) {
            boundaries.push(B::bisecting(site)?);
        }
    }
    Ok(boundaries)
}

pub fn bragg_planes<'a>(shells: impl IntoIterator<Item = &'a Shell<3>>) -> Result<Vec<Plane>> {
    build_bragg_boundaries(shells)
}

pub fn bragg_lines<'a>(shells: impl IntoIterator<Item = &'a Shell<2>>) -> Result<Vec<Line2>> {
    build_bragg_boundaries(shells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_bragg_plane_is_bisector() {
        let site = Point3::new([2.0, 0.0, 0.0]);
        let plane = bragg_plane(&site).unwrap();
        assert_eq!(plane.coefficients(), [1.0, 0.0, 0.0, -1.0]);
        assert!(plane.signed_distance(&Point3::origin()) < 0.0);
        assert!((plane.signed_distance(&site) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bragg_line_is_bisector() {
        let site = Point2::new([0.0, 4.0]);
        let line = bragg_line(&site).unwrap();
        assert!((line.signed_distance(&Point2::origin()) + 2.0).abs() < 1e-12);
        assert!((line.signed_distance(&site) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_origin_has_no_bisector() {
        assert_eq!(
            bragg_plane(&Point3::origin()).unwrap_err(),
            Error::Geometry(GeometryError::DegenerateVector)
        );
    }

    #[test]
    fn test_center_shell_skipped() {
        let shells = [
            Shell { distance: 0.0, points: vec![Point2::origin()] },
            Shell {
                distance: 1.0,
                points: vec![Point2::new([1.0, 0.0]), Point2::new([-1.0, 0.0])],
            },
        ];
        let lines = bragg_lines(&shells).unwrap();
        assert_eq!(lines.len(), 2);
    }
}
