// Lattice module: lattice kinds and the generation of lattice sites around a center.

use std::collections::VecDeque;

use crate::geometry::{ApproxIndex, Point, Vector};

pub mod d2;
pub mod d3;

pub use d2::LatticeKind2;
pub use d3::{reciprocal_vectors, LatticeKind3};

/// A lattice point together with the number of primitive-vector steps needed to reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeSite<const D: usize> {
    pub point: Point<D>,
    pub depth: usize,
}

/// Enumerates every site reachable from `center` within `max_steps` steps of `±vectors`.
///
/// The expansion is breadth-first with a visited set matching within the coincidence tolerance,
/// so each site is recorded once, with its smallest depth, in discovery order.
/// Lattices with unequal vector lengths need a larger `max_steps` to reach the
/// same Euclidean radius.
pub fn generate_sites<const D: usize>(
    vectors: &[Vector<D>],
    max_steps: usize,
    center: Point<D>,
) -> Vec<LatticeSite<D>> {
    let mut visited = ApproxIndex::new();
    let mut sites = Vec::new();
    let mut frontier = VecDeque::new();

    visited.insert(center.coords);
    frontier.push_back(LatticeSite { point: center, depth: 0 });

    while let Some(site) = frontier.pop_front() {
        sites.push(site);
        if site.depth == max_steps {
            continue;
        }
        for v in vectors {
            for next in [site.point + *v, site.point - *v] {
                if visited.insert(next.coords).1 {
                    frontier.push_back(LatticeSite { point: next, depth: site.depth + 1 });
                }
            }
        }
    }

    log::debug!("generated {} lattice sites within {} steps", sites.len(), max_steps);
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};

    #[test]
    fn test_generate_sites_cubic_counts() {
        let vectors = [
            Vector3::new([1.0, 0.0, 0.0]),
            Vector3::new([0.0, 1.0, 0.0]),
            Vector3::new([0.0, 0.0, 1.0]),
        ];
        // Octahedral numbers: sites with |i| + |j| + |k| <= n
        assert_eq!(generate_sites(&vectors, 0, Point3::origin()).len(), 1);
        assert_eq!(generate_sites(&vectors, 1, Point3::origin()).len(), 7);
        assert_eq!(generate_sites(&vectors, 2, Point3::origin()).len(), 25);
        assert_eq!(generate_sites(&vectors, 3, Point3::origin()).len(), 63);
    }

    #[test]
    fn test_generate_sites_depths() {
        let vectors = [Vector3::new([1.0, 0.0, 0.0]), Vector3::new([0.0, 1.0, 0.0])];
        let sites = generate_sites(&vectors, 2, Point3::origin());
        assert_eq!(sites[0].point, Point3::origin());
        assert_eq!(sites[0].depth, 0);
        let corner = sites
            .iter()
            .find(|s| s.point == Point3::new([1.0, -1.0, 0.0]))
            .expect("corner is reachable in two steps");
        assert_eq!(corner.depth, 2);
        assert!(sites.iter().all(|s| s.depth <= 2));
    }

    #[test]
    fn test_generate_sites_off_center() {
        let vectors = [Vector3::new([0.5, 0.5, 0.0])];
        let center = Point3::new([1.0, 1.0, 1.0]);
        let sites = generate_sites(&vectors, 3, center);
        assert_eq!(sites.len(), 7);
        assert!(sites.iter().any(|s| s.point == Point3::new([2.5, 2.5, 1.0])));
    }
}
