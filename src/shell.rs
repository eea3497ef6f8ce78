//! Grouping of lattice sites into shells of equal distance from a center.

use crate::geometry::{Point, Vector};
use crate::lattice::generate_sites;

/// Sites whose distance from the center falls within one epsilon band.
#[derive(Clone, Debug, PartialEq)]
pub struct Shell<const D: usize> {
    /// Distance of the shell's nearest site; every other site is within epsilon of it.
    pub distance: f64,
    pub points: Vec<Point<D>>,
}

impl<const D: usize> Shell<D> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lazy, single-pass sequence of shells in increasing distance order.
///
/// Sites are sorted once on construction; each call to `next` walks the sorted
/// list until a distance differs from the current shell's first distance by more
/// than `epsilon`. The first shell is always the center on its own.
pub struct Shells<const D: usize> {
    sorted: Vec<(f64, Point<D>)>,
    cursor: usize,
    epsilon: f64,
}

impl<const D: usize> Shells<D> {
    pub fn new(sites: impl IntoIterator<Item = Point<D>>, center: Point<D>, epsilon: f64) -> Self {
        let mut sorted: Vec<(f64, Point<D>)> = sites
            .into_iter()
            .filter(|p| !p.approx_eq(&center))
            .map(|p| (p.distance(&center), p))
            .collect();
        // stable, so equal distances keep discovery order
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        sorted.insert(0, (0.0, center));

        Self { sorted, cursor: 0, epsilon }
    }

    /// Sites not yet handed out.
    pub fn remaining(&self) -> usize {
        self.sorted.len() - self.cursor
    }
}

impl<const D: usize> Iterator for Shells<D> {
    type Item = Shell<D>;

    fn next(&mut self) -> Option<Shell<D>> {
        let &(distance, first) = self.sorted.get(self.cursor)?;
        let mut points = vec![first];
        self.cursor += 1;

        if distance == 0.0 {
            return Some(Shell { distance, points });
        }

        while let Some(&(d, p)) = self.sorted.get(self.cursor) {
            if (d - distance).abs() > self.epsilon {
                break;
            }
            points.push(p);
            self.cursor += 1;
        }

        Some(Shell { distance, points })
    }
}

/// Generates the lattice around `center` and groups it into shells.
pub fn generate_shells<const D: usize>(
    vectors: &[Vector<D>],
    max_steps: usize,
    center: Point<D>,
    epsilon: f64,
) -> Shells<D> {
    let sites = generate_sites(vectors, max_steps, center);
    Shells::new(sites.into_iter().map(|s| s.point), center, epsilon)
}
