//! Points, vectors and segments in 2 or 3 dimensions.
//!
//! Coordinates are plain `f64`. Equality and hashing of points go through
//! [`Point::key`], which rounds every coordinate to
//! [`POINT_APPROX_DIGITS`](crate::config::POINT_APPROX_DIGITS) decimals, so that
//! sets and maps of points deduplicate the same way the containment tests compare.
//! Deduplication that must not split at a rounding boundary goes through
//! [`ApproxIndex`] instead.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::config::{COINCIDENCE_EPS, DEGENERACY_EPS, POINT_APPROX_SCALE, SEGMENT_CONTAINMENT_EPS};
use crate::error::GeometryError;

pub mod d2;
pub mod d3;

pub type Point2 = Point<2>;
pub type Point3 = Point<3>;
pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Segment2 = Segment<2>;
pub type Segment3 = Segment<3>;

/// Rounds a coordinate to the fixed number of kept digits.
#[inline]
pub fn round_key(value: f64) -> i64 {
    (value * POINT_APPROX_SCALE).round() as i64
}

// ======================== POINT ========================

/// A position in D-dimensional space.
#[derive(Clone, Copy, Debug)]
pub struct Point<const D: usize> {
    pub coords: [f64; D],
}

impl<const D: usize> Point<D> {
    pub const fn new(coords: [f64; D]) -> Self {
        Self { coords }
    }

    pub const fn origin() -> Self {
        Self { coords: [0.0; D] }
    }

    /// Rounded coordinates used for equality and hashing.
    pub fn key(&self) -> [i64; D] {
        self.coords.map(round_key)
    }

    /// Per-coordinate comparison within [`COINCIDENCE_EPS`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, COINCIDENCE_EPS)
    }

    pub fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        distance(self, other)
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(std::array::from_fn(|i| 0.5 * (self.coords[i] + other.coords[i])))
    }

    /// The origin-relative vector pointing at this point.
    pub fn to_vector(self) -> Vector<D> {
        Vector::new(self.coords)
    }
}

impl Point<2> {
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }
}

impl Point<3> {
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }
}

impl<const D: usize> PartialEq for Point<D> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<const D: usize> Eq for Point<D> {}

impl<const D: usize> Hash for Point<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> Add<Vector<D>> for Point<D> {
    type Output = Point<D>;

    fn add(self, rhs: Vector<D>) -> Point<D> {
        Point::new(std::array::from_fn(|i| self.coords[i] + rhs.components[i]))
    }
}

impl<const D: usize> Sub<Vector<D>> for Point<D> {
    type Output = Point<D>;

    fn sub(self, rhs: Vector<D>) -> Point<D> {
        Point::new(std::array::from_fn(|i| self.coords[i] - rhs.components[i]))
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Vector<D>;

    fn sub(self, rhs: Point<D>) -> Vector<D> {
        Vector::new(std::array::from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<const D: usize> Mul<f64> for Point<D> {
    type Output = Point<D>;

    fn mul(self, k: f64) -> Point<D> {
        Point::new(self.coords.map(|c| c * k))
    }
}

// ======================== VECTOR ========================

/// A displacement in D-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const D: usize> {
    pub components: [f64; D],
}

impl<const D: usize> Vector<D> {
    pub const fn new(components: [f64; D]) -> Self {
        Self { components }
    }

    pub const fn zero() -> Self {
        Self { components: [0.0; D] }
    }

    /// The vector from `first` to `second`.
    ///
    /// Fails with [`GeometryError::DegenerateVector`] when the points coincide.
    pub fn by_points(first: &Point<D>, second: &Point<D>) -> Result<Self, GeometryError> {
        let v = *second - *first;
        if v.norm() <= DEGENERACY_EPS {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(v)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        dot(self, other)
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction, or an error for a zero-length vector.
    pub fn normalized(&self) -> Result<Self, GeometryError> {
        let k = self.norm();
        if k <= DEGENERACY_EPS {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(*self * (1.0 / k))
    }

    /// The point reached from the origin.
    pub fn to_point(self) -> Point<D> {
        Point::new(self.components)
    }
}

impl<const D: usize> Add for Vector<D> {
    type Output = Vector<D>;

    fn add(self, rhs: Vector<D>) -> Vector<D> {
        Vector::new(std::array::from_fn(|i| self.components[i] + rhs.components[i]))
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Vector<D>;

    fn sub(self, rhs: Vector<D>) -> Vector<D> {
        Vector::new(std::array::from_fn(|i| self.components[i] - rhs.components[i]))
    }
}

impl<const D: usize> Neg for Vector<D> {
    type Output = Vector<D>;

    fn neg(self) -> Vector<D> {
        Vector::new(self.components.map(|c| -c))
    }
}

impl<const D: usize> Mul<f64> for Vector<D> {
    type Output = Vector<D>;

    fn mul(self, k: f64) -> Vector<D> {
        Vector::new(self.components.map(|c| c * k))
    }
}

impl<const D: usize> From<[f64; D]> for Vector<D> {
    fn from(components: [f64; D]) -> Self {
        Self::new(components)
    }
}

// ======================== SEGMENT ========================

/// An ordered pair of end points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<const D: usize> {
    pub first: Point<D>,
    pub second: Point<D>,
}

impl<const D: usize> Segment<D> {
    pub fn new(first: Point<D>, second: Point<D>) -> Self {
        Self { first, second }
    }

    pub fn length(&self) -> f64 {
        distance(&self.first, &self.second)
    }

    pub fn center(&self) -> Point<D> {
        self.first.midpoint(&self.second)
    }

    /// Distance-sum membership: `P` is on the segment when `|AP| + |PB|` matches `|AB|`.
    pub fn contains(&self, point: &Point<D>) -> bool {
        self.contains_eps(point, SEGMENT_CONTAINMENT_EPS)
    }

    /// Same as [`Segment::contains`] with an explicit relative tolerance.
    pub fn contains_eps(&self, point: &Point<D>, eps: f64) -> bool {
        let length = self.length();
        let to_first = distance(point, &self.first);
        let to_second = distance(point, &self.second);
        (length - to_first - to_second).abs() <= eps * length.max(DEGENERACY_EPS)
    }
}

// ======================== APPROXIMATE INDEX ========================

/// Clusters coordinate tuples that agree within a tolerance.
///
/// Entries are bucketed by their rounded key; a lookup scans the 3^D
/// neighbouring buckets, so two values straddling a rounding boundary still
/// meet. The tolerance must not exceed one bucket (`1 / POINT_APPROX_SCALE`).
#[derive(Clone, Debug)]
pub struct ApproxIndex<const D: usize> {
    buckets: HashMap<[i64; D], Vec<usize>>,
    entries: Vec<[f64; D]>,
    eps: f64,
}

impl<const D: usize> ApproxIndex<D> {
    pub fn new() -> Self {
        Self::with_eps(COINCIDENCE_EPS)
    }

    pub fn with_eps(eps: f64) -> Self {
        Self { buckets: HashMap::new(), entries: Vec::new(), eps: eps.min(1.0 / POINT_APPROX_SCALE) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Representative of the cluster `coords` falls in.
    pub fn get(&self, coords: &[f64; D]) -> Option<usize> {
        let key = coords.map(round_key);
        for n in 0..3usize.pow(D as u32) {
            let mut cell = key;
            let mut code = n;
            for c in cell.iter_mut() {
                *c += (code % 3) as i64 - 1;
                code /= 3;
            }
            let Some(bucket) = self.buckets.get(&cell) else {
                continue;
            };
            for &i in bucket {
                let e = &self.entries[i];
                if (0..D).all(|k| (e[k] - coords[k]).abs() < self.eps) {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Index of the matching representative, and whether `coords` started a new cluster.
    pub fn insert(&mut self, coords: [f64; D]) -> (usize, bool) {
        if let Some(i) = self.get(&coords) {
            return (i, false);
        }
        let i = self.entries.len();
        self.entries.push(coords);
        self.buckets.entry(coords.map(round_key)).or_default().push(i);
        (i, true)
    }
}

impl<const D: usize> Default for ApproxIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops points within [`COINCIDENCE_EPS`] of an earlier one, keeping first occurrences.
pub fn dedup_points<const D: usize>(points: impl IntoIterator<Item = Point<D>>) -> Vec<Point<D>> {
    let mut index = ApproxIndex::new();
    points.into_iter().filter(|p| index.insert(p.coords).1).collect()
}

// ======================== FREE FUNCTIONS ========================

pub fn distance<const D: usize>(p: &Point<D>, q: &Point<D>) -> f64 {
    (*q - *p).norm()
}

pub fn dot<const D: usize>(u: &Vector<D>, v: &Vector<D>) -> f64 {
    u.components
        .iter()
        .zip(v.components.iter())
        .map(|(a, b)| a * b)
        .sum()
}
