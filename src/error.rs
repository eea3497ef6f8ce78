//! Error types for lattice and zone computations.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures of the geometry kernel.
///
/// Parallel planes, points outside a segment and faces with too few vertices are
/// not errors; they are reported as `None` or simply left out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A zero-length vector was normalized, e.g. one built from two identical points.
    #[error("cannot normalize a zero-length vector (the two points must be different)")]
    DegenerateVector,

    /// The kernel has no intersection routine for this pair of entity kinds.
    #[error("intersection of {first} and {second} is not supported")]
    UnsupportedIntersection {
        first: &'static str,
        second: &'static str,
    },
}

/// Errors surfaced by the lattice and zone pipelines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Primitive vectors with a zero scalar triple product have no reciprocal lattice.
    #[error("primitive vectors are linearly dependent (scalar triple product is zero)")]
    SingularBasis,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    #[must_use]
    pub fn invalid_parameter(details: impl Into<String>) -> Self {
        Self::InvalidParameter(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(GeometryError::DegenerateVector);
        assert!(format!("{err}").contains("zero-length"));

        let err = GeometryError::UnsupportedIntersection { first: "point", second: "point" };
        assert_eq!(format!("{err}"), "intersection of point and point is not supported");

        let err = Error::invalid_parameter("zone_count must be at least 1");
        assert!(format!("{err}").contains("zone_count"));
    }
}
