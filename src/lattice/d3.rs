use std::f64::consts::PI;
use std::str::FromStr;

use crate::config::DEGENERACY_EPS;
use crate::error::{Error, Result};
use crate::geometry::{dot, Point3, Vector3};
use crate::lattice::{generate_sites, LatticeSite};

/// The 3D Bravais lattices with a built-in set of primitive vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeKind3 {
    Primitive,
    BodyCentered,
    FaceCentered,
    BaseCentered,
    HexagonalClosePacked,
}

impl LatticeKind3 {
    pub const ALL: [LatticeKind3; 5] = [
        LatticeKind3::Primitive,
        LatticeKind3::BodyCentered,
        LatticeKind3::FaceCentered,
        LatticeKind3::BaseCentered,
        LatticeKind3::HexagonalClosePacked,
    ];

    /// Real-space primitive vectors for lattice constant `a`.
    pub fn primitive_vectors(&self, a: f64) -> [Vector3; 3] {
        let h = 0.5 * a;
        match self {
            LatticeKind3::Primitive => [
                Vector3::new([a, 0.0, 0.0]),
                Vector3::new([0.0, a, 0.0]),
                Vector3::new([0.0, 0.0, a]),
            ],
            LatticeKind3::BodyCentered => [
                Vector3::new([-h, h, h]),
                Vector3::new([h, -h, h]),
                Vector3::new([h, h, -h]),
            ],
            LatticeKind3::FaceCentered => [
                Vector3::new([h, h, 0.0]),
                Vector3::new([0.0, h, h]),
                Vector3::new([h, 0.0, h]),
            ],
            LatticeKind3::BaseCentered => [
                Vector3::new([h, h, 0.0]),
                Vector3::new([h, -h, 0.0]),
                Vector3::new([0.0, 0.0, a]),
            ],
            LatticeKind3::HexagonalClosePacked => {
                let c = (8.0f64 / 3.0).sqrt() * a;
                [
                    Vector3::new([a, 0.0, 0.0]),
                    Vector3::new([h, h * 3.0f64.sqrt(), 0.0]),
                    Vector3::new([0.0, 0.0, c]),
                ]
            }
        }
    }

    /// Reciprocal primitive vectors for lattice constant `a`.
    pub fn reciprocal_vectors(&self, a: f64) -> Result<[Vector3; 3]> {
        reciprocal_vectors(&self.primitive_vectors(a))
    }

    /// Number of shells (after the center) whose Bragg planes close the first zone.
    pub fn default_shell_count(&self) -> usize {
        match self {
            LatticeKind3::HexagonalClosePacked => 3,
            _ => 2,
        }
    }

    pub fn default_max_steps(&self) -> usize {
        3
    }

    /// Reciprocal lattice sites within `max_steps` reciprocal-vector steps of `center`.
    pub fn reciprocal_sites(&self, a: f64, max_steps: usize, center: Point3) -> Result<Vec<LatticeSite<3>>> {
        Ok(generate_sites(&self.reciprocal_vectors(a)?, max_steps, center))
    }

    pub fn name(&self) -> &'static str {
        match self {
            LatticeKind3::Primitive => "primitive",
            LatticeKind3::BodyCentered => "body-centered",
            LatticeKind3::FaceCentered => "face-centered",
            LatticeKind3::BaseCentered => "base-centered",
            LatticeKind3::HexagonalClosePacked => "hexagonal close-packed",
        }
    }
}

impl FromStr for LatticeKind3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "primitive" | "sc" | "cubic" => Ok(LatticeKind3::Primitive),
            "body-centered" | "bcc" => Ok(LatticeKind3::BodyCentered),
            "face-centered" | "fcc" => Ok(LatticeKind3::FaceCentered),
            "base-centered" | "bco" => Ok(LatticeKind3::BaseCentered),
            "hexagonal close-packed" | "hcp" => Ok(LatticeKind3::HexagonalClosePacked),
            other => Err(Error::invalid_parameter(format!("unknown 3D lattice '{other}'"))),
        }
    }
}

/// `b_i = 2π (a_j × a_k) / (a_1 · (a_2 × a_3))`, so that `b_i · a_j = 2π δ_ij`.
pub fn reciprocal_vectors(primitive: &[Vector3; 3]) -> Result<[Vector3; 3]> {
    let [a, b, c] = primitive;
    let volume = dot(a, &b.cross(c));
    if volume.abs() < DEGENERACY_EPS {
        return Err(Error::SingularBasis);
    }
    let factor = 2.0 * PI / volume;
    Ok([b.cross(c) * factor, c.cross(a) * factor, a.cross(b) * factor])
}
