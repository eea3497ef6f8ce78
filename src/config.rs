// Tolerances and default parameters shared by the 2D and 3D pipelines.

use crate::lattice::{LatticeKind2, LatticeKind3};

// ======================== TOLERANCES ========================

/// Number of decimal digits kept when points are compared or hashed.
pub const POINT_APPROX_DIGITS: i32 = 4;

/// Scale factor matching `POINT_APPROX_DIGITS` (10^4).
pub const POINT_APPROX_SCALE: f64 = 1e4;

/// Per-coordinate tolerance for "same point" checks: half a unit of the last kept digit.
pub const COINCIDENCE_EPS: f64 = 0.5 / POINT_APPROX_SCALE;

/// Relative slack in the distance-sum test `|AB| ≈ |AP| + |PB|` used for segment membership.
pub const SEGMENT_CONTAINMENT_EPS: f64 = 1e-7;

/// Determinants (and plane-line denominators) smaller than this are treated as zero.
pub const DEGENERACY_EPS: f64 = 1e-12;

/// Shell split threshold used by the 3D pipeline (distance units of the reciprocal lattice).
pub const DISTANCE_EPS_3D: f64 = 0.01;

/// Shell split threshold used by the 2D pipeline (pixels).
pub const DISTANCE_EPS_2D: f64 = 0.1;

/// Number of pair-midpoint passes used to find a reference point inside a face.
pub const CENTROID_PASSES: usize = 3;

/// Upper bound on the working set of the pair-midpoint passes.
pub const CENTROID_MAX_POINTS: usize = 4096;

/// Fixed reference normal for the signed angle between two vectors.
pub const REFERENCE_NORMAL: [f64; 3] = [2.0, 3.0, 4.0];

// ======================== 3D PIPELINE ========================

/// Parameters of one 3D Brillouin zone computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config3D {
    pub lattice: LatticeKind3,
    /// Real-space lattice constant `a`.
    pub lattice_constant: f64,
    /// Number of primitive-vector steps explored from the center.
    pub max_steps: usize,
    /// Number of shells (after the center) that contribute Bragg planes.
    pub shell_count: usize,
    /// Number of zones to resolve.
    pub zone_count: usize,
    pub shell_epsilon: f64,
}

impl Config3D {
    /// Defaults for `lattice`, sized the way each lattice kind needs.
    pub fn new(lattice: LatticeKind3) -> Self {
        Self {
            lattice,
            lattice_constant: 1.0,
            max_steps: lattice.default_max_steps(),
            shell_count: lattice.default_shell_count(),
            zone_count: 1,
            shell_epsilon: DISTANCE_EPS_3D,
        }
    }

    pub fn with_lattice_constant(mut self, a: f64) -> Self {
        self.lattice_constant = a;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_shell_count(mut self, shell_count: usize) -> Self {
        self.shell_count = shell_count;
        self
    }

    pub fn with_zone_count(mut self, zone_count: usize) -> Self {
        self.zone_count = zone_count;
        self
    }

    pub fn with_shell_epsilon(mut self, eps: f64) -> Self {
        self.shell_epsilon = eps;
        self
    }
}

impl Default for Config3D {
    fn default() -> Self {
        Self::new(LatticeKind3::Primitive)
    }
}

// ======================== 2D PIPELINE ========================

/// Parameters of one raster Brillouin zone computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config2D {
    pub lattice: LatticeKind2,
    /// Lattice period in pixels.
    pub width: f64,
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Translations span `[-crystal_range, crystal_range]` along both axes.
    pub crystal_range: i32,
    /// Number of zones to color, zone 1 included.
    pub zone_count: usize,
    /// Distance (pixels) from a region edge at which neighbouring regions are probed.
    pub probe_offset: f64,
    /// Radius (pixels) of the disk stamped around every line-line intersection.
    pub stamp_radius: i32,
    pub shell_epsilon: f64,
}

impl Config2D {
    pub fn new(lattice: LatticeKind2) -> Self {
        Self {
            lattice,
            width: 160.0,
            canvas_width: 720,
            canvas_height: 720,
            crystal_range: 4,
            zone_count: 12,
            probe_offset: 3.0,
            stamp_radius: 5,
            shell_epsilon: DISTANCE_EPS_2D,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_canvas(mut self, width: usize, height: usize) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_crystal_range(mut self, range: i32) -> Self {
        self.crystal_range = range;
        self
    }

    pub fn with_zone_count(mut self, zone_count: usize) -> Self {
        self.zone_count = zone_count;
        self
    }

    pub fn with_probe_offset(mut self, offset: f64) -> Self {
        self.probe_offset = offset;
        self
    }

    pub fn with_stamp_radius(mut self, radius: i32) -> Self {
        self.stamp_radius = radius;
        self
    }

    /// Shells (after the center) whose Bragg lines are drawn: one more than the zone count.
    pub fn shell_count(&self) -> usize {
        self.zone_count + 1
    }
}

impl Default for Config2D {
    fn default() -> Self {
        Self::new(LatticeKind2::Square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincidence_matches_digits() {
        assert_eq!(POINT_APPROX_SCALE, 10f64.powi(POINT_APPROX_DIGITS));
        assert!(COINCIDENCE_EPS < 1.0 / POINT_APPROX_SCALE);
    }

    #[test]
    fn test_config3d_defaults_follow_lattice() {
        let hcp = Config3D::new(LatticeKind3::HexagonalClosePacked);
        assert_eq!(hcp.shell_count, 3);
        let fcc = Config3D::new(LatticeKind3::FaceCentered).with_zone_count(2);
        assert_eq!(fcc.shell_count, 2);
        assert_eq!(fcc.zone_count, 2);
        assert_eq!(fcc.max_steps, 3);
    }

    #[test]
    fn test_config2d_shell_count() {
        let cfg = Config2D::default().with_zone_count(4);
        assert_eq!(cfg.shell_count(), 5);
        assert_eq!(cfg.canvas_width, 720);
    }
}
