use std::f64::consts::TAU;

use crate::bragg::{bragg_lines, bragg_planes};
use crate::config::{Config2D, Config3D};
use crate::error::{Error, Result};
use crate::geometry::d2::Line2;
use crate::geometry::d3::Plane;
use crate::geometry::{Point2, Point3, Vector3};
use crate::lattice::{generate_sites, reciprocal_vectors};
use crate::shell::{Shell, Shells};
use crate::zone::canvas::Canvas;
use crate::zone::d2::{self as analytic, Zone2D};
use crate::zone::d3::{dedup_planes, outer_surface, Zone3D, ZoneResolver3D};
use crate::zone::raster::{self, RasterRegion, RasterZones};

/// Rounds of shell growth before a higher zone is given up on.
const MAX_REFINEMENTS: usize = 8;

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(format!("{name} must be positive and finite, got {value}")))
    }
}

/// Brillouin zones of a 3D lattice: reciprocal sites, shells, Bragg planes and zone faces.
pub struct BrillouinZones3D {
    config: Config3D,
    primitive: [Vector3; 3],
    reciprocal: [Vector3; 3],
    sites: Vec<Point3>,
    shells: Vec<Shell<3>>,
    planes: Vec<Plane>,
    zones: Vec<Zone3D>,
}

impl BrillouinZones3D {
    /// Uses the primitive vectors of `config.lattice`.
    pub fn new(config: Config3D) -> Result<Self> {
        check_positive("lattice constant", config.lattice_constant)?;
        let primitive = config.lattice.primitive_vectors(config.lattice_constant);
        Self::with_primitive_vectors(config, primitive)
    }

    /// Uses arbitrary real-space primitive vectors; `config.lattice` is ignored.
    pub fn with_primitive_vectors(config: Config3D, primitive: [Vector3; 3]) -> Result<Self> {
        check_positive("shell epsilon", config.shell_epsilon)?;
        if config.zone_count == 0 || config.shell_count == 0 {
            return Err(Error::invalid_parameter("zone and shell counts must be at least 1"));
        }
        Ok(Self {
            config,
            primitive,
            reciprocal: reciprocal_vectors(&primitive)?,
            sites: Vec::new(),
            shells: Vec::new(),
            planes: Vec::new(),
            zones: Vec::new(),
        })
    }

    pub fn calculate(&mut self) -> Result<()> {
        let origin = Point3::origin();
        let sites = generate_sites(&self.reciprocal, self.config.max_steps, origin);
        self.sites = sites.into_iter().map(|s| s.point).collect();
        log::info!("reciprocal lattice generated: {} sites", self.sites.len());

        self.shells = Shells::new(self.sites.iter().copied(), origin, self.config.shell_epsilon)
            .take(self.config.shell_count + 1)
            .collect();
        if self.shells.len() <= self.config.shell_count {
            log::warn!(
                "only {} shells within {} steps, {} requested",
                self.shells.len() - 1,
                self.config.max_steps,
                self.config.shell_count
            );
        }

        self.planes = bragg_planes(&self.shells[1..])?;
        log::info!("{} Bragg planes constructed", self.planes.len());

        if self.config.zone_count > 1 {
            self.extend_shells()?;
        }

        let resolver = ZoneResolver3D::new(&self.planes)?;
        log::info!(
            "intersection lines calculated: {}, candidate points: {}",
            resolver.count_lines(),
            resolver.count_candidates()
        );

        self.zones = (1..=self.config.zone_count)
            .map(|n| resolver.zone(n))
            .collect::<Result<Vec<_>>>()?;
        log::info!("zone points calculated for {} zones", self.zones.len());
        Ok(())
    }

    /// Grows the shells until the outer surface of the last requested zone is
    /// closed and lies within half the distance of the farthest site used.
    ///
    /// Sites beyond that distance have their Bragg planes outside the surface,
    /// so the surface no longer changes.
    fn extend_shells(&mut self) -> Result<()> {
        let origin = Point3::origin();
        let eps = self.config.shell_epsilon;
        let zone = self.config.zone_count;
        let mut radius = match self.shells.last() {
            Some(shell) if shell.distance > 0.0 => shell.distance,
            _ => self.reciprocal.iter().map(Vector3::norm).fold(f64::INFINITY, f64::min),
        };

        for round in 0..MAX_REFINEMENTS {
            let steps = self.steps_within(radius).max(self.config.max_steps);
            let sites: Vec<Point3> = generate_sites(&self.reciprocal, steps, origin)
                .into_iter()
                .map(|s| s.point)
                .collect();
            let shells: Vec<Shell<3>> = Shells::new(sites.iter().copied(), origin, eps)
                .take_while(|s| s.distance <= radius + eps)
                .collect();
            let planes = dedup_planes(&bragg_planes(&shells[1..])?);

            let surface = outer_surface(&planes, zone, 2.0 * radius)?;
            if !surface.closed {
                log::debug!("round {}: zone #{} open with {} planes", round, zone, planes.len());
                radius *= 2.0;
                continue;
            }
            let reach = 2.0 * surface.zone.max_radius();
            log::debug!(
                "round {}: {} shells, {} planes, zone #{} needs sites up to {:.4}",
                round,
                shells.len() - 1,
                planes.len(),
                zone,
                reach
            );

            self.sites = sites;
            self.shells = shells;
            self.planes = planes;
            if reach <= radius + eps {
                log::info!("shells extended to {}, {} Bragg planes", self.shells.len() - 1, self.planes.len());
                return Ok(());
            }
            radius = reach;
        }

        log::warn!(
            "zone #{} still changes after {} rounds of shell growth, keeping {} planes",
            zone,
            MAX_REFINEMENTS,
            self.planes.len()
        );
        Ok(())
    }

    /// Breadth-first depth that reaches every reciprocal site within `radius`.
    ///
    /// A site `h·b1 + k·b2 + l·b3` has `|h| = |G·a1| / 2π <= radius·|a1| / 2π`.
    fn steps_within(&self, radius: f64) -> usize {
        self.primitive
            .iter()
            .map(|a| (radius * a.norm() / TAU).ceil() as usize)
            .sum()
    }

    pub fn config(&self) -> &Config3D {
        &self.config
    }

    pub fn primitive_vectors(&self) -> &[Vector3; 3] {
        &self.primitive
    }

    pub fn reciprocal_vectors(&self) -> &[Vector3; 3] {
        &self.reciprocal
    }

    pub fn sites(&self) -> &[Point3] {
        &self.sites
    }

    /// Shells used for the Bragg planes, the center shell first.
    pub fn shells(&self) -> &[Shell<3>] {
        &self.shells
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn zones(&self) -> &[Zone3D] {
        &self.zones
    }

    /// Zone `index`, 1-based.
    pub fn zone(&self, index: usize) -> Option<&Zone3D> {
        index.checked_sub(1).and_then(|i| self.zones.get(i))
    }

    pub fn count_zones(&self) -> usize {
        self.zones.len()
    }

    /// Volume of the reciprocal primitive cell, which every zone shares.
    pub fn cell_volume(&self) -> f64 {
        let [a, b, c] = &self.reciprocal;
        a.dot(&b.cross(c)).abs()
    }
}

/// Brillouin zones of a 2D net, resolved on a raster canvas.
pub struct BrillouinZones2D {
    config: Config2D,
    sites: Vec<Point2>,
    shells: Vec<Shell<2>>,
    lines: Vec<Line2>,
    raster: Option<RasterZones>,
}

impl BrillouinZones2D {
    pub fn new(config: Config2D) -> Result<Self> {
        check_positive("width", config.width)?;
        check_positive("shell epsilon", config.shell_epsilon)?;
        check_positive("probe offset", config.probe_offset)?;
        if config.zone_count == 0 {
            return Err(Error::invalid_parameter("zone count must be at least 1"));
        }
        if config.crystal_range < 1 {
            return Err(Error::invalid_parameter("crystal range must be at least 1"));
        }
        Ok(Self { config, sites: Vec::new(), shells: Vec::new(), lines: Vec::new(), raster: None })
    }

    pub fn calculate(&mut self) -> Result<()> {
        let origin = Point2::origin();
        self.sites = self.config.lattice.sites(self.config.width, self.config.crystal_range);
        self.shells = Shells::new(self.sites.iter().copied(), origin, self.config.shell_epsilon)
            .take(self.config.shell_count() + 1)
            .collect();
        log::info!("crystal generated: {} sites, {} shells", self.sites.len(), self.shells.len());

        self.lines = bragg_lines(&self.shells[1..])?;
        log::info!("{} Bragg lines constructed", self.lines.len());

        let zones = raster::resolve_zones(&self.lines, &self.config)?;
        log::info!(
            "zones highlighted: {} regions in {} zones",
            zones.regions().len(),
            zones.distinct_zones().len()
        );
        self.raster = Some(zones);
        Ok(())
    }

    /// The exact zones inside `[-half_extent, half_extent]²`, from the same Bragg lines.
    pub fn analytic_zones(&self, half_extent: f64) -> Result<Vec<Zone2D>> {
        analytic::resolve_zones(&self.lines, self.config.zone_count, half_extent)
    }

    pub fn config(&self) -> &Config2D {
        &self.config
    }

    pub fn sites(&self) -> &[Point2] {
        &self.sites
    }

    pub fn shells(&self) -> &[Shell<2>] {
        &self.shells
    }

    pub fn lines(&self) -> &[Line2] {
        &self.lines
    }

    pub fn zones(&self) -> Option<&RasterZones> {
        self.raster.as_ref()
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.raster.as_ref().map(RasterZones::canvas)
    }

    pub fn regions(&self) -> &[RasterRegion] {
        match &self.raster {
            Some(zones) => zones.regions(),
            None => &[],
        }
    }

    pub fn intersections(&self) -> &[Point2] {
        match &self.raster {
            Some(zones) => zones.intersections(),
            None => &[],
        }
    }

    pub fn count_zones(&self) -> usize {
        self.raster.as_ref().map_or(0, |z| z.distinct_zones().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{LatticeKind2, LatticeKind3};
    use std::f64::consts::PI;

    #[test]
    fn test_primitive_first_zone_is_cube() {
        let mut bz = BrillouinZones3D::new(Config3D::new(LatticeKind3::Primitive)).unwrap();
        bz.calculate().unwrap();
        let zone = bz.zone(1).unwrap();
        assert_eq!(zone.count_faces(), 6);
        for v in zone.vertices() {
            for c in v.coords {
                assert!((c.abs() - PI).abs() < 1e-9);
            }
        }
        assert!(bz.zone(0).is_none());
        assert!(bz.zone(2).is_none());
    }

    #[test]
    fn test_shells_grow_for_higher_zones() {
        let cfg = Config3D::new(LatticeKind3::Primitive).with_shell_count(1).with_zone_count(2);
        let mut bz = BrillouinZones3D::new(cfg).unwrap();
        bz.calculate().unwrap();

        // the nearest shell alone leaves zone 2 open
        assert!(bz.shells().len() > 2);
        assert!(bz.planes().len() > 6);
        let outer = bz.zone(2).unwrap();
        assert_eq!(outer.count_faces(), 12);
        assert!((outer.volume() - 16.0 * PI.powi(3)).abs() < 1e-6);
        // every site is at least twice as far as the farthest vertex
        let farthest = bz.shells().last().unwrap().distance;
        assert!(2.0 * outer.max_radius() <= farthest + bz.config().shell_epsilon);
    }

    #[test]
    fn test_steps_reach_radius() {
        let bz = BrillouinZones3D::new(Config3D::new(LatticeKind3::Primitive)).unwrap();
        assert_eq!(bz.steps_within(2.0 * PI), 3);
        assert_eq!(bz.steps_within(4.0 * PI + 1e-6), 9);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let cfg = Config3D::default().with_lattice_constant(0.0);
        assert!(BrillouinZones3D::new(cfg).is_err());
        let cfg = Config3D::default().with_zone_count(0);
        assert!(BrillouinZones3D::new(cfg).is_err());
        let flat = [
            Vector3::new([1.0, 0.0, 0.0]),
            Vector3::new([0.0, 1.0, 0.0]),
            Vector3::new([1.0, 1.0, 0.0]),
        ];
        assert_eq!(
            BrillouinZones3D::with_primitive_vectors(Config3D::default(), flat).err(),
            Some(Error::SingularBasis)
        );
        assert!(BrillouinZones2D::new(Config2D::default().with_crystal_range(0)).is_err());
    }

    #[test]
    fn test_small_square_raster() {
        let cfg = Config2D::new(LatticeKind2::Square)
            .with_width(40.0)
            .with_canvas(160, 160)
            .with_crystal_range(3)
            .with_zone_count(3);
        let mut bz = BrillouinZones2D::new(cfg).unwrap();
        assert_eq!(bz.count_zones(), 0);
        bz.calculate().unwrap();
        assert_eq!(bz.shells().len(), 5);
        assert_eq!(bz.zones().unwrap().distinct_zones(), vec![1, 2, 3]);
        assert_eq!(bz.zones().unwrap().zone_at(&Point2::origin()), Some(1));
    }
}
