//! Raster 2D zone resolver.
//!
//! Bragg lines are drawn on a [`Canvas`]; every line-line intersection is stamped
//! into a [`VertexMap`]. Starting from the region around the origin, each region
//! is flooded to collect the intersection points on its border, and pairs of those
//! points are probed on both sides of their perpendicular bisector. Probes that
//! land on blank pixels seed the regions of the next zone.
//!
//! This is an approximation: a region thinner than the probe offset can be missed,
//! and regions cut by the canvas border lose the corners outside it.

use std::collections::HashSet;

use crate::config::Config2D;
use crate::error::{Error, Result};
use crate::geometry::d2::{line_line, Line2};
use crate::geometry::{dedup_points, Point2, Vector2};
use crate::zone::canvas::{Canvas, Pixel, VertexMap};

/// One flood-filled region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterRegion {
    pub zone: usize,
    /// World point the fill started from.
    pub seed: Point2,
    pub pixels: usize,
}

/// Distinct intersection points of every pair of lines, in pair order.
pub fn line_intersections(lines: &[Line2]) -> Vec<Point2> {
    let mut points = Vec::new();
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            if let Some(p) = line_line(&lines[i], &lines[j]) {
                points.push(p);
            }
        }
    }
    dedup_points(points)
}

pub struct RasterExplorer {
    canvas: Canvas,
    vertices: VertexMap,
    processed: Vec<bool>,
    probe_offset: f64,
}

impl RasterExplorer {
    pub fn new(canvas: Canvas, vertices: VertexMap, probe_offset: f64) -> Self {
        let processed = vec![false; canvas.width() * canvas.height()];
        Self { canvas, vertices, processed, probe_offset }
    }

    /// Draws `lines` and stamps their intersections with `stamp_radius`.
    pub fn from_lines(
        lines: &[Line2],
        width: usize,
        height: usize,
        probe_offset: f64,
        stamp_radius: i32,
    ) -> (Self, Vec<Point2>) {
        let mut canvas = Canvas::new(width, height);
        for line in lines {
            canvas.draw_line(line);
        }

        let intersections = line_intersections(lines);
        let mut vertices = VertexMap::new(width, height);
        for p in &intersections {
            let (x, y) = canvas.to_pixel(p);
            vertices.stamp(x, y, stamp_radius, *p);
        }
        log::debug!(
            "{} lines drawn, {} intersections stamped",
            lines.len(),
            intersections.len()
        );

        (Self::new(canvas, vertices, probe_offset), intersections)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Floods the stroke-bounded region around `start` and returns the stamped
    /// intersection points met on the way, stroke pixels included.
    ///
    /// Pixels are marked processed, so a region yields its points only once.
    pub fn get_area_points(&mut self, start: &Point2) -> Vec<Point2> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        let mut stack = vec![self.canvas.to_pixel(start)];

        while let Some((x, y)) = stack.pop() {
            let Some(i) = self.canvas.index(x, y) else {
                continue;
            };
            if self.processed[i] {
                continue;
            }
            if let Some(p) = self.vertices.get(x, y) {
                if seen.insert(p) {
                    points.push(p);
                }
            }
            if self.canvas.pixels()[i] == Pixel::Stroke {
                continue;
            }
            self.processed[i] = true;
            for (nx, ny) in [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)] {
                if let Some(j) = self.canvas.index(nx, ny) {
                    if !self.processed[j] {
                        stack.push((nx, ny));
                    }
                }
            }
        }
        points
    }

    /// Probe points just across the borders of the region around `start`.
    pub fn explore_next(&mut self, start: &Point2) -> Vec<Point2> {
        let area_points = self.get_area_points(start);
        let mut probes = Vec::new();
        for i in 0..area_points.len() {
            for j in (i + 1)..area_points.len() {
                let (p, q) = (area_points[i], area_points[j]);
                let Ok(along) = Vector2::by_points(&p, &q) else {
                    continue;
                };
                let Ok(across) = along.rotated_cw().normalized() else {
                    continue;
                };
                let mid = p.midpoint(&q);
                probes.push(mid + across * self.probe_offset);
                probes.push(mid - across * self.probe_offset);
            }
        }
        probes
    }

    /// Colors zone 1 around the origin, then zones `2..=zone_count` ring by ring.
    pub fn explore(&mut self, zone_count: usize) -> Result<Vec<RasterRegion>> {
        let zone_limit = usize::from(u16::MAX);
        if zone_count == 0 || zone_count > zone_limit {
            return Err(Error::invalid_parameter(format!(
                "zone count must be within 1..={zone_limit}, got {zone_count}"
            )));
        }

        let origin = Point2::origin();
        let (cx, cy) = self.canvas.to_pixel(&origin);
        if self.canvas.get(cx, cy) != Some(Pixel::Blank) {
            return Err(Error::invalid_parameter("canvas center is not blank"));
        }

        let mut regions = vec![RasterRegion {
            zone: 1,
            seed: origin,
            pixels: self.canvas.flood_fill(cx, cy, Pixel::Zone(1)),
        }];
        let mut probes = self.explore_next(&origin);

        for zone in 2..=zone_count {
            log::info!("exploring zone #{}", zone);
            let mut seeds = Vec::new();
            let mut tried = HashSet::new();
            for probe in probes {
                let (x, y) = self.canvas.to_pixel(&probe);
                if !tried.insert((x, y)) || self.canvas.get(x, y) != Some(Pixel::Blank) {
                    continue;
                }
                let pixels = self.canvas.flood_fill(x, y, Pixel::Zone(zone as u16));
                regions.push(RasterRegion { zone, seed: probe, pixels });
                seeds.push(probe);
            }
            log::info!("{} points to explore", seeds.len());

            probes = Vec::new();
            for seed in &seeds {
                probes.extend(self.explore_next(seed));
            }
        }
        Ok(regions)
    }
}

/// The colored canvas and the regions found on it.
#[derive(Clone, Debug)]
pub struct RasterZones {
    canvas: Canvas,
    regions: Vec<RasterRegion>,
    intersections: Vec<Point2>,
}

impl RasterZones {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn regions(&self) -> &[RasterRegion] {
        &self.regions
    }

    pub fn intersections(&self) -> &[Point2] {
        &self.intersections
    }

    /// Zone index of the pixel under world point `p`.
    pub fn zone_at(&self, p: &Point2) -> Option<usize> {
        let (x, y) = self.canvas.to_pixel(p);
        match self.canvas.get(x, y)? {
            Pixel::Zone(n) => Some(usize::from(n)),
            _ => None,
        }
    }

    /// Sorted indices of the zones with at least one filled region.
    pub fn distinct_zones(&self) -> Vec<usize> {
        let mut zones: Vec<usize> = self.regions.iter().map(|r| r.zone).collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    pub fn pixel_count(&self, zone: usize) -> usize {
        self.regions.iter().filter(|r| r.zone == zone).map(|r| r.pixels).sum()
    }
}

/// Draws `lines` on the configured canvas and explores `config.zone_count` zones.
pub fn resolve_zones(lines: &[Line2], config: &Config2D) -> Result<RasterZones> {
    if config.canvas_width == 0 || config.canvas_height == 0 {
        return Err(Error::invalid_parameter("canvas must not be empty"));
    }
    let (mut explorer, intersections) = RasterExplorer::from_lines(
        lines,
        config.canvas_width,
        config.canvas_height,
        config.probe_offset,
        config.stamp_radius,
    );
    let regions = explorer.explore(config.zone_count)?;
    Ok(RasterZones { canvas: explorer.into_canvas(), regions, intersections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bragg::bragg_line;

    fn cross_lines(d: f64) -> Vec<Line2> {
        [[d, 0.0], [-d, 0.0], [0.0, d], [0.0, -d]]
            .iter()
            .map(|c| bragg_line(&Point2::new(*c)).unwrap())
            .collect()
    }

    #[test]
    fn test_line_intersections() {
        let points = line_intersections(&cross_lines(40.0));
        // two pairs are parallel
        assert_eq!(points.len(), 4);
        assert!(points.contains(&Point2::new([20.0, -20.0])));
    }

    #[test]
    fn test_get_area_points_of_center() {
        let (mut explorer, _) = RasterExplorer::from_lines(&cross_lines(40.0), 100, 100, 3.0, 5);
        let points = explorer.get_area_points(&Point2::origin());
        assert_eq!(points.len(), 4);
        // a second pass over the same region finds nothing
        assert!(explorer.get_area_points(&Point2::new([5.0, 5.0])).is_empty());
    }

    #[test]
    fn test_explore_rings() {
        let (mut explorer, _) = RasterExplorer::from_lines(&cross_lines(40.0), 100, 100, 3.0, 5);
        let regions = explorer.explore(3).unwrap();
        assert_eq!(regions[0].zone, 1);
        assert_eq!(regions[0].pixels, 39 * 39);
        assert_eq!(regions.iter().filter(|r| r.zone == 2).count(), 4);
        let canvas = explorer.canvas();
        assert_eq!(canvas.get(50, 50), Some(Pixel::Zone(1)));
        assert_eq!(canvas.get(50, 80), Some(Pixel::Zone(2)));
        // corner regions share only off-canvas edges with the strips
        assert_eq!(canvas.get(90, 90), Some(Pixel::Blank));
    }

    #[test]
    fn test_zero_zones_rejected() {
        let (mut explorer, _) = RasterExplorer::from_lines(&cross_lines(40.0), 100, 100, 3.0, 5);
        assert!(explorer.explore(0).is_err());
    }
}
