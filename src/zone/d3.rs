//! Analytic 3D zone resolver.
//!
//! Zone 1 comes from the vertices of the plane arrangement: every Bragg plane is
//! intersected with every other one, the resulting lines with every plane, and
//! the vertices reachable from the origin without crossing a plane are grouped
//! by the planes through them and ordered counter-clockwise as seen from outside.
//!
//! Higher zones are resolved plane by plane. On each plane the traces of all the
//! other planes cut a bounding square into convex cells, each labelled with the
//! number of planes between it and the origin. The cells labelled `n - 1` are
//! where zone `n` meets zone `n + 1`; together they close around zones `1..=n`.

use std::collections::HashMap;

use crate::config::{CENTROID_MAX_POINTS, CENTROID_PASSES, DEGENERACY_EPS};
use crate::error::{Error, GeometryError, Result};
use crate::geometry::d2::Line2;
use crate::geometry::d3::{plane_line, plane_plane, plane_segment, signed_angle, Line3, Plane};
use crate::geometry::{dedup_points, dot, ApproxIndex, Point2, Point3, Segment3, Vector2, Vector3};
use crate::zone::d2::Polygon2;

/// Traces with `|n·u|` and `|n·w|` both below this are parallel to the plane.
const PARALLEL_EPS: f64 = 1e-9;

/// Relative slack for a cell vertex to count as lying on the bounding square.
const BOUND_EPS: f64 = 1e-9;

/// One polygonal face of a zone: the bounding plane and its ordered vertices.
#[derive(Clone, Debug)]
pub struct Face {
    plane: Plane,
    vertices: Vec<Point3>,
}

impl Face {
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Vertices in counter-clockwise order around the outward plane normal.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices, &self.plane.normal())
    }

    /// Area-weighted centroid of the fan triangles.
    pub fn centroid(&self) -> Point3 {
        let v0 = self.vertices[0];
        let normal = self.plane.normal();
        let mut total = 0.0;
        let mut acc = Vector3::zero();

        for pair in self.vertices[1..].windows(2) {
            let area = 0.5 * dot(&(pair[0] - v0).cross(&(pair[1] - v0)), &normal);
            let center = (v0.to_vector() + pair[0].to_vector() + pair[1].to_vector()) * (1.0 / 3.0);
            acc = acc + center * area;
            total += area;
        }

        if total.abs() < DEGENERACY_EPS {
            return v0;
        }
        (acc * (1.0 / total)).to_point()
    }
}

/// The outer surface of zone `index`, which closes around zones `1..=index`.
///
/// For zone 1 this is the Wigner-Seitz cell. Every surface encloses `index`
/// primitive cells.
#[derive(Clone, Debug)]
pub struct Zone3D {
    index: usize,
    faces: Vec<Face>,
}

impl Zone3D {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn count_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Distinct vertices over all faces, in face order.
    pub fn vertices(&self) -> Vec<Point3> {
        dedup_points(self.faces.iter().flat_map(|f| f.vertices.iter().copied()))
    }

    /// Distance from the origin to the farthest vertex.
    pub fn max_radius(&self) -> f64 {
        self.faces
            .iter()
            .flat_map(|f| f.vertices.iter())
            .map(|p| p.to_vector().norm())
            .fold(0.0, f64::max)
    }

    pub fn surface_area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }

    /// Enclosed volume by fan triangulation of every face against the origin.
    pub fn volume(&self) -> f64 {
        let mut volume = 0.0;
        for face in &self.faces {
            if face.len() < 3 {
                continue;
            }
            let v0 = face.vertices[0].to_vector();
            for pair in face.vertices[1..].windows(2) {
                volume += dot(&v0, &pair[0].to_vector().cross(&pair[1].to_vector()));
            }
        }
        (volume / 6.0).abs()
    }
}

// ======================== CANDIDATES ========================

/// Planes with coincident `(A, B, C, D)` collapse to the first of them.
pub fn dedup_planes(planes: &[Plane]) -> Vec<Plane> {
    let mut index = ApproxIndex::new();
    planes.iter().copied().filter(|p| index.insert(p.coefficients()).1).collect()
}

/// Lines where two Bragg planes meet, each unordered pair visited once.
pub fn intersection_lines(planes: &[Plane]) -> Vec<Line3> {
    let mut lines = Vec::new();
    for i in 0..planes.len() {
        for j in (i + 1)..planes.len() {
            if let Some(line) = plane_plane(&planes[i], &planes[j]) {
                lines.push(line);
            }
        }
    }
    lines
}

/// Every line-plane intersection, tagged with the index of the plane hit.
pub fn intersection_points(lines: &[Line3], planes: &[Plane]) -> Vec<(Point3, usize)> {
    let mut points = Vec::new();
    for line in lines {
        for (index, plane) in planes.iter().enumerate() {
            if let Some(p) = plane_line(plane, line) {
                points.push((p, index));
            }
        }
    }
    points
}

/// Number of planes properly crossed by the segment `start`-`point`.
///
/// Crossings at either end of the segment do not count.
pub fn crossings(start: &Point3, point: &Point3, planes: &[Plane]) -> Result<usize> {
    let segment = Segment3::new(*start, *point);
    let mut count = 0;
    for plane in planes {
        if let Some(hit) = plane_segment(plane, &segment)? {
            if !hit.approx_eq(start) && !hit.approx_eq(point) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Whether `point` can be reached from `start` without crossing any plane.
pub fn is_visible(start: &Point3, point: &Point3, planes: &[Plane]) -> Result<bool> {
    Ok(crossings(start, point, planes)? == 0)
}

/// A vertex of the arrangement with the planes through it.
#[derive(Clone, Debug)]
struct Candidate {
    point: Point3,
    crossings: usize,
    through: Vec<usize>,
}

// ======================== ORDERING ========================

/// An interior reference point: repeated pairwise midpoints, then their mean.
pub fn reference_point(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let mut current: Vec<Point3> = points.to_vec();

    for _ in 0..CENTROID_PASSES {
        if current.len() < 2 {
            break;
        }
        let mut seen = ApproxIndex::new();
        let mut next = Vec::new();
        'pairs: for i in 0..current.len() {
            for j in (i + 1)..current.len() {
                let m = current[i].midpoint(&current[j]);
                if seen.insert(m.coords).1 {
                    next.push(m);
                    if next.len() >= CENTROID_MAX_POINTS {
                        break 'pairs;
                    }
                }
            }
        }
        current = next;
    }

    let sum = current.iter().fold(Vector3::zero(), |acc, p| acc + p.to_vector());
    Some((sum * (1.0 / current.len() as f64)).to_point())
}

/// Orders coplanar `points` counter-clockwise around `normal`.
///
/// Duplicates and points at the reference point are dropped. Returns `None`
/// when fewer than three points remain or they span no area.
pub fn order_vertices(points: &[Point3], normal: &Vector3) -> std::result::Result<Option<Vec<Point3>>, GeometryError> {
    let unique = dedup_points(points.iter().copied());
    if unique.len() < 3 {
        return Ok(None);
    }

    let Some(center) = reference_point(&unique) else {
        return Ok(None);
    };
    let unique: Vec<Point3> = unique.into_iter().filter(|p| !p.approx_eq(&center)).collect();
    if unique.len() < 3 {
        return Ok(None);
    }

    let start = Vector3::by_points(&center, &unique[0])?;
    let mut keyed = Vec::with_capacity(unique.len());
    for p in unique {
        let angle = signed_angle(&start, &Vector3::by_points(&center, &p)?, normal);
        keyed.push((angle, p));
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    let ordered: Vec<Point3> = keyed.into_iter().map(|(_, p)| p).collect();

    if polygon_area(&ordered, normal).abs() < DEGENERACY_EPS {
        return Ok(None);
    }
    Ok(Some(ordered))
}

fn polygon_area(vertices: &[Point3], normal: &Vector3) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let v0 = vertices[0];
    vertices[1..]
        .windows(2)
        .map(|pair| 0.5 * dot(&(pair[0] - v0).cross(&(pair[1] - v0)), normal))
        .sum()
}

// ======================== CLIPPING ========================

/// Any unit vector perpendicular to `normal`.
fn perpendicular(normal: &Vector3) -> std::result::Result<Vector3, GeometryError> {
    let [x, y, z] = normal.components.map(f64::abs);
    let axis = if x <= y && x <= z {
        Vector3::new([1.0, 0.0, 0.0])
    } else if y <= z {
        Vector3::new([0.0, 1.0, 0.0])
    } else {
        Vector3::new([0.0, 0.0, 1.0])
    };
    normal.cross(&axis).normalized()
}

/// Where other planes cross one plane, with the number of them whose far side
/// lies on either side of the line.
#[derive(Clone, Copy, Debug)]
struct Trace {
    line: Line2,
    near: usize,
    far: usize,
}

/// In-plane coordinates: `(s, t) -> origin + s·u + t·w`, with `u × w` along the normal.
struct PlaneFrame {
    origin: Point3,
    u: Vector3,
    w: Vector3,
}

impl PlaneFrame {
    fn new(plane: &Plane) -> std::result::Result<Self, GeometryError> {
        let normal = plane.normal();
        let u = perpendicular(&normal)?;
        Ok(Self { origin: plane.point(), u, w: normal.cross(&u) })
    }

    fn lift(&self, p: &Point2) -> Point3 {
        self.origin + self.u * p.x() + self.w * p.y()
    }

    /// Traces of every plane but `skip`, plus the number of planes whose far
    /// side covers this whole plane.
    ///
    /// Planes meeting this one along the same line share a trace. A trace whose
    /// far sides balance out changes no count and is folded into the base.
    fn traces(&self, planes: &[Plane], skip: usize) -> std::result::Result<(usize, Vec<Trace>), GeometryError> {
        let mut base = 0;
        let mut index = ApproxIndex::new();
        let mut groups: Vec<([f64; 3], usize, usize)> = Vec::new();

        for (j, other) in planes.iter().enumerate() {
            if j == skip {
                continue;
            }
            let n = other.normal();
            let (a, b) = (dot(&n, &self.u), dot(&n, &self.w));
            let c = other.signed_distance(&self.origin);
            let k = a.hypot(b);
            if k < PARALLEL_EPS {
                if c > 0.0 {
                    base += 1;
                }
                continue;
            }

            // one orientation per line; `forward` says whether the far side is the positive one
            let (a, b, c) = (a / k, b / k, c / k);
            let forward = a > PARALLEL_EPS || (a.abs() <= PARALLEL_EPS && b > 0.0);
            let key = if forward { [a, b, c] } else { [-a, -b, -c] };
            let (slot, new) = index.insert(key);
            if new {
                groups.push((key, 0, 0));
            }
            if forward {
                groups[slot].1 += 1;
            } else {
                groups[slot].2 += 1;
            }
        }

        let mut traces = Vec::with_capacity(groups.len());
        for ([a, b, c], positive, negative) in groups {
            if positive == negative {
                base += positive;
                continue;
            }
            let line = Line2::new(Point2::new([-c * a, -c * b]), Vector2::new([-b, a]))?;
            traces.push(Trace { line, near: negative, far: positive });
        }
        Ok((base, traces))
    }
}

/// The outer surface of one zone and whether it closed inside the bounding square.
#[derive(Clone, Debug)]
pub struct OuterSurface {
    pub zone: Zone3D,
    /// False when some face reached the square, so planes are missing.
    pub closed: bool,
}

/// Faces of zone `index` by clipping every plane against all the others.
///
/// Each plane is cut inside a square of `half_extent` around its anchor point.
/// `planes` must be free of duplicates.
pub fn outer_surface(planes: &[Plane], index: usize, half_extent: f64) -> Result<OuterSurface> {
    if index == 0 {
        return Err(Error::invalid_parameter("zone index starts at 1"));
    }
    if !(half_extent.is_finite() && half_extent > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "half extent must be positive and finite, got {half_extent}"
        )));
    }
    let limit = index - 1;
    let bound = half_extent * (1.0 - BOUND_EPS);
    let mut faces = Vec::new();
    let mut closed = true;

    for (i, plane) in planes.iter().enumerate() {
        let frame = PlaneFrame::new(plane)?;
        let (base, traces) = frame.traces(planes, i)?;
        if base > limit {
            continue;
        }

        // counts only grow, so cells past the limit are dropped right away
        let mut cells = vec![(Polygon2::square(half_extent), base)];
        for trace in &traces {
            let mut next = Vec::with_capacity(cells.len() + 4);
            for (cell, count) in cells {
                let (near, far) = cell.split(&trace.line);
                if let Some(p) = near.filter(|_| count + trace.near <= limit) {
                    next.push((p, count + trace.near));
                }
                if let Some(p) = far.filter(|_| count + trace.far <= limit) {
                    next.push((p, count + trace.far));
                }
            }
            cells = next;
            if cells.is_empty() {
                break;
            }
        }

        for (cell, count) in cells {
            if count != limit {
                continue;
            }
            if cell.vertices().iter().any(|v| v.x().abs() >= bound || v.y().abs() >= bound) {
                closed = false;
                continue;
            }
            let vertices = dedup_points(cell.vertices().iter().map(|v| frame.lift(v)));
            if vertices.len() >= 3 {
                faces.push(Face { plane: *plane, vertices });
            }
        }
    }
    log::debug!("zone #{} by clipping: {} faces, closed: {}", index, faces.len(), closed);

    Ok(OuterSurface { zone: Zone3D { index, faces }, closed })
}

// ======================== RESOLVER ========================

/// Classified vertices of one plane arrangement, reusable for every zone.
pub struct ZoneResolver3D {
    planes: Vec<Plane>,
    candidates: Vec<Candidate>,
    line_count: usize,
    half_extent: f64,
}

impl ZoneResolver3D {
    /// Deduplicates `planes` and classifies every vertex of their arrangement.
    pub fn new(planes: &[Plane]) -> Result<Self> {
        let planes = dedup_planes(planes);
        let origin = Point3::origin();

        let lines = intersection_lines(&planes);
        log::debug!("{} planes, {} intersection lines", planes.len(), lines.len());

        let mut index = ApproxIndex::new();
        let mut points = Vec::new();
        for (p, _) in intersection_points(&lines, &planes) {
            if index.insert(p.coords).1 {
                points.push(p);
            }
        }
        log::debug!("{} distinct intersection points", points.len());

        let mut candidates = Vec::with_capacity(points.len());
        for point in points {
            let through: Vec<usize> = (0..planes.len())
                .filter(|&i| planes[i].passes_through(&point))
                .collect();
            if through.is_empty() {
                continue;
            }
            let crossings = crossings(&origin, &point, &planes)?;
            candidates.push(Candidate { point, crossings, through });
        }

        // twice the farthest anchor on either side, in plane coordinates
        let half_extent = 4.0 * planes.iter().map(|p| p.point().to_vector().norm()).fold(0.0, f64::max);

        Ok(Self { planes, candidates, line_count: lines.len(), half_extent })
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn count_lines(&self) -> usize {
        self.line_count
    }

    pub fn count_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Vertices reachable from the origin without crossing a plane.
    pub fn visible_points(&self) -> Vec<Point3> {
        self.candidates
            .iter()
            .filter(|c| c.crossings == 0)
            .map(|c| c.point)
            .collect()
    }

    /// The outer surface of zone `index` (1-based).
    ///
    /// Zone 1 is built from the visible vertices, higher zones by clipping.
    pub fn zone(&self, index: usize) -> Result<Zone3D> {
        if index == 0 {
            return Err(Error::invalid_parameter("zone index starts at 1"));
        }
        if index == 1 {
            return self.first_zone();
        }
        let surface = self.surface(index)?;
        if !surface.closed {
            log::warn!("zone #{} is not closed by {} planes, more shells are needed", index, self.planes.len());
        }
        Ok(surface.zone)
    }

    /// Zone `index` by clipping, for any index.
    pub fn surface(&self, index: usize) -> Result<OuterSurface> {
        if self.planes.is_empty() {
            return Err(Error::invalid_parameter("no planes to bound a zone"));
        }
        outer_surface(&self.planes, index, self.half_extent)
    }

    fn first_zone(&self) -> Result<Zone3D> {
        // plane index -> slot in `groups`, kept in first-seen order
        let mut slots: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<(usize, Vec<Point3>)> = Vec::new();

        for candidate in self.candidates.iter().filter(|c| c.crossings == 0) {
            for &plane in &candidate.through {
                let slot = *slots.entry(plane).or_insert_with(|| {
                    groups.push((plane, Vec::new()));
                    groups.len() - 1
                });
                groups[slot].1.push(candidate.point);
            }
        }

        let mut faces = Vec::with_capacity(groups.len());
        for (plane, points) in groups {
            let plane = self.planes[plane];
            if let Some(vertices) = order_vertices(&points, &plane.normal())? {
                faces.push(Face { plane, vertices });
            }
        }
        log::debug!("zone #1: {} faces", faces.len());

        Ok(Zone3D { index: 1, faces })
    }
}

/// Zones `1..=zone_count` bounded by `planes`.
pub fn resolve_zones(planes: &[Plane], zone_count: usize) -> Result<Vec<Zone3D>> {
    let resolver = ZoneResolver3D::new(planes)?;
    (1..=zone_count).map(|n| resolver.zone(n)).collect()
}

/// The first zone (Wigner-Seitz cell) bounded by `planes`.
pub fn resolve_first_zone(planes: &[Plane]) -> Result<Zone3D> {
    ZoneResolver3D::new(planes)?.zone(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bragg::bragg_plane;

    fn cube_planes(h: f64) -> Vec<Plane> {
        let mut planes = Vec::new();
        for axis in 0..3 {
            for sign in [1.0, -1.0] {
                let mut c = [0.0; 3];
                c[axis] = 2.0 * h * sign;
                planes.push(bragg_plane(&Point3::new(c)).unwrap());
            }
        }
        planes
    }

    #[test]
    fn test_intersection_lines_of_cube() {
        let planes = cube_planes(1.0);
        // 15 pairs, 3 of them parallel
        assert_eq!(intersection_lines(&planes).len(), 12);
    }

    #[test]
    fn test_crossings_exempt_endpoints() {
        let planes = cube_planes(1.0);
        let corner = Point3::new([1.0, 1.0, 1.0]);
        assert_eq!(crossings(&Point3::origin(), &corner, &planes).unwrap(), 0);
        let outside = Point3::new([2.0, 1.0, 0.0]);
        assert_eq!(crossings(&Point3::origin(), &outside, &planes).unwrap(), 1);
        assert!(!is_visible(&Point3::origin(), &outside, &planes).unwrap());
    }

    #[test]
    fn test_first_zone_of_cube() {
        let zone = resolve_first_zone(&cube_planes(1.5)).unwrap();
        assert_eq!(zone.count_faces(), 6);
        assert!(zone.faces().iter().all(|f| f.len() == 4));
        assert_eq!(zone.vertices().len(), 8);
        assert!((zone.volume() - 27.0).abs() < 1e-9);
        assert!((zone.surface_area() - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_face_is_counter_clockwise_from_outside() {
        let zone = resolve_first_zone(&cube_planes(1.0)).unwrap();
        for face in zone.faces() {
            assert!(face.area() > 0.0);
            let c = face.centroid();
            assert!(face.plane().passes_through(&c));
            assert!((c.to_vector().norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_order_vertices_square() {
        let normal = Vector3::new([0.0, 0.0, 1.0]);
        let pts = [
            Point3::new([1.0, 1.0, 0.0]),
            Point3::new([-1.0, -1.0, 0.0]),
            Point3::new([1.0, -1.0, 0.0]),
            Point3::new([-1.0, 1.0, 0.0]),
            Point3::new([1.0, 1.0, 0.0]),
        ];
        let ordered = order_vertices(&pts, &normal).unwrap().unwrap();
        assert_eq!(ordered.len(), 4);
        assert!((polygon_area(&ordered, &normal) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_vertices_degenerate() {
        let normal = Vector3::new([0.0, 0.0, 1.0]);
        let two = [Point3::new([1.0, 0.0, 0.0]), Point3::new([0.0, 1.0, 0.0])];
        assert!(order_vertices(&two, &normal).unwrap().is_none());
        let collinear = [0.0, 1.0, 2.0, 3.0].map(|x| Point3::new([x, x, 0.0]));
        assert!(order_vertices(&collinear, &normal).unwrap().is_none());
    }

    #[test]
    fn test_reference_point_inside() {
        let pts = [
            Point3::new([0.0, 0.0, 0.0]),
            Point3::new([4.0, 0.0, 0.0]),
            Point3::new([0.0, 4.0, 0.0]),
        ];
        let c = reference_point(&pts).unwrap();
        assert!(c.x() > 0.0 && c.y() > 0.0 && c.x() + c.y() < 4.0);
        assert!(reference_point(&[]).is_none());
    }

    #[test]
    fn test_coincident_traces_share_a_line() {
        // x = 1 and y = 1 meet x + y = 2 along the same line, with opposite far sides
        let planes = [
            Plane::new(Point3::new([1.0, 1.0, 0.0]), Vector3::new([1.0, 1.0, 0.0])).unwrap(),
            Plane::new(Point3::new([1.0, 0.0, 0.0]), Vector3::new([1.0, 0.0, 0.0])).unwrap(),
            Plane::new(Point3::new([0.0, 1.0, 0.0]), Vector3::new([0.0, 1.0, 0.0])).unwrap(),
            Plane::new(Point3::new([0.0, 0.0, 1.0]), Vector3::new([0.0, 0.0, 1.0])).unwrap(),
            Plane::new(Point3::new([0.5, 0.5, 0.0]), Vector3::new([1.0, 1.0, 0.0])).unwrap(),
        ];
        let frame = PlaneFrame::new(&planes[0]).unwrap();
        let (base, traces) = frame.traces(&planes, 0).unwrap();
        // the balanced pair adds one everywhere, and so does the parallel x + y = 1
        assert_eq!(base, 2);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].near + traces[0].far, 1);
    }

    #[test]
    fn test_frame_is_right_handed() {
        let plane = bragg_plane(&Point3::new([1.0, -2.0, 0.5])).unwrap();
        let frame = PlaneFrame::new(&plane).unwrap();
        let n = frame.u.cross(&frame.w);
        assert!((dot(&n, &plane.normal()) - 1.0).abs() < 1e-12);
        let p = frame.lift(&Point2::new([0.3, -0.7]));
        assert!(plane.passes_through(&p));
    }

    #[test]
    fn test_second_zone_of_cube_is_open() {
        // six cube faces alone leave every higher zone unbounded
        let resolver = ZoneResolver3D::new(&cube_planes(1.0)).unwrap();
        let surface = resolver.surface(2).unwrap();
        assert!(!surface.closed);
        assert!(resolver.surface(1).unwrap().closed);
    }

    #[test]
    fn test_clipped_first_zone_matches_visible_vertices() {
        let planes = cube_planes(1.5);
        let resolver = ZoneResolver3D::new(&planes).unwrap();
        let visible = resolver.zone(1).unwrap();
        let clipped = resolver.surface(1).unwrap().zone;
        assert_eq!(clipped.count_faces(), visible.count_faces());
        assert_eq!(clipped.vertices().len(), visible.vertices().len());
        assert!((clipped.volume() - visible.volume()).abs() < 1e-9);
        assert!((clipped.max_radius() - 1.5 * 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_planes_collapse() {
        let mut planes = cube_planes(1.0);
        planes.extend(cube_planes(1.0 + 1e-6));
        assert_eq!(dedup_planes(&planes).len(), 6);
    }

    #[test]
    fn test_zero_zone_rejected() {
        let resolver = ZoneResolver3D::new(&cube_planes(1.0)).unwrap();
        assert!(resolver.zone(0).is_err());
    }
}
