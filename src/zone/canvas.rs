//! Pixel arena for the raster zone resolver.
//!
//! The canvas is centered on the world origin: world `(x, y)` maps to pixel
//! `(x + width / 2, y + height / 2)`, rounded to the nearest integer.

use crate::geometry::d2::Line2;
use crate::geometry::{Point2, Segment2};

/// RGBA colours cycled over zone indices, zone 1 first.
pub const PALETTE: [[u8; 4]; 10] = [
    [0xef, 0x9a, 0x9a, 0xff],
    [0xce, 0x93, 0xd8, 0xff],
    [0x9f, 0xa8, 0xda, 0xff],
    [0x81, 0xd4, 0xfa, 0xff],
    [0x80, 0xcb, 0xc4, 0xff],
    [0xc5, 0xe1, 0xa5, 0xff],
    [0xff, 0xf5, 0x9d, 0xff],
    [0x8f, 0xf4, 0xee, 0xff],
    [0xb0, 0xbe, 0xc5, 0xff],
    [0x90, 0xca, 0xf9, 0xff],
];

pub const BLANK_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
pub const STROKE_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Palette colour of a 1-based zone index.
pub fn color_for_zone(index: usize) -> [u8; 4] {
    PALETTE[index.saturating_sub(1) % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pixel {
    Blank,
    Stroke,
    /// Filled with the 1-based zone index.
    Zone(u16),
}

impl Pixel {
    pub fn color(&self) -> [u8; 4] {
        match self {
            Pixel::Blank => BLANK_COLOR,
            Pixel::Stroke => STROKE_COLOR,
            Pixel::Zone(n) => color_for_zone(usize::from(*n)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Pixel::Blank; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Row-major index of `(x, y)`, `None` outside the canvas.
    pub fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i64, y: i64, pixel: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    pub fn to_pixel(&self, p: &Point2) -> (i64, i64) {
        (
            (p.x() + 0.5 * self.width as f64).round() as i64,
            (p.y() + 0.5 * self.height as f64).round() as i64,
        )
    }

    pub fn to_world(&self, x: i64, y: i64) -> Point2 {
        Point2::new([x as f64 - 0.5 * self.width as f64, y as f64 - 0.5 * self.height as f64])
    }

    pub fn diagonal(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }

    /// Bresenham rasterization of a world-space segment; pixels off the canvas are skipped.
    pub fn draw_segment(&mut self, segment: &Segment2) {
        let (mut x0, mut y0) = self.to_pixel(&segment.first);
        let (x1, y1) = self.to_pixel(&segment.second);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0, Pixel::Stroke);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draws `line` across the whole canvas.
    pub fn draw_line(&mut self, line: &Line2) {
        let stretch = self.diagonal() + line.point().distance(&Point2::origin());
        self.draw_segment(&line.stretched(stretch));
    }

    /// Replaces the 4-connected region of the seed's value with `pixel`.
    ///
    /// Returns the number of pixels changed.
    pub fn flood_fill(&mut self, x: i64, y: i64, pixel: Pixel) -> usize {
        let Some(target) = self.get(x, y) else {
            return 0;
        };
        if target == pixel {
            return 0;
        }

        let mut filled = 0;
        let mut stack = vec![(x, y)];
        while let Some((x, y)) = stack.pop() {
            match self.index(x, y) {
                Some(i) if self.pixels[i] == target => {
                    self.pixels[i] = pixel;
                    filled += 1;
                    stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
                }
                _ => {}
            }
        }
        filled
    }

    pub fn count(&self, pixel: Pixel) -> usize {
        self.pixels.iter().filter(|p| **p == pixel).count()
    }

    /// RGBA bytes, row-major, for image encoders and canvas uploads.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.color()).collect()
    }
}

/// Per-pixel lookup of the exact intersection point stamped nearby.
#[derive(Clone, Debug)]
pub struct VertexMap {
    width: usize,
    height: usize,
    cells: Vec<Option<Point2>>,
}

impl VertexMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![None; width * height] }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Point2> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Records `point` on every pixel within `radius` of pixel `(cx, cy)`.
    pub fn stamp(&mut self, cx: i64, cy: i64, radius: i32, point: Point2) {
        let r = i64::from(radius);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                if let Some(i) = self.index(cx + dx, cy + dy) {
                    self.cells[i] = Some(point);
                }
            }
        }
    }

    pub fn count_stamped(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_mapping() {
        let canvas = Canvas::new(100, 80);
        assert_eq!(canvas.to_pixel(&Point2::origin()), (50, 40));
        assert_eq!(canvas.to_pixel(&Point2::new([-10.4, 9.6])), (40, 50));
        assert!(canvas.to_world(50, 40).approx_eq(&Point2::origin()));
        assert_eq!(canvas.get(100, 0), None);
        assert_eq!(canvas.get(-1, 0), None);
    }

    #[test]
    fn test_draw_segment_diagonal() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_segment(&Segment2::new(Point2::new([-5.0, -5.0]), Point2::new([5.0, 5.0])));
        assert_eq!(canvas.count(Pixel::Stroke), 11);
        assert_eq!(canvas.get(10, 10), Some(Pixel::Stroke));
        assert_eq!(canvas.get(11, 10), Some(Pixel::Blank));
    }

    #[test]
    fn test_lines_split_canvas() {
        let mut canvas = Canvas::new(40, 40);
        let vertical = Line2::new(Point2::new([5.0, 0.0]), crate::geometry::Vector2::new([0.0, 1.0])).unwrap();
        canvas.draw_line(&vertical);
        assert_eq!(canvas.count(Pixel::Stroke), 40);

        let left = canvas.flood_fill(20, 20, Pixel::Zone(1));
        assert_eq!(left, 25 * 40);
        let right = canvas.flood_fill(30, 20, Pixel::Zone(2));
        assert_eq!(right, 14 * 40);
        assert_eq!(canvas.count(Pixel::Blank), 0);
        assert_eq!(canvas.flood_fill(30, 20, Pixel::Zone(2)), 0);
    }

    #[test]
    fn test_diagonal_stroke_blocks_fill() {
        let mut canvas = Canvas::new(21, 21);
        let diagonal = Line2::through(&Point2::origin(), &Point2::new([1.0, 1.0])).unwrap();
        canvas.draw_line(&diagonal);
        let filled = canvas.flood_fill(15, 5, Pixel::Zone(1));
        assert_eq!(filled, (21 * 21 - 21) / 2);
    }

    #[test]
    fn test_stamp_disk() {
        let mut map = VertexMap::new(20, 20);
        let p = Point2::new([1.25, -3.5]);
        map.stamp(10, 10, 2, p);
        assert_eq!(map.get(10, 12), Some(p));
        assert_eq!(map.get(12, 12), None);
        assert_eq!(map.count_stamped(), 13);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for_zone(1), PALETTE[0]);
        assert_eq!(color_for_zone(11), PALETTE[0]);
        assert_eq!(Pixel::Zone(3).color(), PALETTE[2]);
        assert_eq!(Canvas::new(2, 1).to_rgba(), [BLANK_COLOR, BLANK_COLOR].concat());
    }
}
