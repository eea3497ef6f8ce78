use crate::brillouin::BrillouinZones2D;
use crate::config::Config2D;
use crate::geometry::Point2;
use crate::lattice::LatticeKind2;
use crate::wasm::utils::{flatten, to_js_error};
use wasm_bindgen::prelude::*;

/// WASM wrapper for the raster zones of a 2D net.
#[wasm_bindgen(js_name = BrillouinZones2D)]
pub struct BrillouinZones2DWasm {
    inner: BrillouinZones2D,
}

#[wasm_bindgen(js_class = BrillouinZones2D)]
impl BrillouinZones2DWasm {
    /// `lattice` is one of `square`, `parallelogram`, `hexagonal`; `width` is the period in pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(
        lattice: &str,
        width: f64,
        canvas_width: usize,
        canvas_height: usize,
        zone_count: usize,
    ) -> Result<BrillouinZones2DWasm, JsValue> {
        let kind: LatticeKind2 = lattice.parse().map_err(to_js_error)?;
        let config = Config2D::new(kind)
            .with_width(width)
            .with_canvas(canvas_width, canvas_height)
            .with_zone_count(zone_count);
        let inner = BrillouinZones2D::new(config).map_err(to_js_error)?;
        Ok(BrillouinZones2DWasm { inner })
    }

    pub fn calculate(&mut self) -> Result<(), JsValue> {
        self.inner.calculate().map_err(to_js_error)
    }

    /// Canvas pixels as RGBA bytes, row-major; empty before `calculate`.
    #[wasm_bindgen(getter)]
    pub fn rgba(&self) -> Vec<u8> {
        self.inner.canvas().map(|c| c.to_rgba()).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.inner.config().canvas_width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.inner.config().canvas_height
    }

    #[wasm_bindgen(getter, js_name = countZones)]
    pub fn count_zones(&self) -> usize {
        self.inner.count_zones()
    }

    /// Zone index at world point `(x, y)`, pixels from the canvas center.
    #[wasm_bindgen(js_name = zoneAt)]
    pub fn zone_at(&self, x: f64, y: f64) -> Option<u32> {
        self.inner
            .zones()
            .and_then(|z| z.zone_at(&Point2::new([x, y])))
            .map(|n| n as u32)
    }

    /// Bragg lines as flat `[px, py, dx, dy, ...]`: a point on the line and its unit direction.
    #[wasm_bindgen(getter)]
    pub fn lines(&self) -> Vec<f64> {
        self.inner
            .lines()
            .iter()
            .flat_map(|l| {
                let (p, d) = (l.point(), l.direction());
                [p.x(), p.y(), d.components[0], d.components[1]]
            })
            .collect()
    }

    /// Pairwise Bragg line intersections, flat `[x, y, ...]`.
    #[wasm_bindgen(getter)]
    pub fn intersections(&self) -> Vec<f64> {
        flatten(self.inner.intersections())
    }
}
