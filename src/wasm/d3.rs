use crate::brillouin::BrillouinZones3D;
use crate::config::Config3D;
use crate::lattice::LatticeKind3;
use crate::wasm::utils::{flatten, parse_js_vectors, to_js_error};
use crate::zone::Zone3D;
use wasm_bindgen::prelude::*;

/// WASM wrapper for the zones of a 3D lattice.
#[wasm_bindgen(js_name = BrillouinZones3D)]
pub struct BrillouinZones3DWasm {
    inner: BrillouinZones3D,
}

#[wasm_bindgen(js_class = BrillouinZones3D)]
impl BrillouinZones3DWasm {
    /// `lattice` is one of `primitive`, `bcc`, `fcc`, `base-centered`, `hcp`.
    #[wasm_bindgen(constructor)]
    pub fn new(lattice: &str, lattice_constant: f64, zone_count: usize) -> Result<BrillouinZones3DWasm, JsValue> {
        let kind: LatticeKind3 = lattice.parse().map_err(to_js_error)?;
        let config = Config3D::new(kind)
            .with_lattice_constant(lattice_constant)
            .with_zone_count(zone_count);
        let inner = BrillouinZones3D::new(config).map_err(to_js_error)?;
        Ok(BrillouinZones3DWasm { inner })
    }

    /// Custom real-space primitive vectors, `[[x, y, z], [x, y, z], [x, y, z]]`.
    #[wasm_bindgen(js_name = fromVectors)]
    pub fn from_vectors(vectors: JsValue, zone_count: usize, shell_count: usize) -> Result<BrillouinZones3DWasm, JsValue> {
        let primitive = parse_js_vectors(&vectors)
            .ok_or_else(|| JsValue::from_str("expected three [x, y, z] vectors"))?;
        let config = Config3D::default()
            .with_zone_count(zone_count)
            .with_shell_count(shell_count);
        let inner = BrillouinZones3D::with_primitive_vectors(config, primitive).map_err(to_js_error)?;
        Ok(BrillouinZones3DWasm { inner })
    }

    pub fn calculate(&mut self) -> Result<(), JsValue> {
        self.inner.calculate().map_err(to_js_error)
    }

    #[wasm_bindgen(getter, js_name = countZones)]
    pub fn count_zones(&self) -> usize {
        self.inner.count_zones()
    }

    /// Reciprocal lattice sites, flat `[x, y, z, ...]`.
    #[wasm_bindgen(getter)]
    pub fn sites(&self) -> Vec<f64> {
        flatten(self.inner.sites())
    }

    /// Bragg planes as flat `[a, b, c, d, ...]` coefficients of `ax + by + cz + d = 0`.
    #[wasm_bindgen(getter)]
    pub fn planes(&self) -> Vec<f64> {
        self.inner.planes().iter().flat_map(|p| p.coefficients()).collect()
    }

    #[wasm_bindgen(getter, js_name = cellVolume)]
    pub fn cell_volume(&self) -> f64 {
        self.inner.cell_volume()
    }

    /// Zone `index`, 1-based; `undefined` when the zone was not calculated.
    #[wasm_bindgen(js_name = getZone)]
    pub fn get_zone(&self, index: usize) -> Option<Zone3DWasm> {
        self.inner.zone(index).cloned().map(|inner| Zone3DWasm { inner })
    }
}

/// One resolved 3D zone, faces flattened for rendering.
#[wasm_bindgen(js_name = Zone3D)]
pub struct Zone3DWasm {
    inner: Zone3D,
}

#[wasm_bindgen(js_class = Zone3D)]
impl Zone3DWasm {
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Distinct vertices, flat `[x, y, z, ...]`.
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> {
        flatten(&self.inner.vertices())
    }

    /// Number of vertices of every face, in face order.
    #[wasm_bindgen(getter, js_name = faceCounts)]
    pub fn face_counts(&self) -> Vec<u32> {
        self.inner.faces().iter().map(|f| f.len() as u32).collect()
    }

    /// Ordered vertices of all faces concatenated, split with `faceCounts`.
    #[wasm_bindgen(getter, js_name = faceVertices)]
    pub fn face_vertices(&self) -> Vec<f64> {
        self.inner.faces().iter().flat_map(|f| flatten(f.vertices())).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> f64 {
        self.inner.volume()
    }

    #[wasm_bindgen(getter, js_name = surfaceArea)]
    pub fn surface_area(&self) -> f64 {
        self.inner.surface_area()
    }

    #[wasm_bindgen(js_name = faceArea)]
    pub fn face_area(&self, face: usize) -> Option<f64> {
        self.inner.faces().get(face).map(|f| f.area())
    }
}
