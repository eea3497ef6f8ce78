//! JavaScript bindings. Geometry crosses the boundary as flat `f64` arrays with
//! separate count arrays, ready for a WebGL or canvas renderer.

pub mod d2;
pub mod d3;
mod utils;

use wasm_bindgen::prelude::*;

use crate::zone::canvas::PALETTE;

#[wasm_bindgen(typescript_custom_section)]
const TS_LATTICE_KINDS: &'static str = r#"
export type LatticeKind3D = "primitive" | "body-centered" | "face-centered" | "base-centered" | "hcp";
export type LatticeKind2D = "square" | "parallelogram" | "hexagonal";
"#;

/// The zone palette as flat RGBA bytes, ten colours.
#[wasm_bindgen]
pub fn palette() -> Vec<u8> {
    PALETTE.iter().flatten().copied().collect()
}
