use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::geometry::{Point, Vector3};

pub fn parse_js_point<const D: usize>(val: &JsValue) -> Option<[f64; D]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < D as u32 {
        return None;
    }
    let mut point = [0.0; D];
    for (i, c) in point.iter_mut().enumerate() {
        *c = arr.get(i as u32).as_f64()?;
    }
    Some(point)
}

/// Three primitive vectors given as `[[x, y, z], [x, y, z], [x, y, z]]`.
pub fn parse_js_vectors(val: &JsValue) -> Option<[Vector3; 3]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() != 3 {
        return None;
    }
    let a = parse_js_point::<3>(&arr.get(0))?;
    let b = parse_js_point::<3>(&arr.get(1))?;
    let c = parse_js_point::<3>(&arr.get(2))?;
    Some([a.into(), b.into(), c.into()])
}

pub fn flatten<const D: usize>(points: &[Point<D>]) -> Vec<f64> {
    points.iter().flat_map(|p| p.coords).collect()
}

pub fn to_js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
