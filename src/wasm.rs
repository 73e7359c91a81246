//! WebAssembly exports for the pScreen pipeline.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Point sets
//! and option objects cross the boundary as JSON text using the same shapes
//! the browser tool already works with:
//!
//! - **Point**: `{"id": "bn0", "x": 1, "y": 2, "v": 1}` (`id`, `v` optional)
//! - **Normalize options**: `{"mode": "unit", "useCOM": true, "keepIds": true, "scale": 2}`
//! - **Transform**: `{"tx": 0, "ty": 0, "sx": 1, "sy": 1, "rot": 0}`
//!
//! Errors are returned as JS exceptions carrying the error message.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::fsc::{self, FscMeta};
use crate::geometry::{self, NormalizeOptions, Point, Transform};
use crate::grid::GridSnapshot;
use crate::scan;

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_points(json: &str) -> Result<Vec<Point>, JsValue> {
    serde_json::from_str(json).map_err(js_err)
}

/// Blank input means "all defaults".
fn parse_options<T: DeserializeOwned + Default>(json: &str) -> Result<T, JsValue> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(json).map_err(js_err)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

// ============================================================================
// Scanning
// ============================================================================

/// Scan a grid and return the scan payload as JSON.
///
/// # Arguments
/// * `data` - Flat row-major intensities (length = cols * rows), values 0.0-1.0
/// * `cols` - Grid width in cells
/// * `rows` - Grid height in cells
/// * `threshold` - Activation threshold
///
/// # Returns
/// `{"meta": {...}, "stats": {...}, "bnPoints": [...]}`
#[wasm_bindgen]
pub fn scan_grid_wasm(
    data: &[f64],
    cols: usize,
    rows: usize,
    threshold: f64,
) -> Result<String, JsValue> {
    let grid = GridSnapshot::new(cols, rows, threshold, data).map_err(js_err)?;
    to_json(&scan::extract(&grid))
}

// ============================================================================
// Geometry
// ============================================================================

/// Normalize a JSON point array; `options_json` may be empty.
#[wasm_bindgen]
pub fn normalize_wasm(points_json: &str, options_json: &str) -> Result<String, JsValue> {
    let points = parse_points(points_json)?;
    let options: NormalizeOptions = parse_options(options_json)?;
    to_json(&geometry::normalize(&points, &options))
}

/// Transform a JSON point array; `transform_json` may be empty.
#[wasm_bindgen]
pub fn transform_wasm(points_json: &str, transform_json: &str) -> Result<String, JsValue> {
    let points = parse_points(points_json)?;
    let t: Transform = parse_options(transform_json)?;
    to_json(&geometry::transform(&points, &t))
}

// ============================================================================
// FSC
// ============================================================================

/// Encode a JSON point array as FSC text.
#[wasm_bindgen]
pub fn to_fsc_wasm(
    points_json: &str,
    cols: usize,
    rows: usize,
    threshold: f64,
) -> Result<String, JsValue> {
    let points = parse_points(points_json)?;
    fsc::encode(&points, &FscMeta::new(cols, rows, threshold)).map_err(js_err)
}

/// Decode FSC text to `{"meta": {...} | null, "bnPoints": [...]}`.
#[wasm_bindgen]
pub fn from_fsc_wasm(text: &str) -> Result<String, JsValue> {
    let doc = fsc::decode(text).map_err(js_err)?;
    to_json(&doc)
}
