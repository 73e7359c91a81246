//! pScreen point pipeline
//!
//! Turns a painted intensity grid into "bn points", reshapes them, and
//! round-trips them through the FSC text format. Python bindings via PyO3
//! and WASM bindings for JavaScript sit on top of the same pure functions.
//!
//! ## Pipeline
//! ```text
//! Grid -> scan::extract -> geometry::{normalize, transform} -> fsc::encode -> text
//! text -> fsc::decode -> points
//! ```
//!
//! ## Points
//! Every point is `(id, x, y, v)`:
//! - **id**: always carries the `bn` prefix (`bn0`, `bn1`, ... in scan order)
//! - **x, y**: grid cell at extraction time, fractional after normalize/transform
//! - **v**: cell intensity, 0.0-1.0
//!
//! All operations are synchronous and never modify their input; each
//! returns a freshly allocated result.

pub mod error;
pub mod fsc;
pub mod geometry;
pub mod grid;
pub mod scan;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, ErrorKind, Result};
pub use fsc::{decode, encode, FscDocument, FscMeta, MetaValue};
pub use geometry::{
    bbox, center_of_mass, normalize, transform, BBox, CenterOfMass, NormalizeMode,
    NormalizeOptions, Point, Transform,
};
pub use grid::{Grid, GridSnapshot};
pub use scan::{extract, ScanResult, ScanStats};
pub use session::Screen;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray2;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    use crate::error::Error;
    use crate::fsc::{self, FscMeta, MetaValue};
    use crate::geometry::{self, NormalizeMode, NormalizeOptions, Point, Transform};
    use crate::grid::GridSnapshot;
    use crate::scan;

    /// Python-side point: `(id, x, y, v)`.
    type PointTuple = (String, f64, f64, f64);

    fn to_py_err(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn from_tuples(points: Vec<PointTuple>) -> Vec<Point> {
        points
            .into_iter()
            .map(|(id, x, y, v)| Point::new(id, x, y, v))
            .collect()
    }

    fn to_tuples(points: Vec<Point>) -> Vec<PointTuple> {
        points.into_iter().map(|p| (p.id, p.x, p.y, p.v)).collect()
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    /// Scan a 2D intensity grid (rows, cols).
    ///
    /// Returns `(points, stats)` where stats holds `active_pixels`,
    /// `density`, `center_of_mass` and `symmetry_lr`.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=0.5))]
    pub fn scan_grid<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f64>,
        threshold: f64,
    ) -> PyResult<(Vec<PointTuple>, Bound<'py, PyDict>)> {
        let grid = GridSnapshot::from_view(image.as_array(), threshold).map_err(to_py_err)?;
        let result = scan::extract(&grid);

        let stats = PyDict::new(py);
        stats.set_item("active_pixels", result.stats.active_pixels)?;
        stats.set_item("density", result.stats.density)?;
        stats.set_item(
            "center_of_mass",
            (result.stats.center_of_mass.x, result.stats.center_of_mass.y),
        )?;
        stats.set_item("symmetry_lr", result.stats.symmetry_lr)?;

        Ok((to_tuples(result.bn_points), stats))
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Recenter and rescale points.
    ///
    /// # Arguments
    /// * `mode` - "unit" (fit into [-1, 1]) or "grid" (centered, unscaled)
    /// * `use_com` - Center on the centroid instead of the bounding-box midpoint
    /// * `keep_ids` - Keep ids instead of renumbering bn0, bn1, ...
    /// * `scale` - Explicit scale factor overriding the mode default
    #[pyfunction]
    #[pyo3(signature = (points, mode="unit", use_com=true, keep_ids=true, scale=None))]
    pub fn normalize_points(
        points: Vec<PointTuple>,
        mode: &str,
        use_com: bool,
        keep_ids: bool,
        scale: Option<f64>,
    ) -> PyResult<Vec<PointTuple>> {
        let mode = match mode {
            "unit" => NormalizeMode::Unit,
            "grid" => NormalizeMode::Grid,
            other => {
                return Err(PyValueError::new_err(format!(
                    "unknown normalize mode '{other}' (expected 'unit' or 'grid')"
                )))
            }
        };
        let options = NormalizeOptions {
            mode,
            use_com,
            keep_ids,
            scale,
        };
        Ok(to_tuples(geometry::normalize(&from_tuples(points), &options)))
    }

    /// Scale, rotate (radians) about the origin, then translate.
    #[pyfunction]
    #[pyo3(signature = (points, tx=None, ty=None, sx=None, sy=None, rot=None))]
    pub fn transform_points(
        points: Vec<PointTuple>,
        tx: Option<f64>,
        ty: Option<f64>,
        sx: Option<f64>,
        sy: Option<f64>,
        rot: Option<f64>,
    ) -> Vec<PointTuple> {
        let t = Transform { tx, ty, sx, sy, rot };
        to_tuples(geometry::transform(&from_tuples(points), &t))
    }

    // ========================================================================
    // FSC
    // ========================================================================

    /// Encode points as FSC text.
    #[pyfunction]
    pub fn to_fsc(points: Vec<PointTuple>, cols: usize, rows: usize, thr: f64) -> PyResult<String> {
        fsc::encode(&from_tuples(points), &FscMeta::new(cols, rows, thr)).map_err(to_py_err)
    }

    /// Decode FSC text into `(meta, points)`; meta is None for empty text.
    ///
    /// Raises ValueError when the FSC1 header is missing.
    #[pyfunction]
    pub fn from_fsc<'py>(
        py: Python<'py>,
        text: &str,
    ) -> PyResult<(Option<Bound<'py, PyDict>>, Vec<PointTuple>)> {
        let doc = fsc::decode(text).map_err(to_py_err)?;
        let meta = match doc.meta {
            Some(meta) => {
                let dict = PyDict::new(py);
                for (key, value) in meta.entries() {
                    match value {
                        MetaValue::Number(n) => dict.set_item(key, *n)?,
                        MetaValue::Text(s) => dict.set_item(key, s.as_str())?,
                    }
                }
                Some(dict)
            }
            None => None,
        };
        Ok((meta, to_tuples(doc.bn_points)))
    }

    /// pScreen Rust extension module
    #[pymodule]
    pub fn pscreen(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(scan_grid, m)?)?;

        m.add_function(wrap_pyfunction!(normalize_points, m)?)?;
        m.add_function(wrap_pyfunction!(transform_points, m)?)?;

        m.add_function(wrap_pyfunction!(to_fsc, m)?)?;
        m.add_function(wrap_pyfunction!(from_fsc, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pscreen;
