//! Read-only view of an intensity grid.
//!
//! The snapshot is what the painting layer hands to the scanner: a
//! `(rows, cols)` array of intensities plus the activation threshold.
//! A cell is active when `value >= threshold`.

use ndarray::ArrayView2;

use crate::error::{Error, Result};

/// Borrowed grid state at the moment of a scan.
#[derive(Clone, Copy, Debug)]
pub struct GridSnapshot<'a> {
    cells: ArrayView2<'a, f64>,
    threshold: f64,
}

impl<'a> GridSnapshot<'a> {
    /// Wrap a flat row-major intensity buffer.
    ///
    /// # Arguments
    /// * `cols` - Grid width in cells
    /// * `rows` - Grid height in cells
    /// * `threshold` - Activation threshold (normally 0.0-1.0)
    /// * `px` - Flat buffer of length `cols * rows`, index `y * cols + x`
    ///
    /// # Errors
    /// `GridShape` when the buffer length disagrees with the dimensions,
    /// `Threshold` when the threshold is not finite.
    pub fn new(cols: usize, rows: usize, threshold: f64, px: &'a [f64]) -> Result<Self> {
        let cells = ArrayView2::from_shape((rows, cols), px).map_err(|_| Error::GridShape {
            cols,
            rows,
            len: px.len(),
        })?;
        Self::from_view(cells, threshold)
    }

    /// Wrap an existing `(rows, cols)` array view.
    pub fn from_view(cells: ArrayView2<'a, f64>, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(Error::Threshold(threshold));
        }
        Ok(Self::from_parts(cells, threshold))
    }

    /// Threshold already validated by the owner.
    pub(crate) fn from_parts(cells: ArrayView2<'a, f64>, threshold: f64) -> Self {
        Self { cells, threshold }
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Total number of cells (`cols * rows`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Intensity at grid position `(x, y)`.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> f64 {
        self.cells[[y, x]]
    }

    /// Whether the cell at `(x, y)` passes the threshold (inclusive).
    #[inline]
    pub fn is_active(&self, x: usize, y: usize) -> bool {
        self.value(x, y) >= self.threshold
    }

    /// Underlying `(rows, cols)` view.
    pub fn cells(&self) -> ArrayView2<'a, f64> {
        self.cells
    }
}
