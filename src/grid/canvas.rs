//! Owned, editable grid state.
//!
//! Holds the intensity buffer the painting layer writes into. Cell writes
//! are binary (1.0 / 0.0); scanning works on any intensity so other writers
//! can store partial values through [`Grid::set_intensity`].

use ndarray::Array2;

use super::snapshot::GridSnapshot;
use crate::error::{Error, Result};

/// Intensity grid, `(rows, cols)` row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<f64>,
    threshold: f64,
}

impl Grid {
    /// Create an all-zero grid.
    pub fn new(cols: usize, rows: usize, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(Error::Threshold(threshold));
        }
        Ok(Self {
            cells: Array2::zeros((rows, cols)),
            threshold,
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_cells(cols: usize, rows: usize, threshold: f64, px: Vec<f64>) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(Error::Threshold(threshold));
        }
        let len = px.len();
        let cells = Array2::from_shape_vec((rows, cols), px)
            .map_err(|_| Error::GridShape { cols, rows, len })?;
        Ok(Self { cells, threshold })
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

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(x, y)`.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols() + x
    }

    /// Grid position of flat index `i`.
    #[inline]
    pub fn xy(&self, i: usize) -> (usize, usize) {
        let cols = self.cols().max(1);
        (i % cols, i / cols)
    }

    /// Intensity at flat index `i`, `None` when out of range.
    pub fn get(&self, i: usize) -> Option<f64> {
        if i >= self.len() {
            return None;
        }
        let (x, y) = self.xy(i);
        Some(self.cells[[y, x]])
    }

    /// Switch a cell on (1.0) or off (0.0). Out-of-range indices are ignored.
    pub fn set_cell(&mut self, i: usize, on: bool) {
        self.set_intensity(i, if on { 1.0 } else { 0.0 });
    }

    /// Store a raw intensity. Out-of-range indices are ignored.
    pub fn set_intensity(&mut self, i: usize, value: f64) {
        if i >= self.len() {
            return;
        }
        let (x, y) = self.xy(i);
        self.cells[[y, x]] = value;
    }

    /// Flip a cell: any nonzero intensity becomes 0, zero becomes 1.
    pub fn toggle_cell(&mut self, i: usize) {
        if let Some(v) = self.get(i) {
            self.set_cell(i, v == 0.0);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    /// Binary inversion over the whole grid (nonzero -> 0, zero -> 1).
    pub fn invert(&mut self) {
        self.cells.mapv_inplace(|v| if v != 0.0 { 0.0 } else { 1.0 });
    }

    /// Change dimensions. Contents survive only when `keep` is set and the
    /// cell count is unchanged; otherwise the grid is reset to zeros.
    pub fn resize(&mut self, cols: usize, rows: usize, keep: bool) {
        if keep && cols * rows == self.len() {
            let flat: Vec<f64> = self.cells.iter().copied().collect();
            if let Ok(cells) = Array2::from_shape_vec((rows, cols), flat) {
                self.cells = cells;
                return;
            }
        }
        self.cells = Array2::zeros((rows, cols));
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        if !threshold.is_finite() {
            return Err(Error::Threshold(threshold));
        }
        self.threshold = threshold;
        Ok(())
    }

    /// Number of cells with `value >= threshold`.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v >= self.threshold).count()
    }

    /// Active fraction of the grid, 0 for an empty grid.
    pub fn density(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.active_count() as f64 / self.len() as f64
        }
    }

    /// Borrow the grid for scanning.
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot::from_parts(self.cells.view(), self.threshold)
    }
}
