//! Screen session: one grid plus its most recent scan.
//!
//! This is the surface the painting layer talks to. It owns the grid,
//! forwards cell edits, and keeps the last [`ScanResult`] so exporting
//! does not rescan an unchanged grid. Every edit drops the cached scan.

use crate::error::Result;
use crate::fsc::{self, FscDocument, FscMeta};
use crate::geometry::{self, NormalizeOptions, Point, Transform};
use crate::grid::Grid;
use crate::scan::{self, ScanResult};

#[derive(Clone, Debug)]
pub struct Screen {
    grid: Grid,
    last_scan: Option<ScanResult>,
}

impl Screen {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            last_scan: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid; invalidates the cached scan.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.last_scan = None;
        &mut self.grid
    }

    pub fn set_cell(&mut self, i: usize, on: bool) {
        self.grid_mut().set_cell(i, on);
    }

    pub fn toggle_cell(&mut self, i: usize) {
        self.grid_mut().toggle_cell(i);
    }

    pub fn clear(&mut self) {
        self.grid_mut().clear();
    }

    pub fn invert(&mut self) {
        self.grid_mut().invert();
    }

    pub fn resize(&mut self, cols: usize, rows: usize, keep: bool) {
        self.grid_mut().resize(cols, rows, keep);
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        self.grid_mut().set_threshold(threshold)
    }

    /// Scan the grid and cache the result.
    pub fn scan(&mut self) -> &ScanResult {
        self.last_scan.insert(scan::extract(&self.grid.snapshot()))
    }

    pub fn last_scan(&self) -> Option<&ScanResult> {
        self.last_scan.as_ref()
    }

    /// Points of the cached scan, scanning first when there is none.
    pub fn points(&mut self) -> &[Point] {
        if self.last_scan.is_none() {
            self.scan();
        }
        self.last_scan
            .as_ref()
            .map_or(&[][..], |scan| scan.bn_points.as_slice())
    }

    pub fn normalize(&self, points: &[Point], options: &NormalizeOptions) -> Vec<Point> {
        geometry::normalize(points, options)
    }

    pub fn transform(&self, points: &[Point], t: &Transform) -> Vec<Point> {
        geometry::transform(points, t)
    }

    /// Encode `points` (or the current points when `None`) as FSC.
    ///
    /// Header keys missing from `meta` come from this screen's grid.
    pub fn to_fsc(&mut self, points: Option<&[Point]>, meta: FscMeta) -> Result<String> {
        let meta = meta.or_grid(&self.grid.snapshot());
        match points {
            Some(points) => fsc::encode(points, &meta),
            None => {
                let points = self.points().to_vec();
                fsc::encode(&points, &meta)
            }
        }
    }

    pub fn from_fsc(&self, text: &str) -> Result<FscDocument> {
        fsc::decode(text)
    }
}
