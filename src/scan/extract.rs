//! Point extraction: grid snapshot -> bn points + statistics.

use log::debug;
use serde::Serialize;

use super::symmetry::symmetry_lr;
use crate::geometry::{center_of_mass, CenterOfMass, Point};
use crate::grid::GridSnapshot;

/// Grid parameters the scan was taken with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScanMeta {
    pub cols: usize,
    pub rows: usize,
    pub threshold: f64,
}

/// Statistics over the active cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub active_pixels: usize,
    /// `active_pixels / (cols * rows)`, 0 for an empty grid.
    pub density: f64,
    /// Mean position of the active cells, `(0, 0)` when none are active.
    pub center_of_mass: CenterOfMass,
    #[serde(rename = "symmetryLR")]
    pub symmetry_lr: f64,
}

/// Hand-off from the scanner to geometry and codec callers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub meta: ScanMeta,
    pub stats: ScanStats,
    pub bn_points: Vec<Point>,
}

impl ScanResult {
    /// Pretty JSON payload for export.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Scan a grid in row-major order and emit one point per active cell.
///
/// A cell is active when `value >= threshold`. Points are numbered
/// `bn0, bn1, ...` in scan order and carry the raw cell value as `v`.
pub fn extract(grid: &GridSnapshot<'_>) -> ScanResult {
    let threshold = grid.threshold();
    let mut bn_points = Vec::new();

    for ((y, x), &v) in grid.cells().indexed_iter() {
        if v >= threshold {
            bn_points.push(Point::numbered(bn_points.len(), x as f64, y as f64, v));
        }
    }

    let count = bn_points.len();
    let total = grid.len();
    let center_of_mass = center_of_mass(&bn_points);
    let density = if total > 0 {
        count as f64 / total as f64
    } else {
        0.0
    };

    debug!(
        "scanned {}x{} grid at threshold {}: {} active cells",
        grid.cols(),
        grid.rows(),
        threshold,
        count
    );

    ScanResult {
        meta: ScanMeta {
            cols: grid.cols(),
            rows: grid.rows(),
            threshold,
        },
        stats: ScanStats {
            active_pixels: count,
            density,
            center_of_mass,
            symmetry_lr: symmetry_lr(grid),
        },
        bn_points,
    }
}
