//! Left-right mirror agreement of a grid.

use crate::grid::GridSnapshot;

/// Fraction of mirrored cell pairs whose activation agrees.
///
/// Each row compares `(x, y)` against `(cols - 1 - x, y)` for
/// `x < cols / 2`. 1.0 is a perfect mirror; grids narrower than two
/// columns have no pairs and score 1.0.
pub fn symmetry_lr(grid: &GridSnapshot<'_>) -> f64 {
    let cols = grid.cols();
    if cols < 2 {
        return 1.0;
    }

    let mut matches = 0usize;
    let mut checks = 0usize;

    for y in 0..grid.rows() {
        for x in 0..cols / 2 {
            let a = grid.is_active(x, y);
            let b = grid.is_active(cols - 1 - x, y);
            checks += 1;
            if a == b {
                matches += 1;
            }
        }
    }

    if checks == 0 {
        1.0
    } else {
        matches as f64 / checks as f64
    }
}
