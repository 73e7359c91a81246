//! Grid scanning.
//!
//! Turns a [`GridSnapshot`](crate::grid::GridSnapshot) into bn points plus
//! derived statistics (density, center of mass, left-right symmetry).

pub mod extract;
pub mod symmetry;

pub use crate::geometry::CenterOfMass;
pub use extract::{extract, ScanMeta, ScanResult, ScanStats};
pub use symmetry::symmetry_lr;
