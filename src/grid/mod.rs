//! Grid state consumed by the scanner.
//!
//! - **GridSnapshot**: borrowed, read-only view handed to [`crate::scan::extract`]
//! - **Grid**: owned canvas with the cell editing operations of the painting layer

pub mod canvas;
pub mod snapshot;

pub use canvas::Grid;
pub use snapshot::GridSnapshot;
