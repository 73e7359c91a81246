//! Geometry over bn point sets.
//!
//! All operations are pure: they read a slice and return a fresh `Vec`.
//! Empty input is a defined degenerate case (zero box, zero centroid,
//! empty output), never an error.

pub mod bounds;
pub mod normalize;
pub mod point;
pub mod transform;

pub use bounds::{bbox, center_of_mass, BBox, CenterOfMass};
pub use normalize::{normalize, NormalizeMode, NormalizeOptions};
pub use point::{has_bn_prefix, repair_id, sequential_id, Point, BN_PREFIX};
pub use transform::{transform, Affine, Transform};
