//! bn points and the id rules shared by extraction and the FSC codec.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

/// Reserved prefix every point id carries.
pub const BN_PREFIX: &str = "bn";

/// One activated cell exported as `(id, x, y, v)`.
///
/// Coordinates start out as grid integers and may become fractional after
/// normalization or transformation. `v` is the cell intensity (0.0-1.0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Empty when the source had no id; filled in by transform/encode.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_intensity", deserialize_with = "null_as_intensity")]
    pub v: f64,
}

fn default_intensity() -> f64 {
    1.0
}

/// `null` id reads like a missing one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` intensity reads like a missing one.
fn null_as_intensity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_intensity))
}

impl Point {
    pub fn new(id: impl Into<String>, x: f64, y: f64, v: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            v,
        }
    }

    /// Point with the sequential id `bn<index>`.
    pub fn numbered(index: usize, x: f64, y: f64, v: f64) -> Self {
        Self::new(sequential_id(index), x, y, v)
    }

    pub fn has_bn_id(&self) -> bool {
        has_bn_prefix(&self.id)
    }
}

/// `bn0`, `bn1`, ...
#[inline]
pub fn sequential_id(index: usize) -> String {
    format!("{BN_PREFIX}{index}")
}

#[inline]
pub fn has_bn_prefix(id: &str) -> bool {
    id.starts_with(BN_PREFIX)
}

/// Keep `id` when it already carries the prefix, otherwise `bn<index>`.
pub fn repair_id(id: &str, index: usize) -> Cow<'_, str> {
    if has_bn_prefix(id) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(sequential_id(index))
    }
}

/// Keep a non-empty `id` as is, otherwise `bn<index>`.
pub fn default_id(id: &str, index: usize) -> Cow<'_, str> {
    if id.is_empty() {
        Cow::Owned(sequential_id(index))
    } else {
        Cow::Borrowed(id)
    }
}
