//! Bounding box and centroid of a point set.

use serde::Serialize;

use super::point::Point;

/// Axis-aligned bounds. All zero for an empty point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub w: f64,
    pub h: f64,
}

impl BBox {
    /// Midpoint of the box.
    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Largest absolute extent over both axes.
    pub fn max_abs(&self) -> f64 {
        self.min_x
            .abs()
            .max(self.max_x.abs())
            .max(self.min_y.abs())
            .max(self.max_y.abs())
    }
}

pub fn bbox(points: &[Point]) -> BBox {
    if points.is_empty() {
        return BBox::default();
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }

    BBox {
        min_x,
        min_y,
        max_x,
        max_y,
        w: max_x - min_x,
        h: max_y - min_y,
    }
}

/// Mean position of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CenterOfMass {
    pub x: f64,
    pub y: f64,
}

/// Arithmetic mean of the coordinates, `(0, 0)` for an empty set.
pub fn center_of_mass(points: &[Point]) -> CenterOfMass {
    if points.is_empty() {
        return CenterOfMass::default();
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    CenterOfMass {
        x: sx / n,
        y: sy / n,
    }
}
