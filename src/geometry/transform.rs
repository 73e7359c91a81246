//! 2D affine transform: scale, then rotate about the origin, then translate.

use serde::Deserialize;

use super::point::{default_id, Point};

/// Transform parameters as supplied by a caller. Unset fields take the
/// defaults listed in [`Transform::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub tx: Option<f64>,
    pub ty: Option<f64>,
    pub sx: Option<f64>,
    pub sy: Option<f64>,
    /// Rotation in radians.
    pub rot: Option<f64>,
}

/// Fully resolved transform parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
    pub rot: f64,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx: Some(tx),
            ty: Some(ty),
            ..Self::default()
        }
    }

    pub fn scale(s: f64) -> Self {
        Self {
            sx: Some(s),
            ..Self::default()
        }
    }

    pub fn rotate(rot: f64) -> Self {
        Self {
            rot: Some(rot),
            ..Self::default()
        }
    }

    /// Defaults: `sx = 1`, `sy = sx`, `tx = ty = 0`, `rot = 0`.
    pub fn resolve(&self) -> Affine {
        let sx = self.sx.unwrap_or(1.0);
        Affine {
            sx,
            sy: self.sy.unwrap_or(sx),
            tx: self.tx.unwrap_or(0.0),
            ty: self.ty.unwrap_or(0.0),
            rot: self.rot.unwrap_or(0.0),
        }
    }
}

impl Affine {
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.rot.sin_cos();
        let x = x * self.sx;
        let y = y * self.sy;
        let xr = x * cos - y * sin;
        let yr = x * sin + y * cos;
        (xr + self.tx, yr + self.ty)
    }
}

/// Map every point through `t`, preserving order and count.
///
/// Empty ids become `bn<index>`; other ids and `v` pass through.
pub fn transform(points: &[Point], t: &Transform) -> Vec<Point> {
    let affine = t.resolve();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (x, y) = affine.apply(p.x, p.y);
            Point {
                id: default_id(&p.id, i).into_owned(),
                x,
                y,
                v: p.v,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn sample() -> Vec<Point> {
        vec![
            Point::new("bn0", 1.0, 0.0, 1.0),
            Point::new("bn1", 2.5, -3.0, 0.25),
            Point::new("", 0.0, 2.0, 1.0),
        ]
    }

    #[test]
    fn test_identity_is_exact() {
        let input = sample();
        let out = transform(&input, &Transform::identity());
        assert_eq!(out.len(), input.len());
        for (a, b) in input.iter().zip(&out) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.v, b.v);
        }
        assert_eq!(out[0].id, "bn0");
    }

    #[test]
    fn test_missing_id_defaulted() {
        let out = transform(&sample(), &Transform::identity());
        assert_eq!(out[2].id, "bn2");
    }

    #[test]
    fn test_uniform_scale_default() {
        let out = transform(&sample(), &Transform::scale(2.0));
        assert_eq!(out[1].x, 5.0);
        assert_eq!(out[1].y, -6.0);
    }

    #[test]
    fn test_anisotropic_scale() {
        let t = Transform {
            sx: Some(2.0),
            sy: Some(0.5),
            ..Transform::default()
        };
        let out = transform(&sample(), &t);
        assert_eq!(out[2].y, 1.0);
        assert_eq!(out[0].x, 2.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let out = transform(&sample(), &Transform::rotate(FRAC_PI_2));
        // (1, 0) -> (0, 1)
        assert!(out[0].x.abs() < 1e-12);
        assert!((out[0].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let t = Transform {
            sx: Some(2.0),
            rot: Some(FRAC_PI_2),
            tx: Some(10.0),
            ty: Some(-1.0),
            ..Transform::default()
        };
        let out = transform(&[Point::new("bn0", 1.0, 0.0, 1.0)], &t);
        // scale (2, 0), rotate (0, 2), translate (10, 1)
        assert!((out[0].x - 10.0).abs() < 1e-12);
        assert!((out[0].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize() {
        let t: Transform = serde_json::from_str(r#"{"sx": 3, "tx": 1}"#).unwrap();
        let a = t.resolve();
        assert_eq!((a.sx, a.sy, a.tx, a.ty, a.rot), (3.0, 3.0, 1.0, 0.0, 0.0));
    }
}
