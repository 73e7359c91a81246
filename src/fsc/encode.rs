//! FSC encoder.

use log::debug;

use super::header::FscMeta;
use super::number::{finite_or, trim_num};
use crate::error::Result;
use crate::geometry::{repair_id, Point};

/// Serialize `points` under the header `meta`.
///
/// One line per point in input order: `<id>,<x>,<y>,<v>`. Ids without the
/// `bn` prefix become `bn<index>`; non-finite coordinates are written as 0
/// and a non-finite intensity as 1. Lines are joined with `\n`, no trailing
/// newline.
///
/// # Errors
/// `MissingMeta` when `meta` lacks `cols`, `rows` or `thr`. Use
/// [`FscMeta::or_grid`] to fill them from the grid being exported.
pub fn encode(points: &[Point], meta: &FscMeta) -> Result<String> {
    let mut lines = Vec::with_capacity(points.len() + 1);
    lines.push(meta.render()?);

    for (i, p) in points.iter().enumerate() {
        lines.push(point_line(p, i));
    }

    Ok(lines.join("\n"))
}

/// Format one point record.
fn point_line(p: &Point, index: usize) -> String {
    let id = repair_id(&p.id, index);
    if id != p.id.as_str() {
        debug!("fsc encode: id {:?} at {} written as {}", p.id, index, id);
    }
    if !(p.x.is_finite() && p.y.is_finite() && p.v.is_finite()) {
        debug!("fsc encode: non-finite field in {} replaced by default", id);
    }

    format!(
        "{},{},{},{}",
        id,
        trim_num(finite_or(p.x, 0.0)),
        trim_num(finite_or(p.y, 0.0)),
        trim_num(finite_or(p.v, 1.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let text = encode(&[], &FscMeta::new(32, 18, 0.5)).unwrap();
        assert_eq!(text, "FSC1;cols=32;rows=18;thr=0.5");
    }

    #[test]
    fn test_points() {
        let pts = vec![
            Point::new("bn0", 12.0, 5.0, 1.0),
            Point::new("bn1", 0.125, -3.33333, 0.7),
        ];
        let text = encode(&pts, &FscMeta::new(32, 18, 0.5)).unwrap();
        assert_eq!(
            text,
            "FSC1;cols=32;rows=18;thr=0.5\nbn0,12,5,1\nbn1,0.125,-3.3333,0.7"
        );
    }

    #[test]
    fn test_foreign_id_and_near_integer() {
        let p = Point::new("x9", 2.00000000001, -1.0, 1.0);
        assert_eq!(point_line(&p, 0), "bn0,2,-1,1");
    }

    #[test]
    fn test_repair_uses_position() {
        let pts = vec![
            Point::new("bn5", 0.0, 0.0, 1.0),
            Point::new("", 1.0, 0.0, 1.0),
            Point::new("p", 2.0, 0.0, 1.0),
        ];
        let text = encode(&pts, &FscMeta::new(3, 1, 0.5)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "bn5,0,0,1");
        assert_eq!(lines[2], "bn1,1,0,1");
        assert_eq!(lines[3], "bn2,2,0,1");
    }

    #[test]
    fn test_non_finite_defaults() {
        let p = Point::new("bn0", f64::NAN, f64::INFINITY, f64::NAN);
        assert_eq!(point_line(&p, 0), "bn0,0,0,1");
    }

    #[test]
    fn test_missing_meta() {
        assert!(encode(&[], &FscMeta::default()).is_err());
    }
}
