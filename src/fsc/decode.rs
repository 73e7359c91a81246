//! FSC decoder.
//!
//! The header is strict: text whose first non-empty line does not start
//! with `FSC1` is rejected. Point lines are lenient: each one is classified
//! as an accepted point or a skip, and only accepted points are kept.

use log::{debug, warn};
use serde::Serialize;

use super::header::FscMeta;
use super::number::{finite_or, parse_number};
use crate::error::Result;
use crate::geometry::{repair_id, sequential_id, Point};

/// Decoded FSC text. `meta` is `None` only for input with no content.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FscDocument {
    pub meta: Option<FscMeta>,
    pub bn_points: Vec<Point>,
}

/// Why a point line was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// Fewer than `id,x,y`.
    TooFewFields(usize),
}

/// Parse FSC text.
///
/// Lines are trimmed and blank lines dropped; `\n` and `\r\n` both work.
/// Point lines with fewer than three fields are skipped. Unparseable
/// coordinates read as 0, an absent or unparseable intensity as 1, and ids
/// without the `bn` prefix are renumbered by their accepted position.
///
/// # Errors
/// `MissingHeader` when the first line is not an `FSC1` header.
pub fn decode(text: &str) -> Result<FscDocument> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((head, body)) = lines.split_first() else {
        return Ok(FscDocument::default());
    };
    let meta = FscMeta::parse(head)?;

    let mut bn_points = Vec::with_capacity(body.len());
    let mut skipped = 0usize;

    for (i, line) in body.iter().enumerate() {
        match parse_point_line(line, i, bn_points.len()) {
            Ok(p) => bn_points.push(p),
            Err(skip) => {
                debug!("fsc decode: skipped line {} ({:?}): {:?}", i + 2, skip, line);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            "fsc decode: {} malformed line(s) skipped, {} point(s) accepted",
            skipped,
            bn_points.len()
        );
    }

    Ok(FscDocument {
        meta: Some(meta),
        bn_points,
    })
}

/// Classify one point line.
///
/// # Arguments
/// * `line` - Trimmed, non-empty line
/// * `body_index` - Position among the lines after the header
/// * `accepted` - Number of points accepted so far
fn parse_point_line(
    line: &str,
    body_index: usize,
    accepted: usize,
) -> std::result::Result<Point, Skip> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Err(Skip::TooFewFields(fields.len()));
    }

    let raw_id = if fields[0].is_empty() {
        sequential_id(body_index)
    } else {
        fields[0].to_string()
    };
    let id = repair_id(&raw_id, accepted).into_owned();
    if id != raw_id {
        debug!("fsc decode: id {:?} renumbered to {}", raw_id, id);
    }

    let v = fields.get(3).map_or(1.0, |f| parse_number(f));

    Ok(Point {
        id,
        x: finite_or(parse_number(fields[1]), 0.0),
        y: finite_or(parse_number(fields[2]), 0.0),
        v: finite_or(v, 1.0),
    })
}
