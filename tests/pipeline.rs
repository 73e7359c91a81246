//! End-to-end tests: grid -> points -> geometry -> FSC -> points.

use pscreen::{
    decode, encode, extract, normalize, transform, ErrorKind, FscMeta, Grid, GridSnapshot,
    NormalizeMode, NormalizeOptions, Point, Screen, Transform,
};

/// 8x6 heart-ish shape, mirror symmetric.
fn heart() -> Grid {
    #[rustfmt::skip]
    let rows: [&str; 6] = [
        ".##..##.",
        "########",
        "########",
        ".######.",
        "..####..",
        "...##...",
    ];
    let px = rows
        .iter()
        .flat_map(|r| r.chars().map(|c| if c == '#' { 1.0 } else { 0.0 }))
        .collect();
    Grid::from_cells(8, 6, 0.5, px).unwrap()
}

fn max_abs(points: &[Point]) -> f64 {
    points
        .iter()
        .fold(0.0f64, |m, p| m.max(p.x.abs()).max(p.y.abs()))
}

#[test]
fn test_extract_counts_match_threshold_rule() {
    let px: Vec<f64> = (0..30).map(|i| (i % 7) as f64 / 6.0).collect();
    let grid = GridSnapshot::new(6, 5, 0.5, &px).unwrap();
    let expected = px.iter().filter(|&&v| v >= 0.5).count();

    let scan = extract(&grid);
    assert_eq!(scan.bn_points.len(), expected);
    assert_eq!(scan.stats.active_pixels, expected);
    assert!((scan.stats.density - expected as f64 / 30.0).abs() < 1e-12);
    for (i, p) in scan.bn_points.iter().enumerate() {
        assert_eq!(p.id, format!("bn{i}"));
        assert!(p.v >= 0.5);
    }
}

#[test]
fn test_mirror_grid_is_symmetric() {
    let grid = heart();
    let scan = extract(&grid.snapshot());
    assert_eq!(scan.stats.symmetry_lr, 1.0);
    assert!((scan.stats.center_of_mass.x - 3.5).abs() < 1e-12);
}

#[test]
fn test_single_column_grid_is_symmetric() {
    let px = vec![1.0, 0.0, 0.0, 1.0];
    let grid = GridSnapshot::new(1, 4, 0.5, &px).unwrap();
    assert_eq!(extract(&grid).stats.symmetry_lr, 1.0);
}

#[test]
fn test_unit_normalize_reaches_one() {
    let points = extract(&heart().snapshot()).bn_points;
    let unit = normalize(&points, &NormalizeOptions::default());
    assert_eq!(unit.len(), points.len());
    assert!((max_abs(&unit) - 1.0).abs() < 1e-9);

    let bbox_centered = normalize(
        &points,
        &NormalizeOptions {
            use_com: false,
            ..NormalizeOptions::default()
        },
    );
    assert!((max_abs(&bbox_centered) - 1.0).abs() < 1e-9);
}

#[test]
fn test_grid_normalize_keeps_units() {
    let points = extract(&heart().snapshot()).bn_points;
    let opts = NormalizeOptions {
        mode: NormalizeMode::Grid,
        use_com: false,
        ..NormalizeOptions::default()
    };
    let centered = normalize(&points, &opts);
    // bbox is x 0..7, y 0..5, so the midpoint is (3.5, 2.5)
    assert_eq!(centered[0].x, points[0].x - 3.5);
    assert_eq!(centered[0].y, points[0].y - 2.5);
}

#[test]
fn test_identity_transform() {
    let points = extract(&heart().snapshot()).bn_points;
    assert_eq!(transform(&points, &Transform::identity()), points);
}

#[test]
fn test_full_round_trip() {
    let grid = heart();
    let points = extract(&grid.snapshot()).bn_points;
    let shaped = transform(
        &normalize(&points, &NormalizeOptions::default()),
        &Transform {
            rot: Some(0.3),
            sx: Some(4.0),
            tx: Some(1.5),
            ..Transform::default()
        },
    );

    let meta = FscMeta::from_grid(&grid.snapshot());
    let text = encode(&shaped, &meta).unwrap();
    assert!(text.starts_with("FSC1;cols=8;rows=6;thr=0.5\n"));

    let doc = decode(&text).unwrap();
    assert_eq!(doc.meta, Some(meta));
    assert_eq!(doc.bn_points.len(), shaped.len());
    for (a, b) in shaped.iter().zip(&doc.bn_points) {
        assert_eq!(a.id, b.id);
        assert!((a.x - b.x).abs() <= 1e-4);
        assert!((a.y - b.y).abs() <= 1e-4);
        assert!((a.v - b.v).abs() <= 1e-4);
    }
}

#[test]
fn test_integer_points_round_trip_exactly() {
    let points = extract(&heart().snapshot()).bn_points;
    let doc = decode(&encode(&points, &FscMeta::new(8, 6, 0.5)).unwrap()).unwrap();
    assert_eq!(doc.bn_points, points);
}

#[test]
fn test_decode_without_header_is_format_error() {
    let err = decode("bn0,1,2,1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_decode_skips_bad_line() {
    let doc = decode("FSC1;cols=4;rows=4;thr=0.5\nbn0,1,2,1\nbadline\nbn1,3,3,0.7").unwrap();
    assert_eq!(
        doc.bn_points,
        vec![
            Point::new("bn0", 1.0, 2.0, 1.0),
            Point::new("bn1", 3.0, 3.0, 0.7),
        ]
    );
}

#[test]
fn test_encode_repairs_foreign_id() {
    let p = Point::new("x9", 2.00000000001, -1.0, 1.0);
    let text = encode(&[p], &FscMeta::new(4, 4, 0.5)).unwrap();
    assert_eq!(text.lines().nth(1), Some("bn0,2,-1,1"));
}

#[test]
fn test_bad_grid_is_precondition_error() {
    let err = GridSnapshot::new(4, 4, 0.5, &[0.0; 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn test_screen_export() {
    let mut screen = Screen::new(heart());
    let text = screen.to_fsc(None, FscMeta::default()).unwrap();
    let doc = screen.from_fsc(&text).unwrap();
    assert_eq!(doc.bn_points.len(), screen.points().len());

    screen.toggle_cell(0);
    assert_eq!(screen.points().len(), doc.bn_points.len() + 1);
}
