#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn snap_rounds_to_nearest_cell() {
    assert_eq!(snap(97.0), 100.0);
    assert_eq!(snap(41.0), 40.0);
    assert_eq!(snap(9.9), 0.0);
}

#[test]
fn snap_half_cell_rounds_away_from_zero() {
    assert_eq!(snap(10.0), 20.0);
    assert_eq!(snap(-10.0), -20.0);
}

#[test]
fn snap_handles_negative_coordinates() {
    assert_eq!(snap(-31.0), -40.0);
    assert_eq!(snap(-29.0), -20.0);
}

#[test]
fn snap_is_idempotent() {
    for raw in [-1234.5, -10.0, -0.1, 0.0, 3.3, 19.99, 97.0, 12_345.678] {
        let once = snap(raw);
        assert_eq!(snap(once), once, "snap not idempotent for {raw}");
    }
}

#[test]
fn snap_output_is_aligned() {
    for raw in [-77.7, 0.4, 55.5, 1001.0] {
        assert!(is_aligned(snap(raw)), "snap({raw}) not aligned");
    }
}

#[test]
fn snap_point_snaps_axes_independently() {
    assert_eq!(snap_point(Point::new(97.0, 41.0)), Point::new(100.0, 40.0));
}

#[test]
fn is_aligned_rejects_off_grid_values() {
    assert!(is_aligned(0.0));
    assert!(is_aligned(-60.0));
    assert!(!is_aligned(15.0));
    assert!(!is_aligned(f64::NAN));
    assert!(!is_aligned(f64::INFINITY));
}

#[test]
fn is_point_aligned_requires_both_axes() {
    assert!(is_point_aligned(Point::new(20.0, 40.0)));
    assert!(!is_point_aligned(Point::new(20.0, 41.0)));
}
