#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_sub() {
    let d = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
    assert_eq!(d, Point::new(3.0, 4.0));
}

#[test]
fn point_dot() {
    assert_eq!(Point::new(1.0, 2.0).dot(Point::new(3.0, 4.0)), 11.0);
}

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// =============================================================
// point_to_segment_distance
// =============================================================

#[test]
fn distance_zero_at_start_of_horizontal_segment() {
    assert_eq!(calculate_point_to_line_distance(0.0, 0.0, 0.0, 0.0, 10.0, 0.0), 0.0);
}

#[test]
fn distance_zero_at_either_endpoint() {
    assert_eq!(calculate_point_to_line_distance(3.0, 7.0, 3.0, 7.0, -2.0, 11.0), 0.0);
    assert_eq!(calculate_point_to_line_distance(-2.0, 11.0, 3.0, 7.0, -2.0, 11.0), 0.0);
}

#[test]
fn distance_perpendicular_projection() {
    assert!(approx_eq(calculate_point_to_line_distance(5.0, 5.0, 0.0, 0.0, 10.0, 0.0), 5.0));
}

#[test]
fn distance_clamps_beyond_end() {
    assert!(approx_eq(calculate_point_to_line_distance(20.0, 0.0, 0.0, 0.0, 10.0, 0.0), 10.0));
}

#[test]
fn distance_clamps_before_start() {
    assert!(approx_eq(calculate_point_to_line_distance(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0));
}

#[test]
fn distance_to_diagonal_segment() {
    // Segment along y = x; (0, 2) projects to (1, 1).
    let d = calculate_point_to_line_distance(0.0, 2.0, 0.0, 0.0, 4.0, 4.0);
    assert!(approx_eq(d, 2.0_f64.sqrt()));
}

#[test]
fn zero_length_segment_measures_to_start() {
    let d = calculate_point_to_line_distance(4.0, 3.0, 0.0, 0.0, 0.0, 0.0);
    assert!(approx_eq(d, 5.0));
    assert!(d.is_finite());
}

#[test]
fn segment_distance_to_matches_free_function() {
    let seg = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
    assert!(approx_eq(seg.distance_to(Point::new(6.0, 50.0)), 6.0));
}

// =============================================================
// client_to_surface
// =============================================================

#[test]
fn client_to_surface_subtracts_origin() {
    let p = client_to_surface(Point::new(110.0, 245.0), Point::new(10.0, 45.0));
    assert_eq!(p, Point::new(100.0, 200.0));
}

#[test]
fn client_to_surface_identity_at_zero_origin() {
    let p = client_to_surface(Point::new(12.5, 8.0), Point::new(0.0, 0.0));
    assert_eq!(p, Point::new(12.5, 8.0));
}
