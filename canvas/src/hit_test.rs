use super::*;

fn line(points: &[(f64, f64)]) -> Stroke {
    Stroke::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

// =============================================================
// stroke_contains
// =============================================================

#[test]
fn point_on_segment_is_contained() {
    let stroke = line(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(stroke_contains(&stroke, Point::new(50.0, 0.0), 8.0));
}

#[test]
fn point_inside_threshold_is_contained() {
    let stroke = line(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(stroke_contains(&stroke, Point::new(50.0, 7.9), 8.0));
}

#[test]
fn threshold_is_strict() {
    let stroke = line(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(!stroke_contains(&stroke, Point::new(50.0, 8.0), 8.0));
}

#[test]
fn any_segment_counts() {
    let stroke = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 50.0), (60.0, 50.0)]);
    assert!(stroke_contains(&stroke, Point::new(35.0, 52.0), 8.0));
    assert!(stroke_contains(&stroke, Point::new(12.0, 25.0), 8.0));
    assert!(!stroke_contains(&stroke, Point::new(40.0, 20.0), 8.0));
}

#[test]
fn near_endpoint_beyond_segment_is_contained() {
    let stroke = line(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(stroke_contains(&stroke, Point::new(14.0, 0.0), 8.0));
    assert!(!stroke_contains(&stroke, Point::new(20.0, 0.0), 8.0));
}

#[test]
fn single_point_stroke_never_hit() {
    let stroke = line(&[(5.0, 5.0)]);
    assert!(!stroke_contains(&stroke, Point::new(5.0, 5.0), 8.0));
}

#[test]
fn repeated_point_segment_measures_to_point() {
    let stroke = line(&[(5.0, 5.0), (5.0, 5.0)]);
    assert!(stroke_contains(&stroke, Point::new(8.0, 5.0), 8.0));
    assert!(!stroke_contains(&stroke, Point::new(15.0, 5.0), 8.0));
}

// =============================================================
// find_stroke_to_erase
// =============================================================

#[test]
fn empty_collection_has_no_match() {
    assert_eq!(find_stroke_to_erase(&[], Point::new(0.0, 0.0), 8.0), None);
}

#[test]
fn horizontal_wins_over_vertical_near_its_middle() {
    let strokes = vec![line(&[(0.0, 0.0), (100.0, 0.0)]), line(&[(0.0, 0.0), (0.0, 100.0)])];
    assert_eq!(find_stroke_to_erase(&strokes, Point::new(50.0, 3.0), 8.0), Some(0));
}

#[test]
fn first_match_beats_closer_later_stroke() {
    // Stroke 0 is 6px away, stroke 1 passes right through the query point.
    let strokes = vec![line(&[(0.0, 6.0), (100.0, 6.0)]), line(&[(0.0, 0.0), (100.0, 0.0)])];
    assert_eq!(find_stroke_to_erase(&strokes, Point::new(50.0, 0.0), 8.0), Some(0));
}

#[test]
fn skips_strokes_out_of_reach() {
    let strokes = vec![line(&[(0.0, 100.0), (100.0, 100.0)]), line(&[(0.0, 0.0), (100.0, 0.0)])];
    assert_eq!(find_stroke_to_erase(&strokes, Point::new(50.0, 2.0), 8.0), Some(1));
}

#[test]
fn far_point_matches_nothing() {
    let strokes = vec![line(&[(0.0, 0.0), (100.0, 0.0)]), line(&[(0.0, 0.0), (0.0, 100.0)])];
    assert_eq!(find_stroke_to_erase(&strokes, Point::new(60.0, 60.0), 8.0), None);
}
