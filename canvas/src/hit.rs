//! Eraser hit-testing against committed strokes.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::Stroke;
use crate::geom::Point;

/// Whether any segment of `stroke` lies strictly closer than `threshold` to `pt`.
///
/// Strokes with fewer than two points have no segments and are never hit.
#[must_use]
pub fn stroke_contains(stroke: &Stroke, pt: Point, threshold: f64) -> bool {
    stroke.segments().any(|seg| seg.distance_to(pt) < threshold)
}

/// Index of the earliest-drawn stroke touched by `pt`, if any.
///
/// First match wins: a later stroke that is closer to `pt` does not take
/// precedence over an earlier one inside the threshold.
#[must_use]
pub fn find_stroke_to_erase(strokes: &[Stroke], pt: Point, threshold: f64) -> Option<usize> {
    strokes
        .iter()
        .position(|stroke| stroke_contains(stroke, pt, threshold))
}
