//! Stroke model: committed strokes plus the one stroke being drawn.
//!
//! `StrokeStore` owns all geometric state. The committed collection is
//! ordered by draw order; the in-progress stroke lives beside it and is not
//! visible to hit-testing or full redraws until it is committed.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::consts::MIN_STROKE_POINTS;
use crate::geom::{Point, Segment};
use crate::hit;

/// One continuous pen path, points in capture order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke at `first`.
    #[must_use]
    pub fn new(first: Point) -> Self {
        Self { points: vec![first] }
    }

    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append `pt` and return the segment it closes, if there is a previous point.
    pub fn push(&mut self, pt: Point) -> Option<Segment> {
        self.points.push(pt);
        self.last_segment()
    }

    /// The trailing segment formed by the last two points.
    #[must_use]
    pub fn last_segment(&self) -> Option<Segment> {
        match self.points.as_slice() {
            [.., a, b] => Some(Segment::new(*a, *b)),
            _ => None,
        }
    }

    /// Consecutive point pairs in capture order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Whether this stroke has enough points to be committed.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        self.points.len() >= MIN_STROKE_POINTS
    }
}

/// Committed strokes plus the optional in-progress stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    current: Option<Stroke>,
}

impl StrokeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new in-progress stroke containing exactly `pt`.
    ///
    /// A stroke still in progress is committed first, so it is never
    /// orphaned. Returns the index of that earlier stroke if it was committed.
    pub fn begin_stroke(&mut self, pt: Point) -> Option<usize> {
        let committed = self.commit_stroke();
        self.current = Some(Stroke::new(pt));
        committed
    }

    /// Append `pt` to the in-progress stroke and return the new trailing segment.
    ///
    /// Returns `None` without side effects when nothing is in progress.
    pub fn extend_stroke(&mut self, pt: Point) -> Option<Segment> {
        self.current.as_mut()?.push(pt)
    }

    /// Move the in-progress stroke into the collection.
    ///
    /// Returns the new stroke's index when it had at least two points; shorter
    /// strokes are discarded. The in-progress slot is empty afterwards either way.
    pub fn commit_stroke(&mut self) -> Option<usize> {
        let stroke = self.current.take()?;
        if !stroke.is_committable() {
            log::trace!("discarding stroke with {} point(s)", stroke.len());
            return None;
        }
        self.strokes.push(stroke);
        let index = self.strokes.len() - 1;
        log::debug!("committed stroke {index}");
        Some(index)
    }

    /// Remove the earliest committed stroke within `threshold` of `pt`.
    ///
    /// Returns the removed stroke's former index, or `None` if nothing was close enough.
    pub fn erase_stroke_at(&mut self, pt: Point, threshold: f64) -> Option<usize> {
        let index = hit::find_stroke_to_erase(&self.strokes, pt, threshold)?;
        self.strokes.remove(index);
        log::debug!("erased stroke {index}");
        Some(index)
    }

    /// Committed strokes in draw order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no strokes are committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
