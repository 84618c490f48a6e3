//! Surface-space geometry: points, segments, and point-to-segment distance.
//!
//! All coordinates are in surface-local CSS pixels with the origin at the
//! drawing surface's top-left corner. Host coordinates (client/page space)
//! are mapped in with [`client_to_surface`] before they reach the store.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::Sub;

/// A point in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product, treating both points as vectors from the origin.
    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The straight line between two consecutive points of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Shortest distance from `pt` to any point on this segment.
    #[must_use]
    pub fn distance_to(&self, pt: Point) -> f64 {
        point_to_segment_distance(pt, self.from, self.to)
    }
}

/// Distance from `pt` to the closed segment `a`–`b`.
///
/// Projects `pt` onto the line through `a` and `b` and clamps the projection
/// ratio to `[0, 1]`. A zero-length segment uses the ratio `-1`, which selects
/// `a` as the closest point.
#[must_use]
pub fn point_to_segment_distance(pt: Point, a: Point, b: Point) -> f64 {
    let to_point = pt - a;
    let line = b - a;

    let dot = to_point.dot(line);
    let length_sq = line.dot(line);
    let t = if length_sq > 0.0 { dot / length_sq } else { -1.0 };

    let closest = if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        Point::new(a.x + t * line.x, a.y + t * line.y)
    };

    pt.distance(closest)
}

/// Scalar form of [`point_to_segment_distance`]: query `(x, y)` against the
/// segment `(x1, y1)`–`(x2, y2)`.
#[must_use]
pub fn calculate_point_to_line_distance(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    point_to_segment_distance(Point::new(x, y), Point::new(x1, y1), Point::new(x2, y2))
}

/// Convert a client-space point into surface-local space given the surface's
/// top-left corner in client space.
#[must_use]
pub fn client_to_surface(client: Point, surface_origin: Point) -> Point {
    client - surface_origin
}
