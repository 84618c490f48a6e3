//! Shared constants for the canvas crate.

// ── Stroke style ────────────────────────────────────────────────

/// Default stroke color as a CSS color string.
pub const STROKE_COLOR: &str = "black";

/// Default stroke width in surface pixels.
pub const LINE_WIDTH_PX: f64 = 2.0;

/// Canvas2D line cap used for every segment.
pub const LINE_CAP: &str = "round";

// ── Surface ─────────────────────────────────────────────────────

/// Default background fill as a CSS color string.
pub const BACKGROUND_COLOR: &str = "white";

// ── Hit-testing ─────────────────────────────────────────────────

/// Distance in surface pixels under which the eraser touches a segment.
pub const ERASER_THRESHOLD_PX: f64 = 8.0;

/// Minimum number of points a stroke needs to be committed.
pub const MIN_STROKE_POINTS: usize = 2;
