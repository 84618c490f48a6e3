//! Helpers for turning DOM mouse events and window geometry into engine inputs.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use sketchpad_canvas::geom::Point;

/// Client-space position of a mouse event. The engine subtracts the canvas
/// origin itself.
pub fn client_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Current window inner size in whole CSS pixels, or `None` outside a browser.
pub fn viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(surface_dimensions(width, height))
}

/// Convert a floating viewport size into canvas backing dimensions.
///
/// Fractions are dropped and each side is at least one pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn surface_dimensions(width: f64, height: f64) -> (u32, u32) {
    let side = |v: f64| v.max(1.0).min(f64::from(u32::MAX)).floor() as u32;
    (side(width), side(height))
}
