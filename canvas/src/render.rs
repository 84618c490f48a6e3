//! Rendering: draw commands and their execution on a 2D context.
//!
//! The engine never paints directly. It emits [`DrawCommand`]s, which keeps
//! the stroke logic testable without a browser. [`execute`] is the only place
//! that touches [`web_sys::CanvasRenderingContext2d`]; it never reads pixels
//! back.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::CanvasConfig;
use crate::consts::LINE_CAP;
use crate::doc::Stroke;
use crate::geom::{Point, Segment};

/// A single side effect on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Assign the surface's backing-store dimensions.
    Resize { width: u32, height: u32 },
    /// Fill a `width` x `height` area from the origin with the background color.
    Clear { width: u32, height: u32 },
    /// Draw one rounded-cap line in the stroke color and width.
    Segment { from: Point, to: Point },
}

/// Paint only the newest segment of an in-progress stroke.
#[must_use]
pub fn render_incremental_segment(segment: Segment) -> DrawCommand {
    DrawCommand::Segment { from: segment.from, to: segment.to }
}

/// Clear a `width` x `height` surface, then draw every segment of every
/// stroke in draw order.
#[must_use]
pub fn render_full(strokes: &[Stroke], width: u32, height: u32) -> Vec<DrawCommand> {
    let segments: usize = strokes.iter().map(|stroke| stroke.len().saturating_sub(1)).sum();
    let mut commands = Vec::with_capacity(1 + segments);
    commands.push(DrawCommand::Clear { width, height });
    for stroke in strokes {
        commands.extend(stroke.segments().map(render_incremental_segment));
    }
    commands
}

/// Apply one command to the canvas.
pub fn execute(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    command: &DrawCommand,
    config: &CanvasConfig,
) {
    match *command {
        DrawCommand::Resize { width, height } => {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        DrawCommand::Clear { width, height } => clear(ctx, width, height, config),
        DrawCommand::Segment { from, to } => draw_segment(ctx, from, to, config),
    }
}

fn clear(ctx: &CanvasRenderingContext2d, width: u32, height: u32, config: &CanvasConfig) {
    ctx.set_fill_style_str(&config.background_color);
    ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
}

fn draw_segment(ctx: &CanvasRenderingContext2d, from: Point, to: Point, config: &CanvasConfig) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_stroke_style_str(&config.stroke_color);
    ctx.set_line_width(config.line_width);
    ctx.set_line_cap(LINE_CAP);
    ctx.stroke();
}
