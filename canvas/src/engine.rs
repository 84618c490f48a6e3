use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::CanvasConfig;
use crate::doc::{Stroke, StrokeStore};
use crate::error::EngineError;
use crate::geom::{Point, client_to_surface};
use crate::input::{Cursor, InputState, Tool};
use crate::render::{self, DrawCommand};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Paint on the surface. [`Engine`] consumes these itself.
    Paint(DrawCommand),
    /// The surface cursor should change.
    SetCursor(Cursor),
    /// A stroke was appended to the collection at `index`.
    StrokeCommitted { index: usize },
    /// The stroke at `index` was removed from the collection.
    StrokeErased { index: usize },
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub doc: StrokeStore,
    pub config: CanvasConfig,
    /// Top-left corner of the surface in client coordinates.
    pub surface_origin: Point,
    pub width: u32,
    pub height: u32,
    tool: Tool,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Tool ---

    /// Switch tools. A pen stroke in progress is committed first.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = self.finish_stroke();
        if self.tool != tool {
            log::debug!("tool {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
        actions.push(Action::SetCursor(tool.cursor()));
        actions
    }

    // --- Surface ---

    /// Record where the surface sits in client space.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.surface_origin = origin;
    }

    /// Resize the surface and repaint background plus committed strokes.
    pub fn resize(&mut self, width: u32, height: u32) -> Vec<Action> {
        self.width = width;
        self.height = height;
        let mut actions = vec![Action::Paint(DrawCommand::Resize { width, height })];
        actions.extend(self.render_full());
        actions
    }

    /// Clear and redraw every committed stroke.
    #[must_use]
    pub fn render_full(&self) -> Vec<Action> {
        render::render_full(self.doc.strokes(), self.width, self.height)
            .into_iter()
            .map(Action::Paint)
            .collect()
    }

    // --- Input events ---

    /// Pointer pressed at `client_pt`. Starts a stroke with the pen; the eraser ignores it.
    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        match self.tool {
            Tool::Pen => {
                let pt = self.to_surface(client_pt);
                let closed = self.doc.begin_stroke(pt);
                closed.map_or_else(Vec::new, |index| self.committed(index))
            }
            Tool::Eraser => Vec::new(),
        }
    }

    /// Pointer moved to `client_pt`.
    ///
    /// With the pen this extends the stroke in progress and paints only the new
    /// segment. With the eraser it removes the first stroke within reach and
    /// repaints everything.
    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        let pt = self.to_surface(client_pt);
        match self.tool {
            Tool::Pen => self
                .doc
                .extend_stroke(pt)
                .map(|segment| vec![Action::Paint(render::render_incremental_segment(segment))])
                .unwrap_or_default(),
            Tool::Eraser => match self.doc.erase_stroke_at(pt, self.config.eraser_threshold) {
                Some(index) => {
                    let mut actions = vec![Action::StrokeErased { index }];
                    actions.extend(self.render_full());
                    actions
                }
                None => Vec::new(),
            },
        }
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.finish_stroke()
    }

    /// Pointer left the surface; handled exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_stroke()
    }

    // --- Queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.tool.cursor()
    }

    /// Committed strokes in draw order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.doc.strokes()
    }

    #[must_use]
    pub fn session(&self) -> InputState {
        if self.doc.is_drawing() {
            InputState::Drawing
        } else {
            InputState::Idle
        }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.doc.is_drawing()
    }

    // --- Internals ---

    fn to_surface(&self, client_pt: Point) -> Point {
        client_to_surface(client_pt, self.surface_origin)
    }

    fn finish_stroke(&mut self) -> Vec<Action> {
        self.doc
            .commit_stroke()
            .map_or_else(Vec::new, |index| self.committed(index))
    }

    fn committed(&self, index: usize) -> Vec<Action> {
        let mut actions = vec![Action::StrokeCommitted { index }];
        actions.extend(self.render_full());
        actions
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContextUnavailable`] if the element has no `2d`
    /// context, or [`EngineError::Js`] if the browser rejects the request.
    pub fn new(canvas: HtmlCanvasElement, config: CanvasConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    // --- Delegated tool / surface ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let actions = self.core.set_tool(tool);
        self.apply(actions)
    }

    /// Size the backing store and repaint.
    pub fn resize(&mut self, width: u32, height: u32) -> Vec<Action> {
        let actions = self.core.resize(width, height);
        self.apply(actions)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        self.sync_origin();
        let actions = self.core.on_pointer_down(client_pt);
        self.apply(actions)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        self.sync_origin();
        let actions = self.core.on_pointer_move(client_pt);
        self.apply(actions)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_up();
        self.apply(actions)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_leave();
        self.apply(actions)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tool()
    }

    // --- Internals ---

    /// Re-read the canvas position so page scroll and layout shifts are honoured.
    fn sync_origin(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_surface_origin(Point::new(rect.left(), rect.top()));
    }

    /// Execute paint actions and hand everything else back to the host.
    fn apply(&self, actions: Vec<Action>) -> Vec<Action> {
        let mut rest = Vec::new();
        for action in actions {
            match action {
                Action::Paint(command) => render::execute(&self.canvas, &self.ctx, &command, &self.core.config),
                other => rest.push(other),
            }
        }
        rest
    }
}
