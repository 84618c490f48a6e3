//! Input model: drawing tools, cursors, and the pen session state.
//!
//! `Tool` is the user's current selection and decides how pointer events are
//! interpreted. `Cursor` is derived from the tool by an exhaustive match so
//! adding a tool forces a cursor decision at compile time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Pen,
    /// Proximity eraser; removes a whole stroke on hover.
    Eraser,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 2] = [Tool::Pen, Tool::Eraser];

    /// Human-readable name shown on the toolbar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
        }
    }

    /// Cursor shown over the surface while this tool is active.
    #[must_use]
    pub fn cursor(self) -> Cursor {
        match self {
            Self::Pen => Cursor::Crosshair,
            Self::Eraser => Cursor::Cell,
        }
    }
}

/// Pointer appearance over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Crosshair,
    Cell,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Crosshair => "crosshair",
            Self::Cell => "cell",
        }
    }
}

/// Pen session state between pointer-down and pointer-up.
///
/// The eraser has no session: each move is evaluated on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No stroke in progress.
    #[default]
    Idle,
    /// A pen stroke is being captured.
    Drawing,
}
