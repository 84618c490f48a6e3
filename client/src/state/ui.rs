//! Local UI chrome state: active tool and surface cursor.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use sketchpad_canvas::engine::Action;
use sketchpad_canvas::input::{Cursor, Tool};

/// UI state shared through context.
///
/// `active_tool` is written by the toolbar; `cursor` follows the engine's
/// `SetCursor` actions so it only changes once the engine has switched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub active_tool: Tool,
    pub cursor: Cursor,
}

impl Default for UiState {
    fn default() -> Self {
        let active_tool = Tool::default();
        Self { active_tool, cursor: active_tool.cursor() }
    }
}

impl UiState {
    /// Reflect one engine action. Returns `true` if anything changed.
    pub fn apply_action(&mut self, action: &Action) -> bool {
        match action {
            Action::SetCursor(cursor) if *cursor != self.cursor => {
                self.cursor = *cursor;
                true
            }
            _ => false,
        }
    }

    /// Reflect a batch of engine actions in order. Returns `true` if any of
    /// them changed the state.
    pub fn apply_actions(&mut self, actions: &[Action]) -> bool {
        actions.iter().fold(false, |changed, action| self.apply_action(action) | changed)
    }
}
