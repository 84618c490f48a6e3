//! Row of tool buttons for choosing between the pen and the eraser.

use leptos::prelude::*;
use sketchpad_canvas::input::Tool;

use crate::state::ui::UiState;

/// Tool selector.
///
/// Renders one button per tool, marks the active one with the `active`
/// class, and updates `UiState.active_tool` on click. `CanvasHost` picks the
/// change up and forwards it to the engine.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let buttons = Tool::ALL
        .into_iter()
        .map(|tool| {
            let is_active = move || ui.with(|u| u.active_tool == tool);
            let on_click = move |_| {
                ui.update(|u| u.active_tool = tool);
            };

            view! {
                <button class:active=is_active on:click=on_click>
                    {tool.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="toolbar">{buttons}</div> }
}
