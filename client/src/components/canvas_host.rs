//! Bridge component between Leptos state and the imperative drawing engine.
//!
//! The engine paints directly on the `<canvas>`; this host forwards mouse
//! events to it, keeps the surface sized to the window, and reflects the
//! actions the engine hands back (cursor changes, collection changes) in
//! `UiState`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use sketchpad_canvas::engine::{Action, Engine};

use crate::state::ui::UiState;
use crate::util::canvas_input::{client_point, viewport_size};
use crate::util::config::load_config;

type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Run one engine operation, if the engine is mounted, and publish what it
/// returns.
fn dispatch(engine: &SharedEngine, ui: RwSignal<UiState>, op: impl FnOnce(&mut Engine) -> Vec<Action>) {
    let actions = match engine.borrow_mut().as_mut() {
        Some(engine) => op(engine),
        None => return,
    };
    publish(&actions, ui);
}

/// Reflect engine actions in UI state; only notifies subscribers on change.
fn publish(actions: &[Action], ui: RwSignal<UiState>) {
    ui.maybe_update(|state| state.apply_actions(actions));
}

/// Full-window drawing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Mount once the element exists.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = match Engine::new(canvas, load_config()) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("drawing surface unavailable: {err}");
                    return;
                }
            };
            let mut actions = Vec::new();
            if let Some((width, height)) = viewport_size() {
                actions.extend(instance.resize(width, height));
            }
            actions.extend(instance.set_tool(ui.with_untracked(|state| state.active_tool)));
            log::info!("drawing surface mounted ({:?})", instance.tool());
            *engine.borrow_mut() = Some(instance);
            publish(&actions, ui);
        });
    }

    // Forward toolbar selections.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let tool = ui.with(|state| state.active_tool);
            dispatch(&engine, ui, |engine| {
                if engine.tool() == tool { Vec::new() } else { engine.set_tool(tool) }
            });
        });
    }

    // Keep the surface matched to the window.
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(ev::resize, move |_| {
            let Some((width, height)) = viewport_size() else {
                return;
            };
            dispatch(&engine, ui, |engine| engine.resize(width, height));
        });
        on_cleanup(move || handle.remove());
    }

    let on_mouse_down = {
        let engine = Rc::clone(&engine);
        move |event: ev::MouseEvent| dispatch(&engine, ui, |engine| engine.on_pointer_down(client_point(&event)))
    };
    let on_mouse_move = {
        let engine = Rc::clone(&engine);
        move |event: ev::MouseEvent| dispatch(&engine, ui, |engine| engine.on_pointer_move(client_point(&event)))
    };
    let on_mouse_up = {
        let engine = Rc::clone(&engine);
        move |_: ev::MouseEvent| dispatch(&engine, ui, Engine::on_pointer_up)
    };
    let on_mouse_out = move |_: ev::MouseEvent| dispatch(&engine, ui, Engine::on_pointer_leave);

    view! {
        <canvas
            class="sketch-surface"
            node_ref=canvas_ref
            style:cursor=move || ui.with(|state| state.cursor.as_css())
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseout=on_mouse_out
        >
            "Your browser does not support the canvas element."
        </canvas>
    }
}
