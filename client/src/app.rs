//! Root application component.

use leptos::prelude::*;

use crate::components::{canvas_host::CanvasHost, toolbar::Toolbar};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared UI state and lays out the toolbar over the surface.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <div class="app">
            <Toolbar/>
            <CanvasHost/>
        </div>
    }
}
