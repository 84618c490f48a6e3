use sketchpad_client::app::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        // No logger yet; report straight to the console and keep going.
        web_sys::console::warn_1(&format!("logging unavailable: {err}").into());
    }

    leptos::mount::mount_to_body(App);
}
