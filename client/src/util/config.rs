//! Loads engine settings embedded in the host page.
//!
//! `index.html` may carry a `<script id="sketchpad-config"
//! type="application/json">` element. Missing or empty means defaults; a
//! blob that fails to parse or validate is logged and also falls back to
//! defaults so the surface still comes up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use sketchpad_canvas::config::CanvasConfig;

/// DOM id of the embedded JSON settings element.
pub const CONFIG_ELEMENT_ID: &str = "sketchpad-config";

/// Read and parse the page's embedded settings.
pub fn load_config() -> CanvasConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse_config(raw.as_deref())
}

/// Parse raw settings text, falling back to defaults on absence or error.
pub fn parse_config(raw: Option<&str>) -> CanvasConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return CanvasConfig::default();
    };
    match CanvasConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("loaded sketchpad config: {config:?}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            CanvasConfig::default()
        }
    }
}
