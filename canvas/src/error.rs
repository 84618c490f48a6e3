//! Errors raised by the browser-facing parts of the engine.
//!
//! Stroke and hit-testing operations are total and never fail; these errors
//! only cover surface setup and configuration.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Error returned by [`crate::engine::Engine::new`] and
/// [`crate::config::CanvasConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The canvas element did not yield a `2d` rendering context.
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
    /// A browser call failed; holds the debug rendering of the thrown value.
    #[error("canvas call failed: {0}")]
    Js(String),
    /// The configuration JSON could not be parsed.
    #[error("failed to parse canvas config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// A numeric configuration field is non-finite or not positive.
    #[error("invalid canvas config: {field} must be a positive finite number, got {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
