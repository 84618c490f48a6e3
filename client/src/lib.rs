//! # sketchpad-client
//!
//! Leptos + WASM host for the freehand drawing engine.
//!
//! This crate owns the page chrome: a toolbar for picking the pen or the
//! eraser and the `<canvas>` element the engine paints on. All stroke logic
//! lives in `sketchpad-canvas`; the `CanvasHost` component forwards DOM mouse
//! events to it and reflects the returned actions in UI state.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
