//! Freehand drawing engine for the sketchpad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! stroke model and everything that turns pointer events into strokes:
//! capturing pen strokes, erasing strokes the pointer hovers near, and
//! repainting the surface when the committed strokes change. The host layer
//! (`client`) only wires DOM events into [`engine::Engine`] and reflects the
//! active tool in the UI.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Strokes and the stroke store |
//! | [`geom`] | Points, segments, point-to-segment distance |
//! | [`hit`] | Eraser hit-testing against committed strokes |
//! | [`input`] | Tools, cursors, pen session state |
//! | [`render`] | Draw commands and their Canvas2D execution |
//! | [`config`] | Deserializable engine settings |
//! | [`error`] | Surface and configuration errors |
//! | [`consts`] | Shared constants (default style, eraser reach) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
