pub mod canvas_input;
pub mod config;
