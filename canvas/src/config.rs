//! Engine configuration: stroke style, background, and eraser reach.
//!
//! Hosts may supply a partial JSON object; any key left out takes its default
//! from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_COLOR, ERASER_THRESHOLD_PX, LINE_WIDTH_PX, STROKE_COLOR};
use crate::error::EngineError;

/// Rendering and hit-testing settings for one drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Stroke color as a CSS color string.
    pub stroke_color: String,
    /// Stroke width in surface pixels.
    pub line_width: f64,
    /// Eraser reach in surface pixels; a segment closer than this is hit.
    pub eraser_threshold: f64,
    /// Background fill as a CSS color string.
    pub background_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stroke_color: STROKE_COLOR.to_owned(),
            line_width: LINE_WIDTH_PX,
            eraser_threshold: ERASER_THRESHOLD_PX,
            background_color: BACKGROUND_COLOR.to_owned(),
        }
    }
}

impl CanvasConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParse`] for malformed JSON and
    /// [`EngineError::InvalidConfig`] when a numeric field is not a positive
    /// finite number.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that numeric fields are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [("line_width", self.line_width), ("eraser_threshold", self.eraser_threshold)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
