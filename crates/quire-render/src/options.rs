//! Render-time switches.

use quire_css::ColorValue;
use serde::Deserialize;

/// Options that change what [`crate::Painter`] draws without changing
/// geometry.
///
/// Every field is optional in JSON; missing fields take their defaults:
///
/// ```json
/// { "debug_borders": true, "border_color": "#ff0000" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw a frame over every box after its background is filled.
    /// Off by default; when off, no pixel differs from a plain render.
    pub debug_borders: bool,

    /// Width of the debug frame in pixels.
    pub border_width: u32,

    /// Color of the debug frame.
    pub border_color: ColorValue,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            debug_borders: false,
            border_width: 4,
            border_color: ColorValue::BLUE,
        }
    }
}

impl RenderOptions {
    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, unknown color
    /// strings or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
