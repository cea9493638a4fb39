//! Pen settings applied to each stroke segment.
//!
//! Settings are a plain `Copy` value. The host keeps the current value and
//! hands it to every [`crate::surface::DrawingSurface::extend`] call, so a
//! segment always paints with exactly the settings in force when it was made.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::DEFAULT_LINE_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    /// Pen color; alpha is ignored in favor of `opacity`.
    pub color: Color,
    /// Pen opacity in `[0, 1]`.
    pub opacity: f64,
    /// Base pen width in canvas pixels, before pressure scaling.
    pub line_width: f64,
    /// Paint with the background color instead of the pen color.
    pub eraser: bool,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self { color: Color::BLACK, opacity: 1.0, line_width: DEFAULT_LINE_WIDTH, eraser: false }
    }
}

impl StrokeSettings {
    /// Color a segment is painted with over the given paper color.
    ///
    /// The eraser paints opaque background regardless of opacity.
    #[must_use]
    pub fn segment_color(&self, background: Color) -> Color {
        if self.eraser { background.opaque() } else { self.color.with_opacity(self.opacity) }
    }

    /// Segment width for a sample's pressure. Unreported pressure counts as 1.
    #[must_use]
    pub fn segment_width(&self, pressure: Option<f64>) -> f64 {
        let p = match pressure {
            Some(p) if p.is_finite() => p.clamp(0.0, 1.0),
            Some(_) | None => 1.0,
        };
        self.line_width * p
    }
}
