//! Shared numeric constants for the canvas crate.

use crate::color::Color;

// ── Drawing surface ─────────────────────────────────────────────

/// Intrinsic width of the drawing surface in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 600;

/// Intrinsic height of the drawing surface in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Largest surface side a host should allocate.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Paper color. Always opaque so exports carry no transparency.
pub const BACKGROUND: Color = Color::WHITE;

/// Base pen width before pressure scaling.
pub const DEFAULT_LINE_WIDTH: f64 = 3.0;

/// File name offered for every export.
pub const EXPORT_FILENAME: &str = "my-drawing.png";

// ── Color picker ────────────────────────────────────────────────

/// Side length of the saturation/value square.
pub const SQUARE_SIZE: u32 = 150;

/// Width of the hue ramp.
pub const RAMP_WIDTH: u32 = 20;

/// Height of the hue ramp; matches the square so the two line up.
pub const RAMP_HEIGHT: u32 = SQUARE_SIZE;

/// Half-height of the triangular hue marker on the ramp.
pub const HUE_MARKER_HALF: f64 = 5.0;

/// Full hue circle in degrees.
pub const HUE_RANGE: f64 = 360.0;
