//! Pointer model: samples and the two pointer state machines.
//!
//! The drawing surface tracks a single pointer path. `InputState` is
//! `Idle` until pointer-down, `Drawing` while pressed, and back to `Idle` on
//! release or when the pointer leaves the element. The hue ramp follows the
//! same lifecycle with `RampState`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::{Point, Viewport};

/// One pointer event mapped into canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position in the element's intrinsic pixel space.
    pub point: Point,
    /// Stylus pressure in `[0, 1]`; `None` when the device does not report it.
    pub pressure: Option<f64>,
}

impl PointerSample {
    #[must_use]
    pub fn new(point: Point, pressure: Option<f64>) -> Self {
        Self { point, pressure }
    }

    /// Pressure as reported by a browser pointer event.
    ///
    /// Mice report a constant 0.5 while pressed, so mouse pressure counts as
    /// unreported; so does a non-positive reading.
    #[must_use]
    pub fn device_pressure(pointer_type: &str, pressure: f64) -> Option<f64> {
        if pointer_type == "mouse" || !(pressure > 0.0) { None } else { Some(pressure.min(1.0)) }
    }

    /// Map a screen-space event through the element's viewport.
    #[must_use]
    pub fn from_screen(viewport: &Viewport, screen: Point, pressure: Option<f64>) -> Self {
        Self { point: viewport.screen_to_canvas(screen), pressure }
    }
}

/// Stroke state for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Canvas position of the previous sample; the next segment starts here.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// Drag state for the hue ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampState {
    #[default]
    Idle,
    Dragging,
}
