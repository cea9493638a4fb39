//! Hue/saturation color picker built from two small rasters.
//!
//! The square is composed in three layers, bottom to top:
//!
//! 1. the pure hue color,
//! 2. a left-to-right gradient from white to transparent,
//! 3. a top-to-bottom gradient from transparent to black.
//!
//! White has to go down before black; the other order washes the dark
//! tones out to gray. The ramp is a vertical 0°–360° hue gradient with a
//! triangle marking the current hue.
//!
//! [`ColorPicker::set_hue`] is the only way to change the hue and it
//! repaints both rasters before returning, so a pixel read never sees a
//! stale square.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use tracing::debug;

use crate::color::Color;
use crate::consts::{HUE_MARKER_HALF, HUE_RANGE, RAMP_HEIGHT, RAMP_WIDTH, SQUARE_SIZE};
use crate::input::RampState;
use crate::raster::Raster;
use crate::settings::StrokeSettings;
use crate::viewport::{Point, Viewport};

#[derive(Debug, Clone)]
pub struct ColorPicker {
    hue: f64,
    square: Raster,
    ramp: Raster,
    square_view: Viewport,
    ramp_view: Viewport,
    ramp_state: RampState,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPicker {
    /// A picker at hue 0 (red) with both images already painted.
    #[must_use]
    pub fn new() -> Self {
        let mut picker = Self {
            hue: 0.0,
            square: Raster::new(SQUARE_SIZE, SQUARE_SIZE, Color::WHITE),
            ramp: Raster::new(RAMP_WIDTH, RAMP_HEIGHT, Color::WHITE),
            square_view: Viewport::identity(SQUARE_SIZE, SQUARE_SIZE),
            ramp_view: Viewport::identity(RAMP_WIDTH, RAMP_HEIGHT),
            ramp_state: RampState::Idle,
        };
        picker.set_hue(0.0);
        picker
    }

    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[must_use]
    pub fn square(&self) -> &Raster {
        &self.square
    }

    #[must_use]
    pub fn ramp(&self) -> &Raster {
        &self.ramp
    }

    #[must_use]
    pub fn ramp_state(&self) -> RampState {
        self.ramp_state
    }

    pub fn set_square_viewport(&mut self, viewport: Viewport) {
        self.square_view = viewport;
    }

    pub fn set_ramp_viewport(&mut self, viewport: Viewport) {
        self.ramp_view = viewport;
    }

    /// Set the hue and repaint the square and the ramp.
    ///
    /// Non-finite input becomes 0; everything else is clamped to `[0, 360)`,
    /// so the bottom of the ramp stays at the bottom.
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = normalize_hue(hue);
        self.paint_square();
        self.paint_ramp();
    }

    /// Read the square under a click and return settings drawing with it.
    ///
    /// Picking always turns the eraser off. Returns `None` when the click
    /// maps outside the square.
    #[must_use]
    pub fn pick_from_square(&self, screen: Point, settings: &StrokeSettings) -> Option<StrokeSettings> {
        let point = self.square_view.screen_to_canvas(screen);
        let picked = self.square.pixel_at(point)?.opaque();
        debug!(color = %picked.to_hex(), hue = self.hue, "color picked");
        Some(StrokeSettings { color: picked, eraser: false, ..*settings })
    }

    /// Pointer-down on the ramp: start dragging and jump to the pointer's hue.
    pub fn ramp_down(&mut self, screen: Point) -> f64 {
        self.ramp_state = RampState::Dragging;
        self.drag_to(screen)
    }

    /// Pointer-move on the ramp. Returns the new hue while dragging.
    pub fn ramp_move(&mut self, screen: Point) -> Option<f64> {
        match self.ramp_state {
            RampState::Dragging => Some(self.drag_to(screen)),
            RampState::Idle => None,
        }
    }

    /// Pointer-up or pointer-leave on the ramp.
    pub fn ramp_end(&mut self) {
        self.ramp_state = RampState::Idle;
    }

    /// Ramp row (in ramp pixels) corresponding to the current hue.
    #[must_use]
    pub fn hue_marker_y(&self) -> f64 {
        self.hue / HUE_RANGE * f64::from(self.ramp.height())
    }

    fn drag_to(&mut self, screen: Point) -> f64 {
        let height = f64::from(self.ramp.height());
        let y = self.ramp_view.screen_to_canvas(screen).y;
        let y = if y.is_finite() { y.clamp(0.0, height) } else { 0.0 };
        self.set_hue(y / height * HUE_RANGE);
        self.hue
    }

    fn paint_square(&mut self) {
        let base = Color::from_hue(self.hue);
        let (w, h) = (self.square.width(), self.square.height());
        for y in 0..h {
            let shade = (f64::from(y) + 0.5) / f64::from(h);
            for x in 0..w {
                let tint = (f64::from(x) + 0.5) / f64::from(w);
                let color = Color::WHITE.lerp(base, tint).lerp(Color::BLACK, shade);
                self.square.set_pixel(x, y, color);
            }
        }
    }

    fn paint_ramp(&mut self) {
        let (w, h) = (self.ramp.width(), self.ramp.height());
        for y in 0..h {
            let color = Color::from_hue((f64::from(y) + 0.5) / f64::from(h) * HUE_RANGE);
            for x in 0..w {
                self.ramp.set_pixel(x, y, color);
            }
        }
        let marker = self.hue_marker_y();
        self.ramp.fill_triangle(
            Point::new(0.0, marker - HUE_MARKER_HALF),
            Point::new(0.0, marker + HUE_MARKER_HALF),
            Point::new(HUE_MARKER_HALF, marker),
            Color::BLACK,
        );
    }
}

fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    hue.clamp(0.0, HUE_RANGE.next_down())
}
