//! JavaScript entry points.
//!
//! The page creates one [`StudyCanvas`] for the drawing `<canvas>`, attaches
//! the picker's two elements, and forwards pointer events with their client
//! coordinates. Everything is delegated to [`Engine`]; this layer only
//! converts between JS-friendly values and the engine's types.

use std::str::FromStr;

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::color::Color;
use crate::engine::{Engine, picked_color};
use crate::render::CanvasTarget;
use crate::viewport::Point;

#[wasm_bindgen]
pub struct StudyCanvas {
    engine: Engine<CanvasTarget>,
}

#[wasm_bindgen]
impl StudyCanvas {
    /// Bind to the drawing element, sized to its intrinsic resolution.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let (width, height) = (canvas.width(), canvas.height());
        Self { engine: Engine::new(CanvasTarget::attach(canvas), width, height) }
    }

    /// Bind the saturation/value square and the hue ramp elements.
    pub fn attach_picker(&mut self, square: HtmlCanvasElement, ramp: HtmlCanvasElement) {
        self.engine
            .attach_picker(CanvasTarget::attach(square), CanvasTarget::attach(ramp));
    }

    /// Whether a 2D context was available for the drawing element.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    // --- Settings ---

    /// Set the pen color from `#RGB` / `#RRGGBB`. Returns `false` and keeps
    /// the current color when `hex` does not parse.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Color::from_str(hex) {
            Ok(color) => {
                self.engine.set_color(color);
                true
            }
            Err(e) => {
                warn!(error = %e, "ignoring pen color");
                false
            }
        }
    }

    /// Current pen color as `#rrggbb`.
    #[must_use]
    pub fn color(&self) -> String {
        self.engine.core.settings().color.to_hex()
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.engine.set_opacity(opacity);
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.engine.set_line_width(line_width);
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.engine.set_eraser(eraser);
    }

    // --- Drawing surface ---

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, pointer_type: &str, pressure: f64) {
        self.engine
            .on_pointer_down(Point::new(client_x, client_y), pointer_type, pressure);
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, pointer_type: &str, pressure: f64) {
        self.engine
            .on_pointer_move(Point::new(client_x, client_y), pointer_type, pressure);
    }

    pub fn pointer_up(&mut self) {
        self.engine.on_pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.engine.on_pointer_leave();
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Download the drawing as `my-drawing.png`.
    pub fn save(&self) {
        self.engine.save();
    }

    // --- Picker ---

    /// Set the hue in degrees. Returns the hue actually applied.
    pub fn set_hue(&mut self, hue: f64) -> f64 {
        self.engine.set_hue(hue);
        self.engine.core.picker.hue()
    }

    #[must_use]
    pub fn hue(&self) -> f64 {
        self.engine.core.picker.hue()
    }

    /// Pick the pen color under a click on the square. Returns the new
    /// `#rrggbb`, or `None` when nothing was picked.
    pub fn square_click(&mut self, client_x: f64, client_y: f64) -> Option<String> {
        let actions = self.engine.on_square_click(Point::new(client_x, client_y));
        picked_color(&actions).map(Color::to_hex)
    }

    /// Start a hue drag. Returns the current hue.
    pub fn ramp_down(&mut self, client_x: f64, client_y: f64) -> f64 {
        self.engine.on_ramp_down(Point::new(client_x, client_y));
        self.engine.core.picker.hue()
    }

    /// Continue a hue drag. Returns the current hue.
    pub fn ramp_move(&mut self, client_x: f64, client_y: f64) -> f64 {
        self.engine.on_ramp_move(Point::new(client_x, client_y));
        self.engine.core.picker.hue()
    }

    pub fn ramp_up(&mut self) {
        self.engine.on_ramp_up();
    }

    pub fn ramp_leave(&mut self) {
        self.engine.on_ramp_leave();
    }
}
