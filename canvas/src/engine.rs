use tracing::{debug, warn};

use crate::CanvasError;
use crate::color::Color;
use crate::consts::{BACKGROUND, EXPORT_FILENAME};
use crate::input::PointerSample;
use crate::picker::ColorPicker;
use crate::render::RenderTarget;
use crate::settings::StrokeSettings;
use crate::surface::{DrawingSurface, Export};
use crate::viewport::Point;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The drawing surface changed and should be redrawn.
    RenderNeeded,
    /// The picker square and ramp were regenerated.
    PickerRenderNeeded,
    /// A color was picked from the square; the pen now uses it.
    ColorPicked(Color),
    /// The picker hue changed.
    HueChanged(f64),
}

/// The color a batch of actions picked, if any.
#[must_use]
pub fn picked_color(actions: &[Action]) -> Option<Color> {
    actions.iter().find_map(|a| match a {
        Action::ColorPicked(color) => Some(*color),
        _ => None,
    })
}

/// Core engine state: all logic that does not depend on render targets.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub surface: DrawingSurface,
    pub picker: ColorPicker,
    settings: StrokeSettings,
}

impl EngineCore {
    /// An engine with a `width` x `height` white surface and default pen.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { surface: DrawingSurface::new(width, height, BACKGROUND), ..Self::default() }
    }

    // --- Settings ---

    /// The pen settings the next segment will be painted with.
    #[must_use]
    pub fn settings(&self) -> StrokeSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: StrokeSettings) {
        self.settings = settings;
    }

    pub fn set_color(&mut self, color: Color) {
        self.settings.color = color.opaque();
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.settings.opacity = opacity;
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.settings.line_width = line_width;
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.settings.eraser = eraser;
    }

    // --- Drawing surface ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, pressure: Option<f64>) -> Vec<Action> {
        let sample = PointerSample::from_screen(self.surface.viewport(), screen_pt, pressure);
        self.surface.begin(sample);
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, pressure: Option<f64>) -> Vec<Action> {
        let sample = PointerSample::from_screen(self.surface.viewport(), screen_pt, pressure);
        let settings = self.settings;
        if self.surface.extend(sample, &settings) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.surface.end();
        Vec::new()
    }

    /// Leaving the element ends the stroke exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.surface.clear();
        vec![Action::RenderNeeded]
    }

    /// Encode the surface for saving.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if PNG encoding fails.
    pub fn export(&self) -> Result<Export, CanvasError> {
        self.surface.export()
    }

    // --- Color picker ---

    pub fn set_hue(&mut self, hue: f64) -> Vec<Action> {
        self.picker.set_hue(hue);
        vec![Action::HueChanged(self.picker.hue()), Action::PickerRenderNeeded]
    }

    pub fn on_square_click(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.picker.pick_from_square(screen_pt, &self.settings) {
            Some(next) => {
                self.settings = next;
                vec![Action::ColorPicked(next.color)]
            }
            None => Vec::new(),
        }
    }

    pub fn on_ramp_down(&mut self, screen_pt: Point) -> Vec<Action> {
        let hue = self.picker.ramp_down(screen_pt);
        vec![Action::HueChanged(hue), Action::PickerRenderNeeded]
    }

    pub fn on_ramp_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.picker.ramp_move(screen_pt) {
            Some(hue) => vec![Action::HueChanged(hue), Action::PickerRenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn on_ramp_up(&mut self) -> Vec<Action> {
        self.picker.ramp_end();
        Vec::new()
    }

    pub fn on_ramp_leave(&mut self) -> Vec<Action> {
        self.on_ramp_up()
    }
}

/// The full canvas engine: `EngineCore` plus the targets it is shown on.
///
/// Each target is optional. Without the drawing target every surface
/// handler is a no-op; without a picker target the handlers for that
/// picker image are no-ops.
pub struct Engine<T> {
    target: Option<T>,
    square: Option<T>,
    ramp: Option<T>,
    pub core: EngineCore,
}

impl<T: RenderTarget> Engine<T> {
    /// Create an engine with a `width` x `height` surface and paint it.
    #[must_use]
    pub fn new(target: Option<T>, width: u32, height: u32) -> Self {
        if target.is_none() {
            warn!("2d context unavailable; drawing disabled");
        }
        let engine = Self { target, square: None, ramp: None, core: EngineCore::new(width, height) };
        engine.render();
        engine
    }

    /// Attach the picker's square and ramp targets and paint them.
    pub fn attach_picker(&mut self, square: Option<T>, ramp: Option<T>) {
        self.square = square;
        self.ramp = ramp;
        self.render_picker();
    }

    /// Whether the drawing surface has somewhere to render.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    // --- Settings ---

    pub fn set_color(&mut self, color: Color) {
        self.core.set_color(color);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.core.set_opacity(opacity);
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.core.set_line_width(line_width);
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.core.set_eraser(eraser);
    }

    // --- Drawing surface events ---

    pub fn on_pointer_down(&mut self, client_pt: Point, pointer_type: &str, pressure: f64) -> Vec<Action> {
        let Some(target) = &self.target else {
            return Vec::new();
        };
        self.core.surface.set_viewport(target.viewport());
        let actions = self
            .core
            .on_pointer_down(client_pt, PointerSample::device_pressure(pointer_type, pressure));
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_move(&mut self, client_pt: Point, pointer_type: &str, pressure: f64) -> Vec<Action> {
        let Some(target) = &self.target else {
            return Vec::new();
        };
        self.core.surface.set_viewport(target.viewport());
        let actions = self
            .core
            .on_pointer_move(client_pt, PointerSample::device_pressure(pointer_type, pressure));
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        if self.target.is_none() {
            return Vec::new();
        }
        let actions = self.core.clear();
        self.apply(&actions);
        actions
    }

    /// Offer the drawing as `my-drawing.png`.
    pub fn save(&self) {
        let Some(target) = &self.target else {
            return;
        };
        match target.download_png(EXPORT_FILENAME) {
            Ok(()) => debug!(filename = EXPORT_FILENAME, "drawing download offered"),
            Err(e) => warn!(error = %e, "drawing download failed"),
        }
    }

    // --- Picker events ---

    pub fn set_hue(&mut self, hue: f64) -> Vec<Action> {
        let actions = self.core.set_hue(hue);
        self.apply(&actions);
        actions
    }

    pub fn on_square_click(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(square) = &self.square else {
            return Vec::new();
        };
        self.core.picker.set_square_viewport(square.viewport());
        self.core.on_square_click(client_pt)
    }

    pub fn on_ramp_down(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(ramp) = &self.ramp else {
            return Vec::new();
        };
        self.core.picker.set_ramp_viewport(ramp.viewport());
        let actions = self.core.on_ramp_down(client_pt);
        self.apply(&actions);
        actions
    }

    pub fn on_ramp_move(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(ramp) = &self.ramp else {
            return Vec::new();
        };
        self.core.picker.set_ramp_viewport(ramp.viewport());
        let actions = self.core.on_ramp_move(client_pt);
        self.apply(&actions);
        actions
    }

    pub fn on_ramp_up(&mut self) -> Vec<Action> {
        self.core.on_ramp_up()
    }

    pub fn on_ramp_leave(&mut self) -> Vec<Action> {
        self.core.on_ramp_leave()
    }

    // --- Render ---

    /// Copy the drawing surface onto its target.
    pub fn render(&self) {
        let Some(target) = &self.target else {
            return;
        };
        if let Err(e) = target.blit(self.core.surface.raster()) {
            warn!(error = %e, "surface blit failed");
        }
    }

    /// Copy the picker square and ramp onto their targets.
    pub fn render_picker(&self) {
        if let Some(square) = &self.square {
            if let Err(e) = square.blit(self.core.picker.square()) {
                warn!(error = %e, "picker square blit failed");
            }
        }
        if let Some(ramp) = &self.ramp {
            if let Err(e) = ramp.blit(self.core.picker.ramp()) {
                warn!(error = %e, "hue ramp blit failed");
            }
        }
    }

    fn apply(&self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::RenderNeeded => self.render(),
                Action::PickerRenderNeeded => self.render_picker(),
                Action::HueChanged(hue) => debug!(hue, "hue changed"),
                Action::ColorPicked(_) => {}
            }
        }
    }
}
