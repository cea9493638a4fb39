//! The sketching surface: one raster, one tracked pointer path.
//!
//! There is no stroke model behind the pixels. Every [`DrawingSurface::extend`]
//! rasterizes one segment immediately and irreversibly; [`DrawingSurface::clear`]
//! is the only way back to a blank page.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::CanvasError;
use crate::color::Color;
use crate::consts::{BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, EXPORT_FILENAME};
use crate::input::{InputState, PointerSample};
use crate::raster::Raster;
use crate::settings::StrokeSettings;
use crate::viewport::Viewport;

/// An encoded snapshot of the surface, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name.
    pub filename: String,
    /// PNG bytes.
    pub bytes: Vec<u8>,
}

impl Export {
    /// Write the image into `dir` under [`Export::filename`].
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Io`] if the file cannot be written.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, CanvasError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "drawing saved");
        Ok(path)
    }
}

#[derive(Debug, Clone)]
pub struct DrawingSurface {
    raster: Raster,
    background: Color,
    input: InputState,
    viewport: Viewport,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, BACKGROUND)
    }
}

impl DrawingSurface {
    /// A cleared surface. The background is forced opaque.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let background = background.opaque();
        Self {
            raster: Raster::new(width, height, background),
            background,
            input: InputState::Idle,
            viewport: Viewport::identity(width, height),
        }
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Record where and how large the element is currently displayed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Pointer-down: anchor a new stroke. Paints nothing.
    pub fn begin(&mut self, sample: PointerSample) {
        self.input = InputState::Drawing { last: sample.point };
    }

    /// Pointer-move: paint one segment from the anchor to `sample`.
    ///
    /// Ignored unless a stroke is in progress. Returns whether any pixel changed.
    pub fn extend(&mut self, sample: PointerSample, settings: &StrokeSettings) -> bool {
        let InputState::Drawing { last } = self.input else {
            return false;
        };
        let color = settings.segment_color(self.background);
        let width = settings.segment_width(sample.pressure);
        let painted = self.raster.stroke_segment(last, sample.point, width, color);
        self.input = InputState::Drawing { last: sample.point };
        painted
    }

    /// Pointer-up or pointer-leave: finish the stroke.
    pub fn end(&mut self) {
        self.input = InputState::Idle;
    }

    /// Repaint the whole buffer with the opaque background.
    pub fn clear(&mut self) {
        self.raster.fill(self.background);
        debug!(background = %self.background.to_hex(), "surface cleared");
    }

    /// Encode the current pixels as PNG under the default file name.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if PNG encoding fails.
    pub fn export(&self) -> Result<Export, CanvasError> {
        let bytes = self.raster.encode_png()?;
        debug!(bytes = bytes.len(), "surface exported");
        Ok(Export { filename: EXPORT_FILENAME.to_string(), bytes })
    }
}
