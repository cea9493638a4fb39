//! Browser glue: the only module that touches `web_sys` canvas APIs.
//!
//! Rasters are copied onto a `CanvasRenderingContext2d` wholesale with
//! `putImageData`; the browser canvas is a view, never the source of truth.
//! [`RenderTarget`] is the seam [`crate::engine::Engine`] draws through, so
//! the engine runs natively against any other target.

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, ImageData};

use crate::CanvasError;
use crate::raster::Raster;
use crate::viewport::Viewport;

/// Something a raster can be shown on.
pub trait RenderTarget {
    /// Where the target sits on screen and how large it is displayed, read fresh.
    fn viewport(&self) -> Viewport;

    /// Copy a raster onto the target at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Browser`] if the pixels cannot be drawn.
    fn blit(&self, raster: &Raster) -> Result<(), CanvasError>;

    /// Offer the target's current pixels as a PNG download named `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Browser`] if the image cannot be produced or offered.
    fn download_png(&self, filename: &str) -> Result<(), CanvasError>;
}

/// A `<canvas>` element together with its 2D context.
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    /// Bind to an element. `None` when the environment has no 2D context.
    #[must_use]
    pub fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = context_2d(&canvas)?;
        Some(Self { canvas, ctx })
    }
}

impl RenderTarget for CanvasTarget {
    fn viewport(&self) -> Viewport {
        let rect = self.canvas.get_bounding_client_rect();
        Viewport {
            left: rect.x(),
            top: rect.y(),
            display_width: rect.width(),
            display_height: rect.height(),
            width: f64::from(self.canvas.width()),
            height: f64::from(self.canvas.height()),
        }
    }

    fn blit(&self, raster: &Raster) -> Result<(), CanvasError> {
        let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(raster.as_bytes()), raster.width(), raster.height())
            .map_err(js_error)?;
        self.ctx.put_image_data(&data, 0.0, 0.0).map_err(js_error)
    }

    fn download_png(&self, filename: &str) -> Result<(), CanvasError> {
        let url = self.canvas.to_data_url_with_type("image/png").map_err(js_error)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CanvasError::Browser("no document".into()))?;
        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|el| js_error(el.into()))?;
        link.set_href(&url);
        link.set_download(filename);
        link.click();
        Ok(())
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => None,
        },
        Ok(None) | Err(_) => None,
    }
}

fn js_error(e: JsValue) -> CanvasError {
    CanvasError::Browser(format!("{e:?}"))
}
