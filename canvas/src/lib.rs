//! Raster sketching surface and color picker for the art study page.
//!
//! The crate compiles to WebAssembly and runs next to the artwork viewer in
//! the browser. Only [`render`] and [`bindings`] touch browser APIs; the
//! engine draws through the [`render::RenderTarget`] trait, so everything
//! else, [`engine::Engine`] included, is tested natively over in-memory
//! pixel buffers. Pointer input goes in as screen coordinates; pixels come
//! out as an RGBA buffer or a PNG.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bindings`] | `#[wasm_bindgen]` exports for the page |
//! | [`engine`] | Host [`engine::Engine`] and browser-free [`engine::EngineCore`] |
//! | [`surface`] | Drawing surface: stroke lifecycle, clear, export |
//! | [`picker`] | Saturation/value square and hue ramp |
//! | [`raster`] | RGBA pixel buffer with segment and triangle rasterization |
//! | [`settings`] | Immutable per-segment stroke settings |
//! | [`color`] | 8-bit color type, hex parsing, hue conversion |
//! | [`viewport`] | Screen-to-canvas coordinate mapping |
//! | [`input`] | Pointer samples and the pointer state machines |
//! | [`render`] | `RenderTarget` seam and the `<canvas>` implementation |
//! | [`consts`] | Shared numeric constants (sizes, defaults, file name) |

pub mod bindings;
pub mod color;
pub mod consts;
pub mod engine;
pub mod input;
pub mod picker;
pub mod raster;
pub mod render;
pub mod settings;
pub mod surface;
pub mod viewport;

/// Errors produced by canvas operations that can fail.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The raster could not be encoded as an image.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The exported image could not be written to disk.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// A browser canvas call failed.
    #[error("browser call failed: {0}")]
    Browser(String),
}
