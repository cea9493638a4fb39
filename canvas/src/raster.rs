//! RGBA pixel buffer and the two primitives the app paints with.
//!
//! Pixels are sampled at their centers (`x + 0.5`, `y + 0.5`). Segments get a
//! one-pixel linear falloff at the edge; triangles are hard-edged. All
//! compositing is straight-alpha source-over.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::CanvasError;
use crate::color::{Color, unit_to_u8};
use crate::viewport::Point;

#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// A `width` x `height` buffer filled with `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, fill.to_rgba8()) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Row-major RGBA bytes, four per pixel.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_rgba8();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color::from_rgba8(*p))
    }

    /// Overwrite one pixel; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, color.to_rgba8());
        }
    }

    /// Pixel containing a fractional canvas point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_at(&self, point: Point) -> Option<Color> {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return None;
        }
        let (x, y) = (point.x.floor(), point.y.floor());
        if x >= f64::from(self.width()) || y >= f64::from(self.height()) {
            return None;
        }
        self.pixel(x as u32, y as u32)
    }

    /// Paint a round-capped line of `width` from `from` to `to`.
    ///
    /// Only pixels whose centers lie within `width / 2 + 0.5` of the segment
    /// are touched. Returns whether anything was painted.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: Color) -> bool {
        if !(width > 0.0 && width.is_finite()) || !all_finite(&[from, to]) || color.a == 0 {
            return false;
        }
        let radius = width / 2.0;
        let reach = radius + 0.5;
        let Some((x0, x1)) = pixel_span(from.x.min(to.x) - reach, from.x.max(to.x) + reach, self.width()) else {
            return false;
        };
        let Some((y0, y1)) = pixel_span(from.y.min(to.y) - reach, from.y.max(to.y) + reach, self.height()) else {
            return false;
        };

        let mut painted = false;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let coverage = (reach - center.distance_to_segment(from, to)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), color, coverage);
                    painted = true;
                }
            }
        }
        painted
    }

    /// Fill the triangle `a`, `b`, `c` (either winding).
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        if !all_finite(&[a, b, c]) {
            return;
        }
        let Some((x0, x1)) = pixel_span(a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x), self.width()) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y), self.height()) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let (e0, e1, e2) = (edge(a, b, p), edge(b, c, p), edge(c, a, p));
                let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
                if inside {
                    blend(self.image.get_pixel_mut(x, y), color, 1.0);
                }
            }
        }
    }

    /// Encode the buffer as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if the encoder rejects the buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

fn all_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// Integer pixel range `[lo, hi)` covering `lo..hi`, clipped to `0..limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let lo = lo.floor().max(0.0);
    let hi = hi.ceil().min(f64::from(limit));
    if lo < hi { Some((lo as u32, hi as u32)) } else { None }
}

/// Signed area of `a`, `b`, `p` (twice the triangle area).
fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Straight-alpha source-over of `src` scaled by `coverage` onto `dst`.
fn blend(dst: &mut Rgba<u8>, src: Color, coverage: f64) {
    let sa = f64::from(src.a) / 255.0 * coverage;
    if sa <= 0.0 {
        return;
    }
    let da = f64::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let s = f64::from(s) / 255.0;
        let d = f64::from(d) / 255.0;
        unit_to_u8((s * sa + d * da * (1.0 - sa)) / out_a)
    };
    *dst = Rgba([channel(src.r, dst[0]), channel(src.g, dst[1]), channel(src.b, dst[2]), unit_to_u8(out_a)]);
}
