#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either screen space (CSS pixels) or canvas space (intrinsic pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from this point to the segment `a`–`b`.
    #[must_use]
    pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq > 0.0 { (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0) } else { 0.0 };
        let (px, py) = (a.x + t * dx, a.y + t * dy);
        ((self.x - px).powi(2) + (self.y - py).powi(2)).sqrt()
    }
}

/// Where a raster element sits on screen and how large it is displayed.
///
/// `left` / `top` / `display_*` come from the element's bounding rect in CSS
/// pixels. `width` / `height` are the element's intrinsic pixel resolution.
/// The two sizes differ whenever CSS scales the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub display_width: f64,
    pub display_height: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// An element at the origin displayed at exactly its intrinsic size.
    #[must_use]
    pub fn identity(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        Self { left: 0.0, top: 0.0, display_width: w, display_height: h, width: w, height: h }
    }

    /// Intrinsic pixels per displayed pixel, per axis.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (axis_scale(self.width, self.display_width), axis_scale(self.height, self.display_height))
    }

    /// Convert a screen-space point to intrinsic canvas pixels.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        let (sx, sy) = self.scale();
        Point { x: (screen.x - self.left) * sx, y: (screen.y - self.top) * sy }
    }

    /// Convert an intrinsic canvas point back to screen space.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        let (sx, sy) = self.scale();
        Point { x: canvas.x / sx + self.left, y: canvas.y / sy + self.top }
    }
}

/// Collapsed or unlaid-out elements report a zero size; treat them as unscaled.
fn axis_scale(intrinsic: f64, displayed: f64) -> f64 {
    if displayed > 0.0 && displayed.is_finite() && intrinsic > 0.0 { intrinsic / displayed } else { 1.0 }
}
