#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn distance_to_segment_interior_and_endpoints() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert!(approx_eq(Point::new(5.0, 3.0).distance_to_segment(a, b), 3.0));
    assert!(approx_eq(Point::new(-3.0, 4.0).distance_to_segment(a, b), 5.0));
    assert!(approx_eq(Point::new(13.0, 4.0).distance_to_segment(a, b), 5.0));
}

#[test]
fn distance_to_degenerate_segment_is_point_distance() {
    let a = Point::new(2.0, 2.0);
    assert!(approx_eq(Point::new(5.0, 6.0).distance_to_segment(a, a), 5.0));
}

// --- Viewport ---

#[test]
fn identity_is_passthrough() {
    let vp = Viewport::identity(600, 400);
    let p = vp.screen_to_canvas(Point::new(50.0, 75.0));
    assert!(point_approx_eq(p, Point::new(50.0, 75.0)));
}

#[test]
fn offset_is_subtracted() {
    let vp = Viewport { left: 100.0, top: 20.0, ..Viewport::identity(600, 400) };
    let p = vp.screen_to_canvas(Point::new(110.0, 25.0));
    assert!(point_approx_eq(p, Point::new(10.0, 5.0)));
}

#[test]
fn center_of_half_size_display_maps_to_true_center() {
    let vp = Viewport { left: 40.0, top: 60.0, display_width: 300.0, display_height: 200.0, width: 600.0, height: 400.0 };
    let center_screen = Point::new(40.0 + 150.0, 60.0 + 100.0);
    let p = vp.screen_to_canvas(center_screen);
    assert!(point_approx_eq(p, Point::new(300.0, 200.0)));
}

#[test]
fn axes_scale_independently() {
    let vp = Viewport { left: 0.0, top: 0.0, display_width: 300.0, display_height: 800.0, width: 600.0, height: 400.0 };
    assert_eq!(vp.scale(), (2.0, 0.5));
    let p = vp.screen_to_canvas(Point::new(10.0, 10.0));
    assert!(point_approx_eq(p, Point::new(20.0, 5.0)));
}

#[test]
fn zero_display_size_falls_back_to_unscaled() {
    let vp = Viewport { left: 5.0, top: 5.0, display_width: 0.0, display_height: f64::NAN, width: 600.0, height: 400.0 };
    assert_eq!(vp.scale(), (1.0, 1.0));
    assert!(point_approx_eq(vp.screen_to_canvas(Point::new(15.0, 25.0)), Point::new(10.0, 20.0)));
}

#[test]
fn canvas_to_screen_inverts_screen_to_canvas() {
    let vp = Viewport { left: 12.5, top: -3.0, display_width: 450.0, display_height: 300.0, width: 600.0, height: 400.0 };
    let screen = Point::new(123.0, 77.0);
    let back = vp.canvas_to_screen(vp.screen_to_canvas(screen));
    assert!((back.x - screen.x).abs() < 1e-9);
    assert!((back.y - screen.y).abs() < 1e-9);
}
