use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn count_changed(before: &Raster, after: &Raster) -> usize {
    before.image().pixels().zip(after.image().pixels()).filter(|(a, b)| a != b).count()
}

#[test]
fn new_is_uniform_fill() {
    let r = Raster::new(4, 3, Color::WHITE);
    assert_eq!(r.width(), 4);
    assert_eq!(r.height(), 3);
    assert_eq!(r.as_bytes().len(), 4 * 3 * 4);
    assert!(r.image().pixels().all(|p| *p == Color::WHITE.to_rgba8()));
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let r = Raster::new(4, 4, Color::WHITE);
    assert_eq!(r.pixel(4, 0), None);
    assert_eq!(r.pixel_at(pt(-0.1, 1.0)), None);
    assert_eq!(r.pixel_at(pt(1.0, 4.0)), None);
    assert_eq!(r.pixel_at(pt(3.9, 3.9)), Some(Color::WHITE));
}

#[test]
fn horizontal_segment_is_opaque_on_the_line() {
    let mut r = Raster::new(120, 40, Color::WHITE);
    assert!(r.stroke_segment(pt(10.0, 10.0), pt(100.0, 10.0), 3.0, Color::BLACK));
    for x in 10..=100 {
        assert_eq!(r.pixel(x, 10), Some(Color::BLACK), "x = {x}");
    }
    for x in 0..120 {
        assert_eq!(r.pixel(x, 20), Some(Color::WHITE), "x = {x}");
    }
}

#[test]
fn segment_only_touches_pixels_near_the_path() {
    let mut r = Raster::new(80, 80, Color::WHITE);
    let before = r.clone();
    let (a, b, width) = (pt(5.0, 7.0), pt(60.0, 50.0), 6.0);
    r.stroke_segment(a, b, width, Color::rgb(200, 10, 10));

    let reach = width / 2.0 + 0.5;
    let mut changed = 0;
    for (x, y, px) in r.image().enumerate_pixels() {
        if px != before.image().get_pixel(x, y) {
            changed += 1;
            let c = pt(f64::from(x) + 0.5, f64::from(y) + 0.5);
            assert!(c.distance_to_segment(a, b) < reach, "pixel ({x}, {y}) changed off path");
        }
    }
    assert!(changed > 0);
}

#[test]
fn wider_segment_touches_more_pixels() {
    let base = Raster::new(100, 100, Color::WHITE);
    let mut thin = base.clone();
    let mut thick = base.clone();
    thin.stroke_segment(pt(10.0, 50.0), pt(90.0, 50.0), 2.0, Color::BLACK);
    thick.stroke_segment(pt(10.0, 50.0), pt(90.0, 50.0), 10.0, Color::BLACK);
    assert!(count_changed(&base, &thin) < count_changed(&base, &thick));
}

#[test]
fn zero_width_or_transparent_paints_nothing() {
    let mut r = Raster::new(20, 20, Color::WHITE);
    assert!(!r.stroke_segment(pt(1.0, 1.0), pt(15.0, 15.0), 0.0, Color::BLACK));
    assert!(!r.stroke_segment(pt(1.0, 1.0), pt(15.0, 15.0), 4.0, Color::BLACK.with_opacity(0.0)));
    assert!(!r.stroke_segment(pt(f64::NAN, 1.0), pt(15.0, 15.0), 4.0, Color::BLACK));
    assert!(r.image().pixels().all(|p| *p == Color::WHITE.to_rgba8()));
}

#[test]
fn segment_fully_outside_paints_nothing() {
    let mut r = Raster::new(20, 20, Color::WHITE);
    assert!(!r.stroke_segment(pt(-50.0, -50.0), pt(-30.0, -40.0), 3.0, Color::BLACK));
    assert!(!r.stroke_segment(pt(30.0, 5.0), pt(50.0, 5.0), 3.0, Color::BLACK));
}

#[test]
fn half_opacity_blends_toward_background() {
    let mut r = Raster::new(20, 20, Color::WHITE);
    r.stroke_segment(pt(2.0, 10.0), pt(18.0, 10.0), 4.0, Color::BLACK.with_opacity(0.5));
    let px = r.pixel(10, 10).unwrap();
    assert!(px.r > 100 && px.r < 155, "got {px:?}");
    assert_eq!(px.a, 255);
}

#[test]
fn fill_triangle_covers_interior_only() {
    let mut r = Raster::new(20, 20, Color::WHITE);
    r.fill_triangle(pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 5.0), Color::BLACK);
    assert_eq!(r.pixel(1, 5), Some(Color::BLACK));
    assert_eq!(r.pixel(15, 5), Some(Color::WHITE));
    assert_eq!(r.pixel(1, 15), Some(Color::WHITE));
}

#[test]
fn fill_resets_everything() {
    let mut r = Raster::new(10, 10, Color::WHITE);
    r.stroke_segment(pt(0.0, 0.0), pt(10.0, 10.0), 3.0, Color::BLACK);
    r.fill(Color::rgb(1, 2, 3));
    assert!(r.image().pixels().all(|p| *p == Color::rgb(1, 2, 3).to_rgba8()));
}

#[test]
fn encode_png_decodes_to_same_pixels() {
    let mut r = Raster::new(16, 8, Color::WHITE);
    r.stroke_segment(pt(1.0, 4.0), pt(14.0, 4.0), 2.0, Color::rgb(0, 128, 255));
    let bytes = r.encode_png().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.as_raw(), r.as_bytes());
}
