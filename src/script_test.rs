use canvas::settings::StrokeSettings;

use super::*;

fn events(src: &str) -> Vec<ScriptEvent> {
    parse(src.as_bytes()).unwrap()
}

#[test]
fn parses_every_event_kind() {
    let parsed = events(
        r##"
        # warm-up
        {"event": "down", "x": 1, "y": 2}
        {"event": "move", "x": 3, "y": 4, "pressure": 0.5}
        {"event": "up"}
        {"event": "leave"}
        {"event": "color", "value": "#ff0000"}
        {"event": "opacity", "value": 0.25}
        {"event": "width", "value": 8}
        {"event": "eraser", "active": true}
        {"event": "hue", "value": 200}
        {"event": "pick", "x": 10, "y": 20}
        {"event": "clear"}
        "##,
    );
    assert_eq!(parsed.len(), 11);
    assert_eq!(parsed[0], ScriptEvent::Down { x: 1.0, y: 2.0, pressure: None });
    assert_eq!(parsed[1], ScriptEvent::Move { x: 3.0, y: 4.0, pressure: Some(0.5) });
    assert_eq!(parsed[4], ScriptEvent::Color { value: Color::rgb(255, 0, 0) });
    assert_eq!(parsed[10], ScriptEvent::Clear);
}

#[test]
fn parse_error_reports_line_number() {
    let err = parse("{\"event\": \"up\"}\n\n{\"event\": \"fly\"}\n".as_bytes()).unwrap_err();
    let ScriptError::Parse { line, .. } = err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(line, 3);
}

#[test]
fn bad_color_is_a_parse_error() {
    assert!(parse(r#"{"event": "color", "value": "blue"}"#.as_bytes()).is_err());
}

#[test]
fn replay_draws_and_counts_segments() {
    let mut core = EngineCore::new(120, 40);
    let stats = replay(
        &mut core,
        &events(
            r#"
            {"event": "down", "x": 10, "y": 10}
            {"event": "move", "x": 50, "y": 10}
            {"event": "move", "x": 100, "y": 10}
            {"event": "up"}
            {"event": "move", "x": 100, "y": 30}
            "#,
        ),
    );
    assert_eq!(stats.events, 5);
    assert_eq!(stats.segments, 2);
    assert_eq!(core.surface.raster().pixel(75, 10), Some(Color::BLACK));
    assert_eq!(core.surface.raster().pixel(100, 30), Some(Color::WHITE));
}

#[test]
fn replay_applies_settings_and_picks() {
    let mut core = EngineCore::new(60, 60);
    let stats = replay(
        &mut core,
        &events(
            r#"
            {"event": "eraser", "active": true}
            {"event": "hue", "value": 120}
            {"event": "pick", "x": 149.5, "y": 0.5}
            {"event": "width", "value": 5}
            {"event": "opacity", "value": 0.5}
            "#,
        ),
    );
    assert_eq!(stats.picks, 1);
    let s: StrokeSettings = core.settings();
    assert!(!s.eraser);
    assert!(s.color.g > 240);
    assert!((s.line_width - 5.0).abs() < f64::EPSILON);
    assert!((s.opacity - 0.5).abs() < f64::EPSILON);
}

#[test]
fn replay_clear_resets_surface() {
    let mut core = EngineCore::new(40, 40);
    replay(
        &mut core,
        &events(
            r#"
            {"event": "down", "x": 0, "y": 0}
            {"event": "move", "x": 39, "y": 39}
            {"event": "leave"}
            {"event": "clear"}
            "#,
        ),
    );
    assert!(core.surface.raster().image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
