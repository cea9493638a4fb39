//! Pointer-event scripts: replay a recorded sketching session headlessly.
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event": "width", "value": 6}
//! {"event": "down", "x": 10, "y": 10}
//! {"event": "move", "x": 100, "y": 10, "pressure": 0.8}
//! {"event": "up"}
//! ```
//!
//! Coordinates are screen points; the replay surface is displayed at its
//! intrinsic size, so they equal canvas pixels. `pick` coordinates address
//! the picker square. Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use canvas::color::Color;
use canvas::engine::{Action, EngineCore};
use canvas::viewport::Point;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64, pressure: Option<f64> },
    Move { x: f64, y: f64, pressure: Option<f64> },
    Up,
    Leave,
    Color { value: Color },
    Opacity { value: f64 },
    Width { value: f64 },
    Eraser { active: bool },
    Hue { value: f64 },
    Pick { x: f64, y: f64 },
    Clear,
}

/// What a replay did, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub segments: usize,
    pub picks: usize,
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] with the 1-based line number of the first
/// malformed line, or [`ScriptError::Io`] if reading fails.
pub fn parse(reader: impl BufRead) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line: idx + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed events through the engine in order.
pub fn replay(core: &mut EngineCore, events: &[ScriptEvent]) -> ReplayStats {
    let mut stats = ReplayStats { events: events.len(), ..ReplayStats::default() };
    for event in events {
        let actions = match *event {
            ScriptEvent::Down { x, y, pressure } => core.on_pointer_down(Point::new(x, y), pressure),
            ScriptEvent::Move { x, y, pressure } => core.on_pointer_move(Point::new(x, y), pressure),
            ScriptEvent::Up => core.on_pointer_up(),
            ScriptEvent::Leave => core.on_pointer_leave(),
            ScriptEvent::Color { value } => {
                core.set_color(value);
                Vec::new()
            }
            ScriptEvent::Opacity { value } => {
                core.set_opacity(value);
                Vec::new()
            }
            ScriptEvent::Width { value } => {
                core.set_line_width(value);
                Vec::new()
            }
            ScriptEvent::Eraser { active } => {
                core.set_eraser(active);
                Vec::new()
            }
            ScriptEvent::Hue { value } => core.set_hue(value),
            ScriptEvent::Pick { x, y } => core.on_square_click(Point::new(x, y)),
            ScriptEvent::Clear => core.clear(),
        };
        for action in actions {
            match action {
                Action::RenderNeeded if matches!(event, ScriptEvent::Move { .. }) => stats.segments += 1,
                Action::ColorPicked(_) => stats.picks += 1,
                _ => {}
            }
        }
    }
    stats
}
