//! Line-oriented event scripts.
//!
//! Replay files and the live control stream share one format: one event per
//! line, either a JSON object tagged by `type` or a shorthand command.
//!
//! ```text
//! # comments and blank lines are skipped
//! start
//! {"type":"hand","landmarks":[{"x":0.5,"y":0.4}, ...]}
//! {"type":"hand","landmarks":null}
//! down 10 10
//! move 50 50
//! up
//! toggle
//! clear
//! save
//! quit
//! ```

use super::events::{ControlAction, InputEvent, MouseButton};
use crate::gesture::HandLandmarks;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: invalid JSON event: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: expected '{usage}'")]
    BadArguments { line: usize, usage: &'static str },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonEvent {
    Hand { landmarks: Option<HandLandmarks> },
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    Start,
    Toggle,
    Clear,
    Save,
    Quit,
}

impl From<JsonEvent> for InputEvent {
    fn from(event: JsonEvent) -> Self {
        match event {
            JsonEvent::Hand { landmarks } => InputEvent::Hand(landmarks),
            JsonEvent::MouseDown { x, y } => InputEvent::MousePress {
                button: MouseButton::Left,
                x,
                y,
            },
            JsonEvent::MouseMove { x, y } => InputEvent::MouseMotion { x, y },
            JsonEvent::MouseUp => InputEvent::MouseRelease {
                button: MouseButton::Left,
            },
            JsonEvent::Start => InputEvent::Control(ControlAction::Start),
            JsonEvent::Toggle => InputEvent::Control(ControlAction::ToggleDrawing),
            JsonEvent::Clear => InputEvent::Control(ControlAction::Clear),
            JsonEvent::Save => InputEvent::Control(ControlAction::Save),
            JsonEvent::Quit => InputEvent::Control(ControlAction::Quit),
        }
    }
}

/// Parses one script line. Returns `Ok(None)` for blank lines and comments.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_line(line: usize, text: &str) -> Result<Option<InputEvent>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    if text.starts_with('{') {
        let event: JsonEvent =
            serde_json::from_str(text).map_err(|source| ScriptError::Json { line, source })?;
        return Ok(Some(event.into()));
    }

    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let event = match command.to_ascii_lowercase().as_str() {
        "start" => InputEvent::Control(ControlAction::Start),
        "toggle" => InputEvent::Control(ControlAction::ToggleDrawing),
        "clear" => InputEvent::Control(ControlAction::Clear),
        "save" => InputEvent::Control(ControlAction::Save),
        "quit" | "exit" => InputEvent::Control(ControlAction::Quit),
        "nohand" => InputEvent::Hand(None),
        "up" => InputEvent::MouseRelease {
            button: MouseButton::Left,
        },
        "down" => {
            let (x, y) = parse_point(line, &args, "down X Y")?;
            InputEvent::MousePress {
                button: MouseButton::Left,
                x,
                y,
            }
        }
        "move" => {
            let (x, y) = parse_point(line, &args, "move X Y")?;
            InputEvent::MouseMotion { x, y }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    Ok(Some(event))
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(event) = parse_line(idx + 1, raw)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn parse_point(
    line: usize,
    args: &[&str],
    usage: &'static str,
) -> Result<(f64, f64), ScriptError> {
    let bad = || ScriptError::BadArguments { line, usage };
    match args {
        [x, y] => {
            let x = x.parse::<f64>().map_err(|_| bad())?;
            let y = y.parse::<f64>().map_err(|_| bad())?;
            Ok((x, y))
        }
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmarks_json(count: usize) -> String {
        let points: Vec<String> = (0..count)
            .map(|_| r#"{"x":0.5,"y":0.5}"#.to_string())
            .collect();
        format!(r#"{{"type":"hand","landmarks":[{}]}}"#, points.join(","))
    }

    #[test]
    fn shorthand_commands_parse() {
        let script = "# warm up\nstart\n\ndown 10 10\nmove 50.5 50\nup\n\
                      toggle\nclear\nnohand\nsave\nquit\n";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Control(ControlAction::Start),
                InputEvent::MousePress {
                    button: MouseButton::Left,
                    x: 10.0,
                    y: 10.0
                },
                InputEvent::MouseMotion { x: 50.5, y: 50.0 },
                InputEvent::MouseRelease {
                    button: MouseButton::Left
                },
                InputEvent::Control(ControlAction::ToggleDrawing),
                InputEvent::Control(ControlAction::Clear),
                InputEvent::Hand(None),
                InputEvent::Control(ControlAction::Save),
                InputEvent::Control(ControlAction::Quit),
            ]
        );
    }

    #[test]
    fn json_hand_event_parses() {
        let event = parse_line(1, &landmarks_json(21)).unwrap().unwrap();
        match event {
            InputEvent::Hand(Some(hand)) => assert_eq!(hand.get(8).x, 0.5),
            other => panic!("unexpected event {other:?}"),
        }

        let none = parse_line(2, r#"{"type":"hand","landmarks":null}"#).unwrap();
        assert_eq!(none, Some(InputEvent::Hand(None)));
    }

    #[test]
    fn json_mouse_events_parse() {
        let event = parse_line(1, r#"{"type":"mouse_move","x":3,"y":4}"#).unwrap();
        assert_eq!(event, Some(InputEvent::MouseMotion { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn wrong_landmark_count_reports_line() {
        let script = format!("start\n{}\n", landmarks_json(20));
        let err = parse_script(&script).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("line 2:"), "{message}");
        assert!(message.contains("expected 21 landmarks, got 20"), "{message}");
    }

    #[test]
    fn bad_shorthand_is_rejected() {
        assert!(matches!(
            parse_line(3, "move 1"),
            Err(ScriptError::BadArguments { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(4, "wave"),
            Err(ScriptError::UnknownCommand { line: 4, .. })
        ));
    }
}
