//! Gesture scripts: plain-text pointer recordings replayed through [`InputState`].
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! surface 0 0          # surface origin in client coordinates
//! down 100 100 0       # press   X Y T(ms since script start) [left|right|middle]
//! move 180 160 40      # motion  X Y T
//! up 180 160 80        # release X Y T [button]
//! nosurface            # surface geometry unavailable; events are discarded
//! ```

use crate::input::{InputState, MouseButton, PointerEvent, PointerEventKind};
use crate::util::Rect;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors raised while parsing a gesture script.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}, found {found} argument(s)")]
    ArgumentCount {
        line: usize,
        command: String,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown button '{value}'")]
    InvalidButton { line: usize, value: String },

    #[error("line {line}: time {time_ms}ms is earlier than the previous event")]
    TimeWentBackwards { line: usize, time_ms: u64 },
}

/// A single parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Pointer event in client coordinates, `at` after the script start
    Pointer {
        kind: PointerEventKind,
        x: f64,
        y: f64,
        at: Duration,
    },
    /// New surface bounds, or `None` when the surface goes away
    Surface(Option<Rect>),
}

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    let mut last_ms = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut words = text.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let parsed = match command {
            "down" | "up" => {
                let (x, y, time_ms) = pointer_args(line, command, &args, "3 or 4")?;
                let button = match args.get(3) {
                    Some(value) => parse_button(line, value)?,
                    None => MouseButton::Left,
                };
                if args.len() > 4 {
                    return Err(arg_count(line, command, "3 or 4", args.len()));
                }
                let kind = if command == "down" {
                    PointerEventKind::Press(button)
                } else {
                    PointerEventKind::Release(button)
                };
                ScriptCommand::Pointer {
                    kind,
                    x,
                    y,
                    at: advance(line, &mut last_ms, time_ms)?,
                }
            }
            "move" => {
                if args.len() != 3 {
                    return Err(arg_count(line, command, "3", args.len()));
                }
                let (x, y, time_ms) = pointer_args(line, command, &args, "3")?;
                ScriptCommand::Pointer {
                    kind: PointerEventKind::Motion,
                    x,
                    y,
                    at: advance(line, &mut last_ms, time_ms)?,
                }
            }
            "surface" => match args.len() {
                2 | 4 => {
                    let x: f64 = parse_number(line, args[0])?;
                    let y: f64 = parse_number(line, args[1])?;
                    let (width, height) = if args.len() == 4 {
                        (parse_number(line, args[2])?, parse_number(line, args[3])?)
                    } else {
                        (0.0, 0.0)
                    };
                    ScriptCommand::Surface(Some(Rect::new(x, y, width, height)))
                }
                found => return Err(arg_count(line, command, "2 or 4", found)),
            },
            "nosurface" => {
                if !args.is_empty() {
                    return Err(arg_count(line, command, "0", args.len()));
                }
                ScriptCommand::Surface(None)
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                });
            }
        };
        commands.push(parsed);
    }

    Ok(commands)
}

/// Feeds parsed commands into `state`, timing events relative to `start`.
///
/// Returns how many pointer events were handled (discarded events are not
/// counted).
pub fn replay(state: &mut InputState, commands: &[ScriptCommand], start: Instant) -> usize {
    let mut handled = 0;
    for command in commands {
        match *command {
            ScriptCommand::Surface(bounds) => state.update_surface(bounds),
            ScriptCommand::Pointer { kind, x, y, at } => {
                if state.handle_pointer_event(PointerEvent::new(kind, x, y, start + at)) {
                    handled += 1;
                }
            }
        }
    }
    log::debug!("Replayed {} of {} command(s)", handled, commands.len());
    handled
}

fn pointer_args(
    line: usize,
    command: &str,
    args: &[&str],
    expected: &'static str,
) -> Result<(f64, f64, u64), ScriptError> {
    if args.len() < 3 {
        return Err(arg_count(line, command, expected, args.len()));
    }
    Ok((
        parse_number(line, args[0])?,
        parse_number(line, args[1])?,
        parse_number(line, args[2])?,
    ))
}

fn parse_number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_button(line: usize, value: &str) -> Result<MouseButton, ScriptError> {
    match value.to_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "right" => Ok(MouseButton::Right),
        "middle" => Ok(MouseButton::Middle),
        _ => Err(ScriptError::InvalidButton {
            line,
            value: value.to_string(),
        }),
    }
}

fn arg_count(line: usize, command: &str, expected: &'static str, found: usize) -> ScriptError {
    ScriptError::ArgumentCount {
        line,
        command: command.to_string(),
        expected,
        found,
    }
}

fn advance(line: usize, last_ms: &mut u64, time_ms: u64) -> Result<Duration, ScriptError> {
    if time_ms < *last_ms {
        return Err(ScriptError::TimeWentBackwards { line, time_ms });
    }
    *last_ms = time_ms;
    Ok(Duration::from_millis(time_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ColorPicker, InputSettings};

    fn state() -> InputState {
        let mut state = InputState::new(InputSettings::default(), ColorPicker::new(Vec::new(), Some(1)));
        state.update_surface(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
        state
    }

    #[test]
    fn parses_every_command_kind() {
        let commands = parse_script(
            "# draw one pill\n\
             surface 10 20 640 480\n\
             down 0 0 0\n\
             move 5.5 6 10   # trailing comment\n\
             \n\
             up 5.5 6 20 right\n\
             nosurface\n\
             surface 1 2\n",
        )
        .unwrap();

        assert_eq!(commands.len(), 6);
        assert_eq!(
            commands[0],
            ScriptCommand::Surface(Some(Rect::new(10.0, 20.0, 640.0, 480.0)))
        );
        assert_eq!(
            commands[2],
            ScriptCommand::Pointer {
                kind: PointerEventKind::Motion,
                x: 5.5,
                y: 6.0,
                at: Duration::from_millis(10),
            }
        );
        assert!(matches!(
            commands[3],
            ScriptCommand::Pointer {
                kind: PointerEventKind::Release(MouseButton::Right),
                ..
            }
        ));
        assert_eq!(commands[4], ScriptCommand::Surface(None));
        assert_eq!(
            commands[5],
            ScriptCommand::Surface(Some(Rect::new(1.0, 2.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_script("down 0 0 0\njump 1 2 3").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "jump".into()
            }
        );
        assert_eq!(err.to_string(), "line 2: unknown command 'jump'");

        assert!(matches!(
            parse_script("move 1 2").unwrap_err(),
            ScriptError::ArgumentCount { line: 1, found: 2, .. }
        ));
        assert!(matches!(
            parse_script("down x 2 0").unwrap_err(),
            ScriptError::InvalidNumber { line: 1, .. }
        ));
        assert!(matches!(
            parse_script("down 1 2 -3").unwrap_err(),
            ScriptError::InvalidNumber { line: 1, .. }
        ));
        assert!(matches!(
            parse_script("down 1 2 0 thumb").unwrap_err(),
            ScriptError::InvalidButton { line: 1, .. }
        ));
        assert!(matches!(
            parse_script("down 1 2 50\nup 1 2 10").unwrap_err(),
            ScriptError::TimeWentBackwards { line: 2, time_ms: 10 }
        ));
    }

    #[test]
    fn replay_draws_a_pill() {
        let mut state = state();
        let commands = parse_script("down 10 10 0\nmove 90 70 50\nup 90 70 400").unwrap();
        let handled = replay(&mut state, &commands, Instant::now());

        assert_eq!(handled, 3);
        assert_eq!(state.frame().len(), 1);
        let pill = &state.frame().shapes()[0];
        assert_eq!(pill.bounds, Rect::new(10.0, 10.0, 80.0, 60.0));
    }

    #[test]
    fn replay_skips_events_without_surface() {
        let mut state = state();
        let commands =
            parse_script("nosurface\ndown 10 10 0\nmove 90 70 50\nup 90 70 400").unwrap();
        let handled = replay(&mut state, &commands, Instant::now());

        assert_eq!(handled, 0);
        assert!(state.frame().is_empty());
    }
}
