//! Interactive REPL: gesture commands in, store mutations and redraws out.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lumigraph_core::{
    EditorConfig, FsFileStore, GraphStore, InteractionController, PointerButton, PointerEvent,
};

use crate::canvas::AsciiCanvas;
use crate::repl_commands::{handle_command, CommandResult};

/// Everything one interactive session owns: the controller (which owns the
/// graph), the ASCII surface, file access, and the current graph file.
pub struct Session {
    pub controller: InteractionController,
    pub canvas: AsciiCanvas,
    pub files: FsFileStore,
    pub graph_file: Option<PathBuf>,
}

impl Session {
    /// Builds a session from the merged configuration.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            controller: InteractionController::new(GraphStore::with_radius(config.radius)),
            canvas: AsciiCanvas::new(config.canvas_width, config.canvas_height),
            files: FsFileStore,
            graph_file: None,
        }
    }

    /// Redraws the current graph onto the canvas without mutating it.
    pub fn redraw(&mut self) {
        self.controller.refresh(&mut self.canvas);
    }

    /// Picks the explicit argument, falling back to the session's file.
    pub fn resolve_path(&self, arg: Option<&str>) -> Option<PathBuf> {
        arg.map(PathBuf::from).or_else(|| self.graph_file.clone())
    }

    /// One-line graph summary after a mutating command.
    pub fn print_status(&self) {
        let store = self.controller.store();
        let mode = if self.controller.edit_mode() {
            "edit"
        } else {
            "run"
        };
        println!(
            "{}",
            format!(
                "{} nodes, {} edges [{mode}]",
                store.node_count(),
                store.edge_count()
            )
            .dimmed()
        );
    }
}

/// Parses and applies one input line. Gesture commands dispatch events;
/// dot commands go to `repl_commands`.
pub fn process_line(session: &mut Session, line: &str) -> CommandResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return CommandResult::Continue;
    }
    if trimmed.starts_with('.') {
        return handle_command(session, trimmed);
    }
    handle_gesture(session, trimmed)
}

fn handle_gesture(session: &mut Session, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let verb = parts[0].to_lowercase();

    let event = match verb.as_str() {
        "press" | "right" | "release" | "drag" | "double" => {
            let Some((x, y)) = parse_coords(&parts) else {
                return CommandResult::Error(format!("Usage: {verb} <x> <y>"));
            };
            match verb.as_str() {
                "press" => PointerEvent::Press {
                    button: PointerButton::Primary,
                    x,
                    y,
                },
                "right" => PointerEvent::Press {
                    button: PointerButton::Secondary,
                    x,
                    y,
                },
                "release" => PointerEvent::Release {
                    button: PointerButton::Primary,
                    x,
                    y,
                },
                "drag" => PointerEvent::Move { x, y },
                _ => PointerEvent::DoublePress { x, y },
            }
        }
        "key" => {
            let Some(c) = parts.get(1).and_then(|s| s.chars().next()) else {
                return CommandResult::Error("Usage: key <char>".to_string());
            };
            PointerEvent::Key(c)
        }
        _ => {
            return CommandResult::Error(format!(
                "Unknown input: {verb} (try .help)"
            ));
        }
    };

    session.controller.dispatch(event, &mut session.canvas);
    session.print_status();
    CommandResult::Continue
}

fn parse_coords(parts: &[&str]) -> Option<(i64, i64)> {
    let x = parts.get(1)?.parse().ok()?;
    let y = parts.get(2)?.parse().ok()?;
    Some((x, y))
}

/// Runs the interactive loop until `.quit` or end of input.
pub fn run(session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("lumigraph> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match process_line(session, &line) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(msg) => {
                        eprintln!("{}", msg.red());
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&EditorConfig::default())
    }

    #[test]
    fn test_gesture_lines_drive_the_controller() {
        let mut session = session();
        process_line(&mut session, "press 100 100");
        process_line(&mut session, "press 140 100");
        assert_eq!(session.controller.store().node_count(), 2);

        process_line(&mut session, "press 100 100");
        process_line(&mut session, "drag 140 100");
        process_line(&mut session, "release 140 100");
        assert_eq!(session.controller.store().edge_count(), 1);
    }

    #[test]
    fn test_mode_key_switches_to_run_mode() {
        let mut session = session();
        process_line(&mut session, "press 100 100");
        process_line(&mut session, "key e");
        assert!(!session.controller.edit_mode());

        // Run-mode press toggles instead of placing.
        process_line(&mut session, "press 100 100");
        let store = session.controller.store();
        let id = store.find_node_at(100, 100).unwrap();
        assert_eq!(store.state(id), Some(true));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_unknown_input_reports_error() {
        let mut session = session();
        assert!(matches!(
            process_line(&mut session, "frobnicate 1 2"),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            process_line(&mut session, "press one two"),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            process_line(&mut session, ".bogus"),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_blank_line_is_a_noop() {
        let mut session = session();
        assert!(matches!(
            process_line(&mut session, "   "),
            CommandResult::Continue
        ));
    }

    #[test]
    fn test_save_and_load_round_trip_through_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let path_str = path.to_str().unwrap();

        let mut session = session();
        process_line(&mut session, "press 100 100");
        process_line(&mut session, "press 160 100");
        assert!(matches!(
            process_line(&mut session, &format!(".save {path_str}")),
            CommandResult::Continue
        ));

        let mut other = Session::new(&EditorConfig::default());
        assert!(matches!(
            process_line(&mut other, &format!(".load {path_str}")),
            CommandResult::Continue
        ));
        assert_eq!(other.controller.store().node_count(), 2);
        // The path sticks for a bare .save.
        assert_eq!(other.graph_file.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_error_is_reported_not_fatal() {
        let mut session = session();
        process_line(&mut session, "press 100 100");
        let result = process_line(&mut session, ".load /no/such/file.json");
        assert!(matches!(result, CommandResult::Error(_)));
        assert_eq!(session.controller.store().node_count(), 1);
    }
}
