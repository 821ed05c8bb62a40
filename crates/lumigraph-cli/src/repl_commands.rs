//! REPL dot-command handlers.
//!
//! Each command is implemented as a separate function for maintainability;
//! gesture commands (press/drag/release/...) live in `repl.rs`.

use colored::Colorize;

use crate::repl::Session;

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(session: &mut Session, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".show" => cmd_show(session),
        ".save" => cmd_save(session, &parts),
        ".load" => cmd_load(session, &parts),
        ".reset" => cmd_reset(session),
        ".clear" => cmd_clear(session),
        ".mode" => cmd_mode(session),
        ".nodes" => cmd_nodes(session),
        ".edges" => cmd_edges(session),
        _ => CommandResult::Error(format!("Unknown command: {cmd}")),
    }
}

fn cmd_show(session: &mut Session) -> CommandResult {
    session.redraw();
    println!("{}\n", session.canvas.frame());
    CommandResult::Continue
}

fn cmd_save(session: &mut Session, parts: &[&str]) -> CommandResult {
    let Some(path) = session.resolve_path(parts.get(1).copied()) else {
        return CommandResult::Error("Usage: .save <file.json> (no previous file)".to_string());
    };
    match session.controller.save(&session.files, &path) {
        Ok(()) => {
            session.graph_file = Some(path.clone());
            println!("Saved to {}\n", path.display().to_string().green());
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_load(session: &mut Session, parts: &[&str]) -> CommandResult {
    let Some(path) = session.resolve_path(parts.get(1).copied()) else {
        return CommandResult::Error("Usage: .load <file.json> (no previous file)".to_string());
    };
    match session
        .controller
        .load(&session.files, &path, &mut session.canvas)
    {
        Ok(()) => {
            session.graph_file = Some(path.clone());
            println!("Loaded {}\n", path.display().to_string().green());
            session.print_status();
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_reset(session: &mut Session) -> CommandResult {
    session.controller.reset_states(&mut session.canvas);
    session.print_status();
    CommandResult::Continue
}

fn cmd_clear(session: &mut Session) -> CommandResult {
    session.controller.remove_all(&mut session.canvas);
    session.print_status();
    CommandResult::Continue
}

fn cmd_mode(session: &mut Session) -> CommandResult {
    session
        .controller
        .dispatch(lumigraph_core::PointerEvent::Key('e'), &mut session.canvas);
    let mode = if session.controller.edit_mode() {
        "edit"
    } else {
        "run"
    };
    println!("Mode: {}\n", mode.bold());
    CommandResult::Continue
}

fn cmd_nodes(session: &mut Session) -> CommandResult {
    let store = session.controller.store();
    if store.is_empty() {
        println!("No nodes.\n");
        return CommandResult::Continue;
    }
    println!("{}", "Nodes:".bold());
    for (id, p) in store.nodes() {
        let state = if store.state(id).unwrap_or(false) {
            "lit".yellow()
        } else {
            "unlit".normal()
        };
        println!("  {} {} {}", id.to_string().green(), p, state);
    }
    println!();
    CommandResult::Continue
}

fn cmd_edges(session: &mut Session) -> CommandResult {
    let store = session.controller.store();
    if store.edges().is_empty() {
        println!("No edges.\n");
        return CommandResult::Continue;
    }
    println!("{}", "Edges:".bold());
    for edge in store.edges() {
        let a = store.position(edge.a());
        let b = store.position(edge.b());
        if let (Some(a), Some(b)) = (a, b) {
            println!("  {} -- {}", a, b);
        }
    }
    println!();
    CommandResult::Continue
}

fn print_help() {
    println!("{}", "Gestures (edit mode):".bold());
    println!("  press <x> <y>     place a node, or start connecting from one");
    println!("  drag <x> <y>      move the pointer with the button held");
    println!("  release <x> <y>   finish a connect gesture");
    println!("  double <x> <y>    arm a node for moving (then drag)");
    println!("  right <x> <y>     remove the node or nearest edge");
    println!("  key e             toggle edit/run mode");
    println!();
    println!("{}", "In run mode, press toggles a node and its neighbors.".italic());
    println!();
    println!("{}", "Commands:".bold());
    println!("  .show             draw the canvas");
    println!("  .nodes, .edges    list the graph");
    println!("  .save [file]      write the graph as JSON");
    println!("  .load [file]      replace the graph from JSON");
    println!("  .reset            all lights off (or on, if already all off)");
    println!("  .clear            remove everything");
    println!("  .mode             toggle edit/run mode");
    println!("  .help, .quit");
    println!();
}
