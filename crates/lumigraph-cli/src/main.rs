//! Lumigraph - an interactive point-graph editor with lights-out toggling.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use lumigraph_core::EditorConfig;

mod canvas;
mod repl;
mod repl_commands;

/// Lumigraph - edit a graph of canvas points from your terminal
#[derive(Parser, Debug)]
#[command(name = "lumigraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file to load at startup
    #[arg(env = "LUMIGRAPH_FILE")]
    file: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "LUMIGRAPH_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = EditorConfig::load(args.config.as_deref())?;

    let mut session = repl::Session::new(&config);
    if let Some(path) = args.file.or_else(|| config.default_file.clone()) {
        session
            .controller
            .load(&session.files, &path, &mut session.canvas)
            .with_context(|| format!("loading {}", path.display()))?;
        session.graph_file = Some(path);
    }

    println!("{}", "Lumigraph".bold());
    println!("Press to add a node, drag to connect it.");
    println!("Double-press a node to drag and move it.");
    println!("Right-press a node or an edge to remove it.");
    println!("'key e' toggles edit mode; .help lists everything.\n");

    repl::run(&mut session)
}
