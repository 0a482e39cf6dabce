//! TripDeck CLI: terminal views for the itinerary, todos, note and pins,
//! plus `serve` to run the HTTP gateway.
//!
//! Each invocation is one visit: the document is loaded once, one intent
//! is applied through the mutation engine, and the re-rendered view is
//! printed. Errors go to stderr as `(error) ...` with exit status 1.

mod commands;
mod format;
mod parse;
mod prompt;
mod state;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};
use tripdeck_api::{AppState, Config};

use commands::build_cli;
use format::{format_error, OutputMode};
use parse::{matches_to_action, CliAction};
use prompt::StdinConfirm;
use state::CliState;

fn main() {
    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let data_dir = matches.get_one::<String>("data-dir").map(PathBuf::from);

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    // One-shot commands only log warnings unless RUST_LOG says otherwise
    let default_filter = match action {
        CliAction::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_filter);

    match run(action, data_dir, output_mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e));
            process::exit(1);
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(action: CliAction, data_dir: Option<PathBuf>, mode: OutputMode) -> Result<String> {
    if let CliAction::Serve {
        port,
        bind,
        ephemeral,
    } = action
    {
        let mut config = Config::load();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        if let Some(port) = port {
            config.port = port;
        }
        if let Some(bind) = bind {
            config.bind = bind;
        }
        config.ephemeral |= ephemeral;
        serve(config)?;
        return Ok(String::new());
    }

    let config = Config {
        data_dir: data_dir.unwrap_or_else(|| Config::default().data_dir),
        ..Config::default()
    };
    let app = AppState::open(&config)
        .with_context(|| format!("Failed to open bucket {}", config.data_dir.display()))?;
    let mut cli = CliState::new(app.store, mode, Box::new(StdinConfirm::stdin()));

    match action {
        CliAction::Trip(action) => cli.trip(action),
        CliAction::Todo(action) => cli.todo(action),
        CliAction::Note(action) => cli.note(action),
        CliAction::Pins { search } => cli.pins(search),
        CliAction::Serve { .. } => Ok(String::new()),
    }
}

fn serve(config: Config) -> Result<()> {
    let state = AppState::open(&config)
        .with_context(|| format!("Failed to open bucket {}", config.data_dir.display()))?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime
        .block_on(tripdeck_api::start_server(config, state))
        .context("Server error")
}
