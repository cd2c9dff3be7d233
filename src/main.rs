mod app;
mod args;
mod board;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod menu;
mod scores;
mod speed;
mod ticker;
mod util;
mod warning;
use crate::app::App;
use crate::args::{Action, Arguments, USAGE};
use crate::config::Config;
use crate::game::Game;
use crate::logging::init_logging;
use crate::scores::ScoreTracker;
use crate::warning::Warning;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = match Action::from_args(std::env::args_os())? {
        Action::Run(args) => args,
        Action::Help => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Action::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
    };
    let (config, config_path) = load_config(&args)?;
    if let Some(path) = args.log_file.as_ref().or(config.files.log_file.as_ref()) {
        init_logging(path, config.files.log_level).context("failed to set up logging")?;
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(path) => log::info!("Using configuration from {}", path.display()),
        None => log::info!("Using default configuration"),
    }
    let (scores, load_error) = ScoreTracker::load(config.score_store());
    let game = Game::new(config.game.grid, scores, config.game.default_speed);
    let mut app = App::new(game);
    if let Some(e) = load_error {
        log::warn!("{e}");
        app.show_warning(Warning::from_error(&e));
    }
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    Ok(io_exit(r))
}

/// Load the configuration selected on the command line, returning it along
/// with the path it was read from, if any
fn load_config(args: &Arguments) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if args.no_config {
        return Ok((Config::default(), None));
    }
    let (path, allow_missing) = match args.config {
        Some(ref path) => (path.clone(), false),
        None => match Config::default_path() {
            Ok(path) => (path, true),
            Err(_) => return Ok((Config::default(), None)),
        },
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    Ok((config, path.exists().then_some(path)))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {e}");
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}
