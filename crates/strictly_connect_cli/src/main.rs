//! Strictly Connect - terminal front end
//!
//! Play against people or bots, or pit bots against each other.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
mod render;
mod session;
mod setup;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use config::PlayerConfig;
use console::Console;
use std::io::{self, IsTerminal};
use strictly_connect::{Marker, PlayerKind};
use tracing::instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(game),
        Command::Simulate { game, games } => run_simulate(game, games),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Play in the terminal
#[instrument(skip_all)]
fn run_play(args: GameArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive_terminal = stdout.is_terminal();
    let mut console = Console::new(stdin.lock(), stdout.lock()).with_clearing(interactive_terminal);

    let config = args.resolve().context("Failed to load game config")?;
    session::run(&mut console, config, interactive_terminal)?;
    Ok(())
}

/// Run bot-only games and print the results
#[instrument(skip(args))]
fn run_simulate(args: GameArgs, games: usize) -> Result<()> {
    let mut config = args.resolve().context("Failed to load game config")?;

    let players = if config.players().is_empty() {
        vec![
            PlayerConfig::new(Marker::new('X')?, PlayerKind::Automated),
            PlayerConfig::new(Marker::new('O')?, PlayerKind::Automated),
        ]
    } else {
        config.players().iter().map(PlayerConfig::automated).collect()
    };
    config.set_players(players);

    let board = config.build_board().context("Invalid game setup")?;
    let mut rng = config.rng();

    let tally = session::simulate(board.clone(), games, &mut rng)?;
    print!("{}", session::tally_text(&board, &tally));
    Ok(())
}
