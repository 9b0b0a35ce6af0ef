//! Command-line interface for strictly_connect.

use crate::config::{ConfigError, GameConfig, PlayerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_connect::GameMode;
use tracing::instrument;

/// Strictly Connect - connect-the-markers for any number of players
#[derive(Parser, Debug)]
#[command(name = "strictly_connect")]
#[command(about = "Turn-based grid game for humans and bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Run bot-only games and print the results
    Simulate {
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,
    },
}

/// Game setup flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game mode (classic or frenzy)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Grid size for frenzy games
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Player in turn order, e.g. `X` or `O:bot` (repeatable)
    #[arg(short, long = "player", value_name = "MARKER[:bot]")]
    pub players: Vec<PlayerConfig>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameArgs {
    /// Loads the config file, if any, and applies flag overrides on top.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        if let Some(grid_size) = self.grid_size {
            config.set_grid_size(grid_size);
        }
        if !self.players.is_empty() {
            config.set_players(self.players.clone());
        }
        if self.seed.is_some() {
            config.set_seed(self.seed);
        }

        Ok(config)
    }
}
