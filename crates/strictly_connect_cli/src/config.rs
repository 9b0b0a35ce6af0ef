//! Game configuration loaded from TOML and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strictly_connect::{
    Board, GameMode, GameModeRule, GridError, MIN_GRID_SIZE, Marker, PlayerKind, Roster,
    RosterError,
};
use tracing::{debug, info, instrument};

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayerConfig {
    /// Marker placed by this player.
    marker: Marker,

    /// Human or bot.
    #[serde(default = "default_kind")]
    kind: PlayerKind,
}

#[instrument]
fn default_kind() -> PlayerKind {
    PlayerKind::Human
}

impl PlayerConfig {
    /// Same seat played by a bot.
    pub fn automated(&self) -> Self {
        Self::new(self.marker, PlayerKind::Automated)
    }
}

/// Parses `X`, `X:bot` or `X:human`.
impl FromStr for PlayerConfig {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (marker, kind) = match input.split_once(':') {
            Some((marker, kind)) => (marker, kind),
            None => (input, "human"),
        };

        let kind = match kind.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => PlayerKind::Human,
            "bot" | "b" => PlayerKind::Automated,
            other => {
                return Err(ConfigError::new(format!(
                    "Unknown player kind '{}', expected 'human' or 'bot'",
                    other
                )));
            }
        };

        Ok(Self::new(Marker::try_from(marker)?, kind))
    }
}

/// Everything needed to set up a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameConfig {
    /// Game mode.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Grid size for frenzy games; classic derives it from the player count.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Players in turn order.
    #[serde(default)]
    players: Vec<PlayerConfig>,

    /// Seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_mode() -> GameMode {
    GameMode::Classic
}

#[instrument]
fn default_grid_size() -> usize {
    MIN_GRID_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_mode(), default_grid_size(), Vec::new(), None)
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, players = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the mode.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Replaces the frenzy grid size.
    pub fn set_grid_size(&mut self, grid_size: usize) {
        self.grid_size = grid_size;
    }

    /// Replaces the players.
    pub fn set_players(&mut self, players: Vec<PlayerConfig>) {
        self.players = players;
    }

    /// Replaces the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Mode rules for this configuration.
    pub fn rule(&self) -> Result<GameModeRule, ConfigError> {
        match self.mode {
            GameMode::Classic => Ok(GameModeRule::classic()),
            GameMode::Frenzy => Ok(GameModeRule::frenzy(self.grid_size)?),
        }
    }

    /// Numbered players.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let seats = self
            .players
            .iter()
            .map(|player| (player.marker, player.kind))
            .collect();
        Ok(Roster::new(seats)?)
    }

    /// Validates everything and builds an empty board.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.rule()?, self.roster()?)?)
    }

    /// Random source seeded from `seed`, or from the OS when unset.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RosterError> for ConfigError {
    #[track_caller]
    fn from(err: RosterError) -> Self {
        Self::new(format!("Invalid players: {}", err))
    }
}

impl From<GridError> for ConfigError {
    #[track_caller]
    fn from(err: GridError) -> Self {
        Self::new(format!("Invalid grid: {}", err))
    }
}
