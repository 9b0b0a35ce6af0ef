//! Players and how they choose cells.

use crate::{Board, Marker, SelectionError, heuristic};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a player resolves its cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter)]
pub enum PlayerKind {
    /// Cell is requested through a [`CellPrompt`].
    #[serde(rename = "human")]
    #[strum(to_string = "Player")]
    Human,
    /// Cell is chosen by the move heuristic.
    #[serde(rename = "bot")]
    #[strum(to_string = "Bot")]
    Automated,
}

/// External source of human cell choices.
///
/// Implementations own all input validation; the returned number is still
/// checked when the cell is marked.
pub trait CellPrompt {
    /// Asks `player` for a cell on `board`.
    fn request_cell(&mut self, board: &Board, player: &Player) -> Result<usize, SelectionError>;
}

/// Prompt for games without human players.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unattended;

impl CellPrompt for Unattended {
    fn request_cell(&mut self, _board: &Board, player: &Player) -> Result<usize, SelectionError> {
        Err(SelectionError::Prompt {
            message: format!("no input available for {}", player.label()),
        })
    }
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    number: usize,
    marker: Marker,
    kind: PlayerKind,
    score: usize,
    last_score: usize,
}

impl Player {
    /// Creates a player with zero score. `number` is 1-based.
    pub fn new(number: usize, marker: Marker, kind: PlayerKind) -> Self {
        Self {
            number,
            marker,
            kind,
            score: 0,
            last_score: 0,
        }
    }

    /// 1-based turn-order number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Marker placed by this player.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Human or automated.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Current score.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Score before the most recent update.
    pub fn last_score(&self) -> usize {
        self.last_score
    }

    /// Points gained by the most recent update.
    pub fn score_gained(&self) -> usize {
        self.score - self.last_score
    }

    /// Display label such as `Bot-2 (O)`.
    pub fn label(&self) -> String {
        format!("{}-{} ({})", self.kind, self.number, self.marker)
    }

    pub(crate) fn set_score(&mut self, score: usize) {
        self.last_score = self.score;
        self.score = score;
    }

    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.last_score = 0;
    }

    /// Chooses a cell on `board`.
    ///
    /// Humans are asked through `prompt`; automated players run the move
    /// heuristic with `rng` as their only source of randomness.
    #[instrument(skip(self, board, prompt, rng), fields(player = self.number, kind = %self.kind))]
    pub fn select_cell<R: Rng>(
        &self,
        board: &Board,
        prompt: &mut dyn CellPrompt,
        rng: &mut R,
    ) -> Result<usize, SelectionError> {
        let cell = match self.kind {
            PlayerKind::Human => prompt.request_cell(board, self)?,
            PlayerKind::Automated => heuristic::select_cell(board.grid(), board.roster(), self, rng)?,
        };
        debug!(cell, "Cell selected");
        Ok(cell)
    }
}
