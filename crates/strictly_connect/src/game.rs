//! Turn-by-turn driver.

use crate::{Board, CellPrompt, GameError, MarkError, Marker, Outcome, PlayerKind};
use derive_new::new;
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct TurnReport {
    /// Number of the player who moved.
    pub player_number: usize,
    /// Marker placed.
    pub marker: Marker,
    /// Human or automated.
    pub kind: PlayerKind,
    /// Marked cell number.
    pub cell: usize,
    /// Points gained by the move.
    pub gained: usize,
}

/// A board with a started turn order.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Starts play on `board`, picking a random first player if none is set.
    #[instrument(skip_all)]
    pub fn new<R: Rng>(mut board: Board, rng: &mut R) -> Self {
        if board.turn().is_none() {
            board.advance_turn(rng);
        }
        Self { board }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True once the mode's completion condition holds.
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Winner or draw by current scores.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Lets the current player choose and mark a cell, then passes the turn.
    ///
    /// # Errors
    ///
    /// A failed selection or mark leaves the board untouched and the turn
    /// with the same player, so the caller can ask again.
    #[instrument(skip_all, fields(turn = ?self.board.turn()))]
    pub fn play_turn<R: Rng>(
        &mut self,
        prompt: &mut dyn CellPrompt,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        if self.board.is_complete() {
            return Err(GameError::AlreadyComplete);
        }

        let player = self
            .board
            .current_player()
            .ok_or(MarkError::NoActiveTurn)?
            .clone();

        let cell = player.select_cell(&self.board, prompt, rng)?;
        let outcome = self.board.mark_cell(cell)?;
        self.board.advance_turn(rng);

        Ok(TurnReport::new(
            player.number(),
            player.marker(),
            player.kind(),
            cell,
            outcome.gained,
        ))
    }

    /// Plays turns until the game completes.
    ///
    /// # Errors
    ///
    /// Stops at the first failed turn.
    #[instrument(skip_all)]
    pub fn play_to_completion<R: Rng>(
        &mut self,
        prompt: &mut dyn CellPrompt,
        rng: &mut R,
    ) -> Result<Vec<TurnReport>, GameError> {
        let mut reports = Vec::new();
        while !self.board.is_complete() {
            reports.push(self.play_turn(prompt, rng)?);
        }
        info!(turns = reports.len(), outcome = ?self.board.outcome(), "Game complete");
        Ok(reports)
    }

    /// Clears the board for a rematch with a new random first player.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.board.restart(rng);
    }
}
