//! Board: grid, players, turn order and mode rules in one place.

use crate::{
    GameModeRule, Grid, GridError, MarkError, Outcome, Player, Roster, TurnScheduler,
    find_connected_cell, find_connected_cell_capped,
};
use derive_new::new;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use tracing::{info, instrument, warn};

/// Per-direction cap used when looking for cells that are part of a run.
const HIGHLIGHT_CHAIN_CAP: usize = 3;

/// Result of a successful mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct MarkOutcome {
    /// Marked cell number.
    pub cell: usize,
    /// Marked row.
    pub row: usize,
    /// Marked column.
    pub column: usize,
    /// Points the marking player gained.
    pub gained: usize,
}

/// Owns the grid and everything needed to play on it.
#[derive(Debug, Clone)]
pub struct Board {
    rule: GameModeRule,
    roster: Roster,
    grid: Grid,
    turn: TurnScheduler,
}

impl Board {
    /// Creates an empty board sized by `rule` for `roster`. No turn is set.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn new(rule: GameModeRule, roster: Roster) -> Result<Self, GridError> {
        let grid = Grid::new(rule.grid_size(roster.len()))?;
        let size = NonZeroUsize::new(roster.len()).unwrap_or(NonZeroUsize::MIN);
        info!(grid_size = grid.size(), mode = %rule.mode(), "Board created");
        Ok(Self {
            rule,
            roster,
            grid,
            turn: TurnScheduler::new(size),
        })
    }

    /// Mode rules.
    pub fn rule(&self) -> &GameModeRule {
        &self.rule
    }

    /// Read-only grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Players in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// Zero-based index of the player to move.
    pub fn turn(&self) -> Option<usize> {
        self.turn.current()
    }

    /// Player to move.
    pub fn current_player(&self) -> Option<&Player> {
        self.turn.current().and_then(|index| self.roster.get(index))
    }

    /// Empty cell numbers, ascending.
    pub fn available_cells(&self) -> BTreeSet<usize> {
        self.grid.available_cells()
    }

    /// Occupied cells that belong to a run of their own marker.
    pub fn chained_cells(&self) -> BTreeSet<usize> {
        self.grid
            .occupied_cells()
            .filter(|&(cell, marker)| {
                let position = self.grid.position(cell);
                find_connected_cell_capped(
                    &self.grid,
                    position.row,
                    position.column,
                    marker,
                    HIGHLIGHT_CHAIN_CAP,
                )
                .total_connected
                    >= HIGHLIGHT_CHAIN_CAP
            })
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Passes the turn on; the first call picks a random starting player.
    #[instrument(skip(self, rng))]
    pub fn advance_turn<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.turn.advance(rng)
    }

    /// Marks `cell` for the current player and adds the points it connects.
    ///
    /// # Errors
    ///
    /// Fails without changing anything when no turn is set or the cell is
    /// occupied or outside the grid.
    #[instrument(skip(self), fields(turn = ?self.turn.current()))]
    pub fn mark_cell(&mut self, cell: usize) -> Result<MarkOutcome, MarkError> {
        let index = self.turn.current().ok_or(MarkError::NoActiveTurn)?;
        let player = self.roster.get_mut(index).ok_or(MarkError::NoActiveTurn)?;
        let marker = player.marker();

        let position = self.grid.mark(cell, marker).inspect_err(|e| {
            warn!(cell, error = %e, "Mark rejected");
        })?;

        let gained = find_connected_cell(&self.grid, position.row, position.column, marker).total_connected;
        player.set_score(player.score() + gained);

        info!(
            player = player.number(),
            %marker,
            cell,
            gained,
            score = player.score(),
            "Cell marked"
        );
        Ok(MarkOutcome::new(cell, position.row, position.column, gained))
    }

    /// True once the mode's completion condition holds.
    pub fn is_complete(&self) -> bool {
        self.rule.is_complete(&self.grid, self.roster.players())
    }

    /// Winner or draw by current scores.
    pub fn outcome(&self) -> Outcome {
        self.rule.outcome(self.roster.players())
    }

    /// Clears the grid and scores, then seeds a new starting player.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.grid.clear();
        self.roster.reset_scores();
        self.turn.reset();
        let first = self.turn.advance(rng);
        info!(first_player = first + 1, "Board restarted");
        first
    }
}
