//! Error types for grid, roster and turn operations.

use crate::Marker;
use derive_more::{Display, Error};

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Grid is smaller than the playable minimum.
    #[display("Grid size {size} is below the minimum of {min}")]
    TooSmall {
        /// Requested size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
    },
    /// Grid is larger than the supported maximum.
    #[display("Grid size {size} is above the maximum of {max}")]
    TooLarge {
        /// Requested size.
        size: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// A row of a textual grid does not match the grid width.
    #[display("Row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Expected number of cells.
        expected: usize,
        /// Actual number of cells.
        found: usize,
    },
    /// A textual grid holds a character that is neither `.` nor a marker.
    #[display("Invalid symbol {symbol:?} at row {row}, column {column}")]
    InvalidSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending character.
        symbol: char,
    },
}

/// Errors raised when placing a marker.
///
/// A failed mark never changes the grid or any score.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// Cell number lies outside the grid.
    #[display("Cell {cell} is outside a {size}x{size} grid")]
    OutOfBounds {
        /// Requested cell number.
        cell: usize,
        /// Grid size.
        size: usize,
    },
    /// Cell already holds a marker.
    #[display("Cell {cell} is already occupied")]
    Occupied {
        /// Requested cell number.
        cell: usize,
    },
    /// No player has been given the turn yet.
    #[display("No player turn has been set")]
    NoActiveTurn,
}

/// Errors raised while assembling players.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RosterError {
    /// Fewer than two players.
    #[display("At least {min} players are required, got {count}")]
    TooFewPlayers {
        /// Number of players supplied.
        count: usize,
        /// Minimum number of players.
        min: usize,
    },
    /// Marker input is not a single visible character.
    #[display("Invalid marker {input:?}: expected a single visible character")]
    InvalidMarker {
        /// Raw input.
        input: String,
    },
    /// Two players share a marker.
    #[display("Marker '{marker}' is already used")]
    DuplicateMarker {
        /// Repeated marker.
        marker: Marker,
    },
    /// Player numbers are not `1..=n` in roster order.
    #[display("Player at index {index} has number {number}, expected {expected}")]
    Numbering {
        /// Index in the roster.
        index: usize,
        /// Number carried by the player.
        number: usize,
        /// Number required at that index.
        expected: usize,
    },
}

/// Errors raised while choosing a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SelectionError {
    /// Grid is full.
    #[display("No available cells to select")]
    NoAvailableCells,
    /// External prompt could not supply a cell.
    #[display("Cell prompt failed: {message}")]
    Prompt {
        /// Description of the failure.
        message: String,
    },
}

/// Errors raised while playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The selected cell could not be marked.
    #[display("{_0}")]
    Mark(MarkError),
    /// No cell could be selected.
    #[display("{_0}")]
    Selection(SelectionError),
    /// The game has already reached its completion condition.
    #[display("Game is already complete")]
    AlreadyComplete,
}

impl From<MarkError> for GameError {
    fn from(err: MarkError) -> Self {
        Self::Mark(err)
    }
}

impl From<SelectionError> for GameError {
    fn from(err: SelectionError) -> Self {
        Self::Selection(err)
    }
}
