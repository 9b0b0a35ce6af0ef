//! Strictly Connect - connect-the-markers game logic for any number of players.
//!
//! Players take turns placing their marker on a square grid. Every cell a
//! player marks is scored by the runs of three or more it completes along
//! the four axes through it.
//!
//! # Architecture
//!
//! - **Grid**: NxN marker matrix with row-major cell numbers
//! - **Connectivity**: run lengths and score through a single cell
//! - **Heuristic**: single-ply move selection for automated players
//! - **Board**: grid, roster, turn order and mode rules
//! - **Game**: turn-by-turn driver
//!
//! This crate performs no I/O. Human input arrives through [`CellPrompt`],
//! and every random choice draws from a caller-supplied [`rand::Rng`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use strictly_connect::{Board, Game, GameModeRule, Marker, PlayerKind, Roster, Unattended};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = Roster::new(vec![
//!     (Marker::new('X')?, PlayerKind::Automated),
//!     (Marker::new('O')?, PlayerKind::Automated),
//! ])?;
//! let board = Board::new(GameModeRule::frenzy(5)?, roster)?;
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let mut game = Game::new(board, &mut rng);
//! game.play_to_completion(&mut Unattended, &mut rng)?;
//! assert!(game.board().grid().is_full());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod connectivity;
mod error;
mod game;
mod grid;
pub mod heuristic;
mod marker;
mod mode;
mod player;
mod roster;
mod turn;

pub use board::{Board, MarkOutcome};
pub use connectivity::{
    Axis, ConnectedCell, Direction, MIN_AXIS_CHAIN, axis_chain, axis_contribution,
    count_chain_by_direction, find_connected_cell, find_connected_cell_capped,
};
pub use error::{GameError, GridError, MarkError, RosterError, SelectionError};
pub use game::{Game, TurnReport};
pub use grid::{CellPosition, Grid, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use marker::Marker;
pub use mode::{CompletionPolicy, GameMode, GameModeRule, GridSizePolicy, Outcome};
pub use player::{CellPrompt, Player, PlayerKind, Unattended};
pub use roster::{MIN_PLAYERS, Roster};
pub use turn::TurnScheduler;
