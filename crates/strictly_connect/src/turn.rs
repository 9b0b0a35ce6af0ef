//! Turn rotation.

use rand::Rng;
use std::num::NonZeroUsize;
use tracing::{debug, instrument};

/// Tracks the index of the player whose turn it is.
///
/// Starts unset. The first [`advance`](Self::advance) picks a uniformly
/// random index; every later call moves to the next index, wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnScheduler {
    current: Option<usize>,
    roster_size: NonZeroUsize,
}

impl TurnScheduler {
    /// Creates an unset scheduler over `roster_size` players.
    pub fn new(roster_size: NonZeroUsize) -> Self {
        Self {
            current: None,
            roster_size,
        }
    }

    /// Index of the current player, if a turn has been assigned.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of players being rotated.
    pub fn roster_size(&self) -> usize {
        self.roster_size.get()
    }

    /// Moves to the next turn and returns its index.
    #[instrument(skip(self, rng), fields(from = ?self.current))]
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> usize {
        let size = self.roster_size.get();
        let next = match self.current {
            None => rng.gen_range(0..size),
            Some(index) => (index + 1) % size,
        };
        debug!(next, "Turn advanced");
        self.current = Some(next);
        next
    }

    /// Forgets the current turn.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
