//! Game modes: grid sizing and completion.

use crate::grid::check_size;
use crate::{Grid, GridError, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Named game mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Grid one larger than the player count; first connection wins.
    Classic,
    /// Chosen grid size; play until full, highest score wins.
    Frenzy,
}

/// How the grid side length is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridSizePolicy {
    /// `player_count + 1`.
    DerivedFromPlayerCount,
    /// Fixed side length.
    Explicit(usize),
}

/// When a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompletionPolicy {
    /// As soon as any player scores, or the grid is full.
    FirstNonzeroScore,
    /// Only once the grid is full.
    GridFull,
}

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Number of the single player holding the highest score.
    Winner(usize),
    /// Highest score is zero or shared.
    Draw,
}

/// Grid sizing and completion rules of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameModeRule {
    mode: GameMode,
    grid_size_policy: GridSizePolicy,
    completion_policy: CompletionPolicy,
}

impl GameModeRule {
    /// Classic rules.
    pub fn classic() -> Self {
        Self {
            mode: GameMode::Classic,
            grid_size_policy: GridSizePolicy::DerivedFromPlayerCount,
            completion_policy: CompletionPolicy::FirstNonzeroScore,
        }
    }

    /// Frenzy rules on a `grid_size` grid.
    #[instrument]
    pub fn frenzy(grid_size: usize) -> Result<Self, GridError> {
        check_size(grid_size)?;
        Ok(Self {
            mode: GameMode::Frenzy,
            grid_size_policy: GridSizePolicy::Explicit(grid_size),
            completion_policy: CompletionPolicy::GridFull,
        })
    }

    /// Mode these rules implement.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Grid sizing policy.
    pub fn grid_size_policy(&self) -> GridSizePolicy {
        self.grid_size_policy
    }

    /// Completion policy.
    pub fn completion_policy(&self) -> CompletionPolicy {
        self.completion_policy
    }

    /// Grid side length for `player_count` players.
    pub fn grid_size(&self, player_count: usize) -> usize {
        match self.grid_size_policy {
            GridSizePolicy::DerivedFromPlayerCount => player_count + 1,
            GridSizePolicy::Explicit(size) => size,
        }
    }

    /// True once the game should stop.
    #[instrument(skip_all, fields(mode = %self.mode))]
    pub fn is_complete(&self, grid: &Grid, players: &[Player]) -> bool {
        if grid.is_full() {
            return true;
        }
        match self.completion_policy {
            CompletionPolicy::FirstNonzeroScore => players.iter().any(|p| p.score() > 0),
            CompletionPolicy::GridFull => false,
        }
    }

    /// Winner by strictly highest nonzero score; shared or zero maximum is a
    /// draw.
    pub fn outcome(&self, players: &[Player]) -> Outcome {
        let top = players.iter().map(Player::score).max().unwrap_or(0);
        if top == 0 {
            return Outcome::Draw;
        }

        let mut leaders = players.iter().filter(|p| p.score() == top);
        match (leaders.next(), leaders.next()) {
            (Some(leader), None) => Outcome::Winner(leader.number()),
            _ => Outcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, PlayerKind};

    fn players(scores: &[usize]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(index, score)| {
                let symbol = char::from(b'A' + index as u8);
                let mut player = Player::new(index + 1, Marker::new(symbol).unwrap(), PlayerKind::Automated);
                player.set_score(*score);
                player
            })
            .collect()
    }

    #[test]
    fn test_grid_size_policies() {
        assert_eq!(GameModeRule::classic().grid_size(2), 3);
        assert_eq!(GameModeRule::classic().grid_size(5), 6);
        assert_eq!(GameModeRule::frenzy(7).unwrap().grid_size(2), 7);
        assert!(GameModeRule::frenzy(2).is_err());
        assert!(matches!(
            GameModeRule::frenzy(1usize << 33),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_classic_completes_on_first_score() {
        let rule = GameModeRule::classic();
        let grid = Grid::new(3).unwrap();
        assert!(!rule.is_complete(&grid, &players(&[0, 0])));
        assert!(rule.is_complete(&grid, &players(&[0, 3])));
    }

    #[test]
    fn test_frenzy_completes_only_when_full() {
        let rule = GameModeRule::frenzy(3).unwrap();
        let grid = Grid::new(3).unwrap();
        assert!(!rule.is_complete(&grid, &players(&[6, 3])));

        let full = Grid::from_rows(["ABA", "BAB", "BAB"]).unwrap();
        assert!(rule.is_complete(&full, &players(&[0, 0])));
    }

    #[test]
    fn test_outcome() {
        let rule = GameModeRule::frenzy(3).unwrap();
        assert_eq!(rule.outcome(&players(&[0, 0])), Outcome::Draw);
        assert_eq!(rule.outcome(&players(&[3, 0, 0])), Outcome::Winner(1));
        assert_eq!(rule.outcome(&players(&[3, 5, 5])), Outcome::Draw);
        assert_eq!(rule.outcome(&players(&[5, 3, 3])), Outcome::Winner(1));
        assert_eq!(rule.outcome(&players(&[3, 3, 6])), Outcome::Winner(3));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("classic".parse::<GameMode>().unwrap(), GameMode::Classic);
        assert_eq!("Frenzy".parse::<GameMode>().unwrap(), GameMode::Frenzy);
        assert_eq!(GameMode::Frenzy.to_string(), "frenzy");
    }
}
