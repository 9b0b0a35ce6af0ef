//! Ordered set of players.

use crate::{Marker, Player, PlayerKind, RosterError};
use serde::Serialize;
use std::collections::HashSet;
use tracing::instrument;

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Players in turn order.
///
/// Player numbers are exactly `1..=len` in order and markers are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Numbers the given seats `1..=n` in order.
    #[instrument]
    pub fn new(seats: Vec<(Marker, PlayerKind)>) -> Result<Self, RosterError> {
        let players = seats
            .into_iter()
            .enumerate()
            .map(|(index, (marker, kind))| Player::new(index + 1, marker, kind))
            .collect();
        Self::from_players(players)
    }

    /// Validates an already numbered list of players.
    pub fn from_players(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.len() < MIN_PLAYERS {
            return Err(RosterError::TooFewPlayers {
                count: players.len(),
                min: MIN_PLAYERS,
            });
        }

        let mut markers = HashSet::new();
        for (index, player) in players.iter().enumerate() {
            if player.number() != index + 1 {
                return Err(RosterError::Numbering {
                    index,
                    number: player.number(),
                    expected: index + 1,
                });
            }
            if !markers.insert(player.marker()) {
                return Err(RosterError::DuplicateMarker {
                    marker: player.marker(),
                });
            }
        }

        Ok(Self { players })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a roster holds at least two players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player at a zero-based turn index.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Player with the given 1-based number.
    pub fn by_number(&self, number: usize) -> Option<&Player> {
        number.checked_sub(1).and_then(|index| self.players.get(index))
    }

    /// Iterates players in turn order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub(crate) fn reset_scores(&mut self) {
        self.players.iter_mut().for_each(Player::reset);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(symbol: char) -> (Marker, PlayerKind) {
        (Marker::new(symbol).unwrap(), PlayerKind::Automated)
    }

    #[test]
    fn test_numbers_assigned_in_order() {
        let roster = Roster::new(vec![seat('X'), seat('O'), seat('Z')]).unwrap();
        let numbers: Vec<_> = roster.iter().map(Player::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(roster.by_number(3).map(Player::marker), Marker::new('Z').ok());
        assert!(roster.by_number(0).is_none());
    }

    #[test]
    fn test_too_few_players() {
        assert_eq!(
            Roster::new(vec![seat('X')]),
            Err(RosterError::TooFewPlayers { count: 1, min: 2 })
        );
    }

    #[test]
    fn test_duplicate_marker() {
        assert!(matches!(
            Roster::new(vec![seat('X'), seat('X')]),
            Err(RosterError::DuplicateMarker { .. })
        ));
    }

    #[test]
    fn test_bad_numbering() {
        let players = vec![
            Player::new(1, Marker::new('X').unwrap(), PlayerKind::Human),
            Player::new(3, Marker::new('O').unwrap(), PlayerKind::Human),
        ];
        assert!(matches!(
            Roster::from_players(players),
            Err(RosterError::Numbering { index: 1, number: 3, expected: 2 })
        ));
    }
}
