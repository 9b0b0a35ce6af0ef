//! Single-ply move selection for automated players.
//!
//! A bot ranks every empty cell for itself, finds the opponent whose best
//! cell is most dangerous, and then either extends its own run, blocks, or
//! takes a cell that does both. With nothing on the grid to build on it picks
//! a random empty cell.

use crate::{ConnectedCell, Grid, Marker, Player, Roster, SelectionError, find_connected_cell};
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Smallest own `total_connected` worth playing offensively.
pub const OFFENSIVE_THRESHOLD: usize = 3;

/// An opponent and its ranked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threat {
    /// Opponent's player number.
    pub player_number: usize,
    /// Opponent's cells, best first.
    pub ranked: Vec<ConnectedCell>,
}

impl Threat {
    /// `total_connected` of the opponent's best cell.
    pub fn top_connected(&self) -> usize {
        self.ranked.first().map_or(0, |cell| cell.total_connected)
    }
}

/// Evaluates every cell in `available` for `marker`, best first.
///
/// Cells are ordered by `total_connected`, then by the sum of raw chain
/// lengths, both descending. Remaining ties keep ascending cell order.
pub fn rank_available_cells(grid: &Grid, marker: Marker, available: &BTreeSet<usize>) -> Vec<ConnectedCell> {
    let mut cells: Vec<ConnectedCell> = available
        .iter()
        .map(|&cell| {
            find_connected_cell(
                grid,
                grid.row_by_cell_number(cell),
                grid.column_by_cell_number(cell),
                marker,
            )
        })
        .collect();

    cells.sort_by_key(|cell| Reverse((cell.total_connected, cell.chain_sum())));
    cells
}

/// Steps in turn order from player `acting` to player `candidate`.
pub fn turn_distance(acting: usize, candidate: usize, roster_size: usize) -> usize {
    (candidate + roster_size - acting % roster_size) % roster_size
}

/// Whichever of `first` and `second` plays sooner after `acting`.
///
/// ```text
/// { p1, p2, bot(p3), p4, p5 }  ->  p4 is nearer than p2
/// ```
pub fn nearer_turn(acting: usize, first: usize, second: usize, roster_size: usize) -> usize {
    if turn_distance(acting, second, roster_size) < turn_distance(acting, first, roster_size) {
        second
    } else {
        first
    }
}

/// Finds the opponent with the strongest best cell.
///
/// Opponents are scanned in turn order starting right after `acting`. A
/// later opponent only replaces the tracked one with a strictly higher top
/// `total_connected`, or an equal one and a strictly nearer turn.
#[instrument(skip(grid, roster, acting, available), fields(acting = acting.number()))]
pub fn most_threatening_opponent(
    grid: &Grid,
    roster: &Roster,
    acting: &Player,
    available: &BTreeSet<usize>,
) -> Option<Threat> {
    let size = roster.len();
    let mut tracked: Option<Threat> = None;

    for step in 1..size {
        let Some(opponent) = roster.get((acting.number() - 1 + step) % size) else {
            continue;
        };
        let candidate = Threat {
            player_number: opponent.number(),
            ranked: rank_available_cells(grid, opponent.marker(), available),
        };

        let replace = match &tracked {
            None => true,
            Some(current) => {
                candidate.top_connected() > current.top_connected()
                    || (candidate.top_connected() == current.top_connected()
                        && nearer_turn(acting.number(), current.player_number, candidate.player_number, size)
                            == candidate.player_number)
            }
        };

        if replace {
            debug!(
                opponent = candidate.player_number,
                top_connected = candidate.top_connected(),
                "Tracking opponent"
            );
            tracked = Some(candidate);
        }
    }

    tracked
}

/// Decides between extending and blocking.
///
/// `own` and `threat` must be ranked lists over the same empty cells.
/// Returns `None` when neither side has anything worth playing.
pub fn choose_offense_or_block(own: &[ConnectedCell], threat: &[ConnectedCell]) -> Option<ConnectedCell> {
    let own_best = own.first()?;
    let mut best = (own_best.total_connected >= OFFENSIVE_THRESHOLD).then_some(*own_best);

    for threat_cell in threat {
        if threat_cell.total_connected == 0 {
            break;
        }

        if threat_cell.total_connected > own_best.total_connected {
            best = Some(*threat_cell);
            break;
        }

        if threat_cell.total_connected != own_best.total_connected {
            continue;
        }

        // Equal strength: look through our equally ranked cells for one that
        // also blocks this threat. Without a match the threat cell stays
        // adopted and later threat cells get their own search.
        let mut dual_purpose = false;
        for own_cell in own
            .iter()
            .take_while(|own_cell| own_cell.total_connected == threat_cell.total_connected)
        {
            best = Some(*threat_cell);
            if own_cell.is_same_position(threat_cell) {
                dual_purpose = true;
                break;
            }
        }

        if dual_purpose {
            break;
        }
    }

    best
}

/// Picks a cell for `acting`.
///
/// Never returns an occupied or out-of-range cell.
///
/// # Errors
///
/// Returns [`SelectionError::NoAvailableCells`] when the grid is full.
#[instrument(skip(grid, roster, acting, rng), fields(acting = acting.number(), marker = %acting.marker()))]
pub fn select_cell<R: Rng>(
    grid: &Grid,
    roster: &Roster,
    acting: &Player,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    let available = grid.available_cells();
    if available.is_empty() {
        return Err(SelectionError::NoAvailableCells);
    }

    let ranked = rank_available_cells(grid, acting.marker(), &available);
    let threat = most_threatening_opponent(grid, roster, acting, &available);
    let threat_cells = threat.as_ref().map_or(&[][..], |t| t.ranked.as_slice());

    if let Some(best) = choose_offense_or_block(&ranked, threat_cells) {
        let cell = grid.cell_number_by_position(best.row, best.column);
        debug!(
            cell,
            total_connected = best.total_connected,
            opponent = ?threat.as_ref().map(|t| t.player_number),
            "Offense or block"
        );
        return Ok(cell);
    }

    if let Some(own_best) = ranked.first().filter(|cell| cell.has_chain()) {
        let cell = grid.cell_number_by_position(own_best.row, own_best.column);
        debug!(cell, chain_sum = own_best.chain_sum(), "Extending partial run");
        return Ok(cell);
    }

    let cells: Vec<usize> = available.into_iter().collect();
    let cell = cells[rng.gen_range(0..cells.len())];
    debug!(cell, "Nothing to chain, random cell");
    Ok(cell)
}
