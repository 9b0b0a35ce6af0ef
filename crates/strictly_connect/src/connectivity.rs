//! Run detection and scoring through a single cell.
//!
//! Every query walks outward from a cell along the four axes. The two
//! opposite directions of an axis are summed before any threshold is
//! applied, so a lone neighbour on each side still forms a three-cell line
//! through the center while zig-zag shapes never count.
//!
//! ```text
//! [ x1 ][ x ][ x2 ]   horizontal chain 2 -> contributes 3
//! ```

use crate::{CellPosition, Grid, Marker};
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Combined chain length an axis needs before it counts as a run.
pub const MIN_AXIS_CHAIN: usize = 2;

/// One of the four lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, strum::Display)]
pub enum Axis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right.
    DiagonalLeftToRight,
    /// Top-right to bottom-left.
    DiagonalRightToLeft,
}

/// Fixed step between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Row change per step.
    pub delta_row: isize,
    /// Column change per step.
    pub delta_column: isize,
}

impl Direction {
    const fn new(delta_row: isize, delta_column: isize) -> Self {
        Self {
            delta_row,
            delta_column,
        }
    }

    /// Direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        Self::new(-self.delta_row, -self.delta_column)
    }
}

impl Axis {
    /// The two opposite walking directions of this axis.
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::new(-1, 0), Direction::new(1, 0)],
            Axis::Horizontal => [Direction::new(0, -1), Direction::new(0, 1)],
            Axis::DiagonalLeftToRight => [Direction::new(-1, -1), Direction::new(1, 1)],
            Axis::DiagonalRightToLeft => [Direction::new(-1, 1), Direction::new(1, -1)],
        }
    }
}

/// Connectivity report for one (cell, marker) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectedCell {
    /// Queried row.
    pub row: usize,
    /// Queried column.
    pub column: usize,
    /// Matching cells above plus below.
    pub vertical: usize,
    /// Matching cells left plus right.
    pub horizontal: usize,
    /// Matching cells top-left plus bottom-right.
    pub diagonal_left_to_right: usize,
    /// Matching cells top-right plus bottom-left.
    pub diagonal_right_to_left: usize,
    /// Sum of `chain + 1` over every axis whose chain is at least two.
    pub total_connected: usize,
}

impl ConnectedCell {
    /// Chain length along one axis.
    pub fn chain(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
            Axis::DiagonalLeftToRight => self.diagonal_left_to_right,
            Axis::DiagonalRightToLeft => self.diagonal_right_to_left,
        }
    }

    /// Sum of the four raw chain lengths.
    pub fn chain_sum(&self) -> usize {
        Axis::iter().map(|axis| self.chain(axis)).sum()
    }

    /// True if any axis has at least one matching neighbour.
    pub fn has_chain(&self) -> bool {
        Axis::iter().any(|axis| self.chain(axis) >= 1)
    }

    /// Coordinates of the queried cell.
    pub fn position(&self) -> CellPosition {
        CellPosition {
            row: self.row,
            column: self.column,
        }
    }

    /// True if both reports describe the same cell.
    pub fn is_same_position(&self, other: &ConnectedCell) -> bool {
        self.row == other.row && self.column == other.column
    }
}

/// Score contributed by one axis with the given combined chain length.
pub fn axis_contribution(chain: usize) -> usize {
    if chain >= MIN_AXIS_CHAIN { chain + 1 } else { 0 }
}

/// Counts consecutive `target` cells from `(row, column)` along `direction`.
///
/// The origin cell is never inspected. Walking stops at the grid edge, at
/// the first non-matching cell, or once `max_chain` cells were counted.
pub fn count_chain_by_direction(
    grid: &Grid,
    row: usize,
    column: usize,
    direction: Direction,
    target: Marker,
    max_chain: usize,
) -> usize {
    let mut chain = 0;
    let mut current = (row, column);

    while chain < max_chain {
        let (Some(next_row), Some(next_column)) = (
            current.0.checked_add_signed(direction.delta_row),
            current.1.checked_add_signed(direction.delta_column),
        ) else {
            break;
        };

        if grid.get(next_row, next_column) != Some(target) {
            break;
        }

        chain += 1;
        current = (next_row, next_column);
    }

    chain
}

/// Combined chain length of an axis through `(row, column)`.
pub fn axis_chain(
    grid: &Grid,
    row: usize,
    column: usize,
    axis: Axis,
    target: Marker,
    max_chain: usize,
) -> usize {
    axis.directions()
        .into_iter()
        .map(|direction| count_chain_by_direction(grid, row, column, direction, target, max_chain))
        .sum()
}

/// Evaluates every axis through `(row, column)` for `target` without a cap.
///
/// The cell itself may be empty: the report then describes what placing
/// `target` there would connect.
#[instrument(skip(grid), level = "trace")]
pub fn find_connected_cell(grid: &Grid, row: usize, column: usize, target: Marker) -> ConnectedCell {
    find_connected_cell_capped(grid, row, column, target, usize::MAX)
}

/// Evaluates every axis through `(row, column)`, capping each direction at
/// `max_chain` steps.
#[instrument(skip(grid), level = "trace")]
pub fn find_connected_cell_capped(
    grid: &Grid,
    row: usize,
    column: usize,
    target: Marker,
    max_chain: usize,
) -> ConnectedCell {
    let chain = |axis| axis_chain(grid, row, column, axis, target, max_chain);

    let vertical = chain(Axis::Vertical);
    let horizontal = chain(Axis::Horizontal);
    let diagonal_left_to_right = chain(Axis::DiagonalLeftToRight);
    let diagonal_right_to_left = chain(Axis::DiagonalRightToLeft);

    let total_connected = [
        vertical,
        horizontal,
        diagonal_left_to_right,
        diagonal_right_to_left,
    ]
    .into_iter()
    .map(axis_contribution)
    .sum();

    ConnectedCell {
        row,
        column,
        vertical,
        horizontal,
        diagonal_left_to_right,
        diagonal_right_to_left,
        total_connected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Marker {
        Marker::new('X').unwrap()
    }

    #[test]
    fn test_single_neighbour_does_not_count() {
        let grid = Grid::from_rows(["X..", "...", "..."]).unwrap();
        let cell = find_connected_cell(&grid, 0, 1, x());
        assert_eq!(cell.horizontal, 1);
        assert_eq!(cell.total_connected, 0);
        assert!(cell.has_chain());
    }

    #[test]
    fn test_center_between_two_neighbours() {
        let grid = Grid::from_rows(["X.X", "...", "..."]).unwrap();
        let cell = find_connected_cell(&grid, 0, 1, x());
        assert_eq!(cell.horizontal, 2);
        assert_eq!(cell.total_connected, 3);
    }

    #[test]
    fn test_junction_counts_each_axis() {
        let grid = Grid::from_rows(["X.X..", ".....", "X.X..", ".....", "....."]).unwrap();
        // (1,1) sits on both diagonals between two X each.
        let cell = find_connected_cell(&grid, 1, 1, x());
        assert_eq!(cell.diagonal_left_to_right, 2);
        assert_eq!(cell.diagonal_right_to_left, 2);
        assert_eq!(cell.total_connected, 6);
        assert_eq!(cell.chain_sum(), 4);
    }

    #[test]
    fn test_other_markers_stop_the_walk() {
        let grid = Grid::from_rows(["XOX", "...", "..."]).unwrap();
        let cell = find_connected_cell(&grid, 0, 0, x());
        assert_eq!(cell.horizontal, 0);
    }

    #[test]
    fn test_cap_limits_each_direction() {
        let grid = Grid::from_rows([
            "XXXXX", ".....", ".....", ".....", ".....",
        ])
        .unwrap();
        let uncapped = find_connected_cell(&grid, 0, 0, x());
        assert_eq!(uncapped.horizontal, 4);
        assert_eq!(uncapped.total_connected, 5);

        let capped = find_connected_cell_capped(&grid, 0, 0, x(), 3);
        assert_eq!(capped.horizontal, 3);
        assert_eq!(capped.total_connected, 4);

        assert_eq!(find_connected_cell_capped(&grid, 0, 2, x(), 0).total_connected, 0);
    }

    #[test]
    fn test_direction_opposites() {
        for axis in Axis::iter() {
            let [first, second] = axis.directions();
            assert_eq!(first.opposite(), second);
        }
    }

    #[test]
    fn test_axis_contribution() {
        assert_eq!(axis_contribution(0), 0);
        assert_eq!(axis_contribution(1), 0);
        assert_eq!(axis_contribution(2), 3);
        assert_eq!(axis_contribution(5), 6);
    }
}
