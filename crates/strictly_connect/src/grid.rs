//! Square mark matrix with row-major cell numbering.

use crate::{GridError, MarkError, Marker};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Smallest playable grid size.
pub const MIN_GRID_SIZE: usize = 3;

/// Largest grid size; keeps cell numbers at three digits on screen.
pub const MAX_GRID_SIZE: usize = 30;

/// Row/column coordinates of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

/// NxN grid of optional markers.
///
/// Cells are numbered row-major from zero: `number = row * size + column`.
/// A marked cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Marker>>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Sizes outside `MIN_GRID_SIZE..=MAX_GRID_SIZE` are rejected.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Builds a grid from text rows, `.` marking an empty cell.
    ///
    /// Any other symbol must be a valid [`Marker`].
    ///
    /// ```
    /// use strictly_connect::Grid;
    ///
    /// let grid = Grid::from_rows(["XX.", ".O.", "..."]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.available_cells().len(), 6);
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let mut grid = Self::new(rows.len())?;

        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != grid.size {
                return Err(GridError::NotSquare {
                    row,
                    expected: grid.size,
                    found: symbols.len(),
                });
            }
            for (column, symbol) in symbols.iter().enumerate() {
                if *symbol == '.' {
                    continue;
                }
                let marker = Marker::new(*symbol).map_err(|_| GridError::InvalidSymbol {
                    row,
                    column,
                    symbol: *symbol,
                })?;
                let number = grid.cell_number_by_position(row, column);
                grid.cells[number] = Some(marker);
            }
        }

        Ok(grid)
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row of a cell number.
    pub fn row_by_cell_number(&self, cell: usize) -> usize {
        cell / self.size
    }

    /// Column of a cell number.
    pub fn column_by_cell_number(&self, cell: usize) -> usize {
        cell % self.size
    }

    /// Cell number of a row/column pair.
    pub fn cell_number_by_position(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }

    /// Coordinates of a cell number.
    pub fn position(&self, cell: usize) -> CellPosition {
        CellPosition {
            row: self.row_by_cell_number(cell),
            column: self.column_by_cell_number(cell),
        }
    }

    /// Marker at the given coordinates; `None` when empty or outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<Marker> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells[self.cell_number_by_position(row, column)]
    }

    /// Marker at the given cell number.
    pub fn marker_at(&self, cell: usize) -> Option<Marker> {
        self.cells.get(cell).copied().flatten()
    }

    /// True if the cell exists and holds no marker.
    pub fn is_available(&self, cell: usize) -> bool {
        matches!(self.cells.get(cell), Some(None))
    }

    /// Numbers of every empty cell, ascending.
    pub fn available_cells(&self) -> BTreeSet<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, marker)| marker.is_none())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Numbers and markers of every occupied cell, ascending.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, Marker)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, marker)| marker.map(|m| (cell, m)))
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Places a marker into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::OutOfBounds`] or [`MarkError::Occupied`] and
    /// leaves the grid unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn mark(&mut self, cell: usize, marker: Marker) -> Result<CellPosition, MarkError> {
        match self.cells.get_mut(cell) {
            None => Err(MarkError::OutOfBounds {
                cell,
                size: self.size,
            }),
            Some(Some(_)) => Err(MarkError::Occupied { cell }),
            Some(slot) => {
                *slot = Some(marker);
                debug!(cell, %marker, "Cell marked");
                Ok(self.position(cell))
            }
        }
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}

/// Validates a grid side length.
pub(crate) fn check_size(size: usize) -> Result<(), GridError> {
    if size < MIN_GRID_SIZE {
        return Err(GridError::TooSmall {
            size,
            min: MIN_GRID_SIZE,
        });
    }
    if size > MAX_GRID_SIZE {
        return Err(GridError::TooLarge {
            size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}
