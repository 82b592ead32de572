// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The immutable grid model.
//!
//! A `Grid` holds the initial cell states in a flattened row-major layout
//! and answers geometric queries (coordinates, neighbors). It is validated
//! eagerly on construction and never mutated afterwards; propagation runs
//! layer their own mutable state over it, so the same grid can be fed to any
//! number of runs.

use crate::{
    cell::CellState,
    index::{CellCoord, CellIndex, ColIndex, RowIndex},
};
use smallvec::SmallVec;

/// The error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// The offending row.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length actually found.
        found: usize,
    },
    /// A raw digit outside the `0/1/2` cell encoding.
    InvalidCellValue {
        /// The row of the offending digit.
        row: usize,
        /// The column of the offending digit.
        col: usize,
        /// The digit actually found.
        value: u8,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, but the grid is {} cells wide",
                row, found, expected
            ),
            Self::InvalidCellValue { row, col, value } => write!(
                f,
                "Cell ({}, {}) holds invalid value {}; expected 0, 1, or 2",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable rectangular grid of cell states in row-major order.
///
/// Construction validates the shape (and, for raw digits, the encoding)
/// eagerly, so every `Grid` in existence is rectangular and well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    num_rows: usize,
    num_cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Builds a grid from rows of cell states.
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedRow` if any row's length differs from the
    /// first row's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seiche_grid::cell::CellState;
    /// # use seiche_grid::grid::Grid;
    ///
    /// let grid = Grid::from_rows(&[
    ///     vec![CellState::Active, CellState::Dormant],
    ///     vec![CellState::Dormant, CellState::Empty],
    /// ]).unwrap();
    /// assert_eq!(grid.num_cells(), 4);
    /// ```
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Self, GridError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.len());

        let mut cells = Vec::with_capacity(num_rows * num_cols);
        for (row, states) in rows.iter().enumerate() {
            if states.len() != num_cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: states.len(),
                });
            }
            cells.extend_from_slice(states);
        }

        Ok(Self {
            num_rows,
            num_cols,
            cells,
        })
    }

    /// Builds a grid from rows of raw digits (`0` empty, `1` dormant,
    /// `2` active).
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedRow` for shape violations and
    /// `GridError::InvalidCellValue` for digits outside the encoding.
    pub fn from_digits(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.len());

        let mut cells = Vec::with_capacity(num_rows * num_cols);
        for (row, digits) in rows.iter().enumerate() {
            if digits.len() != num_cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: digits.len(),
                });
            }
            for (col, &digit) in digits.iter().enumerate() {
                let state = CellState::from_digit(digit)
                    .ok_or(GridError::InvalidCellValue {
                        row,
                        col,
                        value: digit,
                    })?;
                cells.push(state);
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            cells,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the initial state of the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn state(&self, index: CellIndex) -> CellState {
        self.cells[index.get()]
    }

    /// Flattens a coordinate into a cell id.
    #[inline]
    pub fn index_of(&self, coord: CellCoord) -> CellIndex {
        debug_assert!(
            coord.row.get() < self.num_rows && coord.col.get() < self.num_cols,
            "called `Grid::index_of` with coordinate {} outside a {}x{} grid",
            coord,
            self.num_rows,
            self.num_cols
        );
        CellIndex::new(coord.row.get() * self.num_cols + coord.col.get())
    }

    /// Expands a cell id back into a coordinate.
    #[inline]
    pub fn coord_of(&self, index: CellIndex) -> CellCoord {
        debug_assert!(
            index.get() < self.num_cells(),
            "called `Grid::coord_of` with cell id {} but the grid has {} cells",
            index,
            self.num_cells()
        );
        CellCoord::new(
            RowIndex::new(index.get() / self.num_cols),
            ColIndex::new(index.get() % self.num_cols),
        )
    }

    /// Returns the number of cells currently recorded in the given state.
    #[inline]
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Iterates over all cell ids in row-major order.
    #[inline]
    pub fn cell_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.cells.len()).map(CellIndex::new)
    }

    /// Returns the orthogonal neighbors of the given cell (up to four).
    pub fn orthogonal_neighbors(&self, index: CellIndex) -> SmallVec<CellIndex, 4> {
        let coord = self.coord_of(index);
        let row = coord.row.get();
        let col = coord.col.get();

        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push(CellIndex::new(index.get() - self.num_cols));
        }
        if row + 1 < self.num_rows {
            neighbors.push(CellIndex::new(index.get() + self.num_cols));
        }
        if col > 0 {
            neighbors.push(CellIndex::new(index.get() - 1));
        }
        if col + 1 < self.num_cols {
            neighbors.push(CellIndex::new(index.get() + 1));
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> Grid {
        Grid::from_digits(&[vec![2, 1, 1], vec![1, 1, 0], vec![0, 1, 1]]).unwrap()
    }

    #[test]
    fn test_from_rows_valid() {
        let grid = Grid::from_rows(&[
            vec![CellState::Active, CellState::Dormant],
            vec![CellState::Empty, CellState::Dormant],
        ])
        .unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 2);
        assert_eq!(grid.num_cells(), 4);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid::from_rows(&[
            vec![CellState::Active, CellState::Dormant],
            vec![CellState::Empty],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            format!("{}", err),
            "Row 1 has 1 cells, but the grid is 2 cells wide"
        );
    }

    #[test]
    fn test_from_digits_invalid_value() {
        let err = Grid::from_digits(&[vec![2, 1], vec![1, 9]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCellValue {
                row: 1,
                col: 1,
                value: 9
            }
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_digits(&[]).unwrap();
        assert_eq!(grid.num_cells(), 0);
        assert_eq!(grid.count_state(CellState::Dormant), 0);
    }

    #[test]
    fn test_state_and_counts() {
        let grid = three_by_three();
        assert_eq!(grid.state(CellIndex::new(0)), CellState::Active);
        assert_eq!(grid.state(CellIndex::new(5)), CellState::Empty);
        assert_eq!(grid.count_state(CellState::Active), 1);
        assert_eq!(grid.count_state(CellState::Dormant), 6);
        assert_eq!(grid.count_state(CellState::Empty), 2);
    }

    #[test]
    fn test_index_coord_round_trip() {
        let grid = three_by_three();
        for index in grid.cell_indices() {
            assert_eq!(grid.index_of(grid.coord_of(index)), index);
        }

        let coord = grid.coord_of(CellIndex::new(5));
        assert_eq!(coord.row.get(), 1);
        assert_eq!(coord.col.get(), 2);
    }

    #[test]
    fn test_orthogonal_neighbors() {
        let grid = three_by_three();

        // Corner: two neighbors.
        let corner = grid.orthogonal_neighbors(CellIndex::new(0));
        assert_eq!(corner.len(), 2);

        // Center: four neighbors.
        let center = grid.orthogonal_neighbors(CellIndex::new(4));
        assert_eq!(center.len(), 4);
        assert!(center.contains(&CellIndex::new(1)));
        assert!(center.contains(&CellIndex::new(7)));
        assert!(center.contains(&CellIndex::new(3)));
        assert!(center.contains(&CellIndex::new(5)));

        // Edge: three neighbors.
        let edge = grid.orthogonal_neighbors(CellIndex::new(1));
        assert_eq!(edge.len(), 3);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::from_digits(&[vec![1]]).unwrap();
        assert!(grid.orthogonal_neighbors(CellIndex::new(0)).is_empty());
    }
}
