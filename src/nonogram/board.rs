#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The tri-state puzzle grid.
//!
//! Cells are addressed as `(x, y)`: `x` is the column counted from the left,
//! `y` the row counted from the top. Whole lines are copied out with
//! [`Board::column`] / [`Board::row`] and written back with
//! [`Board::set_column`] / [`Board::set_row`]; nothing aliases the grid in
//! between.

use crate::nonogram::cell::Cell;
use crate::nonogram::error::{NonogramError, Result};
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// A `width` x `height` grid of [`Cell`]s, addressed `(x, y)` with the
/// origin at the top left. Stored column by column.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[x * self.height + y]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[x * self.height + y]
    }
}

impl Board {
    /// A `width` x `height` board with every cell unknown.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Unknown; width * height],
        }
    }

    /// Builds a board from a grid indexed `[x][y]`.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the columns are not all the same height.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self> {
        let width = grid.len();
        let height = grid.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        for column in grid {
            if column.len() != height {
                return Err(NonogramError::LengthMismatch {
                    expected: height,
                    actual: column.len(),
                });
            }
            cells.extend(column);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The board as a grid indexed `[x][y]`.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        if self.height == 0 {
            return vec![Vec::new(); self.width];
        }
        self.cells.chunks(self.height).map(<[Cell]>::to_vec).collect()
    }

    /// The solved board as booleans indexed `[x][y]`, `true` for filled.
    ///
    /// # Errors
    ///
    /// `Unsolved` while any cell is still unknown.
    pub fn to_solution(&self) -> Result<Vec<Vec<bool>>> {
        let unknown = self.unknown_count();
        if unknown > 0 {
            return Err(NonogramError::Unsolved { unknown });
        }

        Ok(self
            .to_grid()
            .into_iter()
            .map(|column| column.into_iter().map(|c| c == Cell::Filled).collect())
            .collect())
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, `None` if outside the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self[(x, y)])
    }

    /// Cells not yet decided.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_unknown()).count()
    }

    /// Whether every cell is decided.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_known())
    }

    /// A copy of column `x`, top to bottom.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `x` is not a column of the board.
    pub fn column(&self, x: usize) -> Result<Vec<Cell>> {
        Self::check_index(x, self.width)?;
        let start = x * self.height;
        Ok(self.cells[start..start + self.height].to_vec())
    }

    /// A copy of row `y`, left to right.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `y` is not a row of the board.
    pub fn row(&self, y: usize) -> Result<Vec<Cell>> {
        Self::check_index(y, self.height)?;
        Ok((0..self.width).map(|x| self[(x, y)]).collect())
    }

    /// Overwrites column `x` with `column`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad `x`, `LengthMismatch` if `column` is not
    /// exactly as long as the board is high.
    pub fn set_column(&mut self, x: usize, column: &[Cell]) -> Result<()> {
        Self::check_index(x, self.width)?;
        Self::check_len(self.height, column.len())?;
        let start = x * self.height;
        self.cells[start..start + self.height].copy_from_slice(column);
        Ok(())
    }

    /// Overwrites row `y` with `row`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad `y`, `LengthMismatch` if `row` is not
    /// exactly as long as the board is wide.
    pub fn set_row(&mut self, y: usize, row: &[Cell]) -> Result<()> {
        Self::check_index(y, self.height)?;
        Self::check_len(self.width, row.len())?;
        for (x, &cell) in row.iter().enumerate() {
            self[(x, y)] = cell;
        }
        Ok(())
    }

    fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(NonogramError::IndexOutOfRange { index, len })
        }
    }

    fn check_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(NonogramError::LengthMismatch { expected, actual })
        }
    }
}

/// Renders the board one text line per row, top to bottom.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
