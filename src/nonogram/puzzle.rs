#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Puzzle descriptions and the puzzle file format.
//!
//! A puzzle file is line oriented:
//!
//! ```text
//! # comments start with '#'
//! columns
//! 2 1
//! 5
//! rows
//! 3
//! 4
//! ```
//!
//! The `columns` and `rows` headers each appear exactly once, in either
//! order. Every non-blank line after a header is one clue for that
//! direction: run lengths separated by spaces or commas, with `0` or `-`
//! for a line without filled cells.

use crate::nonogram::clue::Clue;
use crate::nonogram::error::{NonogramError, Result};
use crate::nonogram::propagator::{Propagator, PropagatorConfig};
use itertools::Itertools;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// A puzzle: the clues of every column and row.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Nonogram {
    /// Column clues, left to right.
    pub columns: Vec<Clue>,
    /// Row clues, top to bottom.
    pub rows: Vec<Clue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Columns,
    Rows,
}

impl Nonogram {
    /// Columns left to right, rows top to bottom.
    #[must_use]
    pub const fn new(columns: Vec<Clue>, rows: Vec<Clue>) -> Self {
        Self { columns, rows }
    }

    /// The puzzle whose unique intended picture is `grid`, indexed `[x][y]`.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the columns of `grid` differ in height.
    pub fn from_solution(grid: &[Vec<bool>]) -> Result<Self> {
        let height = grid.first().map_or(0, Vec::len);
        if let Some(column) = grid.iter().find(|c| c.len() != height) {
            return Err(NonogramError::LengthMismatch {
                expected: height,
                actual: column.len(),
            });
        }

        let columns = grid.iter().map(|c| Clue::from_line(c)).collect();
        let rows = (0..height)
            .map(|y| Clue::from_line(&grid.iter().map(|c| c[y]).collect_vec()))
            .collect();
        Ok(Self::new(columns, rows))
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// A propagator for this puzzle.
    ///
    /// # Errors
    ///
    /// `ClueTooLong` if a clue cannot fit in its line.
    pub fn propagator(&self, config: PropagatorConfig) -> Result<Propagator> {
        Propagator::with_config(self.columns.clone(), self.rows.clone(), config)
    }

    /// Solves the puzzle, returning the grid indexed `[x][y]`.
    ///
    /// # Errors
    ///
    /// See [`Propagator::solve`].
    pub fn solve(&self, config: PropagatorConfig) -> Result<Vec<Vec<bool>>> {
        self.propagator(config)?.solve()
    }

    /// Checks that `solution` has the puzzle's dimensions and that every
    /// column and row reproduces its clue.
    #[must_use]
    pub fn verify(&self, solution: &[Vec<bool>]) -> bool {
        if solution.len() != self.width() || solution.iter().any(|c| c.len() != self.height()) {
            return false;
        }

        let columns_ok = solution
            .iter()
            .zip(&self.columns)
            .all(|(column, clue)| Clue::from_line(column) == *clue);

        let rows_ok = self.rows.iter().enumerate().all(|(y, clue)| {
            let row = solution.iter().map(|column| column[y]).collect_vec();
            Clue::from_line(&row) == *clue
        });

        columns_ok && rows_ok
    }
}

impl FromStr for Nonogram {
    type Err = NonogramError;

    fn from_str(s: &str) -> Result<Self> {
        let mut columns: Option<Vec<Clue>> = None;
        let mut rows: Option<Vec<Clue>> = None;
        let mut current = None;

        for (number, raw) in s.lines().enumerate() {
            let number = number + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let header = match line.to_ascii_lowercase().as_str() {
                "columns" | "cols" => Some(Section::Columns),
                "rows" => Some(Section::Rows),
                _ => None,
            };

            if let Some(section) = header {
                let slot = match section {
                    Section::Columns => &mut columns,
                    Section::Rows => &mut rows,
                };
                if slot.is_some() {
                    return Err(NonogramError::Parse {
                        line: number,
                        message: format!("duplicate '{line}' section"),
                    });
                }
                *slot = Some(Vec::new());
                current = Some(section);
                continue;
            }

            let clues = match current {
                Some(Section::Columns) => columns.as_mut(),
                Some(Section::Rows) => rows.as_mut(),
                None => None,
            };
            let Some(clues) = clues else {
                return Err(NonogramError::Parse {
                    line: number,
                    message: "clue found before a 'columns' or 'rows' header".to_string(),
                });
            };

            let clue = line.parse::<Clue>().map_err(|message| NonogramError::Parse {
                line: number,
                message,
            })?;
            clues.push(clue);
        }

        let last = s.lines().count();
        let missing = |name: &str| NonogramError::Parse {
            line: last,
            message: format!("missing '{name}' section"),
        };

        Ok(Self::new(
            columns.ok_or_else(|| missing("columns"))?,
            rows.ok_or_else(|| missing("rows"))?,
        ))
    }
}

/// Lists the clues in the puzzle file format, so the output parses back.
impl Display for Nonogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}x{}", self.width(), self.height())?;
        writeln!(f, "columns")?;
        for clue in &self.columns {
            writeln!(f, "{clue}")?;
        }
        writeln!(f, "rows")?;
        for clue in &self.rows {
            writeln!(f, "{clue}")?;
        }
        Ok(())
    }
}

/// Reads a puzzle file.
///
/// # Errors
///
/// `Io` if the file cannot be read, `Parse` if its contents are malformed.
pub fn parse_nonogram_file(path: impl AsRef<Path>) -> Result<Nonogram> {
    std::fs::read_to_string(path)?.parse()
}

/// Parses a command-line clue list: clues separated by `,` or `/`, runs
/// within a clue separated by whitespace, e.g. `"2 1,5,5,5,2"`.
///
/// # Errors
///
/// `Parse` naming the 1-based position of the offending clue.
pub fn parse_clue_list(list: &str) -> Result<Vec<Clue>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split([',', '/'])
        .enumerate()
        .map(|(i, clue)| {
            clue.parse::<Clue>().map_err(|message| NonogramError::Parse {
                line: i + 1,
                message,
            })
        })
        .collect()
}
