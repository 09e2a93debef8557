#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Errors raised by the nonogram solver, its board and its puzzle parser.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Identifies a single line of the board in errors and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineRef {
    /// A column, indexed from the left.
    Column(usize),
    /// A row, indexed from the top.
    Row(usize),
}

impl Display for LineRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column(x) => write!(f, "column {x}"),
            Self::Row(y) => write!(f, "row {y}"),
        }
    }
}

/// Everything that can go wrong while building, solving or reading a nonogram.
#[derive(Debug, Error)]
pub enum NonogramError {
    /// Two sequences that must describe the same line have different lengths.
    #[error("Line length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch {
        /// Length of the line being written to or compared against.
        expected: usize,
        /// Length of the sequence that was supplied.
        actual: usize,
    },

    /// A row or column index outside the board.
    #[error("Line index {index} is out of range for {len} lines")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of lines in that direction.
        len: usize,
    },

    /// The runs of a clue plus their separators do not fit in the line.
    #[error("Clue{} needs {committed} cells but the line only has {length}", for_line(.line.as_ref()))]
    ClueTooLong {
        /// The line the clue belongs to, when known.
        line: Option<LineRef>,
        /// Cells needed by the runs and the mandatory separators.
        committed: usize,
        /// Cells available.
        length: usize,
    },

    /// The board still holds unknown cells and cannot be read as a solution.
    #[error("Board is not solved: {unknown} cells are still unknown")]
    Unsolved {
        /// Number of unknown cells.
        unknown: usize,
    },

    /// A whole pass committed nothing; line logic alone cannot finish the puzzle.
    #[error("Puzzle is not solvable by line logic alone: stalled after {passes} passes with {unknown} unknown cells")]
    Stalled {
        /// Passes performed, including the one that made no progress.
        passes: usize,
        /// Cells still unknown.
        unknown: usize,
    },

    /// The configured pass limit was reached before the board was solved.
    #[error("Pass limit of {passes} reached before the puzzle was solved")]
    PassLimitExceeded {
        /// The limit that was hit.
        passes: usize,
    },

    /// No layout of a line's clue agrees with the cells already known.
    #[error("No layout of the clue for {line} is compatible with the board")]
    Contradiction {
        /// The offending line.
        line: LineRef,
    },

    /// Malformed puzzle text.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Failure reading a puzzle file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NonogramError {
    /// Attaches `line` to errors that describe a single line but were raised
    /// without knowing which one.
    #[must_use]
    pub fn on_line(self, line: LineRef) -> Self {
        match self {
            Self::ClueTooLong {
                line: None,
                committed,
                length,
            } => Self::ClueTooLong {
                line: Some(line),
                committed,
                length,
            },
            other => other,
        }
    }
}

fn for_line(line: Option<&LineRef>) -> String {
    line.map(|l| format!(" for {l}")).unwrap_or_default()
}

/// Convenience alias used throughout the solver.
pub type Result<T> = std::result::Result<T, NonogramError>;
