#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Row and column clues.
//!
//! A clue lists the lengths of the filled runs of one line, in order. Runs
//! are separated by at least one blank cell. An empty clue describes a line
//! with no filled cells; it is conventionally written as `0`, so zero-length
//! runs are dropped when a clue is built.

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

/// The run lengths of one column or row, in order. Never holds a zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clue(SmallVec<[usize; 8]>);

impl Clue {
    /// Builds a clue from run lengths, ignoring zero-length runs.
    pub fn new(runs: impl IntoIterator<Item = usize>) -> Self {
        Self(runs.into_iter().filter(|&r| r != 0).collect())
    }

    /// The clue of a line with no filled cells.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The run lengths.
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        &self.0
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the line has no filled cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the run lengths.
    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.0.iter()
    }

    /// Total number of filled cells the clue describes.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.0.iter().sum()
    }

    /// Cells taken up by the runs and the single mandatory blank between
    /// each pair of runs.
    #[must_use]
    pub fn committed_len(&self) -> usize {
        self.filled_cells() + self.len().saturating_sub(1)
    }

    /// Spare blank cells that can be distributed among the gaps of a line
    /// of `length` cells, or `None` if the clue does not fit at all.
    #[must_use]
    pub fn slack(&self, length: usize) -> Option<usize> {
        length.checked_sub(self.committed_len())
    }

    /// Whether the clue fits in `length` cells.
    #[must_use]
    pub fn fits(&self, length: usize) -> bool {
        self.slack(length).is_some()
    }

    /// Reads the clue off a fully decided line.
    #[must_use]
    pub fn from_line(line: &[bool]) -> Self {
        Self(
            line.iter()
                .chunk_by(|&&filled| filled)
                .into_iter()
                .filter_map(|(filled, run)| filled.then(|| run.count()))
                .collect(),
        )
    }
}

impl Index<usize> for Clue {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<usize>> for Clue {
    fn from(runs: Vec<usize>) -> Self {
        Self::new(runs)
    }
}

impl From<&[usize]> for Clue {
    fn from(runs: &[usize]) -> Self {
        Self::new(runs.iter().copied())
    }
}

impl<const N: usize> From<[usize; N]> for Clue {
    fn from(runs: [usize; N]) -> Self {
        Self::new(runs)
    }
}

impl FromIterator<usize> for Clue {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Parses run lengths separated by whitespace or commas. A lone `-`, a lone
/// `0` or an empty string is the empty clue.
impl FromStr for Clue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" {
            return Ok(Self::empty());
        }

        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|e| format!("invalid run length '{token}': {e}"))
            })
            .collect()
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0.iter().join(" "))
        }
    }
}
