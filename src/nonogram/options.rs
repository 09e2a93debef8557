#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Enumeration of every layout of a clue within a line.
//!
//! [`LineOptions`] walks the spacing vectors of a clue (see
//! [`crate::nonogram::spacing`]) and turns each one into a concrete
//! [`Layout`]. Each iterator owns its own spacing state; it is consumed once,
//! and building another one for the same clue starts over independently.
//! Collect the layouts into a `Vec` if they are needed more than once.

use crate::nonogram::clue::Clue;
use crate::nonogram::error::{NonogramError, Result};
use crate::nonogram::spacing::{Spacing, increment, initial_spacing};
use std::iter::FusedIterator;

/// One fully decided candidate for a line. `true` is filled.
pub type Layout = Vec<bool>;

/// Lazy sequence of every layout of a clue in a line of fixed length.
#[derive(Debug, Clone)]
pub struct LineOptions {
    clue: Clue,
    length: usize,
    spacing: Spacing,
    max_sum: usize,
    done: bool,
}

impl LineOptions {
    /// Prepares the enumeration of `runs` within `length` cells. Zero-length
    /// runs are dropped first, so `[0]` enumerates like the empty clue.
    ///
    /// # Errors
    ///
    /// `ClueTooLong` if the runs and their mandatory separators need more
    /// than `length` cells.
    pub fn new(runs: &[usize], length: usize) -> Result<Self> {
        let clue = Clue::from(runs);
        if !clue.fits(length) {
            return Err(NonogramError::ClueTooLong {
                line: None,
                committed: clue.committed_len(),
                length,
            });
        }

        Ok(Self {
            spacing: initial_spacing(clue.len()),
            max_sum: length - clue.filled_cells() + 1,
            clue,
            length,
            done: false,
        })
    }

    fn layout(&self) -> Layout {
        let mut layout = vec![false; self.length];
        let mut x = 0;
        for (&gap, &run) in self.spacing.iter().zip(self.clue.iter()) {
            x += gap;
            layout[x..x + run].fill(true);
            x += run;
        }
        layout
    }
}

impl Iterator for LineOptions {
    type Item = Layout;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let layout = self.layout();
        self.done = !increment(&mut self.spacing, self.max_sum);
        Some(layout)
    }
}

impl FusedIterator for LineOptions {}

/// Every layout of `runs` in a line of `length` cells, in enumeration order.
///
/// # Errors
///
/// `ClueTooLong` if the runs do not fit.
pub fn options(runs: &[usize], length: usize) -> Result<LineOptions> {
    LineOptions::new(runs, length)
}

/// Number of layouts of `clue` in `length` cells, `C(slack + k, k)` for `k`
/// runs, without enumerating them. Zero if the clue does not fit.
#[must_use]
pub fn option_count(clue: &Clue, length: usize) -> u128 {
    let Some(slack) = clue.slack(length) else {
        return 0;
    };
    let k = clue.len() as u128;
    let n = slack as u128 + k;

    // C(n, k) built up incrementally stays integral at every step.
    (0..k).fold(1u128, |acc, i| acc * (n - i) / (i + 1))
}
