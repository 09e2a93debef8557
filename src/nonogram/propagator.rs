#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Line-logic constraint propagation.
//!
//! The propagator repeatedly sweeps the board. A pass visits every column
//! from left to right and then every row from top to bottom. For each line
//! it enumerates the layouts of the line's clue, keeps those that agree with
//! the cells already decided, and commits every unknown cell on which all
//! survivors agree. Commits happen immediately, so later lines in the same
//! pass already see them.
//!
//! Every committed value is forced by its clue, so deductions are never
//! retracted and the order of discovery only changes how many passes a
//! puzzle needs, not the board it ends on.
//!
//! Propagation alone does not finish every puzzle. In the default
//! configuration [`Propagator::solve`] keeps passing until the board is
//! solved, which never happens for a puzzle that needs guessing.
//! [`PropagatorConfig::with_stall_detection`] and
//! [`PropagatorConfig::with_max_passes`] turn that into an error instead.

use crate::nonogram::board::Board;
use crate::nonogram::cell::Cell;
use crate::nonogram::clue::Clue;
use crate::nonogram::error::{LineRef, NonogramError, Result};
use crate::nonogram::filter::{forced_cells, is_compatible};
use crate::nonogram::options::LineOptions;
use log::{debug, trace, warn};

/// Opt-in guards against puzzles that line logic cannot finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropagatorConfig {
    /// End the solve with [`NonogramError::Stalled`] when a pass commits nothing.
    pub stall_detection: bool,
    /// End the solve with [`NonogramError::PassLimitExceeded`] after this many passes.
    pub max_passes: Option<usize>,
}

impl PropagatorConfig {
    /// No guards: [`Propagator::solve`] passes until the board is solved.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stall_detection: false,
            max_passes: None,
        }
    }

    /// Enables or disables stall detection.
    #[must_use]
    pub const fn with_stall_detection(mut self, enabled: bool) -> Self {
        self.stall_detection = enabled;
        self
    }

    /// Sets the pass limit, or removes it with `None`.
    #[must_use]
    pub const fn with_max_passes(mut self, max_passes: Option<usize>) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Whether a line without any compatible layout is reported. Without
    /// either guard the solve has no way to end on an error, so such lines
    /// are skipped.
    #[must_use]
    pub const fn reports_contradictions(&self) -> bool {
        self.stall_detection || self.max_passes.is_some()
    }
}

/// Progress of a [`Propagator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// At least one cell is unknown.
    Solving,
    /// Every cell is decided.
    Solved,
}

/// Counters collected while propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropagationStats {
    /// Completed passes.
    pub passes: usize,
    /// Lines that still had unknown cells when visited.
    pub lines_examined: usize,
    /// Layouts enumerated across all examined lines.
    pub layouts_generated: usize,
    /// Enumerated layouts that agreed with the board.
    pub layouts_compatible: usize,
    /// Cells decided.
    pub cells_committed: usize,
}

/// Solves a puzzle by repeated column and row passes over a [`Board`].
#[derive(Debug, Clone)]
pub struct Propagator {
    columns: Vec<Clue>,
    rows: Vec<Clue>,
    board: Board,
    config: PropagatorConfig,
    stats: PropagationStats,
}

impl Propagator {
    /// A propagator for the given clues with the default configuration.
    ///
    /// # Errors
    ///
    /// `ClueTooLong` if any clue cannot fit in its line.
    pub fn new(columns: Vec<Clue>, rows: Vec<Clue>) -> Result<Self> {
        Self::with_config(columns, rows, PropagatorConfig::default())
    }

    /// A propagator for the given clues. The board is `columns.len()` wide
    /// and `rows.len()` high, with every cell unknown.
    ///
    /// # Errors
    ///
    /// `ClueTooLong` if any clue cannot fit in its line.
    pub fn with_config(
        columns: Vec<Clue>,
        rows: Vec<Clue>,
        config: PropagatorConfig,
    ) -> Result<Self> {
        let width = columns.len();
        let height = rows.len();

        let lines = columns
            .iter()
            .enumerate()
            .map(|(x, clue)| (LineRef::Column(x), clue, height))
            .chain(
                rows.iter()
                    .enumerate()
                    .map(|(y, clue)| (LineRef::Row(y), clue, width)),
            );
        for (line, clue, length) in lines {
            if !clue.fits(length) {
                return Err(NonogramError::ClueTooLong {
                    line: Some(line),
                    committed: clue.committed_len(),
                    length,
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            board: Board::new(width, height),
            config,
            stats: PropagationStats::default(),
        })
    }

    /// `Solved` once no cell is unknown.
    #[must_use]
    pub fn state(&self) -> State {
        if self.board.is_solved() {
            State::Solved
        } else {
            State::Solving
        }
    }

    /// The board as deduced so far.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Counters for the passes so far.
    #[must_use]
    pub const fn stats(&self) -> &PropagationStats {
        &self.stats
    }

    /// The guards in effect.
    #[must_use]
    pub const fn config(&self) -> &PropagatorConfig {
        &self.config
    }

    /// Runs one pass: every column in index order, then every row.
    ///
    /// Returns the number of cells committed. A pass over a solved board
    /// commits nothing.
    ///
    /// # Errors
    ///
    /// `Contradiction` if a line has no compatible layout and the
    /// configuration reports contradictions.
    pub fn pass(&mut self) -> Result<usize> {
        let mut committed = 0;
        for x in 0..self.board.width() {
            committed += self.refine(LineRef::Column(x))?;
        }
        for y in 0..self.board.height() {
            committed += self.refine(LineRef::Row(y))?;
        }

        self.stats.passes += 1;
        debug!(
            "pass {}: committed {committed} cells, {} unknown",
            self.stats.passes,
            self.board.unknown_count()
        );

        Ok(committed)
    }

    /// Narrows a single line against its clue and writes the forced cells back.
    fn refine(&mut self, line: LineRef) -> Result<usize> {
        let (known, clue) = match line {
            LineRef::Column(x) => (self.board.column(x)?, &self.columns[x]),
            LineRef::Row(y) => (self.board.row(y)?, &self.rows[y]),
        };
        if known.iter().all(|c| c.is_known()) {
            if self.config.reports_contradictions() && !matches_clue(&known, clue) {
                warn!("{line}: decided cells do not match clue '{clue}'");
                return Err(NonogramError::Contradiction { line });
            }
            return Ok(0);
        }

        let mut generated = 0;
        let mut survivors = Vec::new();
        for layout in LineOptions::new(clue.runs(), known.len()).map_err(|e| e.on_line(line))? {
            generated += 1;
            if is_compatible(&known, &layout)? {
                survivors.push(layout);
            }
        }

        self.stats.lines_examined += 1;
        self.stats.layouts_generated += generated;
        self.stats.layouts_compatible += survivors.len();

        if survivors.is_empty() {
            if self.config.reports_contradictions() {
                warn!("{line}: no layout of clue '{clue}' fits the board");
                return Err(NonogramError::Contradiction { line });
            }
            return Ok(0);
        }

        let refined = forced_cells(&known, &survivors)?;
        let committed = known.iter().zip(&refined).filter(|(a, b)| a != b).count();
        if committed == 0 {
            return Ok(0);
        }

        trace!(
            "{line}: {committed} cells forced by {} of {generated} layouts",
            survivors.len()
        );
        match line {
            LineRef::Column(x) => self.board.set_column(x, &refined)?,
            LineRef::Row(y) => self.board.set_row(y, &refined)?,
        }
        self.stats.cells_committed += committed;

        Ok(committed)
    }

    /// Passes until the board is solved and returns it indexed `[x][y]`.
    ///
    /// With the default configuration this does not return for a puzzle
    /// that line logic cannot finish.
    ///
    /// # Errors
    ///
    /// - `Stalled` if stall detection is on and a pass commits nothing.
    /// - `PassLimitExceeded` if the configured pass limit is reached.
    /// - `Contradiction` if a guard is on and a line has no compatible layout.
    pub fn solve(&mut self) -> Result<Vec<Vec<bool>>> {
        while self.state() == State::Solving {
            if let Some(limit) = self.config.max_passes {
                if self.stats.passes >= limit {
                    warn!("giving up after {limit} passes");
                    return Err(NonogramError::PassLimitExceeded { passes: limit });
                }
            }

            let committed = self.pass()?;
            if committed == 0 && self.config.stall_detection && self.state() == State::Solving {
                let unknown = self.board.unknown_count();
                warn!(
                    "stalled after {} passes with {unknown} unknown cells",
                    self.stats.passes
                );
                return Err(NonogramError::Stalled {
                    passes: self.stats.passes,
                    unknown,
                });
            }
        }

        self.board.to_solution()
    }
}

fn matches_clue(line: &[Cell], clue: &Clue) -> bool {
    let values: Vec<bool> = line.iter().map(|&c| c == Cell::Filled).collect();
    Clue::from_line(&values) == *clue
}

/// Solves a puzzle from its column clues (left to right) and row clues (top
/// to bottom) with the default configuration.
///
/// The result is indexed `[x][y]`; `true` is filled.
///
/// # Errors
///
/// `ClueTooLong` if a clue cannot fit in its line.
pub fn solve<C: AsRef<[usize]>>(columns: &[C], rows: &[C]) -> Result<Vec<Vec<bool>>> {
    let columns = columns.iter().map(|c| Clue::from(c.as_ref())).collect();
    let rows = rows.iter().map(|r| Clue::from(r.as_ref())).collect();
    Propagator::new(columns, rows)?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn clues(lines: &[&[usize]]) -> Vec<Clue> {
        lines.iter().map(|&l| Clue::from(l)).collect()
    }

    #[test]
    fn test_single_entry_board() {
        let board = solve(&[vec![1]], &[vec![1]]).unwrap();
        assert_eq!(board, vec![vec![T]]);
    }

    #[test]
    fn test_dbl_board() {
        let board = solve(&[vec![1], vec![0]], &[vec![1], vec![0]]).unwrap();
        assert_eq!(board, vec![vec![T, F], vec![F, F]]);
    }

    #[test]
    fn test_two_segments_board() {
        let lines = [vec![1, 1], vec![1], vec![1, 1]];
        let board = solve(&lines, &lines).unwrap();
        assert_eq!(board, vec![vec![T, F, T], vec![F, T, F], vec![T, F, T]]);
    }

    #[test]
    fn test_sanity_check_5x5() {
        let columns = [vec![2, 1], vec![5], vec![5], vec![5], vec![2]];
        let rows = [vec![3], vec![4], vec![4], vec![4], vec![5]];
        let board = solve(&columns, &rows).unwrap();
        assert_eq!(
            board,
            vec![
                vec![F, T, T, F, T],
                vec![T, T, T, T, T],
                vec![T, T, T, T, T],
                vec![T, T, T, T, T],
                vec![F, F, F, T, T],
            ]
        );
    }

    #[test]
    fn test_states() {
        let mut propagator = Propagator::new(clues(&[&[1]]), clues(&[&[1]])).unwrap();
        assert_eq!(propagator.state(), State::Solving);
        propagator.solve().unwrap();
        assert_eq!(propagator.state(), State::Solved);
    }

    #[test]
    fn test_pass_on_solved_board_is_idempotent() {
        let lines = clues(&[&[1, 1], &[1], &[1, 1]]);
        let mut propagator = Propagator::new(lines.clone(), lines).unwrap();
        propagator.solve().unwrap();

        let before = propagator.board().clone();
        let committed_before = propagator.stats().cells_committed;
        assert_eq!(propagator.pass().unwrap(), 0);
        assert_eq!(propagator.board(), &before);
        assert_eq!(propagator.stats().cells_committed, committed_before);
    }

    #[test]
    fn test_commits_are_visible_within_a_pass() {
        // Only column 0 is decided by the column phase. Row 1 can only be
        // finished because it already sees that column in the same pass.
        let columns = clues(&[&[2], &[1]]);
        let rows = clues(&[&[2], &[1]]);
        let mut propagator = Propagator::new(columns, rows).unwrap();
        let committed = propagator.pass().unwrap();

        assert_eq!(committed, 4);
        assert_eq!(propagator.state(), State::Solved);
        assert_eq!(propagator.stats().passes, 1);
    }

    #[test]
    fn test_stats() {
        let mut propagator = Propagator::new(clues(&[&[1], &[]]), clues(&[&[1], &[]])).unwrap();
        propagator.solve().unwrap();
        let stats = propagator.stats();
        assert_eq!(stats.cells_committed, 4);
        assert!(stats.layouts_generated >= stats.layouts_compatible);
        assert!(stats.lines_examined > 0);
    }

    #[test]
    fn test_clue_too_long() {
        let err = Propagator::new(clues(&[&[3]]), clues(&[&[1], &[1]])).unwrap_err();
        assert!(matches!(
            err,
            NonogramError::ClueTooLong {
                line: Some(LineRef::Column(0)),
                committed: 3,
                length: 2
            }
        ));
    }

    #[test]
    fn test_row_clue_too_long() {
        let err = solve(&[vec![1], vec![1]], &[vec![1, 1]]).unwrap_err();
        assert!(matches!(
            err,
            NonogramError::ClueTooLong {
                line: Some(LineRef::Row(0)),
                ..
            }
        ));
    }

    #[test]
    fn test_stall_detection() {
        // Two valid solutions: the diagonal and the anti-diagonal.
        let lines = clues(&[&[1], &[1]]);
        let config = PropagatorConfig::new().with_stall_detection(true);
        let mut propagator = Propagator::with_config(lines.clone(), lines, config).unwrap();

        let err = propagator.solve().unwrap_err();
        assert!(matches!(
            err,
            NonogramError::Stalled {
                passes: 1,
                unknown: 4
            }
        ));
        assert_eq!(propagator.board().get(0, 0), Some(Cell::Unknown));
    }

    #[test]
    fn test_pass_limit() {
        let lines = clues(&[&[1], &[1]]);
        let config = PropagatorConfig::new().with_max_passes(Some(3));
        let mut propagator = Propagator::with_config(lines.clone(), lines, config).unwrap();

        let err = propagator.solve().unwrap_err();
        assert!(matches!(err, NonogramError::PassLimitExceeded { passes: 3 }));
        assert_eq!(propagator.stats().passes, 3);
    }

    #[test]
    fn test_contradiction_reported_with_guard() {
        // Column 0 must be filled, but row 0 must be empty.
        let columns = clues(&[&[1]]);
        let rows = clues(&[&[]]);
        let config = PropagatorConfig::new().with_stall_detection(true);
        let mut propagator = Propagator::with_config(columns, rows, config).unwrap();

        let err = propagator.solve().unwrap_err();
        assert!(matches!(
            err,
            NonogramError::Contradiction {
                line: LineRef::Row(0)
            }
        ));
    }

    #[test]
    fn test_contradiction_skipped_without_guard() {
        let mut propagator = Propagator::new(clues(&[&[1]]), clues(&[&[]])).unwrap();
        assert_eq!(propagator.pass().unwrap(), 1);
        assert_eq!(propagator.pass().unwrap(), 0);
    }

    #[test]
    fn test_empty_board() {
        let board = solve::<Vec<usize>>(&[], &[]).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = PropagatorConfig::default();
        assert_eq!(config, PropagatorConfig::new());
        assert!(!config.reports_contradictions());
        assert!(config.with_max_passes(Some(1)).reports_contradictions());
    }
}
