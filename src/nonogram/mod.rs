#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides a line-logic solver for nonogram puzzles.
//!
//! The solver works bottom-up:
//!
//! - [`spacing`] enumerates the gap distributions of a clue,
//! - [`options`] turns them into candidate layouts for a line,
//! - [`filter`] discards layouts that disagree with what is already known,
//! - [`board`] holds the tri-state grid,
//! - [`propagator`] sweeps columns and rows until the grid is solved.
//!
//! [`puzzle`] reads and writes puzzle descriptions and verifies solutions,
//! and [`generator`] builds random puzzles.

pub mod board;
pub mod cell;
pub mod clue;
pub mod error;
pub mod filter;
pub mod generator;
pub mod options;
pub mod propagator;
pub mod puzzle;
pub mod spacing;

pub use board::Board;
pub use cell::Cell;
pub use clue::Clue;
pub use error::{LineRef, NonogramError};
pub use options::{Layout, LineOptions};
pub use propagator::{PropagationStats, Propagator, PropagatorConfig, State, solve};
pub use puzzle::{Nonogram, parse_clue_list, parse_nonogram_file};
