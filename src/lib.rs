#![warn(missing_docs)]
//! This crate provides a line-logic solver for nonogram (picross) puzzles.

/// The `nonogram` module implements the Nonogram puzzle solver, which is a logic puzzle where cells in a grid must be filled based on given clues.
pub mod nonogram;
