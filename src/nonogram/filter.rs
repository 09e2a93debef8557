#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Matching candidate layouts against what is already known about a line.

use crate::nonogram::cell::Cell;
use crate::nonogram::error::{NonogramError, Result};
use crate::nonogram::options::{Layout, LineOptions};

/// Checks a candidate layout against a partially decided line.
///
/// Every decided cell of `known` must agree with `candidate` at the same
/// position. Unknown cells accept either value.
///
/// # Errors
///
/// `LengthMismatch` if the two sequences differ in length. This is a caller
/// bug, never a property of the puzzle.
pub fn is_compatible(known: &[Cell], candidate: &[bool]) -> Result<bool> {
    if known.len() != candidate.len() {
        return Err(NonogramError::LengthMismatch {
            expected: known.len(),
            actual: candidate.len(),
        });
    }

    Ok(known
        .iter()
        .zip(candidate)
        .all(|(cell, &filled)| cell.admits(filled)))
}

/// Every layout of `runs` that fits the line described by `known`.
///
/// # Errors
///
/// `ClueTooLong` if the runs do not fit in the line at all.
pub fn compatible_options(known: &[Cell], runs: &[usize]) -> Result<Vec<Layout>> {
    let mut survivors = Vec::new();
    for layout in LineOptions::new(runs, known.len())? {
        if is_compatible(known, &layout)? {
            survivors.push(layout);
        }
    }
    Ok(survivors)
}

/// The line `known` refined by `layouts`.
///
/// Each unknown position on which every layout agrees takes that value.
/// Positions where layouts disagree stay unknown, and so does every
/// position when `layouts` is empty. Decided cells are returned unchanged.
///
/// # Errors
///
/// `LengthMismatch` if any layout differs in length from `known`.
pub fn forced_cells(known: &[Cell], layouts: &[Layout]) -> Result<Vec<Cell>> {
    if let Some(layout) = layouts.iter().find(|l| l.len() != known.len()) {
        return Err(NonogramError::LengthMismatch {
            expected: known.len(),
            actual: layout.len(),
        });
    }
    let Some((first, rest)) = layouts.split_first() else {
        return Ok(known.to_vec());
    };

    Ok(known
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            if cell.is_known() {
                return cell;
            }
            let value = first[i];
            if rest.iter().all(|layout| layout[i] == value) {
                Cell::from(value)
            } else {
                Cell::Unknown
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Empty, Filled, Unknown};

    #[test]
    fn test_board_is_unknown() {
        assert!(is_compatible(&[Unknown], &[true]).unwrap());
        assert!(is_compatible(&[Unknown; 4], &[true, false, false, true]).unwrap());
    }

    #[test]
    fn test_board_is_same() {
        assert!(is_compatible(&[Filled], &[true]).unwrap());
    }

    #[test]
    fn test_board_is_different() {
        assert!(!is_compatible(&[Filled], &[false]).unwrap());
        assert!(!is_compatible(&[Empty], &[true]).unwrap());
    }

    #[test]
    fn test_mixed_line() {
        let known = [Filled, Empty, Unknown, Unknown];
        assert!(is_compatible(&known, &[true, false, true, false]).unwrap());
        assert!(!is_compatible(&known, &[false, false, true, false]).unwrap());
    }

    #[test]
    fn test_length_mismatch() {
        let err = is_compatible(&[Unknown; 3], &[true, false]).unwrap_err();
        assert!(matches!(
            err,
            NonogramError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_compatible_options() {
        let known = [Unknown, Unknown, Empty, Unknown, Unknown];
        let survivors = compatible_options(&known, &[1, 2]).unwrap();
        assert_eq!(survivors, vec![vec![true, false, false, true, true]]);
    }

    #[test]
    fn test_compatible_options_none_left() {
        let known = [Empty, Empty, Empty];
        assert!(compatible_options(&known, &[1]).unwrap().is_empty());
    }

    #[test]
    fn test_forced_cells_overlap() {
        // A run of 3 in 5 cells always covers the middle cell.
        let known = [Unknown; 5];
        let layouts = compatible_options(&known, &[3]).unwrap();
        assert_eq!(
            forced_cells(&known, &layouts).unwrap(),
            vec![Unknown, Unknown, Filled, Unknown, Unknown]
        );
    }

    #[test]
    fn test_forced_cells_keeps_known_cells() {
        let known = [Filled, Unknown, Unknown];
        let layouts = compatible_options(&known, &[1]).unwrap();
        assert_eq!(
            forced_cells(&known, &layouts).unwrap(),
            vec![Filled, Empty, Empty]
        );
    }

    #[test]
    fn test_forced_cells_without_layouts() {
        let known = [Unknown, Filled];
        assert_eq!(forced_cells(&known, &[]).unwrap(), known.to_vec());
    }

    #[test]
    fn test_forced_cells_short_layout() {
        let known = [Unknown; 3];
        let layouts = vec![vec![true, false, true], vec![true, false]];
        let err = forced_cells(&known, &layouts).unwrap_err();
        assert!(matches!(
            err,
            NonogramError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }
}
