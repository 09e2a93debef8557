#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Gap distributions for the runs of a clue.
//!
//! A spacing vector has one entry per run. Entry 0 counts the blank cells
//! before the first run and may be zero; every later entry counts the blanks
//! between a run and its predecessor and is at least one. Stepping through
//! every spacing vector whose sum stays below a bound visits every way of
//! placing the runs in a line exactly once, in lexicographic order.

use smallvec::SmallVec;

/// Backing storage for spacing vectors. Most clues have only a few runs.
pub type Spacing = SmallVec<[usize; 8]>;

/// Smallest value allowed at `position` of a spacing vector.
#[must_use]
pub const fn min_gap(position: usize) -> usize {
    if position == 0 { 0 } else { 1 }
}

/// The left-packed spacing for `runs` runs: `[0, 1, 1, ...]`.
#[must_use]
pub fn initial_spacing(runs: usize) -> Spacing {
    (0..runs).map(min_gap).collect()
}

/// Advances `spacing` to the next assignment whose sum is strictly below
/// `max_sum`, odometer style.
///
/// Positions are incremented from the right. When a position overflows the
/// bound it is reset to its minimum and the carry moves one position left.
///
/// Returns `false` once the carry runs past the leftmost position. The
/// contents of `spacing` are unspecified after that and the caller must stop
/// enumerating.
pub fn increment(spacing: &mut [usize], max_sum: usize) -> bool {
    let mut sum: usize = spacing.iter().sum();

    for i in (0..spacing.len()).rev() {
        spacing[i] += 1;
        sum += 1;
        if sum < max_sum {
            return true;
        }

        sum -= spacing[i] - min_gap(i);
        spacing[i] = min_gap(i);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_spacing() {
        assert!(initial_spacing(0).is_empty());
        assert_eq!(initial_spacing(1).as_slice(), &[0]);
        assert_eq!(initial_spacing(3).as_slice(), &[0, 1, 1]);
    }

    #[test]
    fn test_increment_simple() {
        let mut spacing = [0];
        assert!(increment(&mut spacing, 2));
        assert_eq!(spacing, [1]);
    }

    #[test]
    fn test_increment_simple_exceeds_sum() {
        let mut spacing = [1];
        assert!(!increment(&mut spacing, 2));
    }

    #[test]
    fn test_increment_two_positions() {
        let mut spacing = [0, 1];
        assert!(increment(&mut spacing, 3));
        assert_eq!(spacing, [0, 2]);
    }

    #[test]
    fn test_increment_two_positions_carry() {
        let mut spacing = [0, 2];
        assert!(increment(&mut spacing, 3));
        assert_eq!(spacing, [1, 1]);
    }

    #[test]
    fn test_increment_two_positions_carry_exceeds() {
        let mut spacing = [1, 1];
        assert!(!increment(&mut spacing, 2));
    }

    #[test]
    fn test_increment_empty_vector() {
        let mut spacing: [usize; 0] = [];
        assert!(!increment(&mut spacing, 10));
    }

    #[test]
    fn test_increment_counts_to_sum_of_five() {
        let mut spacing = [0, 1, 1];
        let expected = [
            [0, 1, 2],
            [0, 1, 3],
            [0, 2, 1],
            [0, 2, 2],
            [0, 3, 1],
            [1, 1, 1],
            [1, 1, 2],
            [1, 2, 1],
            [2, 1, 1],
        ];

        for step in expected {
            assert!(increment(&mut spacing, 5));
            assert_eq!(spacing, step);
        }
        assert!(!increment(&mut spacing, 5));
    }

    #[test]
    fn test_every_composition_visited_once() {
        // Three gaps, two spare cells: C(2 + 3, 3) = 10 assignments.
        let mut spacing = initial_spacing(3);
        let max_sum = 2 + 2 + 1;
        let mut seen = vec![spacing.clone()];
        while increment(&mut spacing, max_sum) {
            assert!(!seen.contains(&spacing), "repeated {spacing:?}");
            seen.push(spacing.clone());
        }

        assert_eq!(seen.len(), 10);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert!(seen.iter().all(|s| s.iter().sum::<usize>() < max_sum));
    }
}
