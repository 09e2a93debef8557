#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The tri-state board cell.

use std::fmt::Display;

/// The state of a single board cell.
///
/// Cells start out `Unknown` and are set to `Filled` or `Empty` once a
/// deduction forces them. A decided cell is never changed again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    /// Not yet deduced.
    #[default]
    Unknown,
    /// Part of a run.
    Filled,
    /// Blank.
    Empty,
}

impl Cell {
    /// `Filled` or `Empty`.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Not yet deduced.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The boolean value of a decided cell, `None` while unknown.
    #[must_use]
    pub const fn value(self) -> Option<bool> {
        match self {
            Self::Filled => Some(true),
            Self::Empty => Some(false),
            Self::Unknown => None,
        }
    }

    /// Whether a decided cell agrees with `filled`. Unknown cells agree with anything.
    #[must_use]
    pub const fn admits(self, filled: bool) -> bool {
        match self {
            Self::Filled => filled,
            Self::Empty => !filled,
            Self::Unknown => true,
        }
    }

    /// Two-character rendering: `██` filled, `░░` empty, `??` unknown.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Filled => "██",
            Self::Empty => "░░",
            Self::Unknown => "??",
        }
    }
}

impl From<bool> for Cell {
    fn from(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }
}

impl From<Option<bool>> for Cell {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Cell::default(), Cell::Unknown);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from(true), Cell::Filled);
        assert_eq!(Cell::from(false), Cell::Empty);
        assert_eq!(Cell::from(None), Cell::Unknown);
        assert_eq!(Cell::from(Some(true)), Cell::Filled);
    }

    #[test]
    fn test_value() {
        assert_eq!(Cell::Filled.value(), Some(true));
        assert_eq!(Cell::Empty.value(), Some(false));
        assert_eq!(Cell::Unknown.value(), None);
    }

    #[test]
    fn test_admits() {
        assert!(Cell::Unknown.admits(true));
        assert!(Cell::Unknown.admits(false));
        assert!(Cell::Filled.admits(true));
        assert!(!Cell::Filled.admits(false));
        assert!(Cell::Empty.admits(false));
        assert!(!Cell::Empty.admits(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Filled.to_string(), "██");
        assert_eq!(Cell::Empty.to_string(), "░░");
        assert_eq!(Cell::Unknown.to_string(), "??");
    }
}
