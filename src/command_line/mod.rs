//! Argument parsing and the command handlers behind the `nonogram` binary.

pub(crate) mod cli;
