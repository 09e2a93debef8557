//! # nonogram
//!
//! `nonogram` is a command-line solver for nonogram (picross) puzzles.
//! Each column and row of the grid carries a clue: the lengths of the runs
//! of filled cells in that line, in order. The solver uses line logic only:
//! it enumerates every layout of a line that agrees with what is already
//! known and commits the cells on which all those layouts agree, sweeping
//! the columns and then the rows until the picture is complete.
//!
//! ## Features
//!
//! -   **Multiple Input Sources**:
//!     -   Puzzle files (`.non`), singly or a whole directory of them
//!     -   Clue lists given on the command line
//!     -   Randomly generated pictures
//! -   **Verification**: Checks the solved picture against every clue.
//! -   **Statistics**: Passes, lines examined, layouts generated and kept,
//!     cells committed, solve time and memory usage.
//! -   **Stall Detection**: Puzzles that need guessing are reported as
//!     unsolved, with the partially solved board, instead of looping.
//! -   **Memory Management**: Uses `tikv-jemallocator` for memory allocation and provides
//!     memory usage statistics.
//!
//! ## Usage
//!
//! ```sh
//! nonogram [OPTIONS] [PATH] [SUBCOMMAND]
//! ```
//!
//! `PATH` given without a subcommand is solved as a puzzle file, or as a
//! directory of `.non` files.
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Solve a puzzle file.
//!     ```sh
//!     nonogram file --path <puzzle.non> [OPTIONS]
//!     ```
//!
//! 2.  **`text`**: Solve clue lists given inline; clues are separated by `,`.
//!     ```sh
//!     nonogram text --columns "2 1,5,5,5,2" --rows "3,4,4,4,5"
//!     ```
//!
//! 3.  **`random`**: Generate and solve a random puzzle.
//!     ```sh
//!     nonogram random --width 15 --height 10 --density 0.6 --seed 7
//!     ```
//!
//! 4.  **`completions`**: Print a shell completion script.
//!     ```sh
//!     nonogram completions bash
//!     ```
//!
//! ### Common Options
//!
//! These may be given before or after the subcommand.
//!
//! -   `-d, --debug`: Log every pass (default: `false`). `RUST_LOG` overrides the level.
//! -   `-v, --verify <BOOL>`: Verify the solution (default: `true`).
//! -   `-s, --stats <BOOL>`: Print statistics (default: `true`).
//! -   `--no-stall-detection`: Keep passing when a pass makes no progress.
//! -   `--max-passes <N>`: Give up after `N` passes.

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_file, solve_random, solve_text};
use clap::{CommandFactory, Parser};

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the application.
///
/// Parses command-line arguments and dispatches to the appropriate handler.
/// Exits with status 1 if the handler fails.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.common.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.command.is_none() {
        return match cli.path {
            Some(path) if path.is_dir() => solve_dir(&path, &cli.common),
            Some(path) => solve_file(&path, &cli.common),
            None => {
                Cli::command()
                    .print_help()
                    .map_err(|e| format!("Unable to print help: {e}"))?;
                println!();
                Ok(())
            }
        };
    }

    let common = &cli.common;
    match cli.command {
        Some(Commands::File { path }) => solve_file(&path, common),
        Some(Commands::Text { columns, rows }) => solve_text(&columns, &rows, common),
        Some(Commands::Random {
            width,
            height,
            density,
            seed,
        }) => solve_random(width, height, density, seed, common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Sets up `env_logger`. `RUST_LOG` wins; otherwise `--debug` selects the
/// `debug` level and the default is `warn`.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
