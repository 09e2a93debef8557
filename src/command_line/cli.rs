use clap::{ArgAction, Args, Parser, Subcommand};
use nonogram_solver::nonogram::{
    NonogramError, Nonogram, PropagationStats, PropagatorConfig, generator, parse_clue_list,
    parse_nonogram_file,
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// File extension of puzzle files picked up when solving a directory.
pub(crate) const PUZZLE_EXTENSION: &str = "non";

/// Defines the command-line interface for the nonogram solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "nonogram", version, about = "A line-logic nonogram solver")]
pub(crate) struct Cli {
    /// An optional path argument. If provided without a subcommand it is
    /// treated as a puzzle file, or as a directory of `.non` puzzle files.
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `random`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options. They are global, so they may be given before or
    /// after the subcommand.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,
    },

    /// Solve a puzzle given as clue lists on the command line.
    Text {
        /// Column clues, left to right, separated by ',' (e.g. "2 1,5,5,5,2").
        #[arg(short, long)]
        columns: String,

        /// Row clues, top to bottom, separated by ',' (e.g. "3,4,4,4,5").
        #[arg(short, long)]
        rows: String,
    },

    /// Generate a random picture and solve the puzzle it defines.
    Random {
        #[arg(long, default_value_t = 10)]
        width: usize,

        #[arg(long, default_value_t = 10)]
        height: usize,

        /// Probability of a cell being filled.
        #[arg(long, default_value_t = 0.6)]
        density: f64,

        /// Seed for the generator. A fresh one is drawn and printed if omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during solving.
    #[arg(short, long, global = true, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check the solution against the clues.
    #[arg(short, long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub(crate) verify: bool,

    /// Print propagation and memory statistics after solving.
    #[arg(short, long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub(crate) stats: bool,

    /// Keep passing even when a pass makes no progress. Puzzles that need
    /// guessing will then never finish unless `--max-passes` is set.
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) no_stall_detection: bool,

    /// Give up after this many passes.
    #[arg(long, global = true)]
    pub(crate) max_passes: Option<usize>,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            debug: false,
            verify: true,
            stats: true,
            no_stall_detection: false,
            max_passes: None,
        }
    }
}

impl CommonOptions {
    /// The propagator configuration selected by these options.
    pub(crate) const fn config(&self) -> PropagatorConfig {
        PropagatorConfig::new()
            .with_stall_detection(!self.no_stall_detection)
            .with_max_passes(self.max_passes)
    }
}

/// Solves every puzzle file under a directory.
///
/// Files without the `.non` extension are skipped. Stops at the first
/// file that cannot be read or parsed; puzzles that fail to solve are
/// reported and the walk continues.
///
/// # Errors
///
/// If `path` is not a directory or a puzzle file is malformed.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    let mut failures = 0;
    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if file_path
            .extension()
            .is_none_or(|ext| ext != PUZZLE_EXTENSION)
        {
            log::debug!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        let time = Instant::now();
        let nonogram = parse_nonogram_file(file_path)
            .map_err(|e| format!("Error parsing {}: {e}", file_path.display()))?;
        let parse_time = time.elapsed();

        if let Err(e) = solve_and_report(&nonogram, common, Some(file_path), parse_time) {
            eprintln!("{e}");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} puzzle(s) could not be solved"));
    }
    Ok(())
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file doesn't exist, cannot be parsed, or the puzzle cannot be solved.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Nonogram file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = Instant::now();
    let nonogram =
        parse_nonogram_file(path).map_err(|e| format!("Error parsing nonogram file: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(&nonogram, common, Some(path), parse_time)
}

/// Solve a puzzle given as command-line clue lists.
///
/// # Errors
///
/// If a clue list is malformed or the puzzle cannot be solved.
pub(crate) fn solve_text(columns: &str, rows: &str, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let columns = parse_clue_list(columns).map_err(|e| format!("Invalid column clues: {e}"))?;
    let rows = parse_clue_list(rows).map_err(|e| format!("Invalid row clues: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(&Nonogram::new(columns, rows), common, None, parse_time)
}

/// Generate a random puzzle and solve it.
///
/// # Errors
///
/// If the puzzle cannot be solved by line logic.
pub(crate) fn solve_random(
    width: usize,
    height: usize,
    density: f64,
    seed: Option<u64>,
    common: &CommonOptions,
) -> Result<(), String> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Seed: {seed}");

    let time = Instant::now();
    let (nonogram, _) =
        generator::random_puzzle(width, height, density, seed).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    solve_and_report(&nonogram, common, None, parse_time)
}

/// Solves a puzzle and reports the board, the verification result and statistics.
///
/// On failure the partially solved board is still printed.
///
/// # Errors
///
/// If the propagator cannot be built, the solve fails, or verification fails.
pub(crate) fn solve_and_report(
    nonogram: &Nonogram,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<(), String> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }
    if common.debug {
        println!("Parsed Nonogram:\n{nonogram}");
    }

    let mut propagator = nonogram
        .propagator(common.config())
        .map_err(|e| e.to_string())?;

    advance_epoch();
    let time = Instant::now();
    let result = propagator.solve();
    let elapsed = time.elapsed();

    let (allocated_mib, resident_mib) = memory_usage();

    println!("{}", propagator.board());

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            nonogram,
            propagator.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    match result {
        Ok(solution) => {
            if common.verify {
                verify_solution(nonogram, &solution)?;
            }
            println!("\nSOLVED");
            Ok(())
        }
        Err(e @ (NonogramError::Stalled { .. } | NonogramError::PassLimitExceeded { .. })) => {
            println!("\nUNSOLVED");
            Err(e.to_string())
        }
        Err(e) => {
            println!("\nINCONSISTENT");
            Err(e.to_string())
        }
    }
}

/// Verifies a solution against the puzzle's clues.
///
/// # Errors
///
/// If any column or row of the solution does not reproduce its clue.
pub(crate) fn verify_solution(nonogram: &Nonogram, solution: &[Vec<bool>]) -> Result<(), String> {
    let ok = nonogram.verify(solution);
    println!("Verified: {ok:?}");
    if ok {
        Ok(())
    } else {
        Err("Solution failed verification!".to_string())
    }
}

fn advance_epoch() {
    if let Err(e) = epoch::advance() {
        log::debug!("Unable to advance jemalloc epoch: {e}");
    }
}

/// Allocated and resident memory in MiB, zero if jemalloc cannot report them.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn memory_usage() -> (f64, f64) {
    advance_epoch();

    let allocated_bytes = stats::allocated::mib()
        .and_then(|m| m.read())
        .unwrap_or_default();
    let resident_bytes = stats::resident::mib()
        .and_then(|m| m.read())
        .unwrap_or_default();

    (
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    )
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and propagation statistics.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    nonogram: &Nonogram,
    s: &PropagationStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Width", nonogram.width());
    stat_line("Height", nonogram.height());
    stat_line("Cells", nonogram.width() * nonogram.height());

    println!("=====================[ Propagation Statistics ]======================");
    stat_line("Passes", s.passes);
    stat_line_with_rate("Lines examined", s.lines_examined, elapsed_secs);
    stat_line_with_rate("Layouts generated", s.layouts_generated, elapsed_secs);
    stat_line_with_rate("Layouts compatible", s.layouts_compatible, elapsed_secs);
    stat_line_with_rate("Cells committed", s.cells_committed, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text_command() {
        let cli = Cli::try_parse_from([
            "nonogram",
            "text",
            "--columns",
            "1,0",
            "--rows",
            "1,0",
            "--debug",
            "--max-passes",
            "4",
        ])
        .unwrap();

        assert!(cli.common.debug);
        assert_eq!(cli.common.max_passes, Some(4));
        assert!(cli.common.verify);
        match cli.command {
            Some(Commands::Text { columns, rows }) => {
                assert_eq!(columns, "1,0");
                assert_eq!(rows, "1,0");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_options_before_subcommand() {
        let cli = Cli::try_parse_from([
            "nonogram",
            "--max-passes",
            "3",
            "--no-stall-detection",
            "text",
            "--columns",
            "1",
            "--rows",
            "1",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Text { .. })));
        let config = cli.common.config();
        assert_eq!(config.max_passes, Some(3));
        assert!(!config.stall_detection);
    }

    #[test]
    fn test_parse_bare_path() {
        let cli = Cli::try_parse_from(["nonogram", "puzzle.non"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("puzzle.non")));
        assert!(cli.command.is_none());
        assert!(!cli.common.debug);
    }

    #[test]
    fn test_verify_can_be_disabled() {
        let cli = Cli::try_parse_from(["nonogram", "file", "--path", "a.non", "--verify", "false"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::File { .. })));
        assert!(!cli.common.verify);
    }

    #[test]
    fn test_common_config() {
        let common = CommonOptions::default();
        assert!(common.config().stall_detection);
        assert_eq!(common.config().max_passes, None);

        let common = CommonOptions {
            no_stall_detection: true,
            max_passes: Some(9),
            ..CommonOptions::default()
        };
        assert!(!common.config().stall_detection);
        assert_eq!(common.config().max_passes, Some(9));
    }

    #[test]
    fn test_solve_text() {
        let common = CommonOptions {
            stats: false,
            ..CommonOptions::default()
        };
        assert!(solve_text("2 1,5,5,5,2", "3,4,4,4,5", &common).is_ok());
    }

    #[test]
    fn test_solve_text_ambiguous() {
        let common = CommonOptions {
            stats: false,
            ..CommonOptions::default()
        };
        let err = solve_text("1,1", "1,1", &common).unwrap_err();
        assert!(err.contains("line logic alone"));
    }

    #[test]
    fn test_solve_text_bad_clue() {
        let err = solve_text("1,x", "1", &CommonOptions::default()).unwrap_err();
        assert!(err.starts_with("Invalid column clues"));
    }

    #[test]
    fn test_solve_missing_file() {
        let err = solve_file(Path::new("/no/such/puzzle.non"), &CommonOptions::default())
            .unwrap_err();
        assert!(err.contains("does not exist"));
    }
}
