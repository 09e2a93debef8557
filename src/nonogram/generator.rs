#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Seeded random puzzles.
//!
//! A random picture is drawn cell by cell and its clues are read back off
//! it. The picture always satisfies the clues, but nothing guarantees it is
//! the only one that does, or that line logic can find it.

use crate::nonogram::error::Result;
use crate::nonogram::puzzle::Nonogram;
use fastrand::Rng;

/// A `width` x `height` picture indexed `[x][y]`, each cell filled with
/// probability `density` (clamped to `0.0..=1.0`).
#[must_use]
pub fn random_grid(width: usize, height: usize, density: f64, seed: u64) -> Vec<Vec<bool>> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = Rng::with_seed(seed);
    (0..width)
        .map(|_| (0..height).map(|_| rng.f64() < density).collect())
        .collect()
}

/// A random picture together with the puzzle it defines.
///
/// # Errors
///
/// Never fails for grids built by [`random_grid`]; the `Result` comes from
/// [`Nonogram::from_solution`].
pub fn random_puzzle(
    width: usize,
    height: usize,
    density: f64,
    seed: u64,
) -> Result<(Nonogram, Vec<Vec<bool>>)> {
    let grid = random_grid(width, height, density, seed);
    let nonogram = Nonogram::from_solution(&grid)?;
    Ok((nonogram, grid))
}
