//! Rayon-based grid runner.
//!
//! Cells are validated sequentially first, which is cheap and reproduces the
//! sequential runner's first error exactly. Simulation then runs on the
//! Rayon pool; `collect` preserves input order.

use rayon::prelude::*;
use tracing::debug;

use crate::grid::{
    base_generator, evaluate_cell, prepare_cell, GridError, GridRow, GridSettings,
    SensitivityGrid,
};

/// Parallel counterpart of [`run_sensitivity_grid`](crate::run_sensitivity_grid).
///
/// Returns the same rows in the same order, or the same first-in-order
/// error, as the sequential runner for the same base seed.
///
/// # Examples
///
/// ```
/// use fra_risk::{run_sensitivity_grid, run_sensitivity_grid_parallel, GridSettings, SensitivityGrid};
///
/// let grid = SensitivityGrid::new(vec![12_000.0, 14_000.0], vec![0.1, 0.2], vec![0.25]);
/// let settings = GridSettings { n_paths: 100, seed: Some(1), ..GridSettings::default() };
///
/// assert_eq!(
///     run_sensitivity_grid_parallel(&grid, &settings).unwrap(),
///     run_sensitivity_grid(&grid, &settings).unwrap(),
/// );
/// ```
pub fn run_sensitivity_grid_parallel(
    grid: &SensitivityGrid,
    settings: &GridSettings,
) -> Result<Vec<GridRow>, GridError> {
    let base = base_generator(settings);
    debug!(
        cells = grid.len(),
        base_seed = base.seed(),
        threads = rayon::current_num_threads(),
        "running sensitivity grid in parallel"
    );

    let prepared = grid
        .cells()
        .map(|cell| prepare_cell(&cell, settings, &base).map(|params| (cell, params)))
        .collect::<Result<Vec<_>, _>>()?;

    prepared
        .par_iter()
        .map(|(cell, params)| evaluate_cell(cell, params))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
