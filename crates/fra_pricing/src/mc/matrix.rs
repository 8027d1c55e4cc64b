//! Simulated path storage.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * n_steps + step_idx]`
//! where `step_idx = 0` holds the initial rate.

use fra_core::types::{FraResult, TimeGrid};

/// Immutable `n_paths × n_steps` matrix of simulated rates.
///
/// Each row is one trajectory; column 0 is the initial rate for every row.
/// Only the simulator constructs matrices, so the invariants hold for every
/// value of this type.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_paths: usize,
    grid: TimeGrid,
}

impl PathMatrix {
    pub(crate) fn from_raw(data: Vec<f64>, n_paths: usize, grid: TimeGrid) -> Self {
        debug_assert_eq!(data.len(), n_paths * grid.n_steps());
        Self {
            data,
            n_paths,
            grid,
        }
    }

    /// Number of simulated paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.grid.n_steps()
    }

    /// Time grid the paths were simulated on.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// `(n_paths, n_steps)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_paths, self.n_steps())
    }

    /// Iterator over trajectories.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_steps())
    }

    /// Cross-section of all paths at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step >= n_steps`; use [`realized_rates`](Self::realized_rates)
    /// for a checked variant.
    pub fn column(&self, step: usize) -> Vec<f64> {
        assert!(step < self.n_steps(), "step {} out of bounds", step);
        self.rows().map(|row| row[step]).collect()
    }

    /// Realised rate vector at the settlement step.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationDayOutOfRange` if `eval_day >= n_steps`.
    pub fn realized_rates(&self, eval_day: usize) -> FraResult<Vec<f64>> {
        let step = self.grid.check_evaluation_day(eval_day)?;
        Ok(self.column(step))
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
