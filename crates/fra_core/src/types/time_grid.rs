//! Discrete simulation time grid.
//!
//! A [`TimeGrid`] maps a horizon `T` and a step `Δt` (both in years) onto
//! `M = floor(T / Δt)` simulated columns, column 0 being the valuation date.
//! It also owns the mapping from a contract duration to the step at which the
//! realised rate is read for settlement.

use super::error::{ensure_positive, FraError, FraResult};

/// Tolerance added before flooring `T / Δt`.
///
/// Ratios such as `0.25 / (1.0 / 252.0)` can land a few ulps below the
/// integer they represent.
pub const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Simulation grid of `n_steps` columns spaced `time_step` years apart.
///
/// # Examples
///
/// ```rust
/// use fra_core::types::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 1.0 / 252.0).unwrap();
/// assert_eq!(grid.n_steps(), 252);
/// assert_eq!(grid.last_index(), 251);
/// assert!((grid.steps_per_year() - 252.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    horizon: f64,
    time_step: f64,
    n_steps: usize,
}

impl TimeGrid {
    /// Creates a grid, failing if it would contain no column.
    ///
    /// # Errors
    ///
    /// Returns `FraError::InvalidConfiguration` if:
    /// - `horizon` or `time_step` is not positive and finite
    /// - `floor(horizon / time_step)` is 0
    pub fn new(horizon: f64, time_step: f64) -> FraResult<Self> {
        ensure_positive("horizon", horizon)?;
        ensure_positive("time_step", time_step)?;

        let ratio = (horizon / time_step + STEP_COUNT_TOLERANCE).floor();
        if ratio < 1.0 {
            return Err(FraError::invalid(
                "horizon",
                format!(
                    "horizon {} shorter than one time step {} yields an empty grid",
                    horizon, time_step
                ),
            ));
        }
        if !ratio.is_finite() || ratio > usize::MAX as f64 {
            return Err(FraError::invalid(
                "time_step",
                format!("step count {} is not representable", ratio),
            ));
        }

        Ok(Self {
            horizon,
            time_step,
            n_steps: ratio as usize,
        })
    }

    /// Horizon `T` in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Step size `Δt` in years.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of simulated columns `M` (always at least 1).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Last valid column index `M - 1`.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.n_steps - 1
    }

    /// Grid steps per year, `1 / Δt`.
    #[inline]
    pub fn steps_per_year(&self) -> f64 {
        1.0 / self.time_step
    }

    /// Year fraction of column `step`.
    #[inline]
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.time_step
    }

    /// Resolves the default settlement step for a contract of `duration` years.
    ///
    /// Computes `min(floor(duration × steps_per_year) − 1, M − 1)`: only
    /// whole steps covered by the contract count. The product is floored
    /// with [`STEP_COUNT_TOLERANCE`] so that `1/12 × 252` still counts 21
    /// steps. The result is capped at the last simulated column, so the
    /// index never exceeds the matrix width.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `duration` is not positive and finite
    /// - `EvaluationDayOutOfRange` carrying the computed index when it is
    ///   negative, i.e. the contract is shorter than one grid step
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fra_core::types::{FraError, TimeGrid};
    ///
    /// let grid = TimeGrid::new(0.25, 1.0 / 252.0).unwrap();
    /// assert_eq!(grid.resolve_evaluation_day(1.0 / 12.0).unwrap(), 20);
    ///
    /// // Longer than the simulated horizon: capped at the last column
    /// assert_eq!(grid.resolve_evaluation_day(1.0).unwrap(), 62);
    ///
    /// // Shorter than one day: no valid settlement step
    /// assert!(matches!(
    ///     grid.resolve_evaluation_day(1.0 / 365.0),
    ///     Err(FraError::EvaluationDayOutOfRange { index: -1, .. })
    /// ));
    /// ```
    pub fn resolve_evaluation_day(&self, duration: f64) -> FraResult<usize> {
        ensure_positive("duration", duration)?;

        let raw = (duration * self.steps_per_year() + STEP_COUNT_TOLERANCE).floor();
        // Saturate absurdly long durations; they are capped below anyway.
        let raw = if raw >= i64::MAX as f64 {
            i64::MAX
        } else {
            raw as i64
        };
        let index = (raw - 1).min(self.last_index() as i64);

        if index < 0 {
            return Err(FraError::EvaluationDayOutOfRange {
                index,
                n_steps: self.n_steps,
            });
        }
        Ok(index as usize)
    }

    /// Validates an explicitly supplied settlement step.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationDayOutOfRange` if `index >= M`.
    pub fn check_evaluation_day(&self, index: usize) -> FraResult<usize> {
        if index < self.n_steps {
            Ok(index)
        } else {
            Err(FraError::EvaluationDayOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                n_steps: self.n_steps,
            })
        }
    }

    /// Uses `explicit` when supplied, otherwise derives the step from `duration`.
    pub fn evaluation_day(&self, explicit: Option<usize>, duration: f64) -> FraResult<usize> {
        match explicit {
            Some(index) => self.check_evaluation_day(index),
            None => self.resolve_evaluation_day(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const DAILY: f64 = 1.0 / 252.0;

    #[test]
    fn test_step_count_daily_quarter() {
        let grid = TimeGrid::new(0.25, DAILY).unwrap();
        assert_eq!(grid.n_steps(), 63);
        assert_eq!(grid.last_index(), 62);
    }

    #[test]
    fn test_step_count_truncates_partial_step() {
        let grid = TimeGrid::new(1.0, 0.3).unwrap();
        assert_eq!(grid.n_steps(), 3);
    }

    #[test]
    fn test_step_count_tolerance_intentionally_counts_step_lost_to_division_noise() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996; plain truncation would
        // give 2 columns, the tolerance deliberately keeps 3
        let grid = TimeGrid::new(0.3, 0.1).unwrap();
        assert_eq!(grid.n_steps(), 3);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let err = TimeGrid::new(0.001, DAILY).unwrap_err();
        assert!(matches!(
            err,
            FraError::InvalidConfiguration {
                parameter: "horizon",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(TimeGrid::new(0.0, DAILY).is_err());
        assert!(TimeGrid::new(-1.0, DAILY).is_err());
        assert!(TimeGrid::new(1.0, 0.0).is_err());
        assert!(TimeGrid::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_time_at() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        assert_relative_eq!(grid.time_at(2), 0.5);
        assert_relative_eq!(grid.horizon(), 1.0);
        assert_relative_eq!(grid.time_step(), 0.25);
    }

    #[test]
    fn test_resolve_one_month() {
        let grid = TimeGrid::new(1.0, DAILY).unwrap();
        assert_eq!(grid.resolve_evaluation_day(1.0 / 12.0).unwrap(), 20);
    }

    #[test]
    fn test_resolve_capped_at_last_column() {
        let grid = TimeGrid::new(0.25, DAILY).unwrap();
        assert_eq!(grid.resolve_evaluation_day(0.5).unwrap(), 62);
    }

    #[test]
    fn test_resolve_partial_step_is_not_counted() {
        let grid = TimeGrid::new(1.0, DAILY).unwrap();
        // 252 / 365 = 0.69 of a step: no whole step elapses
        assert_eq!(
            grid.resolve_evaluation_day(1.0 / 365.0).unwrap_err(),
            FraError::EvaluationDayOutOfRange {
                index: -1,
                n_steps: 252
            }
        );
        assert_eq!(grid.resolve_evaluation_day(1.6 / 252.0).unwrap(), 0);
        assert_eq!(grid.resolve_evaluation_day(21.6 / 252.0).unwrap(), 20);
    }

    #[test]
    fn test_resolve_negative_index_fails() {
        let grid = TimeGrid::new(1.0, DAILY).unwrap();
        let err = grid.resolve_evaluation_day(1.0 / 1000.0).unwrap_err();
        assert_eq!(
            err,
            FraError::EvaluationDayOutOfRange {
                index: -1,
                n_steps: 252
            }
        );
    }

    #[test]
    fn test_resolve_invalid_duration() {
        let grid = TimeGrid::new(1.0, DAILY).unwrap();
        assert!(matches!(
            grid.resolve_evaluation_day(0.0),
            Err(FraError::InvalidConfiguration {
                parameter: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_explicit_evaluation_day() {
        let grid = TimeGrid::new(0.25, DAILY).unwrap();
        assert_eq!(grid.evaluation_day(Some(21), 1.0 / 12.0).unwrap(), 21);
        assert_eq!(grid.evaluation_day(Some(62), 1.0 / 12.0).unwrap(), 62);
        assert_eq!(grid.evaluation_day(None, 1.0 / 12.0).unwrap(), 20);
        assert_eq!(
            grid.evaluation_day(Some(63), 1.0 / 12.0).unwrap_err(),
            FraError::EvaluationDayOutOfRange {
                index: 63,
                n_steps: 63
            }
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_resolved_index_within_grid(
            horizon in 0.01f64..5.0,
            duration in 0.002f64..10.0,
        ) {
            let grid = TimeGrid::new(horizon, DAILY).unwrap();
            if let Ok(index) = grid.resolve_evaluation_day(duration) {
                prop_assert!(index < grid.n_steps());
            }
        }
    }
}
