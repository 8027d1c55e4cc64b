//! Freight-rate path generation.
//!
//! Geometric Brownian Motion discretised with the log-space (exact) step:
//!
//! ```text
//! S(t+Δt) = S(t) × exp((μ − ½σ²)Δt + σ√Δt × Z)
//! ```
//!
//! The normal draws are consumed step by step: at every step a fresh vector
//! of `n_paths` variates is drawn and applied across all paths. Paths are
//! independent of one another and correlated in time only through the
//! running product.

use fra_core::types::error::{ensure_finite, ensure_non_negative, ensure_positive};
use fra_core::types::{FraError, FraResult, TimeGrid};

use super::matrix::PathMatrix;
use crate::rng::SimulationRng;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Parameters of the simulated freight-rate process.
///
/// # Model
///
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use fra_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     initial_rate: 15_000.0,
///     drift: 0.0,
///     volatility: 0.25,
///     horizon: 0.25,
///     time_step: 1.0 / 252.0,
/// };
/// assert_eq!(params.time_grid().unwrap().n_steps(), 63);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial rate S₀ (e.g. USD per day of charter).
    pub initial_rate: f64,
    /// Drift μ - annualised.
    pub drift: f64,
    /// Volatility σ - annualised.
    pub volatility: f64,
    /// Simulated horizon T - in years.
    pub horizon: f64,
    /// Step size Δt - in years.
    pub time_step: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(initial_rate: f64, drift: f64, volatility: f64, horizon: f64, time_step: f64) -> Self {
        Self {
            initial_rate,
            drift,
            volatility,
            horizon,
            time_step,
        }
    }

    /// Validates the parameters and returns the simulation grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - `initial_rate` is not positive and finite
    /// - `drift` is not finite
    /// - `volatility` is negative or not finite
    /// - `horizon` / `time_step` are not positive or yield an empty grid
    pub fn time_grid(&self) -> FraResult<TimeGrid> {
        ensure_positive("initial_rate", self.initial_rate)?;
        ensure_finite("drift", self.drift)?;
        ensure_non_negative("volatility", self.volatility)?;
        TimeGrid::new(self.horizon, self.time_step)
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            initial_rate: 15_000.0,
            drift: 0.0,
            volatility: 0.2,
            horizon: 1.0,
            time_step: 1.0 / 252.0,
        }
    }
}

/// Rejects path counts outside `[1, MAX_PATHS]`.
pub(crate) fn check_path_count(n_paths: usize) -> FraResult<()> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(FraError::invalid(
            "n_paths",
            format!("must be in range [1, {}], got {}", MAX_PATHS, n_paths),
        ));
    }
    Ok(())
}

/// Simulates `n_paths` GBM trajectories.
///
/// # Errors
///
/// Returns `InvalidConfiguration` for invalid [`GbmParams`] or a path count
/// outside `[1, MAX_PATHS]`.
///
/// # Algorithm
///
/// 1. Precompute `drift_dt = (μ − ½σ²)Δt` and `vol_sqrt_dt = σ√Δt`
/// 2. Set column 0 to S₀ for every path
/// 3. For each step t ≥ 1, draw Z ∈ ℝᴺ and set S[i][t] = S[i][t−1] × exp(drift_dt + vol_sqrt_dt × Z[i])
///
/// # Examples
///
/// ```rust
/// use fra_pricing::mc::{simulate_gbm_paths, GbmParams};
/// use fra_pricing::rng::SimulationRng;
///
/// let mut rng = SimulationRng::from_seed(42);
/// let paths = simulate_gbm_paths(&GbmParams::default(), 100, &mut rng).unwrap();
///
/// assert_eq!(paths.shape(), (100, 252));
/// assert!(paths.column(0).iter().all(|&s| s == 15_000.0));
/// ```
pub fn simulate_gbm_paths(
    params: &GbmParams,
    n_paths: usize,
    rng: &mut SimulationRng,
) -> FraResult<PathMatrix> {
    let grid = params.time_grid()?;
    check_path_count(n_paths)?;

    let n_steps = grid.n_steps();
    let dt = grid.time_step();

    // Precompute drift and volatility terms
    let drift_dt = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let mut data = vec![0.0; n_paths * n_steps];
    for path_idx in 0..n_paths {
        data[path_idx * n_steps] = params.initial_rate;
    }

    let mut z = vec![0.0; n_paths];
    for step in 1..n_steps {
        rng.fill_normal(&mut z);
        for (path_idx, &shock) in z.iter().enumerate() {
            let offset = path_idx * n_steps + step;
            data[offset] = data[offset - 1] * (drift_dt + vol_sqrt_dt * shock).exp();
        }
    }

    Ok(PathMatrix::from_raw(data, n_paths, grid))
}

/// Simulates freight-rate paths with a freshly built generator.
///
/// With `Some(seed)` the result is bit-for-bit reproducible; with `None` the
/// generator is seeded from entropy.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::mc::{simulate_freight_paths, GbmParams};
///
/// let params = GbmParams::default();
/// let a = simulate_freight_paths(&params, 50, Some(7)).unwrap();
/// let b = simulate_freight_paths(&params, 50, Some(7)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate_freight_paths(
    params: &GbmParams,
    n_paths: usize,
    seed: Option<u64>,
) -> FraResult<PathMatrix> {
    let mut rng = SimulationRng::from_optional_seed(seed);
    simulate_gbm_paths(params, n_paths, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn quarterly(volatility: f64) -> GbmParams {
        GbmParams::new(15_000.0, 0.0, volatility, 0.25, 1.0 / 252.0)
    }

    #[test]
    fn test_gbm_params_default() {
        let params = GbmParams::default();
        assert_eq!(params.initial_rate, 15_000.0);
        assert_eq!(params.drift, 0.0);
        assert_eq!(params.volatility, 0.2);
        assert_eq!(params.horizon, 1.0);
    }

    #[test]
    fn test_gbm_params_validation() {
        assert!(GbmParams::default().time_grid().is_ok());

        let invalid = [
            GbmParams::new(0.0, 0.0, 0.2, 1.0, 0.01),        // zero rate
            GbmParams::new(-1.0, 0.0, 0.2, 1.0, 0.01),       // negative rate
            GbmParams::new(100.0, 0.0, -0.2, 1.0, 0.01),     // negative vol
            GbmParams::new(100.0, 0.0, 0.2, 0.0, 0.01),      // zero horizon
            GbmParams::new(100.0, 0.0, 0.2, 1.0, 0.0),       // zero step
            GbmParams::new(100.0, f64::NAN, 0.2, 1.0, 0.01), // NaN drift
        ];
        for params in &invalid {
            assert!(params.time_grid().is_err(), "{:?} should be rejected", params);
        }
    }

    #[test]
    fn test_shape() {
        let mut rng = SimulationRng::from_seed(1);
        let paths = simulate_gbm_paths(&quarterly(0.25), 10, &mut rng).unwrap();
        assert_eq!(paths.shape(), (10, 63));
        assert_eq!(paths.as_slice().len(), 630);
        assert_eq!(paths.rows().count(), 10);
    }

    #[test]
    fn test_initial_column() {
        let mut rng = SimulationRng::from_seed(42);
        let paths = simulate_gbm_paths(&quarterly(0.25), 500, &mut rng).unwrap();
        for row in paths.rows() {
            assert_eq!(row[0], 15_000.0);
        }
    }

    #[test]
    fn test_positive_rates() {
        let mut rng = SimulationRng::from_seed(42);
        let params = GbmParams::new(15_000.0, 0.1, 0.8, 1.0, 1.0 / 252.0);
        let paths = simulate_gbm_paths(&params, 200, &mut rng).unwrap();
        for &rate in paths.as_slice() {
            assert!(rate > 0.0 && rate.is_finite(), "rate must be positive: {}", rate);
        }
    }

    #[test]
    fn test_zero_volatility_zero_drift_is_constant() {
        let mut rng = SimulationRng::from_seed(3);
        let paths = simulate_gbm_paths(&quarterly(0.0), 20, &mut rng).unwrap();
        assert!(paths.as_slice().iter().all(|&s| s == 15_000.0));
    }

    #[test]
    fn test_zero_volatility_with_drift_is_deterministic() {
        let mut rng = SimulationRng::from_seed(3);
        let params = GbmParams::new(100.0, 0.05, 0.0, 1.0, 0.25);
        let paths = simulate_gbm_paths(&params, 3, &mut rng).unwrap();
        for row in paths.rows() {
            for (step, &rate) in row.iter().enumerate() {
                let expected = 100.0 * (0.05 * 0.25 * step as f64).exp();
                assert_relative_eq!(rate, expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_single_step_grid() {
        let mut rng = SimulationRng::from_seed(3);
        let params = GbmParams::new(100.0, 0.0, 0.3, 0.01, 0.01);
        let paths = simulate_gbm_paths(&params, 4, &mut rng).unwrap();
        assert_eq!(paths.shape(), (4, 1));
        assert_eq!(paths.column(0), vec![100.0; 4]);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let params = GbmParams::new(100.0, 0.0, 0.3, 0.001, 1.0 / 252.0);
        let err = simulate_freight_paths(&params, 10, Some(1)).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_path_count_bounds() {
        let params = quarterly(0.2);
        assert!(matches!(
            simulate_freight_paths(&params, 0, Some(1)),
            Err(FraError::InvalidConfiguration {
                parameter: "n_paths",
                ..
            })
        ));
        assert!(simulate_freight_paths(&params, MAX_PATHS + 1, Some(1)).is_err());
    }

    #[test]
    fn test_reproducibility() {
        let a = simulate_freight_paths(&quarterly(0.25), 100, Some(12345)).unwrap();
        let b = simulate_freight_paths(&quarterly(0.25), 100, Some(12345)).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_different_seeds() {
        let a = simulate_freight_paths(&quarterly(0.25), 10, Some(1)).unwrap();
        let b = simulate_freight_paths(&quarterly(0.25), 10, Some(2)).unwrap();
        assert!(a.as_slice().iter().zip(b.as_slice()).any(|(x, y)| x != y));
    }

    #[test]
    fn test_step_major_draw_order() {
        // Step 1 of path i uses the i-th variate of the first draw vector.
        let params = GbmParams::new(100.0, 0.0, 0.2, 0.5, 0.25);
        let paths = simulate_freight_paths(&params, 3, Some(77)).unwrap();

        let mut rng = SimulationRng::from_seed(77);
        let mut z = vec![0.0; 3];
        rng.fill_normal(&mut z);
        let dt: f64 = 0.25;
        let step_one = paths.column(1);
        for (path_idx, &shock) in z.iter().enumerate() {
            let expected = 100.0 * ((-0.5 * 0.04) * dt + 0.2 * dt.sqrt() * shock).exp();
            assert_relative_eq!(step_one[path_idx], expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_realized_rates_bounds() {
        let paths = simulate_freight_paths(&quarterly(0.25), 5, Some(9)).unwrap();
        assert_eq!(paths.realized_rates(62).unwrap().len(), 5);
        assert!(matches!(
            paths.realized_rates(63),
            Err(FraError::EvaluationDayOutOfRange {
                index: 63,
                n_steps: 63
            })
        ));
    }

    #[test]
    fn test_martingale_mean() {
        // Zero drift: E[S(T)] = S(0)
        let paths = simulate_freight_paths(&quarterly(0.25), 50_000, Some(2024)).unwrap();
        let terminals = paths.column(paths.n_steps() - 1);
        let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;
        assert_relative_eq!(mean, 15_000.0, max_relative = 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_paths_start_at_initial_rate_and_stay_positive(
            initial_rate in 1.0f64..100_000.0,
            volatility in 0.0f64..1.5,
            seed in any::<u64>(),
        ) {
            let params = GbmParams::new(initial_rate, 0.0, volatility, 0.1, 1.0 / 252.0);
            let paths = simulate_freight_paths(&params, 16, Some(seed)).unwrap();
            for row in paths.rows() {
                prop_assert_eq!(row[0], initial_rate);
                prop_assert!(row.iter().all(|&s| s > 0.0));
            }
        }
    }
}
