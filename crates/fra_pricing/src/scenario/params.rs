//! Scenario parameters.
//!
//! [`ScenarioParams`] is immutable; construct it through
//! [`ScenarioParamsBuilder`], which fills in the desk defaults and validates
//! everything that can be checked without simulating.

use fra_core::types::{FraResult, TimeGrid};

use crate::fra::FraContract;
use crate::mc::{check_path_count, GbmParams};

/// Default initial freight rate (USD/day).
pub const DEFAULT_INITIAL_RATE: f64 = 15_000.0;
/// Default annualised volatility.
pub const DEFAULT_VOLATILITY: f64 = 0.2;
/// Default simulated horizon in years.
pub const DEFAULT_HORIZON: f64 = 1.0;
/// Default FRA strike (USD/day).
pub const DEFAULT_STRIKE: f64 = 14_500.0;
/// Default notional (charter days).
pub const DEFAULT_NOTIONAL: f64 = 100.0;
/// Default contract duration: one month.
pub const DEFAULT_DURATION: f64 = 1.0 / 12.0;
/// Default step: one trading day.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 252.0;
/// Default number of simulated paths.
pub const DEFAULT_N_PATHS: usize = 1_000;

/// One FRA hedge scenario.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::scenario::ScenarioParams;
///
/// let params = ScenarioParams::builder()
///     .initial_rate(15_000.0)
///     .volatility(0.25)
///     .horizon(0.25)
///     .seed(42)
///     .build()
///     .expect("valid scenario");
///
/// assert_eq!(params.strike(), 14_500.0);
/// assert_eq!(params.n_paths(), 1_000);
/// assert_eq!(params.time_grid().n_steps(), 63);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioParams {
    gbm: GbmParams,
    contract: FraContract,
    grid: TimeGrid,
    n_paths: usize,
    evaluation_day: Option<usize>,
    seed: Option<u64>,
}

impl ScenarioParams {
    /// Creates a builder pre-filled with the defaults.
    #[inline]
    pub fn builder() -> ScenarioParamsBuilder {
        ScenarioParamsBuilder::default()
    }

    /// Builder seeded with these parameters, for deriving variants.
    pub fn to_builder(&self) -> ScenarioParamsBuilder {
        ScenarioParamsBuilder {
            initial_rate: self.gbm.initial_rate,
            drift: self.gbm.drift,
            volatility: self.gbm.volatility,
            horizon: self.gbm.horizon,
            time_step: self.gbm.time_step,
            n_paths: self.n_paths,
            strike: self.contract.strike,
            notional: self.contract.notional,
            duration: self.contract.duration,
            evaluation_day: self.evaluation_day,
            seed: self.seed,
        }
    }

    /// Process parameters.
    #[inline]
    pub fn gbm(&self) -> &GbmParams {
        &self.gbm
    }

    /// Contract terms.
    #[inline]
    pub fn contract(&self) -> &FraContract {
        &self.contract
    }

    /// Simulation grid implied by horizon and time step.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Initial rate S₀.
    #[inline]
    pub fn initial_rate(&self) -> f64 {
        self.gbm.initial_rate
    }

    /// Drift μ.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.gbm.drift
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.gbm.volatility
    }

    /// Horizon T in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.gbm.horizon
    }

    /// Time step Δt in years.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.gbm.time_step
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// FRA strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.contract.strike
    }

    /// FRA notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.contract.notional
    }

    /// Contract duration in years.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.contract.duration
    }

    /// Explicit settlement step, if supplied.
    #[inline]
    pub fn evaluation_day(&self) -> Option<usize> {
        self.evaluation_day
    }

    /// Seed for the path simulator, if supplied.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Settlement step: the explicit one, or the one implied by the duration.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationDayOutOfRange` when the step falls outside the grid.
    pub fn resolve_evaluation_day(&self) -> FraResult<usize> {
        self.grid
            .evaluation_day(self.evaluation_day, self.contract.duration)
    }
}

/// Builder for [`ScenarioParams`].
///
/// Every field starts at its default, so only the values that differ need
/// to be set.
#[derive(Clone, Debug)]
pub struct ScenarioParamsBuilder {
    initial_rate: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
    time_step: f64,
    n_paths: usize,
    strike: f64,
    notional: f64,
    duration: f64,
    evaluation_day: Option<usize>,
    seed: Option<u64>,
}

impl Default for ScenarioParamsBuilder {
    fn default() -> Self {
        Self {
            initial_rate: DEFAULT_INITIAL_RATE,
            drift: 0.0,
            volatility: DEFAULT_VOLATILITY,
            horizon: DEFAULT_HORIZON,
            time_step: DEFAULT_TIME_STEP,
            n_paths: DEFAULT_N_PATHS,
            strike: DEFAULT_STRIKE,
            notional: DEFAULT_NOTIONAL,
            duration: DEFAULT_DURATION,
            evaluation_day: None,
            seed: None,
        }
    }
}

impl ScenarioParamsBuilder {
    /// Sets the initial rate S₀.
    #[inline]
    pub fn initial_rate(mut self, initial_rate: f64) -> Self {
        self.initial_rate = initial_rate;
        self
    }

    /// Sets the drift μ.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the volatility σ.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the simulated horizon T (years).
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the time step Δt (years).
    #[inline]
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Sets the number of paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the FRA strike.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Sets the notional.
    #[inline]
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Sets the contract duration (years).
    #[inline]
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Pins the settlement step instead of deriving it from the duration.
    #[inline]
    pub fn evaluation_day(mut self, evaluation_day: usize) -> Self {
        self.evaluation_day = Some(evaluation_day);
        self
    }

    /// Sets or clears the settlement step.
    #[inline]
    pub fn maybe_evaluation_day(mut self, evaluation_day: Option<usize>) -> Self {
        self.evaluation_day = evaluation_day;
        self
    }

    /// Sets the simulator seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the simulator seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the parameters.
    ///
    /// The settlement step is not checked here; the evaluator resolves it
    /// and reports `EvaluationDayOutOfRange` with the computed index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - the process parameters are invalid (see [`GbmParams::time_grid`])
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`](crate::mc::MAX_PATHS)
    /// - the contract terms are invalid (see [`FraContract::new`])
    pub fn build(self) -> FraResult<ScenarioParams> {
        let gbm = GbmParams::new(
            self.initial_rate,
            self.drift,
            self.volatility,
            self.horizon,
            self.time_step,
        );
        let grid = gbm.time_grid()?;

        check_path_count(self.n_paths)?;

        let contract = FraContract::new(self.strike, self.notional, self.duration)?;

        Ok(ScenarioParams {
            gbm,
            contract,
            grid,
            n_paths: self.n_paths,
            evaluation_day: self.evaluation_day,
            seed: self.seed,
        })
    }
}
