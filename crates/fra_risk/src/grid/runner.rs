//! Sequential grid runner.

use fra_pricing::rng::SimulationRng;
use fra_pricing::scenario::{evaluate_scenario, ScenarioParams};
use tracing::debug;

use super::axes::{GridCell, SensitivityGrid};
use super::error::GridError;
use super::settings::GridSettings;

/// Payoff statistics of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRow {
    /// Initial rate S₀
    pub initial_rate: f64,
    /// Annualised volatility σ
    pub volatility: f64,
    /// Simulated horizon T in years
    pub maturity: f64,
    /// Mean FRA settlement
    pub mean_pnl: f64,
    /// Population standard deviation of the FRA settlement
    pub std_pnl: f64,
}

/// Base generator of the sweep, entropy-seeded when no seed is configured.
pub(crate) fn base_generator(settings: &GridSettings) -> SimulationRng {
    SimulationRng::from_optional_seed(settings.seed)
}

/// Builds and checks the scenario for `cell` without simulating.
pub(crate) fn prepare_cell(
    cell: &GridCell,
    settings: &GridSettings,
    base: &SimulationRng,
) -> Result<ScenarioParams, GridError> {
    let params = ScenarioParams::builder()
        .initial_rate(cell.initial_rate)
        .volatility(cell.volatility)
        .horizon(cell.maturity)
        .drift(settings.drift)
        .time_step(settings.time_step)
        .n_paths(settings.n_paths)
        .strike(settings.strike)
        .notional(settings.notional)
        .duration(settings.duration)
        .maybe_evaluation_day(settings.evaluation_day)
        .seed(base.derive(cell.index as u64).seed())
        .build()
        .map_err(|e| GridError::at(cell, e))?;

    params
        .resolve_evaluation_day()
        .map_err(|e| GridError::at(cell, e))?;

    Ok(params)
}

/// Simulates a prepared cell.
pub(crate) fn evaluate_cell(cell: &GridCell, params: &ScenarioParams) -> Result<GridRow, GridError> {
    let result = evaluate_scenario(params).map_err(|e| GridError::at(cell, e))?;

    debug!(
        index = cell.index,
        initial_rate = cell.initial_rate,
        volatility = cell.volatility,
        maturity = cell.maturity,
        mean_pnl = result.mean,
        std_pnl = result.std_dev,
        "grid cell evaluated"
    );

    Ok(GridRow {
        initial_rate: cell.initial_rate,
        volatility: cell.volatility,
        maturity: cell.maturity,
        mean_pnl: result.mean,
        std_pnl: result.std_dev,
    })
}

/// Evaluates every cell of `grid` in row-major order.
///
/// # Errors
///
/// Stops at the first failing cell and returns its parameter triple with the
/// underlying error.
pub fn run_sensitivity_grid(
    grid: &SensitivityGrid,
    settings: &GridSettings,
) -> Result<Vec<GridRow>, GridError> {
    let base = base_generator(settings);
    debug!(cells = grid.len(), base_seed = base.seed(), "running sensitivity grid");

    let mut rows = Vec::with_capacity(grid.len());
    for cell in grid.cells() {
        let params = prepare_cell(&cell, settings, &base)?;
        rows.push(evaluate_cell(&cell, &params)?);
    }
    Ok(rows)
}
