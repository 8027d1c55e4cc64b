//! Scenario evaluation.
//!
//! ```text
//! ScenarioParams ──► resolve evaluation day ──► simulate_gbm_paths
//!                                                   │
//!                        ScenarioResult ◄── payoff ◄┘ realised rates
//! ```
//!
//! [`evaluate_scenario`] returns mean / standard deviation of the FRA
//! settlement; [`analyse_hedge`] additionally returns the unhedged and
//! hedged cost distributions.

pub mod evaluator;
pub mod params;

pub use evaluator::{
    analyse_hedge, analyse_hedge_with_rng, evaluate_scenario, evaluate_scenario_with_rng,
    HedgeAnalysis, ScenarioResult,
};
pub use params::{
    ScenarioParams, ScenarioParamsBuilder, DEFAULT_DURATION, DEFAULT_HORIZON,
    DEFAULT_INITIAL_RATE, DEFAULT_NOTIONAL, DEFAULT_N_PATHS, DEFAULT_STRIKE, DEFAULT_TIME_STEP,
    DEFAULT_VOLATILITY,
};
