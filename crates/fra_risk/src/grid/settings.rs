//! Parameters held fixed across a sweep.

use fra_pricing::scenario::{
    DEFAULT_DURATION, DEFAULT_N_PATHS, DEFAULT_NOTIONAL, DEFAULT_STRIKE, DEFAULT_TIME_STEP,
};

/// Contract and simulation settings shared by every grid cell.
///
/// Validation happens per cell, so an invalid setting is reported against
/// the first cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSettings {
    /// FRA strike.
    pub strike: f64,
    /// FRA notional.
    pub notional: f64,
    /// FRA duration in years.
    pub duration: f64,
    /// Simulation step in years.
    pub time_step: f64,
    /// Paths per cell.
    pub n_paths: usize,
    /// Annualised drift.
    pub drift: f64,
    /// Explicit settlement step; resolved from `duration` when absent.
    pub evaluation_day: Option<usize>,
    /// Base seed from which per-cell seeds are derived; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            strike: DEFAULT_STRIKE,
            notional: DEFAULT_NOTIONAL,
            duration: DEFAULT_DURATION,
            time_step: DEFAULT_TIME_STEP,
            n_paths: DEFAULT_N_PATHS,
            drift: 0.0,
            evaluation_day: None,
            seed: None,
        }
    }
}
