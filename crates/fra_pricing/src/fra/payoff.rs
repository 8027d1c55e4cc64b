//! FRA settlement cashflows and hedged / unhedged costs.
//!
//! For a charterer paying a floating freight rate over `duration` years on
//! `notional` units, an FRA struck at `strike` settles
//!
//! ```text
//! payoff        = (realised − strike) × notional × duration
//! unhedged cost =  realised           × notional × duration
//! hedged cost   =  unhedged cost − payoff  (= strike × notional × duration)
//! ```
//!
//! The hedged cost carries no dependence on the realised rate: that is the
//! whole point of the hedge, and the tests below pin it down.
//!
//! Inputs are assumed validated upstream (see [`FraContract::new`]); the
//! functions themselves never fail.

use fra_core::types::error::{ensure_finite, ensure_positive};
use fra_core::types::FraResult;

use crate::mc::PathMatrix;

/// FRA contract terms.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::fra::FraContract;
///
/// let contract = FraContract::new(14_500.0, 100.0, 1.0 / 12.0).unwrap();
/// assert_eq!(contract.payoff(14_500.0), 0.0);
/// assert!(contract.payoff(15_000.0) > 0.0);
/// assert!((contract.hedged_cost(17_321.0) - contract.fixed_cost()).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FraContract {
    /// Agreed fixed rate.
    pub strike: f64,
    /// Scaling from rate difference to cash (e.g. charter days × contracts).
    pub notional: f64,
    /// Contract duration in years.
    pub duration: f64,
}

impl FraContract {
    /// Creates validated contract terms.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `strike` or `notional` is not
    /// finite, or `duration` is not positive and finite.
    pub fn new(strike: f64, notional: f64, duration: f64) -> FraResult<Self> {
        ensure_finite("strike", strike)?;
        ensure_finite("notional", notional)?;
        ensure_positive("duration", duration)?;
        Ok(Self {
            strike,
            notional,
            duration,
        })
    }

    /// Cash amount per unit of rate.
    #[inline]
    fn scale(&self) -> f64 {
        self.notional * self.duration
    }

    /// Settlement cashflow received by the FRA buyer.
    #[inline]
    pub fn payoff(&self, realized: f64) -> f64 {
        (realized - self.strike) * self.scale()
    }

    /// Floating cost without the hedge.
    #[inline]
    pub fn unhedged_cost(&self, realized: f64) -> f64 {
        realized * self.scale()
    }

    /// Floating cost net of the FRA settlement.
    #[inline]
    pub fn hedged_cost(&self, realized: f64) -> f64 {
        self.unhedged_cost(realized) - self.payoff(realized)
    }

    /// Cost locked in by the hedge, `strike × notional × duration`.
    #[inline]
    pub fn fixed_cost(&self) -> f64 {
        self.strike * self.scale()
    }
}

impl Default for FraContract {
    fn default() -> Self {
        Self {
            strike: 14_500.0,
            notional: 100.0,
            duration: 1.0 / 12.0,
        }
    }
}

/// Vectorised [`FraContract::payoff`].
pub fn payoff(realized: &[f64], strike: f64, notional: f64, duration: f64) -> Vec<f64> {
    let contract = FraContract {
        strike,
        notional,
        duration,
    };
    realized.iter().map(|&r| contract.payoff(r)).collect()
}

/// Vectorised [`FraContract::unhedged_cost`].
pub fn unhedged_cost(realized: &[f64], notional: f64, duration: f64) -> Vec<f64> {
    let scale = notional * duration;
    realized.iter().map(|&r| r * scale).collect()
}

/// Vectorised [`FraContract::hedged_cost`].
pub fn hedged_cost(realized: &[f64], strike: f64, notional: f64, duration: f64) -> Vec<f64> {
    let contract = FraContract {
        strike,
        notional,
        duration,
    };
    realized.iter().map(|&r| contract.hedged_cost(r)).collect()
}

/// Payoff distribution of `contract` settled on `eval_day` of `paths`.
///
/// # Errors
///
/// Returns `EvaluationDayOutOfRange` if `eval_day` is not a simulated column.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::fra::{simulate_fra_pnl, FraContract};
/// use fra_pricing::mc::{simulate_freight_paths, GbmParams};
///
/// let params = GbmParams { horizon: 0.25, volatility: 0.25, ..GbmParams::default() };
/// let paths = simulate_freight_paths(&params, 1_000, Some(42)).unwrap();
/// let pnl = simulate_fra_pnl(&paths, &FraContract::default(), 21).unwrap();
/// assert_eq!(pnl.len(), 1_000);
/// ```
pub fn simulate_fra_pnl(
    paths: &PathMatrix,
    contract: &FraContract,
    eval_day: usize,
) -> FraResult<Vec<f64>> {
    let realized = paths.realized_rates(eval_day)?;
    Ok(payoff(
        &realized,
        contract.strike,
        contract.notional,
        contract.duration,
    ))
}
