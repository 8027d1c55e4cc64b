//! FRA payoff model.
//!
//! Pure functions: no validation beyond [`FraContract::new`], no side effects.

pub mod payoff;

pub use payoff::{hedged_cost, payoff, simulate_fra_pnl, unhedged_cost, FraContract};
