//! Numerical helpers.
//!
//! - [`statistics`]: mean / standard deviation summaries of PnL distributions

pub mod statistics;
