//! # fra_pricing: Simulation and Pricing Engine (Layer 2)
//!
//! ## Layer 2 Role
//!
//! fra_pricing turns scenario parameters into PnL statistics:
//! - Seeded random number generation (`rng`)
//! - Freight-rate path simulation under GBM (`mc`)
//! - FRA settlement and hedged / unhedged cost model (`fra`)
//! - Scenario evaluation (`scenario`)
//!
//! Data flows one way: `mc` → `fra` → `scenario`.
//!
//! ## Usage Example
//!
//! ```rust
//! use fra_pricing::scenario::{analyse_hedge, ScenarioParams};
//!
//! let params = ScenarioParams::builder()
//!     .initial_rate(15_000.0)
//!     .volatility(0.25)
//!     .horizon(0.25)
//!     .strike(14_500.0)
//!     .notional(100.0)
//!     .duration(1.0 / 12.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let analysis = analyse_hedge(&params).unwrap();
//! let fixed = 14_500.0 * 100.0 / 12.0;
//! assert!((analysis.hedged_summary.mean - fixed).abs() < 1e-6);
//! assert!(analysis.unhedged_summary.mean != analysis.hedged_summary.mean);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for [`scenario::ScenarioResult`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod fra;
pub mod mc;
pub mod rng;
pub mod scenario;

pub use fra::FraContract;
pub use mc::{simulate_freight_paths, simulate_gbm_paths, GbmParams, PathMatrix};
pub use rng::SimulationRng;
pub use scenario::{analyse_hedge, evaluate_scenario, HedgeAnalysis, ScenarioParams, ScenarioResult};
