//! Monte Carlo path simulation for freight rates.
//!
//! # Architecture
//!
//! ```text
//! simulate_freight_paths(params, n_paths, seed)
//! └── simulate_gbm_paths(params, n_paths, &mut SimulationRng)
//!     ├── GbmParams::time_grid()   (validation, M = floor(T/Δt))
//!     └── PathMatrix               (N × M, row-major, immutable)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fra_pricing::mc::{simulate_freight_paths, GbmParams};
//!
//! let params = GbmParams {
//!     initial_rate: 15_000.0,
//!     drift: 0.0,
//!     volatility: 0.25,
//!     horizon: 0.25,
//!     time_step: 1.0 / 252.0,
//! };
//! let paths = simulate_freight_paths(&params, 1_000, Some(42)).unwrap();
//!
//! // Realised rates one month in
//! let realized = paths.realized_rates(21).unwrap();
//! assert_eq!(realized.len(), 1_000);
//! ```

pub mod matrix;
pub mod paths;

pub use matrix::PathMatrix;
pub use paths::{simulate_freight_paths, simulate_gbm_paths, GbmParams, MAX_PATHS};
pub(crate) use paths::check_path_count;
