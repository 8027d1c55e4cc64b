//! # FRA Risk (L3: Application)
//!
//! Sensitivity sweeps of the FRA hedge across a Cartesian grid of initial
//! rates, volatilities and maturities.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              fra_risk (L3)              │
//! ├─────────────────────────────────────────┤
//! │  grid/      - axes, settings, runner    │
//! │  parallel/  - Rayon grid runner         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             fra_pricing (L2)            │
//! │  GBM simulator and scenario evaluator   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Every cell is simulated with its own seed derived from the base seed and
//! the cell's row-major index, so the sequential and parallel runners
//! produce identical tables.
//!
//! ## Example
//!
//! ```
//! use fra_risk::{run_sensitivity_grid, GridSettings, SensitivityGrid};
//!
//! let grid = SensitivityGrid::new(
//!     vec![12_000.0, 14_000.0],
//!     vec![0.1, 0.2],
//!     vec![0.25],
//! );
//! let settings = GridSettings {
//!     n_paths: 200,
//!     seed: Some(42),
//!     ..GridSettings::default()
//! };
//!
//! let rows = run_sensitivity_grid(&grid, &settings).unwrap();
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[1].volatility, 0.2);
//! ```

#![deny(missing_docs)]

pub mod grid;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use grid::{run_sensitivity_grid, GridCell, GridError, GridRow, GridSettings, SensitivityGrid};
#[cfg(feature = "parallel")]
pub use parallel::run_sensitivity_grid_parallel;
