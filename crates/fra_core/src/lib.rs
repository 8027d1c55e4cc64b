//! # fra_core: Foundation for the FRA Freight Hedge Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! fra_core is the bottom layer of the workspace, providing:
//! - Error types: [`FraError`] (`types::error`)
//! - Simulation time grid and evaluation-day mapping: [`TimeGrid`] (`types::time_grid`)
//! - Distribution statistics: [`DistributionSummary`] (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other fra_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use fra_core::math::statistics::DistributionSummary;
//! use fra_core::types::TimeGrid;
//!
//! // Quarterly horizon on a daily grid
//! let grid = TimeGrid::new(0.25, 1.0 / 252.0).unwrap();
//! assert_eq!(grid.n_steps(), 63);
//!
//! // One-month contract settles on step 20
//! assert_eq!(grid.resolve_evaluation_day(1.0 / 12.0).unwrap(), 20);
//!
//! let summary = DistributionSummary::from_samples(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(summary.mean, 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for [`DistributionSummary`] and [`FraError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::statistics::DistributionSummary;
pub use types::{FraError, FraResult, TimeGrid};
