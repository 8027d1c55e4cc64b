//! Core configuration and time types.
//!
//! This module provides:
//! - `error`: Structured error type shared by every layer of the engine
//! - `time_grid`: Discrete simulation grid and the evaluation-day mapping
//!
//! # Re-exports
//!
//! - [`FraError`], [`FraResult`] from `error`
//! - [`TimeGrid`] from `time_grid`

pub mod error;
pub mod time_grid;

pub use error::{FraError, FraResult};
pub use time_grid::TimeGrid;
