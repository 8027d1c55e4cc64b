//! Sensitivity grid definition and sequential runner.

mod axes;
mod error;
mod runner;
mod settings;

pub use axes::{GridCell, SensitivityGrid};
pub use error::GridError;
pub use runner::{run_sensitivity_grid, GridRow};
pub(crate) use runner::{base_generator, evaluate_cell, prepare_cell};
pub use settings::GridSettings;
