//! Grid failure type.

use fra_core::types::FraError;
use thiserror::Error;

use super::axes::GridCell;

/// A grid cell failed to evaluate.
///
/// Carries the parameter triple of the first failing cell in row-major order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Grid cell (initial_rate={initial_rate}, volatility={volatility}, maturity={maturity}) failed: {source}"
)]
pub struct GridError {
    /// Initial rate of the failing cell
    pub initial_rate: f64,
    /// Volatility of the failing cell
    pub volatility: f64,
    /// Maturity of the failing cell
    pub maturity: f64,
    /// Underlying engine error
    #[source]
    pub source: FraError,
}

impl GridError {
    pub(crate) fn at(cell: &GridCell, source: FraError) -> Self {
        Self {
            initial_rate: cell.initial_rate,
            volatility: cell.volatility,
            maturity: cell.maturity,
            source,
        }
    }
}
