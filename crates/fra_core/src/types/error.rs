//! Error types for structured error handling.
//!
//! This module provides [`FraError`], the single error type raised by the
//! simulation, payoff and scenario layers. Every variant is an invalid
//! configuration: the engine is deterministic numerical code, so there is no
//! transient failure mode and nothing is retried.

use thiserror::Error;

/// Convenience alias used throughout the engine.
pub type FraResult<T> = Result<T, FraError>;

/// Categorised configuration errors.
///
/// # Variants
/// - `InvalidConfiguration`: A scenario or simulation parameter is out of range
/// - `EvaluationDayOutOfRange`: The settlement step does not exist on the simulated grid
///
/// # Examples
/// ```
/// use fra_core::types::FraError;
///
/// let err = FraError::invalid("horizon", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid configuration for 'horizon': must be positive, got 0"
/// );
///
/// let err = FraError::EvaluationDayOutOfRange { index: -1, n_steps: 63 };
/// assert!(err.is_invalid_configuration());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FraError {
    /// A parameter failed validation.
    #[error("Invalid configuration for '{parameter}': {reason}")]
    InvalidConfiguration {
        /// Offending parameter name
        parameter: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// Resolved or supplied evaluation day falls outside `[0, n_steps - 1]`.
    #[error(
        "Invalid configuration: evaluation day {index} outside simulated range [0, {}]",
        .n_steps.saturating_sub(1)
    )]
    EvaluationDayOutOfRange {
        /// Computed (possibly negative) step index
        index: i64,
        /// Number of simulated time steps
        n_steps: usize,
    },
}

impl FraError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    /// Returns `true` for every configuration failure.
    ///
    /// Both variants describe a caller-side configuration problem; callers that
    /// only care about the error kind can branch on this.
    #[inline]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::EvaluationDayOutOfRange { .. }
        )
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { parameter, .. } => parameter,
            Self::EvaluationDayOutOfRange { .. } => "evaluation_day",
        }
    }
}

/// Checks that `value` is finite and strictly positive.
pub fn ensure_positive(parameter: &'static str, value: f64) -> FraResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FraError::invalid(
            parameter,
            format!("must be positive and finite, got {}", value),
        ))
    }
}

/// Checks that `value` is finite and non-negative.
pub fn ensure_non_negative(parameter: &'static str, value: f64) -> FraResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FraError::invalid(
            parameter,
            format!("must be non-negative and finite, got {}", value),
        ))
    }
}

/// Checks that `value` is finite.
pub fn ensure_finite(parameter: &'static str, value: f64) -> FraResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FraError::invalid(
            parameter,
            format!("must be finite, got {}", value),
        ))
    }
}
