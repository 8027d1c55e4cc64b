//! Summary statistics for simulated PnL distributions.
//!
//! Standard deviations are population (divide by `n`) figures, so a single
//! path yields a standard deviation of zero rather than `NaN`.

use crate::types::error::{FraError, FraResult};

/// Arithmetic mean; `NaN` for an empty slice.
#[inline]
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation; `NaN` for an empty slice.
///
/// Two-pass formulation to avoid cancellation on large, tightly clustered
/// values (freight rates are quoted in the tens of thousands).
pub fn std_dev(samples: &[f64]) -> f64 {
    let m = mean(samples);
    let variance = samples
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

/// Moments and range of a sample.
///
/// # Examples
///
/// ```rust
/// use fra_core::math::statistics::DistributionSummary;
///
/// let summary = DistributionSummary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.std_dev, 2.0);
/// assert_eq!(summary.min, 2.0);
/// assert_eq!(summary.max, 9.0);
/// assert_eq!(summary.count, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSummary {
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl DistributionSummary {
    /// Summarises a non-empty sample.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an empty sample.
    pub fn from_samples(samples: &[f64]) -> FraResult<Self> {
        if samples.is_empty() {
            return Err(FraError::invalid("samples", "cannot summarise an empty distribution"));
        }

        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Ok(Self {
            mean: mean(samples),
            std_dev: std_dev(samples),
            min,
            max,
            count: samples.len(),
        })
    }
}
