//! Aggregate computations and the per-run summary record.

use serde::Serialize;
use tracing::info;

use crate::buffer::SortedSamples;
use crate::error::{Result, StatsError};
use crate::math::babylonian_sqrt;

/// Descriptive statistics for one run over a sample set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    pub harmonic_mean: f64,
    /// Buffer capacity left over after ingestion.
    pub unused_capacity: usize,
}

impl Summary {
    /// Computes every aggregate over `samples`, in the order mean, median,
    /// mode, standard deviation, harmonic mean.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyInput`] when there are no samples, and the
    /// harmonic mean errors when a sample is zero or the reciprocals cancel.
    pub fn from_samples(samples: &SortedSamples) -> Result<Self> {
        let values = samples.as_slice();

        let mean = mean(values)?;
        let median = median_of_sorted(values)?;
        let mode = mode_of_sorted(values)?;
        let std_dev = std_dev(values, mean)?;
        let harmonic_mean = harmonic_mean(values)?;

        let summary = Summary {
            count: values.len(),
            mean,
            median,
            mode,
            std_dev,
            harmonic_mean,
            unused_capacity: samples.unused_capacity(),
        };

        info!(
            count = summary.count,
            capacity = samples.capacity(),
            "Summary computed"
        );

        Ok(summary)
    }
}

fn ensure_non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        Err(StatsError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation around a precomputed `mean`.
pub fn std_dev(values: &[f64], mean: f64) -> Result<f64> {
    ensure_non_empty(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();

    Ok(babylonian_sqrt(sum_sq / values.len() as f64))
}

/// Median of an ascending slice. Even lengths average the two middle values.
pub fn median_of_sorted(sorted: &[f64]) -> Result<f64> {
    ensure_non_empty(sorted)?;
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value of an ascending slice, found as the longest run of
/// equal neighbours.
///
/// Only a strictly longer run replaces the current mode, so among runs of
/// equal length the first (smallest value) wins; with all values distinct
/// the mode is the minimum.
///
/// The trailing run is compared as well. A sweep that only scores a run when
/// the next different value appears would never consider it, and would
/// report `1.0` for `[1, 1, 5, 5, 5]`; this function reports `5.0`.
pub fn mode_of_sorted(sorted: &[f64]) -> Result<f64> {
    ensure_non_empty(sorted)?;

    let mut mode = sorted[0];
    let mut max_count = 1;

    for run in sorted.chunk_by(|a, b| a == b) {
        if run.len() > max_count {
            max_count = run.len();
            mode = run[0];
        }
    }

    Ok(mode)
}

/// Harmonic mean, `n / Σ(1/x)`.
///
/// # Errors
///
/// [`StatsError::DivisionByZero`] names the first zero sample;
/// [`StatsError::ZeroReciprocalSum`] covers samples whose reciprocals cancel
/// out, such as `[1, -1]`; [`StatsError::NonFiniteHarmonicMean`] covers
/// subnormal samples whose reciprocals overflow.
pub fn harmonic_mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values)?;

    if let Some(index) = values.iter().position(|&v| v == 0.0) {
        return Err(StatsError::DivisionByZero { index });
    }

    let reciprocal_sum: f64 = values.iter().map(|v| 1.0 / v).sum();
    if !reciprocal_sum.is_finite() {
        return Err(StatsError::NonFiniteHarmonicMean);
    }
    if reciprocal_sum == 0.0 {
        return Err(StatsError::ZeroReciprocalSum);
    }

    let result = values.len() as f64 / reciprocal_sum;
    if !result.is_finite() {
        return Err(StatsError::NonFiniteHarmonicMean);
    }
    Ok(result)
}
