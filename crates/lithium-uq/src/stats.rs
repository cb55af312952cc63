// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Summary Statistics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Percentiles and descriptive statistics of Monte Carlo outputs.
//!
//! Percentiles use linear interpolation between order statistics:
//! rank = q/100 · (n − 1).

use lithium_types::error::{RecoveryError, RecoveryResult};
use lithium_types::state::PercentileSummary;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a sampled output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStatistics {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: PercentileSummary,
}

/// Equal-width histogram; `edges.len() == counts.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

fn sorted_finite(values: &[f64]) -> RecoveryResult<Vec<f64>> {
    if values.is_empty() {
        return Err(RecoveryError::EmptyResultSet);
    }
    if let Some((idx, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(RecoveryError::InvalidParameter(format!(
            "outcome[{idx}] must be finite, got {v}"
        )));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// q-th percentile, q ∈ [0, 100].
pub fn percentile(values: &[f64], q: f64) -> RecoveryResult<f64> {
    if !q.is_finite() || !(0.0..=100.0).contains(&q) {
        return Err(RecoveryError::InvalidParameter(format!(
            "percentile must be in [0, 100], got {q}"
        )));
    }
    let sorted = sorted_finite(values)?;
    Ok(percentile_sorted(&sorted, q))
}

/// P10 / P50 / P90 of `values`.
pub fn summarize(values: &[f64]) -> RecoveryResult<PercentileSummary> {
    let sorted = sorted_finite(values)?;
    Ok(PercentileSummary {
        p10: percentile_sorted(&sorted, 10.0),
        p50: percentile_sorted(&sorted, 50.0),
        p90: percentile_sorted(&sorted, 90.0),
    })
}

pub fn describe(values: &[f64]) -> RecoveryResult<OutcomeStatistics> {
    let sorted = sorted_finite(values)?;
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let var = sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;

    Ok(OutcomeStatistics {
        count: n,
        mean,
        std_dev: var.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        percentiles: PercentileSummary {
            p10: percentile_sorted(&sorted, 10.0),
            p50: percentile_sorted(&sorted, 50.0),
            p90: percentile_sorted(&sorted, 90.0),
        },
    })
}

/// Bin `values` into `bins` equal-width bins spanning [min, max].
/// A degenerate range is widened to [v − 0.5, v + 0.5].
pub fn histogram(values: &[f64], bins: usize) -> RecoveryResult<Histogram> {
    if bins == 0 {
        return Err(RecoveryError::InvalidParameter(
            "histogram requires bins >= 1".to_string(),
        ));
    }
    let sorted = sorted_finite(values)?;
    let (mut lo, mut hi) = (sorted[0], sorted[sorted.len() - 1]);
    if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }
    if !(hi - lo).is_finite() {
        return Err(RecoveryError::InvalidParameter(format!(
            "histogram range [{lo}, {hi}] exceeds f64 span"
        )));
    }
    let width = (hi - lo) / bins as f64;

    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for v in &sorted {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Ok(Histogram { edges, counts })
}

/// Fraction of `values` strictly above `threshold`.
pub fn exceedance_probability(values: &[f64], threshold: f64) -> RecoveryResult<f64> {
    let sorted = sorted_finite(values)?;
    let above = sorted.iter().filter(|&&v| v > threshold).count();
    Ok(above as f64 / sorted.len() as f64)
}
