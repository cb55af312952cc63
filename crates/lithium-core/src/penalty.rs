// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Impurity Penalty
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precipitation correction for impurities co-dissolved during milling.

use lithium_types::constants::{PENALTY_AMPLITUDE, PENALTY_CONVERSION_SLOPE, PENALTY_FLOOR};
use ndarray::Array1;

/// Multiplier on raw precipitation efficiency:
///   clamp(1 − 0.15 / (1 + 0.4·X_mill), 0.7, 1.0)
pub fn impurity_penalty(milling_conversion: f64) -> f64 {
    let denom = 1.0 + PENALTY_CONVERSION_SLOPE * milling_conversion;
    (1.0 - PENALTY_AMPLITUDE / denom).clamp(PENALTY_FLOOR, 1.0)
}

/// Elementwise [`impurity_penalty`].
pub fn impurity_penalty_array(milling_conversion: &Array1<f64>) -> Array1<f64> {
    milling_conversion.mapv(impurity_penalty)
}
