// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Kinetics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stage efficiencies for mechanochemical milling, Arrhenius leaching and
//! Hill-type precipitation.
//!
//! Every function is pure and total: out-of-range intermediates are clamped,
//! never rejected, and each result lies in [0, 1]. The `*_array` forms apply
//! the scalar law elementwise.

use lithium_types::constants::{
    BPR_MAX_GAIN, BPR_SAT, C_SAT_BASE, C_SAT_IMPURITY_SLOPE, DENOM_EPS, HILL_EXPONENT,
    IMPURITY_SUPPRESSION, K_MILL_BASE_PER_H, LEACH_EA_J_PER_MOL, LEACH_K0_PER_S, R_GAS,
};
use lithium_types::state::SaltType;
use ndarray::{Array1, Zip};

/// Dimensionless rate enhancement from ball loading:
///   f_BPR = 1 + 0.6·(BPR/BPR_sat) / (1 + BPR/BPR_sat)
///
/// Saturates at 1.6 for very high loadings.
pub fn bpr_enhancement(ball_to_powder_ratio: f64) -> f64 {
    let x = ball_to_powder_ratio.max(0.0) / BPR_SAT;
    1.0 + BPR_MAX_GAIN * x / (1.0 + x)
}

/// First-order milling rate constant [1/h].
pub fn milling_rate_constant(salt_type: SaltType, ball_to_powder_ratio: f64) -> f64 {
    K_MILL_BASE_PER_H * bpr_enhancement(ball_to_powder_ratio) * salt_type.rate_factor()
}

/// Mechanochemical conversion after `milling_time_h` hours:
///   X = 1 − exp(−k·max(t, 0))
pub fn milling_conversion(
    milling_time_h: f64,
    salt_type: SaltType,
    ball_to_powder_ratio: f64,
) -> f64 {
    let k = milling_rate_constant(salt_type, ball_to_powder_ratio);
    let t = milling_time_h.max(0.0);
    (1.0 - (-k * t).exp()).clamp(0.0, 1.0)
}

/// Arrhenius leach rate constant [1/s]: k_L = k0·exp(−Ea / (R·T)).
pub fn leach_rate_constant(leach_temperature_k: f64) -> f64 {
    let t = leach_temperature_k.max(DENOM_EPS);
    LEACH_K0_PER_S * (-LEACH_EA_J_PER_MOL / (R_GAS * t)).exp()
}

/// Fraction of accessible lithium leached after `leach_time_s` seconds.
pub fn leach_efficiency(leach_time_s: f64, leach_temperature_k: f64) -> f64 {
    let k = leach_rate_constant(leach_temperature_k);
    (1.0 - (-k * leach_time_s).exp()).clamp(0.0, 1.0)
}

/// Saturation concentration of the pregnant liquor; impurities raise solubility.
pub fn saturation_concentration(impurity_index: f64) -> f64 {
    C_SAT_BASE + C_SAT_IMPURITY_SLOPE * impurity_index
}

/// Precipitation efficiency before the impurity penalty.
///
///   S = max(C / max(C_sat, ε), 0)
///   η = S³/(1 + S³) · exp(−1.2·I)
pub fn precipitation_efficiency(concentration: f64, impurity_index: f64) -> f64 {
    let c_sat = saturation_concentration(impurity_index).max(DENOM_EPS);
    let s = (concentration / c_sat).max(0.0);
    let s_n = s.powi(HILL_EXPONENT);
    let kinetic = if s_n.is_finite() { s_n / (1.0 + s_n) } else { 1.0 };
    let suppression = (-IMPURITY_SUPPRESSION * impurity_index).exp();
    (kinetic * suppression).clamp(0.0, 1.0)
}

/// Elementwise [`milling_conversion`] over paired time / BPR samples.
pub fn milling_conversion_array(
    milling_time_h: &Array1<f64>,
    salt_type: SaltType,
    ball_to_powder_ratio: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(milling_time_h)
        .and(ball_to_powder_ratio)
        .map_collect(|&t, &bpr| milling_conversion(t, salt_type, bpr))
}

/// Elementwise [`leach_efficiency`].
pub fn leach_efficiency_array(
    leach_time_s: &Array1<f64>,
    leach_temperature_k: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(leach_time_s)
        .and(leach_temperature_k)
        .map_collect(|&t, &temp| leach_efficiency(t, temp))
}

/// Elementwise [`precipitation_efficiency`].
pub fn precipitation_efficiency_array(
    concentration: &Array1<f64>,
    impurity_index: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(concentration)
        .and(impurity_index)
        .map_collect(|&c, &i| precipitation_efficiency(c, i))
}
