// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Molar gas constant (J/(mol·K)).
pub const R_GAS: f64 = 8.314462618;

/// Offset between Celsius and Kelvin.
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Floor applied to saturation-type denominators.
pub const DENOM_EPS: f64 = 1e-12;

// ── Milling ──────────────────────────────────────────────────────────

/// Base first-order mechanochemical conversion rate (1/h).
pub const K_MILL_BASE_PER_H: f64 = 0.9;

/// BPR at which the enhancement factor reaches half its maximum gain.
pub const BPR_SAT: f64 = 10.0;

/// Maximum fractional rate gain from ball loading.
pub const BPR_MAX_GAIN: f64 = 0.6;

/// Rate multiplier for the alkaline-earth chloride additive (CaCl2).
pub const ALKALINE_EARTH_SALT_FACTOR: f64 = 1.2;

// ── Leaching ─────────────────────────────────────────────────────────

/// Apparent activation energy of the leach (J/mol).
pub const LEACH_EA_J_PER_MOL: f64 = 45_000.0;

/// Arrhenius pre-exponential factor (1/s).
/// Calibrated so that 1 h at 90 °C extracts 95 % of the accessible lithium.
pub const LEACH_K0_PER_S: f64 = 2470.404367986790;

/// Calibration point: 90 °C.
pub const LEACH_REFERENCE_T_K: f64 = 90.0 + ZERO_CELSIUS_K;

/// Calibration point: 1 h.
pub const LEACH_REFERENCE_TIME_S: f64 = SECONDS_PER_HOUR;

// ── Precipitation ────────────────────────────────────────────────────

/// Saturation concentration of the clean liquor.
pub const C_SAT_BASE: f64 = 0.9;

/// Increase of saturation concentration per unit impurity index.
pub const C_SAT_IMPURITY_SLOPE: f64 = 0.3;

/// Hill exponent of the nucleation/growth response.
pub const HILL_EXPONENT: i32 = 3;

/// Exponential suppression rate of precipitation by impurities.
pub const IMPURITY_SUPPRESSION: f64 = 1.2;

// ── Impurity penalty ─────────────────────────────────────────────────

/// Penalty amplitude at zero milling conversion.
pub const PENALTY_AMPLITUDE: f64 = 0.15;

/// Conversion sensitivity of the penalty denominator.
pub const PENALTY_CONVERSION_SLOPE: f64 = 0.4;

/// Lowest admissible precipitation multiplier.
pub const PENALTY_FLOOR: f64 = 0.7;
