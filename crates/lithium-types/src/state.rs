// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{ALKALINE_EARTH_SALT_FACTOR, SECONDS_PER_HOUR};
use crate::error::{RecoveryError, RecoveryResult};

/// Salt additive charged to the mill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaltType {
    NaCl,
    KCl,
    CaCl2,
}

impl SaltType {
    /// Multiplier on the milling rate constant.
    pub fn rate_factor(self) -> f64 {
        match self {
            SaltType::CaCl2 => ALKALINE_EARTH_SALT_FACTOR,
            SaltType::NaCl | SaltType::KCl => 1.0,
        }
    }
}

/// Full input set for a single yield evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    /// Ore charge [g].
    pub ore_mass_g: f64,
    /// Lithium mass fraction of the ore.
    pub ore_lithium_fraction: f64,
    /// Milling time [h].
    pub milling_time_h: f64,
    pub ball_to_powder_ratio: f64,
    pub salt_type: SaltType,
    /// Leach contact time [s].
    pub leach_time_s: f64,
    /// Leach liquor temperature [K].
    pub leach_temperature_k: f64,
    pub precipitation_concentration: f64,
    pub impurity_index: f64,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        ProcessParameters {
            ore_mass_g: 100.0,
            ore_lithium_fraction: 0.015,
            milling_time_h: 2.0,
            ball_to_powder_ratio: 8.0,
            salt_type: SaltType::NaCl,
            leach_time_s: SECONDS_PER_HOUR,
            leach_temperature_k: 363.15,
            precipitation_concentration: 1.2,
            impurity_index: 0.1,
        }
    }
}

impl ProcessParameters {
    /// Lithium contained in the ore charge [g]; upper bound on any recovery.
    pub fn available_lithium_g(&self) -> f64 {
        self.ore_mass_g * self.ore_lithium_fraction
    }

    /// Reject values outside their physical domain.
    pub fn validate(&self) -> RecoveryResult<()> {
        let fields = [
            ("ore_mass_g", self.ore_mass_g),
            ("ore_lithium_fraction", self.ore_lithium_fraction),
            ("milling_time_h", self.milling_time_h),
            ("ball_to_powder_ratio", self.ball_to_powder_ratio),
            ("leach_time_s", self.leach_time_s),
            ("leach_temperature_k", self.leach_temperature_k),
            ("precipitation_concentration", self.precipitation_concentration),
            ("impurity_index", self.impurity_index),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(RecoveryError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.ore_mass_g <= 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "ore_mass_g must be > 0, got {}",
                self.ore_mass_g
            )));
        }
        if !(0.0..=1.0).contains(&self.ore_lithium_fraction) {
            return Err(RecoveryError::InvalidParameter(format!(
                "ore_lithium_fraction must be in [0, 1], got {}",
                self.ore_lithium_fraction
            )));
        }
        if self.milling_time_h < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "milling_time_h must be >= 0, got {}",
                self.milling_time_h
            )));
        }
        if self.ball_to_powder_ratio <= 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "ball_to_powder_ratio must be > 0, got {}",
                self.ball_to_powder_ratio
            )));
        }
        if self.leach_time_s < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "leach_time_s must be >= 0, got {}",
                self.leach_time_s
            )));
        }
        if self.leach_temperature_k <= 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "leach_temperature_k must be > 0, got {}",
                self.leach_temperature_k
            )));
        }
        if self.precipitation_concentration < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "precipitation_concentration must be >= 0, got {}",
                self.precipitation_concentration
            )));
        }
        if self.impurity_index < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "impurity_index must be >= 0, got {}",
                self.impurity_index
            )));
        }
        Ok(())
    }
}

/// Stage efficiencies of one evaluation, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyResult {
    pub milling_conversion: f64,
    pub leach_efficiency: f64,
    /// Precipitation efficiency before the impurity penalty.
    pub precipitation_efficiency: f64,
    /// Multiplier in [0.7, 1.0] applied to precipitation.
    pub impurity_penalty: f64,
    pub adjusted_precipitation_efficiency: f64,
}

impl EfficiencyResult {
    /// Product of the three stage efficiencies (penalty included).
    pub fn overall(&self) -> f64 {
        self.milling_conversion * self.leach_efficiency * self.adjusted_precipitation_efficiency
    }
}

/// Recovered lithium for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldOutcome {
    /// Recovered lithium [g].
    pub recovered_lithium_g: f64,
    /// Lithium in the ore charge [g].
    pub available_lithium_g: f64,
    pub efficiencies: EfficiencyResult,
}

impl YieldOutcome {
    /// Recovered fraction of the available lithium; zero for a lithium-free charge.
    pub fn yield_fraction(&self) -> f64 {
        if self.available_lithium_g > 0.0 {
            self.recovered_lithium_g / self.available_lithium_g
        } else {
            0.0
        }
    }
}

/// Deterministic nominal-condition run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    pub parameters: ProcessParameters,
    pub outcome: YieldOutcome,
    pub overall_yield_fraction: f64,
}

/// P10/P50/P90 of a sampled output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSummary {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Outcome of a seeded Monte Carlo run, in draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub seed: u64,
    pub outcomes: Vec<YieldOutcome>,
    pub summary: PercentileSummary,
}

impl MonteCarloResult {
    /// Recovered lithium masses [g] in draw order.
    pub fn recovered_masses(&self) -> Vec<f64> {
        self.outcomes.iter().map(|o| o.recovered_lithium_g).collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
