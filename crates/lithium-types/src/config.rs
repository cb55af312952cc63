// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, RecoveryResult};
use crate::state::ProcessParameters;

/// Top-level run configuration.
/// Maps 1:1 to configs/default_config.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    pub run_name: String,
    /// Nominal process point. Ore mass, salt and leach time are also held
    /// fixed from here across every Monte Carlo trial.
    pub baseline: ProcessParameters,
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig {
            run_name: "Nominal-Spodumene-Run".to_string(),
            baseline: ProcessParameters::default(),
            monte_carlo: MonteCarloConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    #[serde(default = "default_n_trials")]
    pub n_trials: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub distributions: DistributionSpec,
}

fn default_n_trials() -> usize {
    1000
}
fn default_seed() -> u64 {
    42
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            n_trials: default_n_trials(),
            seed: default_seed(),
            distributions: DistributionSpec::default(),
        }
    }
}

/// Normal draw clamped to a closed physical interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedNormal {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl ClampedNormal {
    pub fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        ClampedNormal {
            mean,
            std_dev,
            min,
            max,
        }
    }

    fn validate(&self, label: &str) -> RecoveryResult<()> {
        if !self.mean.is_finite() || !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "{label}: mean must be finite and std_dev finite and >= 0"
            )));
        }
        validate_bounds(label, self.min, self.max)
    }
}

/// Log-normal draw parameterised by its median, clamped afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedLogNormal {
    /// Follows the baseline lithium fraction when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    /// Standard deviation of ln(x).
    pub log_sigma: f64,
    pub min: f64,
    pub max: f64,
}

impl ClampedLogNormal {
    /// Median of the draw, falling back to `nominal`.
    pub fn median_or(&self, nominal: f64) -> f64 {
        self.median.unwrap_or(nominal)
    }

    fn validate(&self, label: &str) -> RecoveryResult<()> {
        if let Some(median) = self.median {
            if !median.is_finite() || median <= 0.0 {
                return Err(RecoveryError::InvalidParameter(format!(
                    "{label}: median must be finite and > 0"
                )));
            }
        }
        if !self.log_sigma.is_finite() || self.log_sigma < 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "{label}: log_sigma must be finite and >= 0"
            )));
        }
        validate_bounds(label, self.min, self.max)
    }
}

/// Shared process-intensity factor. A single standard-normal z per trial
/// raises BPR and shortens milling time together. Absent nominals follow
/// the baseline BPR and milling time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityCoupling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpr_nominal: Option<f64>,
    /// BPR = nominal + bpr_per_sigma·z, with bpr_per_sigma >= 0
    pub bpr_per_sigma: f64,
    pub bpr_bounds: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milling_time_nominal_h: Option<f64>,
    /// t_mill = nominal − milling_time_per_sigma_h·z, with milling_time_per_sigma_h >= 0
    pub milling_time_per_sigma_h: f64,
    pub milling_time_bounds_h: [f64; 2],
}

impl Default for IntensityCoupling {
    fn default() -> Self {
        IntensityCoupling {
            bpr_nominal: None,
            bpr_per_sigma: 1.0,
            bpr_bounds: [5.0, 10.0],
            milling_time_nominal_h: None,
            milling_time_per_sigma_h: 0.5,
            milling_time_bounds_h: [0.5, 3.5],
        }
    }
}

impl IntensityCoupling {
    pub fn bpr_nominal_or(&self, nominal: f64) -> f64 {
        self.bpr_nominal.unwrap_or(nominal)
    }

    pub fn milling_time_nominal_or(&self, nominal_h: f64) -> f64 {
        self.milling_time_nominal_h.unwrap_or(nominal_h)
    }

    fn validate(&self) -> RecoveryResult<()> {
        for (name, v) in [
            ("bpr_nominal", self.bpr_nominal),
            ("milling_time_nominal_h", self.milling_time_nominal_h),
        ] {
            if matches!(v, Some(x) if !x.is_finite()) {
                return Err(RecoveryError::InvalidParameter(format!(
                    "intensity.{name} must be finite"
                )));
            }
        }
        // Negative gains would make BPR and milling time move together.
        for (name, v) in [
            ("bpr_per_sigma", self.bpr_per_sigma),
            ("milling_time_per_sigma_h", self.milling_time_per_sigma_h),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RecoveryError::InvalidParameter(format!(
                    "intensity.{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        validate_bounds("intensity.bpr_bounds", self.bpr_bounds[0], self.bpr_bounds[1])?;
        if self.bpr_bounds[0] <= 0.0 {
            return Err(RecoveryError::InvalidParameter(
                "intensity.bpr_bounds lower bound must be > 0".to_string(),
            ));
        }
        validate_bounds(
            "intensity.milling_time_bounds_h",
            self.milling_time_bounds_h[0],
            self.milling_time_bounds_h[1],
        )?;
        if self.milling_time_bounds_h[0] < 0.0 {
            return Err(RecoveryError::InvalidParameter(
                "intensity.milling_time_bounds_h lower bound must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input uncertainty for the Monte Carlo sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    #[serde(default = "default_lithium_fraction")]
    pub lithium_fraction: ClampedLogNormal,
    #[serde(default)]
    pub intensity: IntensityCoupling,
    #[serde(default = "default_leach_temperature")]
    pub leach_temperature: ClampedNormal,
    #[serde(default = "default_precipitation_concentration")]
    pub precipitation_concentration: ClampedNormal,
    #[serde(default = "default_impurity_index")]
    pub impurity_index: ClampedNormal,
}

fn default_lithium_fraction() -> ClampedLogNormal {
    ClampedLogNormal {
        median: None,
        log_sigma: 0.2,
        min: 0.0,
        max: 1.0,
    }
}
fn default_leach_temperature() -> ClampedNormal {
    ClampedNormal::new(363.15, 5.0, 333.0, 373.0)
}
fn default_precipitation_concentration() -> ClampedNormal {
    ClampedNormal::new(1.2, 0.2, 0.0, 2.0)
}
fn default_impurity_index() -> ClampedNormal {
    ClampedNormal::new(0.1, 0.05, 0.0, 1.0)
}

impl Default for DistributionSpec {
    fn default() -> Self {
        DistributionSpec {
            lithium_fraction: default_lithium_fraction(),
            intensity: IntensityCoupling::default(),
            leach_temperature: default_leach_temperature(),
            precipitation_concentration: default_precipitation_concentration(),
            impurity_index: default_impurity_index(),
        }
    }
}

impl DistributionSpec {
    /// Check that every distribution is well-formed and every clamp interval
    /// lies inside the physical domain of its parameter.
    pub fn validate(&self) -> RecoveryResult<()> {
        self.lithium_fraction.validate("lithium_fraction")?;
        if self.lithium_fraction.min < 0.0 || self.lithium_fraction.max > 1.0 {
            return Err(RecoveryError::InvalidParameter(
                "lithium_fraction bounds must lie within [0, 1]".to_string(),
            ));
        }
        self.intensity.validate()?;
        self.leach_temperature.validate("leach_temperature")?;
        if self.leach_temperature.min <= 0.0 {
            return Err(RecoveryError::InvalidParameter(
                "leach_temperature lower bound must be > 0 K".to_string(),
            ));
        }
        self.precipitation_concentration
            .validate("precipitation_concentration")?;
        if self.precipitation_concentration.min < 0.0 {
            return Err(RecoveryError::InvalidParameter(
                "precipitation_concentration lower bound must be >= 0".to_string(),
            ));
        }
        self.impurity_index.validate("impurity_index")?;
        if self.impurity_index.min < 0.0 {
            return Err(RecoveryError::InvalidParameter(
                "impurity_index lower bound must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_bounds(label: &str, min: f64, max: f64) -> RecoveryResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(RecoveryError::InvalidParameter(format!(
            "{label}: clamp bounds must be finite with min <= max, got [{min}, {max}]"
        )));
    }
    Ok(())
}

impl RecoveryConfig {
    /// Load from a JSON file and validate it.
    pub fn from_file(path: &str) -> RecoveryResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RecoveryResult<()> {
        if self.run_name.trim().is_empty() {
            return Err(RecoveryError::ConfigError(
                "run_name must not be empty".to_string(),
            ));
        }
        if self.monte_carlo.n_trials == 0 {
            return Err(RecoveryError::ConfigError(
                "monte_carlo.n_trials must be >= 1".to_string(),
            ));
        }
        self.baseline.validate()?;
        self.monte_carlo.distributions.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SaltType;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/lithium-types/ at compile time,
    /// so the workspace root is two levels up.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_default_config() {
        let cfg = RecoveryConfig::from_file(&config_path("configs/default_config.json")).unwrap();
        assert_eq!(cfg.run_name, "Nominal-Spodumene-Run");
        assert_eq!(cfg.baseline.salt_type, SaltType::NaCl);
        assert!((cfg.baseline.ore_mass_g - 100.0).abs() < 1e-12);
        assert!((cfg.baseline.leach_time_s - 3600.0).abs() < 1e-12);
        assert_eq!(cfg.monte_carlo.n_trials, 1000);
        assert_eq!(cfg.monte_carlo.seed, 42);
        assert_eq!(cfg.monte_carlo.distributions, DistributionSpec::default());
    }

    #[test]
    fn test_missing_distributions_fall_back_to_defaults() {
        let json = r#"{
            "run_name": "sparse",
            "baseline": {
                "ore_mass_g": 50.0,
                "ore_lithium_fraction": 0.02,
                "milling_time_h": 1.0,
                "ball_to_powder_ratio": 6.0,
                "salt_type": "CaCl2",
                "leach_time_s": 1800.0,
                "leach_temperature_k": 353.15,
                "precipitation_concentration": 1.0,
                "impurity_index": 0.2
            },
            "monte_carlo": { "n_trials": 16 }
        }"#;
        let cfg: RecoveryConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.monte_carlo.n_trials, 16);
        assert_eq!(cfg.monte_carlo.seed, 42);
        assert_eq!(cfg.monte_carlo.distributions, DistributionSpec::default());
        assert_eq!(cfg.baseline.salt_type, SaltType::CaCl2);

        // Omitted nominals resolve against this baseline, not the nominal run.
        let dist = &cfg.monte_carlo.distributions;
        assert_eq!(dist.lithium_fraction.median_or(cfg.baseline.ore_lithium_fraction), 0.02);
        assert_eq!(dist.intensity.bpr_nominal_or(cfg.baseline.ball_to_powder_ratio), 6.0);
        assert_eq!(dist.intensity.milling_time_nominal_or(cfg.baseline.milling_time_h), 1.0);
    }

    #[test]
    fn test_explicit_nominals_override_baseline() {
        let mut spec = DistributionSpec::default();
        spec.lithium_fraction.median = Some(0.01);
        spec.intensity.bpr_nominal = Some(9.0);
        spec.intensity.milling_time_nominal_h = Some(2.5);
        assert!(spec.validate().is_ok());
        assert_eq!(spec.lithium_fraction.median_or(0.02), 0.01);
        assert_eq!(spec.intensity.bpr_nominal_or(6.0), 9.0);
        assert_eq!(spec.intensity.milling_time_nominal_or(1.0), 2.5);

        let json = serde_json::to_string(&spec).unwrap();
        let back: DistributionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_validate_rejects_non_positive_median() {
        let mut spec = DistributionSpec::default();
        spec.lithium_fraction.median = Some(0.0);
        assert!(matches!(
            spec.validate(),
            Err(RecoveryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_trials() {
        let mut cfg = RecoveryConfig::default();
        cfg.monte_carlo.n_trials = 0;
        assert!(matches!(cfg.validate(), Err(RecoveryError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut spec = DistributionSpec::default();
        spec.leach_temperature.min = 380.0;
        assert!(matches!(
            spec.validate(),
            Err(RecoveryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_std_dev() {
        let mut spec = DistributionSpec::default();
        spec.impurity_index.std_dev = -0.05;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_intensity_gains() {
        let mut spec = DistributionSpec::default();
        spec.intensity.bpr_per_sigma = -1.0;
        assert!(matches!(
            spec.validate(),
            Err(RecoveryError::InvalidParameter(_))
        ));

        let mut spec = DistributionSpec::default();
        spec.intensity.milling_time_per_sigma_h = -0.5;
        assert!(matches!(
            spec.validate(),
            Err(RecoveryError::InvalidParameter(_))
        ));

        let mut spec = DistributionSpec::default();
        spec.intensity.bpr_per_sigma = 0.0;
        spec.intensity.milling_time_per_sigma_h = 0.0;
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_lithium_bounds_outside_unit_interval() {
        let mut spec = DistributionSpec::default();
        spec.lithium_fraction.max = 1.5;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = RecoveryConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: RecoveryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.run_name, cfg2.run_name);
        assert_eq!(cfg.baseline, cfg2.baseline);
        assert_eq!(cfg.monte_carlo.distributions, cfg2.monte_carlo.distributions);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecoveryConfig::from_file(&config_path("configs/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, RecoveryError::Io(_)));
    }
}
