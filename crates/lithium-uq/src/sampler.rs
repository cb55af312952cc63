// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Monte Carlo Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seeded Monte Carlo propagation of input variability to recovered lithium.
//!
//! Trials are drawn sequentially from one `StdRng` before any evaluation, so
//! trial `i` always receives the same parameter vector for a given seed.
//! Per trial the draw order is: lithium fraction, intensity z, leach
//! temperature, precipitation concentration, impurity index.
//!
//! Distribution centres left unset in the [`DistributionSpec`] (lithium-fraction
//! median, BPR and milling-time nominals) are taken from the baseline parameter set.

use lithium_core::evaluator::evaluate;
use lithium_types::config::{ClampedNormal, DistributionSpec, RecoveryConfig};
use lithium_types::error::{RecoveryError, RecoveryResult};
use lithium_types::state::{MonteCarloResult, ProcessParameters, YieldOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal, StandardNormal};
use tracing::{debug, info};

use crate::stats::summarize;

/// Distribution objects built once from a validated [`DistributionSpec`]
/// and the baseline it is centred on.
#[derive(Debug, Clone)]
pub struct TrialSampler {
    spec: DistributionSpec,
    bpr_nominal: f64,
    milling_time_nominal_h: f64,
    lithium_fraction: LogNormal<f64>,
    leach_temperature: Normal<f64>,
    precipitation_concentration: Normal<f64>,
    impurity_index: Normal<f64>,
}

fn normal(label: &str, d: &ClampedNormal) -> RecoveryResult<Normal<f64>> {
    Normal::new(d.mean, d.std_dev)
        .map_err(|e| RecoveryError::InvalidParameter(format!("{label}: {e}")))
}

impl TrialSampler {
    pub fn new(spec: &DistributionSpec, base: &ProcessParameters) -> RecoveryResult<Self> {
        spec.validate()?;
        let median = spec
            .lithium_fraction
            .median_or(base.ore_lithium_fraction);
        if !median.is_finite() || median <= 0.0 {
            return Err(RecoveryError::InvalidParameter(format!(
                "lithium_fraction: median must be finite and > 0, got {median}"
            )));
        }
        let lithium_fraction = LogNormal::new(median.ln(), spec.lithium_fraction.log_sigma)
            .map_err(|e| RecoveryError::InvalidParameter(format!("lithium_fraction: {e}")))?;

        Ok(TrialSampler {
            spec: *spec,
            bpr_nominal: spec.intensity.bpr_nominal_or(base.ball_to_powder_ratio),
            milling_time_nominal_h: spec.intensity.milling_time_nominal_or(base.milling_time_h),
            lithium_fraction,
            leach_temperature: normal("leach_temperature", &spec.leach_temperature)?,
            precipitation_concentration: normal(
                "precipitation_concentration",
                &spec.precipitation_concentration,
            )?,
            impurity_index: normal("impurity_index", &spec.impurity_index)?,
        })
    }

    /// Draw one trial. Ore mass, salt type and leach time come from `base`.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        base: &ProcessParameters,
    ) -> ProcessParameters {
        let li = &self.spec.lithium_fraction;
        let ore_lithium_fraction = self.lithium_fraction.sample(rng).clamp(li.min, li.max);

        let intensity = &self.spec.intensity;
        let z: f64 = rng.sample(StandardNormal);
        let ball_to_powder_ratio = (self.bpr_nominal + intensity.bpr_per_sigma * z)
            .clamp(intensity.bpr_bounds[0], intensity.bpr_bounds[1]);
        let milling_time_h = (self.milling_time_nominal_h
            - intensity.milling_time_per_sigma_h * z)
            .clamp(
                intensity.milling_time_bounds_h[0],
                intensity.milling_time_bounds_h[1],
            );

        let t = &self.spec.leach_temperature;
        let leach_temperature_k = self.leach_temperature.sample(rng).clamp(t.min, t.max);
        let c = &self.spec.precipitation_concentration;
        let precipitation_concentration =
            self.precipitation_concentration.sample(rng).clamp(c.min, c.max);
        let imp = &self.spec.impurity_index;
        let impurity_index = self.impurity_index.sample(rng).clamp(imp.min, imp.max);

        ProcessParameters {
            ore_mass_g: base.ore_mass_g,
            ore_lithium_fraction,
            milling_time_h,
            ball_to_powder_ratio,
            salt_type: base.salt_type,
            leach_time_s: base.leach_time_s,
            leach_temperature_k,
            precipitation_concentration,
            impurity_index,
        }
    }
}

/// Draw `n_trials` parameter vectors for `seed`, in trial-index order.
pub fn draw_trials(
    n_trials: usize,
    base: &ProcessParameters,
    spec: &DistributionSpec,
    seed: u64,
) -> RecoveryResult<Vec<ProcessParameters>> {
    if n_trials == 0 {
        return Err(RecoveryError::InvalidParameter(
            "n_trials must be >= 1".to_string(),
        ));
    }
    base.validate()?;
    let sampler = TrialSampler::new(spec, base)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n_trials).map(|_| sampler.draw(&mut rng, base)).collect())
}

/// Evaluate one drawn trial, capping recovery at that trial's own lithium content.
fn evaluate_trial(trial: &ProcessParameters) -> RecoveryResult<YieldOutcome> {
    let mut outcome = evaluate(trial)?;
    outcome.recovered_lithium_g = outcome
        .recovered_lithium_g
        .min(trial.available_lithium_g());
    Ok(outcome)
}

/// Run a seeded Monte Carlo study and summarise recovered mass.
pub fn run(
    n_trials: usize,
    base: &ProcessParameters,
    spec: &DistributionSpec,
    seed: u64,
) -> RecoveryResult<MonteCarloResult> {
    debug!(n_trials, seed, "drawing Monte Carlo trials");
    let trials = draw_trials(n_trials, base, spec, seed)?;
    let outcomes = trials
        .iter()
        .map(evaluate_trial)
        .collect::<RecoveryResult<Vec<_>>>()?;

    let masses: Vec<f64> = outcomes.iter().map(|o| o.recovered_lithium_g).collect();
    let summary = summarize(&masses)?;
    info!(
        n_trials,
        seed,
        p10 = summary.p10,
        p50 = summary.p50,
        p90 = summary.p90,
        "Monte Carlo run complete"
    );

    Ok(MonteCarloResult {
        seed,
        outcomes,
        summary,
    })
}

/// [`run`] with trial count, seed, fixed quantities and distributions from `config`.
pub fn run_from_config(config: &RecoveryConfig) -> RecoveryResult<MonteCarloResult> {
    let mc = &config.monte_carlo;
    run(mc.n_trials, &config.baseline, &mc.distributions, mc.seed)
}
