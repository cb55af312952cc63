// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Yield Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Composition of the stage efficiencies into recovered lithium mass.
//!
//! Algorithm:
//! 1. X_mill from milling time, salt and BPR
//! 2. η_leach from leach time and temperature (no coupling to X_mill)
//! 3. η_ppt from concentration and impurity index
//! 4. η_ppt' = η_ppt · penalty(X_mill)
//! 5. m_Li = m_ore · x_Li · X_mill · η_leach · η_ppt', capped at m_ore · x_Li

use crate::kinetics::{leach_efficiency, milling_conversion, precipitation_efficiency};
use crate::penalty::impurity_penalty;
use lithium_types::error::RecoveryResult;
use lithium_types::state::{EfficiencyResult, ProcessParameters, YieldOutcome};

/// Stage efficiencies for a parameter set. Total over any finite input.
pub fn stage_efficiencies(params: &ProcessParameters) -> EfficiencyResult {
    let milling = milling_conversion(
        params.milling_time_h,
        params.salt_type,
        params.ball_to_powder_ratio,
    );
    let leach = leach_efficiency(params.leach_time_s, params.leach_temperature_k);
    let precipitation =
        precipitation_efficiency(params.precipitation_concentration, params.impurity_index);
    let penalty = impurity_penalty(milling);

    EfficiencyResult {
        milling_conversion: milling,
        leach_efficiency: leach,
        precipitation_efficiency: precipitation,
        impurity_penalty: penalty,
        adjusted_precipitation_efficiency: (precipitation * penalty).clamp(0.0, 1.0),
    }
}

/// Validate `params` and compute the recovered lithium mass.
pub fn evaluate(params: &ProcessParameters) -> RecoveryResult<YieldOutcome> {
    params.validate()?;

    let efficiencies = stage_efficiencies(params);
    let available = params.available_lithium_g();
    let recovered = (available * efficiencies.overall()).clamp(0.0, available);

    Ok(YieldOutcome {
        recovered_lithium_g: recovered,
        available_lithium_g: available,
        efficiencies,
    })
}

/// Evaluate a batch in order; stops at the first invalid parameter set.
pub fn evaluate_batch(batch: &[ProcessParameters]) -> RecoveryResult<Vec<YieldOutcome>> {
    batch.iter().map(evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lithium_types::error::RecoveryError;
    use lithium_types::state::SaltType;

    #[test]
    fn test_baseline_scenario() {
        let outcome = evaluate(&ProcessParameters::default()).unwrap();
        let eff = outcome.efficiencies;
        assert!((eff.milling_conversion - 0.898).abs() < 1e-3);
        assert!((eff.leach_efficiency - 0.95).abs() < 1e-6);
        assert!((eff.precipitation_efficiency - 0.605).abs() < 1e-3);
        assert!((eff.impurity_penalty - 0.889).abs() < 1e-3);
        assert!((eff.adjusted_precipitation_efficiency - 0.538).abs() < 1e-3);
        // Exact arithmetic gives 0.6888; hand-rounded intermediates give ≈0.691.
        assert!(
            (outcome.recovered_lithium_g - 0.6888).abs() < 2e-3,
            "recovered = {}",
            outcome.recovered_lithium_g
        );
        assert!((outcome.available_lithium_g - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_recovered_never_exceeds_available() {
        let params = ProcessParameters {
            milling_time_h: 100.0,
            ball_to_powder_ratio: 1.0e6,
            salt_type: SaltType::CaCl2,
            leach_time_s: 1.0e7,
            leach_temperature_k: 400.0,
            precipitation_concentration: 100.0,
            impurity_index: 0.0,
            ..ProcessParameters::default()
        };
        let outcome = evaluate(&params).unwrap();
        assert!(outcome.recovered_lithium_g <= outcome.available_lithium_g);
        assert!(outcome.yield_fraction() <= 1.0);
    }

    #[test]
    fn test_zero_milling_recovers_nothing() {
        let params = ProcessParameters {
            milling_time_h: 0.0,
            ..ProcessParameters::default()
        };
        let outcome = evaluate(&params).unwrap();
        assert_eq!(outcome.recovered_lithium_g, 0.0);
    }

    #[test]
    fn test_leach_is_independent_of_milling() {
        let short = stage_efficiencies(&ProcessParameters {
            milling_time_h: 0.5,
            ..ProcessParameters::default()
        });
        let long = stage_efficiencies(&ProcessParameters {
            milling_time_h: 3.5,
            ..ProcessParameters::default()
        });
        assert_eq!(short.leach_efficiency, long.leach_efficiency);
        assert_eq!(short.precipitation_efficiency, long.precipitation_efficiency);
        assert_ne!(short.impurity_penalty, long.impurity_penalty);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = ProcessParameters {
            ore_mass_g: -10.0,
            ..ProcessParameters::default()
        };
        assert!(matches!(
            evaluate(&params),
            Err(RecoveryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch: Vec<ProcessParameters> = [0.5, 1.0, 2.0, 3.0]
            .iter()
            .map(|&t| ProcessParameters {
                milling_time_h: t,
                ..ProcessParameters::default()
            })
            .collect();
        let outcomes = evaluate_batch(&batch).unwrap();
        assert_eq!(outcomes.len(), 4);
        for w in outcomes.windows(2) {
            assert!(w[1].recovered_lithium_g > w[0].recovered_lithium_g);
        }
    }
}
