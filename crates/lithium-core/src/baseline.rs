// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Baseline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single deterministic evaluation at nominal conditions.

use crate::evaluator::evaluate;
use lithium_types::error::RecoveryResult;
use lithium_types::state::{BaselineReport, ProcessParameters};
use tracing::debug;

/// Evaluate the nominal parameter set once.
pub fn run_baseline(params: &ProcessParameters) -> RecoveryResult<BaselineReport> {
    let outcome = evaluate(params)?;
    let eff = &outcome.efficiencies;
    debug!(
        milling_conversion = eff.milling_conversion,
        leach_efficiency = eff.leach_efficiency,
        precipitation_efficiency = eff.adjusted_precipitation_efficiency,
        recovered_lithium_g = outcome.recovered_lithium_g,
        "baseline evaluated"
    );

    Ok(BaselineReport {
        parameters: params.clone(),
        overall_yield_fraction: outcome.yield_fraction(),
        outcome,
    })
}
