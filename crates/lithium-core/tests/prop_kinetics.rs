// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — Property-Based Tests (proptest) for lithium-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lithium-core using proptest.
//!
//! Covers: efficiency and penalty ranges, milling monotonicity,
//! available-lithium bound on recovered mass.

use lithium_core::evaluator::evaluate;
use lithium_core::kinetics::{leach_efficiency, milling_conversion, precipitation_efficiency};
use lithium_core::penalty::impurity_penalty;
use lithium_types::state::{ProcessParameters, SaltType};
use proptest::prelude::*;

fn salt_strategy() -> impl Strategy<Value = SaltType> {
    prop_oneof![
        Just(SaltType::NaCl),
        Just(SaltType::KCl),
        Just(SaltType::CaCl2),
    ]
}

// ── Stage efficiency ranges ──────────────────────────────────────────

proptest! {
    #[test]
    fn milling_conversion_in_unit_interval(
        t in -5.0f64..50.0,
        salt in salt_strategy(),
        bpr in 0.01f64..100.0,
    ) {
        let x = milling_conversion(t, salt, bpr);
        prop_assert!((0.0..=1.0).contains(&x), "X = {}", x);
    }

    #[test]
    fn leach_efficiency_in_unit_interval(
        t in 0.0f64..1.0e5,
        temp in 250.0f64..450.0,
    ) {
        let eta = leach_efficiency(t, temp);
        prop_assert!((0.0..=1.0).contains(&eta), "eta = {}", eta);
    }

    #[test]
    fn precipitation_efficiency_in_unit_interval(
        c in 0.0f64..10.0,
        imp in 0.0f64..1.0,
    ) {
        let eta = precipitation_efficiency(c, imp);
        prop_assert!((0.0..=1.0).contains(&eta), "eta = {}", eta);
    }

    #[test]
    fn penalty_in_bounds(x in 0.0f64..=1.0) {
        let p = impurity_penalty(x);
        prop_assert!((0.7..=1.0).contains(&p), "penalty = {}", p);
    }
}

// ── Milling monotonicity ─────────────────────────────────────────────

proptest! {
    /// Zero milling time converts nothing, whatever the salt or loading.
    #[test]
    fn milling_zero_time_zero_conversion(salt in salt_strategy(), bpr in 0.01f64..100.0) {
        prop_assert_eq!(milling_conversion(0.0, salt, bpr), 0.0);
    }

    /// Conversion is non-decreasing in milling time.
    #[test]
    fn milling_monotone_in_time(
        t1 in 0.0f64..10.0,
        dt in 0.0f64..10.0,
        salt in salt_strategy(),
        bpr in 0.01f64..100.0,
    ) {
        let a = milling_conversion(t1, salt, bpr);
        let b = milling_conversion(t1 + dt, salt, bpr);
        prop_assert!(b >= a, "X({}) = {} > X({}) = {}", t1, a, t1 + dt, b);
    }
}

// ── Yield bound ──────────────────────────────────────────────────────

proptest! {
    /// Recovered lithium never exceeds the lithium in the ore charge.
    #[test]
    fn recovered_bounded_by_available(
        ore_mass_g in 0.1f64..1.0e4,
        ore_lithium_fraction in 0.0f64..=1.0,
        milling_time_h in 0.0f64..10.0,
        ball_to_powder_ratio in 0.5f64..40.0,
        salt_type in salt_strategy(),
        leach_time_s in 0.0f64..2.0e4,
        leach_temperature_k in 273.0f64..400.0,
        precipitation_concentration in 0.0f64..5.0,
        impurity_index in 0.0f64..1.0,
    ) {
        let params = ProcessParameters {
            ore_mass_g,
            ore_lithium_fraction,
            milling_time_h,
            ball_to_powder_ratio,
            salt_type,
            leach_time_s,
            leach_temperature_k,
            precipitation_concentration,
            impurity_index,
        };
        let outcome = evaluate(&params).unwrap();
        prop_assert!(outcome.recovered_lithium_g >= 0.0);
        prop_assert!(outcome.recovered_lithium_g <= ore_mass_g * ore_lithium_fraction);
    }
}
