//! Deterministic recovery physics.
//!
//! kinetics → penalty → evaluator → baseline

pub mod baseline;
pub mod evaluator;
pub mod kinetics;
pub mod penalty;
