// ABOUTME: Integration tests for metabolic target calculation
// ABOUTME: Lean body mass, Katch-McArdle BMR, activity TDEE, goal offsets and protein targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, sample_snapshot};
use energy_balance::errors::ErrorCode;
use energy_balance::intelligence::target_calculator::activity_multiplier;
use energy_balance::intelligence::{
    calculate_bmr_katch_mcardle, calculate_calorie_target, calculate_estimated_tdee,
    calculate_lean_body_mass, calculate_protein_target, calculate_targets,
};
use energy_balance::models::{ActivityLevel, Goal, ProfileSnapshot};

#[test]
fn test_lean_body_mass_bounds() {
    assert_eq!(calculate_lean_body_mass(80.0, 0.0).unwrap(), 80.0);
    assert_eq!(calculate_lean_body_mass(80.0, 100.0).unwrap(), 0.0);
    assert_close(calculate_lean_body_mass(80.0, 20.0).unwrap(), 64.0);
}

#[test]
fn test_lean_body_mass_clamps_body_fat() {
    assert_eq!(calculate_lean_body_mass(80.0, -5.0).unwrap(), 80.0);
    assert_eq!(calculate_lean_body_mass(80.0, 150.0).unwrap(), 0.0);
}

#[test]
fn test_lean_body_mass_decreases_with_body_fat() {
    let mut previous = f64::INFINITY;
    for bf in (0..=100).step_by(5) {
        let lbm = calculate_lean_body_mass(90.0, f64::from(bf)).unwrap();
        assert!(lbm < previous, "LBM must fall as body fat rises (bf={bf})");
        previous = lbm;
    }
}

#[test]
fn test_bmr_katch_mcardle() {
    assert_eq!(calculate_bmr_katch_mcardle(0.0).unwrap(), 370.0);
    assert_close(calculate_bmr_katch_mcardle(64.0).unwrap(), 1752.4);

    let lower = calculate_bmr_katch_mcardle(50.0).unwrap();
    let higher = calculate_bmr_katch_mcardle(50.5).unwrap();
    assert!(higher > lower);
}

#[test]
fn test_activity_multipliers() {
    assert_close(activity_multiplier(ActivityLevel::Sedentary), 1.2);
    assert_close(activity_multiplier(ActivityLevel::Light), 1.375);
    assert_close(activity_multiplier(ActivityLevel::Active), 1.55);
    assert_close(activity_multiplier(ActivityLevel::VeryActive), 1.725);

    assert_close(
        calculate_estimated_tdee(2000.0, ActivityLevel::Active).unwrap(),
        3100.0,
    );
}

#[test]
fn test_calorie_target_goal_offsets() {
    let tdee = 2409.55;
    assert_eq!(calculate_calorie_target(tdee, Goal::Maintain).unwrap(), tdee);
    assert_close(calculate_calorie_target(tdee, Goal::Lose).unwrap(), 1909.55);
    assert_close(calculate_calorie_target(tdee, Goal::Gain).unwrap(), 2909.55);
}

#[test]
fn test_protein_target_rounds_half_up() {
    assert_eq!(calculate_protein_target(82.5).unwrap(), 182.0);
    assert_eq!(calculate_protein_target(80.0).unwrap(), 176.0);
}

#[test]
fn test_calculate_targets_full_profile() {
    init_test_logging();

    let targets = calculate_targets(&sample_snapshot()).unwrap();

    assert_close(targets.lean_body_mass_kg, 64.0);
    assert_close(targets.bmr_kcal_per_day, 1752.4);
    assert_close(targets.estimated_tdee_kcal_per_day, 2409.55);
    assert_close(targets.calorie_target_kcal_per_day, 1909.55);
    assert_eq!(targets.protein_target_grams_per_day, 176.0);
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    let err = calculate_lean_body_mass(f64::NAN, 20.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.details["field"], "weight_kg");

    assert!(calculate_bmr_katch_mcardle(f64::INFINITY).is_err());
    assert!(calculate_estimated_tdee(f64::NEG_INFINITY, ActivityLevel::Light).is_err());
    assert!(calculate_calorie_target(f64::NAN, Goal::Gain).is_err());
    assert!(calculate_protein_target(f64::NAN).is_err());

    let profile = ProfileSnapshot::new(80.0, f64::NAN, ActivityLevel::Light, Goal::Lose);
    let err = calculate_targets(&profile).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_targets_are_deterministic() {
    let first = calculate_targets(&sample_snapshot()).unwrap();
    let second = calculate_targets(&sample_snapshot()).unwrap();
    assert_eq!(
        first.calorie_target_kcal_per_day.to_bits(),
        second.calorie_target_kcal_per_day.to_bits()
    );
    assert_eq!(first, second);
}
