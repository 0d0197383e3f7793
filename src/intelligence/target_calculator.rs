// ABOUTME: Metabolic target calculation from body composition and activity
// ABOUTME: Lean body mass, Katch-McArdle BMR, activity-scaled TDEE, calorie and protein targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Calculator
//!
//! Derives daily energy and protein targets from a [`ProfileSnapshot`].
//!
//! # Scientific References
//!
//! - Katch, F.I., & `McArdle`, W.D. (1973). Prediction of body density from simple
//!   anthropometric measurements in college-age men and women. *Human Biology*, 45(3), 445-455.
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology (activity factors)
//!
//! Every function checks that its numeric inputs are finite and returns
//! `ErrorCode::InvalidInput` otherwise, so NaN or infinity never reaches a
//! displayed target. Physiological plausibility is the caller's job.

use energy_core::constants::energy::{
    ACTIVE_MULTIPLIER, BODY_FAT_PERCENT_MAX, BODY_FAT_PERCENT_MIN, GOAL_CALORIE_OFFSET_KCAL,
    KATCH_MCARDLE_INTERCEPT, KATCH_MCARDLE_LBM_COEF, LIGHT_MULTIPLIER, PROTEIN_GRAMS_PER_KG,
    SEDENTARY_MULTIPLIER, VERY_ACTIVE_MULTIPLIER,
};
use energy_core::errors::{AppError, AppResult};
use energy_core::models::{ActivityLevel, Goal, ProfileSnapshot, TargetSet};
use tracing::debug;

/// Calculate lean body mass
///
/// Formula: LBM = `weight_kg` x (1 - bf / 100)
///
/// Body fat outside 0-100 % is clamped silently rather than rejected.
///
/// # Errors
///
/// Returns an error if either input is not finite
pub fn calculate_lean_body_mass(weight_kg: f64, body_fat_percentage: f64) -> AppResult<f64> {
    let weight_kg = AppError::ensure_finite("weight_kg", weight_kg)?;
    let body_fat = AppError::ensure_finite("body_fat_percentage", body_fat_percentage)?
        .clamp(BODY_FAT_PERCENT_MIN, BODY_FAT_PERCENT_MAX);

    Ok(weight_kg * (1.0 - body_fat / 100.0))
}

/// Calculate Basal Metabolic Rate using the Katch-McArdle equation
///
/// Formula: BMR = 370 + 21.6 x LBM
///
/// Lean mass already accounts for body composition, so there is no sex term.
///
/// # Errors
///
/// Returns an error if lean body mass is not finite
pub fn calculate_bmr_katch_mcardle(lean_body_mass_kg: f64) -> AppResult<f64> {
    let lbm = AppError::ensure_finite("lean_body_mass_kg", lean_body_mass_kg)?;
    Ok(KATCH_MCARDLE_LBM_COEF.mul_add(lbm, KATCH_MCARDLE_INTERCEPT))
}

/// Activity factor for an activity level
#[must_use]
pub const fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
        ActivityLevel::Light => LIGHT_MULTIPLIER,
        ActivityLevel::Active => ACTIVE_MULTIPLIER,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULTIPLIER,
    }
}

/// Calculate estimated Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors:
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Active: 1.55
/// - Very active: 1.725
///
/// # Errors
///
/// Returns an error if BMR is not finite
pub fn calculate_estimated_tdee(bmr: f64, activity_level: ActivityLevel) -> AppResult<f64> {
    let bmr = AppError::ensure_finite("bmr", bmr)?;
    Ok(bmr * activity_multiplier(activity_level))
}

/// Calculate the daily calorie target for a goal
///
/// - Lose: TDEE - 500
/// - Maintain: TDEE
/// - Gain: TDEE + 500
///
/// # Errors
///
/// Returns an error if TDEE is not finite
pub fn calculate_calorie_target(estimated_tdee: f64, goal: Goal) -> AppResult<f64> {
    let tdee = AppError::ensure_finite("estimated_tdee", estimated_tdee)?;
    Ok(match goal {
        Goal::Lose => tdee - GOAL_CALORIE_OFFSET_KCAL,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GOAL_CALORIE_OFFSET_KCAL,
    })
}

/// Calculate the daily protein target
///
/// Formula: round(`weight_kg` x 2.2), independent of goal and body fat
///
/// # Errors
///
/// Returns an error if weight is not finite
pub fn calculate_protein_target(weight_kg: f64) -> AppResult<f64> {
    let weight_kg = AppError::ensure_finite("weight_kg", weight_kg)?;
    Ok((weight_kg * PROTEIN_GRAMS_PER_KG).round())
}

/// Calculate the complete target set for a profile
///
/// # Errors
///
/// Returns an error if any profile number is not finite
pub fn calculate_targets(profile: &ProfileSnapshot) -> AppResult<TargetSet> {
    let lean_body_mass_kg =
        calculate_lean_body_mass(profile.weight_kg, profile.body_fat_percentage)?;
    let bmr_kcal_per_day = calculate_bmr_katch_mcardle(lean_body_mass_kg)?;
    let estimated_tdee_kcal_per_day =
        calculate_estimated_tdee(bmr_kcal_per_day, profile.activity_level)?;
    let calorie_target_kcal_per_day =
        calculate_calorie_target(estimated_tdee_kcal_per_day, profile.goal)?;
    let protein_target_grams_per_day = calculate_protein_target(profile.weight_kg)?;

    debug!(
        activity_level = %profile.activity_level,
        goal = %profile.goal,
        bmr = bmr_kcal_per_day,
        tdee = estimated_tdee_kcal_per_day,
        calorie_target = calorie_target_kcal_per_day,
        "Calculated metabolic targets"
    );

    Ok(TargetSet {
        lean_body_mass_kg,
        bmr_kcal_per_day,
        estimated_tdee_kcal_per_day,
        calorie_target_kcal_per_day,
        protein_target_grams_per_day,
    })
}
