// ABOUTME: Katch-McArdle, activity multiplier and energy-density constants
// ABOUTME: Calorie offset and protein ratio used to derive daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Katch-McArdle intercept (kcal/day)
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub const KATCH_MCARDLE_INTERCEPT: f64 = 370.0;

/// Katch-McArdle lean-mass coefficient (kcal/day per kg of lean body mass)
pub const KATCH_MCARDLE_LBM_COEF: f64 = 21.6;

/// Activity multiplier: little or no exercise
pub const SEDENTARY_MULTIPLIER: f64 = 1.2;

/// Activity multiplier: light exercise 1-3 days/week
pub const LIGHT_MULTIPLIER: f64 = 1.375;

/// Activity multiplier: moderate exercise 3-5 days/week
pub const ACTIVE_MULTIPLIER: f64 = 1.55;

/// Activity multiplier: hard exercise 6-7 days/week
pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.725;

/// Daily calorie offset applied for lose/gain goals (kcal/day)
///
/// Roughly 0.45 kg/week at [`KCAL_PER_KG_BODY_MASS`].
pub const GOAL_CALORIE_OFFSET_KCAL: f64 = 500.0;

/// Daily protein target per kg of body weight (≈1 g/lb)
pub const PROTEIN_GRAMS_PER_KG: f64 = 2.2;

/// Energy equivalent of one kilogram of body-mass change (kcal/kg)
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Body fat percentage bounds applied before computing lean mass
pub const BODY_FAT_PERCENT_MIN: f64 = 0.0;

/// Upper body fat percentage bound
pub const BODY_FAT_PERCENT_MAX: f64 = 100.0;
