// ABOUTME: Adherence classification of a log window against a calorie target and goal
// ABOUTME: Produces on-track / close / off-track / unknown with a summary of the averages used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence Classifier
//!
//! Decision order, first match wins:
//!
//! 1. fewer than 5 calorie days or fewer than 2 weigh-ins: `Unknown`
//! 2. calories within ±200 kcal of target AND weight trend matches goal: `OnTrack`
//! 3. calories within ±350 kcal of target OR weight trend matches goal: `Close`
//! 4. otherwise: `OffTrack`
//!
//! The `Close` band is evaluated independently of the weight trend, so a window
//! can be `Close` on weight trend alone with a large calorie miss, or on
//! calories alone with the weight moving the wrong way.

use super::trend_estimator::sorted_by_date;
use energy_core::constants::adherence::{
    CLOSE_CALORIE_TOLERANCE_KCAL, GAIN_MIN_WEIGHT_RISE_KG, INSUFFICIENT_DATA_GUIDANCE,
    LOSE_MIN_WEIGHT_DROP_KG, MAINTAIN_WEIGHT_TOLERANCE_KG, MIN_CALORIE_DAYS, MIN_WEIGH_INS,
    ON_TRACK_CALORIE_TOLERANCE_KCAL,
};
use energy_core::errors::{AppError, AppResult};
use energy_core::models::{
    AdherenceAverages, AdherenceResult, AdherenceStatus, DailyLogEntry, Goal,
};
use energy_core::units::round_to_1;
use tracing::debug;

/// Whether a window weight change (kg, last minus first weigh-in) matches the goal
///
/// No per-week normalization: the change is taken over the whole window.
#[must_use]
pub fn weight_trend_matches_goal(goal: Goal, weight_delta_kg: f64) -> bool {
    match goal {
        Goal::Lose => weight_delta_kg < -LOSE_MIN_WEIGHT_DROP_KG,
        Goal::Gain => weight_delta_kg > GAIN_MIN_WEIGHT_RISE_KG,
        Goal::Maintain => weight_delta_kg.abs() <= MAINTAIN_WEIGHT_TOLERANCE_KG,
    }
}

/// Classify adherence from calorie delta and weight-trend match
#[must_use]
pub fn status_for(calorie_delta: f64, weight_ok: bool) -> AdherenceStatus {
    let calories_ok = calorie_delta.abs() <= ON_TRACK_CALORIE_TOLERANCE_KCAL;

    if calories_ok && weight_ok {
        AdherenceStatus::OnTrack
    } else if calorie_delta.abs() <= CLOSE_CALORIE_TOLERANCE_KCAL || weight_ok {
        AdherenceStatus::Close
    } else {
        AdherenceStatus::OffTrack
    }
}

/// Classify recent adherence against a calorie target
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the target or any logged calorie or
/// weight value is not finite
pub fn classify_adherence(
    goal: Goal,
    target_calories: f64,
    logs: &[DailyLogEntry],
) -> AppResult<AdherenceResult> {
    let target_calories = AppError::ensure_finite("target_calories", target_calories)?;
    let sorted = sorted_by_date(logs)?;

    let calories: Vec<f64> = sorted.iter().filter_map(|entry| entry.calories).collect();
    let weights: Vec<f64> = sorted.iter().filter_map(|entry| entry.weight).collect();

    let (Some(first_weight), Some(last_weight)) = (weights.first(), weights.last()) else {
        return Ok(insufficient_data(calories.len(), weights.len()));
    };
    if calories.len() < MIN_CALORIE_DAYS || weights.len() < MIN_WEIGH_INS {
        return Ok(insufficient_data(calories.len(), weights.len()));
    }

    let avg_calories = calories.iter().sum::<f64>() / calories.len() as f64;
    let calorie_delta = avg_calories - target_calories;
    let weight_delta_kg = last_weight - first_weight;
    let weight_ok = weight_trend_matches_goal(goal, weight_delta_kg);
    let status = status_for(calorie_delta, weight_ok);

    debug!(
        goal = %goal,
        avg_calories,
        calorie_delta,
        weight_delta_kg,
        weight_ok,
        status = ?status,
        "Classified adherence"
    );

    Ok(AdherenceResult {
        status,
        // Weight change rounds half away from zero
        detail: format!(
            "Avg intake ~{} kcal; weight change {:.1} kg.",
            avg_calories.round(),
            round_to_1(weight_delta_kg)
        ),
        averages: Some(AdherenceAverages {
            avg_calories,
            calorie_delta,
            weight_delta_kg,
        }),
    })
}

fn insufficient_data(calorie_days: usize, weigh_ins: usize) -> AdherenceResult {
    debug!(calorie_days, weigh_ins, "Adherence unknown: insufficient data");
    AdherenceResult {
        status: AdherenceStatus::Unknown,
        detail: INSUFFICIENT_DATA_GUIDANCE.to_owned(),
        averages: None,
    }
}
