// ABOUTME: Dashboard report composing targets, today's progress, real-world TDEE and adherence
// ABOUTME: Runs the three engine components against one profile and one trend window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::adherence::classify_adherence;
use super::algorithms::TdeeEstimationAlgorithm;
use super::target_calculator::calculate_targets;
use super::trend_estimator::{estimate_real_world_tdee_with, TdeeEstimate};
use energy_core::errors::AppResult;
use energy_core::models::{AdherenceResult, DailyLogEntry, ProfileSnapshot, TargetSet};
use serde::{Deserialize, Serialize};

/// Progress of one intake figure toward its daily target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Amount logged today (0 when nothing is logged)
    pub current: f64,
    /// Daily target
    pub target: f64,
    /// `current / target` clamped to 0..=1; a non-positive target counts as 1
    pub fraction: f64,
}

impl Progress {
    /// Progress of `current` toward `target`
    #[must_use]
    pub fn new(current: f64, target: f64) -> Self {
        let safe_target = if target <= 0.0 { 1.0 } else { target };
        Self {
            current,
            target,
            fraction: (current / safe_target).clamp(0.0, 1.0),
        }
    }
}

/// Everything the dashboard shows for one user and one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// Formula-derived targets
    pub targets: TargetSet,
    /// Today's calories against the calorie target
    pub calories_today: Progress,
    /// Today's protein against the protein target
    pub protein_today: Progress,
    /// Empirical TDEE over the trend window
    pub real_world_tdee: TdeeEstimate,
    /// Adherence over the trend window
    pub adherence: AdherenceResult,
}

impl DashboardReport {
    /// Build the report
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if the profile or any log holds a
    /// non-finite number
    pub fn build(
        profile: &ProfileSnapshot,
        today: Option<&DailyLogEntry>,
        trend_logs: &[DailyLogEntry],
        algorithm: TdeeEstimationAlgorithm,
    ) -> AppResult<Self> {
        let targets = calculate_targets(profile)?;

        let calories_today = Progress::new(
            today.and_then(|log| log.calories).unwrap_or(0.0),
            targets.calorie_target_kcal_per_day,
        );
        let protein_today = Progress::new(
            today.and_then(|log| log.protein).unwrap_or(0.0),
            targets.protein_target_grams_per_day,
        );

        let real_world_tdee = estimate_real_world_tdee_with(trend_logs, algorithm)?;

        let adherence =
            classify_adherence(profile.goal, targets.calorie_target_kcal_per_day, trend_logs)?;

        Ok(Self {
            targets,
            calories_today,
            protein_today,
            real_world_tdee,
            adherence,
        })
    }
}
