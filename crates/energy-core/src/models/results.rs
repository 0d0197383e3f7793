// ABOUTME: Derived outputs of the engine: metabolic target set and adherence result
// ABOUTME: Ephemeral values recomputed on every call, consumed read-only by presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Targets derived from one profile snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetSet {
    /// Lean body mass (kg)
    pub lean_body_mass_kg: f64,
    /// Basal metabolic rate, Katch-McArdle (kcal/day)
    pub bmr_kcal_per_day: f64,
    /// Activity-scaled TDEE (kcal/day)
    pub estimated_tdee_kcal_per_day: f64,
    /// Goal-adjusted calorie target (kcal/day)
    pub calorie_target_kcal_per_day: f64,
    /// Protein target (g/day)
    pub protein_target_grams_per_day: f64,
}

/// Coarse adherence signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceStatus {
    /// Calories and weight trend both match the goal
    OnTrack,
    /// Calories roughly match, or weight trend matches
    Close,
    /// Neither
    OffTrack,
    /// Not enough logged data to judge
    Unknown,
}

impl AdherenceStatus {
    /// Short indicator label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "Yes",
            Self::Close => "Close",
            Self::OffTrack => "No",
            Self::Unknown => "Not enough data",
        }
    }
}

/// Numbers the adherence detail text is built from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdherenceAverages {
    /// Mean calories over calorie-logged days
    pub avg_calories: f64,
    /// `avg_calories - target`
    pub calorie_delta: f64,
    /// Last weigh-in minus first weigh-in (kg)
    pub weight_delta_kg: f64,
}

/// Adherence status with human-readable detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdherenceResult {
    /// Status
    pub status: AdherenceStatus,
    /// Summary of the averages used, or guidance when data is insufficient
    pub detail: String,
    /// Underlying numbers; `None` exactly when status is `Unknown`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averages: Option<AdherenceAverages>,
}
