// ABOUTME: Stored user, profile and daily log records plus the profile input/patch types
// ABOUTME: Profile input carries the onboarding plausibility bounds checked before storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use energy_core::errors::{AppError, AppResult};
use energy_core::models::{
    ActivityLevel, DailyLogEntry, DailyLogPatch, Goal, ProfileSnapshot, Sex, UnitSystem, UserId,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

const AGE_YEARS: RangeInclusive<u32> = 10..=120;
const HEIGHT_CM: RangeInclusive<f64> = 90.0..=260.0;
const WEIGHT_KG: RangeInclusive<f64> = 25.0..=350.0;
const BODY_FAT_PERCENT: RangeInclusive<f64> = 3.0..=70.0;

/// A known user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque id from the identity provider
    pub user_id: UserId,
    /// Email, kept across logins that omit it
    pub email: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Avatar URL
    pub picture_url: Option<String>,
    /// Display unit preference
    pub unit_system: UnitSystem,
    /// First seen
    pub created_at: DateTime<Utc>,
    /// Refreshed on every `ensure_user`
    pub last_seen_at: DateTime<Utc>,
}

/// Onboarding answers, in metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    pub age: u32,
    /// Sex (not used by the engine)
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage
    pub body_fat_percentage: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal
    pub goal: Goal,
}

impl ProfileInput {
    /// Check onboarding plausibility bounds
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for non-finite numbers and
    /// `ErrorCode::ValueOutOfRange` for values outside the accepted bounds
    pub fn validate(&self) -> AppResult<()> {
        if !AGE_YEARS.contains(&self.age) {
            return Err(out_of_range("age", f64::from(self.age), "10-120 years"));
        }
        check_range("height_cm", self.height_cm, &HEIGHT_CM, "90-260 cm")?;
        check_range("weight_kg", self.weight_kg, &WEIGHT_KG, "25-350 kg")?;
        check_range(
            "body_fat_percentage",
            self.body_fat_percentage,
            &BODY_FAT_PERCENT,
            "3-70 %",
        )
    }

    /// Engine input for this profile
    #[must_use]
    pub const fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot::new(
            self.weight_kg,
            self.body_fat_percentage,
            self.activity_level,
            self.goal,
        )
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
    expected: &str,
) -> AppResult<()> {
    let value = AppError::ensure_finite(field, value)?;
    if range.contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, value, expected))
    }
}

fn out_of_range(field: &'static str, value: f64, expected: &str) -> AppError {
    AppError::value_out_of_range(format!("{field} must be within {expected}, got {value}"))
        .with_details(serde_json::json!({ "field": field, "value": value }))
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Sex
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Goal
    #[serde(default)]
    pub goal: Option<Goal>,
}

impl ProfilePatch {
    /// Profile with the patched fields replaced
    #[must_use]
    pub fn applied_to(self, base: ProfileInput) -> ProfileInput {
        ProfileInput {
            age: self.age.unwrap_or(base.age),
            sex: self.sex.unwrap_or(base.sex),
            height_cm: self.height_cm.unwrap_or(base.height_cm),
            weight_kg: self.weight_kg.unwrap_or(base.weight_kg),
            body_fat_percentage: self.body_fat_percentage.unwrap_or(base.body_fat_percentage),
            activity_level: self.activity_level.unwrap_or(base.activity_level),
            goal: self.goal.unwrap_or(base.goal),
        }
    }
}

/// The one stored profile of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Record id
    pub id: Uuid,
    /// Owner
    pub user_id: UserId,
    /// Profile fields
    #[serde(flatten)]
    pub details: ProfileInput,
    /// Created
    pub created_at: DateTime<Utc>,
    /// Last modified
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Engine input for this profile
    #[must_use]
    pub const fn snapshot(&self) -> ProfileSnapshot {
        self.details.snapshot()
    }
}

/// A stored daily log; at most one per user and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogRecord {
    /// Record id
    pub id: Uuid,
    /// Owner
    pub user_id: UserId,
    /// Logged values
    #[serde(flatten)]
    pub entry: DailyLogEntry,
    /// Created
    pub created_at: DateTime<Utc>,
    /// Last merged into
    pub updated_at: DateTime<Utc>,
}

impl DailyLogRecord {
    /// Calendar date of the record
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.entry.date
    }
}

/// Reject patches carrying non-finite or negative measurements
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` for NaN/infinity and
/// `ErrorCode::ValueOutOfRange` for negative intake or non-positive weight
pub fn validate_log_patch(patch: &DailyLogPatch) -> AppResult<()> {
    for (field, value) in [("calories", patch.calories), ("protein", patch.protein)] {
        if let Some(value) = value {
            if AppError::ensure_finite(field, value)? < 0.0 {
                return Err(out_of_range(field, value, "0 or more"));
            }
        }
    }
    if let Some(weight) = patch.weight {
        if AppError::ensure_finite("weight", weight)? <= 0.0 {
            return Err(out_of_range("weight", weight, "more than 0 kg"));
        }
    }
    Ok(())
}
