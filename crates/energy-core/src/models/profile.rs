// ABOUTME: Profile snapshot and the enums describing activity, goal, sex and unit preference
// ABOUTME: Wire names match the stored record format (snake_case)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Habitual activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "not_very_active", alias = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "lightly_active", alias = "light")]
    Light,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "active")]
    Active,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    /// Stored name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "not_very_active",
            Self::Light => "lightly_active",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" | "not_very_active" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_format(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, active, very_active"
            ))),
        }
    }
}

/// Body-weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Stored name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_format(format!(
                "Unknown goal: '{other}'. Valid options: lose, maintain, gain"
            ))),
        }
    }
}

/// Sex recorded on the profile. Not a BMR input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Display unit preference. The engine always works in metric.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(AppError::invalid_format(format!(
                "Unknown unit system: '{other}'. Valid options: metric, imperial"
            ))),
        }
    }
}

/// Immutable body-composition snapshot the target calculator works from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileSnapshot {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage (0-100)
    pub body_fat_percentage: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal
    pub goal: Goal,
}

impl ProfileSnapshot {
    /// Create a snapshot
    #[must_use]
    pub const fn new(
        weight_kg: f64,
        body_fat_percentage: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            weight_kg,
            body_fat_percentage,
            activity_level,
            goal,
        }
    }
}
