// ABOUTME: Thresholds for adherence classification and real-world TDEE sufficiency gates
// ABOUTME: Calorie tolerance bands, weight-trend bands and minimum sample counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Average intake within this many kcal of target counts as on track (inclusive)
pub const ON_TRACK_CALORIE_TOLERANCE_KCAL: f64 = 200.0;

/// Average intake within this many kcal of target counts as close (inclusive)
pub const CLOSE_CALORIE_TOLERANCE_KCAL: f64 = 350.0;

/// A losing goal needs the window weight change strictly below `-this` (kg)
pub const LOSE_MIN_WEIGHT_DROP_KG: f64 = 0.1;

/// A gaining goal needs the window weight change strictly above this (kg)
pub const GAIN_MIN_WEIGHT_RISE_KG: f64 = 0.1;

/// A maintenance goal tolerates this much absolute change (kg, inclusive)
pub const MAINTAIN_WEIGHT_TOLERANCE_KG: f64 = 0.2;

/// Minimum calorie-logged days before adherence or TDEE is judged
pub const MIN_CALORIE_DAYS: usize = 5;

/// Minimum weigh-ins before adherence is judged
pub const MIN_WEIGH_INS: usize = 2;

/// Minimum span between first and last weigh-in for a TDEE estimate (days)
pub const MIN_TDEE_SPAN_DAYS: i64 = 7;

/// Guidance shown when there is not enough data to classify adherence
pub const INSUFFICIENT_DATA_GUIDANCE: &str = "Log at least a week of calories + a few weigh-ins.";
