// ABOUTME: Real-world TDEE estimation from logged intake and observed weight change
// ABOUTME: Energy-balance identity over the span between the first and last weigh-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Estimator
//!
//! Infers energy expenditure empirically instead of from activity multipliers:
//!
//! `TDEE ≈ avg_calories - weight_change_kg_per_day x 7700`
//!
//! The window runs from the earliest to the latest weigh-in. An estimate needs
//! at least 7 calendar days between those weigh-ins and at least 5
//! calorie-logged days inside that span; otherwise the result is
//! [`TdeeEstimate::Unavailable`], which is an expected state and not an error.

use super::algorithms::{TdeeEstimationAlgorithm, WeighIn};
use energy_core::constants::adherence::{MIN_CALORIE_DAYS, MIN_TDEE_SPAN_DAYS};
use energy_core::constants::energy::KCAL_PER_KG_BODY_MASS;
use energy_core::errors::{AppError, AppResult};
use energy_core::models::DailyLogEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Why no estimate could be produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No entry in the window records a weight
    NoWeighIns,
    /// First and last weigh-in are less than a week apart
    SpanTooShort {
        /// Days between first and last weigh-in
        days: i64,
    },
    /// Fewer than five calorie-logged days between the weigh-ins
    InsufficientCalorieDays {
        /// Calorie-logged days found
        found: usize,
    },
    /// Arithmetic overflowed to a non-finite value
    NonFinite,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWeighIns => f.write_str("no weigh-ins in window"),
            Self::SpanTooShort { days } => write!(
                f,
                "weigh-ins span {days} days, need at least {MIN_TDEE_SPAN_DAYS}"
            ),
            Self::InsufficientCalorieDays { found } => write!(
                f,
                "{found} calorie-logged days, need at least {MIN_CALORIE_DAYS}"
            ),
            Self::NonFinite => f.write_str("estimate is not a finite number"),
        }
    }
}

/// A successful real-world TDEE estimate with the inputs that produced it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RealWorldTdee {
    /// Estimated expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Mean intake over calorie-logged days between the weigh-ins
    pub avg_calories: f64,
    /// Weight trend (kg/day)
    pub weight_change_kg_per_day: f64,
    /// Calendar days between first and last weigh-in
    pub days_between: i64,
    /// Calorie-logged days averaged
    pub calorie_days: usize,
    /// Weight-trend strategy used
    pub algorithm: TdeeEstimationAlgorithm,
}

/// Outcome of a real-world TDEE estimation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TdeeEstimate {
    /// Enough data to estimate
    Estimated(RealWorldTdee),
    /// Not enough data; render guidance, never a zero
    Unavailable(UnavailableReason),
}

impl TdeeEstimate {
    /// Estimated kcal/day, if available
    #[must_use]
    pub const fn kcal(&self) -> Option<f64> {
        match self {
            Self::Estimated(estimate) => Some(estimate.tdee_kcal),
            Self::Unavailable(_) => None,
        }
    }

    /// True when an estimate was produced
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Estimated(_))
    }
}

/// Estimate real-world TDEE using the first and last weigh-in
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if any logged calorie or weight value is
/// not finite
pub fn estimate_real_world_tdee(logs: &[DailyLogEntry]) -> AppResult<TdeeEstimate> {
    estimate_real_world_tdee_with(logs, TdeeEstimationAlgorithm::Endpoints)
}

/// Estimate real-world TDEE with an explicit weight-trend strategy
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if any logged calorie or weight value is
/// not finite
pub fn estimate_real_world_tdee_with(
    logs: &[DailyLogEntry],
    algorithm: TdeeEstimationAlgorithm,
) -> AppResult<TdeeEstimate> {
    let sorted = sorted_by_date(logs)?;

    let weighed = || {
        sorted
            .iter()
            .filter_map(|entry| entry.weight.map(|weight| (entry.date, weight)))
    };
    let (Some((start_date, _)), Some((end_date, _))) = (weighed().next(), weighed().last()) else {
        debug!("Real-world TDEE unavailable: no weigh-ins");
        return Ok(TdeeEstimate::Unavailable(UnavailableReason::NoWeighIns));
    };

    let days_between = (end_date - start_date).num_days();
    if days_between < MIN_TDEE_SPAN_DAYS {
        debug!(days_between, "Real-world TDEE unavailable: span too short");
        return Ok(TdeeEstimate::Unavailable(UnavailableReason::SpanTooShort {
            days: days_between,
        }));
    }

    let in_span = || {
        sorted
            .iter()
            .filter(move |entry| entry.date >= start_date && entry.date <= end_date)
    };
    let calories: Vec<f64> = in_span().filter_map(|entry| entry.calories).collect();
    if calories.len() < MIN_CALORIE_DAYS {
        debug!(
            calorie_days = calories.len(),
            "Real-world TDEE unavailable: insufficient calorie days"
        );
        return Ok(TdeeEstimate::Unavailable(
            UnavailableReason::InsufficientCalorieDays {
                found: calories.len(),
            },
        ));
    }

    let avg_calories = calories.iter().sum::<f64>() / calories.len() as f64;

    let weigh_ins: Vec<WeighIn> = in_span()
        .filter_map(|entry| {
            entry.weight.map(|weight_kg| WeighIn {
                day_offset: (entry.date - start_date).num_days(),
                weight_kg,
            })
        })
        .collect();
    let weight_change_kg_per_day = algorithm.weight_change_per_day(&weigh_ins, days_between);

    let tdee_kcal = weight_change_kg_per_day.mul_add(-KCAL_PER_KG_BODY_MASS, avg_calories);
    if !tdee_kcal.is_finite() {
        return Ok(TdeeEstimate::Unavailable(UnavailableReason::NonFinite));
    }

    debug!(
        algorithm = %algorithm,
        days_between,
        calorie_days = calories.len(),
        tdee_kcal,
        "Estimated real-world TDEE"
    );

    Ok(TdeeEstimate::Estimated(RealWorldTdee {
        tdee_kcal,
        avg_calories,
        weight_change_kg_per_day,
        days_between,
        calorie_days: calories.len(),
        algorithm,
    }))
}

/// Validate numeric fields and sort the window by date ascending
///
/// Shared with the adherence classifier. Duplicate dates violate the record
/// store's one-entry-per-date invariant and are asserted against in debug builds.
pub(crate) fn sorted_by_date(logs: &[DailyLogEntry]) -> AppResult<Vec<&DailyLogEntry>> {
    for entry in logs {
        for (field, value) in [("calories", entry.calories), ("weight", entry.weight)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(AppError::invalid_input(format!(
                    "{field} logged on {} must be a finite number",
                    entry.date
                ))
                .with_details(serde_json::json!({ "field": field, "date": entry.date })));
            }
        }
    }

    let mut sorted: Vec<&DailyLogEntry> = logs.iter().collect();
    sorted.sort_by_key(|entry| entry.date);

    debug_assert!(
        sorted.windows(2).all(|pair| pair[0].date < pair[1].date),
        "daily logs must contain at most one entry per date"
    );

    Ok(sorted)
}
