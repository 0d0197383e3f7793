// ABOUTME: Weight-trend strategies for inferring real-world TDEE from weigh-ins
// ABOUTME: Endpoint slope (first/last weigh-in) and least-squares regression over all weigh-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use energy_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One weigh-in positioned by whole days since the first weigh-in of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeighIn {
    /// Days since the first weigh-in (0 for the first)
    pub day_offset: i64,
    /// Weight (kg)
    pub weight_kg: f64,
}

/// Strategy for turning weigh-ins into a daily weight-change rate
///
/// Both strategies sit behind the same sufficiency gates (span of at least a
/// week, at least five calorie-logged days); they only differ in how the
/// kg/day slope is measured.
///
/// - `Endpoints`: (last - first) / days. Deterministic and simple, but a single
///   noisy weigh-in at either edge moves the whole estimate.
/// - `LinearRegression`: least-squares slope of weight against day offset over
///   every weigh-in in the window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TdeeEstimationAlgorithm {
    /// First and last weigh-in only
    #[default]
    Endpoints,
    /// Ordinary least squares over all weigh-ins
    LinearRegression,
}

impl TdeeEstimationAlgorithm {
    /// Daily weight change (kg/day) across the window
    ///
    /// `weigh_ins` must be sorted by `day_offset`, start at offset 0 and end at
    /// `days_between`; the caller guarantees `days_between > 0`.
    #[must_use]
    pub fn weight_change_per_day(self, weigh_ins: &[WeighIn], days_between: i64) -> f64 {
        let endpoint_slope = || match (weigh_ins.first(), weigh_ins.last()) {
            (Some(first), Some(last)) => (last.weight_kg - first.weight_kg) / days_between as f64,
            _ => f64::NAN,
        };

        match self {
            Self::Endpoints => endpoint_slope(),
            Self::LinearRegression => least_squares_slope(weigh_ins).unwrap_or_else(endpoint_slope),
        }
    }

    /// Algorithm name for logging and configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Endpoints => "endpoints",
            Self::LinearRegression => "linear_regression",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Endpoints => "Endpoints: (last weigh-in - first weigh-in) / days",
            Self::LinearRegression => "Linear regression: least-squares slope over all weigh-ins",
        }
    }
}

impl fmt::Display for TdeeEstimationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TdeeEstimationAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "endpoints" | "endpoint" => Ok(Self::Endpoints),
            "linear_regression" | "regression" => Ok(Self::LinearRegression),
            other => Err(AppError::invalid_format(format!(
                "Unknown TDEE estimation algorithm: '{other}'. Valid options: endpoints, regression"
            ))),
        }
    }
}

/// Least-squares slope of weight against day offset; `None` without x variance
fn least_squares_slope(weigh_ins: &[WeighIn]) -> Option<f64> {
    if weigh_ins.len() < 2 {
        return None;
    }

    let n = weigh_ins.len() as f64;
    let mean_x = weigh_ins.iter().map(|w| w.day_offset as f64).sum::<f64>() / n;
    let mean_y = weigh_ins.iter().map(|w| w.weight_kg).sum::<f64>() / n;

    let (covariance, variance) =
        weigh_ins
            .iter()
            .fold((0.0_f64, 0.0_f64), |(cov, var), w| {
                let dx = w.day_offset as f64 - mean_x;
                (dx.mul_add(w.weight_kg - mean_y, cov), dx.mul_add(dx, var))
            });

    if variance.abs() < f64::EPSILON {
        return None;
    }

    Some(covariance / variance)
}
