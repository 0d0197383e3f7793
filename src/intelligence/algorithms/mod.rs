// ABOUTME: Selectable algorithm implementations used by the intelligence engine
// ABOUTME: Enum dispatch keeps strategy choice type-safe and configuration-driven
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weight-trend strategies for real-world TDEE estimation
pub mod tdee_estimation;

pub use tdee_estimation::{TdeeEstimationAlgorithm, WeighIn};
