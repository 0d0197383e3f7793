// ABOUTME: Metabolic calculation and adherence classification engine
// ABOUTME: Pure, stateless functions over profile snapshots and daily log windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Engine
//!
//! Three independent pure components, composed by the caller:
//!
//! - [`target_calculator`]: lean mass, BMR, estimated TDEE, calorie and protein targets
//! - [`trend_estimator`]: real-world TDEE from intake and weight change
//! - [`adherence`]: on-track classification of a log window
//!
//! None of them hold state, perform I/O or read the clock, so identical inputs
//! always produce bit-identical outputs and calls may run concurrently.

/// Adherence classification
pub mod adherence;

/// Selectable algorithm strategies
pub mod algorithms;

/// Dashboard composition of the engine components
pub mod dashboard;

/// Target calculation
pub mod target_calculator;

/// Real-world TDEE estimation
pub mod trend_estimator;

pub use adherence::classify_adherence;
pub use algorithms::TdeeEstimationAlgorithm;
pub use dashboard::{DashboardReport, Progress};
pub use target_calculator::{
    calculate_bmr_katch_mcardle, calculate_calorie_target, calculate_estimated_tdee,
    calculate_lean_body_mass, calculate_protein_target, calculate_targets,
};
pub use trend_estimator::{
    estimate_real_world_tdee, estimate_real_world_tdee_with, RealWorldTdee, TdeeEstimate,
    UnavailableReason,
};
