// ABOUTME: Main library entry point for the energy balance engine
// ABOUTME: Metabolic targets, real-world TDEE and adherence classification over daily logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Energy Balance Engine
//!
//! Turns a body-composition profile and a history of daily logs (calories,
//! protein, weight) into three results:
//!
//! - **Targets**: lean body mass, Katch-McArdle BMR, activity-scaled TDEE, and
//!   daily calorie and protein targets
//! - **Real-world TDEE**: expenditure inferred from logged intake and observed
//!   weight change, or an explicit "not enough data"
//! - **Adherence**: whether recent behavior is on track for the goal
//!
//! ## Architecture
//!
//! - **intelligence**: the pure engine functions and the dashboard composer
//! - **store**: per-user profile and daily log persistence with trend windows
//! - **auth**: identity to user-id resolution
//! - **config**: environment-driven engine settings
//! - **logging**: `tracing` subscriber setup
//!
//! Core types (errors, models, constants, unit conversion) live in the
//! `energy-core` crate and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust
//! use energy_balance::errors::AppResult;
//! use energy_balance::intelligence::calculate_targets;
//! use energy_balance::models::{ActivityLevel, Goal, ProfileSnapshot};
//!
//! fn main() -> AppResult<()> {
//!     let profile = ProfileSnapshot::new(80.0, 20.0, ActivityLevel::Light, Goal::Lose);
//!     let targets = calculate_targets(&profile)?;
//!     assert_eq!(targets.protein_target_grams_per_day, 176.0);
//!     Ok(())
//! }
//! ```

/// Identity and user-id resolution
pub mod auth;

/// Engine configuration
pub mod config;

/// Metabolic calculation and adherence engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Record store for users, profiles and daily logs
pub mod store;

pub use energy_core::{constants, errors, models, units};
