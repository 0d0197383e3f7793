// ABOUTME: Core types and constants for the energy balance engine
// ABOUTME: Foundation crate with error handling, domain models, constants and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Energy Core
//!
//! Foundation crate providing shared types and constants for the energy balance
//! engine. It changes rarely, so downstream crates compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: formula coefficients, thresholds and window bounds
//! - **models**: profiles, daily logs, target sets and adherence results
//! - **units**: mass/length conversion and weight display formatting

/// Unified error handling with standard error codes
pub mod errors;

/// Policy constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

/// Unit conversion
pub mod units;
