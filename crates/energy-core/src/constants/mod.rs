// ABOUTME: Policy and physiological constants for the energy balance engine
// ABOUTME: Fixed formula coefficients, thresholds and unit factors organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used by the engine. None of these are configurable: targets and
//! classifications must be reproducible from the same profile and log window.

/// Metabolic formula coefficients and target policy
pub mod energy;

/// Adherence classification thresholds and data-sufficiency gates
pub mod adherence;

/// Unit conversion factors
pub mod units;

/// Date windowing limits for trend queries
pub mod windows;
