// ABOUTME: Configuration module for the energy balance engine
// ABOUTME: Environment-driven engine settings plus their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (TDEE strategy, trend windows, display units)
pub mod engine;

/// Configuration error types
pub mod error;

pub use engine::EngineConfig;
pub use error::ConfigError;
