// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Selects the TDEE weight-trend strategy, default trend windows and display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Only operational choices are configurable. Formula coefficients and
//! classification thresholds are fixed in `energy_core::constants` so that
//! targets and statuses stay reproducible.
//!
//! | Variable | Default |
//! |---|---|
//! | `ENERGY_TDEE_ALGORITHM` | `endpoints` |
//! | `ENERGY_DASHBOARD_WINDOW_DAYS` | `14` |
//! | `ENERGY_HISTORY_WINDOW_DAYS` | `30` |
//! | `ENERGY_UNIT_SYSTEM` | `metric` |

use super::error::ConfigError;
use crate::intelligence::TdeeEstimationAlgorithm;
use energy_core::constants::windows::{
    DASHBOARD_WINDOW_DAYS, HISTORY_WINDOW_DAYS, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS,
};
use energy_core::models::UnitSystem;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Operational configuration for callers of the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weight-trend strategy for real-world TDEE
    pub tdee_algorithm: TdeeEstimationAlgorithm,
    /// Trailing window judged on the dashboard (days)
    pub dashboard_window_days: u32,
    /// Trailing window shown in history (days)
    pub history_window_days: u32,
    /// Display units for new users and CLI output
    pub unit_system: UnitSystem,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tdee_algorithm: TdeeEstimationAlgorithm::default(),
            dashboard_window_days: DASHBOARD_WINDOW_DAYS,
            history_window_days: HISTORY_WINDOW_DAYS,
            unit_system: UnitSystem::default(),
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;

        info!(
            tdee_algorithm = %config.tdee_algorithm,
            dashboard_window_days = config.dashboard_window_days,
            history_window_days = config.history_window_days,
            unit_system = ?config.unit_system,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a window is outside 1..=365 days
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window_range = MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS;
        if !window_range.contains(&self.dashboard_window_days) {
            return Err(ConfigError::InvalidRange(
                "dashboard_window_days must be between 1 and 365",
            ));
        }
        if !window_range.contains(&self.history_window_days) {
            return Err(ConfigError::InvalidRange(
                "history_window_days must be between 1 and 365",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("ENERGY_TDEE_ALGORITHM", &mut self.tdee_algorithm)?;
        Self::apply_env_var(
            "ENERGY_DASHBOARD_WINDOW_DAYS",
            &mut self.dashboard_window_days,
        )?;
        Self::apply_env_var("ENERGY_HISTORY_WINDOW_DAYS", &mut self.history_window_days)?;
        Self::apply_env_var("ENERGY_UNIT_SYSTEM", &mut self.unit_system)?;
        Ok(self)
    }
}
