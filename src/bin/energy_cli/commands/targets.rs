// ABOUTME: Targets command for energy-cli
// ABOUTME: Runs the target calculator on a profile given as flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use energy_balance::intelligence::calculate_targets;
use energy_balance::models::{ActivityLevel, Goal, ProfileSnapshot};
use tracing::info;

use crate::helpers::display::display_targets;

/// Calculate and print targets
pub fn run(
    weight_kg: f64,
    body_fat_percentage: f64,
    activity_level: ActivityLevel,
    goal: Goal,
    json: bool,
) -> Result<()> {
    let profile = ProfileSnapshot::new(weight_kg, body_fat_percentage, activity_level, goal);
    let targets = calculate_targets(&profile).context("Failed to calculate targets")?;
    info!(
        calorie_target = targets.calorie_target_kcal_per_day,
        "Targets calculated"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        display_targets(&profile, &targets);
    }
    Ok(())
}
