// ABOUTME: History command for energy-cli
// ABOUTME: Lists the daily logs of the trailing history window next to the current targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::NaiveDate;
use energy_balance::config::EngineConfig;
use energy_balance::intelligence::calculate_targets;
use energy_balance::models::{DailyLogEntry, TargetSet, UnitSystem};
use energy_balance::store::RecordStore;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_history;
use crate::helpers::input::load_store;

/// Flags of the history command; `None` falls back to `EngineConfig`
pub struct HistoryOptions {
    pub end_date: Option<NaiveDate>,
    pub days: Option<u32>,
    pub units: Option<UnitSystem>,
    pub json: bool,
}

#[derive(Serialize)]
struct HistoryOutput<'a> {
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u32,
    unit_system: UnitSystem,
    targets: &'a TargetSet,
    /// Newest first
    logs: Vec<&'a DailyLogEntry>,
}

/// Print the logs of the history window ending on the latest logged date
pub async fn run(input_path: &Path, options: HistoryOptions) -> Result<()> {
    let config = EngineConfig::global();
    let days = options.days.unwrap_or(config.history_window_days);
    let unit_system = options.units.unwrap_or(config.unit_system);

    let loaded = load_store(input_path, unit_system).await?;
    let end_date = options.end_date.unwrap_or(loaded.last_logged);
    let window = loaded
        .store
        .get_trends(&loaded.user_id, end_date, Some(days))
        .await?;
    let targets = calculate_targets(&loaded.profile.snapshot())?;
    info!(
        start_date = %window.start_date,
        end_date = %window.end_date,
        logged_days = window.logs.len(),
        "History window loaded"
    );

    let newest_first: Vec<&DailyLogEntry> = window.logs.iter().rev().collect();
    if options.json {
        let output = HistoryOutput {
            start_date: window.start_date,
            end_date: window.end_date,
            days: window.days,
            unit_system,
            targets: &targets,
            logs: newest_first,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_history(&window, &newest_first, &targets, unit_system);
    }
    Ok(())
}
