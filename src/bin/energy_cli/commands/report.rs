// ABOUTME: Report command for energy-cli
// ABOUTME: Loads a profile and logs into an in-memory store, queries the window and renders the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::NaiveDate;
use energy_balance::config::EngineConfig;
use energy_balance::intelligence::{DashboardReport, TdeeEstimationAlgorithm};
use energy_balance::models::UnitSystem;
use energy_balance::store::{RecordStore, TrendWindow};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_report;
use crate::helpers::input::load_store;

/// Flags of the report command; `None` falls back to `EngineConfig`
pub struct ReportOptions {
    pub end_date: Option<NaiveDate>,
    pub days: Option<u32>,
    pub algorithm: Option<TdeeEstimationAlgorithm>,
    pub units: Option<UnitSystem>,
    pub json: bool,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u32,
    logged_days: usize,
    unit_system: UnitSystem,
    #[serde(flatten)]
    report: &'a DashboardReport,
}

/// Build and print the dashboard report for an input file
pub async fn run(input_path: &Path, options: ReportOptions) -> Result<()> {
    let config = EngineConfig::global();
    let algorithm = options.algorithm.unwrap_or(config.tdee_algorithm);
    let days = options.days.unwrap_or(config.dashboard_window_days);
    let unit_system = options.units.unwrap_or(config.unit_system);

    let loaded = load_store(input_path, unit_system).await?;
    let end_date = options.end_date.unwrap_or(loaded.last_logged);
    let window: TrendWindow = loaded
        .store
        .get_trends(&loaded.user_id, end_date, Some(days))
        .await?;

    let report = DashboardReport::build(
        &loaded.profile.snapshot(),
        window.log_on(end_date),
        &window.logs,
        algorithm,
    )?;
    info!(
        start_date = %window.start_date,
        end_date = %window.end_date,
        status = ?report.adherence.status,
        "Dashboard report built"
    );

    if options.json {
        let output = ReportOutput {
            start_date: window.start_date,
            end_date: window.end_date,
            days: window.days,
            logged_days: window.logs.len(),
            unit_system,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_report(&loaded.profile.details, &window, &report, unit_system);
    }
    Ok(())
}
