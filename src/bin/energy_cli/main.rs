// ABOUTME: energy-cli - command-line front end for the energy balance engine
// ABOUTME: Computes targets from body composition and renders dashboard reports and history from log files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Targets for an 80 kg, 20 % body fat, lightly active user who wants to lose weight
//! energy-cli targets --weight-kg 80 --body-fat 20 --activity light --goal lose
//!
//! # Dashboard for the 14 days ending on the last logged date
//! energy-cli report --input logs.json
//!
//! # 30-day window with the regression weight trend, as JSON
//! energy-cli report --input logs.json --days 30 --algorithm regression --json
//!
//! # Logs of the last 30 days, newest first
//! energy-cli history --input logs.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use energy_balance::intelligence::TdeeEstimationAlgorithm;
use energy_balance::logging::LoggingConfig;
use energy_balance::models::{ActivityLevel, Goal, UnitSystem};
use energy_balance::store::parse_date;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "energy-cli",
    about = "Energy balance engine CLI",
    long_about = "Calculate calorie and protein targets, real-world TDEE and adherence from daily logs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate lean mass, BMR, TDEE and daily targets
    Targets {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Body fat percentage
        #[arg(long)]
        body_fat: f64,

        /// Activity level (sedentary, light, active, very-active)
        #[arg(long)]
        activity: ActivityLevel,

        /// Goal (lose, maintain, gain)
        #[arg(long)]
        goal: Goal,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the dashboard for a profile and its daily logs
    Report {
        /// JSON file holding `{"profile": {...}, "logs": [...]}`
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Last day of the window (YYYY-MM-DD, default: latest logged date)
        #[arg(long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,

        /// Window length in days (default: ENERGY_DASHBOARD_WINDOW_DAYS)
        #[arg(long)]
        days: Option<u32>,

        /// Weight-trend strategy (endpoints, regression)
        #[arg(long)]
        algorithm: Option<TdeeEstimationAlgorithm>,

        /// Display units (metric, imperial)
        #[arg(long)]
        units: Option<UnitSystem>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the logs of the history window with the current targets
    History {
        /// JSON file holding `{"profile": {...}, "logs": [...]}`
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Last day of the window (YYYY-MM-DD, default: latest logged date)
        #[arg(long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,

        /// Window length in days (default: ENERGY_HISTORY_WINDOW_DAYS)
        #[arg(long)]
        days: Option<u32>,

        /// Display units (metric, imperial)
        #[arg(long)]
        units: Option<UnitSystem>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if std::env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;

    match cli.command {
        Command::Targets {
            weight_kg,
            body_fat,
            activity,
            goal,
            json,
        } => commands::targets::run(weight_kg, body_fat, activity, goal, json),
        Command::Report {
            input,
            end_date,
            days,
            algorithm,
            units,
            json,
        } => {
            let options = commands::report::ReportOptions {
                end_date,
                days,
                algorithm,
                units,
                json,
            };
            commands::report::run(&input, options).await
        }
        Command::History {
            input,
            end_date,
            days,
            units,
            json,
        } => {
            let options = commands::history::HistoryOptions {
                end_date,
                days,
                units,
                json,
            };
            commands::history::run(&input, options).await
        }
    }
}
