// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup, date helpers and daily log window builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `energy_balance`

use chrono::{Days, NaiveDate};
use energy_balance::models::{ActivityLevel, DailyLogEntry, Goal, ProfileSnapshot, Sex};
use energy_balance::store::ProfileInput;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date from parts
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 2024-01-01 plus `offset` days
pub fn day(offset: u64) -> NaiveDate {
    date(2024, 1, 1).checked_add_days(Days::new(offset)).unwrap()
}

/// Entry with calories only
pub fn calories_on(offset: u64, calories: f64) -> DailyLogEntry {
    DailyLogEntry::new(day(offset)).with_calories(calories)
}

/// Entry with a weigh-in only
pub fn weight_on(offset: u64, weight_kg: f64) -> DailyLogEntry {
    DailyLogEntry::new(day(offset)).with_weight(weight_kg)
}

/// Entry with calories and a weigh-in
pub fn full_day(offset: u64, calories: f64, weight_kg: f64) -> DailyLogEntry {
    DailyLogEntry::new(day(offset))
        .with_calories(calories)
        .with_weight(weight_kg)
}

/// One week: weigh-ins on days 0 and 7 (80.0 -> 79.3 kg) and six calorie days
/// averaging 2050 kcal
pub fn week_fixture() -> Vec<DailyLogEntry> {
    vec![
        full_day(0, 2200.0, 80.0),
        calories_on(1, 2000.0),
        calories_on(2, 2100.0),
        calories_on(3, 2000.0),
        calories_on(4, 1900.0),
        full_day(7, 2100.0, 79.3),
    ]
}

/// `days` consecutive days of identical intake with weigh-ins on the first and
/// last day
pub fn steady_window(days: u64, calories: f64, start_kg: f64, end_kg: f64) -> Vec<DailyLogEntry> {
    (0..days)
        .map(|offset| {
            let entry = calories_on(offset, calories);
            if offset == 0 {
                entry.with_weight(start_kg)
            } else if offset == days - 1 {
                entry.with_weight(end_kg)
            } else {
                entry
            }
        })
        .collect()
}

/// 80 kg, 20 % body fat, lightly active, losing
pub const fn sample_snapshot() -> ProfileSnapshot {
    ProfileSnapshot::new(80.0, 20.0, ActivityLevel::Light, Goal::Lose)
}

/// Onboarding answers matching [`sample_snapshot`]
pub const fn sample_profile_input() -> ProfileInput {
    ProfileInput {
        age: 34,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        body_fat_percentage: 20.0,
        activity_level: ActivityLevel::Light,
        goal: Goal::Lose,
    }
}

/// Absolute-tolerance float comparison
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
