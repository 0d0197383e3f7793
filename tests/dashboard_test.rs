// ABOUTME: Integration tests for the dashboard report and progress indicators
// ABOUTME: Composes targets, today's intake, real-world TDEE and adherence for one window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, sample_snapshot, steady_window, week_fixture};
use energy_balance::intelligence::{
    DashboardReport, Progress, TdeeEstimate, TdeeEstimationAlgorithm, UnavailableReason,
};
use energy_balance::models::{AdherenceStatus, DailyLogEntry};

#[test]
fn test_progress_fraction_is_clamped() {
    assert_close(Progress::new(500.0, 2000.0).fraction, 0.25);
    assert_eq!(Progress::new(3000.0, 2000.0).fraction, 1.0);
    assert_eq!(Progress::new(-10.0, 2000.0).fraction, 0.0);
}

#[test]
fn test_progress_non_positive_target_counts_as_one() {
    assert_eq!(Progress::new(0.0, 0.0).fraction, 0.0);
    assert_eq!(Progress::new(5.0, 0.0).fraction, 1.0);
    assert_eq!(Progress::new(0.5, -100.0).fraction, 0.5);
    assert_eq!(Progress::new(0.5, -100.0).target, -100.0);
}

#[test]
fn test_report_without_logs() {
    init_test_logging();

    let report = DashboardReport::build(
        &sample_snapshot(),
        None,
        &[],
        TdeeEstimationAlgorithm::Endpoints,
    )
    .unwrap();

    assert_eq!(report.calories_today.current, 0.0);
    assert_eq!(report.protein_today.current, 0.0);
    assert_close(report.calories_today.target, 1909.55);
    assert_eq!(report.protein_today.target, 176.0);
    assert_eq!(
        report.real_world_tdee,
        TdeeEstimate::Unavailable(UnavailableReason::NoWeighIns)
    );
    assert_eq!(report.adherence.status, AdherenceStatus::Unknown);
}

#[test]
fn test_report_with_today_and_trend() {
    let logs = week_fixture();
    let today = DailyLogEntry::new(logs[5].date)
        .with_calories(955.0)
        .with_protein(88.0);

    let report = DashboardReport::build(
        &sample_snapshot(),
        Some(&today),
        &logs,
        TdeeEstimationAlgorithm::Endpoints,
    )
    .unwrap();

    assert_close(report.calories_today.fraction, 955.0 / 1909.55);
    assert_close(report.protein_today.fraction, 0.5);
    assert_close(report.real_world_tdee.kcal().unwrap(), 2820.0);
    assert_eq!(report.adherence.status, AdherenceStatus::OnTrack);
}

#[test]
fn test_report_on_track_window() {
    let logs = steady_window(14, 1900.0, 80.0, 79.4);
    let report = DashboardReport::build(
        &sample_snapshot(),
        logs.last(),
        &logs,
        TdeeEstimationAlgorithm::LinearRegression,
    )
    .unwrap();

    assert_eq!(report.adherence.status, AdherenceStatus::OnTrack);
    let TdeeEstimate::Estimated(tdee) = report.real_world_tdee else {
        panic!("expected estimate");
    };
    assert_eq!(tdee.days_between, 13);
    assert_eq!(tdee.algorithm, TdeeEstimationAlgorithm::LinearRegression);
}

#[test]
fn test_report_serializes() {
    let report = DashboardReport::build(
        &sample_snapshot(),
        None,
        &week_fixture(),
        TdeeEstimationAlgorithm::Endpoints,
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["real_world_tdee"]["status"], "estimated");
    assert_eq!(json["adherence"]["status"], "on_track");
    assert_eq!(json["targets"]["protein_target_grams_per_day"], 176.0);
}
