// ABOUTME: Integration tests for real-world TDEE estimation from intake and weight change
// ABOUTME: Covers span and calorie-day gates, fixture arithmetic, ordering and the regression strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_close, calories_on, full_day, init_test_logging, weight_on, week_fixture,
};
use energy_balance::errors::ErrorCode;
use energy_balance::intelligence::{
    estimate_real_world_tdee, estimate_real_world_tdee_with, TdeeEstimate,
    TdeeEstimationAlgorithm, UnavailableReason,
};
use energy_balance::models::DailyLogEntry;

#[test]
fn test_week_fixture_arithmetic() {
    init_test_logging();

    let estimate = estimate_real_world_tdee(&week_fixture()).unwrap();
    let TdeeEstimate::Estimated(tdee) = estimate else {
        panic!("expected an estimate, got {estimate:?}");
    };

    let expected = 2050.0 - ((79.3 - 80.0) / 7.0) * 7700.0;
    assert_close(tdee.tdee_kcal, expected);
    assert_close(tdee.avg_calories, 2050.0);
    assert_close(tdee.weight_change_kg_per_day, -0.1);
    assert_eq!(tdee.days_between, 7);
    assert_eq!(tdee.calorie_days, 6);
    assert_eq!(tdee.algorithm, TdeeEstimationAlgorithm::Endpoints);
    assert_eq!(estimate.kcal(), Some(tdee.tdee_kcal));
}

#[test]
fn test_six_day_span_is_unavailable_regardless_of_calories() {
    let logs: Vec<DailyLogEntry> = (0..=6)
        .map(|offset| {
            let entry = calories_on(offset, 2000.0);
            match offset {
                0 => entry.with_weight(80.0),
                6 => entry.with_weight(79.5),
                _ => entry,
            }
        })
        .collect();

    let estimate = estimate_real_world_tdee(&logs).unwrap();
    assert_eq!(
        estimate,
        TdeeEstimate::Unavailable(UnavailableReason::SpanTooShort { days: 6 })
    );
    assert_eq!(estimate.kcal(), None);
}

#[test]
fn test_seven_day_span_with_five_calorie_days_is_finite() {
    let logs = vec![
        full_day(0, 2000.0, 80.0),
        calories_on(2, 2000.0),
        calories_on(3, 2000.0),
        calories_on(5, 2000.0),
        full_day(7, 2000.0, 80.0),
    ];

    let estimate = estimate_real_world_tdee(&logs).unwrap();
    assert!(estimate.is_available());
    assert_close(estimate.kcal().unwrap(), 2000.0);
}

#[test]
fn test_too_few_calorie_days_between_weigh_ins() {
    let logs = vec![
        full_day(0, 2000.0, 80.0),
        calories_on(2, 2000.0),
        calories_on(4, 2000.0),
        weight_on(7, 79.5),
    ];

    assert_eq!(
        estimate_real_world_tdee(&logs).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::InsufficientCalorieDays { found: 3 })
    );
}

#[test]
fn test_calories_outside_weigh_in_span_are_ignored() {
    // Five calorie days exist, but only three fall between the weigh-ins
    let logs = vec![
        calories_on(0, 2500.0),
        calories_on(1, 2500.0),
        full_day(2, 2000.0, 80.0),
        calories_on(5, 2000.0),
        full_day(9, 2000.0, 79.5),
    ];

    assert_eq!(
        estimate_real_world_tdee(&logs).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::InsufficientCalorieDays { found: 3 })
    );
}

#[test]
fn test_no_weigh_ins() {
    let logs: Vec<DailyLogEntry> = (0..10).map(|offset| calories_on(offset, 2000.0)).collect();
    assert_eq!(
        estimate_real_world_tdee(&logs).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::NoWeighIns)
    );
    assert_eq!(
        estimate_real_world_tdee(&[]).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::NoWeighIns)
    );
}

#[test]
fn test_single_weigh_in_has_zero_span() {
    let logs = vec![full_day(0, 2000.0, 80.0), calories_on(1, 2000.0)];
    assert_eq!(
        estimate_real_world_tdee(&logs).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::SpanTooShort { days: 0 })
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let mut reversed = week_fixture();
    reversed.reverse();

    assert_eq!(
        estimate_real_world_tdee(&reversed).unwrap(),
        estimate_real_world_tdee(&week_fixture()).unwrap()
    );
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let logs = week_fixture();
    let first = estimate_real_world_tdee(&logs).unwrap().kcal().unwrap();
    for _ in 0..10 {
        let again = estimate_real_world_tdee(&logs).unwrap().kcal().unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn test_non_finite_log_values_are_errors() {
    let mut logs = week_fixture();
    logs[1].calories = Some(f64::NAN);

    let err = estimate_real_world_tdee(&logs).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.details["field"], "calories");
    assert_eq!(err.details["date"], "2024-01-02");

    let mut logs = week_fixture();
    logs[0].weight = Some(f64::INFINITY);
    assert_eq!(
        estimate_real_world_tdee(&logs).unwrap_err().details["field"],
        "weight"
    );
}

#[test]
fn test_regression_uses_every_weigh_in() {
    let mut logs = vec![
        full_day(0, 2000.0, 80.0),
        calories_on(1, 2000.0),
        full_day(2, 2000.0, 79.0),
        calories_on(3, 2000.0),
        calories_on(4, 2000.0),
        full_day(14, 2000.0, 78.6),
    ];

    let endpoints = estimate_real_world_tdee_with(&logs, TdeeEstimationAlgorithm::Endpoints)
        .unwrap()
        .kcal()
        .unwrap();
    assert_close(endpoints, 2000.0 + 0.1 * 7700.0);

    let TdeeEstimate::Estimated(regression) =
        estimate_real_world_tdee_with(&logs, TdeeEstimationAlgorithm::LinearRegression).unwrap()
    else {
        panic!("regression estimate should be available");
    };
    assert_close(regression.weight_change_kg_per_day, -0.076_744_186_046_512);
    assert_eq!(
        regression.algorithm,
        TdeeEstimationAlgorithm::LinearRegression
    );

    // Same sparse-data gates as the endpoint strategy
    logs.retain(|entry| entry.date.to_string() != "2024-01-15");
    assert_eq!(
        estimate_real_world_tdee_with(&logs, TdeeEstimationAlgorithm::LinearRegression).unwrap(),
        TdeeEstimate::Unavailable(UnavailableReason::SpanTooShort { days: 2 })
    );
}

#[test]
fn test_unavailable_serializes_with_reason() {
    let json = serde_json::to_value(TdeeEstimate::Unavailable(
        UnavailableReason::SpanTooShort { days: 3 },
    ))
    .unwrap();
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["reason"], "span_too_short");
    assert_eq!(json["days"], 3);
}
