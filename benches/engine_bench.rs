// ABOUTME: Criterion benchmarks for the energy balance engine
// ABOUTME: Measures target calculation, real-world TDEE estimation and adherence over growing windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the engine functions.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use energy_balance::intelligence::{
    calculate_targets, classify_adherence, estimate_real_world_tdee_with, TdeeEstimationAlgorithm,
};
use energy_balance::models::{ActivityLevel, DailyLogEntry, Goal, ProfileSnapshot};

/// Window sizes matching the dashboard, history and maximum trend queries
const WINDOW_SIZES: [u64; 3] = [14, 30, 365];

/// Daily logs with intake every day and a weigh-in every third day
#[allow(clippy::cast_precision_loss)]
fn generate_logs(days: u64) -> Vec<DailyLogEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..days)
        .filter_map(|offset| {
            let date = start.checked_add_days(Days::new(offset))?;
            let entry = DailyLogEntry::new(date)
                .with_calories(1900.0 + ((offset * 137) % 400) as f64)
                .with_protein(150.0);
            Some(if offset % 3 == 0 {
                entry.with_weight(0.03f64.mul_add(-(offset as f64), 85.0))
            } else {
                entry
            })
        })
        .collect()
}

fn bench_targets(c: &mut Criterion) {
    let profile = ProfileSnapshot::new(82.5, 22.0, ActivityLevel::Active, Goal::Lose);
    c.bench_function("calculate_targets", |b| {
        b.iter(|| calculate_targets(black_box(&profile)));
    });
}

fn bench_real_world_tdee(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_world_tdee");

    for days in WINDOW_SIZES {
        let logs = generate_logs(days);
        group.throughput(Throughput::Elements(days));
        for algorithm in [
            TdeeEstimationAlgorithm::Endpoints,
            TdeeEstimationAlgorithm::LinearRegression,
        ] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), days),
                &logs,
                |b, logs| {
                    b.iter(|| estimate_real_world_tdee_with(black_box(logs), algorithm));
                },
            );
        }
    }

    group.finish();
}

fn bench_adherence(c: &mut Criterion) {
    let mut group = c.benchmark_group("adherence");

    for days in WINDOW_SIZES {
        let logs = generate_logs(days);
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::from_parameter(days), &logs, |b, logs| {
            b.iter(|| classify_adherence(Goal::Lose, black_box(2100.0), black_box(logs)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_targets, bench_real_world_tdee, bench_adherence);
criterion_main!(benches);
