// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for energy-cli
// ABOUTME: Renders targets, dashboard reports and log history in the user's display units

use energy_balance::intelligence::{DashboardReport, Progress, TdeeEstimate};
use energy_balance::models::{DailyLogEntry, ProfileSnapshot, TargetSet, UnitSystem};
use energy_balance::store::{ProfileInput, TrendWindow};
use energy_balance::units::format_weight_display;

/// Display a target set
pub fn display_targets(profile: &ProfileSnapshot, targets: &TargetSet) {
    println!("\nTargets ({} / {})", profile.activity_level, profile.goal);
    println!("{}", "=".repeat(50));
    print_metabolism(targets, UnitSystem::Metric);
    println!(
        "   Calorie target: {} kcal/day",
        targets.calorie_target_kcal_per_day.round()
    );
    println!(
        "   Protein target: {} g/day",
        targets.protein_target_grams_per_day
    );
}

/// Display a dashboard report
pub fn display_report(
    profile: &ProfileInput,
    window: &TrendWindow,
    report: &DashboardReport,
    unit_system: UnitSystem,
) {
    println!("\nToday: {}", window.end_date);
    println!(
        "Window: {} to {} ({} days, {} logged)",
        window.start_date,
        window.end_date,
        window.days,
        window.logs.len()
    );

    println!("\nProgress");
    println!("{}", "=".repeat(50));
    print_progress("Calories", &report.calories_today, "kcal");
    print_progress("Protein", &report.protein_today, "g");
    println!(
        "   On track: {}  {}",
        report.adherence.status.label(),
        report.adherence.detail
    );

    println!(
        "\nMetabolism: {} kcal ({} target)",
        report.targets.calorie_target_kcal_per_day.round(),
        profile.goal.as_str().to_uppercase()
    );
    println!("{}", "=".repeat(50));
    println!(
        "   Weight: {}",
        format_weight_display(profile.weight_kg, unit_system)
    );
    print_metabolism(&report.targets, unit_system);
    match &report.real_world_tdee {
        TdeeEstimate::Estimated(estimate) => println!(
            "   Real-world TDEE: {} kcal/day (over {} days)",
            estimate.tdee_kcal.round(),
            estimate.days_between
        ),
        TdeeEstimate::Unavailable(reason) => {
            println!("   Real-world TDEE: Not enough data yet ({reason})");
        }
    }
}

/// Display the history window, at most 14 entries newest first
pub fn display_history(
    window: &TrendWindow,
    newest_first: &[&DailyLogEntry],
    targets: &TargetSet,
    unit_system: UnitSystem,
) {
    const RECENT_LOGS_SHOWN: usize = 14;

    println!("\nHistory: last {} days", window.days);
    println!("Window: {} to {}", window.start_date, window.end_date);
    println!(
        "Targets: {} kcal/day, {} g protein/day",
        targets.calorie_target_kcal_per_day.round(),
        targets.protein_target_grams_per_day
    );

    println!("\nRecent logs");
    println!("{}", "=".repeat(50));
    if newest_first.is_empty() {
        println!("   No logs yet.");
        return;
    }
    for entry in newest_first.iter().take(RECENT_LOGS_SHOWN) {
        let weight = entry
            .weight
            .map_or_else(String::new, |kg| format_weight_display(kg, unit_system));
        let calories = entry
            .calories
            .map_or_else(|| "-".to_owned(), |kcal| format!("{} kcal", kcal.round()));
        let protein = entry
            .protein
            .map_or_else(|| "-".to_owned(), |grams| format!("{} g protein", grams.round()));
        println!("   {}  {weight:>9}  {calories} / {protein}", entry.date);
        if let Some(notes) = entry.notes.as_deref().filter(|notes| !notes.is_empty()) {
            println!("      {notes}");
        }
    }
}

fn print_metabolism(targets: &TargetSet, unit_system: UnitSystem) {
    println!(
        "   Lean body mass: {}",
        format_weight_display(targets.lean_body_mass_kg, unit_system)
    );
    println!(
        "   BMR (Katch-McArdle): {} kcal/day",
        targets.bmr_kcal_per_day.round()
    );
    println!(
        "   Estimated TDEE: {} kcal/day",
        targets.estimated_tdee_kcal_per_day.round()
    );
}

fn print_progress(label: &str, progress: &Progress, unit: &str) {
    const BAR_WIDTH: usize = 20;
    let filled = (progress.fraction * BAR_WIDTH as f64).round() as usize;
    println!(
        "   {label:<9}[{}{}] {} / {} {unit}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.current.round(),
        progress.target.round()
    );
}
