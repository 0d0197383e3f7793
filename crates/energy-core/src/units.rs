// ABOUTME: Mass and length conversions plus weight display formatting
// ABOUTME: Normalizes imperial input to the metric values the engine works in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{CM_PER_IN, KG_PER_LB};
use crate::models::UnitSystem;

/// Pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Round to one decimal place
#[must_use]
pub fn round_to_1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// Weight in the user's display unit, e.g. `"79.3 kg"` or `"174.8 lb"`
#[must_use]
pub fn format_weight_display(weight_kg: f64, unit_system: UnitSystem) -> String {
    match unit_system {
        UnitSystem::Imperial => format!("{} lb", round_to_1(kg_to_lbs(weight_kg))),
        UnitSystem::Metric => format!("{} kg", round_to_1(weight_kg)),
    }
}

/// Weight entered in the user's display unit, normalized to kilograms
#[must_use]
pub fn weight_input_to_kg(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => lbs_to_kg(value),
        UnitSystem::Metric => value,
    }
}

/// Height entered in the user's display unit, normalized to centimeters
#[must_use]
pub fn height_input_to_cm(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => inches_to_cm(value),
        UnitSystem::Metric => value,
    }
}
