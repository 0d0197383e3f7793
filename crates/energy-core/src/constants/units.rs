// ABOUTME: Unit conversion constants for mass and length
// ABOUTME: Exact international definitions of the pound and the inch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per international avoirdupois pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
