// ABOUTME: Trend window sizes and clamping bounds
// ABOUTME: Used by the record store window query and by configuration validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Smallest allowed trend window (days)
pub const MIN_WINDOW_DAYS: u32 = 1;

/// Largest allowed trend window (days)
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Window used when a trend query does not specify one
pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;

/// Window the dashboard judges adherence and real-world TDEE over
pub const DASHBOARD_WINDOW_DAYS: u32 = 14;

/// Window the history view charts
pub const HISTORY_WINDOW_DAYS: u32 = 30;
