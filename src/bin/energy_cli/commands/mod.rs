// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for energy-cli
// ABOUTME: Provides the targets, report and history commands

pub mod history;
pub mod report;
pub mod targets;
