// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for energy-cli
// ABOUTME: Provides input loading and text rendering of targets, reports and history

pub mod display;
pub mod input;
