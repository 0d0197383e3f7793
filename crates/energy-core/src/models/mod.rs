// ABOUTME: Domain models shared by the engine, the record store and the CLI
// ABOUTME: Profiles, daily logs, derived target sets and adherence results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models.
//!
//! Inputs ([`ProfileSnapshot`], [`DailyLogEntry`]) are owned by the caller and
//! never mutated by the engine. Outputs ([`TargetSet`], [`AdherenceResult`]) are
//! recomputed on every call and never persisted.

mod daily_log;
mod profile;
mod results;
mod user;

pub use daily_log::{DailyLogEntry, DailyLogPatch};
pub use profile::{ActivityLevel, Goal, ProfileSnapshot, Sex, UnitSystem};
pub use results::{AdherenceAverages, AdherenceResult, AdherenceStatus, TargetSet};
pub use user::UserId;
