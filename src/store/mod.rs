// ABOUTME: Record store abstraction for users, profiles and per-date daily logs
// ABOUTME: Async trait with merge-upsert by date, inclusive range queries and trend windowing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Store
//!
//! Per user the store holds at most one profile and at most one daily log per
//! calendar date. Writes to a date merge into the existing record, so logging
//! food and logging a weigh-in on the same day produce a single entry.
//!
//! Trend windows end on a caller-supplied date and span
//! `clamp(days, 1, 365)` calendar days, both ends inclusive.

/// In-memory implementation
pub mod memory;

/// Stored record types
pub mod records;

pub use memory::InMemoryStore;
pub use records::{DailyLogRecord, ProfileInput, ProfilePatch, ProfileRecord, UserRecord};

use crate::auth::Identity;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use energy_core::constants::windows::{DEFAULT_TREND_WINDOW_DAYS, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS};
use energy_core::errors::{AppError, AppResult};
use energy_core::models::{DailyLogEntry, DailyLogPatch, UnitSystem, UserId};
use serde::{Deserialize, Serialize};

/// Logs of one trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendWindow {
    /// First day (inclusive)
    pub start_date: NaiveDate,
    /// Last day (inclusive)
    pub end_date: NaiveDate,
    /// Window length after clamping
    pub days: u32,
    /// Logs in the window, date ascending
    pub logs: Vec<DailyLogEntry>,
}

impl TrendWindow {
    /// Log for a given day inside the window
    #[must_use]
    pub fn log_on(&self, date: NaiveDate) -> Option<&DailyLogEntry> {
        self.logs.iter().find(|entry| entry.date == date)
    }
}

/// Clamp a requested window length to 1..=365, defaulting to 30
#[must_use]
pub fn clamp_window_days(days: Option<u32>) -> u32 {
    days.unwrap_or(DEFAULT_TREND_WINDOW_DAYS)
        .clamp(MIN_WINDOW_DAYS, MAX_WINDOW_DAYS)
}

/// First day of a `days`-long window ending on `end_date`
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the start would fall before the
/// earliest representable date
pub fn window_start(end_date: NaiveDate, days: u32) -> AppResult<NaiveDate> {
    end_date
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .ok_or_else(|| {
            AppError::invalid_input(format!("window of {days} days ending {end_date} is out of range"))
        })
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the string is not a valid date
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}

/// Persistence for users, profiles and daily logs
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the user on first sight, otherwise refresh `last_seen_at` and
    /// any identity fields the provider now supplies
    async fn ensure_user(&self, identity: &Identity) -> AppResult<UserRecord>;

    /// Same upsert as [`RecordStore::ensure_user`], also setting the unit preference
    async fn set_unit_system(
        &self,
        identity: &Identity,
        unit_system: UnitSystem,
    ) -> AppResult<UserRecord>;

    /// Look up a user
    async fn get_user(&self, user_id: &UserId) -> AppResult<Option<UserRecord>>;

    /// The user's profile, if onboarding happened
    async fn get_profile(&self, user_id: &UserId) -> AppResult<Option<ProfileRecord>>;

    /// Create the profile, or overwrite every field of an existing one
    async fn create_profile(
        &self,
        user_id: &UserId,
        input: ProfileInput,
    ) -> AppResult<ProfileRecord>;

    /// Change some profile fields; fails with `ResourceNotFound` when there is
    /// no profile yet
    async fn update_profile(
        &self,
        user_id: &UserId,
        patch: ProfilePatch,
    ) -> AppResult<ProfileRecord>;

    /// Merge `patch` into the log for `date`, creating it if needed
    async fn upsert_daily_log(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        patch: DailyLogPatch,
    ) -> AppResult<DailyLogRecord>;

    /// The log for one date
    async fn get_daily_log(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> AppResult<Option<DailyLogRecord>>;

    /// Logs with `start <= date <= end`, date ascending
    async fn get_daily_logs(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyLogRecord>>;

    /// Record calories and protein for a date
    async fn log_food(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        calories: f64,
        protein: f64,
    ) -> AppResult<DailyLogRecord> {
        self.upsert_daily_log(user_id, date, DailyLogPatch::food(calories, protein))
            .await
    }

    /// Record a weigh-in (kg) for a date
    async fn log_weight(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        weight_kg: f64,
    ) -> AppResult<DailyLogRecord> {
        self.upsert_daily_log(user_id, date, DailyLogPatch::weight(weight_kg))
            .await
    }

    /// Record a note for a date
    async fn log_note(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        notes: String,
    ) -> AppResult<DailyLogRecord> {
        self.upsert_daily_log(user_id, date, DailyLogPatch::note(notes))
            .await
    }

    /// Trailing window of logs ending on `end_date`
    async fn get_trends(
        &self,
        user_id: &UserId,
        end_date: NaiveDate,
        days: Option<u32>,
    ) -> AppResult<TrendWindow> {
        let days = clamp_window_days(days);
        let start_date = window_start(end_date, days)?;
        let logs = self
            .get_daily_logs(user_id, start_date, end_date)
            .await?
            .into_iter()
            .map(|record| record.entry)
            .collect();

        Ok(TrendWindow {
            start_date,
            end_date,
            days,
            logs,
        })
    }
}
