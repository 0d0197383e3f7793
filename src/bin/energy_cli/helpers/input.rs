// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input file loading for energy-cli
// ABOUTME: Reads a profile and daily logs from JSON into an in-memory record store

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use energy_balance::auth::{require_user_id, Identity};
use energy_balance::models::{DailyLogEntry, DailyLogPatch, UnitSystem, UserId};
use energy_balance::store::{InMemoryStore, ProfileInput, ProfileRecord, RecordStore};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Identity the CLI acts as
const CLI_SUBJECT: &str = "energy-cli";

/// Contents of an input file
#[derive(Debug, Deserialize)]
pub struct LogFile {
    /// Onboarding answers
    pub profile: ProfileInput,
    /// Daily logs, any order
    #[serde(default)]
    pub logs: Vec<DailyLogEntry>,
}

/// Store populated from an input file
pub struct LoadedStore {
    pub store: InMemoryStore,
    pub user_id: UserId,
    pub profile: ProfileRecord,
    /// Latest logged date, or today when the file has no logs
    pub last_logged: NaiveDate,
}

/// Read `input_path` and load it into a fresh store; same-date logs merge
pub async fn load_store(input_path: &Path, unit_system: UnitSystem) -> Result<LoadedStore> {
    let raw = tokio::fs::read_to_string(input_path)
        .await
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let input: LogFile = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid input in {}", input_path.display()))?;

    let last_logged = input
        .logs
        .iter()
        .map(|entry| entry.date)
        .max()
        .unwrap_or_else(|| Utc::now().date_naive());

    let store = InMemoryStore::new();
    let identity = Identity::new(CLI_SUBJECT);
    let user_id = require_user_id(Some(&identity))?;
    store.set_unit_system(&identity, unit_system).await?;

    store.create_profile(&user_id, input.profile).await?;
    for entry in input.logs {
        let date = entry.date;
        let patch = DailyLogPatch {
            calories: entry.calories,
            protein: entry.protein,
            weight: entry.weight,
            notes: entry.notes,
        };
        store
            .upsert_daily_log(&user_id, date, patch)
            .await
            .with_context(|| format!("Invalid log for {date}"))?;
    }
    debug!(user_id = %user_id, "Loaded input into store");

    let profile = store
        .get_profile(&user_id)
        .await?
        .ok_or_else(|| anyhow!("Profile not found"))?;

    Ok(LoadedStore {
        store,
        user_id,
        profile,
        last_logged,
    })
}
