// ABOUTME: In-memory record store backed by ordered per-user maps behind a tokio RwLock
// ABOUTME: Used by the CLI and tests; cheap to clone and share across tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::records::{
    validate_log_patch, DailyLogRecord, ProfileInput, ProfilePatch, ProfileRecord, UserRecord,
};
use super::RecordStore;
use crate::auth::Identity;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use energy_core::errors::{AppError, AppResult};
use energy_core::models::{DailyLogPatch, UnitSystem, UserId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, UserRecord>,
    profiles: HashMap<UserId, ProfileRecord>,
    daily_logs: HashMap<UserId, BTreeMap<NaiveDate, DailyLogRecord>>,
}

/// Record store held entirely in memory
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    default_unit_system: UnitSystem,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Empty store; new users default to metric
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_unit_system(UnitSystem::Metric)
    }

    /// Empty store whose new users start with `unit_system`
    #[must_use]
    pub fn with_default_unit_system(unit_system: UnitSystem) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            default_unit_system: unit_system,
        }
    }

    fn upsert_user(
        &self,
        state: &mut StoreState,
        identity: &Identity,
        unit_system: Option<UnitSystem>,
    ) -> UserRecord {
        let now = Utc::now();
        let user_id = identity.user_id();

        let record = state
            .users
            .entry(user_id.clone())
            .and_modify(|user| {
                if identity.email.is_some() {
                    user.email.clone_from(&identity.email);
                }
                if identity.name.is_some() {
                    user.name.clone_from(&identity.name);
                }
                if identity.picture_url.is_some() {
                    user.picture_url.clone_from(&identity.picture_url);
                }
                if let Some(unit_system) = unit_system {
                    user.unit_system = unit_system;
                }
                user.last_seen_at = now;
            })
            .or_insert_with(|| {
                info!(user_id = %user_id, "Created user");
                UserRecord {
                    user_id: user_id.clone(),
                    email: identity.email.clone(),
                    name: identity.name.clone(),
                    picture_url: identity.picture_url.clone(),
                    unit_system: unit_system.unwrap_or(self.default_unit_system),
                    created_at: now,
                    last_seen_at: now,
                }
            });
        record.clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn ensure_user(&self, identity: &Identity) -> AppResult<UserRecord> {
        let mut state = self.state.write().await;
        Ok(self.upsert_user(&mut state, identity, None))
    }

    async fn set_unit_system(
        &self,
        identity: &Identity,
        unit_system: UnitSystem,
    ) -> AppResult<UserRecord> {
        let mut state = self.state.write().await;
        Ok(self.upsert_user(&mut state, identity, Some(unit_system)))
    }

    async fn get_user(&self, user_id: &UserId) -> AppResult<Option<UserRecord>> {
        Ok(self.state.read().await.users.get(user_id).cloned())
    }

    async fn get_profile(&self, user_id: &UserId) -> AppResult<Option<ProfileRecord>> {
        Ok(self.state.read().await.profiles.get(user_id).cloned())
    }

    async fn create_profile(
        &self,
        user_id: &UserId,
        input: ProfileInput,
    ) -> AppResult<ProfileRecord> {
        input.validate()?;
        let now = Utc::now();
        let mut state = self.state.write().await;

        let record = state
            .profiles
            .entry(user_id.clone())
            .and_modify(|profile| {
                profile.details = input;
                profile.updated_at = now;
            })
            .or_insert_with(|| ProfileRecord {
                id: Uuid::new_v4(),
                user_id: user_id.clone(),
                details: input,
                created_at: now,
                updated_at: now,
            });

        info!(user_id = %user_id, profile_id = %record.id, "Saved profile");
        Ok(record.clone())
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        patch: ProfilePatch,
    ) -> AppResult<ProfileRecord> {
        let mut state = self.state.write().await;
        let profile = state
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found("Profile"))?;

        let updated = patch.applied_to(profile.details);
        updated.validate()?;
        profile.details = updated;
        profile.updated_at = Utc::now();

        debug!(user_id = %user_id, "Updated profile");
        Ok(profile.clone())
    }

    async fn upsert_daily_log(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        patch: DailyLogPatch,
    ) -> AppResult<DailyLogRecord> {
        validate_log_patch(&patch)?;
        let now = Utc::now();
        let mut state = self.state.write().await;

        let record = state
            .daily_logs
            .entry(user_id.clone())
            .or_default()
            .entry(date)
            .and_modify(|record| {
                patch.clone().apply_to(&mut record.entry);
                record.updated_at = now;
            })
            .or_insert_with(|| DailyLogRecord {
                id: Uuid::new_v4(),
                user_id: user_id.clone(),
                entry: patch.clone().into_entry(date),
                created_at: now,
                updated_at: now,
            });

        debug!(user_id = %user_id, date = %date, "Upserted daily log");
        Ok(record.clone())
    }

    async fn get_daily_log(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> AppResult<Option<DailyLogRecord>> {
        let state = self.state.read().await;
        Ok(state
            .daily_logs
            .get(user_id)
            .and_then(|logs| logs.get(&date))
            .cloned())
    }

    async fn get_daily_logs(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyLogRecord>> {
        if start > end {
            return Ok(Vec::new());
        }
        let state = self.state.read().await;
        Ok(state.daily_logs.get(user_id).map_or_else(Vec::new, |logs| {
            logs.range(start..=end)
                .map(|(_, record)| record.clone())
                .collect()
        }))
    }
}
