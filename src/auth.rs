// ABOUTME: Authenticated identity as handed over by the host application's auth provider
// ABOUTME: Resolves the opaque user id every store operation is scoped to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use energy_core::errors::{AppError, AppResult};
use energy_core::models::UserId;
use serde::{Deserialize, Serialize};

/// Identity claims from an upstream authentication provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable provider subject, used as the user id
    pub subject: String,
    /// Email address, if the provider shares it
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub picture_url: Option<String>,
}

impl Identity {
    /// Identity with only a subject
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            name: None,
            picture_url: None,
        }
    }

    /// Set email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// User id derived from the subject
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::new(self.subject.clone())
    }
}

/// Resolve the user id of the current caller
///
/// # Errors
///
/// Returns `ErrorCode::AuthRequired` ("Unauthorized") when there is no identity
/// or its subject is blank
pub fn require_user_id(identity: Option<&Identity>) -> AppResult<UserId> {
    match identity {
        Some(identity) if !identity.subject.trim().is_empty() => Ok(identity.user_id()),
        _ => Err(AppError::auth_required()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use energy_core::errors::ErrorCode;

    #[test]
    fn test_require_user_id() {
        let identity = Identity::new("user-123");
        assert_eq!(require_user_id(Some(&identity)).unwrap().as_str(), "user-123");

        let err = require_user_id(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
        assert_eq!(err.message, "Unauthorized");

        assert!(require_user_id(Some(&Identity::new("  "))).is_err());
    }
}
