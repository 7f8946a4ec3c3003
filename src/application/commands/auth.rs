// src/application/commands/auth.rs
use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::application::{
    dto::{AuthenticatedAdmin, SessionDto},
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{AdminSession, PasswordHasher, SessionStore},
        time::Clock,
    },
};

/// The single admin account, as configured.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct AuthCommandService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl AuthCommandService {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            sessions,
            clock,
            session_ttl,
        }
    }

    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<SessionDto> {
        // The hash is checked even for an unknown username so both failures
        // take the same path.
        let verified = self
            .password_hasher
            .verify(&command.password, &self.credentials.password_hash)
            .await;
        if command.username.trim() != self.credentials.username || verified.is_err() {
            tracing::warn!(username = %command.username.trim(), "admin login rejected");
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        let issued_at = self.clock.now();
        let session = AdminSession {
            token: Uuid::new_v4().to_string(),
            username: self.credentials.username.clone(),
            issued_at,
            expires_at: issued_at + self.session_ttl,
        };
        self.sessions.create(session.clone()).await?;
        tracing::info!(username = %session.username, "admin signed in");
        Ok(session.into())
    }

    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        self.sessions.revoke(token).await
    }

    /// Resolve a session token. Expired sessions are dropped on sight.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        let session = self
            .sessions
            .find(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session not found"))?;

        if session.is_expired(self.clock.now()) {
            self.sessions.revoke(token).await?;
            return Err(ApplicationError::unauthorized("session expired"));
        }

        Ok(session.into())
    }
}
