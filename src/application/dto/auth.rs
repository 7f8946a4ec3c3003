use crate::application::ports::security::AdminSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub token: String,
    pub username: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl From<AdminSession> for SessionDto {
    fn from(session: AdminSession) -> Self {
        let expires_in = (session.expires_at - session.issued_at).num_seconds();
        Self {
            token: session.token,
            username: session.username,
            issued_at: session.issued_at,
            expires_at: session.expires_at,
            expires_in,
        }
    }
}

/// Admin resolved from a live session, attached to gated requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AdminSession> for AuthenticatedAdmin {
    fn from(session: AdminSession) -> Self {
        Self {
            username: session.username,
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}
