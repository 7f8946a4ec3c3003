use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::security::{AdminSession, SessionStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Sessions live only as long as the process; a restart signs the admin out.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, AdminSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ApplicationResult<std::sync::MutexGuard<'_, HashMap<String, AdminSession>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: AdminSession) -> ApplicationResult<()> {
        let mut guard = self.lock()?;
        let now = session.issued_at;
        guard.retain(|_, existing| !existing.is_expired(now));
        guard.insert(session.token.clone(), session);
        Ok(())
    }

    async fn find(&self, token: &str) -> ApplicationResult<Option<AdminSession>> {
        Ok(self.lock()?.get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        self.lock()?.remove(token);
        Ok(())
    }
}
