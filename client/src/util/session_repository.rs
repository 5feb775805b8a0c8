//! Durable persistence for the authentication session.
//!
//! STORAGE LAYOUT
//! ==============
//! - `auth-storage`: `{"state": <Session>, "version": 1}`
//! - `accessToken`, `refreshToken`: flat copies of the credentials, written
//!   alongside the namespace entry and removed when a credential is absent.

#[cfg(test)]
#[path = "session_repository_test.rs"]
mod session_repository_test;

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;
use crate::state::session::Session;

pub const AUTH_STORAGE_KEY: &str = "auth-storage";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Schema version of the `auth-storage` entry. Entries with any other
/// version are ignored on load.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Load/save/clear contract the session store persists through.
pub trait SessionRepository: Send + Sync {
    /// Read the persisted session, if a usable one exists.
    fn load(&self) -> Option<Session>;

    /// Persist `session`, replacing whatever was stored.
    fn save(&self, session: &Session);

    /// Erase persisted session state.
    fn clear(&self);
}

/// How much of the storage area [`SessionRepository::clear`] erases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Only the keys this repository writes.
    #[default]
    SessionKeys,
    /// The whole storage area, including keys owned by other features.
    EntireNamespace,
}

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    state: Session,
    version: u32,
}

/// [`SessionRepository`] over any [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct StorageSessionRepository<S> {
    storage: S,
    clear_policy: ClearPolicy,
}

impl<S: KeyValueStore> StorageSessionRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, clear_policy: ClearPolicy::default() }
    }

    #[must_use]
    pub fn with_clear_policy(mut self, clear_policy: ClearPolicy) -> Self {
        self.clear_policy = clear_policy;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write_token(&self, key: &str, token: Option<&str>) {
        match token {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        }
    }
}

impl<S: KeyValueStore> SessionRepository for StorageSessionRepository<S> {
    fn load(&self) -> Option<Session> {
        let persisted: PersistedSession = self.storage.get_json(AUTH_STORAGE_KEY)?;
        if persisted.version != SESSION_SCHEMA_VERSION {
            log::warn!(
                "ignoring persisted session with schema version {} (expected {SESSION_SCHEMA_VERSION})",
                persisted.version
            );
            return None;
        }
        Some(persisted.state)
    }

    fn save(&self, session: &Session) {
        self.write_token(ACCESS_TOKEN_KEY, session.access_token.as_deref());
        self.write_token(REFRESH_TOKEN_KEY, session.refresh_token.as_deref());
        self.storage.set_json(
            AUTH_STORAGE_KEY,
            &PersistedSession { state: session.clone(), version: SESSION_SCHEMA_VERSION },
        );
    }

    fn clear(&self) {
        match self.clear_policy {
            ClearPolicy::SessionKeys => {
                self.storage.remove(AUTH_STORAGE_KEY);
                self.storage.remove(ACCESS_TOKEN_KEY);
                self.storage.remove(REFRESH_TOKEN_KEY);
            }
            ClearPolicy::EntireNamespace => self.storage.clear(),
        }
    }
}
