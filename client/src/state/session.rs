//! Authentication session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root wraps one [`SessionStore`] in an `RwSignal` and provides it
//! through context. The route guard, the login page, the dashboard fetch and
//! the navigation shell's logout all go through it.
//!
//! DESIGN
//! ======
//! Every mutation writes through to the injected [`SessionRepository`] before
//! replacing the in-memory copy, so a reload always sees the latest session.
//! Sessions can only be set from a validated [`SessionPayload`]: a user
//! without both credentials (or credentials without a user) is rejected.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::{Organization, SessionPayload, User};
use crate::util::session_repository::SessionRepository;

/// Session fields as held in memory and persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Reasons a [`SessionPayload`] is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session payload has no user")]
    MissingUser,

    #[error("session payload has no access token")]
    MissingAccessToken,

    #[error("session payload has no refresh token")]
    MissingRefreshToken,
}

fn required_token(token: Option<String>, missing: SessionError) -> Result<String, SessionError> {
    token
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or(missing)
}

impl TryFrom<SessionPayload> for Session {
    type Error = SessionError;

    fn try_from(payload: SessionPayload) -> Result<Self, Self::Error> {
        let user = payload.user.ok_or(SessionError::MissingUser)?;
        let access_token = required_token(payload.access_token, SessionError::MissingAccessToken)?;
        let refresh_token = required_token(payload.refresh_token, SessionError::MissingRefreshToken)?;
        Ok(Self {
            user: Some(user),
            organization: payload.organization,
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
        })
    }
}

/// Whether the store has consulted durable storage yet.
///
/// Server rendering and the first browser frame run before storage is read;
/// the route guard waits instead of redirecting while `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Pending,
    Ready,
}

/// Single source of truth for the current session.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    status: SessionStatus,
    repository: Arc<dyn SessionRepository>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.session.user)
            .field("organization", &self.session.organization)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Empty, pending store persisting through `repository`.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { session: Session::default(), status: SessionStatus::Pending, repository }
    }

    /// Store for a fresh process start: created and immediately rehydrated.
    pub fn restore(repository: Arc<dyn SessionRepository>) -> Self {
        let mut store = Self::new(repository);
        store.rehydrate();
        store
    }

    /// Replace the in-memory session with the persisted copy.
    pub fn rehydrate(&mut self) {
        self.session = self.repository.load().unwrap_or_default();
        self.status = SessionStatus::Ready;
        log::debug!("session rehydrated (authenticated: {})", self.is_authenticated());
    }

    /// Validate `payload`, persist it, then make it the current session.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving memory and storage untouched, if the payload
    /// lacks a user or either credential.
    pub fn set_session(&mut self, payload: SessionPayload) -> Result<(), SessionError> {
        let session = Session::try_from(payload)?;
        self.repository.save(&session);
        self.session = session;
        self.status = SessionStatus::Ready;
        Ok(())
    }

    /// Erase the persisted session and reset every field to absent.
    pub fn logout(&mut self) {
        self.repository.clear();
        self.session = Session::default();
        self.status = SessionStatus::Ready;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.session.organization.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.session.refresh_token.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.user.is_some()
    }
}
