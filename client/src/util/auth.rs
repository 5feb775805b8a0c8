//! Route-guard decision shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated redirect behavior;
//! `components::protected` renders whatever [`guard`] decides.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{SessionStatus, SessionStore};

/// Public entry point unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Landing route after sign-in and for `/`.
pub const HOME_PATH: &str = "/dashboard";

/// What a protected route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Storage has not been consulted yet; show a loading indicator.
    Pending,
    /// A user is present; render the wrapped view unchanged.
    Render,
    /// No user; navigate to the given path.
    Redirect(&'static str),
}

/// Decide how a protected route renders for `store`.
pub fn guard(store: &SessionStore) -> GuardOutcome {
    if store.status() == SessionStatus::Pending {
        return GuardOutcome::Pending;
    }
    if store.is_authenticated() {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(LOGIN_PATH)
    }
}

/// True when the login page should bounce an already signed-in visitor.
pub fn should_skip_login(store: &SessionStore) -> bool {
    store.status() == SessionStatus::Ready && store.is_authenticated()
}
