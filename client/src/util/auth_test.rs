use std::sync::Arc;

use super::*;
use crate::net::types::{SessionPayload, User};
use crate::util::session_repository::StorageSessionRepository;
use crate::util::storage::MemoryStorage;

fn empty_store() -> SessionStore {
    SessionStore::new(Arc::new(StorageSessionRepository::new(MemoryStorage::default())))
}

fn signed_in_store() -> SessionStore {
    let mut store = empty_store();
    store
        .set_session(SessionPayload {
            user: Some(User { id: "u1".to_owned(), name: "Asha".to_owned(), email: None, role: None }),
            organization: None,
            access_token: Some("acc".to_owned()),
            refresh_token: Some("ref".to_owned()),
        })
        .unwrap();
    store
}

#[test]
fn pending_store_waits_instead_of_redirecting() {
    assert_eq!(guard(&empty_store()), GuardOutcome::Pending);
}

#[test]
fn ready_store_without_user_redirects_to_login() {
    let mut store = empty_store();
    store.rehydrate();
    assert_eq!(guard(&store), GuardOutcome::Redirect("/login"));
}

#[test]
fn store_with_user_renders_view() {
    assert_eq!(guard(&signed_in_store()), GuardOutcome::Render);
}

#[test]
fn logout_then_guard_redirects_to_login() {
    let mut store = signed_in_store();
    store.logout();
    assert_eq!(guard(&store), GuardOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn login_page_skipped_only_for_ready_signed_in_store() {
    assert!(should_skip_login(&signed_in_store()));
    assert!(!should_skip_login(&empty_store()));

    let mut store = empty_store();
    store.rehydrate();
    assert!(!should_skip_login(&store));
}
