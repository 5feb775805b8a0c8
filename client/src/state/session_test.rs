use super::*;
use crate::util::session_repository::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, StorageSessionRepository};
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn asha() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha Rao".to_owned(),
        email: Some("asha@example.in".to_owned()),
        role: Some("owner".to_owned()),
    }
}

fn asha_traders() -> Organization {
    Organization { id: "o-1".to_owned(), name: "Asha Traders".to_owned(), gstin: None }
}

fn full_payload() -> SessionPayload {
    SessionPayload {
        user: Some(asha()),
        organization: Some(asha_traders()),
        access_token: Some("access-1".to_owned()),
        refresh_token: Some("refresh-1".to_owned()),
    }
}

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(StorageSessionRepository::new(storage.clone())))
}

// =============================================================
// Payload validation
// =============================================================

#[test]
fn payload_with_user_and_tokens_is_accepted() {
    let session = Session::try_from(full_payload()).unwrap();
    assert_eq!(session.user, Some(asha()));
    assert_eq!(session.organization, Some(asha_traders()));
    assert_eq!(session.access_token.as_deref(), Some("access-1"));
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
}

#[test]
fn organization_is_optional() {
    let payload = SessionPayload { organization: None, ..full_payload() };
    let session = Session::try_from(payload).unwrap();
    assert!(session.organization.is_none());
}

#[test]
fn payload_without_user_is_rejected() {
    let payload = SessionPayload { user: None, ..full_payload() };
    assert_eq!(Session::try_from(payload), Err(SessionError::MissingUser));
}

#[test]
fn payload_with_blank_tokens_is_rejected() {
    let payload = SessionPayload { access_token: Some("   ".to_owned()), ..full_payload() };
    assert_eq!(Session::try_from(payload), Err(SessionError::MissingAccessToken));

    let payload = SessionPayload { refresh_token: None, ..full_payload() };
    assert_eq!(Session::try_from(payload), Err(SessionError::MissingRefreshToken));
}

#[test]
fn tokens_are_trimmed() {
    let payload = SessionPayload { access_token: Some(" access-1\n".to_owned()), ..full_payload() };
    let session = Session::try_from(payload).unwrap();
    assert_eq!(session.access_token.as_deref(), Some("access-1"));
}

// =============================================================
// SessionStore lifecycle
// =============================================================

#[test]
fn new_store_is_empty_and_pending() {
    let store = store_with(&MemoryStorage::default());
    assert_eq!(store.status(), SessionStatus::Pending);
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert!(store.organization().is_none());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn set_session_then_read_returns_same_fields() {
    let mut store = store_with(&MemoryStorage::default());
    store.set_session(full_payload()).unwrap();

    assert_eq!(store.status(), SessionStatus::Ready);
    assert!(store.is_authenticated());
    assert_eq!(store.user(), Some(&asha()));
    assert_eq!(store.organization(), Some(&asha_traders()));
    assert_eq!(store.access_token(), Some("access-1"));
    assert_eq!(store.refresh_token(), Some("refresh-1"));
}

#[test]
fn set_session_replaces_previous_session_wholesale() {
    let mut store = store_with(&MemoryStorage::default());
    store.set_session(full_payload()).unwrap();

    let second = SessionPayload {
        user: Some(User { id: "u-2".to_owned(), name: "Vikram".to_owned(), email: None, role: None }),
        organization: None,
        access_token: Some("access-2".to_owned()),
        refresh_token: Some("refresh-2".to_owned()),
    };
    store.set_session(second).unwrap();

    assert_eq!(store.user().map(|u| u.id.as_str()), Some("u-2"));
    assert!(store.organization().is_none());
    assert_eq!(store.access_token(), Some("access-2"));
}

#[test]
fn set_session_writes_through_to_storage() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.set_session(full_payload()).unwrap();

    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("access-1"));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-1"));
}

#[test]
fn rejected_payload_leaves_memory_and_storage_untouched() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.set_session(full_payload()).unwrap();

    let err = store.set_session(SessionPayload { user: None, ..full_payload() }).unwrap_err();
    assert_eq!(err, SessionError::MissingUser);
    assert_eq!(store.user(), Some(&asha()));
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("access-1"));
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.set_session(full_payload()).unwrap();

    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.organization().is_none());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert_eq!(store.status(), SessionStatus::Ready);
    assert!(storage.is_empty());
}

#[test]
fn logout_without_session_is_harmless() {
    let mut store = store_with(&MemoryStorage::default());
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.status(), SessionStatus::Ready);
}

// =============================================================
// Reload persistence
// =============================================================

#[test]
fn restore_after_set_session_yields_same_tokens() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.set_session(full_payload()).unwrap();
    drop(store);

    let reloaded = SessionStore::restore(Arc::new(StorageSessionRepository::new(storage)));
    assert_eq!(reloaded.status(), SessionStatus::Ready);
    assert_eq!(reloaded.user(), Some(&asha()));
    assert_eq!(reloaded.access_token(), Some("access-1"));
    assert_eq!(reloaded.refresh_token(), Some("refresh-1"));
}

#[test]
fn restore_after_logout_is_unauthenticated() {
    let storage = MemoryStorage::default();
    let mut store = store_with(&storage);
    store.set_session(full_payload()).unwrap();
    store.logout();

    let reloaded = SessionStore::restore(Arc::new(StorageSessionRepository::new(storage)));
    assert!(!reloaded.is_authenticated());
}

#[test]
fn rehydrate_with_empty_storage_is_ready_and_unauthenticated() {
    let mut store = store_with(&MemoryStorage::default());
    store.rehydrate();
    assert_eq!(store.status(), SessionStatus::Ready);
    assert!(!store.is_authenticated());
}

#[test]
fn debug_output_omits_tokens() {
    let mut store = store_with(&MemoryStorage::default());
    store.set_session(full_payload()).unwrap();
    let rendered = format!("{store:?}");
    assert!(rendered.contains("Asha Rao"));
    assert!(!rendered.contains("access-1"));
    assert!(!rendered.contains("refresh-1"));
}
