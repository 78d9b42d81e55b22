//! Integration tests for the session public API.

use std::time::Duration;

use campusfind::seed;
use campusfind::session::{SessionStore, User};
use campusfind::storage::{FileStorage, MemoryStorage, Storage};
use campusfind::CampusfindError;
use tempfile::TempDir;

fn open_seeded(storage: impl Storage) -> SessionStore<impl Storage> {
    SessionStore::open(storage, seed::seed_users())
        .unwrap()
        .with_latency(Duration::ZERO)
}

#[test]
fn public_api_is_accessible() {
    // Verify types are exported correctly
    let _user = User::new("Test", "test@campus.edu", "pw");
    let store = open_seeded(MemoryStorage::new());
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
}

#[test]
fn login_returns_projection_without_credential() {
    let mut store = open_seeded(MemoryStorage::new());

    let profile = store.login("admin@campus.edu", "admin123").unwrap();

    assert!(profile.is_admin);
    let json = serde_json::to_string(&profile).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("admin123"));
}

#[test]
fn every_seeded_account_can_log_in() {
    for user in seed::seed_users() {
        let mut store = open_seeded(MemoryStorage::new());
        let profile = store.login(&user.email, &user.password).unwrap();
        assert_eq!(profile.id, user.id);
    }
}

#[test]
fn failed_login_leaves_session_unchanged() {
    let mut store = open_seeded(MemoryStorage::new());
    store.login("user@campus.edu", "user123").unwrap();

    let err = store.login("user@campus.edu", "wrong").unwrap_err();

    assert!(matches!(err, CampusfindError::InvalidCredentials));
    // The earlier session survives; only the error slot records the failure.
    assert_eq!(store.current_user().unwrap().email, "user@campus.edu");
    assert_eq!(store.last_error(), Some("Invalid email or password"));
}

#[test]
fn register_with_existing_email_changes_nothing() {
    let mut store = open_seeded(MemoryStorage::new());
    let before = store.list_users().len();

    let err = store
        .register("Imposter", "admin@campus.edu", "pw")
        .unwrap_err();

    assert!(matches!(err, CampusfindError::EmailInUse { .. }));
    assert_eq!(store.list_users().len(), before);
    assert!(!store.is_authenticated());
}

#[test]
fn full_registration_workflow() {
    let mut store = open_seeded(MemoryStorage::new());

    // 1. Register a fresh account
    let profile = store
        .register("New Student", "newbie@campus.edu", "letmein")
        .unwrap();
    assert!(!profile.is_admin);

    // 2. Registration logs the account in immediately
    assert_eq!(store.current_user(), Some(&profile));

    // 3. Log out, then come back with the same credentials
    store.logout().unwrap();
    let again = store.login("newbie@campus.edu", "letmein").unwrap();
    assert_eq!(again.id, profile.id);
}

#[test]
fn session_survives_restart_via_file_storage() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");

    {
        let mut store = open_seeded(FileStorage::new(&dir));
        store.login("user@campus.edu", "user123").unwrap();
    }

    // A fresh process restores the persisted session before rendering.
    let restored = open_seeded(FileStorage::new(&dir));
    assert_eq!(restored.current_user().unwrap().email, "user@campus.edu");
}

#[test]
fn logout_twice_matches_logout_once() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");

    let mut store = open_seeded(FileStorage::new(&dir));
    store.login("user@campus.edu", "user123").unwrap();

    store.logout().unwrap();
    store.logout().unwrap();

    assert!(!store.is_authenticated());

    // The persisted slot is gone too: a restart comes up logged out.
    let restored = open_seeded(FileStorage::new(&dir));
    assert!(!restored.is_authenticated());
}

#[test]
fn admin_can_reshape_the_user_set() {
    let mut store = open_seeded(MemoryStorage::new());

    let regular_id = store.list_users()[1].id.clone();
    let promoted = store.toggle_admin(&regular_id).unwrap();
    assert!(promoted.is_admin);

    store.remove_user(&regular_id).unwrap();
    assert_eq!(store.list_users().len(), 1);

    let err = store.toggle_admin(&regular_id).unwrap_err();
    assert!(matches!(err, CampusfindError::UserNotFound { .. }));
}
