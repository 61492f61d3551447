// admin-client/tests/session_store.rs
// File token store integration tests

use std::sync::Arc;

use admin_client::{ClientConfig, FileTokenStore, Session, TokenStore};
use tempfile::TempDir;

#[test]
fn test_file_store_save_load_clear() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp_dir.path().join("auth").join("session.json"));

    assert!(store.load().is_none());

    store.save("admin-token").unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().as_deref(), Some("admin-token"));

    store.clear().unwrap();
    assert!(!store.path().exists());
    assert!(store.load().is_none());

    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn test_corrupt_file_reads_as_logged_out() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let session = Session::new(Arc::new(FileTokenStore::new(&path)));
    assert!(!session.is_authenticated());
}

#[test]
fn test_session_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let config = ClientConfig::default().with_token_path(temp_dir.path().join("session.json"));

    config.build_session().login("persisted").unwrap();

    let reopened = config.build_session();
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.token().as_deref(), Some("persisted"));

    reopened.logout().unwrap();
    assert!(!config.build_session().is_authenticated());
}
