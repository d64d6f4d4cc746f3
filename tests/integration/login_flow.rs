//! Integration tests for login, logout and token persistence

use ticketwatch::config::ConfigStore;
use ticketwatch::error::ClientError;
use tempfile::TempDir;

use crate::integration::test_utils::{run_cli, StubServer};

#[test]
fn test_login_stores_and_persists_token() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");
    let server = StubServer::ok(r#"{"access_token": "abc123", "token_type": "bearer"}"#);

    let output = run_cli(
        &config_path,
        server.base_url(),
        &["login", "alice", "--password", "secret"],
    )
    .unwrap();
    assert!(output.starts_with("Logged in as alice"));
    assert!(!output.contains("abc123"));

    let requests = server.finish();
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/users/login/");
    assert_eq!(
        request.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.body, "password=secret&username=alice");
    assert!(request.header("authorization").is_none());

    let reloaded = ConfigStore::load(&config_path).unwrap();
    assert_eq!(reloaded.get().token, "abc123");
    let raw = std::fs::read_to_string(&config_path).unwrap();
    assert!(raw.contains("abc123"));
}

#[test]
fn test_login_does_not_persist_base_url_override() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");
    let server = StubServer::ok(r#"{"access_token": "abc123", "token_type": "bearer"}"#);

    run_cli(
        &config_path,
        server.base_url(),
        &["login", "alice", "--password", "secret"],
    )
    .unwrap();
    server.finish();

    let reloaded = ConfigStore::load(&config_path).unwrap();
    assert_eq!(reloaded.get().base_url, "http://localhost:8000");
}

#[test]
fn test_rejected_login_leaves_config_untouched() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");
    let server = StubServer::start(vec![(
        401,
        r#"{"detail": "Incorrect username or password"}"#,
    )]);

    let err = run_cli(
        &config_path,
        server.base_url(),
        &["login", "alice", "--password", "wrong"],
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::Transport { status: Some(401), .. }));
    server.finish();
    assert!(!config_path.exists());
}

#[test]
fn test_login_with_empty_token_is_schema_error() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");
    let server = StubServer::ok(r#"{"access_token": "", "token_type": "bearer"}"#);

    let err = run_cli(
        &config_path,
        server.base_url(),
        &["login", "alice", "--password", "secret"],
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::Schema(_)));
    server.finish();
}

#[test]
fn test_login_reports_unsaved_token() {
    let temp = TempDir::new().unwrap();
    // A regular file where the config directory should be.
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let config_path = blocker.join("config.json");
    let server = StubServer::ok(r#"{"access_token": "abc123", "token_type": "bearer"}"#);

    let err = run_cli(
        &config_path,
        server.base_url(),
        &["login", "alice", "--password", "secret"],
    )
    .unwrap_err();
    server.finish();

    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.to_string().contains("Logged in, but the token could not be saved"));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_logout_clears_token() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");
    let mut store = ConfigStore::load(&config_path).unwrap();
    store.set_token("abc123");
    store.persist().unwrap();

    let output = run_cli(&config_path, "http://localhost:8000", &["logout"]).unwrap();
    assert!(output.starts_with("Logged out"));

    let reloaded = ConfigStore::load(&config_path).unwrap();
    assert_eq!(reloaded.get().token, "");
}
