//! Integration tests for pipeline commands run through the CLI route table

use serde_json::{json, Value};
use tempfile::TempDir;
use ticketwatch::config::ConfigStore;
use ticketwatch::error::ClientError;

use crate::integration::test_utils::{pipeline_json, run_cli, StubServer};

fn logged_in_config(temp: &TempDir) -> std::path::PathBuf {
    let config_path = temp.path().join("config.json");
    let mut store = ConfigStore::load(&config_path).unwrap();
    store.set_token("T");
    store.persist().unwrap();
    config_path
}

#[test]
fn test_create_without_time_bounds_omits_search_filter() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);
    let server = StubServer::ok(&pipeline_json(7));

    run_cli(
        &config_path,
        server.base_url(),
        &["pipelines", "create", "trip", "2026-11-02", "North", "South"],
    )
    .unwrap();

    let requests = server.finish();
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/pipelines");
    assert_eq!(request.header("authorization"), Some("Bearer T"));
    assert_eq!(
        request.json_body(),
        json!({
            "desc": "trip",
            "date": "2026-11-02",
            "origin_terminal": "North",
            "dest_terminal": "South",
        })
    );
}

#[test]
fn test_create_with_start_time_sends_null_end_time() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);
    let server = StubServer::ok(&pipeline_json(7));

    run_cli(
        &config_path,
        server.base_url(),
        &[
            "pipelines",
            "create",
            "trip",
            "2026-11-02",
            "North",
            "South",
            "--start-time",
            "08:30",
        ],
    )
    .unwrap();

    let requests = server.finish();
    let body = requests[0].json_body();
    let filter = &body["search_filter"];
    assert_eq!(filter["start_time"], "08:30:00");
    assert_eq!(filter["end_time"], Value::Null);
    assert!(body.get("buy_filter").is_none());
}

#[test]
fn test_create_with_bad_date_sends_nothing() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);

    // Nothing listens here; a request attempt would surface as a transport error.
    let err = run_cli(
        &config_path,
        &crate::integration::test_utils::unreachable_base_url(),
        &["pipelines", "create", "trip", "02/11/2026", "North", "South"],
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_create_with_bad_time_is_validation_error() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);

    let err = run_cli(
        &config_path,
        &crate::integration::test_utils::unreachable_base_url(),
        &[
            "pipelines",
            "create",
            "trip",
            "2026-11-02",
            "North",
            "South",
            "--end-time",
            "25:99",
        ],
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(err.to_string().contains("end_time"));
}

#[test]
fn test_list_json_output_is_array() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);
    let body = format!("[{}, {}]", pipeline_json(3), pipeline_json(4));
    let server = StubServer::ok(&body);

    let output = run_cli(
        &config_path,
        server.base_url(),
        &["--format", "json", "pipelines", "list"],
    )
    .unwrap();
    server.finish();

    let value: Value = serde_json::from_str(&output).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 3);
    assert_eq!(items[1]["id"], 4);
    assert_eq!(items[0]["owner"]["gotify_app_token"], "tok");
}

#[test]
fn test_view_fetches_single_pipeline() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);
    let server = StubServer::ok(&pipeline_json(9));

    let output = run_cli(&config_path, server.base_url(), &["pipelines", "view", "9"]).unwrap();
    assert!(output.contains("trip"));

    let requests = server.finish();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path(), "/pipelines/9");
}

#[test]
fn test_delete_sends_delete_without_body() {
    let temp = TempDir::new().unwrap();
    let config_path = logged_in_config(&temp);
    let server = StubServer::ok(&pipeline_json(4));

    run_cli(&config_path, server.base_url(), &["pipelines", "delete", "4"]).unwrap();

    let requests = server.finish();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path(), "/pipelines/4");
    assert!(requests[0].body.is_empty());
}
