use httpmock::prelude::*;
use mealsync::{CliConfig, LocalStorage, Roster, Severity, SheetSyncPipeline, SyncEngine, SyncError};
use tempfile::TempDir;

fn cli_config(source_url: String, output_path: String) -> CliConfig {
    CliConfig {
        source_url,
        api_key: None,
        output_path,
        roster_file: "roster.json".to_string(),
        timeout_seconds: 30,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_sync_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let grid = serde_json::json!({
        "values": [
            ["Restriction", "Alice", "Bob", "Carol"],
            ["Nuts", "No", "Airborne (trace)", ""],
            ["Dairy", "Small amounts ok", "", "yes"],
            ["Vegetarian", "", "", "Yes"]
        ]
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/sheet");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(grid);
    });

    let config = cli_config(server.url("/sheet"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetSyncPipeline::new(storage, config);

    let mut engine = SyncEngine::new_with_monitoring(pipeline, false);
    let result = engine.run().await;

    assert!(result.is_ok());
    api_mock.assert();

    let output_file_path = result.unwrap();
    assert!(output_file_path.contains("roster.json"));

    // The persisted roster must load back and carry the parsed structure
    let full_path = std::path::Path::new(&output_path).join("roster.json");
    let bytes = std::fs::read(&full_path).unwrap();
    let roster: Roster = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(roster.members.len(), 3);
    assert_eq!(roster.restrictions_list, vec!["Nuts", "Dairy", "Vegetarian"]);

    let alice = &roster.members[0];
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.restrictions.len(), 1);
    assert_eq!(alice.restrictions[0].item, "Dairy");
    assert_eq!(alice.restrictions[0].severity, Severity::SmallAmounts);

    let bob = &roster.members[1];
    assert_eq!(bob.restrictions.len(), 1);
    assert_eq!(bob.restrictions[0].severity, Severity::Airborne);
    assert_eq!(bob.restrictions[0].notes, "trace");

    let carol = &roster.members[2];
    let items: Vec<&str> = carol.restrictions.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["Dairy", "Vegetarian"]);
}

#[tokio::test]
async fn test_sync_fails_terminally_on_auth_error() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/denied");
        then.status(401).body("API key missing");
    });

    let config = cli_config(server.url("/denied"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetSyncPipeline::new(storage, config);

    let mut engine = SyncEngine::new(pipeline);
    let err = engine.run().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, SyncError::SourceAccessError { status: 401, .. }));

    // A failed run must not leave a roster file behind
    let full_path = std::path::Path::new(&output_path).join("roster.json");
    assert!(!full_path.exists());
}

#[tokio::test]
async fn test_sync_fails_on_header_only_grid() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/short");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "values": [["", "Alice"]] }));
    });

    let config = cli_config(server.url("/short"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetSyncPipeline::new(storage, config);

    let mut engine = SyncEngine::new(pipeline);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, SyncError::InsufficientDataError { rows: 1 }));
}

#[tokio::test]
async fn test_sync_fails_on_empty_grid() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "values": [] }));
    });

    let config = cli_config(server.url("/empty"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetSyncPipeline::new(storage, config);

    let mut engine = SyncEngine::new(pipeline);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, SyncError::NoDataError));
}

#[tokio::test]
async fn test_repeated_sync_replaces_roster() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/v1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "values": [["", "Alice"], ["Nuts", "Yes"]] }));
    });

    let config = cli_config(server.url("/v1"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let mut engine = SyncEngine::new(SheetSyncPipeline::new(storage, config));
    engine.run().await.unwrap();
    first.assert();

    let second = server.mock(|when, then| {
        when.method(GET).path("/v2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "values": [["", "Alice", "Bob"], ["Soy", "No", "Yes"]] }));
    });

    let config = cli_config(server.url("/v2"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let mut engine = SyncEngine::new(SheetSyncPipeline::new(storage, config));
    engine.run().await.unwrap();
    second.assert();

    let full_path = std::path::Path::new(&output_path).join("roster.json");
    let roster: Roster = serde_json::from_slice(&std::fs::read(&full_path).unwrap()).unwrap();

    // Each sync run fully replaces the previous roster
    assert_eq!(roster.members.len(), 2);
    assert_eq!(roster.restrictions_list, vec!["Soy"]);
}
