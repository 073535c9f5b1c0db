mod common;

use common::{spawn_unconfigured, TestApp};
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn diagnostic_reports_a_connected_store_with_its_collections() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Give the store something to list.
    let response = client
        .post(format!("{}/api/register", app.address))
        .json(&json!({ "name": "Asha Verma", "email": "asha@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let response = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "mongodb");
    assert_eq!(body["database_url"], "set");
    assert_eq!(body["database_name"], app.db_name);
    assert_eq!(body["connection_status"], "connected");

    let collections = body["collections"].as_array().expect("expected an array");
    assert!(collections.contains(&json!("registration")));

    app.cleanup().await;
}

#[tokio::test]
async fn diagnostic_reports_a_missing_store_instead_of_failing() {
    let address = spawn_unconfigured().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/test", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Always a 200; the problem is in the body.
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["database_url"], "not set");
    assert_eq!(body["database_name"], "communityday");
    assert_eq!(body["connection_status"], "not configured");
    assert_eq!(body["collections"], json!([]));
}
