mod common;

use common::TestApp;
use conference_service::models::Registration;
use mongodb::bson::doc;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn register_stores_the_attendee_and_returns_the_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/register", app.address))
        .json(&json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "institute": "Pune Institute of Technology",
            "year": "3rd",
            "interests": ["rust", "cloud"],
            "referral": "campus poster"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    let id = body["id"].as_str().expect("id missing");
    assert_eq!(id.len(), 24, "expected a hex ObjectId, got {}", id);

    let stored = app
        .db
        .collection::<Registration>(Registration::COLLECTION)
        .find_one(doc! { "email": "asha@example.com" }, None)
        .await
        .expect("Failed to query registrations")
        .expect("registration not stored");

    assert_eq!(stored.name, "Asha Verma");
    assert_eq!(stored.interests.as_deref(), Some(&["rust".to_string(), "cloud".to_string()][..]));
    assert!(stored.consent, "consent must default to true when omitted");

    app.cleanup().await;
}

#[tokio::test]
async fn register_rejects_a_malformed_email() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/register", app.address))
        .json(&json!({
            "name": "Asha Verma",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.status(),
        reqwest::StatusCode::UNPROCESSABLE_ENTITY
    );
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Validation error");

    // Nothing landed in the store.
    let count = app
        .db
        .collection::<Registration>(Registration::COLLECTION)
        .count_documents(doc! {}, None)
        .await
        .expect("Failed to count registrations");
    assert_eq!(count, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn register_rejects_a_missing_required_field() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // No email at all; the extractor rejects it before the handler runs.
    let response = client
        .post(format!("{}/api/register", app.address))
        .json(&json!({ "name": "Asha Verma" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.status(),
        reqwest::StatusCode::UNPROCESSABLE_ENTITY
    );

    app.cleanup().await;
}

#[tokio::test]
async fn register_keeps_an_explicit_consent_refusal() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/register", app.address))
        .json(&json!({
            "name": "Ravi Iyer",
            "email": "ravi@example.com",
            "consent": false
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let stored = app
        .db
        .collection::<Registration>(Registration::COLLECTION)
        .find_one(doc! { "email": "ravi@example.com" }, None)
        .await
        .expect("Failed to query registrations")
        .expect("registration not stored");
    assert!(!stored.consent);

    app.cleanup().await;
}

#[tokio::test]
async fn duplicate_registrations_are_both_kept() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let payload = json!({
        "name": "Asha Verma",
        "email": "asha@example.com"
    });

    for _ in 0..2 {
        let response = client
            .post(format!("{}/api/register", app.address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    let count = app
        .db
        .collection::<Registration>(Registration::COLLECTION)
        .count_documents(doc! { "email": "asha@example.com" }, None)
        .await
        .expect("Failed to count registrations");
    assert_eq!(count, 2);

    app.cleanup().await;
}
