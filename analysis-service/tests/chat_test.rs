mod common;

use analysis_service::config::ProviderKind;
use common::TestApp;
use reqwest::multipart;
use serde_json::json;

#[tokio::test]
async fn chat_returns_provider_reply() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/chat", app.address))
        .json(&json!({
            "messages": [{ "role": "user", "content": "How big should my deck be?" }]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["reply"], "Mock reply for: How big should my deck be?");
    assert_eq!(body["provider"], "mock");

    app.cleanup().await;
}

#[tokio::test]
async fn chat_rejects_empty_conversations() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/chat", app.address))
        .json(&json!({ "messages": [] }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 422);

    app.cleanup().await;
}

#[tokio::test]
async fn chat_falls_back_when_primary_fails() {
    let app = TestApp::spawn_with(|config| {
        config.chat.primary = ProviderKind::MockDisabled;
        config.chat.fallback = Some(ProviderKind::Mock);
    })
    .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/chat", app.address))
        .json(&json!({
            "messages": [{ "role": "user", "content": "hello" }]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["provider"], "mock");

    app.cleanup().await;
}

#[tokio::test]
async fn chat_without_fallback_surfaces_upstream_failure() {
    let app = TestApp::spawn_with(|config| {
        config.chat.primary = ProviderKind::MockDisabled;
        config.chat.fallback = None;
    })
    .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/chat", app.address))
        .json(&json!({
            "messages": [{ "role": "user", "content": "hello" }]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 503);

    app.cleanup().await;
}

#[tokio::test]
async fn enhanced_chat_folds_in_recent_analyses() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    // Seed an analysis so the context retrieval has something to fold in
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(TestApp::test_png(2, 2))
            .file_name("plan.png")
            .mime_str("image/png")
            .unwrap(),
    );
    let seed = client
        .post(format!("{}/full-analyze", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(seed.status().is_success());

    let response = client
        .post(format!("{}/enhanced-chat", app.address))
        .json(&json!({
            "messages": [{ "role": "user", "content": "What did my last drawing show?" }]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    // Mock echoes the last user turn, proving context did not displace it
    assert_eq!(
        body["reply"],
        "Mock reply for: What did my last drawing show?"
    );

    app.cleanup().await;
}
