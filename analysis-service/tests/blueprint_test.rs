mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn blueprint_contains_expected_labels() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/blueprint", app.address))
        .json(&json!({
            "gross_living_area": 500.0,
            "net_square_footage": 450.0,
            "linear_railing_footage": 100.0,
            "stair_cutouts": 2
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/svg+xml")
    );

    let svg = response.text().await.expect("Failed to read body");
    assert!(svg.contains("Gross Living Area: 500.00 sq ft"));
    assert!(svg.contains("Net Square Footage: 450.00 sq ft"));
    assert!(svg.contains("Linear Railing Footage: 100.00 ft"));
    assert!(svg.contains("Stair Cutouts: 2"));

    app.cleanup().await;
}

#[tokio::test]
async fn blueprint_rejects_negative_measurements() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/blueprint", app.address))
        .json(&json!({
            "gross_living_area": -10.0,
            "net_square_footage": 450.0,
            "linear_railing_footage": 100.0,
            "stair_cutouts": 2
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 422);

    app.cleanup().await;
}
