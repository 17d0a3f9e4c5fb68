mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn deck_materials_estimates_board_count() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/deck/materials", app.address))
        .json(&json!({ "length_ft": 16.0, "width_ft": 12.0 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["deck_area_sqft"], 192.0);
    assert_eq!(body["board_area_sqft"], 7.33);
    assert_eq!(body["boards"], 29);

    app.cleanup().await;
}

#[tokio::test]
async fn deck_materials_rejects_non_positive_dimensions() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/deck/materials", app.address))
        .json(&json!({ "length_ft": 0.0, "width_ft": 12.0 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 422);

    app.cleanup().await;
}

#[tokio::test]
async fn deck_skirting_reports_panels_and_material_note() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/deck/skirting", app.address))
        .json(&json!({
            "length_ft": 16.0,
            "width_ft": 12.0,
            "height_ft": 2.0,
            "material": "composite"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["perimeter_ft"], 56.0);
    assert_eq!(body["skirting_area_sqft"], 112.0);
    assert_eq!(body["panels_needed"], 4);
    assert!(body["note"].as_str().unwrap().contains("Composite"));

    app.cleanup().await;
}

#[tokio::test]
async fn deck_skirting_three_sides() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/deck/skirting", app.address))
        .json(&json!({
            "length_ft": 16.0,
            "width_ft": 12.0,
            "height_ft": 2.0,
            "sides": 3
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["perimeter_ft"], 40.0);
    assert!(body["note"].is_null());

    app.cleanup().await;
}
