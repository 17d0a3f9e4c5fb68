mod common;

use common::TestApp;
use reqwest::multipart;

fn png_form(data: Vec<u8>) -> multipart::Form {
    multipart::Form::new().part(
        "file",
        multipart::Part::bytes(data)
            .file_name("plan.png")
            .mime_str("image/png")
            .unwrap(),
    )
}

#[tokio::test]
async fn analyze_image_returns_ocr_text_and_dimensions() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/analyze-image", app.address))
        .multipart(png_form(TestApp::test_png(2, 2)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["ocr_text"], "12ft x 16ft");
    assert_eq!(body["dimensions"]["width_ft"], 12.0);
    assert_eq!(body["dimensions"]["length_ft"], 16.0);

    app.cleanup().await;
}

#[tokio::test]
async fn full_analyze_estimates_square_footage() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/full-analyze", app.address))
        .multipart(png_form(TestApp::test_png(2, 2)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["file_name"], "plan.png");
    assert_eq!(body["square_footage_estimate"], 192.0);
    assert!(body.get("image_preview").is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn full_analyze_can_embed_a_preview() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/full-analyze?include_preview=true", app.address))
        .multipart(png_form(TestApp::test_png(2, 2)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let preview = body["image_preview"].as_str().expect("preview missing");
    assert!(preview.starts_with("data:image/png;base64,"));

    app.cleanup().await;
}

#[tokio::test]
async fn full_analyze_without_dimensions_reports_nulls() {
    let app = TestApp::spawn_with(|config| {
        config.ocr.mock_text = "no measurements on this sheet".to_string();
    })
    .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/full-analyze", app.address))
        .multipart(png_form(TestApp::test_png(2, 2)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["dimensions"]["width_ft"].is_null());
    assert!(body["square_footage_estimate"].is_null());

    app.cleanup().await;
}

#[tokio::test]
async fn image_info_reports_pixel_dimensions() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/image-info", app.address))
        .multipart(png_form(TestApp::test_png(3, 5)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["width"], 3);
    assert_eq!(body["height"], 5);
    assert_eq!(body["format"], "png");

    app.cleanup().await;
}

#[tokio::test]
async fn image_info_rejects_invalid_images() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/image-info", app.address))
        .multipart(png_form(b"definitely not an image".to_vec()))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn vision_query_uses_the_chat_provider() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let form = multipart::Form::new()
        .text("prompt", "What is on this drawing?")
        .part(
            "file",
            multipart::Part::bytes(TestApp::test_png(2, 2))
                .file_name("plan.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let response = client
        .post(format!("{}/vision-query", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["response"], "Mock description for: What is on this drawing?");
    assert_eq!(body["provider"], "mock");

    app.cleanup().await;
}
