mod common;

use common::TestApp;
use reqwest::multipart;

#[tokio::test]
async fn enhance_image_round_trips_through_the_mock() {
    let app = TestApp::spawn().await;

    let original = TestApp::test_png(4, 4);

    let client = reqwest::Client::new();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(original.clone())
            .file_name("render.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/enhance-image", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );

    let body = response.bytes().await.expect("Failed to read body");
    assert_eq!(body.to_vec(), original);

    app.cleanup().await;
}
