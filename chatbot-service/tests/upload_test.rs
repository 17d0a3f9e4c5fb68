mod common;

use axum::http::StatusCode;
use common::TestApp;
use reqwest::multipart;

#[tokio::test]
async fn upload_records_history_and_stores_the_file() {
    let app = TestApp::spawn().await;

    // 1. Upload
    let client = reqwest::Client::new();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(vec![7u8; 100])
            .file_name("plan.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/uploads", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::CREATED.as_u16(), response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["file_name"], "plan.png");
    assert_eq!(body["mime_type"], "image/png");
    assert_eq!(body["size_bytes"], 100);

    let upload_id = body["id"].as_str().unwrap().to_string();

    // 2. The history lists it
    let list: serde_json::Value = client
        .get(format!("{}/uploads", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(list["total"], 1);
    assert_eq!(list["uploads"][0]["id"], upload_id.as_str());

    // 3. The stored bytes round-trip
    let download = client
        .get(format!("{}/uploads/{}", app.address, upload_id))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(download.status().is_success());
    assert_eq!(
        download
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    let bytes = download.bytes().await.expect("Failed to read body");
    assert_eq!(bytes.to_vec(), vec![7u8; 100]);

    app.cleanup().await;
}

#[tokio::test]
async fn upload_rejects_empty_files() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(Vec::new())
            .file_name("empty.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/uploads", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn uploads_list_is_newest_first_and_paged() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    for index in 0..3 {
        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(vec![0u8; 10])
                .file_name(format!("file-{}.txt", index))
                .mime_str("text/plain")
                .unwrap(),
        );
        let response = client
            .post(format!("{}/uploads", app.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.");
        assert!(response.status().is_success());
        // Distinct timestamps keep the newest-first ordering deterministic
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let list: serde_json::Value = client
        .get(format!("{}/uploads?page=1&page_size=2", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(list["total"], 3);
    assert_eq!(list["total_pages"], 2);
    assert_eq!(list["uploads"].as_array().unwrap().len(), 2);
    assert_eq!(list["uploads"][0]["file_name"], "file-2.txt");

    app.cleanup().await;
}

#[tokio::test]
async fn unknown_upload_is_not_found() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/uploads/not-a-real-id", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);

    app.cleanup().await;
}
