mod common;

use common::TestApp;
use reqwest::multipart;

#[tokio::test]
async fn transcribe_voice_classifies_the_command() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(vec![0u8; 64])
            .file_name("command.wav")
            .mime_str("audio/wav")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/transcribe-voice", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["text"], "Measure the deck 12 by 16 feet");
    assert_eq!(body["language"], "en");
    assert_eq!(body["command"]["kind"], "measurement");
    assert_eq!(body["command"]["numbers"][0], 12.0);
    assert_eq!(body["command"]["numbers"][1], 16.0);

    app.cleanup().await;
}

#[tokio::test]
async fn transcribe_voice_rejects_empty_uploads() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(Vec::new())
            .file_name("command.wav")
            .mime_str("audio/wav")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/transcribe-voice", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}
