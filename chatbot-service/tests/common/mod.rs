use axum::{routing::post, Json, Router};
use chatbot_service::config::ChatbotConfig;
use chatbot_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_path: String,
    pub storage_path: String,
}

impl TestApp {
    /// Spawn the application with an unreachable analysis upstream.
    #[allow(dead_code)]
    pub async fn spawn() -> Self {
        // Port 9 (discard) is never listening
        Self::spawn_with_analysis("http://127.0.0.1:9").await
    }

    /// Spawn the application against the given analysis upstream.
    pub async fn spawn_with_analysis(analysis_url: &str) -> Self {
        let db_path = format!("target/test-chatbot-{}.db", Uuid::new_v4());
        let storage_path = format!("target/test-storage-{}", Uuid::new_v4());

        let mut config = ChatbotConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port
        config.database.path = db_path.clone();
        config.storage.local_path = storage_path.clone();
        config.analysis.base_url = analysis_url.to_string();
        config.analysis.timeout_secs = 5;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            db_path,
            storage_path,
        }
    }

    pub async fn cleanup(&self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = tokio::fs::remove_file(format!("{}{}", self.db_path, suffix)).await;
        }
        let _ = tokio::fs::remove_dir_all(&self.storage_path).await;
    }
}

/// Spawn a stub analysis service answering `/chat` and `/full-analyze`.
#[allow(dead_code)]
pub async fn spawn_stub_analysis() -> String {
    async fn stub_chat(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        let content = body["messages"]
            .as_array()
            .and_then(|messages| messages.last())
            .and_then(|message| message["content"].as_str())
            .unwrap_or_default()
            .to_string();

        Json(serde_json::json!({
            "reply": format!("Stub reply for: {}", content),
            "provider": "stub"
        }))
    }

    async fn stub_full_analyze() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "file_name": "upload.png",
            "ocr_text": "12ft x 16ft",
            "square_footage_estimate": 192.0
        }))
    }

    let app = Router::new()
        .route("/chat", post(stub_chat))
        .route("/full-analyze", post(stub_full_analyze));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}
