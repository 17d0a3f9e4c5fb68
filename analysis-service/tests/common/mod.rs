use analysis_service::config::{AnalysisConfig, OcrEngineKind, ProviderKind};
use analysis_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_path: String,
}

impl TestApp {
    /// Spawn the application on a random port with mock OCR and providers.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a config tweak applied after the test defaults.
    pub async fn spawn_with(tweak: impl FnOnce(&mut AnalysisConfig)) -> Self {
        let db_path = format!("target/test-analysis-{}.db", Uuid::new_v4());

        let mut config = AnalysisConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port
        config.database.path = db_path.clone();
        config.ocr.engine = OcrEngineKind::Mock;
        config.ocr.mock_text = "12ft x 16ft".to_string();
        config.chat.primary = ProviderKind::Mock;
        config.chat.fallback = None;
        config.chat.transcription = ProviderKind::Mock;
        config.chat.enhancement = ProviderKind::Mock;
        tweak(&mut config);

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
        }
    }

    /// A tiny valid PNG generated in memory.
    pub fn test_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("Failed to encode test PNG");
        bytes
    }

    pub async fn cleanup(&self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = tokio::fs::remove_file(format!("{}{}", self.db_path, suffix)).await;
        }
    }
}
