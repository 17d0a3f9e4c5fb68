use crate::config::{AnalysisConfig, OcrEngineKind, ProviderKind};
use crate::handlers;
use crate::services::providers::huggingface::{HuggingFaceConfig, HuggingFaceEnhancer};
use crate::services::providers::mock::{MockChatProvider, MockEnhancer, MockTranscriber};
use crate::services::providers::ollama::{OllamaConfig, OllamaProvider};
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::providers::{
    ChatProvider, ImageEnhancer, ProviderRouter, TranscriptionProvider,
};
use crate::services::{Database, MockOcr, TesseractOcr, TextExtractor};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AnalysisConfig,
    pub db: Database,
    pub ocr: Arc<dyn TextExtractor>,
    pub chat: ProviderRouter,
    pub transcriber: Arc<dyn TranscriptionProvider>,
    pub enhancer: Arc<dyn ImageEnhancer>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: AnalysisConfig) -> Result<Self, AppError> {
        let db = Database::connect(&config.database.path).await?;
        db.initialize_schema().await?;

        let ocr: Arc<dyn TextExtractor> = match config.ocr.engine {
            OcrEngineKind::Tesseract => Arc::new(TesseractOcr::new(
                config.ocr.command.clone(),
                Duration::from_secs(config.ocr.timeout_secs),
            )),
            OcrEngineKind::Mock => Arc::new(MockOcr::new(config.ocr.mock_text.clone())),
        };

        let chat = ProviderRouter::new(
            build_chat_provider(config.chat.primary, &config)?,
            config
                .chat
                .fallback
                .map(|kind| build_chat_provider(kind, &config))
                .transpose()?,
        );

        let transcriber: Arc<dyn TranscriptionProvider> = match config.chat.transcription {
            ProviderKind::Openai => Arc::new(OpenAiProvider::new(openai_config(&config))),
            ProviderKind::Mock => Arc::new(MockTranscriber),
            other => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "Unsupported transcription provider: {:?}",
                    other
                )))
            }
        };

        let enhancer: Arc<dyn ImageEnhancer> = match config.chat.enhancement {
            ProviderKind::Huggingface => Arc::new(HuggingFaceEnhancer::new(HuggingFaceConfig {
                api_token: config.huggingface.api_token.clone(),
                enhance_url: config.huggingface.enhance_url.clone(),
            })),
            ProviderKind::Mock => Arc::new(MockEnhancer),
            other => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "Unsupported enhancement provider: {:?}",
                    other
                )))
            }
        };

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            ocr,
            chat,
            transcriber,
            enhancer,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/analyze-image", post(handlers::analyze_image))
            .route("/full-analyze", post(handlers::full_analyze))
            .route("/image-info", post(handlers::image_info))
            .route("/vision-query", post(handlers::vision_query))
            .route("/blueprint", post(handlers::render_blueprint))
            .route("/chat", post(handlers::chat))
            .route("/enhanced-chat", post(handlers::enhanced_chat))
            .route("/transcribe-voice", post(handlers::transcribe_voice))
            .route("/enhance-image", post(handlers::enhance_image))
            .layer(DefaultBodyLimit::max(config.upload.max_size_bytes))
            .layer(axum::middleware::from_fn(
                service_core::middleware::metrics_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn build_chat_provider(
    kind: ProviderKind,
    config: &AnalysisConfig,
) -> Result<Arc<dyn ChatProvider>, AppError> {
    match kind {
        ProviderKind::Ollama => Ok(Arc::new(OllamaProvider::new(OllamaConfig {
            base_url: config.ollama.base_url.clone(),
            model: config.ollama.model.clone(),
        }))),
        ProviderKind::Openai => Ok(Arc::new(OpenAiProvider::new(openai_config(config)))),
        ProviderKind::Mock => Ok(Arc::new(MockChatProvider::new(true))),
        ProviderKind::MockDisabled => Ok(Arc::new(MockChatProvider::new(false))),
        ProviderKind::Huggingface => Err(AppError::ConfigError(anyhow::anyhow!(
            "Hugging Face is not a chat provider"
        ))),
    }
}

fn openai_config(config: &AnalysisConfig) -> OpenAiConfig {
    OpenAiConfig {
        api_key: config.openai.api_key.clone(),
        base_url: config.openai.base_url.clone(),
        chat_model: config.openai.chat_model.clone(),
        transcribe_model: config.openai.transcribe_model.clone(),
    }
}
