use crate::config::ChatbotConfig;
use crate::handlers;
use crate::services::{AnalysisClient, Database, LocalStorage, Storage};
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
    pub config: ChatbotConfig,
    pub db: Database,
    pub storage: Arc<dyn Storage>,
    pub analysis: AnalysisClient,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ChatbotConfig) -> Result<Self, AppError> {
        let db = Database::connect(&config.database.path).await?;
        db.initialize_schema().await?;

        let storage: Arc<dyn Storage> = Arc::new(
            LocalStorage::new(&config.storage.local_path)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to initialize local storage at {}: {}",
                        config.storage.local_path,
                        e
                    );
                    e
                })?,
        );

        let analysis = AnalysisClient::new(
            &config.analysis.base_url,
            Duration::from_secs(config.analysis.timeout_secs),
        );

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            storage,
            analysis,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/uploads", post(handlers::upload).get(handlers::list_uploads))
            .route("/uploads/:upload_id", get(handlers::download_upload))
            .route("/analyze-image", post(handlers::analyze_image))
            .route("/bot-query", post(handlers::bot_query))
            .route("/chat", post(handlers::chat))
            .route("/chat/:session_id", get(handlers::session_history))
            .route("/deck/materials", post(handlers::deck_materials))
            .route("/deck/skirting", post(handlers::deck_skirting))
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
