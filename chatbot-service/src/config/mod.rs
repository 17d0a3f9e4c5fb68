use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

/// Default cap on uploaded files (20MB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatbotConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub analysis: AnalysisServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ChatbotConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        Ok(ChatbotConfig {
            common: common_config,
            database: DatabaseConfig {
                path: get_env("DATABASE_PATH", Some("data/chatbot.db"), is_prod)?,
            },
            storage: StorageConfig {
                local_path: get_env("STORAGE_LOCAL_PATH", Some("uploads"), is_prod)?,
            },
            upload: UploadConfig {
                max_size_bytes: get_env(
                    "UPLOAD_MAX_SIZE_BYTES",
                    Some(&DEFAULT_MAX_UPLOAD_BYTES.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
            analysis: AnalysisServiceConfig {
                base_url: get_env(
                    "ANALYSIS_SERVICE_URL",
                    Some("http://analysis-service:8081"),
                    is_prod,
                )?,
                timeout_secs: get_env("ANALYSIS_TIMEOUT_SECS", Some("300"), is_prod)?
                    .parse()
                    .unwrap_or(300),
            },
        })
    }
}
