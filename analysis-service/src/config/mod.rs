use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

/// Default cap on uploaded payloads (20MB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub upload: UploadConfig,
    pub ocr: OcrConfig,
    pub chat: ChatRoutingConfig,
    pub ollama: OllamaSettings,
    pub openai: OpenAiSettings,
    pub huggingface: HuggingFaceSettings,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub engine: OcrEngineKind,
    pub command: String,
    pub timeout_secs: u64,
    /// Canned output for the mock engine (tests, provider-less dev setups).
    pub mock_text: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngineKind {
    Tesseract,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRoutingConfig {
    pub primary: ProviderKind,
    pub fallback: Option<ProviderKind>,
    pub transcription: ProviderKind,
    pub enhancement: ProviderKind,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ollama,
    Openai,
    Huggingface,
    Mock,
    /// Mock in its not-configured state; used to exercise fallback paths.
    MockDisabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub transcribe_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HuggingFaceSettings {
    pub api_token: String,
    pub enhance_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// How many recent analyses are folded into enhanced-chat context.
    pub context_rows: i64,
}

impl AnalysisConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        Ok(AnalysisConfig {
            common: common_config,
            database: DatabaseConfig {
                path: get_env("DATABASE_PATH", Some("data/analysis.db"), is_prod)?,
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
            ocr: OcrConfig {
                engine: get_env("OCR_ENGINE", Some("tesseract"), is_prod)?.parse()?,
                command: get_env("OCR_COMMAND", Some("tesseract"), is_prod)?,
                timeout_secs: get_env("OCR_TIMEOUT_SECS", Some("30"), is_prod)?
                    .parse()
                    .unwrap_or(30),
                mock_text: get_env("OCR_MOCK_TEXT", Some("12ft x 16ft"), is_prod)?,
            },
            chat: ChatRoutingConfig {
                primary: get_env("CHAT_PROVIDER", Some("ollama"), is_prod)?.parse()?,
                fallback: match get_env("CHAT_FALLBACK_PROVIDER", Some(""), is_prod)?.as_str() {
                    "" => None,
                    value => Some(value.parse()?),
                },
                transcription: get_env("TRANSCRIPTION_PROVIDER", Some("openai"), is_prod)?
                    .parse()?,
                enhancement: get_env("ENHANCEMENT_PROVIDER", Some("huggingface"), is_prod)?
                    .parse()?,
            },
            ollama: OllamaSettings {
                base_url: get_env("OLLAMA_BASE_URL", Some("http://localhost:11434"), is_prod)?,
                model: get_env("OLLAMA_MODEL", Some("llava-deckbot"), is_prod)?,
            },
            openai: OpenAiSettings {
                api_key: get_env("OPENAI_API_KEY", Some(""), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some("https://api.openai.com"), is_prod)?,
                chat_model: get_env("OPENAI_CHAT_MODEL", Some("gpt-4o-mini"), is_prod)?,
                transcribe_model: get_env("OPENAI_TRANSCRIBE_MODEL", Some("whisper-1"), is_prod)?,
            },
            huggingface: HuggingFaceSettings {
                api_token: get_env("HF_API_TOKEN", Some(""), is_prod)?,
                enhance_url: get_env(
                    "HF_ENHANCE_URL",
                    Some("https://api-inference.huggingface.co/models/nvidia/difix"),
                    is_prod,
                )?,
            },
            retrieval: RetrievalConfig {
                context_rows: get_env("CHAT_CONTEXT_ROWS", Some("5"), is_prod)?
                    .parse()
                    .unwrap_or(5),
            },
        })
    }
}

impl std::str::FromStr for OcrEngineKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tesseract" => Ok(OcrEngineKind::Tesseract),
            "mock" => Ok(OcrEngineKind::Mock),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Invalid OCR engine: {}",
                other
            ))),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "openai" => Ok(ProviderKind::Openai),
            "huggingface" => Ok(ProviderKind::Huggingface),
            "mock" => Ok(ProviderKind::Mock),
            "mock-disabled" => Ok(ProviderKind::MockDisabled),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Invalid provider: {}",
                other
            ))),
        }
    }
}
