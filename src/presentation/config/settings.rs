use std::path::PathBuf;

/// Process configuration, read once at startup from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub uploads: UploadSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    /// `*` allows any origin; anything else is treated as an exact origin.
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    /// Missing credentials are not a startup failure; they surface as a
    /// provider 401 on the first transcription attempt.
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let allowed_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./uploads"));

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let base_url = std::env::var("OPENAI_BASE_URL").ok();
        let model = std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "whisper-1".to_string());

        Self {
            server: ServerSettings { port },
            cors: CorsSettings { allowed_origin },
            uploads: UploadSettings {
                dir,
                max_file_size_mb: 50,
            },
            transcription: TranscriptionSettings {
                api_key,
                base_url,
                model,
            },
        }
    }
}
