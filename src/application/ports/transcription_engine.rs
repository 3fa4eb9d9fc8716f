use async_trait::async_trait;

/// External capability that turns an audio byte stream into text.
///
/// `file_name` carries the (sanitized) original extension so the provider
/// can infer the audio container format. Injectable so the request handler
/// can be exercised against a test double.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionError>;
}

/// Engine failure, normalized at the adapter boundary: either the provider
/// answered with a non-success status, or the request never completed.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("upstream returned status {code}: {message}")]
    Upstream { code: u16, message: String },
    #[error("transcription request failed: {0}")]
    Transport(String),
}
