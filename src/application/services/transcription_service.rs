use std::sync::Arc;

use crate::application::ports::{
    ScratchStore, ScratchStoreError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::UploadedFile;

/// Orchestrates one transcription round-trip: read the stored upload, hand
/// it to the engine, and delete the scratch file on every exit path.
pub struct TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    scratch_store: Arc<dyn ScratchStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error(transparent)]
    Engine(#[from] TranscriptionError),
    #[error("stored upload could not be read: {0}")]
    Scratch(#[from] ScratchStoreError),
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    pub fn new(engine: Arc<E>, scratch_store: Arc<dyn ScratchStore>) -> Self {
        Self {
            engine,
            scratch_store,
        }
    }

    /// Cleanup runs exactly once whatever the outcome. A deletion failure is
    /// logged and never escalated into a request failure.
    pub async fn transcribe_file(
        &self,
        upload: &UploadedFile,
    ) -> Result<String, TranscriptionServiceError> {
        let result = self.transcribe_inner(upload).await;

        if let Err(e) = self.scratch_store.delete(&upload.path).await {
            tracing::warn!(path = %upload.path, error = %e, "Failed to delete scratch file");
        }

        result
    }

    async fn transcribe_inner(
        &self,
        upload: &UploadedFile,
    ) -> Result<String, TranscriptionServiceError> {
        let audio_data = self.scratch_store.fetch(&upload.path).await?;

        tracing::debug!(
            path = %upload.path,
            bytes = audio_data.len(),
            "Delegating stored upload to transcription engine"
        );

        let text = self
            .engine
            .transcribe(&audio_data, upload.path.as_str())
            .await?;

        Ok(text)
    }
}
