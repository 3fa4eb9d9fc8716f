use std::sync::Arc;

use crate::application::ports::{ScratchStore, TranscriptionEngine};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<E>
where
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<E>>,
    pub scratch_store: Arc<dyn ScratchStore>,
    pub settings: Settings,
}

impl<E> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            scratch_store: Arc::clone(&self.scratch_store),
            settings: self.settings.clone(),
        }
    }
}
