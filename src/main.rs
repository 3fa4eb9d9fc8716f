use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use scribe::application::ports::ScratchStore;
use scribe::application::services::TranscriptionService;
use scribe::infrastructure::audio::OpenAiWhisperEngine;
use scribe::infrastructure::observability::{TracingConfig, init_tracing};
use scribe::infrastructure::storage::LocalScratchStore;
use scribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let scratch_store: Arc<dyn ScratchStore> =
        Arc::new(LocalScratchStore::new(settings.uploads.dir.clone())?);

    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        Some(settings.transcription.model.clone()),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        engine,
        Arc::clone(&scratch_store),
    ));

    let state = AppState {
        transcription_service,
        scratch_store,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
