use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde::Serialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::application::services::TranscriptionServiceError;
use crate::domain::{ScratchPath, UploadedFile};
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";

const ACCEPTED_FORMATS: &str = "flac, m4a, mp3, mp4, mpeg, mpga, oga, ogg, wav, webm";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E>(
    State(state): State<AppState<E>>,
    mut multipart: Multipart,
) -> Response
where
    E: TranscriptionEngine + 'static,
{
    // Find the `audio` field; other fields are drained and ignored.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(AUDIO_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Transcribe request with no audio file");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("No file uploaded")),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
                )
                    .into_response();
            }
        }
    };

    let original_name = field.file_name().unwrap_or("audio").to_string();
    let received_at_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let path = ScratchPath::for_upload(&original_name, received_at_millis);

    tracing::debug!(original_name = %original_name, stored_as = %path, "Storing upload");

    let stream = futures::stream::try_unfold(field, |mut field| async move {
        match field.chunk().await {
            Ok(Some(bytes)) => Ok(Some((bytes, field))),
            Ok(None) => Ok(None),
            Err(e) => Err(io::Error::other(e)),
        }
    })
    .boxed();

    let size_bytes = match state.scratch_store.store(&path, stream).await {
        Ok(n) => n,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to store upload")),
            )
                .into_response();
        }
    };

    let upload = UploadedFile {
        path,
        original_name,
        size_bytes,
    };

    // Detached from the connection: a client disconnect must not cancel the
    // upstream call or skip cleanup of the scratch file.
    let service = Arc::clone(&state.transcription_service);
    let outcome = tokio::spawn(async move { service.transcribe_file(&upload).await }).await;

    match outcome {
        Ok(Ok(text)) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Ok(Err(e)) => upstream_failure_response(&e),
        Err(e) => {
            tracing::error!(error = %e, "Transcription task failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::with_details(
                    "Transcription service error",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

struct UpstreamFailure {
    code: Option<u16>,
    message: String,
}

/// Collapses any service failure into a status code plus message before the
/// single dispatch below; no branch inspects the error shape twice.
fn normalize_failure(err: &TranscriptionServiceError) -> UpstreamFailure {
    match err {
        TranscriptionServiceError::Engine(TranscriptionError::Upstream { code, message }) => {
            UpstreamFailure {
                code: Some(*code),
                message: message.clone(),
            }
        }
        TranscriptionServiceError::Engine(TranscriptionError::Transport(message)) => {
            UpstreamFailure {
                code: None,
                message: message.clone(),
            }
        }
        TranscriptionServiceError::Scratch(e) => UpstreamFailure {
            code: None,
            message: e.to_string(),
        },
    }
}

fn upstream_failure_response(err: &TranscriptionServiceError) -> Response {
    let failure = normalize_failure(err);

    tracing::warn!(
        code = failure.code,
        message = %failure.message,
        "Transcription failed"
    );

    let (status, body) = match failure.code {
        Some(429) => (
            StatusCode::TOO_MANY_REQUESTS,
            ErrorResponse::new("Transcription quota exceeded; check provider billing and rate limits"),
        ),
        Some(401) => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("Invalid or missing transcription API key"),
        ),
        Some(400) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(format!(
                "Unsupported audio format; accepted formats: {}",
                ACCEPTED_FORMATS
            )),
        ),
        _ => (
            StatusCode::BAD_GATEWAY,
            ErrorResponse::with_details("Transcription service error", failure.message),
        ),
    };

    (status, Json(body)).into_response()
}
