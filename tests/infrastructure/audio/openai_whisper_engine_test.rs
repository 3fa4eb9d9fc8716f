use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use scribe::application::ports::{TranscriptionEngine, TranscriptionError};
use scribe::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_openai_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn engine_for(base_url: &str) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url.to_string()), None)
}

#[tokio::test]
async fn given_valid_audio_bytes_when_transcribing_then_returns_text() {
    let response_body = r#"{"text": "hello world"}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(200, response_body).await;

    let result = engine_for(&base_url)
        .transcribe(b"fake audio bytes", "1699999999999_clip.wav")
        .await;

    assert_eq!(result.unwrap(), "hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_text_field_when_transcribing_then_returns_empty_string() {
    let response_body = r#"{}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(200, response_body).await;

    let result = engine_for(&base_url)
        .transcribe(b"silent audio", "1699999999999_silence.wav")
        .await;

    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_quota_exhausted_when_transcribing_then_returns_upstream_429_with_envelope_message() {
    let response_body =
        r#"{"error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(429, response_body).await;

    let result = engine_for(&base_url)
        .transcribe(b"audio", "1699999999999_clip.mp3")
        .await;

    match result {
        Err(TranscriptionError::Upstream { code, message }) => {
            assert_eq!(code, 429);
            assert_eq!(message, "You exceeded your current quota");
        }
        other => panic!("expected upstream 429, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_invalid_credential_when_transcribing_then_returns_upstream_401() {
    let response_body = r#"{"error": {"message": "Incorrect API key provided"}}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(401, response_body).await;

    let result = engine_for(&base_url)
        .transcribe(b"audio", "1699999999999_clip.mp3")
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::Upstream { code: 401, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_error_body_when_transcribing_then_raw_body_is_kept() {
    let response_body = "service temporarily unavailable";
    let (base_url, shutdown_tx) = start_mock_openai_server(503, response_body).await;

    let result = engine_for(&base_url)
        .transcribe(b"audio", "1699999999999_clip.ogg")
        .await;

    match result {
        Err(TranscriptionError::Upstream { code, message }) => {
            assert_eq!(code, 503);
            assert_eq!(message, "service temporarily unavailable");
        }
        other => panic!("expected upstream 503, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_provider_when_transcribing_then_returns_transport_error() {
    let result = engine_for("http://127.0.0.1:1")
        .transcribe(b"audio", "1699999999999_clip.wav")
        .await;

    assert!(matches!(result, Err(TranscriptionError::Transport(_))));
}
