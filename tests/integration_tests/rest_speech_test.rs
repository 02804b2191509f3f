use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use relingua::application::ports::{
    SpeechRecognizer, SpeechRecognizerError, SpeechSynthesizer, SpeechSynthesizerError,
};
use relingua::domain::{
    AudioFormat, Job, JobName, JobStatus, MediaFormat, MediaUri, StoragePath,
};
use relingua::infrastructure::audio::{RestSpeechRecognizer, RestSpeechSynthesizer};

async fn serve(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
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

fn recognizer_app(started: Arc<Mutex<Vec<Value>>>) -> Router {
    Router::new()
        .route(
            "/transcription-jobs",
            post(move |Json(body): Json<Value>| {
                let started = started.clone();
                async move {
                    started.lock().unwrap().push(body);
                    StatusCode::ACCEPTED
                }
            }),
        )
        .route(
            "/transcription-jobs/{name}",
            get(|Path(name): Path<String>| async move {
                match name.as_str() {
                    "done" => Json(json!({"status": "COMPLETED"})).into_response(),
                    "queued" => Json(json!({"status": "PENDING"})).into_response(),
                    "broken" => Json(json!({
                        "status": "FAILED",
                        "failure_reason": "media unreadable"
                    }))
                    .into_response(),
                    "weird" => Json(json!({"status": "PAUSED"})).into_response(),
                    _ => (StatusCode::NOT_FOUND, "no such job").into_response(),
                }
            }),
        )
}

#[tokio::test]
async fn given_job_when_starting_then_posts_media_and_output_details() {
    let started = Arc::new(Mutex::new(Vec::new()));
    let (base_url, shutdown_tx) = serve(recognizer_app(started.clone())).await;
    let recognizer = RestSpeechRecognizer::new(&base_url, None);
    let job = Job::new(
        MediaUri::new("media-bucket", StoragePath::from_raw("talks/a.wav")),
        StoragePath::from_raw("transcribed.txt"),
        MediaFormat::Wav,
        "en-US",
    );

    recognizer.start_job(&job).await.unwrap();

    let bodies = started.lock().unwrap().clone();
    assert_eq!(bodies[0]["job_name"], job.name.as_str());
    assert_eq!(bodies[0]["media_uri"], "s3://media-bucket/talks/a.wav");
    assert_eq!(bodies[0]["media_format"], "wav");
    assert_eq!(bodies[0]["output_key"], "transcribed.txt");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_status_responses_when_polling_then_maps_to_job_snapshots() {
    let (base_url, shutdown_tx) = serve(recognizer_app(Arc::new(Mutex::new(Vec::new())))).await;
    let recognizer = RestSpeechRecognizer::new(&base_url, None);

    let done = recognizer.job_status(&JobName::from_raw("done")).await.unwrap();
    let queued = recognizer
        .job_status(&JobName::from_raw("queued"))
        .await
        .unwrap();
    let broken = recognizer
        .job_status(&JobName::from_raw("broken"))
        .await
        .unwrap();

    assert_eq!(done.status, JobStatus::Completed);
    assert_eq!(queued.status, JobStatus::Queued);
    assert_eq!(broken.status, JobStatus::Failed);
    assert_eq!(broken.failure_reason.as_deref(), Some("media unreadable"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unknown_job_when_polling_then_returns_job_not_found() {
    let (base_url, shutdown_tx) = serve(recognizer_app(Arc::new(Mutex::new(Vec::new())))).await;
    let recognizer = RestSpeechRecognizer::new(&base_url, None);

    let result = recognizer.job_status(&JobName::from_raw("missing")).await;

    assert!(matches!(result, Err(SpeechRecognizerError::JobNotFound(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unknown_status_value_when_polling_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = serve(recognizer_app(Arc::new(Mutex::new(Vec::new())))).await;
    let recognizer = RestSpeechRecognizer::new(&base_url, None);

    let result = recognizer.job_status(&JobName::from_raw("weird")).await;

    assert!(matches!(
        result,
        Err(SpeechRecognizerError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

fn synthesizer_app() -> Router {
    Router::new().route(
        "/synthesize",
        post(|Json(body): Json<Value>| async move {
            let text = body["text"].as_str().unwrap_or_default().to_string();
            if text.len() > 20 {
                return (StatusCode::PAYLOAD_TOO_LARGE, "too long").into_response();
            }
            let voice = body["voice_id"].as_str().unwrap_or_default();
            let format = body["output_format"].as_str().unwrap_or_default();
            format!("{}|{}|{}", voice, format, text).into_response()
        }),
    )
}

#[tokio::test]
async fn given_text_when_synthesizing_then_returns_audio_bytes() {
    let (base_url, shutdown_tx) = serve(synthesizer_app()).await;
    let synthesizer = RestSpeechSynthesizer::new(&base_url, None);

    let audio = synthesizer
        .synthesize("namaste", "Aditi", AudioFormat::OggVorbis)
        .await
        .unwrap();

    assert_eq!(&audio[..], b"Aditi|ogg_vorbis|namaste");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_oversized_text_when_synthesizing_then_returns_text_too_long() {
    let (base_url, shutdown_tx) = serve(synthesizer_app()).await;
    let synthesizer = RestSpeechSynthesizer::new(&base_url, None);

    let result = synthesizer
        .synthesize("this sentence is far too long", "Aditi", AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(SpeechSynthesizerError::TextTooLong(29))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_closed_port_when_synthesizing_then_returns_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let synthesizer = RestSpeechSynthesizer::new(&format!("http://{}", addr), None);

    let result = synthesizer.synthesize("hi", "Aditi", AudioFormat::Mp3).await;

    assert!(matches!(result, Err(SpeechSynthesizerError::Unreachable(_))));
}
