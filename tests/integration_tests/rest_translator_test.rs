use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use relingua::application::ports::{Translator, TranslatorError};
use relingua::infrastructure::language::RestTranslator;

async fn start_mock_translator(response_status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate",
        post(move |Json(body): Json<Value>| async move {
            let status = StatusCode::from_u16(response_status).unwrap();
            if !status.is_success() {
                return (status, "unsupported pair").into_response();
            }
            let text = body["text"].as_str().unwrap_or_default();
            let target = body["target_language_code"].as_str().unwrap_or_default();
            Json(json!({ "translated_text": format!("{}:{}", target, text) })).into_response()
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

#[tokio::test]
async fn given_text_when_translating_then_returns_translated_text() {
    let (base_url, shutdown_tx) = start_mock_translator(200).await;
    let translator = RestTranslator::new(&base_url, None);

    let translated = translator.translate("hello", "en", "hi").await.unwrap();

    assert_eq!(translated, "hi:hello");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unprocessable_pair_when_translating_then_returns_unsupported_language_pair() {
    let (base_url, shutdown_tx) = start_mock_translator(422).await;
    let translator = RestTranslator::new(&base_url, None);

    let result = translator.translate("hello", "en", "xx").await;

    assert!(matches!(
        result,
        Err(TranslatorError::UnsupportedLanguagePair(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_base_url_with_trailing_slash_when_translating_then_still_hits_endpoint() {
    let (base_url, shutdown_tx) = start_mock_translator(200).await;
    let translator = RestTranslator::new(&format!("{}/", base_url), None);

    let translated = translator.translate("x", "en", "de").await.unwrap();

    assert_eq!(translated, "de:x");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_closed_port_when_translating_then_returns_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let translator = RestTranslator::new(&format!("http://{}", addr), None);

    let result = translator.translate("hello", "en", "hi").await;

    assert!(matches!(result, Err(TranslatorError::Unreachable(_))));
}
